//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and stack-based scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene>>
//     └─ stack: Vec<S>
//
// Flow:
//   handle_input() → topmost scene only
//   update() → collect_active_scenes() → Scene::update()
//   process_transitions() → drain TransitionQueue, mutate stack
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::Action;

//=== Module Declarations =================================================

mod manager;
mod transition;
mod transition_queue;

//=== Public API ==========================================================

pub use manager::{SceneManager, SceneTransition};
pub use transition::{Transition, TransitionState};
pub use transition_queue::TransitionQueue;

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the SceneManager's HashMap.
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + std::hash::Hash + std::fmt::Debug + Send + 'static {}

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and update logic.
///
/// Scenes are registered in SceneManager and activated via the scene
/// stack. Each scene maintains its own state between activations.
///
/// Input routing: only the scene on top of the stack receives
/// `handle_input`. Updates flow to every scene from the top down to
/// (and including) the first non-popup scene, so a popup pauses input
/// for the scene below it without freezing that scene's simulation
/// unless the game wants it to.
///
/// # Minimal Implementation
///
/// Only `update()` is required. The other hooks have default empty
/// implementations:
///
/// ```rust
/// # use cutlass::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameScene { Main }
/// # impl SceneKey for GameScene {}
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameAction { Quit }
/// # impl Action for GameAction {}
/// struct MyScene;
///
/// impl Scene<GameScene, GameAction> for MyScene {
///     fn update(&mut self, context: &mut GlobalContext<GameScene, GameAction>) {
///         // Only this method is required
///     }
/// }
/// ```
pub trait Scene<S: SceneKey, A: Action>: Send {
    /// Called when the scene enters the active stack.
    fn on_enter(&mut self, _context: &mut GlobalContext<S, A>) {}

    /// Called when the scene exits the active stack.
    fn on_exit(&mut self, _context: &mut GlobalContext<S, A>) {}

    /// Called every tick while this scene is on top of the stack.
    ///
    /// This is where scenes consume triggered and held actions. Scenes
    /// below the top never see input, which keeps a popup's bindings
    /// from leaking into the scene it covers.
    fn handle_input(&mut self, _context: &mut GlobalContext<S, A>) {}

    /// Called every tick while the scene is active on the stack.
    fn update(&mut self, context: &mut GlobalContext<S, A>);

    /// Whether this scene only partially covers the one below it.
    ///
    /// Popup scenes (message boxes, pause overlays) leave the scene
    /// underneath in the active set. Non-popup scenes block updates to
    /// everything below them on the stack.
    fn is_popup(&self) -> bool {
        false
    }
}
