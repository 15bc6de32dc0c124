//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input, manage scenes, and coordinate
// game logic. Systems operate on GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{Action, InputSystem};
use crate::core::scene::{SceneKey, SceneManager};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// Holds systems that process data and coordinate engine behavior.
/// These systems operate on the shared GlobalContext during engine
/// updates.
///
/// # Available Systems
///
/// - `input`: High-level input system with action mapping
/// - `scene_manager`: Stack-based scene lifecycle manager
pub struct GlobalSystems<S: SceneKey, A: Action> {
    /// The input system for action mapping and input processing.
    ///
    /// Bindings are configured here during [`crate::Engine::init`],
    /// typically straight from the game's settings record.
    pub input: InputSystem<A>,

    /// The scene manager for scene lifecycle and stack management.
    pub scene_manager: SceneManager<S, A>,
}

impl<S: SceneKey, A: Action> GlobalSystems<S, A> {
    /// Creates a new systems container with default-initialized systems.
    ///
    /// Called internally by the engine. Users access systems via
    /// [`crate::Engine::init`] instead.
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    /// Runs the initial scene's on_enter before the first tick.
    pub(crate) fn start(&mut self, context: &mut GlobalContext<S, A>) {
        self.scene_manager.start(context);
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates all engine systems for the current tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input Processing**: Folds platform event batches into the
    ///    state tracker and resolves bindings
    /// 2. **Action Publishing**: Refreshes the context's triggered/held
    ///    action sets
    /// 3. **Input Routing**: Forwards input to the topmost scene
    /// 4. **Scene Update**: Updates all active scenes
    /// 5. **Transition Processing**: Applies queued scene transitions
    pub(crate) fn update(&mut self, context: &mut GlobalContext<S, A>) {
        // 1. Process input events into state and actions
        let batches = std::mem::take(&mut context.frame_events);
        self.input.process_frame(&mut context.input, &batches);

        // 2. Publish this tick's actions to the context
        context
            .actions
            .refresh(self.input.triggered(), self.input.held_set());

        // 3. Topmost scene consumes input
        self.scene_manager.handle_input(context);

        // 4. Update active scenes
        self.scene_manager.update(context);

        // 5. Process scene transitions
        self.scene_manager.process_transitions(context);
    }

    /// True once every scene has left the stack.
    ///
    /// The orchestrator uses this as its shutdown condition when the
    /// game clears the stack to quit.
    pub(crate) fn is_idle(&self) -> bool {
        self.scene_manager.is_stack_empty()
    }
}
