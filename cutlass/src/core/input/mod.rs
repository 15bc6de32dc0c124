//=========================================================================
// Input System
//
// High-level interface for input handling within the engine.
//
// Responsibilities:
// - Feed per-frame event batches into the persistent `StateTracker`
// - Resolve configured bindings into triggered actions each tick
// - Answer held-action queries for continuous input (movement keys)
//
// Notes:
// This system is owned by `GlobalSystems` and updated once per tick by
// the core orchestrator. Raw state queries remain available through the
// `StateTracker` held in `GlobalContext` for code that wants keys, not
// actions.
//
//=========================================================================

//=== Submodules ==========================================================

mod action;
mod action_mapper;
pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use action::Action;
pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;

//=== Internal Imports ====================================================

use std::collections::HashSet;

use action_mapper::ActionMapper;
use log::trace;

//=== InputSystem =========================================================

/// Owns the engine's action bindings and derives per-tick action sets.
///
/// The game configures bindings during [`crate::Engine::init`], usually
/// straight from its settings record, and queries actions from scene
/// code through [`crate::core::globals::GlobalContext`].
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
    triggered: Vec<A>,
    held: HashSet<A>,
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
            triggered: Vec::new(),
            held: HashSet::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action (no modifiers).
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.mapper.bind_key(key, action);
    }

    /// Binds a key with modifiers to an action (exact match required).
    pub fn bind_key_with_mods(&mut self, key: KeyCode, modifiers: Modifiers, action: A) {
        self.mapper.bind_key_with_mods(key, modifiers, action);
    }

    /// Binds a mouse button to an action (no modifiers).
    pub fn bind_mouse(&mut self, button: MouseButton, action: A) {
        self.mapper.bind_mouse(button, action);
    }

    /// Removes a key binding without modifiers.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.mapper.unbind_key(key);
    }

    /// Removes every binding that resolves to `action`.
    pub fn rebind(&mut self, action: A, key: KeyCode) {
        self.mapper.unbind_action(action);
        self.mapper.bind_key(key, action);
    }

    /// Removes all bindings.
    pub fn clear_bindings(&mut self) {
        self.mapper.clear();
    }

    //--- Per-Tick Processing ----------------------------------------------

    /// Feeds the frame's event batches into the tracker and recomputes
    /// the triggered action set.
    ///
    /// Called once per tick by the orchestrator, before scenes run.
    pub(crate) fn process_frame(
        &mut self,
        tracker: &mut StateTracker,
        batches: &[Vec<InputEvent>],
    ) {
        tracker.clear();
        for batch in batches {
            tracker.process_events(batch);
        }

        self.triggered.clear();
        self.mapper.triggered(tracker, &mut self.triggered);

        self.held.clear();
        self.mapper.held(tracker, &mut self.held);

        if !self.triggered.is_empty() {
            trace!(target: "input", "Triggered actions: {:?}", self.triggered);
        }
    }

    //--- Query API --------------------------------------------------------

    /// Actions whose bound input was freshly pressed this tick.
    pub fn triggered(&self) -> &[A] {
        &self.triggered
    }

    /// Returns `true` if any input bound to `action` is currently held.
    pub fn is_held(&self, action: A) -> bool {
        self.held.contains(&action)
    }

    /// Actions whose bound input is currently down, as of the last frame.
    pub(crate) fn held_set(&self) -> &HashSet<A> {
        &self.held
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Jump,
        MoveRight,
    }

    impl Action for TestAction {}

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn process_frame_collects_triggered_actions() {
        let mut system = InputSystem::new();
        let mut tracker = StateTracker::new();
        system.bind_key(KeyCode::Space, TestAction::Jump);

        system.process_frame(&mut tracker, &[vec![key_down(KeyCode::Space)]]);

        assert_eq!(system.triggered(), &[TestAction::Jump]);
    }

    #[test]
    fn triggered_resets_each_tick_while_held_persists() {
        let mut system = InputSystem::new();
        let mut tracker = StateTracker::new();
        system.bind_key(KeyCode::ArrowRight, TestAction::MoveRight);

        system.process_frame(&mut tracker, &[vec![key_down(KeyCode::ArrowRight)]]);
        assert_eq!(system.triggered(), &[TestAction::MoveRight]);

        // Next tick: no events, key still down
        system.process_frame(&mut tracker, &[]);
        assert!(system.triggered().is_empty());
        assert!(system.is_held(TestAction::MoveRight));

        system.process_frame(&mut tracker, &[vec![key_up(KeyCode::ArrowRight)]]);
        assert!(!system.is_held(TestAction::MoveRight));
    }

    #[test]
    fn rebind_moves_action_to_new_key() {
        let mut system = InputSystem::new();
        let mut tracker = StateTracker::new();
        system.bind_key(KeyCode::Space, TestAction::Jump);

        system.rebind(TestAction::Jump, KeyCode::KeyW);

        system.process_frame(&mut tracker, &[vec![key_down(KeyCode::Space)]]);
        assert!(system.triggered().is_empty());

        system.process_frame(&mut tracker, &[vec![key_down(KeyCode::KeyW)]]);
        assert_eq!(system.triggered(), &[TestAction::Jump]);
    }

    #[test]
    fn multiple_batches_merge_into_one_frame() {
        let mut system = InputSystem::new();
        let mut tracker = StateTracker::new();
        system.bind_key(KeyCode::Space, TestAction::Jump);
        system.bind_key(KeyCode::ArrowRight, TestAction::MoveRight);

        system.process_frame(
            &mut tracker,
            &[
                vec![key_down(KeyCode::Space)],
                vec![key_down(KeyCode::ArrowRight)],
            ],
        );

        let mut triggered = system.triggered().to_vec();
        triggered.sort_by_key(|a| format!("{:?}", a));
        assert_eq!(triggered, vec![TestAction::Jump, TestAction::MoveRight]);
    }
}
