//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps raw inputs to game actions based on configured bindings.
//
// Architecture:
//   (key/button, modifiers) → HashMap → Action
//
// Bindings are driven by the persisted settings record at game init;
// rebinding a key is an unbind + bind.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::{HashMap, HashSet};

//=== Internal Dependencies ===============================================

use super::action::Action;
use super::event::{KeyCode, Modifiers, MouseButton};
use super::state_tracker::StateTracker;

//=== ActionMapper ========================================================

/// Maps inputs to actions via `(key/button, modifiers)` lookups.
///
/// Two kinds of queries are derived from a [`StateTracker`]:
/// - *triggered*: the bound key transitioned UP → DOWN this frame
/// - *held*: the bound key is currently down
pub(crate) struct ActionMapper<A: Action> {
    /// Key bindings: (key, modifiers) → action
    key_bindings: HashMap<(KeyCode, Modifiers), A>,

    /// Mouse button bindings: (button, modifiers) → action
    mouse_bindings: HashMap<(MouseButton, Modifiers), A>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a new mapper with no bindings.
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            mouse_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action (no modifiers).
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) {
        self.bind_key_with_mods(key, Modifiers::NONE, action);
    }

    /// Binds a key with modifiers to an action (exact match required).
    pub(crate) fn bind_key_with_mods(&mut self, key: KeyCode, modifiers: Modifiers, action: A) {
        self.key_bindings.insert((key, modifiers), action);
    }

    /// Binds a mouse button to an action (no modifiers).
    pub(crate) fn bind_mouse(&mut self, button: MouseButton, action: A) {
        self.mouse_bindings.insert((button, Modifiers::NONE), action);
    }

    /// Removes a key binding without modifiers (modified variants survive).
    pub(crate) fn unbind_key(&mut self, key: KeyCode) {
        self.key_bindings.remove(&(key, Modifiers::NONE));
    }

    /// Removes ALL bindings that resolve to `action`.
    ///
    /// Used when re-applying settings: the action keeps its identity
    /// while the physical key changes underneath it.
    pub(crate) fn unbind_action(&mut self, action: A) {
        self.key_bindings.retain(|_, a| *a != action);
        self.mouse_bindings.retain(|_, a| *a != action);
    }

    /// Removes every binding.
    pub(crate) fn clear(&mut self) {
        self.key_bindings.clear();
        self.mouse_bindings.clear();
    }

    //--- Lookup -----------------------------------------------------------

    /// Maps a key press to an action.
    pub(super) fn map_key(&self, key: KeyCode, modifiers: Modifiers) -> Option<A> {
        self.key_bindings.get(&(key, modifiers)).copied()
    }

    /// Maps a mouse button press to an action.
    pub(super) fn map_button(&self, button: MouseButton, modifiers: Modifiers) -> Option<A> {
        self.mouse_bindings.get(&(button, modifiers)).copied()
    }

    //--- Derived Queries --------------------------------------------------

    /// Collects actions whose bound input transitioned UP → DOWN this frame.
    pub(crate) fn triggered(&self, tracker: &StateTracker, out: &mut Vec<A>) {
        let mods = tracker.modifiers();

        for key in tracker.keys_pressed() {
            if let Some(action) = self.map_key(key, mods) {
                out.push(action);
            }
        }
        for button in tracker.buttons_pressed() {
            if let Some(action) = self.map_button(button, mods) {
                out.push(action);
            }
        }
    }

    /// Collects actions whose bound input is currently held.
    ///
    /// Modifier state is deliberately ignored for held queries: a
    /// movement key must not cut out because Shift went down mid-walk.
    pub(crate) fn held(&self, tracker: &StateTracker, out: &mut HashSet<A>) {
        for (&(key, _), &action) in &self.key_bindings {
            if tracker.is_key_down(key) {
                out.insert(action);
            }
        }
        for (&(button, _), &action) in &self.mouse_bindings {
            if tracker.is_button_down(button) {
                out.insert(action);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
