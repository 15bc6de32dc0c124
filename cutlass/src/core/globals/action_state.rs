//=========================================================================
// Action State
//=========================================================================
//
// Per-tick view of resolved input actions, as scenes consume them.
//
// Triggered = bound input freshly pressed this tick (edge).
// Held = bound input currently down (level).
//
// Refreshed once per tick from the InputSystem before scenes run.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use crate::core::input::Action;

//=== ActionState =========================================================

/// The actions scenes see this tick.
pub struct ActionState<A: Action> {
    triggered: Vec<A>,
    held: HashSet<A>,
}

impl<A: Action> ActionState<A> {
    pub(crate) fn new() -> Self {
        Self {
            triggered: Vec::new(),
            held: HashSet::new(),
        }
    }

    /// Replaces both sets with this tick's resolved actions.
    ///
    /// Called once per tick by the engine; public so game tests can
    /// stage action state without a real input pipeline.
    pub fn refresh(&mut self, triggered: &[A], held: &HashSet<A>) {
        self.triggered.clear();
        self.triggered.extend_from_slice(triggered);
        self.held.clone_from(held);
    }

    //--- Queries ----------------------------------------------------------

    /// True if `action` was freshly pressed this tick.
    pub fn is_triggered(&self, action: A) -> bool {
        self.triggered.contains(&action)
    }

    /// True if any input bound to `action` is currently down.
    pub fn is_down(&self, action: A) -> bool {
        self.held.contains(&action)
    }

    /// Actions freshly pressed this tick.
    pub fn triggered(&self) -> &[A] {
        &self.triggered
    }
}

//=== Tests ===============================================================
