//=========================================================================
// Input Buffer
//
// Collects and normalizes raw input events (keyboard, mouse) into two
// categories: discrete and continuous. Acts as a transient event
// aggregator between the Platform and the core thread.
//
// Responsibilities:
// - Store incoming platform events per frame
// - Deduplicate repeated discrete inputs (e.g. key repeat)
// - Coalesce continuous inputs (e.g. MouseMoved)
// - Hand both categories to the flush via `drain()`
//
// Notes:
// The InputBuffer exists only for the current frame and is reset
// after being drained at the frame boundary.
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Modules ====================================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

/// Transient event store for one frame of input.
///
/// - `discrete`: ordered one-shot inputs (key and button edges)
/// - `continuous`: last-known state of continuous inputs (mouse moves)
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 128;
        const CONTINUOUS_BASE: usize = 16;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Intake -----------------------------------------------------

    /// Appends a discrete input. Consecutive duplicates are ignored so
    /// OS key repeat cannot flood the channel.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Inserts or replaces a continuous input. The latest event always
    /// replaces any previous one of the same kind.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    //--- Drain ------------------------------------------------------------

    /// Returns this frame's events and clears the buffer.
    ///
    /// Returns `None` when nothing was buffered, so empty frames send
    /// nothing over the channel.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.discrete.is_empty() && self.continuous.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let continuous: Vec<InputEvent> = self.continuous.drain().collect();
        Some((discrete, continuous))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
