//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// Defines the contract for communication between platform and core
// threads.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core via MPSC.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for a frame.
    ///
    /// `discrete` keeps arrival order (key and button edges).
    /// `continuous` holds coalesced events (mouse movement).
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: if the event loop cannot be created or run, the
/// engine cannot run either.
#[derive(Debug, Error)]
pub(crate) enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(winit::error::EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(winit::error::EventLoopError),
}
