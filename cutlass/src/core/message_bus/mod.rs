//=========================================================================
// Message Bus
//=========================================================================
//
// Type-safe multi-consumer message queues for inter-system
// communication (moved notifications, popup outcomes, etc.).
//
// Pattern: push → read (N consumers) → the reading party clears the
// queue; single-shot producers clear before pushing.
//
//=========================================================================

//=== Module Declarations =================================================

mod bus;
mod queue;

//=== Public API ==========================================================

pub use bus::{Message, MessageBus};
