//=========================================================================
// Message Bus
//=========================================================================
//
// Type-safe multi-consumer message queue for inter-system communication.
//
// Architecture:
//   Systems → push<M>() → HashMap<TypeId, Vec<M>>
//                              ↓
//   Multiple consumers ← read<M>() (shared)
//                              ↓
//   Consumers ──────────→ clear<M>() after reading
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::any::TypeId;
use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::queue::MessageQueue;

//=== Public API ==========================================================

/// Marker trait for types that can be sent through the MessageBus.
///
/// Automatically implemented for all types that are Send + 'static.
pub trait Message: Send + 'static {}

// Blanket implementation
impl<T: Send + 'static> Message for T {}

//=========================================================================

/// Type-safe message queue for batched inter-system communication.
///
/// Maintains separate queues per message type. Messages stay queued
/// until a consumer clears them, so a popup publishing its outcome and
/// a gameplay scene reading it the following tick is the canonical use.
/// Producers of single-shot notifications clear before pushing.
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn MessageQueue>>,
}

impl MessageBus {
    /// Creates a new empty message bus.
    pub fn new() -> Self {
        MessageBus {
            queues: HashMap::new(),
        }
    }

    //--- Message Operations -----------------------------------------------

    /// Pushes a message into the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        let type_id = TypeId::of::<M>();

        let boxed_queue: &mut Box<dyn MessageQueue> = self
            .queues
            .entry(type_id)
            .or_insert_with(|| Box::new(Vec::<M>::new()));

        let queue: &mut Vec<M> = boxed_queue
            .as_any_mut()
            .downcast_mut::<Vec<M>>()
            .expect("Type mismatch in MessageBus queue");

        queue.push(msg);
    }

    /// Returns a slice of all messages of type M currently queued.
    ///
    /// Supports multi-consumer reads: every system sees the same
    /// messages until someone clears the queue.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<M>>())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    //--- Query API --------------------------------------------------------

    /// Returns true if there are any messages of type M queued.
    pub fn has_messages<M: Message>(&self) -> bool {
        self.count::<M>() > 0
    }

    /// Returns the number of messages of type M currently queued.
    pub fn count<M: Message>(&self) -> usize {
        self.queues
            .get(&TypeId::of::<M>())
            .map(|q| q.len())
            .unwrap_or(0)
    }

    //--- Maintenance ------------------------------------------------------

    /// Clears all messages of type M, preserving allocated capacity.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear_queue();
        }
    }

    /// Clears all queues for all message types, preserving capacity.
    ///
    /// For scene resets; per-tick housekeeping belongs to the
    /// individual consumers via [`MessageBus::clear`].
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
