//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - input: Low-level input state (keys, mouse, modifiers)
// - actions: This tick's resolved actions (triggered/held)
// - messages: Type-erased message bus for cross-scene events
// - scene_transitions: Command queue for scene changes
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::input::{Action, InputEvent, StateTracker};
use crate::core::message_bus::MessageBus;
use crate::core::scene::{SceneKey, TransitionQueue};

use super::ActionState;

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&mut GlobalContext` during their lifecycle methods.
/// This separates scene-accessible data from internal engine systems.
pub struct GlobalContext<S: SceneKey, A: Action> {
    /// Raw input state tracker for low-level input queries.
    ///
    /// For high-level action queries, use `actions` instead.
    pub input: StateTracker,

    /// This tick's resolved actions.
    pub actions: ActionState<A>,

    /// Message bus for cross-scene and cross-object events.
    pub messages: MessageBus,

    /// Transition queue for scene changes.
    ///
    /// Scenes queue transitions here during updates. The scene manager
    /// processes this queue at tick boundaries.
    pub scene_transitions: TransitionQueue<S>,

    /// Fixed duration of one logic tick.
    pub tick: Duration,

    /// Input events for the current frame.
    ///
    /// Populated by the platform thread and consumed by InputSystem
    /// during the update phase. Not directly accessible to scenes.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,
}

impl<S: SceneKey, A: Action> GlobalContext<S, A> {
    /// Creates a new context with empty state.
    ///
    /// The engine builds the context it passes to scenes; games only
    /// construct one directly when unit-testing scene logic.
    pub fn new(tick: Duration) -> Self {
        Self {
            input: StateTracker::new(),
            actions: ActionState::new(),
            messages: MessageBus::new(),
            scene_transitions: TransitionQueue::new(),
            tick,
            frame_events: Vec::new(),
        }
    }
}
