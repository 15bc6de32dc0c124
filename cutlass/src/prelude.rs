//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cutlass::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::platform::WindowConfig;

// Global systems and context
pub use crate::core::globals::{ActionState, GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{Action, KeyCode, Modifiers, MouseButton, StateTracker};

// Scene system
pub use crate::core::scene::{
    Scene, SceneKey, SceneManager, SceneTransition, Transition, TransitionState,
};

// Message bus
pub use crate::core::message_bus::{Message, MessageBus};

// Scene objects
pub use crate::core::object::{
    BoundingRect, Collidable, CollisionCategory, CollisionContact, CollisionSide, Drawable,
    Movable, ObjectRegistry, SceneObject, SceneObjectId, SpriteInstance, Updateable,
};

// Settings persistence
pub use crate::core::settings::{GameSettings, SettingsError, SettingsStore};

// Texture registry
pub use crate::core::texture::{TexId, TextureCatalog};
