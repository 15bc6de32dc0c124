//=========================================================================
// Scene Objects
//=========================================================================
//
// Capability traits for game objects plus the registry that drives
// them each tick.
//
// Objects declare what they can do through small traits (update, move,
// collide, draw) instead of one fat base trait. The registry asks each
// object which capabilities it has and runs the per-tick passes over
// the ones that answer.
//
// Flow (per tick):
//   update_pass → force_pass → collision_pass → integrate_pass → draw_list
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::message_bus::MessageBus;
use crate::core::texture::TexId;

//=== Module Declarations =================================================

mod bounds;
mod collision;
mod registry;

//=== Public API ==========================================================

pub use bounds::BoundingRect;
pub use collision::{CollisionCategory, CollisionContact, CollisionSide};
pub use registry::{ObjectRegistry, SceneObjectId};

//=== Capability Traits ===================================================

/// Objects that run logic every tick (animation counters, timers).
pub trait Updateable {
    fn update(&mut self, tick: Duration, messages: &mut MessageBus);
}

/// Objects moved by the registry's physics passes.
///
/// The registry applies gravity and friction (scaled by the object's
/// coefficients), lets the collision pass adjust the velocity, then
/// integrates position and calls `on_moved`.
pub trait Movable {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);

    /// How strongly gravity pulls this object. 0.0 disables gravity.
    fn gravity_coefficient(&self) -> f32 {
        1.0
    }

    /// How strongly horizontal friction slows this object. 0.0 disables it.
    fn friction_coefficient(&self) -> f32 {
        1.0
    }

    /// Called after the registry integrates position for this tick.
    fn on_moved(&mut self, _messages: &mut MessageBus) {}
}

/// Objects that take part in the collision pass.
pub trait Collidable {
    /// Bounds at the current position.
    fn current_bounds(&self) -> BoundingRect;

    /// Bounds after this tick's velocity is applied.
    ///
    /// The collision pass works on next-frame bounds so velocity can
    /// be corrected before the object ever penetrates.
    fn next_bounds(&self) -> BoundingRect;

    /// Sides of this object that accept contacts.
    fn side(&self) -> CollisionSide {
        CollisionSide::ALL
    }

    fn category(&self) -> CollisionCategory;

    /// Categories this object reacts to.
    fn category_mask(&self) -> CollisionCategory;

    /// Called once per resolved contact.
    ///
    /// `adjustment` is a unit vector on the axis of least penetration,
    /// pointing in the direction this object should be pushed.
    fn collision_detected(
        &mut self,
        contact: CollisionContact,
        intersection: BoundingRect,
        adjustment: Vec2,
    );
}

/// Objects with a renderable sprite.
pub trait Drawable {
    fn is_visible(&self) -> bool;

    /// Lower orders draw first (background to foreground).
    fn draw_order(&self) -> i32;

    fn sprite(&self) -> SpriteInstance;
}

//=== Sprite Instance =====================================================

/// One sprite as a future renderer would consume it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInstance {
    pub texture: TexId,
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

//=== Scene Object ========================================================

/// A registered game object.
///
/// Each accessor returns `Some` for the capabilities the object
/// implements. The default implementations opt out of everything, so
/// an object only overrides the accessors for traits it carries.
pub trait SceneObject: Send {
    fn as_updateable(&mut self) -> Option<&mut dyn Updateable> {
        None
    }

    fn as_movable(&mut self) -> Option<&mut dyn Movable> {
        None
    }

    fn as_collidable(&self) -> Option<&dyn Collidable> {
        None
    }

    fn as_collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
        None
    }

    fn as_drawable(&self) -> Option<&dyn Drawable> {
        None
    }
}
