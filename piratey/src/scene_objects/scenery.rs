//=========================================================================
// Scenery
//
// Static level geometry: decks, docks, crow's nests. Never moves, never
// reacts to contacts, but everything that matters collides with it.
//
//=========================================================================

use glam::Vec2;

use cutlass::prelude::*;

//=== Scenery =============================================================

pub struct Scenery {
    bounds: BoundingRect,
    texture: TexId,
    side: CollisionSide,
}

impl Scenery {
    /// A solid block that collides on every side.
    pub fn new(bounds: BoundingRect, texture: TexId) -> Self {
        Self {
            bounds,
            texture,
            side: CollisionSide::ALL,
        }
    }

    /// Restricts which sides accept contacts (one-way platforms).
    pub fn with_side(mut self, side: CollisionSide) -> Self {
        self.side = side;
        self
    }

    #[cfg(test)]
    pub fn bounds(&self) -> BoundingRect {
        self.bounds
    }
}

//=== Capability Implementations ==========================================

impl Collidable for Scenery {
    fn current_bounds(&self) -> BoundingRect {
        self.bounds
    }

    fn next_bounds(&self) -> BoundingRect {
        self.bounds
    }

    fn side(&self) -> CollisionSide {
        self.side
    }

    fn category(&self) -> CollisionCategory {
        CollisionCategory::SCENERY
    }

    fn category_mask(&self) -> CollisionCategory {
        CollisionCategory::GOOD | CollisionCategory::BAD
    }

    fn collision_detected(
        &mut self,
        _contact: CollisionContact,
        _intersection: BoundingRect,
        _adjustment: Vec2,
    ) {
        // Static geometry absorbs contacts without reacting.
    }
}

impl Drawable for Scenery {
    fn is_visible(&self) -> bool {
        true
    }

    fn draw_order(&self) -> i32 {
        -10
    }

    fn sprite(&self) -> SpriteInstance {
        SpriteInstance {
            texture: self.texture,
            position: self.bounds.position,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

impl SceneObject for Scenery {
    fn as_collidable(&self) -> Option<&dyn Collidable> {
        Some(self)
    }

    fn as_collidable_mut(&mut self) -> Option<&mut dyn Collidable> {
        Some(self)
    }

    fn as_drawable(&self) -> Option<&dyn Drawable> {
        Some(self)
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Scenery {
        let mut textures = TextureCatalog::new();
        let texture = textures.register(400, 32);
        Scenery::new(BoundingRect::new(0.0, 300.0, 400.0, 32.0), texture)
    }

    #[test]
    fn next_bounds_never_move() {
        let platform = platform();
        assert_eq!(platform.current_bounds(), platform.next_bounds());
        assert_eq!(platform.bounds(), platform.current_bounds());
    }

    #[test]
    fn one_way_platform_limits_sides() {
        let platform = platform().with_side(CollisionSide::TOP);
        assert_eq!(platform.side(), CollisionSide::TOP);
    }

    #[test]
    fn draws_behind_the_player() {
        let platform = platform();
        assert!(platform.draw_order() < 0);
    }
}
