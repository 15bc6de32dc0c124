//=========================================================================
// Collision Types
//=========================================================================
//
// Category and side bitmasks for collision filtering, plus the contact
// record handed to collidables when a collision resolves.
//
//=========================================================================

//=== External Dependencies ===============================================

use bitflags::bitflags;

bitflags! {
    /// What kind of thing a collidable is.
    ///
    /// An object only collides with targets whose category matches its
    /// own category mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CollisionCategory: u8 {
        const GOOD = 1 << 0;
        const BAD = 1 << 1;
        const SCENERY = 1 << 2;
    }
}

bitflags! {
    /// Which sides of a collidable accept contacts.
    ///
    /// A one-way platform declares `TOP` only; everything bounces off
    /// an `ALL` object regardless of approach direction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CollisionSide: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl CollisionSide {
    /// The side an approaching object would strike instead.
    pub fn opposite(self) -> CollisionSide {
        let mut opposite = CollisionSide::empty();
        if self.contains(CollisionSide::TOP) {
            opposite |= CollisionSide::BOTTOM;
        }
        if self.contains(CollisionSide::BOTTOM) {
            opposite |= CollisionSide::TOP;
        }
        if self.contains(CollisionSide::LEFT) {
            opposite |= CollisionSide::RIGHT;
        }
        if self.contains(CollisionSide::RIGHT) {
            opposite |= CollisionSide::LEFT;
        }
        opposite
    }
}

//=== Collision Contact ===================================================

/// What an object learns about the thing it collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionContact {
    /// Category of the other party.
    pub category: CollisionCategory,

    /// Side of the other party that was struck.
    pub side: CollisionSide,
}

//=== Tests ===============================================================
