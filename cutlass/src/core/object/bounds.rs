//=========================================================================
// Bounding Rectangle
//=========================================================================
//
// Axis-aligned bounding rectangle in screen space (y grows downward).
//
// Stored as a min corner plus a size so collision code can reason in
// edges (left/right/top/bottom) while movement code works in Vec2s.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== BoundingRect ========================================================

/// Axis-aligned rectangle used for collision bounds.
///
/// `position` is the top-left corner; `top` is the minimum y because
/// screen space grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub position: Vec2,
    pub size: Vec2,
}

impl BoundingRect {
    //--- Construction -----------------------------------------------------

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    //--- Edges ------------------------------------------------------------

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    //--- Geometry ---------------------------------------------------------

    /// Returns a copy shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            position: self.position + offset,
            size: self.size,
        }
    }

    /// True when the rectangles overlap with positive area.
    ///
    /// Edge-touching rectangles do not intersect; a player standing
    /// exactly on a platform is resting, not colliding.
    pub fn intersects(&self, other: &BoundingRect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// The overlapping region of two rectangles, if any.
    pub fn intersection(&self, other: &BoundingRect) -> Option<BoundingRect> {
        if !self.intersects(other) {
            return None;
        }

        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Some(BoundingRect::new(left, top, right - left, bottom - top))
    }
}

//=== Tests ===============================================================
