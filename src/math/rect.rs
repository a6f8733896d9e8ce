//! Axis-aligned screen rectangles used for bounding and culling.

use std::ops::Add;

/// An axis-aligned 2D box in screen coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of half-width `radius` around a center.
    pub fn around(x: f64, y: f64, radius: f64) -> Self {
        Self::new(x - radius, y - radius, x + radius, y + radius)
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Inclusive overlap test: rectangles sharing only an edge or a corner intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let horizontal = self.left <= other.right && other.left <= self.right;
        let vertical = self.top <= other.bottom && other.top <= self.bottom;
        horizontal && vertical
    }
}

impl Add<Rect> for Rect {
    type Output = Rect;

    fn add(self, rhs: Rect) -> Rect {
        self.union(&rhs)
    }
}

/// Union against an absent rectangle is a no-op.
impl Add<Option<Rect>> for Rect {
    type Output = Rect;

    fn add(self, rhs: Option<Rect>) -> Rect {
        match rhs {
            Some(other) => self.union(&other),
            None => self,
        }
    }
}
