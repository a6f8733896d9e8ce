//! Orthographic camera.
//!
//! A [`WorldView`] rotates model space about a center and then drops the depth
//! axis. There is no perspective: screen x/y are the rotated x/y, and the
//! rotated z is kept only for draw ordering (smaller z is nearer the viewer).
//!
//! The screen `shift` is applied at draw time only, so it can be changed after
//! projecting without re-projecting.

use crate::math::{Rect, Vec2, Vec3};

/// Camera parameters. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldView {
    /// Rotation about the vertical (Y) axis, applied first.
    pub angle_y: f64,
    /// Rotation about the horizontal (X) axis, applied second.
    pub angle_x: f64,
    pub rotation_center: Vec3,
    pub shift: Vec2,
}

impl Default for WorldView {
    fn default() -> Self {
        Self::new(0.0, 0.0, Vec3::ZERO, Vec2::ZERO)
    }
}

impl WorldView {
    pub fn new(angle_y: f64, angle_x: f64, rotation_center: Vec3, shift: Vec2) -> Self {
        Self {
            angle_y,
            angle_x,
            rotation_center,
            shift,
        }
    }

    pub fn with_shift(mut self, shift: Vec2) -> Self {
        self.shift = shift;
        self
    }

    /// Maps a model-space point to projected (screen x, screen y, depth).
    ///
    /// Translate by `-rotation_center`, rotate about Y by `angle_y`, then about
    /// X by `angle_x`, and translate back.
    pub fn project(&self, point: Vec3) -> Vec3 {
        let relative = point - self.rotation_center;
        // The Y rotation turns +x toward -z, the opposite sense of `rotate_y`.
        let rotated = relative
            .rotate_y(-self.angle_y.to_radians())
            .rotate_x(self.angle_x.to_radians());
        rotated + self.rotation_center
    }

    /// Shifted screen position of a projected point.
    pub fn to_screen(&self, projected: Vec3) -> Vec2 {
        projected.xy() + self.shift
    }

    /// The part of projected space that lands on a `size`-pixel square canvas.
    pub fn visible_rect(&self, size: u32) -> Rect {
        let size = size as f64;
        Rect::new(
            -self.shift.x,
            -self.shift.y,
            size - self.shift.x,
            size - self.shift.y,
        )
    }
}
