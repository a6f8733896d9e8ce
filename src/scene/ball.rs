use crate::colors::Color;
use crate::error::Result;
use crate::math::Vec3;
use crate::projection::WorldView;
use crate::transform::{self, Axis};

/// A sphere: the basic primitive every figure is built from.
///
/// A ball without a color is an anchor. It takes part in geometry (bones can
/// hang off it, it is rotated and scaled) but is never painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub center: Vec3,
    pub radius: f64,
    pub color: Option<Color>,
    projection: Option<Vec3>,
}

impl Ball {
    pub fn new(center: Vec3, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color: Some(color),
            projection: None,
        }
    }

    /// An invisible ball used only as a geometric reference.
    pub fn anchor(center: Vec3, radius: f64) -> Self {
        Self {
            center,
            radius,
            color: None,
            projection: None,
        }
    }

    /// Projected position from the last [`project`](Self::project) call.
    pub fn projection(&self) -> Option<Vec3> {
        self.projection
    }

    pub fn project(&mut self, view: &WorldView) {
        self.projection = Some(view.project(self.center));
    }

    /// Rotates the center about `pivot` by `angle` degrees, keeping the `axis` coordinate.
    pub fn rotate(&mut self, angle: f64, pivot: Vec3, axis: Axis) {
        self.center = transform::rotate_about(self.center, pivot, angle, axis);
    }

    /// Moves this ball, keeping its direction from `other`, so the centers are
    /// `distance` apart.
    pub fn set_distance(&mut self, distance: f64, other: &Ball) -> Result<()> {
        self.center = transform::at_distance(self.center, other.center, distance)?;
        Ok(())
    }

    /// Like [`set_distance`](Self::set_distance), but measured between the surfaces.
    pub fn set_gap(&mut self, gap: f64, other: &Ball) -> Result<()> {
        self.set_distance(gap + self.radius + other.radius, other)
    }

    /// Puts this ball's center on the surface of `other`.
    pub fn move_to_sphere(&mut self, other: &Ball) -> Result<()> {
        self.set_distance(other.radius, other)
    }

    /// Uniform scale about the model origin.
    pub fn scale(&mut self, factor: f64) {
        self.radius *= factor;
        self.center = self.center * factor;
    }
}
