//! Bone fill by sweeping circles.
//!
//! Steps from the first disc to the second one pixel at a time, filling a
//! circle at each step with interpolated center, radius and color. Cheap for
//! short bones, and the only fill that follows bent (curved) bones, because
//! the x and y remap curves are applied to each step's center.

use super::circle::{fill_circle, Paint};
use super::{BoneRasterizer, ScreenBone};
use crate::math::Vec2;
use crate::render::canvas::Canvas;

#[derive(Debug, Default, Clone, Copy)]
pub struct SteppedRasterizer;

impl SteppedRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl BoneRasterizer for SteppedRasterizer {
    fn fill_bone(&self, bone: &ScreenBone, canvas: &mut Canvas) {
        let (start, end) = (&bone.start, &bone.end);
        let steps = bone.steps();
        if steps == 0.0 {
            fill_circle(canvas, start.center, start.radius, Paint::Solid(start.color));
            return;
        }

        let lerp = |a: f64, b: f64, t: f64| a + (b - a) * t;
        for step in 0..=(steps.trunc() as u64) {
            let t = step as f64 / steps;
            let x = lerp(start.center.x, end.center.x, bone.x_curve.apply(t));
            let y = lerp(start.center.y, end.center.y, bone.y_curve.apply(t));
            let radius = lerp(start.radius, end.radius, t);
            let color = start.color.lerp(end.color, t);
            fill_circle(canvas, Vec2::new(x, y), radius, Paint::Solid(color));
        }
    }
}
