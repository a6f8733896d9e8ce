//! Shape fills.
//!
//! Balls are painted with [`fill_circle`]. Bones have two interchangeable
//! fill strategies behind the [`BoneRasterizer`] trait, so they can be swapped
//! at runtime for testing and benchmarking:
//! - [`SteppedRasterizer`]: sweeps a circle from one end to the other
//! - [`ConeRasterizer`]: solves the cone equation per pixel of the bounding box

mod circle;
mod cone;
mod stepped;

pub use circle::{fill_circle, fill_top_half_circle, Paint};
pub use cone::ConeRasterizer;
pub use stepped::SteppedRasterizer;

use super::canvas::Canvas;
use crate::colors::Color;
use crate::math::Vec2;
use crate::scene::Curve;

/// A circle in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f64,
    pub color: Color,
}

impl Disc {
    pub fn new(center: Vec2, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }
}

/// A bone ready for rasterization in screen space, painted from `start`
/// toward `end` (the end wins where they overlap).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBone {
    pub start: Disc,
    pub end: Disc,
    pub x_curve: Curve,
    pub y_curve: Curve,
}

impl ScreenBone {
    pub fn straight(start: Disc, end: Disc) -> Self {
        Self {
            start,
            end,
            x_curve: Curve::IDENTITY,
            y_curve: Curve::IDENTITY,
        }
    }

    pub fn is_straight(&self) -> bool {
        self.x_curve.is_identity() && self.y_curve.is_identity()
    }

    /// Number of one-pixel steps a circle sweep needs to get from start to end.
    pub fn steps(&self) -> f64 {
        let delta = self.end.center - self.start.center;
        delta
            .x
            .abs()
            .max(delta.y.abs())
            .max((self.start.radius - self.end.radius).abs())
    }
}

/// Trait for bone fill algorithms.
///
/// Implementors paint the union of all circles interpolated between the two
/// ends of a bone into a canvas.
pub trait BoneRasterizer {
    fn fill_bone(&self, bone: &ScreenBone, canvas: &mut Canvas);
}

/// Available bone fill algorithms.
///
/// Can be changed at runtime via `Engine::set_rasterizer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RasterizerType {
    /// Cone fill for long straight bones, circle sweep for everything else.
    #[default]
    Auto,
    /// Always sweep circles.
    Stepped,
    /// Cone fill for every straight bone. Curved bones still sweep, since the
    /// cone equation has no notion of a bent axis.
    Cone,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Auto => write!(f, "Auto"),
            RasterizerType::Stepped => write!(f, "Stepped"),
            RasterizerType::Cone => write!(f, "Cone"),
        }
    }
}

/// Holds both fill implementations and picks one per bone.
pub struct RasterizerDispatcher {
    stepped: SteppedRasterizer,
    cone: ConeRasterizer,
    active: RasterizerType,
    threshold: f64,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType, threshold: f64) -> Self {
        Self {
            stepped: SteppedRasterizer::new(),
            cone: ConeRasterizer::new(),
            active: rasterizer_type,
            threshold,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }

    /// Which fill a bone will get under the active type.
    pub fn choose(&self, bone: &ScreenBone) -> RasterizerType {
        match self.active {
            RasterizerType::Stepped => RasterizerType::Stepped,
            _ if !bone.is_straight() => RasterizerType::Stepped,
            RasterizerType::Cone => RasterizerType::Cone,
            RasterizerType::Auto if bone.steps() > self.threshold => RasterizerType::Cone,
            RasterizerType::Auto => RasterizerType::Stepped,
        }
    }
}

impl BoneRasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_bone(&self, bone: &ScreenBone, canvas: &mut Canvas) {
        let choice = self.choose(bone);
        log::trace!("bone fill: {choice} ({} steps)", bone.steps());
        match choice {
            RasterizerType::Cone => self.cone.fill_bone(bone, canvas),
            _ => self.stepped.fill_bone(bone, canvas),
        }
    }
}
