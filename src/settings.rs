//! Render configuration.
//!
//! [`RenderSettings`] collects everything a render pass needs that is not part
//! of the scene itself. Defaults are exposed as constants so callers can build
//! partial overrides.

use crate::colors::{self, Color};
use crate::render::RasterizerType;

/// Logical image size. The canvas is twice this in each dimension.
pub const DEFAULT_SIZE: u32 = 128;

/// Screen span (in pixels) above which [`RasterizerType::Auto`] switches a
/// bone from circle stepping to the cone fill.
pub const CONE_THRESHOLD: f64 = 80.0;

pub const DEFAULT_BACKGROUND: Background = Background::Plain(colors::WHITE);

/// How a fresh canvas is filled before anything is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Background {
    Plain(Color),
    /// Top row `top`, bottom row `bottom`, linear per row in between.
    VerticalGradient { top: Color, bottom: Color },
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSettings {
    pub size: u32,
    pub background: Background,
    pub rasterizer: RasterizerType,
    pub cone_threshold: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            background: DEFAULT_BACKGROUND,
            rasterizer: RasterizerType::default(),
            cone_threshold: CONE_THRESHOLD,
        }
    }
}

impl RenderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn with_rasterizer(mut self, rasterizer: RasterizerType) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    pub fn with_cone_threshold(mut self, threshold: f64) -> Self {
        self.cone_threshold = threshold;
        self
    }

    /// Side length of the pixel buffer: twice the logical size.
    pub fn canvas_size(&self) -> u32 {
        self.size * 2
    }
}
