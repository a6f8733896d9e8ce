//! Pixel output: the canvas, the shape fills that paint into it, and the
//! bitmap encoder that serializes it.

pub mod bitmap;
mod canvas;
pub mod rasterizer;

pub use bitmap::encode_bmp;
pub use canvas::Canvas;
pub use rasterizer::{
    fill_circle, fill_top_half_circle, BoneRasterizer, ConeRasterizer, Disc, Paint,
    RasterizerDispatcher, RasterizerType, ScreenBone, SteppedRasterizer,
};
