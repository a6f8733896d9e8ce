//! Vector and rectangle types shared by the scene and the rasterizer.

pub mod rect;
pub mod vec2;
pub mod vec3;

pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
