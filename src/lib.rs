//! A CPU ball-and-bone renderer.
//!
//! Scenes are built from spheres ("balls") and tapered cylinders joining two
//! balls ("bones"), grouped into possibly nested figures. A render projects
//! the scene orthographically, orders it back to front with a painter's
//! algorithm that tolerates cyclic overlaps, rasterizes it into a square RGB
//! canvas, and encodes the canvas as an uncompressed 24-bit BMP.
//!
//! # Quick Start
//!
//! ```
//! use figurine::prelude::*;
//!
//! let mut scene = Scene::new();
//! let head = scene.add_ball(Ball::new(Vec3::new(20.0, 20.0, 0.0), 8.0, Color::new(200, 0, 0)));
//! let tail = scene.add_ball(Ball::new(Vec3::new(60.0, 40.0, 0.0), 3.0, Color::new(0, 0, 200)));
//! let spine = scene.add_bone(head, tail);
//!
//! let mut figure = Figure::new();
//! figure.add(spine).add(head).add(tail);
//!
//! let engine = Engine::new(RenderSettings::new().with_size(50));
//! let bmp = engine.render_bitmap(&mut scene, &mut figure, &WorldView::default())?;
//! assert_eq!(&bmp[..2], b"BM");
//! # Ok::<(), figurine::RenderError>(())
//! ```

pub mod colors;
pub mod engine;
pub mod error;
pub mod math;
pub mod occlusion;
pub mod projection;
pub mod render;
pub mod scene;
pub mod settings;
pub mod sorting;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use engine::Engine;
pub use error::{RenderError, Result};
pub use projection::WorldView;
pub use render::RasterizerType;
pub use scene::{Ball, Figure, Scene};
pub use settings::RenderSettings;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use figurine::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::Engine;
    pub use crate::error::{RenderError, Result};
    pub use crate::settings::{Background, RenderSettings};

    // Scene
    pub use crate::scene::{Ball, BallId, Bone, BoneId, Curve, CurveKind, Figure, Node, Scene};

    // Projection & transform
    pub use crate::projection::WorldView;
    pub use crate::transform::{Axis, JointRotation, KeyframePose, Keyframes, Pose, Track};

    // Math
    pub use crate::math::{Rect, Vec2, Vec3};

    // Rendering
    pub use crate::colors::{hls_to_rgb, Color};
    pub use crate::render::{Canvas, Paint, RasterizerType};
}
