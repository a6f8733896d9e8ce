//! Per-pixel tapered-cylinder fill.
//!
//! A bone is the union of all circles `C(t)` with center `c1 + t (c2 - c1)` and
//! radius `r1 + t (r2 - r1)` for `t` in [0, 1]. A pixel `p` lies on `C(t)` when
//!
//! ```text
//! |p - c1 - t v|^2 = (r1 + t d)^2        v = c2 - c1, d = r2 - r1
//! ```
//!
//! which is the quadratic `a t^2 + b t + c = 0` with
//!
//! ```text
//! a = |v|^2 - d^2
//! b = -2 (v . (p - c1) + r1 d)
//! c = |p - c1|^2 - r1^2
//! ```
//!
//! The root we want is the largest `t` not beyond the far circle, because the
//! far end is painted over the near end. The pixel takes the color at that `t`.
//!
//! Root selection, in order:
//! - inside the far circle: `t = 1`
//! - `a == 0`: the linear solution `-c / b` (skip if `b == 0`)
//! - negative discriminant: the pixel misses the cone, skip
//! - the larger root, or the smaller one if the larger exceeds 1; skip if
//!   still above 1
//! - below 0: inside the near circle (`c <= 0`) clamps to 0, otherwise skip
//!
//! This visits every pixel of the bounding box, so it only pays off for bones
//! that span many pixels. Short bones go through [`super::SteppedRasterizer`].

use super::{BoneRasterizer, ScreenBone};
use crate::colors::Color;
use crate::render::canvas::Canvas;

/// Solves the cone equation for every pixel of the bone's bounding box.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConeRasterizer;

impl ConeRasterizer {
    pub fn new() -> Self {
        Self
    }
}

/// 256-entry lookup from `trunc(t * 255)` to the interpolated color.
fn color_table(from: Color, to: Color) -> Vec<Color> {
    let (a, b) = (from.channels(), to.channels());
    (0..256i32)
        .map(|fac| {
            let mut out = [0u8; 3];
            for i in 0..3 {
                let delta = fac * (b[i] as i32 - a[i] as i32);
                out[i] = (a[i] as i32 + delta.div_euclid(255)) as u8;
            }
            Color::from_channels(out)
        })
        .collect()
}

/// Interpolation parameter for a pixel, or None if the pixel is not covered.
fn solve(a: f64, b: f64, c: f64, inside_far: bool) -> Option<f64> {
    let mut t = if inside_far {
        1.0
    } else if a == 0.0 {
        if b == 0.0 {
            return None;
        }
        -c / b
    } else {
        let p = b / a;
        let q = c / a;
        let disc = p * p / 4.0 - q;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let larger = -p / 2.0 + root;
        if larger > 1.0 {
            -p / 2.0 - root
        } else {
            larger
        }
    };

    if !t.is_finite() || t > 1.0 {
        return None;
    }
    if t < 0.0 {
        if c > 0.0 {
            return None;
        }
        t = 0.0;
    }
    Some(t)
}

impl BoneRasterizer for ConeRasterizer {
    fn fill_bone(&self, bone: &ScreenBone, canvas: &mut Canvas) {
        if canvas.size() == 0 {
            return;
        }
        let s = canvas.size() as i64 - 1;
        let (c1x, c1y) = (bone.start.center.x.trunc() as i64, bone.start.center.y.trunc() as i64);
        let (c2x, c2y) = (bone.end.center.x.trunc() as i64, bone.end.center.y.trunc() as i64);
        let r1 = bone.start.radius.trunc() as i64;
        let r2 = bone.end.radius.trunc() as i64;

        let xmin = (c1x - r1).min(c2x - r2).max(0);
        let xmax = (c1x + r1).max(c2x + r2).min(s);
        let ymin = (c1y - r1).min(c2y - r2).max(0);
        let ymax = (c1y + r1).max(c2y + r2).min(s);
        if xmin > xmax || ymin > ymax {
            return;
        }

        let colors = color_table(bone.start.color, bone.end.color);

        let d = r2 - r1;
        let vx = c2x - c1x;
        let vy = c2y - c1y;
        let a = (vx * vx + vy * vy - d * d) as f64;
        let r1d = r1 * d;
        let r1s = r1 * r1;

        for y in ymin..=ymax {
            let dy = y - c1y;
            let b_row = vy * dy + r1d;
            let c_row = dy * dy - r1s;
            let far_dy = y - c2y;
            let far_limit = r2 * r2 - far_dy * far_dy;

            for x in xmin..=xmax {
                let dx = x - c1x;
                let b = (-2 * (vx * dx + b_row)) as f64;
                let c = (dx * dx + c_row) as f64;
                let far_dx = x - c2x;
                let inside_far = far_dx * far_dx < far_limit;

                if let Some(t) = solve(a, b, c, inside_far) {
                    let index = (t * 255.0) as usize;
                    canvas.set_pixel(x as i32, y as i32, colors[index.min(255)]);
                }
            }
        }
    }
}
