//! Filled discs via the midpoint circle algorithm.
//!
//! The classic midpoint algorithm walks one octant of the outline with integer
//! arithmetic and mirrors each point into the other seven. Instead of plotting
//! the mirrored points, each pair on the same row is joined with a horizontal
//! span, which fills the disc with one write per row touched.
//!
//! ```text
//!          ____
//!        /      \      rows y0 - y and y0 + y span x0 - x ..= x0 + x
//!       |        |     rows y0 - x and y0 + x span x0 - y ..= x0 + y
//!        \ ____ /
//! ```
//!
//! The radius is truncated to an integer; the center may be fractional and
//! is resolved by the span clipping in [`Canvas`].

use crate::colors::Color;
use crate::math::Vec2;
use crate::render::canvas::Canvas;

/// What a circle fill writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Solid(Color),
    /// Copy the covered spans back from the canvas snapshot, erasing whatever
    /// was drawn there since [`Canvas::save`].
    Restore,
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

/// Fills a disc.
pub fn fill_circle(canvas: &mut Canvas, center: Vec2, radius: f64, paint: Paint) {
    midpoint_fill(canvas, center, radius, paint, true);
}

/// Fills only the upper half of a disc (rows at or above the center).
pub fn fill_top_half_circle(canvas: &mut Canvas, center: Vec2, radius: f64, paint: Paint) {
    midpoint_fill(canvas, center, radius, paint, false);
}

fn midpoint_fill(canvas: &mut Canvas, center: Vec2, radius: f64, paint: Paint, lower: bool) {
    let radius = radius.trunc().max(0.0) as i64;
    let r = radius as f64;
    let size = canvas.size() as f64;
    let Vec2 { x: x0, y: y0 } = center;

    if x0 < -r || y0 < -r || x0 - r > size || y0 - r > size {
        return;
    }
    if paint == Paint::Restore && !canvas.has_snapshot() {
        log::warn!("restore fill requested without a canvas snapshot; skipping");
        return;
    }

    let mut span = |from: f64, to: f64, row: f64| match paint {
        Paint::Solid(color) => canvas.hor_line(color, from, to, row),
        Paint::Restore => canvas.restore_hor_line(from, to, row),
    };

    let mut f = 1 - radius;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * radius;
    let mut x: i64 = 0;
    let mut y: i64 = radius;

    span(x0 - r, x0 + r, y0);

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        let (xf, yf) = (x as f64, y as f64);
        if lower {
            span(x0 - xf, x0 + xf, y0 + yf);
        }
        span(x0 - xf, x0 + xf, y0 - yf);
        if lower {
            span(x0 - yf, x0 + yf, y0 + xf);
        }
        span(x0 - yf, x0 + yf, y0 - xf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const BG: Color = Color::new(255, 255, 255);
    const RED: Color = Color::new(255, 0, 0);

    fn filled(canvas: &Canvas) -> HashSet<(i32, i32)> {
        let size = canvas.size() as i32;
        (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) != Some(BG))
            .collect()
    }

    #[test]
    fn disc_is_symmetric_under_axis_swap() {
        for radius in 0..=25 {
            let mut canvas = Canvas::plain(64, BG);
            let (cx, cy) = (31, 30);
            fill_circle(&mut canvas, Vec2::new(cx as f64, cy as f64), radius as f64, RED.into());
            let set = filled(&canvas);
            for &(x, y) in &set {
                let (dx, dy) = (x - cx, y - cy);
                assert!(set.contains(&(cx + dy, cy + dx)), "radius {radius}: ({dx},{dy})");
                assert!(set.contains(&(cx - dx, cy + dy)), "radius {radius}: ({dx},{dy})");
                assert!(set.contains(&(cx + dx, cy - dy)), "radius {radius}: ({dx},{dy})");
            }
        }
    }

    #[test]
    fn disc_covers_radius_and_no_more() {
        let mut canvas = Canvas::plain(64, BG);
        fill_circle(&mut canvas, Vec2::new(32.0, 32.0), 10.0, RED.into());
        let set = filled(&canvas);
        assert!(set.contains(&(22, 32)));
        assert!(set.contains(&(42, 32)));
        assert!(set.contains(&(32, 22)));
        assert!(set.contains(&(32, 42)));
        for &(x, y) in &set {
            let d2 = (x - 32).pow(2) + (y - 32).pow(2);
            assert!(d2 <= 11 * 11, "({x},{y}) outside radius");
        }
        // Interior is solid.
        for y in 26..=38 {
            for x in 26..=38 {
                assert!(set.contains(&(x, y)));
            }
        }
    }

    #[test]
    fn radius_zero_is_a_single_pixel() {
        let mut canvas = Canvas::plain(8, BG);
        fill_circle(&mut canvas, Vec2::new(3.0, 4.0), 0.6, RED.into());
        assert_eq!(filled(&canvas), HashSet::from([(3, 4)]));
    }

    #[test]
    fn top_half_stops_at_center_row() {
        let mut canvas = Canvas::plain(40, BG);
        fill_top_half_circle(&mut canvas, Vec2::new(20.0, 20.0), 8.0, RED.into());
        let set = filled(&canvas);
        assert!(set.contains(&(20, 12)));
        assert!(set.contains(&(12, 20)));
        assert!(set.iter().all(|&(_, y)| y <= 20));
    }

    #[test]
    fn offscreen_circles_are_skipped() {
        let mut canvas = Canvas::plain(16, BG);
        fill_circle(&mut canvas, Vec2::new(-30.0, 5.0), 10.0, RED.into());
        fill_circle(&mut canvas, Vec2::new(5.0, 60.0), 10.0, RED.into());
        assert!(filled(&canvas).is_empty());
    }

    #[test]
    fn partially_visible_circle_is_clipped() {
        let mut canvas = Canvas::plain(16, BG);
        fill_circle(&mut canvas, Vec2::new(0.0, 0.0), 5.0, RED.into());
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(5, 0), Some(RED));
        assert_eq!(canvas.pixel(6, 0), Some(BG));
    }

    #[test]
    fn restore_carves_a_ring() {
        let mut canvas = Canvas::plain(64, BG);
        canvas.save();
        let center = Vec2::new(32.0, 32.0);
        fill_circle(&mut canvas, center, 20.0, RED.into());
        fill_circle(&mut canvas, center, 12.0, Paint::Restore);
        assert_eq!(canvas.pixel(32, 32), Some(BG));
        assert_eq!(canvas.pixel(32 + 16, 32), Some(RED));
        assert_eq!(canvas.pixel(32, 32 - 16), Some(RED));
        assert_eq!(canvas.pixel(32 + 25, 32), Some(BG));
    }

    #[test]
    fn restore_without_snapshot_leaves_pixels() {
        let mut canvas = Canvas::plain(32, BG);
        fill_circle(&mut canvas, Vec2::new(16.0, 16.0), 6.0, RED.into());
        fill_circle(&mut canvas, Vec2::new(16.0, 16.0), 6.0, Paint::Restore);
        assert_eq!(canvas.pixel(16, 16), Some(RED));
    }
}
