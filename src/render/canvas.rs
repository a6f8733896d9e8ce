//! Square RGB pixel buffer.
//!
//! The canvas owns its pixels, and can hold one snapshot of them. Horizontal
//! spans are the only write primitive the shape fills need: every circle and
//! cone is painted as a stack of [`hor_line`](Canvas::hor_line) calls or
//! direct pixel writes.
//!
//! Span coordinates are floats. Columns are truncated toward zero and rows are
//! rounded half up, and anything outside `0..size` is clipped.

use crate::colors::Color;

pub struct Canvas {
    pixels: Vec<Color>,
    saved: Option<Vec<Color>>,
    size: u32,
}

impl Canvas {
    /// A canvas filled with one color.
    pub fn plain(size: u32, color: Color) -> Self {
        Self {
            pixels: vec![color; (size * size) as usize],
            saved: None,
            size,
        }
    }

    /// A canvas blending from `top` on the first row to `bottom` on the last.
    ///
    /// Row `y` gets `top + floor(delta * y / (size - 1))` per channel.
    pub fn vertical_gradient(size: u32, top: Color, bottom: Color) -> Self {
        let mut canvas = Self::plain(size, top);
        let last = size.saturating_sub(1) as i32;
        if last == 0 {
            return canvas;
        }
        let top_channels = top.channels();
        let bottom_channels = bottom.channels();
        for y in 0..size {
            let mut channels = [0u8; 3];
            for (i, channel) in channels.iter_mut().enumerate() {
                let delta = bottom_channels[i] as i32 - top_channels[i] as i32;
                *channel = (top_channels[i] as i32 + (delta * y as i32).div_euclid(last)) as u8;
            }
            canvas.fill_row(y, Color::from_channels(channels));
        }
        canvas
    }

    fn fill_row(&mut self, y: u32, color: Color) {
        let start = (y * self.size) as usize;
        self.pixels[start..start + self.size as usize].fill(color);
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Highest valid coordinate.
    fn last(&self) -> f64 {
        self.size as f64 - 1.0
    }

    /// Color at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.size as i32 && y >= 0 && y < self.size as i32 {
            Some((y as u32 * self.size + x as u32) as usize)
        } else {
            None
        }
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.size.max(1) as usize)
    }

    // ============ Snapshot ============

    /// Remembers the current pixels for later [`restore_hor_line`](Self::restore_hor_line) calls.
    pub fn save(&mut self) {
        self.saved = Some(self.pixels.clone());
    }

    pub fn has_snapshot(&self) -> bool {
        self.saved.is_some()
    }

    // ============ Spans ============

    /// Clips a span to the canvas; returns the row and the half-open column range.
    fn clip_span(&self, x0: f64, x1: f64, y: f64) -> Option<(usize, usize, usize)> {
        let s = self.last();
        if y < 0.0 || y > s || x0 > s || x1 < 0.0 {
            return None;
        }
        let start = (x0.trunc() as i64).max(0) as usize;
        let end = (x1.trunc() as i64).min(s as i64) as usize + 1;
        if start >= end {
            return None;
        }
        let row = (y + 0.5).trunc() as usize;
        Some((row, start, end))
    }

    /// Fills columns `x0..=x1` of row `y`. Expects `x0 <= x1`.
    pub fn hor_line(&mut self, color: Color, x0: f64, x1: f64, y: f64) {
        if let Some((row, start, end)) = self.clip_span(x0, x1, y) {
            let offset = row * self.size as usize;
            self.pixels[offset + start..offset + end].fill(color);
        }
    }

    /// Copies columns `x0..=x1` of row `y` back from the snapshot.
    ///
    /// Does nothing when no snapshot was taken.
    pub fn restore_hor_line(&mut self, x0: f64, x1: f64, y: f64) {
        let Some((row, start, end)) = self.clip_span(x0, x1, y) else {
            return;
        };
        if let Some(saved) = &self.saved {
            let offset = row * self.size as usize;
            let range = offset + start..offset + end;
            self.pixels[range.clone()].copy_from_slice(&saved[range]);
        }
    }

    /// Fills the rows `y0..=y1` with a horizontal gradient from `color1` at
    /// `x0` to `color2` at `x1`.
    ///
    /// When the span sticks out of the canvas, the colors at the clipped ends
    /// are what the full gradient would have had there.
    pub fn hor_gradient(
        &mut self,
        color1: Color,
        color2: Color,
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
    ) {
        let s = self.last();
        if y1 < 0.0 || y0 > s || x0 > s || x1 < 0.0 {
            return;
        }

        let width = x1 - x0;
        let mut left = color1;
        let mut right = color2;
        let (mut x0, mut x1) = (x0, x1);
        if x0 < 0.0 {
            left = color1.blend(color2, -x0 / width);
            x0 = 0.0;
        }
        if x1 > s {
            right = color1.blend(color2, (s - (x1 - width)) / width);
            x1 = s;
        }

        let start = x0.trunc() as usize;
        let end = (x1.trunc() as usize).min(s as usize) + 1;
        if start >= end {
            return;
        }
        let steps = (end - start) as f64;
        let line: Vec<Color> = (start..end)
            .map(|x| left.blend(right, (x - start) as f64 / steps))
            .collect();

        let first_row = ((y0 + 0.5).trunc() as i64).max(0) as usize;
        let end_row = ((y1 + 1.5).trunc() as i64).min(self.size as i64) as usize;
        for row in first_row..end_row {
            let offset = row * self.size as usize;
            self.pixels[offset + start..offset + end].copy_from_slice(&line);
        }
    }

    /// Copies the pixels into an `image` buffer, e.g. for a downscaling pass.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.size, self.size, |x, y| {
            image::Rgb(self.pixels[(y * self.size + x) as usize].channels())
        })
    }
}
