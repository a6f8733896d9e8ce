//! Uncompressed 24-bit BMP encoding.
//!
//! Layout (little-endian):
//!
//! ```text
//! offset  size  field
//!      0     2  "BM"
//!      2     4  file size
//!      6     4  reserved (0)
//!     10     4  pixel data offset (54)
//!     14     4  info header size (40)
//!     18     4  width
//!     22     4  height (positive: rows stored bottom-up)
//!     26     2  planes (1)
//!     28     2  bits per pixel (24)
//!     30     4  compression (0)
//!     34     4  pixel data size
//!     38     4  horizontal resolution (2835 px/m, 72 dpi)
//!     42     4  vertical resolution
//!     46     4  palette colors (0)
//!     50     4  important colors (0)
//! ```
//!
//! Each row is B, G, R per pixel, zero-padded to a multiple of four bytes.

use super::canvas::Canvas;

pub const HEADER_SIZE: usize = 54;
const INFO_HEADER_SIZE: u32 = 40;
const PIXELS_PER_METER: u32 = 2835;

/// Zero bytes appended to each row of `width` pixels.
pub fn row_padding(width: u32) -> usize {
    (4 - (3 * width as usize) % 4) % 4
}

/// Encodes a canvas as a complete BMP file.
pub fn encode_bmp(canvas: &Canvas) -> Vec<u8> {
    let size = canvas.size();
    let padding = row_padding(size);
    let row_bytes = 3 * size as usize + padding;
    let data_size = row_bytes * size as usize;
    let file_size = HEADER_SIZE + data_size;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    for field in [
        file_size as u32,
        0,
        HEADER_SIZE as u32,
        INFO_HEADER_SIZE,
        size,
        size,
    ] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    for field in [0, data_size as u32, PIXELS_PER_METER, PIXELS_PER_METER, 0, 0] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    debug_assert_eq!(out.len(), HEADER_SIZE);

    for row in canvas.rows().rev() {
        for color in row {
            out.extend_from_slice(&[color.b, color.g, color.r]);
        }
        out.extend(std::iter::repeat(0u8).take(padding));
    }

    out
}
