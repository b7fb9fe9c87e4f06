//! RGBA8888 frame buffer

use crate::consts::{BYTES_PER_PIXEL, WIN_HEIGHT, WIN_WIDTH};
use crate::sim::Color;

/// Row-major RGBA byte buffer, 4 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Buffer matching the window size, all bytes zero
    pub fn new() -> Self {
        Self {
            pixels: vec![0; WIN_WIDTH * WIN_HEIGHT * BYTES_PER_PIXEL],
            width: WIN_WIDTH,
            height: WIN_HEIGHT,
        }
    }

    /// Bytes per row, as the presenter wants it
    pub fn pitch(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Zero every byte (black, alpha 0)
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Write the RGB channels of one pixel, leaving alpha alone.
    ///
    /// Bounds are checked on the flat byte index only, so an `x` past the
    /// right edge lands on the next row. Writes that fall outside the buffer
    /// are dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let index = (y as i64 * self.width as i64 + x as i64) * BYTES_PER_PIXEL as i64;
        if index < 0 || index > self.pixels.len() as i64 - BYTES_PER_PIXEL as i64 {
            return;
        }
        let index = index as usize;
        self.pixels[index] = color.r;
        self.pixels[index + 1] = color.g;
        self.pixels[index + 2] = color.b;
    }

    /// RGB triple at `(x, y)`, `None` off the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y * self.width + x) * BYTES_PER_PIXEL;
        Some(Color::new(
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
        ))
    }
}
