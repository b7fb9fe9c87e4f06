//! 3x5 bitmap digits for the score display

use glam::Vec2;

use super::framebuffer::FrameBuffer;
use crate::sim::Color;

pub const GLYPH_COLS: i32 = 3;
pub const GLYPH_ROWS: i32 = 5;

/// One glyph, row-major, 1 = filled cell
type Glyph = [u8; (GLYPH_COLS * GLYPH_ROWS) as usize];

#[rustfmt::skip]
const DIGITS: [Glyph; 10] = [
    [1, 1, 1,
     1, 0, 1,
     1, 0, 1,
     1, 0, 1,
     1, 1, 1],
    [1, 1, 0,
     0, 1, 0,
     0, 1, 0,
     0, 1, 0,
     1, 1, 1],
    [1, 1, 1,
     0, 0, 1,
     1, 1, 1,
     1, 0, 0,
     1, 1, 1],
    [1, 1, 1,
     0, 0, 1,
     0, 1, 1,
     0, 0, 1,
     1, 1, 1],
    [1, 0, 1,
     1, 0, 1,
     1, 1, 1,
     0, 0, 1,
     0, 0, 1],
    [1, 1, 1,
     1, 0, 0,
     1, 1, 1,
     0, 0, 1,
     1, 1, 1],
    [1, 1, 1,
     1, 0, 0,
     1, 1, 1,
     1, 0, 1,
     1, 1, 1],
    [1, 1, 1,
     0, 0, 1,
     0, 0, 1,
     0, 0, 1,
     0, 0, 1],
    [1, 1, 1,
     1, 0, 1,
     1, 1, 1,
     1, 0, 1,
     1, 1, 1],
    [1, 1, 1,
     1, 0, 1,
     1, 1, 1,
     0, 0, 1,
     1, 1, 1],
];

/// Draw `digit` centered on `pos`, each filled cell a `cell_size` square.
///
/// Values above 9 have no glyph and draw nothing.
pub fn draw_digit(pos: Vec2, color: Color, cell_size: i32, digit: u32, buffer: &mut FrameBuffer) {
    let Some(glyph) = DIGITS.get(digit as usize) else {
        return;
    };

    let origin_x = (pos.x as i32).saturating_sub(cell_size.saturating_mul(GLYPH_COLS) / 2);
    let origin_y = (pos.y as i32).saturating_sub(cell_size.saturating_mul(GLYPH_ROWS) / 2);

    for (i, &cell) in glyph.iter().enumerate() {
        if cell == 0 {
            continue;
        }
        let col = i as i32 % GLYPH_COLS;
        let row = i as i32 / GLYPH_COLS;
        let cell_x = origin_x.saturating_add(col.saturating_mul(cell_size));
        let cell_y = origin_y.saturating_add(row.saturating_mul(cell_size));
        for y in cell_y..cell_y.saturating_add(cell_size) {
            for x in cell_x..cell_x.saturating_add(cell_size) {
                buffer.set_pixel(x, y, color);
            }
        }
    }
}
