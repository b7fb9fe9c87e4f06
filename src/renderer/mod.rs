//! Software rasterizer
//!
//! Everything is drawn on the CPU into a fixed-size RGBA byte buffer that the
//! platform layer hands to the screen as-is.

pub mod font;
pub mod framebuffer;
pub mod shapes;

pub use font::draw_digit;
pub use framebuffer::FrameBuffer;
pub use shapes::{draw_ball, draw_paddle};

use glam::Vec2;

use crate::consts::{SCORE_CELL_SIZE, SCORE_Y, WIN_WIDTH};
use crate::sim::Session;

/// Centers of the left and right score digits
pub fn score_positions() -> [Vec2; 2] {
    let w = WIN_WIDTH as f32;
    [Vec2::new(w * 0.25, SCORE_Y), Vec2::new(w * 0.75, SCORE_Y)]
}

/// Redraw the whole frame for the current session
pub fn render_session(session: &Session, buffer: &mut FrameBuffer) {
    buffer.clear();

    draw_paddle(&session.left, buffer);
    draw_paddle(&session.right, buffer);
    draw_ball(&session.ball, buffer);

    let [left_pos, right_pos] = score_positions();
    draw_digit(left_pos, session.left.color, SCORE_CELL_SIZE, session.left.score, buffer);
    draw_digit(right_pos, session.right.color, SCORE_CELL_SIZE, session.right.score, buffer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Color;

    #[test]
    fn test_render_session_draws_everything() {
        let session = Session::new();
        let mut buffer = FrameBuffer::new();

        render_session(&session, &mut buffer);

        assert_eq!(buffer.pixel(50, 300), Some(Color::WHITE));
        assert_eq!(buffer.pixel(750, 300), Some(Color::WHITE));
        assert_eq!(buffer.pixel(400, 300), Some(Color::WHITE));
        // Left "0": top bar starts at (185, 15)
        assert_eq!(buffer.pixel(185, 15), Some(Color::WHITE));
        assert_eq!(buffer.pixel(200, 40), Some(Color::BLACK));
        assert_eq!(buffer.pixel(585, 15), Some(Color::WHITE));
        assert_eq!(buffer.pixel(10, 590), Some(Color::BLACK));
    }

    #[test]
    fn test_render_session_clears_previous_frame() {
        let mut session = Session::new();
        let mut buffer = FrameBuffer::new();
        render_session(&session, &mut buffer);

        session.ball.pos = Vec2::new(400.0, 500.0);
        render_session(&session, &mut buffer);

        assert_eq!(buffer.pixel(400, 300), Some(Color::BLACK));
        assert_eq!(buffer.pixel(400, 500), Some(Color::WHITE));
    }

    #[test]
    fn test_render_session_shows_score_change() {
        let mut session = Session::new();
        let mut before = FrameBuffer::new();
        render_session(&session, &mut before);

        session.right.score = 2;
        let mut after = FrameBuffer::new();
        render_session(&session, &mut after);

        assert_ne!(before, after);
        // "2" has no left cell on row 1, "0" does
        assert_eq!(before.pixel(585, 25), Some(Color::WHITE));
        assert_eq!(after.pixel(585, 25), Some(Color::BLACK));
    }
}
