//! Filled primitives for the ball and paddles

use super::framebuffer::FrameBuffer;
use crate::sim::{Ball, Paddle};

/// Filled disc: every pixel of the bounding square whose offset from the
/// center is strictly inside the radius. Compares squared lengths, no sqrt.
pub fn draw_ball(ball: &Ball, buffer: &mut FrameBuffer) {
    let r = ball.radius.ceil() as i32;
    let r_sq = ball.radius * ball.radius;
    for dy in -r..r {
        for dx in -r..r {
            if ((dx * dx + dy * dy) as f32) < r_sq {
                let x = (ball.pos.x + dx as f32) as i32;
                let y = (ball.pos.y + dy as f32) as i32;
                buffer.set_pixel(x, y, ball.color);
            }
        }
    }
}

/// Filled rectangle `[x - w/2, x + w/2) x [y - h/2, y + h/2)`
pub fn draw_paddle(paddle: &Paddle, buffer: &mut FrameBuffer) {
    // Casts saturate, so a paddle far off-screen still yields valid ranges
    let start_x = paddle.left() as i32;
    let start_y = paddle.top() as i32;
    let end_x = start_x.saturating_add(paddle.width as i32);
    let end_y = start_y.saturating_add(paddle.height as i32);

    for y in start_y..end_y {
        for x in start_x..end_x {
            buffer.set_pixel(x, y, paddle.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Color, Side, advance_paddle_ai, advance_paddle_manual};
    use glam::Vec2;

    fn lit_pixels(buffer: &FrameBuffer) -> usize {
        buffer
            .as_bytes()
            .chunks_exact(4)
            .filter(|px| px[0] != 0 || px[1] != 0 || px[2] != 0)
            .count()
    }

    #[test]
    fn test_draw_ball_disc() {
        let mut buffer = FrameBuffer::new();
        let ball = Ball::new(Vec2::new(100.0, 100.0), 20.0, Vec2::ZERO, Color::WHITE);

        draw_ball(&ball, &mut buffer);

        let index = (100 * 800 + 100) * 4;
        assert_eq!(&buffer.as_bytes()[index..index + 3], &[255, 255, 255]);
        assert_eq!(buffer.pixel(100, 121), Some(Color::BLACK));
        // Square corner is outside the disc
        assert_eq!(buffer.pixel(80, 80), Some(Color::BLACK));
        // Half-open range: top row of the box is drawn, bottom row is not
        assert_eq!(buffer.pixel(100, 80), Some(Color::BLACK));
        assert_eq!(buffer.pixel(100, 81), Some(Color::WHITE));
        assert_eq!(buffer.pixel(100, 119), Some(Color::WHITE));
    }

    #[test]
    fn test_draw_ball_pixel_count_close_to_area() {
        let mut buffer = FrameBuffer::new();
        let ball = Ball::new(Vec2::new(400.0, 300.0), 20.0, Vec2::ZERO, Color::WHITE);

        draw_ball(&ball, &mut buffer);

        let area = std::f32::consts::PI * 400.0;
        let lit = lit_pixels(&buffer) as f32;
        assert!((lit - area).abs() < 0.05 * area, "lit = {lit}, area = {area}");
    }

    #[test]
    fn test_draw_ball_partially_off_screen() {
        let mut buffer = FrameBuffer::new();
        let ball = Ball::new(Vec2::new(400.0, -10.0), 20.0, Vec2::ZERO, Color::WHITE);

        draw_ball(&ball, &mut buffer);

        assert_eq!(buffer.pixel(400, 0), Some(Color::WHITE));
        assert_eq!(buffer.pixel(400, 10), Some(Color::BLACK));
    }

    #[test]
    fn test_draw_paddle_rect() {
        let mut buffer = FrameBuffer::new();
        let paddle = Paddle::for_side(Side::Left);

        draw_paddle(&paddle, &mut buffer);

        assert_eq!(lit_pixels(&buffer), 20 * 100);
        assert_eq!(buffer.pixel(40, 250), Some(Color::WHITE));
        assert_eq!(buffer.pixel(59, 349), Some(Color::WHITE));
        assert_eq!(buffer.pixel(60, 300), Some(Color::BLACK));
        assert_eq!(buffer.pixel(50, 350), Some(Color::BLACK));
        assert_eq!(buffer.pixel(39, 300), Some(Color::BLACK));
    }

    #[test]
    fn test_draw_paddle_far_off_screen_is_noop() {
        let mut buffer = FrameBuffer::new();

        // CPU paddle chasing a ball that is way below the window
        let mut cpu = Paddle::for_side(Side::Right);
        let ball = Ball::new(Vec2::new(700.0, 3.0e9), 20.0, Vec2::ZERO, Color::WHITE);
        advance_paddle_ai(&mut cpu, &ball, 0.0);
        draw_paddle(&cpu, &mut buffer);

        // Huge dt pushes a human paddle out of range in one step
        let mut human = Paddle::for_side(Side::Left);
        advance_paddle_manual(&mut human, false, true, 1.0e7);
        draw_paddle(&human, &mut buffer);

        let mut above = Paddle::for_side(Side::Left);
        above.pos.y = -3.0e9;
        draw_paddle(&above, &mut buffer);

        assert_eq!(lit_pixels(&buffer), 0);
    }
}
