//! Ball and paddle physics
//!
//! Explicit Euler integration followed by discrete, position-only collision
//! checks. There is no swept test: a ball fast enough to cross a paddle (or the
//! top/bottom margin) inside one step passes straight through it.

use super::state::{Ball, Paddle, Side};
use crate::consts::{WIN_HEIGHT, WIN_WIDTH};
use crate::window_center;

/// Advance the ball by `dt` seconds and resolve walls, goals and paddles.
///
/// Returns the side that scored, if the ball left the field this step. The
/// ball is already back at the window center when that happens; moving the
/// game back to `Start` is the caller's job (see `Session::advance_ball`).
pub fn advance_ball(ball: &mut Ball, left: &mut Paddle, right: &mut Paddle, dt: f32) -> Option<Side> {
    log::trace!("ball velocity: {:?}", ball.vel);

    ball.pos += ball.vel * dt;

    // Top or bottom wall: bounce
    if ball.top() < 0.0 || ball.bottom() > WIN_HEIGHT as f32 {
        ball.vel.y = -ball.vel.y;
    }

    // Goal lines
    let mut scorer = None;
    if ball.pos.x < 0.0 {
        right.score += 1;
        scorer = Some(Side::Right);
    } else if ball.pos.x > WIN_WIDTH as f32 {
        left.score += 1;
        scorer = Some(Side::Left);
    }
    if scorer.is_some() {
        ball.pos = window_center();
    }

    if overlaps_paddle(ball, left) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = left.right() + ball.radius;
    }
    if overlaps_paddle(ball, right) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = right.left() - ball.radius;
    }

    scorer
}

/// Ball x-extent against paddle x-extent, ball center y against paddle y-extent.
#[inline]
fn overlaps_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.left() < paddle.right()
        && ball.right() > paddle.left()
        && ball.pos.y > paddle.top()
        && ball.pos.y < paddle.bottom()
}

/// Move a player-controlled paddle.
///
/// A move is refused while the paddle's edge in that direction is already past
/// the boundary; the opposite direction still works. Up wins when both keys
/// are held, unless up is blocked.
pub fn advance_paddle_manual(paddle: &mut Paddle, up: bool, down: bool, dt: f32) {
    log::trace!("paddle speed: {}", paddle.speed);

    if up && paddle.top() >= 0.0 {
        paddle.pos.y -= paddle.speed * dt;
    } else if down && paddle.bottom() <= WIN_HEIGHT as f32 {
        paddle.pos.y += paddle.speed * dt;
    }
}

/// CPU policy: sit exactly on the ball's height. Ignores speed and screen
/// bounds, so it never misses.
pub fn advance_paddle_ai(paddle: &mut Paddle, ball: &Ball, _dt: f32) {
    paddle.pos.y = ball.pos.y;
}
