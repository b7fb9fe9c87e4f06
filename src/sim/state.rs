//! Game state and core entity types
//!
//! A `Session` owns the only ball, both paddles and the current phase.

use glam::Vec2;

use crate::consts::*;
use crate::window_center;

/// Current phase of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Ball parked at the center, waiting for the serve action
    #[default]
    Start,
    /// Physics running
    Play,
}

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// 8-bit RGB color; alpha is left to the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Velocity in pixels per second (`x` = xv, `y` = yv)
    pub vel: Vec2,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, color: Color) -> Self {
        Self {
            pos,
            radius,
            vel,
            color,
        }
    }

    /// Ball parked at the window center with the default serve velocity
    pub fn serve_default() -> Self {
        let (xv, yv) = BALL_SERVE_VELOCITY;
        Self::new(window_center(), BALL_RADIUS, Vec2::new(xv, yv), Color::WHITE)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A paddle; `pos` is its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Vertical speed in pixels per second
    pub speed: f32,
    pub score: u32,
    pub color: Color,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32, speed: f32, color: Color) -> Self {
        Self {
            pos,
            width,
            height,
            speed,
            score: 0,
            color,
        }
    }

    /// Default paddle guarding the given side
    pub fn for_side(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => WIN_WIDTH as f32 - PADDLE_INSET,
        };
        Self::new(
            Vec2::new(x, WIN_HEIGHT as f32 / 2.0),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            PADDLE_SPEED,
            Color::WHITE,
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}

/// Everything that changes while the game runs
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub phase: GamePhase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Fresh session in the `Start` phase with the default layout
    pub fn new() -> Self {
        Self {
            ball: Ball::serve_default(),
            left: Paddle::for_side(Side::Left),
            right: Paddle::for_side(Side::Right),
            phase: GamePhase::Start,
        }
    }

    /// Scores as `[left, right]`
    pub fn scores(&self) -> [u32; 2] {
        [self.left.score, self.right.score]
    }

    /// True once either paddle has reached the winning score
    pub fn match_over(&self) -> bool {
        self.left.score == WIN_SCORE || self.right.score == WIN_SCORE
    }
}
