//! Raster Pong - two paddles, one ball, drawn pixel by pixel
//!
//! Core modules:
//! - `sim`: Entities, physics and the Start/Play state machine
//! - `renderer`: Software rasterizer into an RGBA byte buffer
//! - `platform`: Presenter and input seams (headless or SDL2)
//! - `app`: Frame loop and pacing

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{PlayerKind, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (fixed resolution)
    pub const WIN_WIDTH: usize = 800;
    pub const WIN_HEIGHT: usize = 600;

    /// Bytes per RGBA pixel
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Score that ends a match; the next serve resets both scores
    pub const WIN_SCORE: u32 = 3;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Distance of each paddle's center from its goal line
    pub const PADDLE_INSET: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_SERVE_VELOCITY: (f32, f32) = (300.0, 300.0);

    /// Score digit layout
    pub const SCORE_CELL_SIZE: i32 = 10;
    pub const SCORE_Y: f32 = 40.0;
}

/// Exact center of the playfield
#[inline]
pub fn window_center() -> Vec2 {
    Vec2::new(consts::WIN_WIDTH as f32 / 2.0, consts::WIN_HEIGHT as f32 / 2.0)
}
