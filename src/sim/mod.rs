//! Simulation module
//!
//! All gameplay logic lives here:
//! - Entity data (ball, paddles, color)
//! - Euler-step physics with discrete axis-aligned collision
//! - The Start/Play state machine
//!
//! Nothing in here touches pixels or platform APIs.

pub mod physics;
pub mod state;
pub mod tick;

pub use physics::{advance_ball, advance_paddle_ai, advance_paddle_manual};
pub use state::{Ball, Color, GamePhase, Paddle, Session, Side};
pub use tick::{PaddleInput, TickInput, tick};
