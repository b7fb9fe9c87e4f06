//! Per-frame simulation step
//!
//! The Start/Play state machine: physics runs only while playing, and the
//! serve action is the only way out of `Start`.

use super::physics::{advance_ball, advance_paddle_ai, advance_paddle_manual};
use super::state::{Ball, GamePhase, Paddle, Session, Side};
use crate::consts::WIN_SCORE;

/// How one paddle is driven this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleInput {
    /// Held keys of a human player
    Keys { up: bool, down: bool },
    /// Ball-tracking CPU policy
    Cpu,
}

impl Default for PaddleInput {
    fn default() -> Self {
        PaddleInput::Keys {
            up: false,
            down: false,
        }
    }
}

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Serve key held (space)
    pub serve: bool,
    pub left: PaddleInput,
    pub right: PaddleInput,
}

impl Session {
    /// Move the ball; a goal sends the game back to `Start`.
    pub fn advance_ball(&mut self, dt: f32) -> Option<Side> {
        let scorer = advance_ball(&mut self.ball, &mut self.left, &mut self.right, dt);
        if let Some(side) = scorer {
            self.phase = GamePhase::Start;
            log::info!(
                "{:?} scores: {} - {}",
                side,
                self.left.score,
                self.right.score
            );
        }
        scorer
    }

    /// `Start -> Play`. A finished match is wiped before the next rally.
    pub fn serve(&mut self) {
        if self.match_over() {
            log::info!(
                "Match over ({} - {}), resetting scores",
                self.left.score,
                self.right.score
            );
            self.left.score = 0;
            self.right.score = 0;
        }
        self.phase = GamePhase::Play;
        log::info!("Serve");
    }
}

fn drive_paddle(paddle: &mut Paddle, input: PaddleInput, ball: &Ball, dt: f32) {
    match input {
        PaddleInput::Keys { up, down } => advance_paddle_manual(paddle, up, down, dt),
        PaddleInput::Cpu => advance_paddle_ai(paddle, ball, dt),
    }
}

/// Advance the session by one frame of `dt` seconds.
///
/// Returns the scoring side when a rally ended this frame.
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) -> Option<Side> {
    match session.phase {
        GamePhase::Start => {
            // Nothing moves until the serve; the serving frame itself is still
            // a standstill
            if input.serve {
                session.serve();
            }
            None
        }
        GamePhase::Play => {
            let ball = session.ball;
            drive_paddle(&mut session.left, input.left, &ball, dt);
            drive_paddle(&mut session.right, input.right, &ball, dt);
            session.advance_ball(dt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window_center;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn serve_input() -> TickInput {
        TickInput {
            serve: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_start_to_play() {
        let mut session = Session::new();
        assert_eq!(session.phase, GamePhase::Start);

        // Tick without serve - should stay in Start
        tick(&mut session, &TickInput::default(), DT);
        assert_eq!(session.phase, GamePhase::Start);

        tick(&mut session, &serve_input(), DT);
        assert_eq!(session.phase, GamePhase::Play);
    }

    #[test]
    fn test_nothing_moves_in_start() {
        let mut session = Session::new();
        let before = session.clone();
        let input = TickInput {
            serve: false,
            left: PaddleInput::Keys {
                up: true,
                down: false,
            },
            right: PaddleInput::Cpu,
        };

        for _ in 0..10 {
            tick(&mut session, &input, DT);
        }

        assert_eq!(session, before);
    }

    #[test]
    fn test_serving_frame_does_not_move_ball() {
        let mut session = Session::new();
        tick(&mut session, &serve_input(), DT);
        assert_eq!(session.ball.pos, window_center());
    }

    #[test]
    fn test_play_moves_ball_and_paddles() {
        let mut session = Session::new();
        session.phase = GamePhase::Play;
        let input = TickInput {
            serve: false,
            left: PaddleInput::Keys {
                up: false,
                down: true,
            },
            right: PaddleInput::Cpu,
        };

        tick(&mut session, &input, 0.1);

        assert_eq!(session.ball.pos, Vec2::new(430.0, 330.0));
        assert_eq!(session.left.pos.y, 330.0);
        // CPU paddle copies the ball height from before the step
        assert_eq!(session.right.pos.y, 300.0);
    }

    #[test]
    fn test_goal_returns_to_start() {
        let mut session = Session::new();
        session.phase = GamePhase::Play;
        session.ball.pos = Vec2::new(5.0, 100.0);
        session.ball.vel = Vec2::new(-600.0, 0.0);

        let scorer = tick(&mut session, &TickInput::default(), DT);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(session.right.score, 1);
        assert_eq!(session.ball.pos, window_center());
        assert_eq!(session.phase, GamePhase::Start);
    }

    #[test]
    fn test_serve_resets_finished_match() {
        let mut session = Session::new();
        session.left.score = WIN_SCORE;
        session.right.score = 1;

        tick(&mut session, &serve_input(), DT);

        assert_eq!(session.scores(), [0, 0]);
        assert_eq!(session.phase, GamePhase::Play);
    }

    #[test]
    fn test_serve_keeps_running_match() {
        let mut session = Session::new();
        session.left.score = 1;
        session.right.score = 2;

        tick(&mut session, &serve_input(), DT);

        assert_eq!(session.scores(), [1, 2]);
        assert_eq!(session.phase, GamePhase::Play);
    }

    #[test]
    fn test_serve_ignored_while_playing() {
        let mut session = Session::new();
        session.phase = GamePhase::Play;
        session.left.score = WIN_SCORE;

        tick(&mut session, &serve_input(), DT);

        assert_eq!(session.left.score, WIN_SCORE);
    }

    #[test]
    fn test_cpu_never_concedes() {
        let mut session = Session::new();
        let input = TickInput {
            serve: true,
            left: PaddleInput::Cpu,
            right: PaddleInput::Cpu,
        };

        for _ in 0..2_000 {
            tick(&mut session, &input, DT);
        }

        assert_eq!(session.scores(), [0, 0]);
        assert_eq!(session.phase, GamePhase::Play);
    }
}
