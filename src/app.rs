//! Frame loop
//!
//! One iteration: drain input, step the state machine, redraw, present, then
//! sleep off whatever is left of the frame interval. The measured length of a
//! frame (sleep included) is the `dt` of the next one.

use std::time::Instant;

use crate::platform::{InputAction, InputSource, Key, KeyState, Presenter};
use crate::renderer::{FrameBuffer, render_session};
use crate::settings::{PlayerKind, Settings};
use crate::sim::{PaddleInput, Session, TickInput, tick};

/// Map held keys onto both paddles.
///
/// Two humans: left on W/S, right on Up/Down. A single human answers to
/// either pair.
pub fn tick_input(keys: &KeyState, settings: &Settings) -> TickInput {
    let versus = settings.is_versus();
    let wasd = (keys.is_pressed(Key::W), keys.is_pressed(Key::S));
    let arrows = (keys.is_pressed(Key::Up), keys.is_pressed(Key::Down));

    let paddle = |kind: PlayerKind, own: (bool, bool), other: (bool, bool)| match kind {
        PlayerKind::Cpu => PaddleInput::Cpu,
        PlayerKind::Human if versus => PaddleInput::Keys {
            up: own.0,
            down: own.1,
        },
        PlayerKind::Human => PaddleInput::Keys {
            up: own.0 || other.0,
            down: own.1 || other.1,
        },
    };

    TickInput {
        serve: keys.is_pressed(Key::Space),
        left: paddle(settings.left, wasd, arrows),
        right: paddle(settings.right, arrows, wasd),
    }
}

/// Session plus the buffer it is drawn into
pub struct Game {
    pub session: Session,
    pub buffer: FrameBuffer,
    settings: Settings,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(),
            buffer: FrameBuffer::new(),
            settings,
        }
    }

    /// Simulate and redraw one frame
    pub fn step(&mut self, keys: &KeyState, dt: f32) {
        let input = tick_input(keys, &self.settings);
        tick(&mut self.session, &input, dt);
        render_session(&self.session, &mut self.buffer);
    }
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub scores: [u32; 2],
}

/// Run until the platform reports a quit.
pub fn run<P>(platform: &mut P, settings: &Settings) -> RunSummary
where
    P: Presenter + InputSource,
{
    let mut game = Game::new(settings.clone());
    let interval = settings.frame_interval();
    let mut frames = 0u64;
    let mut dt = 0.0f32;
    let mut running = true;

    log::info!(
        "Starting: left {:?}, right {:?}, {} fps target",
        settings.left,
        settings.right,
        settings.target_fps
    );

    while running {
        let frame_start = Instant::now();

        for action in platform.poll_actions() {
            match action {
                InputAction::Quit | InputAction::KeyChanged(Key::Escape, true) => running = false,
                InputAction::KeyChanged(..) => {}
            }
        }

        let keys = platform.key_state();
        game.step(&keys, dt);

        if let Err(err) = platform.present(game.buffer.as_bytes(), game.buffer.pitch()) {
            log::warn!("Present failed: {:#}", err);
        }
        frames += 1;

        if let Some(interval) = interval {
            let elapsed = frame_start.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
        }
        dt = frame_start.elapsed().as_secs_f32();
    }

    let summary = RunSummary {
        frames,
        scores: game.session.scores(),
    };
    log::info!(
        "Stopped after {} frames, final score {} - {}",
        summary.frames,
        summary.scores[0],
        summary.scores[1]
    );
    summary
}
