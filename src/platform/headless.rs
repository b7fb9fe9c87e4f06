//! Window-less platform
//!
//! Frames go nowhere (they are only counted), the serve key is
//! held permanently and a `Quit` is queued once the frame budget runs out.
//! Used by the default native build and by the frame-loop tests.

use std::collections::VecDeque;

use super::{InputAction, InputSource, Key, KeyState, Presenter};

pub struct HeadlessPlatform {
    frame_budget: u64,
    frames_presented: u64,
    last_frame_lit: usize,
    keys: KeyState,
    queued: VecDeque<InputAction>,
}

impl HeadlessPlatform {
    /// Auto-serving platform that asks to quit after `frame_budget` frames
    pub fn new(frame_budget: u64) -> Self {
        Self {
            frame_budget,
            frames_presented: 0,
            last_frame_lit: 0,
            keys: KeyState::with_pressed(&[Key::Space]),
            queued: VecDeque::new(),
        }
    }

    /// Queue an input action for the next poll
    pub fn push_action(&mut self, action: InputAction) {
        self.queued.push_back(action);
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Non-black pixels in the most recent frame
    pub fn last_frame_lit(&self) -> usize {
        self.last_frame_lit
    }
}

impl Presenter for HeadlessPlatform {
    fn present(&mut self, pixels: &[u8], pitch: usize) -> anyhow::Result<()> {
        anyhow::ensure!(
            pitch > 0 && pixels.len() % pitch == 0,
            "frame of {} bytes is not a whole number of {}-byte rows",
            pixels.len(),
            pitch
        );

        self.last_frame_lit = pixels
            .chunks_exact(4)
            .filter(|px| px[0] != 0 || px[1] != 0 || px[2] != 0)
            .count();
        self.frames_presented += 1;

        if self.frames_presented % 60 == 0 {
            log::debug!(
                "Headless frame {}: {} lit pixels",
                self.frames_presented,
                self.last_frame_lit
            );
        }
        if self.frames_presented >= self.frame_budget {
            self.queued.push_back(InputAction::Quit);
        }
        Ok(())
    }
}

impl InputSource for HeadlessPlatform {
    fn poll_actions(&mut self) -> Vec<InputAction> {
        let actions: Vec<InputAction> = self.queued.drain(..).collect();
        for action in &actions {
            if let InputAction::KeyChanged(key, pressed) = *action {
                self.keys.set(key, pressed);
            }
        }
        actions
    }

    fn key_state(&self) -> KeyState {
        self.keys
    }
}
