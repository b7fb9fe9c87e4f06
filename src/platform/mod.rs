//! Platform abstraction layer
//!
//! The game core only sees these seams:
//! - `Presenter`: takes a finished RGBA frame
//! - `InputSource`: discrete input actions plus a held-key snapshot
//!
//! `headless` runs without a window; `sdl` (feature `sdl`) opens an SDL2
//! window and streams frames into a texture.

pub mod headless;
#[cfg(feature = "sdl")]
pub mod sdl;

pub use headless::HeadlessPlatform;
#[cfg(feature = "sdl")]
pub use sdl::SdlPlatform;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Space,
    Escape,
}

const KEY_COUNT: usize = 6;

impl Key {
    pub const ALL: [Key; KEY_COUNT] = [Key::Up, Key::Down, Key::W, Key::S, Key::Space, Key::Escape];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Discrete input event, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    KeyChanged(Key, bool),
}

/// Which keys are held right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: [bool; KEY_COUNT],
}

impl KeyState {
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.slot()]
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        self.pressed[key.slot()] = pressed;
    }

    /// Snapshot with exactly these keys held
    pub fn with_pressed(keys: &[Key]) -> Self {
        let mut state = Self::default();
        for &key in keys {
            state.set(key, true);
        }
        state
    }
}

/// Hands finished frames to the screen (or wherever)
pub trait Presenter {
    /// `pixels` is row-major RGBA, `pitch` bytes per row. May block until
    /// the backend takes the frame.
    fn present(&mut self, pixels: &[u8], pitch: usize) -> anyhow::Result<()>;
}

/// Non-blocking input polling
pub trait InputSource {
    /// Every action queued since the last call
    fn poll_actions(&mut self) -> Vec<InputAction>;

    /// Current held-key snapshot
    fn key_state(&self) -> KeyState;
}
