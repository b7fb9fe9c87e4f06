//! SDL2 window platform
//!
//! One streaming ABGR8888 texture (byte order R, G, B, A on little-endian)
//! receives the frame buffer unchanged every frame.

use anyhow::Context;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

use super::{InputAction, InputSource, Key, KeyState, Presenter};

const TITLE: &str = "Raster Pong";

pub struct SdlPlatform {
    // `unsafe_textures` textures have no `Drop`; released in `Drop for SdlPlatform`
    texture: Option<Texture>,
    _texture_creator: TextureCreator<WindowContext>,
    canvas: WindowCanvas,
    event_pump: EventPump,
    _context: sdl2::Sdl,
}

impl SdlPlatform {
    /// Open a `width` x `height` window with an accelerated renderer
    pub fn new(width: u32, height: u32) -> anyhow::Result<Self> {
        let context = sdl2::init().map_err(anyhow::Error::msg).context("initializing SDL")?;
        let video = context
            .video()
            .map_err(anyhow::Error::msg)
            .context("initializing SDL video")?;

        let window = video
            .window(TITLE, width, height)
            .position_centered()
            .build()
            .context("creating window")?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .context("creating renderer")?;

        let texture_creator = canvas.texture_creator();
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .context("creating frame texture")?;

        let event_pump = context
            .event_pump()
            .map_err(anyhow::Error::msg)
            .context("creating event pump")?;

        log::info!("SDL window {}x{} ready", width, height);

        Ok(Self {
            texture: Some(texture),
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            _context: context,
        })
    }
}

impl Drop for SdlPlatform {
    fn drop(&mut self) {
        if let Some(texture) = self.texture.take() {
            // SAFETY: the canvas that owns the renderer is still alive here;
            // fields drop only after this body returns.
            unsafe { texture.destroy() };
        }
    }
}

fn key_for(scancode: Scancode) -> Option<Key> {
    match scancode {
        Scancode::Up => Some(Key::Up),
        Scancode::Down => Some(Key::Down),
        Scancode::W => Some(Key::W),
        Scancode::S => Some(Key::S),
        Scancode::Space => Some(Key::Space),
        Scancode::Escape => Some(Key::Escape),
        _ => None,
    }
}

fn scancode_for(key: Key) -> Scancode {
    match key {
        Key::Up => Scancode::Up,
        Key::Down => Scancode::Down,
        Key::W => Scancode::W,
        Key::S => Scancode::S,
        Key::Space => Scancode::Space,
        Key::Escape => Scancode::Escape,
    }
}

impl Presenter for SdlPlatform {
    fn present(&mut self, pixels: &[u8], pitch: usize) -> anyhow::Result<()> {
        let texture = self.texture.as_mut().context("frame texture released")?;
        texture
            .update(None, pixels, pitch)
            .context("uploading frame")?;
        self.canvas
            .copy(texture, None, None)
            .map_err(anyhow::Error::msg)
            .context("copying frame")?;
        self.canvas.present();
        Ok(())
    }
}

impl InputSource for SdlPlatform {
    fn poll_actions(&mut self) -> Vec<InputAction> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| match event {
                Event::Quit { .. } => Some(InputAction::Quit),
                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => key_for(sc).map(|key| InputAction::KeyChanged(key, true)),
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => key_for(sc).map(|key| InputAction::KeyChanged(key, false)),
                _ => None,
            })
            .collect()
    }

    fn key_state(&self) -> KeyState {
        let keyboard = self.event_pump.keyboard_state();
        let mut keys = KeyState::default();
        for key in Key::ALL {
            keys.set(key, keyboard.is_scancode_pressed(scancode_for(key)));
        }
        keys
    }
}
