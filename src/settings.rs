//! Game settings
//!
//! Read once at startup from a JSON file. Rules and resolution are fixed;
//! only who drives each paddle and how the loop is paced can be changed.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Who controls a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Cpu,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Left paddle controller
    pub left: PlayerKind,
    /// Right paddle controller
    pub right: PlayerKind,
    /// Frame pacing target; 0 runs unpaced
    pub target_fps: u32,
    /// Frames the headless platform runs before quitting
    pub headless_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            left: PlayerKind::Human,
            right: PlayerKind::Cpu,
            target_fps: 60,
            headless_frames: 600,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "RASTER_PONG_SETTINGS";
    /// Settings file used when the variable is unset
    pub const DEFAULT_PATH: &'static str = "raster-pong.json";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Settings file location: `$RASTER_PONG_SETTINGS` or `./raster-pong.json`
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Load from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load from `path`, falling back to defaults if the file is missing or bad
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(err) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), err);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Bad settings in {}: {}; using defaults", path.display(), err);
                Self::default()
            }
        }
    }

    /// Target frame duration, `None` when pacing is off
    pub fn frame_interval(&self) -> Option<Duration> {
        if self.target_fps == 0 {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / self.target_fps as f64))
        }
    }

    /// Two humans need separate keys; a lone human gets both pairs
    pub fn is_versus(&self) -> bool {
        self.left == PlayerKind::Human && self.right == PlayerKind::Human
    }
}
