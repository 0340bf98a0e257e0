//! Runtime settings for the native runner
//!
//! Gameplay balance lives in `tuning`; this file only covers how the game is
//! run (frame cap, debug, seed, demo mode).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::error::ConfigError;

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "AZURE_SETTINGS";
/// Environment variable overriding the run seed
pub const SEED_ENV: &str = "AZURE_SEED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame cap; one simulation step per frame
    pub frame_rate: u32,
    /// Seconds to hold the death screen before exiting
    pub death_delay_secs: f32,
    /// Start with debug mode on
    pub debug: bool,
    /// Show the FPS line while debugging
    pub show_fps: bool,
    /// Let the autopilot play
    pub demo: bool,
    /// Run seed; derived from the clock when unset
    pub seed: Option<u64>,
    /// Optional tuning file
    pub tuning_path: Option<PathBuf>,
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: TARGET_FPS,
            death_delay_secs: 5.0,
            debug: false,
            show_fps: true,
            demo: true,
            seed: None,
            tuning_path: None,
            max_frames: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Resolve settings from the command line / environment.
    ///
    /// An explicitly named file must load; with no file named, defaults apply.
    /// `AZURE_SEED` overrides the seed either way.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(SETTINGS_ENV).map(PathBuf::from));

        let mut settings = match path {
            Some(path) => Self::load(path)?,
            None => {
                log::warn!("No settings file given, using defaults");
                Self::default()
            }
        };

        if let Some(seed) = std::env::var(SEED_ENV)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            settings.seed = Some(seed);
        }
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be non-zero".into()));
        }
        if self.death_delay_secs.is_nan() || self.death_delay_secs < 0.0 {
            return Err(ConfigError::Invalid(
                "death_delay_secs must be zero or positive".into(),
            ));
        }
        Ok(())
    }

    /// Seconds per frame at the configured cap
    pub fn frame_secs(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }
}
