//! Configuration for the digirain screensaver.
//!
//! An optional TOML file in the platform config directory can override the
//! quote list, timings, and title. Any load failure falls back to the
//! defaults silently; nothing in the app requires the file to exist.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;

use digirain_core::{AnimationSpeed, QUOTE_PAUSE, TYPING_INTERVAL};

/// User configuration, all fields optional in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rain animation speed.
    pub speed: AnimationSpeed,
    /// Heading shown above the quote.
    pub title: String,
    /// Replacement quote rotation; empty keeps the built-in list.
    pub quotes: Vec<String>,
    /// Milliseconds between revealed characters.
    pub typing_interval_ms: u64,
    /// Milliseconds to hold a finished quote before the next one.
    pub pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: AnimationSpeed::default(),
            title: "Matrix Code".to_string(),
            quotes: Vec::new(),
            typing_interval_ms: TYPING_INTERVAL.as_millis() as u64,
            pause_ms: QUOTE_PAUSE.as_millis() as u64,
        }
    }
}

impl Config {
    /// Load configuration from the platform config directory, falling
    /// back to defaults if the file is missing or malformed.
    pub fn load() -> Self {
        config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

/// Path of the config file: `<platform config dir>/digirain/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "digirain").map(|dirs| dirs.config_dir().join("config.toml"))
}
