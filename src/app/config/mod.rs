// SPDX-License-Identifier: MPL-2.0
//! Application configuration loaded from `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[timing]` - Overrides for the stage delays and countdown pacing
//! - `[media]` - Media source for the reveal stage
//! - `[content]` - Path to a content TOML replacing the embedded document
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_KEEPSAKE_CONFIG_DIR`
//! 3. Falls back to the platform config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Stage delay overrides, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TimingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro_first_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro_second_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countdown_tick_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_hold_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bond_hold_ms: Option<u64>,
}

/// Media source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MediaConfig {
    /// Path to the animated file played during the reveal stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

/// Content feed settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContentConfig {
    /// Content TOML replacing the embedded document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

/// Resolved stage delays with all defaults applied. The sequencer reads
/// durations from here, never from the raw config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub intro_first: Duration,
    pub intro_second: Duration,
    pub countdown_tick: Duration,
    pub ready_hold: Duration,
    pub bond_hold: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_config(&TimingConfig::default())
    }
}

impl Timing {
    pub fn from_config(config: &TimingConfig) -> Self {
        // Zero delays are clamped to 1 ms so a broken config cannot make a
        // subscription spin.
        fn ms(value: Option<u64>, default: u64) -> Duration {
            Duration::from_millis(value.unwrap_or(default).max(1))
        }

        Self {
            intro_first: ms(config.intro_first_ms, DEFAULT_INTRO_FIRST_MS),
            intro_second: ms(config.intro_second_ms, DEFAULT_INTRO_SECOND_MS),
            countdown_tick: ms(config.countdown_tick_ms, DEFAULT_COUNTDOWN_TICK_MS),
            ready_hold: ms(config.ready_hold_ms, DEFAULT_READY_HOLD_MS),
            bond_hold: ms(config.bond_hold_ms, DEFAULT_BOND_HOLD_MS),
        }
    }
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
