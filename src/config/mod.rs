// SPDX-License-Identifier: MPL-2.0
//! This module handles the engine's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Every field is optional in the file; the accessor methods resolve missing
//! values to [`defaults`] and clamp out-of-range ones.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_duration_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.default_duration_ms, Some(5000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::diagnostics::BufferCapacity;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// How the engine treats a monitor's work area after the first capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryPolicy {
    /// Re-query the work area on every show and restack if it moved.
    #[default]
    Refresh,
    /// Keep the first captured work area for the lifetime of the manager.
    ///
    /// Resolution or layout changes are not reflected on known monitors.
    Cached,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub spacing: Option<f32>,
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub fade_interval_ms: Option<u64>,
    #[serde(default)]
    pub fade_step: Option<f32>,
    #[serde(default)]
    pub max_message_lines: Option<u32>,
    #[serde(default)]
    pub hover_opacity: Option<bool>,
    #[serde(default)]
    pub monitor_geometry: Option<GeometryPolicy>,
    #[serde(default)]
    pub spinner_interval_ms: Option<u64>,
    #[serde(default)]
    pub spinner_step_degrees: Option<u16>,
    #[serde(default)]
    pub spinner_dots: Option<u8>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Config {
    /// Gap between toasts, and between the stack and the work-area edges.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        self.spacing
            .filter(|s| s.is_finite())
            .unwrap_or(DEFAULT_SPACING)
            .clamp(MIN_SPACING, MAX_SPACING)
    }

    /// Auto-close delay used when the caller does not pass one.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS))
    }

    #[must_use]
    pub fn fade_interval(&self) -> Duration {
        Duration::from_millis(
            self.fade_interval_ms
                .unwrap_or(DEFAULT_FADE_INTERVAL_MS)
                .clamp(MIN_FADE_INTERVAL_MS, MAX_FADE_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn fade_step(&self) -> f32 {
        self.fade_step
            .filter(|s| s.is_finite())
            .unwrap_or(DEFAULT_FADE_STEP)
            .clamp(MIN_FADE_STEP, MAX_FADE_STEP)
    }

    #[must_use]
    pub fn max_message_lines(&self) -> u32 {
        self.max_message_lines
            .unwrap_or(DEFAULT_MAX_MESSAGE_LINES)
            .clamp(MIN_MAX_MESSAGE_LINES, MAX_MAX_MESSAGE_LINES)
    }

    #[must_use]
    pub fn hover_opacity(&self) -> bool {
        self.hover_opacity.unwrap_or(false)
    }

    #[must_use]
    pub fn monitor_geometry(&self) -> GeometryPolicy {
        self.monitor_geometry.unwrap_or_default()
    }

    #[must_use]
    pub fn spinner_interval(&self) -> Duration {
        Duration::from_millis(
            self.spinner_interval_ms
                .unwrap_or(DEFAULT_SPINNER_INTERVAL_MS)
                .max(1),
        )
    }

    #[must_use]
    pub fn spinner_step_degrees(&self) -> u16 {
        self.spinner_step_degrees
            .unwrap_or(DEFAULT_SPINNER_STEP_DEGREES)
            % 360
    }

    #[must_use]
    pub fn spinner_dots(&self) -> u8 {
        self.spinner_dots
            .unwrap_or(DEFAULT_SPINNER_DOTS)
            .clamp(MIN_SPINNER_DOTS, MAX_SPINNER_DOTS)
    }

    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(
            self.diagnostics_capacity
                .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
