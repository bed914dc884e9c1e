//! Runtime preferences for the native runner
//!
//! Loaded from an optional JSON file; anything missing takes its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Harder waves and a busier captain
    pub hard_mode: bool,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
    /// Rounds played by the demo match
    pub demo_rounds: u32,
    /// Simulated frames per second for the demo match
    pub demo_fps: f32,
    /// Give up on a demo round after this many seconds
    pub demo_round_limit_secs: f32,
    /// Pace the demo on the wall clock instead of stepping as fast as possible
    pub demo_realtime: bool,
    /// Optional tuning override file
    pub tuning_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hard_mode: false,
            seed: None,
            demo_rounds: 3,
            demo_fps: 60.0,
            demo_round_limit_secs: 300.0,
            demo_realtime: false,
            tuning_path: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings: {err}");
                Self::default()
            }
        }
    }

    /// Tuning selected by these settings
    pub fn tuning(&self) -> Tuning {
        match &self.tuning_path {
            Some(path) => Tuning::load(path),
            None => Tuning::default(),
        }
    }

    /// Simulated frame delta for the demo match
    pub fn demo_dt(&self) -> f32 {
        if self.demo_fps > 0.0 {
            crate::clamp_frame_dt(1.0 / self.demo_fps)
        } else {
            crate::consts::MAX_FRAME_DT
        }
    }
}
