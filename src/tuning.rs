//! Data-driven difficulty profiles
//!
//! Everything that differs between normal and hard mode lives here so it can be
//! tweaked from a JSON file without touching the simulation.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Closed range of seconds (or magnitudes) sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Symmetric span `[-magnitude, magnitude]`
    pub const fn symmetric(magnitude: f32) -> Self {
        Self {
            min: -magnitude,
            max: magnitude,
        }
    }

    /// Draw a value; degenerate spans collapse to `min`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.random_range(self.min..self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Parameters that vary with difficulty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Tilt-velocity impulse added by each wave
    pub wave_impulse: Span,
    /// Delay between waves
    pub wave_interval: Span,
    /// Delay before the first wave of a round
    pub first_wave: Span,
    /// Per-tick multiplier on tilt velocity
    pub tilt_damping: f32,
    /// Time the captain stays on deck
    pub captain_active: Span,
    /// Time between captain visits (also seeds the first visit)
    pub captain_idle: Span,
}

impl DifficultyProfile {
    pub fn normal() -> Self {
        Self {
            wave_impulse: Span::symmetric(2.0),
            wave_interval: Span::new(1.4, 3.0),
            first_wave: Span::new(1.6, 3.2),
            tilt_damping: 0.94,
            captain_active: Span::new(3.5, 5.5),
            captain_idle: Span::new(6.0, 11.0),
        }
    }

    /// Bigger, more frequent, less damped waves and a busier captain
    pub fn hard() -> Self {
        Self {
            wave_impulse: Span::symmetric(2.6),
            wave_interval: Span::new(0.9, 2.0),
            first_wave: Span::new(1.0, 2.2),
            tilt_damping: 0.92,
            captain_active: Span::new(3.0, 4.5),
            captain_idle: Span::new(4.0, 7.0),
        }
    }
}

/// Both difficulty profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub normal: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            normal: DifficultyProfile::normal(),
            hard: DifficultyProfile::hard(),
        }
    }
}

impl Tuning {
    pub fn profile(&self, hard_mode: bool) -> &DifficultyProfile {
        if hard_mode { &self.hard } else { &self.normal }
    }

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

    /// Load from a file, falling back to the built-in profiles
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!("Using default tuning: {err}");
                Self::default()
            }
        }
    }
}
