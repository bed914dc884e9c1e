//! Waves: a damped tilt oscillator kicked by random impulses
//!
//! The tilt is not a real rotation of the deck, just a scalar that the
//! physics step turns into sideways acceleration on loose cargo.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{TILT_GRAVITY, TILT_LIMIT, TILT_SPRING};
use crate::tuning::DifficultyProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waves {
    /// Current tilt, clamped to ±[`TILT_LIMIT`]
    pub tilt: f32,
    pub tilt_vel: f32,
    /// Seconds until the next impulse
    pub next_in: f32,
}

impl Waves {
    /// Calm sea with the first wave scheduled
    pub fn new<R: Rng + ?Sized>(profile: &DifficultyProfile, rng: &mut R) -> Self {
        Self {
            tilt: 0.0,
            tilt_vel: 0.0,
            next_in: profile.first_wave.sample(rng),
        }
    }

    /// Advance by `dt`. Returns the impulse applied this tick, if a wave hit.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        profile: &DifficultyProfile,
        rng: &mut R,
    ) -> Option<f32> {
        self.next_in -= dt;
        let mut impulse = None;
        if self.next_in <= 0.0 {
            let kick = profile.wave_impulse.sample(rng);
            self.tilt_vel += kick;
            self.next_in = profile.wave_interval.sample(rng);
            impulse = Some(kick);
        }

        // Spring back toward level, then damp
        self.tilt_vel += -self.tilt * TILT_SPRING * dt;
        self.tilt_vel *= profile.tilt_damping;
        self.tilt = (self.tilt + self.tilt_vel * dt).clamp(-TILT_LIMIT, TILT_LIMIT);

        impulse
    }

    /// Sideways acceleration the tilt imparts on loose cargo
    pub fn lateral_accel(&self) -> f32 {
        self.tilt.sin() * TILT_GRAVITY
    }
}
