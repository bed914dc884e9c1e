//! Deck Duel - a two-player cargo race on a rolling ship deck
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, actions, waves, captain, win check)
//! - `tuning`: Data-driven difficulty profiles
//! - `settings`: Runtime preferences for the native demo runner
//! - `error`: Configuration loading errors

pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::{DifficultyProfile, Span, Tuning};

/// Game configuration constants
pub mod consts {
    /// Largest delta a single tick may integrate (~30 Hz)
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

    /// Deck rectangle (screen coordinates, +Y points down)
    pub const DECK_X: f32 = 60.0;
    pub const DECK_Y: f32 = 70.0;
    pub const DECK_W: f32 = 840.0;
    pub const DECK_H: f32 = 400.0;
    /// Centre divider between port (left) and starboard (right)
    pub const MID_X: f32 = DECK_X + DECK_W / 2.0;
    /// How close to a deck edge or the divider an entity centre may get
    pub const EDGE_INSET: f32 = 10.0;

    /// Pseudo-gravity applied along the tilt
    pub const TILT_GRAVITY: f32 = 900.0;
    /// Loose item friction (per tick)
    pub const ITEM_FRICTION: f32 = 0.90;
    /// Player velocity damping (per tick)
    pub const PLAYER_DAMPING: f32 = 0.86;
    /// Player acceleration from a full-length movement intent
    pub const PLAYER_ACCEL: f32 = 260.0;

    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const ITEM_RADIUS: f32 = 12.0;
    pub const ITEMS_PER_SIDE: usize = 12;
    /// Random initial item speed on each axis
    pub const ITEM_SPAWN_SPEED: f32 = 40.0;

    /// Held items float this far above the carrier
    pub const CARRY_OFFSET: f32 = 20.0;
    /// Fraction of the carrier's velocity a held item inherits
    pub const CARRY_VELOCITY_SHARE: f32 = 0.2;
    /// Maximum centre distance for a pickup
    pub const PICK_RADIUS: f32 = 22.0;
    /// Velocity multiplier after dropping cargo on the wrong slot
    pub const STUMBLE_FACTOR: f32 = 0.2;

    /// Slot layout
    pub const SLOTS_PER_SIDE: usize = 6;
    pub const SLOT_COLUMNS: usize = 3;
    pub const SLOT_SIZE: f32 = 46.0;
    pub const SLOT_GAP: f32 = 10.0;
    pub const SLOT_MARGIN: f32 = 16.0;

    /// Tilt oscillator
    pub const TILT_SPRING: f32 = 2.2;
    pub const TILT_LIMIT: f32 = 1.2;

    /// Captain
    pub const CAPTAIN_RADIUS: f32 = 26.0;
    /// Extra reach beyond captain + player radius for the shove
    pub const CAPTAIN_REACH_MARGIN: f32 = 2.0;
    /// Players closer than this to an active captain cannot pick up cargo
    pub const CAPTAIN_PICK_BLOCK: f32 = CAPTAIN_RADIUS + 18.0;
    pub const CAPTAIN_SHOVE: f32 = 420.0;
    pub const CAPTAIN_ITEM_KICK: f32 = 260.0;
    /// Movement multiplier while the captain patrols your side
    pub const CAPTAIN_SLOWDOWN: f32 = 0.78;
}

/// Clamp a raw frame delta (seconds) to the range a tick can integrate safely
#[inline]
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if dt.is_nan() {
        return 0.0;
    }
    dt.clamp(0.0, consts::MAX_FRAME_DT)
}

/// Converts wall-clock timestamps (milliseconds) into clamped tick deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous call, in seconds. The first call yields zero.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        clamp_frame_dt(dt)
    }

    /// Forget the previous timestamp (call after a reset or a long pause)
    pub fn restart(&mut self) {
        self.last_ms = None;
    }
}
