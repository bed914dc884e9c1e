//! Per-frame simulation tick
//!
//! Fixed order: waves, captain, steering, pick/drop, physics, deliveries, win check.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Side, WorldState};
use super::{actions, captain, physics, win};
use crate::clamp_frame_dt;

/// One player's resolved controls for a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerIntent {
    /// Desired direction; longer than unit length is clamped
    pub movement: Vec2,
    /// Pick/drop button level (acts on the rising edge)
    pub action: bool,
}

impl PlayerIntent {
    pub fn moving(movement: Vec2) -> Self {
        Self {
            movement,
            action: false,
        }
    }

    pub fn pressing() -> Self {
        Self {
            movement: Vec2::ZERO,
            action: true,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub hard_mode: bool,
    /// Indexed by [`Side::index`]
    pub players: [PlayerIntent; 2],
}

impl TickInput {
    pub fn new(hard_mode: bool, left: PlayerIntent, right: PlayerIntent) -> Self {
        Self {
            hard_mode,
            players: [left, right],
        }
    }

    pub fn for_side(&self, side: Side) -> &PlayerIntent {
        &self.players[side.index()]
    }
}

/// Advance the round by `dt` seconds (clamped to [`crate::consts::MAX_FRAME_DT`]).
///
/// A finished round is left untouched until [`WorldState::reset`]. Flipping
/// `input.hard_mode` mid-round throws the round away and starts a fresh one at
/// the new difficulty.
pub fn tick(state: &mut WorldState, input: &TickInput, dt: f32) {
    if !state.running() {
        return;
    }
    if input.hard_mode != state.hard_mode {
        log::info!("Difficulty changed, restarting round");
        state.reset(input.hard_mode);
    }
    let dt = clamp_frame_dt(dt);

    state.events.clear();
    state.time_ticks += 1;
    state.elapsed += dt;

    let profile = state.tuning.profile(state.hard_mode);
    if let Some(impulse) = state.waves.advance(dt, profile, &mut state.rng) {
        log::debug!("Wave hit: impulse {impulse:+.2}, tilt {:+.2}", state.waves.tilt);
        state.emit(GameEvent::WaveImpulse { impulse });
    }
    captain::update(state, dt);

    physics::steer(state, &input.players, dt);
    for side in Side::BOTH {
        actions::handle_action(state, side, input.for_side(side).action);
    }

    physics::integrate(state, dt);

    for side in Side::BOTH {
        actions::deliver(state, side);
    }

    win::evaluate(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{GamePhase, Outcome};

    #[test]
    fn test_tick_advances_clock() {
        let mut state = WorldState::new(12345, false);
        tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.time_ticks, 2);
        assert!((state.elapsed - (1.0 / 60.0 + MAX_FRAME_DT)).abs() < 1e-6);
    }

    #[test]
    fn test_movement_moves_player() {
        let mut state = WorldState::new(12345, false);
        state.captain.countdown = 100.0;
        state.players[0].pos = Vec2::new(200.0, 300.0);
        state.players[0].vel = Vec2::ZERO;
        let input = TickInput::new(false, PlayerIntent::moving(Vec2::X), PlayerIntent::default());
        for _ in 0..30 {
            tick(&mut state, &input, 1.0 / 60.0);
        }
        assert!(state.players[0].pos.x > 200.0);
        assert!((state.players[0].pos.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_finished_round_is_frozen() {
        let mut state = WorldState::new(5, false);
        state.phase = GamePhase::Finished(Outcome::Draw);
        let before = (state.time_ticks, state.players[0].pos, state.items[0].pos);
        tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        assert_eq!(before, (state.time_ticks, state.players[0].pos, state.items[0].pos));
    }

    #[test]
    fn test_determinism() {
        // Two worlds with the same seed and inputs stay identical
        let mut state1 = WorldState::new(99999, true);
        let mut state2 = WorldState::new(99999, true);

        let inputs = [
            TickInput::new(true, PlayerIntent::moving(Vec2::new(0.5, 0.5)), PlayerIntent::pressing()),
            TickInput::new(true, PlayerIntent::pressing(), PlayerIntent::moving(Vec2::NEG_Y)),
            TickInput::new(true, PlayerIntent::default(), PlayerIntent::default()),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, 1.0 / 60.0);
            tick(&mut state2, input, 1.0 / 60.0);
        }

        assert_eq!(state1.time_ticks, 600);
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.waves.tilt, state2.waves.tilt);
        assert_eq!(state1.captain.pos, state2.captain.pos);
        for (a, b) in state1.items.iter().zip(&state2.items) {
            assert_eq!(a.pos, b.pos);
        }
    }

    #[test]
    fn test_world_difficulty_drives_the_tick() {
        let mut state = WorldState::new(1, true);
        state.waves.next_in = 100.0;
        state.captain.countdown = 100.0;
        state.waves.tilt = 0.0;
        state.waves.tilt_vel = 1.0;
        let input = TickInput::new(true, PlayerIntent::default(), PlayerIntent::default());
        tick(&mut state, &input, 0.01);
        // Hard damping, not normal
        assert!((state.waves.tilt_vel - 0.92).abs() < 1e-6);
        assert!(state.hard_mode);
    }

    #[test]
    fn test_difficulty_change_restarts_round() {
        let mut state = WorldState::new(2, false);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        }
        state.players[0].score = 3;
        state.slots[0].filled = true;

        let hard = TickInput::new(true, PlayerIntent::default(), PlayerIntent::default());
        tick(&mut state, &hard, 1.0 / 60.0);

        assert!(state.hard_mode);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.players[0].score, 0);
        assert!(state.slots.iter().all(|s| !s.filled));

        // Same flag again: the round carries on
        tick(&mut state, &hard, 1.0 / 60.0);
        assert_eq!(state.time_ticks, 2);
    }
}
