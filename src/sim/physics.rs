//! Movement integration for cargo and players

use glam::Vec2;

use super::bounds::clamp_to_half;
use super::state::WorldState;
use super::tick::PlayerIntent;
use crate::consts::*;

/// Turn movement intents into acceleration (slower while the captain patrols your side)
pub fn steer(state: &mut WorldState, intents: &[PlayerIntent; 2], dt: f32) {
    for (player, intent) in state.players.iter_mut().zip(intents) {
        let dir = intent.movement.clamp_length_max(1.0);
        let slow = state.captain.slowdown(player.side);
        player.vel += dir * PLAYER_ACCEL * slow * dt;
    }
}

/// Integrate loose items, then players, then snap held items to their carriers
pub fn integrate(state: &mut WorldState, dt: f32) {
    let accel = state.waves.lateral_accel();

    for item in state.items.iter_mut() {
        if !item.is_loose() {
            continue;
        }
        item.vel.x += accel * dt;
        item.vel *= ITEM_FRICTION;
        item.pos += item.vel * dt;
        // Loose cargo stays on the half it spawned on
        item.pos = clamp_to_half(item.pos, item.side);
    }

    for player in state.players.iter_mut() {
        player.vel *= PLAYER_DAMPING;
        player.pos += player.vel * dt;
        player.pos = clamp_to_half(player.pos, player.side);
    }

    carry_held(state);
}

/// Held items ride above their carrier and keep a share of its velocity
/// for when they are let go. No clamping: a carrier may walk anywhere on its half.
pub fn carry_held(state: &mut WorldState) {
    for item in state.items.iter_mut() {
        if item.delivered {
            continue;
        }
        if let Some(side) = item.held_by {
            let holder = &state.players[side.index()];
            item.pos = holder.pos - Vec2::new(0.0, CARRY_OFFSET);
            item.vel = holder.vel * CARRY_VELOCITY_SHARE;
        }
    }
}
