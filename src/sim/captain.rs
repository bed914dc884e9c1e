//! The captain: a roaming nuisance that shoves deckhands and knocks cargo loose
//!
//! Two states: off deck (counting down to the next visit) and on deck on one
//! side (counting down to leaving). While on deck, anyone on that side who gets
//! too close is pushed away and drops whatever they carry.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::{Rect, deck, spawn_area};
use super::state::{GameEvent, Player, Side, WorldState};
use crate::consts::*;
use crate::tuning::DifficultyProfile;

/// Direction used when a player stands exactly on the captain (straight up)
const SHOVE_FALLBACK: Vec2 = Vec2::NEG_Y;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Captain {
    pub active: bool,
    pub side: Side,
    pub pos: Vec2,
    pub radius: f32,
    /// Time left on deck while active, time until the next visit otherwise
    pub countdown: f32,
}

impl Captain {
    /// Off deck, first visit scheduled
    pub fn new<R: Rng + ?Sized>(profile: &DifficultyProfile, rng: &mut R) -> Self {
        Self {
            active: false,
            side: Side::Left,
            pos: deck().center(),
            radius: CAPTAIN_RADIUS,
            countdown: profile.captain_idle.sample(rng),
        }
    }

    /// Where the captain may appear on a side
    pub fn patrol_area(side: Side) -> Rect {
        spawn_area(side, 80.0, 120.0, 60.0)
    }

    /// Active on `side`
    pub fn patrols(&self, side: Side) -> bool {
        self.active && self.side == side
    }

    /// Distance within which the captain shoves `player`
    pub fn reach(&self, player: &Player) -> f32 {
        self.radius + player.radius + CAPTAIN_REACH_MARGIN
    }

    /// Too close to the captain to pick anything up
    pub fn blocks_pickup(&self, player: &Player) -> bool {
        self.patrols(player.side)
            && player.pos.distance_squared(self.pos) < CAPTAIN_PICK_BLOCK * CAPTAIN_PICK_BLOCK
    }

    /// Movement multiplier for a player on `side`
    pub fn slowdown(&self, side: Side) -> f32 {
        if self.patrols(side) { CAPTAIN_SLOWDOWN } else { 1.0 }
    }

    fn arrive<R: Rng + ?Sized>(&mut self, profile: &DifficultyProfile, rng: &mut R) {
        self.active = true;
        self.side = if rng.random_bool(0.5) { Side::Left } else { Side::Right };
        self.pos = Self::patrol_area(self.side).sample(rng);
        self.countdown = profile.captain_active.sample(rng);
    }

    fn leave<R: Rng + ?Sized>(&mut self, profile: &DifficultyProfile, rng: &mut R) {
        self.active = false;
        self.countdown = profile.captain_idle.sample(rng);
    }
}

/// Advance the captain and apply shoves for this tick
pub fn update(state: &mut WorldState, dt: f32) {
    let profile = state.tuning.profile(state.hard_mode);
    let captain = &mut state.captain;
    captain.countdown -= dt;

    if !captain.active {
        if captain.countdown <= 0.0 {
            captain.arrive(profile, &mut state.rng);
            let (side, pos) = (captain.side, captain.pos);
            log::info!("Captain on deck ({side:?}) at ({:.0}, {:.0})", pos.x, pos.y);
            state.emit(GameEvent::CaptainArrived { side, pos });
        }
        return;
    }

    if captain.countdown <= 0.0 {
        captain.leave(profile, &mut state.rng);
        log::info!("Captain left, back in {:.1}s", captain.countdown);
        state.emit(GameEvent::CaptainLeft);
        return;
    }

    let mut shoves = Vec::new();
    for player in state.players.iter_mut() {
        if player.side != captain.side {
            continue;
        }
        let reach = captain.reach(player);
        let offset = player.pos - captain.pos;
        if offset.length_squared() >= reach * reach {
            continue;
        }
        let dir = offset.try_normalize().unwrap_or(SHOVE_FALLBACK);
        player.vel += dir * CAPTAIN_SHOVE;

        let dropped = player.carrying.take();
        if let Some(id) = dropped {
            if let Some(item) = state.items.iter_mut().find(|it| it.id == id) {
                item.held_by = None;
                item.vel += dir * CAPTAIN_ITEM_KICK;
            }
        }
        shoves.push(GameEvent::CaptainShove {
            side: player.side,
            dropped,
        });
    }
    for event in shoves {
        state.emit(event);
    }
}
