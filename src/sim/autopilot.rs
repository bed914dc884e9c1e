//! Demo/idle autopilot: plays one side without human input
//!
//! Fetches cargo that an open slot still needs and walks it home. The slot grid
//! sits in a deck corner, so loaded trips go around the grid and enter the
//! target slot from outside (above for the top row, below for the bottom row)
//! to avoid stumbling over the wrong slot on the way.

use glam::Vec2;

use super::bounds::Rect;
use super::state::{CargoKind, Player, Side, Slot, WorldState};
use super::tick::PlayerIntent;
use crate::consts::*;

/// Stay this far outside the grid when walking around it
const LANE_CLEARANCE: f32 = 14.0;
/// Close enough to a waypoint
const ARRIVE: f32 = 3.0;
/// Press pick when the item is this close
const REACH: f32 = PICK_RADIUS * 0.8;
/// Margin around the slot grid where cargo is not fetched
const GRID_KEEP_OUT: f32 = 24.0;

/// Controls for `side` this tick
pub fn intent(state: &WorldState, side: Side) -> PlayerIntent {
    let player = state.player(side);

    if let Some(item) = player.carrying.and_then(|id| state.item(id)) {
        return match target_slot(state, side, item.kind) {
            Some(slot) => PlayerIntent {
                movement: walk_to(player, slot_approach(state, side, slot, player.pos)),
                action: false,
            },
            // Nowhere to put it: let go
            None => PlayerIntent {
                movement: Vec2::ZERO,
                action: !player.action_latch,
            },
        };
    }

    let Some(target) = wanted_item(state, player) else {
        return PlayerIntent::default();
    };
    let close = player.pos.distance(target) < REACH;
    PlayerIntent {
        movement: walk_to(player, target),
        action: close && !player.action_latch && !state.captain.blocks_pickup(player),
    }
}

/// Intents for both sides
pub fn intents(state: &WorldState) -> [PlayerIntent; 2] {
    [intent(state, Side::Left), intent(state, Side::Right)]
}

/// Unit-ish direction toward `target`, easing off in the last few pixels
fn walk_to(player: &Player, target: Vec2) -> Vec2 {
    let offset = target - player.pos;
    offset / offset.length().max(8.0)
}

fn target_slot(state: &WorldState, side: Side, kind: CargoKind) -> Option<&Slot> {
    state.slots_for(side).find(|s| !s.filled && s.need == kind)
}

/// Nearest loose cargo on our half of a kind some open slot still needs.
///
/// Cargo lying in or right next to the slot grid is left alone until the waves
/// slide it clear; fetching it would mean walking out across the wrong slots.
fn wanted_item(state: &WorldState, player: &Player) -> Option<Vec2> {
    let keep_out = slot_grid(state, player.side).map(|grid| Rect {
        min: grid.min - Vec2::splat(GRID_KEEP_OUT),
        max: grid.max + Vec2::splat(GRID_KEEP_OUT),
    });
    state
        .items
        .iter()
        .filter(|it| it.is_loose() && it.side == player.side)
        .filter(|it| !keep_out.is_some_and(|zone| zone.contains(it.pos)))
        .filter(|it| target_slot(state, player.side, it.kind).is_some())
        .map(|it| it.pos)
        .min_by(|a, b| {
            a.distance_squared(player.pos)
                .partial_cmp(&b.distance_squared(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Bounding box of a side's slot grid
fn slot_grid(state: &WorldState, side: Side) -> Option<Rect> {
    state.slots_for(side).map(|s| s.rect).reduce(|a, b| Rect {
        min: a.min.min(b.min),
        max: a.max.max(b.max),
    })
}

/// Next waypoint on the way into `slot`
fn slot_approach(state: &WorldState, side: Side, slot: &Slot, pos: Vec2) -> Vec2 {
    let centre = slot.rect.center();
    let Some(grid) = slot_grid(state, side) else {
        return centre;
    };

    // The grid hugs the outer edge; the free lane is on the divider side
    let (inward, lane_x) = match side {
        Side::Left => (pos.x > grid.max.x + ARRIVE, grid.max.x + LANE_CLEARANCE),
        Side::Right => (pos.x < grid.min.x - ARRIVE, grid.min.x - LANE_CLEARANCE),
    };
    let in_column = (pos.x - centre.x).abs() <= ARRIVE;
    let top_row = slot.rect.min.y <= grid.min.y;

    if top_row {
        let lane_y = DECK_Y + EDGE_INSET + 1.0;
        let above = pos.y < grid.min.y;
        let below = pos.y > grid.max.y + ARRIVE;
        if above {
            if in_column { centre } else { Vec2::new(centre.x, lane_y) }
        } else if inward {
            Vec2::new(lane_x, lane_y)
        } else if below {
            Vec2::new(lane_x, pos.y)
        } else {
            centre
        }
    } else {
        let lane_y = grid.max.y + LANE_CLEARANCE;
        let below = pos.y > grid.max.y + ARRIVE;
        if below {
            if in_column { centre } else { Vec2::new(centre.x, lane_y) }
        } else if inward {
            Vec2::new(lane_x, lane_y)
        } else {
            centre
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};

    fn quiet_world() -> WorldState {
        let mut state = WorldState::new(2024, false);
        state.captain.countdown = 1.0e6;
        state.waves.next_in = 1.0e6;
        state
    }

    #[test]
    fn test_heads_for_nearest_needed_item() {
        let mut state = quiet_world();
        state.players[0].pos = Vec2::new(300.0, 300.0);
        for item in state.items.iter_mut().filter(|it| it.side == Side::Left) {
            item.pos = Vec2::new(100.0, 450.0);
        }
        state.items[0].pos = Vec2::new(340.0, 300.0);
        let intent = intent(&state, Side::Left);
        assert!(intent.movement.x > 0.9);
        assert!(!intent.action);
    }

    #[test]
    fn test_presses_when_in_reach() {
        let mut state = quiet_world();
        state.players[0].pos = Vec2::new(300.0, 300.0);
        state.items[0].pos = Vec2::new(305.0, 300.0);
        assert!(intent(&state, Side::Left).action);

        // Already holding the button: release first
        state.players[0].action_latch = true;
        assert!(!intent(&state, Side::Left).action);
    }

    #[test]
    fn test_drops_unneeded_cargo() {
        let mut state = quiet_world();
        let id = state.items[0].id;
        let kind = state.items[0].kind;
        state.items[0].held_by = Some(Side::Left);
        state.players[0].carrying = Some(id);
        for slot in state.slots.iter_mut().filter(|s| s.need == kind) {
            slot.filled = true;
        }
        assert!(intent(&state, Side::Left).action);
    }

    #[test]
    fn test_ignores_cargo_beside_the_grid() {
        let mut state = quiet_world();
        for item in state.items.iter_mut() {
            item.pos = state.slots[0].rect.center();
        }
        state.players[0].pos = Vec2::new(300.0, 300.0);
        assert_eq!(intent(&state, Side::Left), PlayerIntent::default());
    }

    #[test]
    fn test_loaded_trip_enters_from_outside() {
        let state = quiet_world();
        let grid = slot_grid(&state, Side::Left).unwrap();
        let top = &state.slots[0];
        // From the open deck, head for the lane first
        let pos = Vec2::new(300.0, 300.0);
        assert_eq!(slot_approach(&state, Side::Left, top, pos).x, grid.max.x + LANE_CLEARANCE);
        // Lined up above the slot: go straight in
        let pos = Vec2::new(top.rect.center().x, DECK_Y + EDGE_INSET);
        assert_eq!(slot_approach(&state, Side::Left, top, pos), top.rect.center());
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = quiet_world();
        for _ in 0..(60 * 90) {
            let input = TickInput {
                hard_mode: false,
                players: intents(&state),
            };
            tick(&mut state, &input, 1.0 / 60.0);
            if state.players.iter().all(|p| p.score > 0) {
                break;
            }
        }
        assert!(state.players.iter().all(|p| p.score > 0));
    }
}
