//! Pick up, drop and deliver cargo
//!
//! Pick/drop fires on the rising edge of the action input. Delivery is checked
//! every tick while a player carries something.

use super::bounds::clamp_to_half;
use super::state::{GameEvent, Item, Player, Side, WorldState};
use crate::consts::*;

/// Index of the closest item `player` may pick up, if any is within reach.
///
/// Only loose items that spawned on the player's own half qualify. On an exact
/// distance tie the earlier item wins.
pub fn nearest_pickable(items: &[Item], player: &Player) -> Option<usize> {
    let mut best = None;
    let mut best_d2 = PICK_RADIUS * PICK_RADIUS;
    for (i, item) in items.iter().enumerate() {
        if !item.is_loose() || item.side != player.side {
            continue;
        }
        let d2 = player.pos.distance_squared(item.pos);
        if d2 < best_d2 {
            best = Some(i);
            best_d2 = d2;
        }
    }
    best
}

/// Feed this tick's action level for one player; acts on the rising edge only
pub fn handle_action(state: &mut WorldState, side: Side, pressed: bool) {
    let player = &mut state.players[side.index()];
    let rising = pressed && !player.action_latch;
    player.action_latch = pressed;
    if !rising {
        return;
    }

    if let Some(id) = player.carrying.take() {
        if let Some(item) = state.items.iter_mut().find(|it| it.id == id) {
            item.held_by = None;
            state.emit(GameEvent::Dropped { side, item: id });
        }
        return;
    }

    if state.captain.blocks_pickup(player) {
        log::debug!("{side:?} pickup blocked by the captain");
        return;
    }
    let Some(index) = nearest_pickable(&state.items, player) else {
        return;
    };
    let item = &mut state.items[index];
    item.held_by = Some(side);
    player.carrying = Some(item.id);
    let id = item.id;
    state.emit(GameEvent::PickedUp { side, item: id });
}

/// Drop carried cargo into the first open slot under the player.
///
/// A matching slot takes the item for good and scores a point. A wrong slot
/// makes the player drop the item where it is and stumble.
pub fn deliver(state: &mut WorldState, side: Side) {
    let player = &mut state.players[side.index()];
    let Some(id) = player.carrying else {
        return;
    };
    let Some(item) = state.items.iter_mut().find(|it| it.id == id && !it.delivered) else {
        // Stale reference; nothing to deliver
        player.carrying = None;
        return;
    };
    let Some((slot_index, slot)) = state
        .slots
        .iter_mut()
        .enumerate()
        .find(|(_, s)| s.side == side && !s.filled && s.rect.contains(player.pos))
    else {
        return;
    };

    item.held_by = None;
    player.carrying = None;

    let event = if slot.need == item.kind {
        slot.filled = true;
        item.delivered = true;
        player.score += 1;
        GameEvent::Delivered {
            side,
            item: id,
            slot: slot_index,
        }
    } else {
        player.vel *= STUMBLE_FACTOR;
        // Dropped where it was carried, but never off the deck edge
        item.pos = clamp_to_half(item.pos, item.side);
        GameEvent::Misdelivered {
            side,
            item: id,
            slot: slot_index,
        }
    };
    state.emit(event);
}
