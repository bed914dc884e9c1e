//! Entity construction with side-constrained random placement

use glam::Vec2;
use rand::Rng;

use super::bounds::{Rect, spawn_area};
use super::state::{CargoKind, Item, Player, Side, Slot};
use crate::consts::*;

/// Required kinds per slot, row-major over the 2x3 grid
pub const SLOT_PATTERN: [CargoKind; SLOTS_PER_SIDE] = [
    CargoKind::Cordage,
    CargoKind::Crate,
    CargoKind::Tool,
    CargoKind::Tool,
    CargoKind::Cordage,
    CargoKind::Crate,
];

/// Where players may spawn on a side
pub fn player_area(side: Side) -> Rect {
    spawn_area(side, 40.0, 70.0, 70.0)
}

/// Where cargo may spawn on a side
pub fn item_area(side: Side) -> Rect {
    spawn_area(side, 30.0, 30.0, 30.0)
}

pub fn player<R: Rng + ?Sized>(side: Side, rng: &mut R) -> Player {
    Player::new(side, player_area(side).sample(rng))
}

pub fn item<R: Rng + ?Sized>(id: u32, side: Side, kind: CargoKind, rng: &mut R) -> Item {
    let pos = item_area(side).sample(rng);
    let vel = Vec2::new(
        rng.random_range(-ITEM_SPAWN_SPEED..ITEM_SPAWN_SPEED),
        rng.random_range(-ITEM_SPAWN_SPEED..ITEM_SPAWN_SPEED),
    );
    Item {
        id,
        side,
        kind,
        pos,
        vel,
        radius: ITEM_RADIUS,
        held_by: None,
        delivered: false,
    }
}

/// Six slots in the deck corner on the outer edge of `side`
pub fn slots(side: Side) -> Vec<Slot> {
    let grid_w = SLOT_COLUMNS as f32 * SLOT_SIZE + (SLOT_COLUMNS - 1) as f32 * SLOT_GAP;
    let base_x = match side {
        Side::Left => DECK_X + SLOT_MARGIN,
        Side::Right => DECK_X + DECK_W - SLOT_MARGIN - grid_w,
    };
    let base_y = DECK_Y + SLOT_MARGIN;

    SLOT_PATTERN
        .iter()
        .enumerate()
        .map(|(i, &need)| {
            let col = (i % SLOT_COLUMNS) as f32;
            let row = (i / SLOT_COLUMNS) as f32;
            Slot {
                side,
                need,
                rect: Rect::new(
                    base_x + col * (SLOT_SIZE + SLOT_GAP),
                    base_y + row * (SLOT_SIZE + SLOT_GAP),
                    SLOT_SIZE,
                    SLOT_SIZE,
                ),
                filled: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bounds::half_interior;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_stay_on_their_half() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..100 {
            for side in Side::BOTH {
                let p = player(side, &mut rng);
                assert!(player_area(side).contains(p.pos));
                assert!(half_interior(side).contains(p.pos));

                let it = item(1, side, CargoKind::Tool, &mut rng);
                assert!(half_interior(side).contains(it.pos));
                assert!(it.vel.x.abs() <= ITEM_SPAWN_SPEED && it.vel.y.abs() <= ITEM_SPAWN_SPEED);
                assert!(it.is_loose());
            }
        }
    }

    #[test]
    fn test_slot_layout() {
        for side in Side::BOTH {
            let row = slots(side);
            assert_eq!(row.len(), SLOTS_PER_SIDE);
            for kind in CargoKind::ALL {
                assert_eq!(row.iter().filter(|s| s.need == kind).count(), 2);
            }
            for s in &row {
                assert!(half_interior(side).contains(s.rect.center()));
                assert_eq!(s.rect.size(), Vec2::splat(SLOT_SIZE));
            }
        }
        let left = slots(Side::Left);
        assert_eq!(left[0].rect.min, Vec2::new(DECK_X + SLOT_MARGIN, DECK_Y + SLOT_MARGIN));
        assert_eq!(left[4].rect.min.y, DECK_Y + SLOT_MARGIN + SLOT_SIZE + SLOT_GAP);
    }
}
