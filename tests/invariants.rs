//! Property tests: world invariants hold for any input sequence

use deck_duel::consts::*;
use deck_duel::sim::bounds::{deck_interior, half_interior};
use deck_duel::sim::{PlayerIntent, Side, TickInput, WorldState, autopilot, tick};
use glam::Vec2;
use proptest::prelude::*;

/// Checks that must hold after every tick; `prev` is the state before it
fn check_invariants(prev: &WorldState, state: &WorldState) {
    for side in Side::BOTH {
        let player = state.player(side);
        assert!(half_interior(side).contains(player.pos), "{side:?} player off its half");
        let filled = state.filled_count(side);
        assert_eq!(player.score as usize, filled, "{side:?} score drifted from slots");
        assert!(filled <= SLOTS_PER_SIDE);

        if let Some(id) = player.carrying {
            let item = state.item(id).expect("carried item exists");
            assert_eq!(item.held_by, Some(side));
            assert!(!item.delivered);
        }
    }
    if let (Some(a), Some(b)) = (state.players[0].carrying, state.players[1].carrying) {
        assert_ne!(a, b, "two players hold the same item");
    }

    for item in &state.items {
        if item.delivered {
            assert_eq!(item.held_by, None);
            continue;
        }
        match item.held_by {
            Some(side) => {
                let holder = state.player(side);
                assert_eq!(holder.carrying, Some(item.id));
                assert_eq!(item.pos, holder.pos - Vec2::new(0.0, CARRY_OFFSET));
            }
            None => {
                assert!(deck_interior().contains(item.pos));
                assert!(half_interior(item.side).contains(item.pos));
            }
        }
    }

    // Terminal flags never revert
    for (before, after) in prev.items.iter().zip(&state.items) {
        assert!(!before.delivered || after.delivered);
    }
    for (before, after) in prev.slots.iter().zip(&state.slots) {
        assert!(!before.filled || after.filled);
    }
    assert!(prev.running() || !state.running());

    assert!(state.waves.tilt.abs() <= TILT_LIMIT);
}

fn intent_strategy() -> impl Strategy<Value = PlayerIntent> {
    (-1.5f32..1.5, -1.5f32..1.5, any::<bool>()).prop_map(|(x, y, action)| PlayerIntent {
        movement: Vec2::new(x, y),
        action,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_inputs_keep_world_consistent(
        seed in any::<u64>(),
        hard_mode in any::<bool>(),
        steps in prop::collection::vec((intent_strategy(), intent_strategy(), 0.0f32..0.05), 1..400),
    ) {
        let mut state = WorldState::new(seed, hard_mode);
        for (left, right, dt) in steps {
            let prev = state.clone();
            tick(&mut state, &TickInput::new(hard_mode, left, right), dt);
            check_invariants(&prev, &state);
        }
    }

    #[test]
    fn autopilot_matches_keep_world_consistent(seed in any::<u64>(), hard_mode in any::<bool>()) {
        let mut state = WorldState::new(seed, hard_mode);
        for _ in 0..3000 {
            let prev = state.clone();
            let input = TickInput { hard_mode, players: autopilot::intents(&state) };
            tick(&mut state, &input, 1.0 / 60.0);
            check_invariants(&prev, &state);
        }
    }

    #[test]
    fn zero_dt_leaves_positions_and_scores(
        seed in any::<u64>(),
        warmup in 0usize..200,
        left in intent_strategy(),
        right in intent_strategy(),
    ) {
        let mut state = WorldState::new(seed, false);
        for _ in 0..warmup {
            tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        }
        let before = state.snapshot();
        // No pick/drop edge this tick
        let input = TickInput::new(
            false,
            PlayerIntent { action: false, ..left },
            PlayerIntent { action: false, ..right },
        );
        tick(&mut state, &input, 0.0);
        let after = state.snapshot();

        for (a, b) in before.players.iter().zip(&after.players) {
            prop_assert_eq!(a.pos, b.pos);
            prop_assert_eq!(a.score, b.score);
        }
        for (a, b) in before.items.iter().zip(&after.items) {
            prop_assert_eq!(a.pos, b.pos);
        }
    }
}
