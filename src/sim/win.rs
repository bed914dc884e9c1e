//! End-of-round detection

use super::state::{GameEvent, GamePhase, Outcome, Side, WorldState};

/// Outcome implied by the current slot fill state, if the round is decided
pub fn outcome(state: &WorldState) -> Option<Outcome> {
    match (state.side_complete(Side::Left), state.side_complete(Side::Right)) {
        (true, true) => Some(Outcome::Draw),
        (true, false) => Some(Outcome::Winner(Side::Left)),
        (false, true) => Some(Outcome::Winner(Side::Right)),
        (false, false) => None,
    }
}

/// Finish the round once a side has filled every slot. Does nothing after the
/// round has ended.
pub fn evaluate(state: &mut WorldState) {
    if !state.running() {
        return;
    }
    if let Some(result) = outcome(state) {
        state.phase = GamePhase::Finished(result);
        log::info!(
            "Round over after {:.1}s: {result:?} (score {}-{})",
            state.elapsed,
            state.player(Side::Left).score,
            state.player(Side::Right).score
        );
        state.emit(GameEvent::RoundOver(result));
    }
}
