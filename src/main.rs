//! Deck Duel entry point
//!
//! Native builds run a headless demo match (autopilot against autopilot) and
//! log how each round went. Pass a settings JSON path as the first argument.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use deck_duel::{FrameClock, Settings};
    use deck_duel::sim::{GameEvent, Outcome, Side, TickInput, WorldState, autopilot, tick};

    env_logger::init();
    log::info!("Deck Duel (native demo) starting...");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref());
    let seed = settings.seed.unwrap_or_else(rand::random);
    let hard_mode = settings.hard_mode;
    let fixed_dt = settings.demo_dt();
    let started = Instant::now();
    let mut clock = FrameClock::new();

    let mut state = WorldState::with_tuning(seed, hard_mode, settings.tuning());
    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    let mut unfinished = 0u32;

    for round in 1..=settings.demo_rounds {
        if round > 1 {
            state.reset(hard_mode);
        }
        clock.restart();

        while state.running() && state.elapsed < settings.demo_round_limit_secs {
            let dt = if settings.demo_realtime {
                std::thread::sleep(Duration::from_secs_f32(fixed_dt));
                clock.delta(started.elapsed().as_secs_f64() * 1000.0)
            } else {
                fixed_dt
            };
            let input = TickInput {
                hard_mode,
                players: autopilot::intents(&state),
            };
            tick(&mut state, &input, dt);

            for event in &state.events {
                if let GameEvent::Delivered { side, .. } = event {
                    log::info!(
                        "Round {round}: {side:?} delivered ({}/{})",
                        state.player(*side).score,
                        state.slots_for(*side).count()
                    );
                }
            }
        }

        match state.winner() {
            Some(Outcome::Winner(side)) => {
                wins[side.index()] += 1;
                log::info!("Round {round}: {side:?} wins in {:.1}s", state.elapsed);
            }
            Some(Outcome::Draw) => {
                draws += 1;
                log::info!("Round {round}: draw in {:.1}s", state.elapsed);
            }
            None => {
                unfinished += 1;
                log::warn!(
                    "Round {round}: no winner after {:.0}s (score {}-{})",
                    state.elapsed,
                    state.player(Side::Left).score,
                    state.player(Side::Right).score
                );
            }
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => log::debug!("Final snapshot:\n{json}"),
        Err(err) => log::error!("Could not serialize snapshot: {err}"),
    }

    println!(
        "seed {seed}: port {} / starboard {} / draws {draws} / unfinished {unfinished}",
        wins[Side::Left.index()],
        wins[Side::Right.index()],
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No native runner on the web; the library is driven by the host page
}
