//! World state and core simulation types
//!
//! Everything a round needs lives in [`WorldState`]; every subsystem takes it
//! (or a disjoint piece of it) by mutable borrow and keeps no copy of its own.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Rect;
use super::captain::Captain;
use super::spawn;
use super::waves::Waves;
use crate::consts::*;
use crate::tuning::Tuning;

/// One half of the deck (and the team that works it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Port, player 1
    Left,
    /// Starboard, player 2
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// How a cargo kind is drawn (passed through untouched by the simulation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Box,
    Triangle,
}

/// Cargo types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CargoKind {
    Cordage,
    Crate,
    Tool,
}

impl CargoKind {
    pub const ALL: [CargoKind; 3] = [CargoKind::Cordage, CargoKind::Crate, CargoKind::Tool];

    pub fn label(self) -> &'static str {
        match self {
            CargoKind::Cordage => "C",
            CargoKind::Crate => "K",
            CargoKind::Tool => "O",
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            CargoKind::Cordage => Shape::Circle,
            CargoKind::Crate => Shape::Box,
            CargoKind::Tool => Shape::Triangle,
        }
    }
}

/// A deckhand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Id of the item in hand
    pub carrying: Option<u32>,
    /// Successful deliveries this round
    pub score: u32,
    /// Action level seen last tick (pick/drop fires on the rising edge)
    pub action_latch: bool,
}

impl Player {
    pub fn new(side: Side, pos: Vec2) -> Self {
        Self {
            side,
            pos,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            carrying: None,
            score: 0,
            action_latch: false,
        }
    }
}

/// A piece of loose cargo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    /// Half it spawned on; only that side may pick it up and loose physics keeps it there
    pub side: Side,
    pub kind: CargoKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub held_by: Option<Side>,
    /// Terminal: delivered items leave physics and pickup for good
    pub delivered: bool,
}

impl Item {
    /// On deck, not in anyone's hands
    pub fn is_loose(&self) -> bool {
        !self.delivered && self.held_by.is_none()
    }
}

/// Delivery target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub side: Side,
    pub need: CargoKind,
    pub rect: Rect,
    pub filled: bool,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Terminal until the next reset
    Finished(Outcome),
}

/// Things that happened during the last tick, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveImpulse { impulse: f32 },
    CaptainArrived { side: Side, pos: Vec2 },
    CaptainLeft,
    CaptainShove { side: Side, dropped: Option<u32> },
    PickedUp { side: Side, item: u32 },
    Dropped { side: Side, item: u32 },
    Delivered { side: Side, item: u32, slot: usize },
    Misdelivered { side: Side, item: u32, slot: usize },
    RoundOver(Outcome),
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Difficulty the current round was set up with
    pub hard_mode: bool,
    /// Ticks advanced this round
    pub time_ticks: u64,
    /// Seconds simulated this round
    pub elapsed: f32,
    pub phase: GamePhase,
    /// Indexed by [`Side::index`]
    pub players: [Player; 2],
    /// Creation order; also the pickup tie-break order
    pub items: Vec<Item>,
    /// Left slots first, then right, each in layout order
    pub slots: Vec<Slot>,
    pub waves: Waves,
    pub captain: Captain,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl WorldState {
    /// Create a world with the default tuning and start the first round
    pub fn new(seed: u64, hard_mode: bool) -> Self {
        Self::with_tuning(seed, hard_mode, Tuning::default())
    }

    pub fn with_tuning(seed: u64, hard_mode: bool, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let profile = tuning.profile(hard_mode);
        let waves = Waves::new(profile, &mut rng);
        let captain = Captain::new(profile, &mut rng);
        let players = [
            spawn::player(Side::Left, &mut rng),
            spawn::player(Side::Right, &mut rng),
        ];
        let mut state = Self {
            seed,
            rng,
            tuning,
            hard_mode,
            time_ticks: 0,
            elapsed: 0.0,
            phase: GamePhase::Running,
            players,
            items: Vec::new(),
            slots: Vec::new(),
            waves,
            captain,
            events: Vec::new(),
            next_id: 1,
        };
        state.populate();
        state
    }

    /// Throw the round away and start a fresh one. The RNG stream carries on,
    /// so consecutive rounds differ.
    pub fn reset(&mut self, hard_mode: bool) {
        self.hard_mode = hard_mode;
        self.time_ticks = 0;
        self.elapsed = 0.0;
        self.phase = GamePhase::Running;
        self.events.clear();
        self.next_id = 1;

        let profile = self.tuning.profile(hard_mode);
        self.waves = Waves::new(profile, &mut self.rng);
        self.captain = Captain::new(profile, &mut self.rng);
        self.players = [
            spawn::player(Side::Left, &mut self.rng),
            spawn::player(Side::Right, &mut self.rng),
        ];
        self.populate();
        log::info!(
            "New round (seed {}, {} mode)",
            self.seed,
            if hard_mode { "hard" } else { "normal" }
        );
    }

    /// Lay out slots and scatter cargo for both sides
    fn populate(&mut self) {
        self.slots = Side::BOTH.into_iter().flat_map(spawn::slots).collect();
        self.items = Vec::with_capacity(ITEMS_PER_SIDE * 2);
        for i in 0..ITEMS_PER_SIDE {
            let kind = CargoKind::ALL[i % CargoKind::ALL.len()];
            for side in Side::BOTH {
                let id = self.next_entity_id();
                let item = spawn::item(id, side, kind, &mut self.rng);
                self.items.push(item);
            }
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|it| it.id == id)
    }

    pub fn item_mut(&mut self, id: u32) -> Option<&mut Item> {
        self.items.iter_mut().find(|it| it.id == id)
    }

    /// A side's slots in layout order
    pub fn slots_for(&self, side: Side) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(move |s| s.side == side)
    }

    pub fn filled_count(&self, side: Side) -> usize {
        self.slots_for(side).filter(|s| s.filled).count()
    }

    /// Every slot on this side is filled
    pub fn side_complete(&self, side: Side) -> bool {
        self.slots_for(side).all(|s| s.filled)
    }

    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn winner(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Running => None,
            GamePhase::Finished(outcome) => Some(outcome),
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        log::debug!("{event:?}");
        self.events.push(event);
    }
}
