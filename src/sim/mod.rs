//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Stable iteration order (creation order for items, layout order for slots)
//! - No rendering or platform dependencies

pub mod actions;
pub mod autopilot;
pub mod bounds;
pub mod captain;
pub mod physics;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod waves;
pub mod win;

pub use bounds::Rect;
pub use captain::Captain;
pub use snapshot::Snapshot;
pub use state::{
    CargoKind, GameEvent, GamePhase, Item, Outcome, Player, Shape, Side, Slot, WorldState,
};
pub use tick::{PlayerIntent, TickInput, tick};
pub use waves::Waves;
