//! Read-only view of a round for presentation layers

use glam::Vec2;
use serde::Serialize;

use super::bounds::Rect;
use super::state::{CargoKind, Outcome, Shape, Side, WorldState};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub side: Side,
    pub pos: Vec2,
    pub radius: f32,
    pub score: u32,
    pub carrying: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub id: u32,
    pub side: Side,
    pub kind: CargoKind,
    pub label: &'static str,
    pub shape: Shape,
    pub pos: Vec2,
    pub radius: f32,
    pub held_by: Option<Side>,
    pub delivered: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotView {
    pub side: Side,
    pub need: CargoKind,
    pub label: &'static str,
    pub rect: Rect,
    pub filled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaptainView {
    pub active: bool,
    pub side: Side,
    pub pos: Vec2,
    pub radius: f32,
    /// Time left on deck when active, time until the next visit otherwise
    pub remaining: f32,
}

/// Everything a renderer or HUD needs, detached from the live state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub players: Vec<PlayerView>,
    pub items: Vec<ItemView>,
    pub slots: Vec<SlotView>,
    pub tilt: f32,
    pub next_wave_in: f32,
    pub captain: CaptainView,
    pub running: bool,
    pub winner: Option<Outcome>,
    pub elapsed: f32,
}

impl WorldState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self
                .players
                .iter()
                .map(|p| PlayerView {
                    side: p.side,
                    pos: p.pos,
                    radius: p.radius,
                    score: p.score,
                    carrying: p.carrying.is_some(),
                })
                .collect(),
            items: self
                .items
                .iter()
                .map(|it| ItemView {
                    id: it.id,
                    side: it.side,
                    kind: it.kind,
                    label: it.kind.label(),
                    shape: it.kind.shape(),
                    pos: it.pos,
                    radius: it.radius,
                    held_by: it.held_by,
                    delivered: it.delivered,
                })
                .collect(),
            slots: self
                .slots
                .iter()
                .map(|s| SlotView {
                    side: s.side,
                    need: s.need,
                    label: s.need.label(),
                    rect: s.rect,
                    filled: s.filled,
                })
                .collect(),
            tilt: self.waves.tilt,
            next_wave_in: self.waves.next_in.max(0.0),
            captain: CaptainView {
                active: self.captain.active,
                side: self.captain.side,
                pos: self.captain.pos,
                radius: self.captain.radius,
                remaining: self.captain.countdown.max(0.0),
            },
            running: self.running(),
            winner: self.winner(),
            elapsed: self.elapsed,
        }
    }
}

impl Snapshot {
    /// Items a renderer should draw (delivered cargo is gone from the deck)
    pub fn visible_items(&self) -> impl Iterator<Item = &ItemView> {
        self.items.iter().filter(|it| !it.delivered)
    }
}
