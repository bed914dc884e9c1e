//! Deck geometry: rectangles, half-deck clamping and spawn areas

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Side;
use crate::consts::*;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive on every edge
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    /// Uniform random point inside the rectangle
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            sample_axis(rng, self.min.x, self.max.x),
            sample_axis(rng, self.min.y, self.max.y),
        )
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi <= lo { lo } else { rng.random_range(lo..hi) }
}

/// The whole deck
pub fn deck() -> Rect {
    Rect::new(DECK_X, DECK_Y, DECK_W, DECK_H)
}

/// Area entity centres may occupy anywhere on the deck
pub fn deck_interior() -> Rect {
    Rect {
        min: Vec2::new(DECK_X + EDGE_INSET, DECK_Y + EDGE_INSET),
        max: Vec2::new(DECK_X + DECK_W - EDGE_INSET, DECK_Y + DECK_H - EDGE_INSET),
    }
}

/// Area entity centres may occupy on one half of the deck
pub fn half_interior(side: Side) -> Rect {
    let deck = deck_interior();
    match side {
        Side::Left => Rect {
            min: deck.min,
            max: Vec2::new(MID_X - EDGE_INSET, deck.max.y),
        },
        Side::Right => Rect {
            min: Vec2::new(MID_X + EDGE_INSET, deck.min.y),
            max: deck.max,
        },
    }
}

/// Keep a point on the deck
pub fn clamp_to_deck(p: Vec2) -> Vec2 {
    deck_interior().clamp(p)
}

/// Keep a point on the deck and on one side of the divider
pub fn clamp_to_half(p: Vec2, side: Side) -> Vec2 {
    half_interior(side).clamp(clamp_to_deck(p))
}

/// Spawn rectangle on one half, inset from the outer edge and divider by
/// `inset_x`, and from the top/bottom by `inset_top`/`inset_bottom`
pub fn spawn_area(side: Side, inset_x: f32, inset_top: f32, inset_bottom: f32) -> Rect {
    let (x_min, x_max) = match side {
        Side::Left => (DECK_X + inset_x, MID_X - inset_x),
        Side::Right => (MID_X + inset_x, DECK_X + DECK_W - inset_x),
    };
    Rect {
        min: Vec2::new(x_min, DECK_Y + inset_top),
        max: Vec2::new(x_max, DECK_Y + DECK_H - inset_bottom),
    }
}
