//! Canvas placement for newly added routers.
//!
//! Placement is a presentation concern, so it lives behind an injectable
//! source: the engines never touch it, and tests can swap the random
//! implementation for a fixed one.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Canvas placement window for new routers, matching the visualizer's
/// drawing area.
const X_ORIGIN: f64 = 120.0;
const X_SPAN: f64 = 640.0;
const Y_ORIGIN: f64 = 80.0;
const Y_SPAN: f64 = 360.0;

/// A 2D canvas position for a router
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Source of canvas positions for newly added routers
pub trait CoordinateSource {
    fn next_position(&mut self) -> Position;
}

/// Scatters new routers uniformly across the canvas window
#[derive(Debug, Default)]
pub struct RandomLayout;

impl RandomLayout {
    pub fn new() -> Self {
        RandomLayout
    }
}

impl CoordinateSource for RandomLayout {
    fn next_position(&mut self) -> Position {
        let mut rng = rand::thread_rng();
        Position {
            x: X_ORIGIN + rng.gen::<f64>() * X_SPAN,
            y: Y_ORIGIN + rng.gen::<f64>() * Y_SPAN,
        }
    }
}

/// Hands out a fixed list of positions in order, repeating the last one
/// when exhausted. Deterministic replacement for [`RandomLayout`] in tests.
#[derive(Debug, Clone)]
pub struct FixedLayout {
    positions: Vec<Position>,
    next: usize,
}

impl FixedLayout {
    pub fn new(positions: Vec<Position>) -> Self {
        FixedLayout { positions, next: 0 }
    }
}

impl CoordinateSource for FixedLayout {
    fn next_position(&mut self) -> Position {
        let index = self.next.min(self.positions.len().saturating_sub(1));
        if self.next < self.positions.len() {
            self.next += 1;
        }
        self.positions
            .get(index)
            .copied()
            .unwrap_or(Position { x: X_ORIGIN, y: Y_ORIGIN })
    }
}
