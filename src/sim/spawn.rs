//! Periodic collectible spawning
//!
//! A time accumulator fires once per interval. Leftover time carries over so
//! the spawn rate never drifts with frame timing.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Collectible;

/// Maximum spawns owed by a single tick, so a bad interval can't spin forever
pub const MAX_SPAWNS_PER_TICK: u32 = 8;

/// Accumulator-driven spawn timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnScheduler {
    /// Seconds accumulated since the last spawn
    pub accumulator: f32,
    /// Seconds between spawns
    pub interval: f32,
}

impl SpawnScheduler {
    pub fn new(interval: f32) -> Self {
        Self {
            accumulator: 0.0,
            interval,
        }
    }

    /// Add `dt` seconds and return how many spawns are now due (at most
    /// [`MAX_SPAWNS_PER_TICK`]; any further backlog is discarded)
    pub fn tick(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let mut due = 0;
        while self.accumulator >= self.interval && due < MAX_SPAWNS_PER_TICK {
            self.accumulator -= self.interval;
            due += 1;
        }
        if self.accumulator >= self.interval {
            log::warn!(
                "Spawn backlog of {}s exceeds {} spawns, dropping it",
                self.accumulator,
                MAX_SPAWNS_PER_TICK
            );
            self.accumulator %= self.interval;
        }
        due
    }
}

/// Pick a spawn position fully inside the viewport and above the floor.
///
/// Coordinates are floored to whole pixels. When the viewport is narrower than
/// the collectible (or the floor sits higher than one collectible), the range
/// collapses to 0.
pub fn place_collectible<R: Rng>(
    rng: &mut R,
    id: u32,
    viewport_width: f32,
    floor_top: f32,
    size: f32,
) -> Collectible {
    let max_left = (viewport_width - size).max(0.0);
    let max_top = (floor_top - size).max(0.0);
    let left = rng.random_range(0.0..=max_left).floor();
    let top = rng.random_range(0.0..=max_top).floor();
    Collectible::new(id, Vec2::new(left, top), size)
}
