//! Game state and core simulation types
//!
//! Everything the loop mutates is owned here; the host only reads snapshots.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::PlayerBody;
use super::collision::Rect;
use super::spawn::SpawnScheduler;
use crate::tuning::Tuning;

/// A pickup sitting in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    /// Top-left corner (pixels)
    pub pos: Vec2,
    /// Edge length (square)
    pub size: f32,
    /// Cleared when the host reports the visual gone; swept on the next pickup pass
    pub alive: bool,
}

impl Collectible {
    pub fn new(id: u32, pos: Vec2, size: f32) -> Self {
        Self {
            id,
            pos,
            size,
            alive: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

/// Pickup counter. Only goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
}

impl ScoreTracker {
    pub fn increment(&mut self) {
        self.score += 1;
    }

    pub fn current(&self) -> u64 {
        self.score
    }
}

/// Static scene geometry supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Floor bounding box; only its top edge matters for landing
    pub floor: Rect,
    /// Viewport width, bounds spawn placement
    pub viewport_width: f32,
}

impl World {
    pub fn floor_top(&self) -> f32 {
        self.floor.top
    }
}

/// Things that happened during a tick, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the ground
    Jumped,
    /// Player came down onto the floor from the air (after a jump or a drop)
    Landed,
    /// A new collectible appeared
    Spawned { id: u32 },
    /// Player picked up a collectible
    Collected { id: u32 },
    /// A collectible the host already removed was dropped from the sim
    Reconciled { id: u32 },
}

/// Read-only view of one collectible for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleView {
    pub id: u32,
    pub rect: Rect,
}

/// Plain data the presentation layer paints each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Rect,
    pub jumping: bool,
    pub collectibles: Vec<CollectibleView>,
    pub score: u64,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values in effect
    pub tuning: Tuning,
    /// Scene geometry
    pub world: World,
    /// Player sprite
    pub player: PlayerBody,
    /// Live collectibles, in spawn order
    pub collectibles: Vec<Collectible>,
    /// Score
    pub score: ScoreTracker,
    /// Spawn timer
    pub spawner: SpawnScheduler,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Spawn placement RNG
    rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(tuning: Tuning, world: World, player: PlayerBody, seed: u64) -> Self {
        let spawner = SpawnScheduler::new(tuning.spawn_interval);
        Self {
            seed,
            tuning,
            world,
            player,
            collectibles: Vec::new(),
            score: ScoreTracker::default(),
            spawner,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place a new collectible at a random spot above the floor
    pub fn spawn_collectible(&mut self) -> u32 {
        let id = self.next_entity_id();
        let c = super::spawn::place_collectible(
            &mut self.rng,
            id,
            self.world.viewport_width,
            self.world.floor_top(),
            self.tuning.collectible_size,
        );
        log::debug!("Spawned collectible {} at ({}, {})", id, c.pos.x, c.pos.y);
        self.collectibles.push(c);
        id
    }

    /// Mark a collectible as removed by the host. Returns false if unknown.
    pub fn despawn(&mut self, id: u32) -> bool {
        match self.collectibles.iter_mut().find(|c| c.id == id) {
            Some(c) => {
                c.alive = false;
                true
            }
            None => false,
        }
    }

    /// Update scene geometry (floor and viewport can move on resize)
    pub fn set_world(&mut self, world: World) {
        self.world = world;
    }

    /// Data for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.rect(),
            jumping: self.player.jumping,
            collectibles: self
                .collectibles
                .iter()
                .filter(|c| c.alive)
                .map(|c| CollectibleView {
                    id: c.id,
                    rect: c.rect(),
                })
                .collect(),
            score: self.score.current(),
        }
    }
}
