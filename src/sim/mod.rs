//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Step length supplied by the caller, clamped by the frame clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod frame;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::{PlayerBody, StepOutcome};
pub use collision::{Rect, collect_pickups, overlaps, resolve_floor_landing};
pub use frame::{Frame, FrameClock, GameLoop};
pub use input::{Control, InputState};
pub use spawn::{SpawnScheduler, place_collectible};
pub use state::{
    Collectible, CollectibleView, GameEvent, GameState, ScoreTracker, Snapshot, World,
};
pub use tick::tick;
