//! Hopper - A tiny run-and-jump collecting game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, kinematics, collisions, spawning, score)
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser presentation adapter (DOM painting, input wiring)
//! - `error`: Startup errors

pub mod error;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use error::InitError;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Horizontal run speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 200.0;
    /// Initial jump velocity (pixels/s, negative = up)
    pub const JUMP_IMPULSE: f32 = -600.0;
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 2000.0;

    /// Upper bound on a single frame step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Seconds between collectible spawns
    pub const SPAWN_INTERVAL: f32 = 1.5;
    /// Collectible edge length (pixels)
    pub const COLLECTIBLE_SIZE: f32 = 40.0;
}
