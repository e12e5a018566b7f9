//! Scripted run without a browser
//!
//! Drives [`GameLoop`] with synthetic 60 Hz timestamps and a fixed input
//! script: run right, then left, hopping the whole time.

use glam::Vec2;

use crate::sim::{GameEvent, GameLoop, GameState, InputState, PlayerBody, Rect, Snapshot, World};
use crate::tuning::Tuning;

/// Scene used by the headless run (800x600 viewport, floor 100px tall)
pub fn default_world() -> World {
    World {
        floor: Rect::new(0.0, 500.0, 800.0, 100.0),
        viewport_width: 800.0,
    }
}

/// Summary of a headless session
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub seed: u64,
    pub frames: u32,
    pub spawned: u32,
    pub collected: u32,
    pub jumps: u32,
    pub snapshot: Snapshot,
}

/// Simulate `seconds` of play at 60 Hz
pub fn run_headless(tuning: Tuning, seed: u64, seconds: f32) -> HeadlessReport {
    let world = default_world();
    let player = PlayerBody::new(
        Vec2::new(380.0, world.floor_top() - 40.0),
        Vec2::new(40.0, 40.0),
    );
    let mut game = GameLoop::new(GameState::new(tuning, world, player, seed), 0.0);

    let frame_ms = 1000.0 / 60.0;
    let frames = (seconds * 60.0).round() as u32;
    let mut report = HeadlessReport {
        seed: game.state.seed,
        frames,
        spawned: 0,
        collected: 0,
        jumps: 0,
        snapshot: game.state.snapshot(),
    };

    for i in 0..frames {
        // Switch direction every two seconds, jump held throughout
        if i % 240 == 0 {
            game.input = InputState::holding(&["ArrowUp", "ArrowRight"]);
        } else if i % 240 == 120 {
            game.input = InputState::holding(&["ArrowUp", "ArrowLeft"]);
        }

        let frame = game.frame(f64::from(i + 1) * frame_ms);
        for event in &frame.events {
            match event {
                GameEvent::Spawned { .. } => report.spawned += 1,
                GameEvent::Collected { .. } => report.collected += 1,
                GameEvent::Jumped => report.jumps += 1,
                _ => {}
            }
        }
        report.snapshot = frame.snapshot;
    }

    log::info!(
        "Headless run (seed {}): {} frames, {} spawned, {} collected, score {}",
        report.seed,
        report.frames,
        report.spawned,
        report.collected,
        report.snapshot.score
    );
    report
}
