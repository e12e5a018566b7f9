//! Variable-step frame driver
//!
//! The host calls [`GameLoop::frame`] once per display refresh with its
//! monotonic timestamp. Each call runs exactly one [`tick`] with the elapsed
//! time clamped to `max_dt`, so a hitch can never produce a huge step.

use super::input::InputState;
use super::state::{GameEvent, GameState, Snapshot};
use super::tick::tick;

/// Turns host timestamps (milliseconds) into clamped step lengths (seconds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last_ms: f64,
    max_dt: f32,
}

impl FrameClock {
    /// Start the clock at `start_ms`; the first frame measures from here
    pub fn new(start_ms: f64, max_dt: f32) -> Self {
        Self {
            last_ms: start_ms,
            max_dt,
        }
    }

    /// Elapsed seconds since the previous call, clamped to `[0, max_dt]`
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let elapsed = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        elapsed.clamp(0.0, self.max_dt)
    }
}

/// Result of one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Step length actually simulated
    pub dt: f32,
    pub events: Vec<GameEvent>,
    pub snapshot: Snapshot,
}

/// Game instance: state, held keys and clock
#[derive(Debug, Clone)]
pub struct GameLoop {
    pub state: GameState,
    pub input: InputState,
    clock: FrameClock,
}

impl GameLoop {
    pub fn new(state: GameState, start_ms: f64) -> Self {
        let clock = FrameClock::new(start_ms, state.tuning.max_dt);
        Self {
            state,
            input: InputState::new(),
            clock,
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.press(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.release(key);
    }

    /// Run one frame ending at `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> Frame {
        let dt = self.clock.advance(now_ms);
        let events = tick(&mut self.state, &self.input, dt);
        Frame {
            dt,
            events,
            snapshot: self.state.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::PlayerBody;
    use crate::sim::collision::Rect;
    use crate::sim::state::World;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn game(start_ms: f64) -> GameLoop {
        let world = World {
            floor: Rect::new(0.0, 500.0, 800.0, 100.0),
            viewport_width: 800.0,
        };
        let player = PlayerBody::new(Vec2::new(200.0, 460.0), Vec2::new(40.0, 40.0));
        GameLoop::new(GameState::new(Tuning::default(), world, player, 5), start_ms)
    }

    #[test]
    fn test_clock_converts_ms() {
        let mut clock = FrameClock::new(1000.0, 0.05);
        let dt = clock.advance(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
        // Next step measures from 1016, not from the start
        let dt = clock.advance(1026.0);
        assert!((dt - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_clock_clamps_hitch() {
        let mut clock = FrameClock::new(0.0, 0.05);
        assert_eq!(clock.advance(2000.0), 0.05);
        // Baseline moves even when clamped
        let dt = clock.advance(2010.0);
        assert!((dt - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_clock_never_negative() {
        let mut clock = FrameClock::new(500.0, 0.05);
        assert_eq!(clock.advance(400.0), 0.0);
    }

    #[test]
    fn test_frame_applies_held_keys() {
        let mut g = game(0.0);
        g.key_down("ArrowRight");
        let frame = g.frame(50.0);
        assert!((frame.dt - 0.05).abs() < 1e-6);
        assert!((frame.snapshot.player.left - 210.0).abs() < 1e-3);

        g.key_up("ArrowRight");
        let frame = g.frame(100.0);
        assert!((frame.snapshot.player.left - 210.0).abs() < 1e-3);
    }

    #[test]
    fn test_frame_jump_snapshot() {
        let mut g = game(0.0);
        g.key_down("w");
        let frame = g.frame(16.0);
        assert!(frame.events.contains(&GameEvent::Jumped));
        assert!(frame.snapshot.jumping);
        g.key_up("w");
        let frame = g.frame(32.0);
        // Releasing does not cut the jump short
        assert!(frame.snapshot.jumping);
    }

    #[test]
    fn test_host_dropped_spawn_is_never_scored() {
        let mut g = game(0.0);
        // Out of reach so the spawn frame can't collect it
        g.state.player.pos.x = -1000.0;
        let mut now = 0.0;
        let id = loop {
            now += 16.0;
            let frame = g.frame(now);
            if let Some(id) = frame.events.iter().find_map(|e| match e {
                GameEvent::Spawned { id } => Some(*id),
                _ => None,
            }) {
                break id;
            }
        };

        // Host could not draw it; park it on the player anyway
        assert!(g.state.despawn(id));
        let player_pos = g.state.player.pos;
        if let Some(c) = g.state.collectibles.iter_mut().find(|c| c.id == id) {
            c.pos = player_pos;
        }
        let score = g.state.score.current();

        now += 16.0;
        let frame = g.frame(now);
        assert!(frame.events.contains(&GameEvent::Reconciled { id }));
        assert!(!frame.events.contains(&GameEvent::Collected { id }));
        assert_eq!(frame.snapshot.score, score);
        assert!(frame.snapshot.collectibles.iter().all(|c| c.id != id));
    }

    #[test]
    fn test_sixty_hz_spawn_cadence() {
        let mut g = game(0.0);
        let mut spawns = 0;
        let mut now = 0.0;
        // 10 seconds at ~60 Hz
        for _ in 0..600 {
            now += 1000.0 / 60.0;
            spawns += g
                .frame(now)
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::Spawned { .. }))
                .count();
        }
        assert!((6..=7).contains(&spawns), "spawns = {}", spawns);
    }
}
