//! Per-frame simulation step
//!
//! Order matters: move, land, spawn, then collect. A collectible spawned this
//! frame can be picked up in the same frame.

use super::collision::{collect_pickups, resolve_floor_landing};
use super::input::InputState;
use super::state::{GameEvent, GameState};

/// Advance the game state by `dt` seconds. Returns what happened, in order.
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Resting bodies are re-snapped every frame; only a real touchdown counts
    let rest_y = state.world.floor_top() - state.player.size.y;
    let airborne = state.player.jumping || state.player.pos.y < rest_y;

    let step = state.player.integrate(input, &state.tuning, dt);
    if step.jumped {
        events.push(GameEvent::Jumped);
    }

    if resolve_floor_landing(&mut state.player, state.world.floor_top()) && airborne {
        events.push(GameEvent::Landed);
    }

    for _ in 0..state.spawner.tick(dt) {
        let id = state.spawn_collectible();
        events.push(GameEvent::Spawned { id });
    }

    let player_rect = state.player.rect();
    collect_pickups(
        &player_rect,
        &mut state.collectibles,
        &mut state.score,
        &mut events,
    );

    events
}
