//! Collision detection and response for axis-aligned boxes
//!
//! Everything here is screen-space: y grows downward, so a box's bottom edge
//! is `top + height`.

use serde::{Deserialize, Serialize};

use super::body::PlayerBody;
use super::state::{Collectible, GameEvent, ScoreTracker};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Strict AABB intersection. Boxes that merely share an edge do not overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left < b.right() && a.right() > b.left && a.top < b.bottom() && a.bottom() > b.top
}

/// Snap the player onto the floor if its bottom edge has sunk past the floor top.
///
/// Returns true when a landing was resolved. Only downward penetration of the
/// single floor surface is handled; a body that is already resting exactly on
/// the floor is left alone.
pub fn resolve_floor_landing(body: &mut PlayerBody, floor_top: f32) -> bool {
    // Compare tops rather than bottoms so a snapped body re-tests as settled
    // even when `top + height` rounds past the floor.
    let rest_y = floor_top - body.size.y;
    if body.pos.y > rest_y {
        body.pos.y = rest_y;
        body.vy = 0.0;
        body.jumping = false;
        true
    } else {
        false
    }
}

/// Remove every collectible the player touches, scoring one point each.
///
/// Collectibles already marked dead (removed by the host) are dropped without
/// scoring.
pub fn collect_pickups(
    player: &Rect,
    collectibles: &mut Vec<Collectible>,
    score: &mut ScoreTracker,
    events: &mut Vec<GameEvent>,
) {
    collectibles.retain(|c| {
        if !c.alive {
            log::debug!("Collectible {} already gone, dropping", c.id);
            events.push(GameEvent::Reconciled { id: c.id });
            return false;
        }
        if overlaps(player, &c.rect()) {
            score.increment();
            log::debug!("Collected {} (score {})", c.id, score.current());
            events.push(GameEvent::Collected { id: c.id });
            return false;
        }
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            0.0f32..200.0,
            0.0f32..200.0,
        )
            .prop_map(|(l, t, w, h)| Rect::new(l, t, w, h))
    }

    #[test]
    fn test_overlap_corner() {
        let player = Rect::new(10.0, 10.0, 40.0, 40.0);
        let c = Rect::new(45.0, 45.0, 40.0, 40.0);
        assert!(overlaps(&player, &c));
    }

    #[test]
    fn test_no_overlap_when_apart() {
        let player = Rect::new(10.0, 10.0, 40.0, 40.0);
        let c = Rect::new(60.0, 10.0, 40.0, 40.0);
        assert!(!overlaps(&player, &c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        assert!(!overlaps(&a, &Rect::new(40.0, 0.0, 40.0, 40.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, 40.0, 40.0, 40.0)));
        assert!(!overlaps(&a, &Rect::new(-40.0, 0.0, 40.0, 40.0)));
        assert!(overlaps(&a, &Rect::new(39.5, 0.0, 40.0, 40.0)));
    }

    #[test]
    fn test_floor_landing_snaps() {
        let mut body = PlayerBody::new(Vec2::new(0.0, 470.0), Vec2::new(40.0, 40.0));
        body.vy = 300.0;
        body.jumping = true;

        assert!(resolve_floor_landing(&mut body, 500.0));
        assert_eq!(body.bottom(), 500.0);
        assert_eq!(body.vy, 0.0);
        assert!(!body.jumping);
    }

    #[test]
    fn test_rising_body_above_floor_untouched() {
        let mut body = PlayerBody::new(Vec2::new(0.0, 200.0), Vec2::new(40.0, 40.0));
        body.vy = -400.0;
        body.jumping = true;
        let before = body.clone();

        assert!(!resolve_floor_landing(&mut body, 500.0));
        assert_eq!(body, before);
    }

    #[test]
    fn test_pickup_scores_once() {
        let player = Rect::new(0.0, 0.0, 40.0, 40.0);
        let mut collectibles = vec![
            Collectible::new(1, Vec2::new(20.0, 20.0), 40.0),
            Collectible::new(2, Vec2::new(300.0, 20.0), 40.0),
        ];
        let mut score = ScoreTracker::default();
        let mut events = Vec::new();

        collect_pickups(&player, &mut collectibles, &mut score, &mut events);
        assert_eq!(score.current(), 1);
        assert_eq!(collectibles.len(), 1);
        assert_eq!(collectibles[0].id, 2);
        assert_eq!(events, vec![GameEvent::Collected { id: 1 }]);

        // Same position again: nothing left to collect
        events.clear();
        collect_pickups(&player, &mut collectibles, &mut score, &mut events);
        assert_eq!(score.current(), 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_dead_collectible_reconciled_without_score() {
        let player = Rect::new(0.0, 0.0, 40.0, 40.0);
        let mut gone = Collectible::new(7, Vec2::new(10.0, 10.0), 40.0);
        gone.alive = false;
        let mut collectibles = vec![gone];
        let mut score = ScoreTracker::default();
        let mut events = Vec::new();

        collect_pickups(&player, &mut collectibles, &mut score, &mut events);
        assert!(collectibles.is_empty());
        assert_eq!(score.current(), 0);
        assert_eq!(events, vec![GameEvent::Reconciled { id: 7 }]);
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_floor_landing_idempotent(
            y in -1000.0f32..1000.0,
            h in 1.0f32..200.0,
            vy in -1000.0f32..1000.0,
            floor_top in 0.0f32..1000.0,
        ) {
            let mut body = PlayerBody::new(Vec2::new(0.0, y), Vec2::new(40.0, h));
            body.vy = vy;
            body.jumping = true;
            resolve_floor_landing(&mut body, floor_top);
            let settled = body.clone();
            prop_assert!(!resolve_floor_landing(&mut body, floor_top));
            prop_assert_eq!(body, settled);
        }
    }
}
