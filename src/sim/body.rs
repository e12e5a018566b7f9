//! Player kinematics
//!
//! Horizontal motion is direct (no acceleration); vertical motion is
//! semi-implicit Euler under constant gravity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::input::{Control, InputState};
use crate::tuning::Tuning;

/// What happened to the body during one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// A jump impulse was applied this step
    pub jumped: bool,
}

/// The player sprite's physical state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left corner (pixels, y down)
    pub pos: Vec2,
    /// Vertical velocity (pixels/s, positive = down)
    pub vy: f32,
    /// Set while a jump impulse is in effect; blocks re-jumping until landing
    pub jumping: bool,
    /// Width and height (pixels)
    pub size: Vec2,
}

impl PlayerBody {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vy: 0.0,
            jumping: false,
            size,
        }
    }

    /// Bounding box in screen space
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Advance one step: horizontal input, jump trigger, then gravity.
    ///
    /// Holding jump while airborne does nothing; the `jumping` flag (not a
    /// press edge) gates the impulse, so a held key re-jumps right after landing.
    pub fn integrate(&mut self, input: &InputState, tuning: &Tuning, dt: f32) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        // Both directions may be held; they cancel
        if input.is_held(Control::Left) {
            self.pos.x -= tuning.speed * dt;
        }
        if input.is_held(Control::Right) {
            self.pos.x += tuning.speed * dt;
        }

        if input.is_held(Control::Jump) && !self.jumping {
            self.vy = tuning.jump_impulse;
            self.jumping = true;
            outcome.jumped = true;
        }

        // Velocity first, then position with the new velocity
        self.vy += tuning.gravity * dt;
        self.pos.y += self.vy * dt;

        outcome
    }
}
