//! Data-driven game balance
//!
//! Defaults match the shipped game. A page may override any subset of fields
//! with a `<script id="tuning" type="application/json">` block.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::InitError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal run speed (pixels/s)
    pub speed: f32,
    /// Jump launch velocity (pixels/s, negative = up)
    pub jump_impulse: f32,
    /// Gravity (pixels/s²)
    pub gravity: f32,
    /// Frame step clamp (seconds)
    pub max_dt: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Collectible edge length (pixels)
    pub collectible_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            max_dt: MAX_FRAME_DT,
            spawn_interval: SPAWN_INTERVAL,
            collectible_size: COLLECTIBLE_SIZE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document.
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, InitError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.validate())
    }

    /// Replace values that would stall or break the loop with defaults.
    ///
    /// Every field must be finite. `max_dt` and `collectible_size` must be
    /// positive, and `spawn_interval` may not be shorter than one frame step,
    /// so a frame never owes more than one spawn.
    pub fn validate(mut self) -> Self {
        let defaults = Self::default();

        for (name, value, fallback) in [
            ("speed", &mut self.speed, defaults.speed),
            ("jump_impulse", &mut self.jump_impulse, defaults.jump_impulse),
            ("gravity", &mut self.gravity, defaults.gravity),
        ] {
            if !value.is_finite() {
                log::warn!("{} {} must be finite, using {}", name, value, fallback);
                *value = fallback;
            }
        }

        if !(self.max_dt.is_finite() && self.max_dt > 0.0) {
            log::warn!("max_dt {} must be positive, using {}", self.max_dt, defaults.max_dt);
            self.max_dt = defaults.max_dt;
        }
        if !(self.collectible_size.is_finite() && self.collectible_size > 0.0) {
            log::warn!(
                "collectible_size {} must be positive, using {}",
                self.collectible_size,
                defaults.collectible_size
            );
            self.collectible_size = defaults.collectible_size;
        }
        if !(self.spawn_interval.is_finite() && self.spawn_interval >= self.max_dt) {
            log::warn!(
                "spawn_interval {} must be at least max_dt {}, using {}",
                self.spawn_interval,
                self.max_dt,
                defaults.spawn_interval
            );
            self.spawn_interval = defaults.spawn_interval;
        }
        self
    }

    /// Element id of the optional inline tuning document
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "tuning";

    /// Load tuning from the page (WASM only).
    /// Absent block means defaults; a malformed one is an error.
    #[cfg(target_arch = "wasm32")]
    pub fn load(document: &web_sys::Document) -> Result<Self, InitError> {
        match document
            .get_element_by_id(Self::ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(json) if !json.trim().is_empty() => {
                let tuning = Self::from_json(&json)?;
                log::info!("Loaded tuning from page: {:?}", tuning);
                Ok(tuning)
            }
            _ => {
                log::info!("Using default tuning");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.speed, 200.0);
        assert_eq!(t.jump_impulse, -600.0);
        assert_eq!(t.gravity, 2000.0);
        assert_eq!(t.max_dt, 0.05);
        assert_eq!(t.spawn_interval, 1.5);
        assert_eq!(t.collectible_size, 40.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 1500.0 }"#).unwrap();
        assert_eq!(t.gravity, 1500.0);
        assert_eq!(t.speed, PLAYER_SPEED);
        assert_eq!(t.spawn_interval, SPAWN_INTERVAL);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, InitError::Tuning(_)));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let t = Tuning::from_json(r#"{ "spawn_interval": 0.0, "max_dt": -1.0 }"#).unwrap();
        assert_eq!(t.spawn_interval, SPAWN_INTERVAL);
        assert_eq!(t.max_dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_validate_rejects_tiny_interval() {
        let t = Tuning::from_json(r#"{ "spawn_interval": 1e-10 }"#).unwrap();
        assert_eq!(t.spawn_interval, SPAWN_INTERVAL);

        // The validated interval keeps the spawn timer finite at max step
        let mut spawner = crate::sim::SpawnScheduler::new(t.spawn_interval);
        assert!(spawner.tick(t.max_dt) <= 1);
    }

    #[test]
    fn test_validate_interval_not_below_max_dt() {
        let t = Tuning::from_json(r#"{ "spawn_interval": 0.02, "max_dt": 0.05 }"#).unwrap();
        assert_eq!(t.spawn_interval, SPAWN_INTERVAL);

        let t = Tuning::from_json(r#"{ "spawn_interval": 0.05, "max_dt": 0.05 }"#).unwrap();
        assert_eq!(t.spawn_interval, 0.05);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        // Out of f32 range: parses to infinity
        let json = r#"{ "gravity": 1e39, "speed": -1e39, "max_dt": 1e39 }"#;
        let t = Tuning::from_json(json).unwrap();
        assert_eq!(t.gravity, GRAVITY);
        assert_eq!(t.speed, PLAYER_SPEED);
        assert_eq!(t.max_dt, MAX_FRAME_DT);
    }
}
