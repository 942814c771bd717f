//! Data-driven game balance
//!
//! Loaded from JSON; any field left out falls back to the `consts` default,
//! so a tuning file only needs to name what it changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::FlyerPhysics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tuning {
    // === Flyer physics ===
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Flap impulse (must be upward, i.e. negative)
    pub flap_velocity: f32,
    pub terminal_velocity: f32,
    /// Invincibility window after a hit (ms)
    pub invincibility_ms: f32,

    // === Flyer hitbox ===
    pub flyer_width: f32,
    pub flyer_height: f32,
    pub start_x: f32,
    pub start_y: f32,

    // === Run ===
    pub max_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            terminal_velocity: TERMINAL_VELOCITY,
            invincibility_ms: INVINCIBILITY_DURATION,

            flyer_width: FLYER_WIDTH,
            flyer_height: FLYER_HEIGHT,
            start_x: FLYER_START_X,
            start_y: FLYER_START_Y,

            max_lives: MAX_LIVES,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("gravity", self.gravity),
            ("terminalVelocity", self.terminal_velocity),
            ("invincibilityMs", self.invincibility_ms),
            ("flyerWidth", self.flyer_width),
            ("flyerHeight", self.flyer_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidTuning(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.flap_velocity.is_finite() && self.flap_velocity < 0.0) {
            return Err(Error::InvalidTuning(format!(
                "flapVelocity must be negative (upward), got {}",
                self.flap_velocity
            )));
        }
        if self.flyer_height >= GAME_HEIGHT {
            return Err(Error::InvalidTuning(format!(
                "flyerHeight {} does not fit the {GAME_HEIGHT}px playfield",
                self.flyer_height
            )));
        }
        if !(self.start_x.is_finite() && self.start_y.is_finite())
            || self.start_y < 0.0
            || self.start_y > GAME_HEIGHT - self.flyer_height
        {
            return Err(Error::InvalidTuning(format!(
                "start position ({}, {}) is outside the playfield",
                self.start_x, self.start_y
            )));
        }
        if self.max_lives == 0 {
            return Err(Error::InvalidTuning("maxLives must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Physics parameters for a flyer built from this tuning
    pub fn flyer_physics(&self) -> FlyerPhysics {
        FlyerPhysics {
            gravity: self.gravity,
            flap_velocity: self.flap_velocity,
            terminal_velocity: self.terminal_velocity,
            invincibility_ms: self.invincibility_ms,
            screen_height: GAME_HEIGHT,
            start: Vec2::new(self.start_x, self.start_y),
        }
    }
}
