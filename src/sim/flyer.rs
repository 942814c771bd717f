//! The player-controlled flyer
//!
//! Gravity and flap impulses drive a single vertical axis; x stays where the
//! run put it. A hit opens a timed invincibility window that is advanced only
//! by the `delta_ms` handed to [`Flyer::update`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Animation/state tag read by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlyerState {
    #[default]
    Idle,
    Flapping,
    /// Only entered together with a fresh invincibility window
    Hit,
}

/// Physics parameters for a flyer (defaults come from `consts`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlyerPhysics {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Velocity set by a flap (negative is up)
    pub flap_velocity: f32,
    /// Falling speed ceiling (pixels/s)
    pub terminal_velocity: f32,
    /// Invincibility window length (ms)
    pub invincibility_ms: f32,
    /// Height of the playfield the flyer is confined to
    pub screen_height: f32,
    /// Start position (top-left of the hitbox)
    pub start: Vec2,
}

impl Default for FlyerPhysics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            terminal_velocity: TERMINAL_VELOCITY,
            invincibility_ms: INVINCIBILITY_DURATION,
            screen_height: GAME_HEIGHT,
            start: Vec2::new(FLYER_START_X, FLYER_START_Y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    /// Top-left of the hitbox; x is fixed for the whole run
    pub pos: Vec2,
    /// Vertical velocity (pixels/s, positive is down)
    pub vel_y: f32,
    pub state: FlyerState,
    invincibility_ms: f32,
    sprite_height: f32,
    physics: FlyerPhysics,
}

impl Flyer {
    pub fn new(sprite_height: f32) -> Self {
        Self::with_physics(sprite_height, FlyerPhysics::default())
    }

    pub fn with_physics(sprite_height: f32, physics: FlyerPhysics) -> Self {
        Self {
            pos: physics.start,
            vel_y: 0.0,
            state: FlyerState::Idle,
            invincibility_ms: 0.0,
            sprite_height,
            physics,
        }
    }

    pub fn sprite_height(&self) -> f32 {
        self.sprite_height
    }

    pub fn physics(&self) -> &FlyerPhysics {
        &self.physics
    }

    /// Lowest legal y (top of hitbox resting on the ground)
    #[inline]
    pub fn max_y(&self) -> f32 {
        (self.physics.screen_height - self.sprite_height).max(0.0)
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincibility_ms > 0.0
    }

    /// Remaining invincibility (ms, never negative)
    #[inline]
    pub fn invincibility_remaining(&self) -> f32 {
        self.invincibility_ms
    }

    /// Overwrite vertical velocity with the flap impulse
    pub fn flap(&mut self) {
        self.vel_y = self.physics.flap_velocity;
        self.state = FlyerState::Flapping;
    }

    /// Release the flap; leaves `Hit` (and `Idle`) untouched
    pub fn stop_flap(&mut self) {
        if self.state == FlyerState::Flapping {
            self.state = FlyerState::Idle;
        }
    }

    /// Take a hit. Ignored while invincible so the window is never refreshed.
    pub fn hit(&mut self) {
        if self.is_invincible() {
            return;
        }
        self.state = FlyerState::Hit;
        self.invincibility_ms = self.physics.invincibility_ms;
    }

    /// Integrate gravity and count down invincibility
    pub fn update(&mut self, delta_ms: f32) {
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            return;
        }
        let dt = delta_ms / 1000.0;

        self.vel_y = (self.vel_y + self.physics.gravity * dt).min(self.physics.terminal_velocity);
        self.pos.y += self.vel_y * dt;

        // Inelastic boundaries: stop dead at either edge
        let max_y = self.max_y();
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel_y = 0.0;
        } else if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel_y = 0.0;
        }

        if self.invincibility_ms > 0.0 {
            self.invincibility_ms = (self.invincibility_ms - delta_ms).max(0.0);
            if self.invincibility_ms == 0.0 && self.state == FlyerState::Hit {
                self.state = FlyerState::Idle;
            }
        }
    }

    pub fn is_on_ground(&self) -> bool {
        self.pos.y >= self.max_y()
    }

    /// Back to the start of a run (x and sprite height are kept)
    pub fn reset(&mut self) {
        self.pos.y = self.physics.start.y;
        self.vel_y = 0.0;
        self.invincibility_ms = 0.0;
        self.state = FlyerState::Idle;
    }
}
