//! Dragon Flight - side-scrolling flight-avoidance simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flyer physics, obstacles, scrolling, collisions)
//! - `viewport`: Viewport width providers for spawn timing
//! - `tuning`: Data-driven physics balance
//! - `error`: Errors raised while ingesting level and tuning data
//!
//! The library never installs a logger; hosts decide where `log` output goes.

pub mod error;
pub mod sim;
pub mod tuning;
pub mod viewport;

pub use error::{Error, Result};
pub use tuning::Tuning;
pub use viewport::{Resolution, Viewport};

/// Game configuration constants
pub mod consts {
    /// Logical screen height (pixels)
    pub const GAME_HEIGHT: f32 = 320.0;
    /// Viewport width bounds (the width follows the host's aspect ratio)
    pub const MIN_GAME_WIDTH: f32 = 480.0;
    pub const MAX_GAME_WIDTH: f32 = 740.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 600.0;
    /// Vertical velocity set by a flap (negative is up, pixels/s)
    pub const FLAP_VELOCITY: f32 = -200.0;
    /// Maximum falling speed (pixels/s)
    pub const TERMINAL_VELOCITY: f32 = 400.0;
    pub const FLYER_START_X: f32 = 80.0;
    pub const FLYER_START_Y: f32 = 160.0;
    /// Flyer hitbox
    pub const FLYER_WIDTH: f32 = 32.0;
    pub const FLYER_HEIGHT: f32 = 32.0;

    /// Gap size bounds (pixels)
    pub const MIN_GAP_SIZE: f32 = 80.0;
    pub const MAX_GAP_SIZE: f32 = 160.0;
    /// Neither barrier may be shorter than this
    pub const MIN_BARRIER_HEIGHT: f32 = 40.0;
    pub const OBSTACLE_WIDTH: f32 = 48.0;

    pub const MAX_LIVES: u8 = 3;
    /// Grace period after a hit (milliseconds)
    pub const INVINCIBILITY_DURATION: f32 = 2000.0;

    /// Scroll distance per tick (pixels)
    pub const BASE_SCROLL_SPEED: f32 = 2.0;
    pub const LEVEL_1_LENGTH: f32 = 7000.0;

    /// Frame step used by the headless runner (60 Hz, milliseconds)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
}
