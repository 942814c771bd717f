//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only by the `delta_ms` passed in
//! - Seeded RNG only (level generation)
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod flyer;
pub mod level;
pub mod obstacle;
pub mod physics;
pub mod scroll;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{
    CollisionResult, check_collision, check_ground_collision, first_hit, handle_hit,
};
pub use flyer::{Flyer, FlyerPhysics, FlyerState};
pub use level::{LEVEL_1_ID, Level};
pub use obstacle::{Obstacle, ObstaclePlacement, Variant};
pub use scroll::ScrollDriver;
pub use state::{RunPhase, RunState};
pub use tick::{HitCause, RunEvent, TickInput, tick};
