//! Run state
//!
//! Everything one run owns: the flyer, the scroll driver, lives, and phase.
//! Serializable so a run can be snapshotted and compared for determinism.

use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::level::Level;
use super::physics;
use super::scroll::ScrollDriver;
use crate::tuning::Tuning;
use crate::viewport::Viewport;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Playing,
    /// Host went to the background; ticks are ignored
    Paused,
    /// Out of lives
    GameOver,
    /// Scrolled the full track
    LevelComplete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState<V: Viewport = f32> {
    pub phase: RunPhase,
    pub lives: u8,
    pub max_lives: u8,
    pub flyer: Flyer,
    /// Horizontal hitbox extent (the flyer only tracks its height)
    pub flyer_width: f32,
    pub scroll: ScrollDriver<V>,
    /// Obstacles cleared this attempt
    pub obstacles_passed: u32,
    /// Ticks simulated this attempt
    pub time_ticks: u64,
}

impl<V: Viewport> RunState<V> {
    pub fn new(level: Level, viewport: V, tuning: &Tuning) -> Self {
        let mut scroll = ScrollDriver::new(viewport);
        scroll.load_level(level);

        Self {
            phase: RunPhase::Playing,
            lives: tuning.max_lives,
            max_lives: tuning.max_lives,
            flyer: Flyer::with_physics(tuning.flyer_height, tuning.flyer_physics()),
            flyer_width: tuning.flyer_width,
            scroll,
            obstacles_passed: 0,
            time_ticks: 0,
        }
    }

    /// Start the same level over with full lives
    pub fn retry(&mut self) {
        self.flyer.reset();
        self.scroll.reset();
        self.lives = self.max_lives;
        self.obstacles_passed = 0;
        self.time_ticks = 0;
        self.phase = RunPhase::Playing;
        if let Some(level) = self.scroll.level() {
            log::info!("Retrying level '{}'", level.id);
        }
    }

    pub fn on_press(&mut self) {
        if self.phase == RunPhase::Playing {
            physics::apply_flap(&mut self.flyer);
        }
    }

    pub fn on_release(&mut self) {
        if self.phase == RunPhase::Playing {
            physics::release_flap(&mut self.flyer);
        }
    }

    pub fn pause(&mut self) {
        if self.phase == RunPhase::Playing {
            self.phase = RunPhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == RunPhase::Paused {
            self.phase = RunPhase::Playing;
        }
    }

    /// Run ended, one way or the other
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, RunPhase::GameOver | RunPhase::LevelComplete)
    }
}
