//! Per-frame simulation tick
//!
//! Order within a tick: input edges, flyer physics, scrolling, obstacle
//! collisions (first hit wins), ground collision, level completion. Outcomes
//! come back as a list of events; nothing calls back into the host.

use serde::{Deserialize, Serialize};

use super::collision::{check_collision, check_ground_collision, handle_hit};
use super::physics;
use super::state::{RunPhase, RunState};
use crate::viewport::Viewport;

/// Input edges collected since the previous tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Pointer/key went down
    pub press: bool,
    /// Pointer/key went up (applied after `press` when both are set)
    pub release: bool,
    /// Pause toggle (e.g. host visibility change)
    pub pause: bool,
}

/// What took the life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitCause {
    Obstacle { id: u32 },
    Ground,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
    LifeLost { cause: HitCause, remaining: u8 },
    ObstaclePassed { id: u32 },
    GameOver { progress: f32 },
    LevelComplete,
}

/// Advance the run by one frame of `delta_ms` milliseconds
pub fn tick<V: Viewport>(
    state: &mut RunState<V>,
    input: &TickInput,
    delta_ms: f32,
) -> Vec<RunEvent> {
    let mut events = Vec::new();

    if input.pause {
        match state.phase {
            RunPhase::Playing => {
                state.pause();
                return events;
            }
            RunPhase::Paused => state.resume(),
            _ => {}
        }
    }

    if state.phase != RunPhase::Playing {
        return events;
    }

    if input.press {
        physics::apply_flap(&mut state.flyer);
    }
    if input.release {
        physics::release_flap(&mut state.flyer);
    }

    state.time_ticks += 1;
    physics::update(&mut state.flyer, delta_ms);
    state.scroll.update();

    // Scan in spawn order; stop at the first hit so one tick costs one life
    let flyer_x = state.flyer.pos.x;
    let mut hit_id = None;
    for obstacle in state.scroll.obstacles_mut() {
        if check_collision(&state.flyer, obstacle, state.flyer_width).hit_obstacle {
            hit_id = Some(obstacle.id);
            break;
        }
        if !obstacle.passed && obstacle.x + obstacle.width() < flyer_x {
            obstacle.passed = true;
            state.obstacles_passed += 1;
            events.push(RunEvent::ObstaclePassed { id: obstacle.id });
        }
    }

    if let Some(id) = hit_id {
        lose_life(state, HitCause::Obstacle { id }, &mut events);
    }
    if state.phase == RunPhase::Playing && check_ground_collision(&state.flyer) {
        lose_life(state, HitCause::Ground, &mut events);
    }
    if state.phase != RunPhase::Playing {
        return events;
    }

    if state.scroll.is_level_complete() {
        state.phase = RunPhase::LevelComplete;
        log::info!(
            "Level complete after {} ticks, {} lives left",
            state.time_ticks,
            state.lives
        );
        events.push(RunEvent::LevelComplete);
    }

    events
}

fn lose_life<V: Viewport>(state: &mut RunState<V>, cause: HitCause, events: &mut Vec<RunEvent>) {
    if state.flyer.is_invincible() {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    handle_hit(&mut state.flyer);
    log::debug!("Life lost to {:?}, {} remaining", cause, state.lives);
    events.push(RunEvent::LifeLost {
        cause,
        remaining: state.lives,
    });

    if state.lives == 0 {
        let progress = state.scroll.progress();
        state.phase = RunPhase::GameOver;
        log::info!("Game over at progress {progress}");
        events.push(RunEvent::GameOver { progress });
    }
}
