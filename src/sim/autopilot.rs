//! Demo pilot
//!
//! Produces the same kind of input a player would, so a demo run goes
//! through exactly the same tick path. Aims the flyer's center at the gap of
//! the nearest obstacle it has not cleared yet.

use super::flyer::FlyerState;
use super::state::RunState;
use super::tick::TickInput;
use crate::consts::GAME_HEIGHT;
use crate::viewport::Viewport;

/// How far below the target the flyer sinks before flapping again.
/// A flap from rest rises about 33px, so this centers the bob on the target.
const FLAP_THRESHOLD: f32 = 16.0;

/// Vertical position the pilot is steering toward
pub fn target_y<V: Viewport>(state: &RunState<V>) -> f32 {
    let flyer_x = state.flyer.pos.x;
    state
        .scroll
        .obstacles()
        .iter()
        .filter(|o| o.x + o.width() >= flyer_x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|o| o.gap_center())
        .unwrap_or(GAME_HEIGHT / 2.0)
}

pub fn autopilot<V: Viewport>(state: &RunState<V>) -> TickInput {
    let flyer = &state.flyer;
    let center = flyer.pos.y + flyer.sprite_height() / 2.0;
    let sinking = flyer.vel_y >= 0.0 && center > target_y(state) + FLAP_THRESHOLD;

    TickInput {
        press: sinking,
        release: !sinking && flyer.state == FlyerState::Flapping,
        pause: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{Level, RunPhase, RunState, tick};
    use crate::tuning::Tuning;

    fn run() -> RunState {
        RunState::new(Level::level_1(), MIN_GAME_WIDTH, &Tuning::default())
    }

    #[test]
    fn test_target_defaults_to_mid_screen() {
        assert_eq!(target_y(&run()), GAME_HEIGHT / 2.0);
    }

    #[test]
    fn test_targets_nearest_obstacle_ahead() {
        let mut state = run();
        // Spawn level 1's first two obstacles
        while state.scroll.obstacles().len() < 2 {
            state.scroll.update();
        }
        let first = state.scroll.obstacles()[0].gap_center();
        assert_eq!(target_y(&state), first);

        // Once the first is behind the flyer, aim for the second
        state.scroll.obstacles_mut()[0].x = -OBSTACLE_WIDTH;
        let second = state.scroll.obstacles()[1].gap_center();
        assert_eq!(target_y(&state), second);
    }

    #[test]
    fn test_flaps_when_sinking_below_target() {
        let mut state = run();
        state.flyer.pos.y = 250.0;
        state.flyer.vel_y = 50.0;
        assert!(autopilot(&state).press);

        state.flyer.pos.y = 100.0;
        assert!(!autopilot(&state).press);

        state.flyer.flap();
        assert!(autopilot(&state).release);
    }

    #[test]
    fn test_keeps_flyer_off_the_ground() {
        let mut state = RunState::new(
            Level {
                obstacles: Vec::new(),
                ..Level::level_1()
            },
            MIN_GAME_WIDTH,
            &Tuning::default(),
        );
        for _ in 0..1000 {
            let input = autopilot(&state);
            tick(&mut state, &input, FRAME_MS);
        }
        assert_eq!(state.phase, RunPhase::Playing);
        assert_eq!(state.lives, MAX_LIVES);
        assert!(!state.flyer.is_on_ground());
    }
}
