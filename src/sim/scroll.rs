//! Scroll progress and the live obstacle window
//!
//! The driver walks a level's spawn schedule as the track scrolls: a
//! placement becomes a live [`Obstacle`] once its track offset enters the
//! viewport, and the obstacle is dropped once it has fully left on the left.

use serde::{Deserialize, Serialize};

use super::level::Level;
use super::obstacle::Obstacle;
use crate::consts::BASE_SCROLL_SPEED;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollDriver<V: Viewport = f32> {
    viewport: V,
    level: Option<Level>,
    /// Track distance scrolled since the level was (re)armed
    progress: f32,
    /// Next placement to spawn
    spawn_index: usize,
    /// Live obstacles in spawn order
    obstacles: Vec<Obstacle>,
    /// Never reused, so hosts can key visuals by id across retries
    next_id: u32,
}

impl<V: Viewport> ScrollDriver<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            level: None,
            progress: 0.0,
            spawn_index: 0,
            obstacles: Vec::new(),
            next_id: 0,
        }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Hosts update the provider on resize; the next spawn check sees it
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    /// Scroll speed of the bound level, or the base speed with none bound
    pub fn current_speed(&self) -> f32 {
        self.level
            .as_ref()
            .map(|l| l.scroll_speed)
            .unwrap_or(BASE_SCROLL_SPEED)
    }

    /// Bind a level and start it from the beginning
    pub fn load_level(&mut self, level: Level) {
        log::info!(
            "Loaded level '{}': length={}, speed={}, {} obstacles",
            level.id,
            level.total_length,
            level.scroll_speed,
            level.obstacles.len()
        );
        self.level = Some(level);
        self.reset();
    }

    /// Restart the bound level (if any) without re-supplying it
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.spawn_index = 0;
        self.obstacles.clear();
    }

    /// Advance one tick: scroll, spawn what entered the viewport, move, cull
    pub fn update(&mut self) {
        let Some(level) = self.level.as_ref() else {
            return;
        };

        let speed = level.scroll_speed;
        self.progress += speed;

        let view_width = self.viewport.width();
        let horizon = self.progress + view_width;
        while let Some(placement) = level.obstacles.get(self.spawn_index) {
            if placement.spawn_offset > horizon {
                break;
            }
            let x = placement.spawn_offset - self.progress + view_width;
            let id = self.next_id;
            self.next_id += 1;
            log::debug!(
                "Spawned obstacle {id} (placement {}) at x={x}",
                self.spawn_index
            );
            self.obstacles.push(Obstacle::from_placement(id, x, placement));
            self.spawn_index += 1;
        }

        for obstacle in &mut self.obstacles {
            obstacle.update(speed);
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        let culled = before - self.obstacles.len();
        if culled > 0 {
            log::debug!("Culled {culled} obstacle(s) at progress {}", self.progress);
        }
    }

    pub fn is_level_complete(&self) -> bool {
        self.level
            .as_ref()
            .is_some_and(|l| self.progress >= l.total_length)
    }

    /// Progress through the level in [0, 1]
    pub fn progress_ratio(&self) -> f32 {
        match &self.level {
            Some(level) if level.total_length > 0.0 => {
                (self.progress / level.total_length).clamp(0.0, 1.0)
            }
            Some(_) => 1.0,
            None => 0.0,
        }
    }
}

impl Default for ScrollDriver<f32> {
    fn default() -> Self {
        Self::new(crate::consts::MIN_GAME_WIDTH)
    }
}
