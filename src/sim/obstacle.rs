//! Gap obstacles
//!
//! An obstacle is a pair of barriers (one hanging from the top, one standing
//! on the ground) with a passable gap between them. Only `x` moves.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Cosmetic barrier style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Stone,
    Vine,
}

/// One scheduled obstacle in a level, in track-absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstaclePlacement {
    /// Track distance at which the obstacle's left edge sits
    pub spawn_offset: f32,
    pub gap_center: f32,
    pub gap_size: f32,
    #[serde(default)]
    pub variant: Variant,
}

/// A live obstacle scrolling across the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Creation-order handle, stable for the obstacle's lifetime
    pub id: u32,
    /// Left edge in viewport coordinates
    pub x: f32,
    gap_center: f32,
    gap_size: f32,
    variant: Variant,
    /// Set once the flyer has cleared it
    pub passed: bool,
}

impl Obstacle {
    /// Build an obstacle, clamping malformed gap geometry into a playable one.
    ///
    /// The size is clamped first; the center is then clamped with the clamped
    /// size so neither barrier is shorter than `MIN_BARRIER_HEIGHT`. A
    /// non-finite size becomes the minimum gap and a non-finite center the
    /// middle of the playfield.
    pub fn new(id: u32, x: f32, gap_center: f32, gap_size: f32, variant: Variant) -> Self {
        let gap_size = if gap_size.is_finite() {
            gap_size
        } else {
            MIN_GAP_SIZE
        };
        let gap_center = if gap_center.is_finite() {
            gap_center
        } else {
            GAME_HEIGHT / 2.0
        };
        let gap_size = gap_size.clamp(MIN_GAP_SIZE, MAX_GAP_SIZE);
        let half_gap = gap_size / 2.0;
        let min_center = MIN_BARRIER_HEIGHT + half_gap;
        let max_center = GAME_HEIGHT - MIN_BARRIER_HEIGHT - half_gap;
        let gap_center = gap_center.clamp(min_center, max_center);

        Self {
            id,
            x,
            gap_center,
            gap_size,
            variant,
            passed: false,
        }
    }

    pub fn from_placement(id: u32, x: f32, placement: &ObstaclePlacement) -> Self {
        Self::new(
            id,
            x,
            placement.gap_center,
            placement.gap_size,
            placement.variant,
        )
    }

    pub fn gap_center(&self) -> f32 {
        self.gap_center
    }

    pub fn gap_size(&self) -> f32 {
        self.gap_size
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn width(&self) -> f32 {
        OBSTACLE_WIDTH
    }

    /// Lower edge of the top barrier
    #[inline]
    pub fn top_barrier_bottom(&self) -> f32 {
        self.gap_center - self.gap_size / 2.0
    }

    /// Upper edge of the bottom barrier
    #[inline]
    pub fn bottom_barrier_top(&self) -> f32 {
        self.gap_center + self.gap_size / 2.0
    }

    pub fn update(&mut self, scroll_speed: f32) {
        self.x -= scroll_speed;
    }

    /// Fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.x < -self.width()
    }

    /// Open-interval horizontal overlap with `[entity_x, entity_x + entity_width]`
    pub fn overlaps_x(&self, entity_x: f32, entity_width: f32) -> bool {
        entity_x + entity_width > self.x && entity_x < self.x + self.width()
    }

    /// Entity fits strictly between the barriers; touching an edge is a hit
    pub fn is_in_gap(&self, entity_y: f32, entity_height: f32) -> bool {
        entity_y > self.top_barrier_bottom() && entity_y + entity_height < self.bottom_barrier_top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(gap_center: f32, gap_size: f32) -> Obstacle {
        Obstacle::new(0, 200.0, gap_center, gap_size, Variant::Stone)
    }

    #[test]
    fn test_gap_size_clamped() {
        assert_eq!(obstacle(160.0, 10.0).gap_size(), MIN_GAP_SIZE);
        assert_eq!(obstacle(160.0, 300.0).gap_size(), MAX_GAP_SIZE);
        assert_eq!(obstacle(160.0, 120.0).gap_size(), 120.0);
    }

    #[test]
    fn test_barrier_edges() {
        let o = obstacle(160.0, 100.0);
        assert_eq!(o.top_barrier_bottom(), 110.0);
        assert_eq!(o.bottom_barrier_top(), 210.0);
    }

    #[test]
    fn test_gap_center_keeps_min_barrier() {
        let high = obstacle(0.0, 100.0);
        assert_eq!(high.top_barrier_bottom(), MIN_BARRIER_HEIGHT);

        let low = obstacle(GAME_HEIGHT, 100.0);
        assert_eq!(low.bottom_barrier_top(), GAME_HEIGHT - MIN_BARRIER_HEIGHT);
    }

    #[test]
    fn test_center_clamp_uses_clamped_size() {
        // Raw size 300 would push the margin past the screen; clamped size is 160
        let o = obstacle(0.0, 300.0);
        assert_eq!(o.gap_size(), MAX_GAP_SIZE);
        assert_eq!(o.gap_center(), MIN_BARRIER_HEIGHT + MAX_GAP_SIZE / 2.0);
        assert_eq!(o.top_barrier_bottom(), MIN_BARRIER_HEIGHT);
    }

    #[test]
    fn test_non_finite_geometry_falls_back() {
        let o = obstacle(f32::NAN, f32::NAN);
        assert_eq!(o.gap_size(), MIN_GAP_SIZE);
        assert_eq!(o.gap_center(), GAME_HEIGHT / 2.0);
        assert!(o.top_barrier_bottom() >= MIN_BARRIER_HEIGHT);
        assert!(o.bottom_barrier_top() <= GAME_HEIGHT - MIN_BARRIER_HEIGHT);

        let o = obstacle(f32::INFINITY, f32::NEG_INFINITY);
        assert_eq!(o.gap_size(), MIN_GAP_SIZE);
        assert_eq!(o.gap_center(), GAME_HEIGHT / 2.0);
    }

    #[test]
    fn test_update_translates_left() {
        let mut o = obstacle(160.0, 100.0);
        o.update(2.0);
        assert_eq!(o.x, 198.0);
        o.update(2.5);
        assert_eq!(o.x, 195.5);
    }

    #[test]
    fn test_off_screen_needs_full_exit() {
        let mut o = obstacle(160.0, 100.0);
        o.x = -1.0;
        assert!(!o.is_off_screen());
        o.x = -OBSTACLE_WIDTH;
        assert!(!o.is_off_screen());
        o.x = -OBSTACLE_WIDTH - 0.5;
        assert!(o.is_off_screen());
    }

    #[test]
    fn test_overlaps_x_open_interval() {
        let o = obstacle(160.0, 100.0); // spans [200, 248]
        assert!(o.overlaps_x(180.0, 32.0));
        assert!(o.overlaps_x(230.0, 32.0));
        // Touching edges do not overlap
        assert!(!o.overlaps_x(168.0, 32.0));
        assert!(!o.overlaps_x(248.0, 32.0));
        assert!(!o.overlaps_x(0.0, 32.0));
    }

    #[test]
    fn test_in_gap_exclusive_edges() {
        let o = obstacle(160.0, 100.0); // gap (110, 210)
        assert!(o.is_in_gap(140.0, 32.0));
        assert!(!o.is_in_gap(110.0, 32.0));
        assert!(!o.is_in_gap(178.0, 32.0));
        assert!(!o.is_in_gap(50.0, 32.0));
        assert!(!o.is_in_gap(200.0, 32.0));
    }

    #[test]
    fn test_from_placement() {
        let placement = ObstaclePlacement {
            spawn_offset: 600.0,
            gap_center: 140.0,
            gap_size: 100.0,
            variant: Variant::Vine,
        };
        let o = Obstacle::from_placement(7, 480.0, &placement);
        assert_eq!(o.id, 7);
        assert_eq!(o.x, 480.0);
        assert_eq!(o.gap_center(), 140.0);
        assert_eq!(o.variant(), Variant::Vine);
        assert!(!o.passed);
    }

    #[test]
    fn test_placement_json_shape() {
        let json = r#"{"spawnOffset": 300, "gapCenter": 160, "gapSize": 120, "variant": "vine"}"#;
        let placement: ObstaclePlacement = serde_json::from_str(json).unwrap();
        assert_eq!(placement.spawn_offset, 300.0);
        assert_eq!(placement.variant, Variant::Vine);

        let no_variant = r#"{"spawnOffset": 300, "gapCenter": 160, "gapSize": 120}"#;
        let placement: ObstaclePlacement = serde_json::from_str(no_variant).unwrap();
        assert_eq!(placement.variant, Variant::Stone);
    }
}
