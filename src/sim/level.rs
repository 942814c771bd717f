//! Level descriptors
//!
//! A level is static data: how long the track is, how fast it scrolls, and
//! where its obstacles sit in track-absolute coordinates. Built-in levels are
//! generated in code; external ones arrive as JSON and are validated once at
//! ingestion.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::{ObstaclePlacement, Variant};
use crate::consts::*;
use crate::error::{Error, Result};

/// Id of the first built-in level
pub const LEVEL_1_ID: &str = "level-1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: String,
    /// Scroll distance at which the level is complete
    pub total_length: f32,
    /// Scroll distance per tick
    pub scroll_speed: f32,
    /// Presentation tag, carried through untouched
    #[serde(default)]
    pub background_theme: String,
    /// Ordered by `spawn_offset`
    pub obstacles: Vec<ObstaclePlacement>,
}

impl Level {
    /// The opening level: 18 obstacles on a 400px rhythm, the gap wandering
    /// along a sine and narrowing as the level goes on.
    pub fn level_1() -> Self {
        let spacing = 400.0;
        let obstacles = (0..18u32)
            .map(|i| {
                let fi = i as f64;
                let gap_center = 100.0 + (fi * 0.7).sin() * 60.0 + f64::from(i % 3) * 20.0;
                let gap_size = (140.0 - fi * 3.0).round().max(90.0);
                ObstaclePlacement {
                    spawn_offset: 600.0 + i as f32 * spacing,
                    gap_center: gap_center.round() as f32,
                    gap_size: gap_size as f32,
                    variant: if i % 2 == 0 { Variant::Stone } else { Variant::Vine },
                }
            })
            .collect();

        Self {
            id: LEVEL_1_ID.to_string(),
            total_length: LEVEL_1_LENGTH,
            scroll_speed: BASE_SCROLL_SPEED,
            background_theme: "fantasy-forest".to_string(),
            obstacles,
        }
    }

    /// Look up a built-in level
    pub fn by_id(id: &str) -> Result<Self> {
        match id {
            LEVEL_1_ID => Ok(Self::level_1()),
            _ => Err(Error::UnknownLevel(id.to_string())),
        }
    }

    /// Seeded procedural level. The same seed always yields the same level.
    ///
    /// Spacing is jittered, gap centers are uniform over the legal band for
    /// the chosen size, and gap sizes shrink linearly from the maximum toward
    /// the minimum over the course of the level.
    pub fn generate(id: &str, seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut spawn_offset = 600.0_f32;
        let mut obstacles = Vec::with_capacity(count);

        for i in 0..count {
            let difficulty = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            let gap_size = MAX_GAP_SIZE - (MAX_GAP_SIZE - MIN_GAP_SIZE) * difficulty;
            let half_gap = gap_size / 2.0;
            let gap_center = rng.random_range(
                (MIN_BARRIER_HEIGHT + half_gap)..=(GAME_HEIGHT - MIN_BARRIER_HEIGHT - half_gap),
            );
            let variant = if rng.random_bool(0.5) {
                Variant::Stone
            } else {
                Variant::Vine
            };

            obstacles.push(ObstaclePlacement {
                spawn_offset,
                gap_center: gap_center.round(),
                gap_size: gap_size.round(),
                variant,
            });
            spawn_offset += rng.random_range(320.0..=480.0_f32).round();
        }

        // Long enough for the last obstacle to cross even the widest viewport
        let total_length = obstacles
            .last()
            .map(|p| p.spawn_offset + MAX_GAME_WIDTH)
            .unwrap_or(LEVEL_1_LENGTH);

        Self {
            id: id.to_string(),
            total_length,
            scroll_speed: BASE_SCROLL_SPEED,
            background_theme: "generated".to_string(),
            obstacles,
        }
    }

    /// Parse and validate a level from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let level: Self = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Read a level file from disk
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject data the scroll driver cannot schedule sensibly.
    ///
    /// Gap geometry is not checked here: obstacles clamp it on spawn.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidLevel {
            id: self.id.clone(),
            reason,
        };

        if !(self.total_length.is_finite() && self.total_length > 0.0) {
            return Err(invalid(format!(
                "total length must be positive, got {}",
                self.total_length
            )));
        }
        if !(self.scroll_speed.is_finite() && self.scroll_speed > 0.0) {
            return Err(invalid(format!(
                "scroll speed must be positive, got {}",
                self.scroll_speed
            )));
        }

        let mut last_offset = f32::NEG_INFINITY;
        for (i, p) in self.obstacles.iter().enumerate() {
            if ![p.spawn_offset, p.gap_center, p.gap_size]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(invalid(format!("obstacle {i} has a non-finite value")));
            }
            if p.spawn_offset < last_offset {
                return Err(invalid(format!(
                    "obstacle {i} at {} is scheduled before its predecessor at {last_offset}",
                    p.spawn_offset
                )));
            }
            last_offset = p.spawn_offset;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_1_schedule() {
        let level = Level::level_1();
        assert_eq!(level.id, "level-1");
        assert_eq!(level.total_length, 7000.0);
        assert_eq!(level.scroll_speed, 2.0);
        assert_eq!(level.obstacles.len(), 18);

        let first = level.obstacles[0];
        assert_eq!(first.spawn_offset, 600.0);
        assert_eq!(first.gap_center, 100.0);
        assert_eq!(first.gap_size, 140.0);
        assert_eq!(first.variant, Variant::Stone);

        // i = 1: 100 + sin(0.7)*60 + 20 = 158.65 → 159, size 137
        let second = level.obstacles[1];
        assert_eq!(second.spawn_offset, 1000.0);
        assert_eq!(second.gap_center, 159.0);
        assert_eq!(second.gap_size, 137.0);
        assert_eq!(second.variant, Variant::Vine);

        // Size bottoms out at 90
        assert_eq!(level.obstacles[17].gap_size, 90.0);
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_by_id() {
        assert_eq!(Level::by_id("level-1").unwrap(), Level::level_1());
        assert!(matches!(Level::by_id("level-9"), Err(Error::UnknownLevel(_))));
    }

    #[test]
    fn test_generate_deterministic() {
        let a = Level::generate("gen", 42, 12);
        let b = Level::generate("gen", 42, 12);
        let c = Level::generate("gen", 43, 12);
        assert_eq!(a, b);
        assert_ne!(a.obstacles, c.obstacles);
    }

    #[test]
    fn test_generate_is_playable() {
        let level = Level::generate("gen", 7, 20);
        assert!(level.validate().is_ok());
        assert_eq!(level.obstacles.len(), 20);
        assert_eq!(level.obstacles[0].gap_size, MAX_GAP_SIZE);
        assert_eq!(level.obstacles[19].gap_size, MIN_GAP_SIZE);
        for p in &level.obstacles {
            assert!(p.gap_center - p.gap_size / 2.0 >= MIN_BARRIER_HEIGHT - 1.0);
            assert!(p.gap_center + p.gap_size / 2.0 <= GAME_HEIGHT - MIN_BARRIER_HEIGHT + 1.0);
        }
        let last = level.obstacles[19].spawn_offset;
        assert_eq!(level.total_length, last + MAX_GAME_WIDTH);
    }

    #[test]
    fn test_generate_empty() {
        let level = Level::generate("empty", 1, 0);
        assert!(level.obstacles.is_empty());
        assert_eq!(level.total_length, LEVEL_1_LENGTH);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "id": "test-level",
            "totalLength": 1000,
            "scrollSpeed": 2,
            "backgroundTheme": "forest",
            "obstacles": [
                {"spawnOffset": 300, "gapCenter": 160, "gapSize": 120, "variant": "stone"},
                {"spawnOffset": 600, "gapCenter": 140, "gapSize": 100, "variant": "vine"}
            ]
        }"#;
        let level = Level::from_json(json).unwrap();
        assert_eq!(level.id, "test-level");
        assert_eq!(level.obstacles.len(), 2);
        assert_eq!(level.obstacles[1].variant, Variant::Vine);
    }

    #[test]
    fn test_from_json_rejects_bad_data() {
        let zero_length = r#"{"id": "z", "totalLength": 0, "scrollSpeed": 2, "obstacles": []}"#;
        assert!(matches!(
            Level::from_json(zero_length),
            Err(Error::InvalidLevel { .. })
        ));

        let stalled = r#"{"id": "s", "totalLength": 10, "scrollSpeed": 0, "obstacles": []}"#;
        assert!(matches!(
            Level::from_json(stalled),
            Err(Error::InvalidLevel { .. })
        ));

        let unsorted = r#"{"id": "u", "totalLength": 10, "scrollSpeed": 1, "obstacles": [
            {"spawnOffset": 600, "gapCenter": 160, "gapSize": 120},
            {"spawnOffset": 300, "gapCenter": 160, "gapSize": 120}
        ]}"#;
        assert!(matches!(
            Level::from_json(unsorted),
            Err(Error::InvalidLevel { .. })
        ));

        assert!(matches!(Level::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Level::load(std::path::Path::new("/nonexistent/level.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
