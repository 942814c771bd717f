//! Viewport width providers
//!
//! The scroll driver asks its provider for the current width every time it
//! checks the spawn schedule, so spawn timing follows the presentation
//! viewport without any process-wide state.

use serde::{Deserialize, Serialize};

use crate::consts::{GAME_HEIGHT, MAX_GAME_WIDTH, MIN_GAME_WIDTH};

/// Source of the visible horizontal extent (pixels)
pub trait Viewport {
    fn width(&self) -> f32;
}

/// A fixed width
impl Viewport for f32 {
    fn width(&self) -> f32 {
        *self
    }
}

/// Width derived from the host window's aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    width: f32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: MIN_GAME_WIDTH,
        }
    }
}

impl Resolution {
    /// Resolve the logical width for a window of the given inner size.
    ///
    /// The wider axis is treated as horizontal (landscape), the height is
    /// fixed at `GAME_HEIGHT`, and the result is clamped to
    /// `[MIN_GAME_WIDTH, MAX_GAME_WIDTH]`.
    pub fn from_window(inner_width: f32, inner_height: f32) -> Self {
        let mut res = Self::default();
        res.resize(inner_width, inner_height);
        res
    }

    /// Recompute the width after a window resize
    pub fn resize(&mut self, inner_width: f32, inner_height: f32) {
        let long = inner_width.max(inner_height);
        let short = inner_width.min(inner_height);

        // Headless or degenerate windows fall back to the minimum
        if short.is_nan() || short <= 0.0 || !long.is_finite() {
            self.width = MIN_GAME_WIDTH;
            return;
        }

        let calculated = (GAME_HEIGHT * (long / short)).round();
        self.width = calculated.clamp(MIN_GAME_WIDTH, MAX_GAME_WIDTH);
    }
}

impl Viewport for Resolution {
    fn width(&self) -> f32 {
        self.width
    }
}
