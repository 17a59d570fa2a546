#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use input::*;
pub use prize::*;
pub use surface::*;
pub use types::*;
pub use widget::*;

mod error;
mod input;
mod prize;
mod surface;
mod types;
mod widget;

pub const DEFAULT_SURFACE_SIZE: Coord2 = (300, 120);
pub const DEFAULT_BRUSH_RADIUS: f64 = 20.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.5;

/// Tunables of a scratch surface. The brush radius and threshold were tuned for the default
/// 300×120 surface and do not scale with it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    pub size: Coord2,
    pub brush_radius: f64,
    /// Erased fraction that must be strictly exceeded before the cover snaps away.
    pub threshold: f64,
}

impl RevealConfig {
    pub const fn new_unchecked(size: Coord2, brush_radius: f64, threshold: f64) -> Self {
        Self {
            size,
            brush_radius,
            threshold,
        }
    }

    /// Builds a config, clamping every parameter into its valid range.
    pub fn new((size_x, size_y): Coord2, brush_radius: f64, threshold: f64) -> Self {
        let size_x = size_x.max(1);
        let size_y = size_y.max(1);
        let brush_radius = if brush_radius.is_finite() && brush_radius > 0.0 {
            brush_radius
        } else {
            log::warn!(
                "Brush radius {} is unusable, falling back to {}",
                brush_radius,
                DEFAULT_BRUSH_RADIUS
            );
            DEFAULT_BRUSH_RADIUS
        };
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 0.99)
        };
        Self::new_unchecked((size_x, size_y), brush_radius, threshold)
    }

    pub fn try_new(size: Coord2, brush_radius: f64, threshold: f64) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(ConfigError::EmptySurface);
        }
        if !(brush_radius.is_finite() && brush_radius > 0.0) {
            return Err(ConfigError::InvalidBrushRadius);
        }
        if !(0.0..1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold);
        }
        Ok(Self::new_unchecked(size, brush_radius, threshold))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::new_unchecked(
            DEFAULT_SURFACE_SIZE,
            DEFAULT_BRUSH_RADIUS,
            DEFAULT_REVEAL_THRESHOLD,
        )
    }
}
