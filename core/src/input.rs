use serde::{Deserialize, Serialize};

use crate::*;

/// Where a surface currently sits on screen, in client (viewport) units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Converts a client position into surface units.
    ///
    /// The origin is subtracted first; when the surface is displayed at a size other than its
    /// own (CSS scaling), the offset is rescaled. A degenerate rect is treated as unscaled.
    pub fn to_local(&self, client_x: f64, client_y: f64, surface: Coord2) -> PointerSample {
        let scale = |extent: f64, units: Coord| {
            if extent.is_finite() && extent > 0.0 {
                f64::from(units) / extent
            } else {
                1.0
            }
        };

        PointerSample::new(
            (client_x - self.left) * scale(self.width, surface.0),
            (client_y - self.top) * scale(self.height, surface.1),
        )
    }
}

/// One pointer contact as reported by the platform, before normalization.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    Mouse { client_x: f64, client_y: f64 },
    /// First touch contact; `None` when the event carries no touches (e.g. `touchend`).
    Touch(Option<(f64, f64)>),
}

impl PointerInput {
    pub fn sample(self, rect: &SurfaceRect, surface: Coord2) -> Option<PointerSample> {
        let (client_x, client_y) = match self {
            Self::Mouse { client_x, client_y } => (client_x, client_y),
            Self::Touch(contact) => contact?,
        };
        Some(rect.to_local(client_x, client_y, surface))
    }
}
