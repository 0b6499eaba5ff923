//! The fixed square region of the plane that is plotted and traced.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Half-width of the default viewport.
pub const VIEWPORT_BOUND: f64 = 2.0;

/// Axis-aligned square `[-bound, bound]²` centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub bound: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            bound: VIEWPORT_BOUND,
        }
    }
}

impl Viewport {
    pub fn new(bound: f64) -> Self {
        Self { bound }
    }

    /// Whether `p` lies inside the square. The edges count as inside.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= -self.bound && p.x <= self.bound && p.y >= -self.bound && p.y <= self.bound
    }

    pub fn min(&self) -> DVec2 {
        DVec2::splat(-self.bound)
    }

    pub fn max(&self) -> DVec2 {
        DVec2::splat(self.bound)
    }
}
