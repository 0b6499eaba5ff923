//! Electric field of a set of point charges.
//!
//! The field is evaluated by direct Coulomb summation, `E = Σ k·q/r³ · d`,
//! where `d` is the vector from each charge to the query point. There is no
//! grid and no caching: every call walks the whole charge list.
//!
//! # Singularity policy
//!
//! A charge closer than [`FieldParams::exclusion_radius`] to the query point
//! contributes nothing to that evaluation. This keeps the result finite at
//! and around charge positions (including coincident charges) instead of
//! blowing up as `r → 0`. Lines that pass through the exclusion disc simply
//! do not see that charge for those steps.
//!
//! # Example
//!
//! ```ignore
//! use efield::{electric_field, Charge, FieldParams, Polarity};
//! use glam::DVec2;
//!
//! let charges = [Charge::unit(DVec2::ZERO, Polarity::Positive)];
//! let e = electric_field(&charges, DVec2::new(1.0, 0.0), &FieldParams::default());
//! assert!(e.x > 0.0);
//! ```

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::charge::Charge;

/// Electrostatic constant `k = 1 / (4π ε₀)`, rounded.
pub const COULOMB_CONSTANT: f64 = 9e9;

/// Query points closer than this to a charge ignore that charge.
pub const EXCLUSION_RADIUS: f64 = 0.05;

/// Physical constants used by the field evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    /// Coulomb constant `k`.
    pub coulomb_constant: f64,
    /// Minimum charge-to-point distance for a charge to contribute.
    pub exclusion_radius: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            coulomb_constant: COULOMB_CONSTANT,
            exclusion_radius: EXCLUSION_RADIUS,
        }
    }
}

/// Superposed field at `point`.
///
/// Always finite. Returns [`DVec2::ZERO`] when `charges` is empty or every
/// charge sits inside the exclusion radius.
pub fn electric_field(charges: &[Charge], point: DVec2, params: &FieldParams) -> DVec2 {
    let mut e = DVec2::ZERO;
    for c in charges {
        let d = point - c.position;
        let r = d.length();
        if r > params.exclusion_radius {
            e += (params.coulomb_constant * c.q / (r * r * r)) * d;
        }
    }
    e
}

/// `|E|` at `point`.
pub fn field_magnitude(charges: &[Charge], point: DVec2, params: &FieldParams) -> f64 {
    electric_field(charges, point, params).length()
}
