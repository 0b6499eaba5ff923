//! Simulation settings.
//!
//! [`SimConfig`] gathers every tunable constant of the field evaluator, the
//! tracer and the plotted region. Defaults reproduce the classic constants
//! (`k = 9e9`, exclusion 0.05, 12 lines per charge, step 0.2, cutoff 0.1,
//! viewport ±2) so an untouched config behaves exactly like the fixed-constant
//! tool.
//!
//! Settings can be saved to and loaded from pretty-printed JSON. Missing
//! keys fall back to their defaults. Charges are never part of the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::field::FieldParams;
use crate::tracer::TraceConfig;
use crate::viewport::Viewport;

/// Most lines a single charge may seed.
pub const MAX_LINES_PER_CHARGE: u32 = 72;
/// Largest step budget multiplier (10 000 steps per line).
pub const MAX_DENSITY: u32 = 100;
/// Shortest Euler step accepted.
pub const MIN_STEP_LENGTH: f64 = 0.005;
/// Smallest seed distance from a charge.
pub const MIN_START_RADIUS: f64 = 0.01;
/// Largest viewport half-width.
pub const MAX_VIEWPORT_BOUND: f64 = 20.0;

/// Complete settings for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub field: FieldParams,
    pub tracer: TraceConfig,
    pub viewport: Viewport,
}

impl SimConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Adopt `candidate` if it validates, otherwise keep `self` unchanged.
    pub fn update(&mut self, candidate: SimConfig) -> Result<(), ConfigError> {
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// Reject values that would stall or break the tracer.
    ///
    /// Besides sign checks this caps the work of one retrace: at most
    /// [`MAX_LINES_PER_CHARGE`] lines of `MAX_DENSITY × 100` steps, each at
    /// least [`MIN_STEP_LENGTH`] long.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)))
            }
        }

        positive("field.coulomb_constant", self.field.coulomb_constant)?;
        positive("field.exclusion_radius", self.field.exclusion_radius)?;
        positive("tracer.start_radius", self.tracer.start_radius)?;
        positive("tracer.step_length", self.tracer.step_length)?;
        positive("viewport.bound", self.viewport.bound)?;

        if self.tracer.start_radius < MIN_START_RADIUS {
            return Err(ConfigError::Invalid(format!(
                "tracer.start_radius must be at least {}, got {}",
                MIN_START_RADIUS, self.tracer.start_radius
            )));
        }
        if self.tracer.step_length < MIN_STEP_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "tracer.step_length must be at least {}, got {}",
                MIN_STEP_LENGTH, self.tracer.step_length
            )));
        }
        if self.viewport.bound > MAX_VIEWPORT_BOUND {
            return Err(ConfigError::Invalid(format!(
                "viewport.bound must be at most {}, got {}",
                MAX_VIEWPORT_BOUND, self.viewport.bound
            )));
        }

        if !(self.tracer.magnitude_cutoff.is_finite() && self.tracer.magnitude_cutoff >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tracer.magnitude_cutoff must be non-negative, got {}",
                self.tracer.magnitude_cutoff
            )));
        }
        if !(1..=MAX_LINES_PER_CHARGE).contains(&self.tracer.lines_per_charge) {
            return Err(ConfigError::Invalid(format!(
                "tracer.lines_per_charge must be in 1..={}, got {}",
                MAX_LINES_PER_CHARGE, self.tracer.lines_per_charge
            )));
        }
        if !(1..=MAX_DENSITY).contains(&self.tracer.density) {
            return Err(ConfigError::Invalid(format!(
                "tracer.density must be in 1..={}, got {}",
                MAX_DENSITY, self.tracer.density
            )));
        }
        Ok(())
    }
}
