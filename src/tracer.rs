//! Field-line tracing by fixed-step forward Euler.
//!
//! Every charge seeds [`TraceConfig::lines_per_charge`] lines at evenly
//! spaced angles. Each line starts a short distance from its charge and is
//! advanced in steps of constant length along the unit field direction
//! until one of three things happens:
//!
//! - the field magnitude drops below [`TraceConfig::magnitude_cutoff`]
//!   ([`Termination::WeakField`]),
//! - the newest point leaves the [`Viewport`] ([`Termination::LeftViewport`]),
//! - the step budget `density × 100` runs out ([`Termination::IterationCap`]).
//!
//! Every line steps along `+E`. For a negative charge only the seed point is
//! mirrored through the charge, so a lone sink's lines fall straight back in
//! and stay within the start radius. There is no smoothing, adaptive
//! stepping or line-crossing detection.
//!
//! # Example
//!
//! ```ignore
//! let config = SimConfig::default();
//! let lines = Tracer::from_config(&config).trace_all(&charges);
//! for line in &lines {
//!     println!("{} points, stopped by {:?}", line.points.len(), line.termination);
//! }
//! ```

use std::f64::consts::TAU;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::charge::{Charge, Polarity};
use crate::config::SimConfig;
use crate::field::{electric_field, FieldParams};
use crate::viewport::Viewport;

/// Tracing parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Lines seeded around each charge.
    pub lines_per_charge: u32,
    /// Step budget multiplier; a line takes at most `density × 100` steps.
    pub density: u32,
    /// Distance from the charge to the first point of each line.
    pub start_radius: f64,
    /// Length of every Euler step.
    pub step_length: f64,
    /// Lines stop where `|E|` falls below this.
    pub magnitude_cutoff: f64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            lines_per_charge: 12,
            density: 20,
            start_radius: 0.15,
            step_length: 0.2,
            magnitude_cutoff: 0.1,
        }
    }
}

impl TraceConfig {
    /// Maximum number of steps per line.
    pub fn max_steps(&self) -> usize {
        self.density as usize * 100
    }

    /// Unit start directions, counter-clockwise from `+x`.
    pub fn seed_directions(&self) -> impl Iterator<Item = DVec2> {
        let n = self.lines_per_charge;
        (0..n).map(move |i| DVec2::from_angle(TAU * i as f64 / n as f64))
    }
}

/// Why a line stopped growing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    LeftViewport,
    WeakField,
    IterationCap,
}

/// One traced polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldLine {
    /// Index of the seeding charge in the charge list.
    pub source: usize,
    /// Polarity of the seeding charge.
    pub polarity: Polarity,
    /// Sample points, seed first. Never empty.
    pub points: Vec<DVec2>,
    pub termination: Termination,
}

impl FieldLine {
    /// Points as `[x, y]` pairs, the layout plotting libraries expect.
    pub fn to_xy(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Borrowing view over the parameters a trace needs.
#[derive(Clone, Copy, Debug)]
pub struct Tracer<'a> {
    field: &'a FieldParams,
    config: &'a TraceConfig,
    viewport: &'a Viewport,
}

impl<'a> Tracer<'a> {
    pub fn new(field: &'a FieldParams, config: &'a TraceConfig, viewport: &'a Viewport) -> Self {
        Self {
            field,
            config,
            viewport,
        }
    }

    pub fn from_config(config: &'a SimConfig) -> Self {
        Self::new(&config.field, &config.tracer, &config.viewport)
    }

    /// Trace every line of every charge, charges in insertion order.
    pub fn trace_all(&self, charges: &[Charge]) -> Vec<FieldLine> {
        let mut lines = Vec::with_capacity(charges.len() * self.config.lines_per_charge as usize);
        for source in 0..charges.len() {
            for direction in self.config.seed_directions() {
                lines.extend(self.trace_from(charges, source, direction));
            }
        }

        log::debug!(
            "traced {} lines ({} points) for {} charges",
            lines.len(),
            lines.iter().map(|l| l.points.len()).sum::<usize>(),
            charges.len()
        );
        lines
    }

    /// Trace a single line seeded at `charges[source]`.
    ///
    /// `direction` is the unit start direction before the polarity flip:
    /// negative charges seed along `-direction`. Returns `None` when
    /// `source` is not an index into `charges`.
    pub fn trace_from(
        &self,
        charges: &[Charge],
        source: usize,
        direction: DVec2,
    ) -> Option<FieldLine> {
        let charge = charges.get(source)?;
        let polarity = charge.polarity();

        let start = charge.position + self.config.start_radius * polarity.sign() * direction;
        let mut points = Vec::with_capacity(64);
        points.push(start);

        let mut current = start;
        let mut termination = Termination::IterationCap;
        for _ in 0..self.config.max_steps() {
            let e = electric_field(charges, current, self.field);
            let magnitude = e.length();
            if magnitude < self.config.magnitude_cutoff || magnitude == 0.0 {
                termination = Termination::WeakField;
                break;
            }

            current += (self.config.step_length / magnitude) * e;
            points.push(current);

            if !self.viewport.contains(current) {
                termination = Termination::LeftViewport;
                break;
            }
        }

        Some(FieldLine {
            source,
            polarity,
            points,
            termination,
        })
    }
}
