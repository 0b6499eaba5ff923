//! # efield - 2D electrostatics visualizer core
//!
//! Place point charges in the plane, evaluate their superposed Coulomb field
//! and trace field lines from every charge. This crate holds the numeric core
//! and the interaction state; the `efield-viewer` binary puts a window on top.
//!
//! ## Quick Start
//!
//! ```ignore
//! use efield::prelude::*;
//!
//! let config = SimConfig::default();
//! let mut session = Session::new(config.viewport);
//!
//! session.dispatch(Command::SelectPositive);
//! session.dispatch(Command::Click(DVec2::new(0.0, 0.0)));
//!
//! let scene = Scene::build(&session, &config);
//! assert_eq!(scene.discs.len(), 1);
//! assert_eq!(scene.lines.len(), 12);
//! ```
//!
//! ## Core Concepts
//!
//! ### Field
//!
//! [`electric_field`] sums `k·q/r³ · d` over all charges. Charges within the
//! exclusion radius of the query point are skipped, so the result is always
//! finite.
//!
//! ### Tracing
//!
//! [`Tracer`] walks each line with fixed-length Euler steps along the unit
//! field direction until it leaves the viewport, the field gets too weak, or
//! the step budget runs out. See [`Termination`].
//!
//! ### Session
//!
//! [`Session`] is the charge store plus the placement [`Mode`]. UI actions
//! become [`Command`]s; [`Session::dispatch`] tells the caller whether lines
//! need retracing.
//!
//! ## Default Constants
//!
//! | Constant | Value |
//! |----------|-------|
//! | Coulomb constant `k` | 9e9 |
//! | Charge magnitude | 1e-9 |
//! | Exclusion radius | 0.05 |
//! | Lines per charge | 12 |
//! | Start radius | 0.15 |
//! | Step length | 0.2 |
//! | Step budget | density 20 × 100 |
//! | Magnitude cutoff | 0.1 |
//! | Viewport | [-2, 2]² |

pub mod charge;
pub mod config;
pub mod error;
pub mod field;
pub mod scene;
pub mod session;
pub mod tracer;
pub mod viewport;

pub use charge::{Charge, Polarity, UNIT_CHARGE};
pub use config::SimConfig;
pub use error::ConfigError;
pub use field::{electric_field, field_magnitude, FieldParams};
pub use glam::DVec2;
pub use scene::{Disc, Polyline, Rgb, Scene};
pub use session::{Command, Mode, Outcome, Session};
pub use tracer::{FieldLine, Termination, TraceConfig, Tracer};
pub use viewport::Viewport;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use efield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::charge::{Charge, Polarity};
    pub use crate::config::SimConfig;
    pub use crate::field::{electric_field, FieldParams};
    pub use crate::scene::Scene;
    pub use crate::session::{Command, Mode, Outcome, Session};
    pub use crate::tracer::{FieldLine, Termination, TraceConfig, Tracer};
    pub use crate::viewport::Viewport;
    pub use crate::DVec2;
    #[cfg(feature = "egui")]
    pub use egui;
}
