//! Point charges and their polarity.
//!
//! A [`Charge`] is a signed magnitude pinned to a position in the plane.
//! Charges are immutable once placed; the only ways a collection of them
//! changes are append and full clear (see [`crate::session::Session`]).

use glam::DVec2;

/// Magnitude of every user-placed charge, in coulombs (1 nC).
pub const UNIT_CHARGE: f64 = 1e-9;

/// Sign of a charge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Field lines start here.
    Positive,
    /// Field lines end here.
    Negative,
}

impl Polarity {
    /// `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }

    /// Glyph drawn on top of the charge disc.
    pub fn glyph(self) -> &'static str {
        match self {
            Polarity::Positive => "+",
            Polarity::Negative => "-",
        }
    }
}

/// A static point charge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charge {
    /// Position in simulation space.
    pub position: DVec2,
    /// Signed magnitude in coulombs.
    pub q: f64,
}

impl Charge {
    pub fn new(position: DVec2, q: f64) -> Self {
        Self { position, q }
    }

    /// A unit charge of the given polarity.
    pub fn unit(position: DVec2, polarity: Polarity) -> Self {
        Self::new(position, polarity.sign() * UNIT_CHARGE)
    }

    /// Zero counts as positive.
    pub fn polarity(&self) -> Polarity {
        if self.q < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Positive
        }
    }
}
