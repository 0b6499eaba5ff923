//! Charge store and placement mode.
//!
//! A [`Session`] owns the ordered charge list and the current [`Mode`]. All
//! changes go through [`Session::dispatch`], which consumes one [`Command`]
//! and reports whether the charge list changed, i.e. whether the field lines
//! have to be retraced.
//!
//! ```text
//!              SelectPositive              SelectNegative
//!   Neutral ──────────────────► Adding+ ◄──────────────────► Adding-
//!      ▲                          │  ▲                          │  ▲
//!      │                   Click  └──┘                   Click  └──┘
//!      └───────────── Clear (from any state) ──────────────────┘
//! ```
//!
//! Clicks in `Neutral` and clicks outside the viewport are ignored.

use glam::DVec2;

use crate::charge::{Charge, Polarity};
use crate::viewport::Viewport;

/// Current charge-placement action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Neutral,
    AddingPositive,
    AddingNegative,
}

impl Mode {
    /// Polarity a canvas click places in this mode, if any.
    pub fn polarity(self) -> Option<Polarity> {
        match self {
            Mode::Neutral => None,
            Mode::AddingPositive => Some(Polarity::Positive),
            Mode::AddingNegative => Some(Polarity::Negative),
        }
    }

    /// Status line shown next to the controls.
    pub fn status_text(self) -> &'static str {
        match self {
            Mode::Neutral => "Ready - Click to add a charge",
            Mode::AddingPositive => "Mode: add charge + - Click on the graph",
            Mode::AddingNegative => "Mode: add charge - - Click on the graph",
        }
    }
}

/// A discrete user action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// "Add positive charge (+)" button.
    SelectPositive,
    /// "Add negative charge (-)" button.
    SelectNegative,
    /// Canvas click at a point in simulation space.
    Click(DVec2),
    /// "Delete All" button.
    Clear,
}

/// Result of dispatching a [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored,
    /// Only the mode changed; existing lines stay valid.
    ModeChanged,
    /// The charge list changed; lines must be retraced.
    ChargesChanged,
}

impl Outcome {
    pub fn needs_retrace(self) -> bool {
        matches!(self, Outcome::ChargesChanged)
    }
}

/// Charge store plus placement mode.
#[derive(Clone, Debug, Default)]
pub struct Session {
    charges: Vec<Charge>,
    mode: Mode,
    viewport: Viewport,
}

impl Session {
    /// An empty session accepting clicks inside `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            charges: Vec::new(),
            mode: Mode::Neutral,
            viewport,
        }
    }

    /// Charges in insertion order.
    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Change the clickable region. Existing charges are kept.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn status_text(&self) -> &'static str {
        self.mode.status_text()
    }

    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::SelectPositive => self.set_mode(Mode::AddingPositive),
            Command::SelectNegative => self.set_mode(Mode::AddingNegative),
            Command::Click(point) => self.click(point),
            Command::Clear => self.clear(),
        }
    }

    fn set_mode(&mut self, mode: Mode) -> Outcome {
        if self.mode == mode {
            return Outcome::Ignored;
        }
        log::debug!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        Outcome::ModeChanged
    }

    fn click(&mut self, point: DVec2) -> Outcome {
        let Some(polarity) = self.mode.polarity() else {
            return Outcome::Ignored;
        };
        if !self.viewport.contains(point) {
            return Outcome::Ignored;
        }

        self.charges.push(Charge::unit(point, polarity));
        log::info!(
            "added {:?} charge at ({:.3}, {:.3}), {} total",
            polarity,
            point.x,
            point.y,
            self.charges.len()
        );
        Outcome::ChargesChanged
    }

    fn clear(&mut self) -> Outcome {
        let had_charges = !self.charges.is_empty();
        let had_mode = self.mode != Mode::Neutral;
        self.charges.clear();
        self.mode = Mode::Neutral;

        if had_charges {
            log::info!("cleared all charges");
            Outcome::ChargesChanged
        } else if had_mode {
            Outcome::ModeChanged
        } else {
            Outcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Mode Tests ==========

    #[test]
    fn test_starts_neutral_and_empty() {
        let s = Session::default();
        assert_eq!(s.mode(), Mode::Neutral);
        assert!(s.charges().is_empty());
        assert_eq!(s.status_text(), "Ready - Click to add a charge");
    }

    #[test]
    fn test_select_buttons_set_mode() {
        let mut s = Session::default();
        assert_eq!(s.dispatch(Command::SelectPositive), Outcome::ModeChanged);
        assert_eq!(s.mode(), Mode::AddingPositive);
        assert_eq!(s.status_text(), "Mode: add charge + - Click on the graph");

        assert_eq!(s.dispatch(Command::SelectNegative), Outcome::ModeChanged);
        assert_eq!(s.mode(), Mode::AddingNegative);
        assert_eq!(s.status_text(), "Mode: add charge - - Click on the graph");

        assert_eq!(s.dispatch(Command::SelectNegative), Outcome::Ignored);
    }

    // ========== Click Tests ==========

    #[test]
    fn test_click_in_neutral_is_noop() {
        let mut s = Session::default();
        assert_eq!(s.dispatch(Command::Click(DVec2::new(0.5, 0.5))), Outcome::Ignored);
        assert!(s.charges().is_empty());
    }

    #[test]
    fn test_mode_persists_across_clicks() {
        let mut s = Session::default();
        s.dispatch(Command::SelectPositive);
        for i in 0..3 {
            let p = DVec2::new(i as f64 * 0.5, 0.0);
            assert_eq!(s.dispatch(Command::Click(p)), Outcome::ChargesChanged);
            assert_eq!(s.mode(), Mode::AddingPositive);
        }
        assert_eq!(s.charges().len(), 3);
        assert!(s.charges().iter().all(|c| c.q == 1e-9));
    }

    #[test]
    fn test_click_places_signed_charge_in_order() {
        let mut s = Session::default();
        s.dispatch(Command::SelectPositive);
        s.dispatch(Command::Click(DVec2::new(-1.0, 0.0)));
        s.dispatch(Command::SelectNegative);
        s.dispatch(Command::Click(DVec2::new(1.0, 0.0)));

        let charges = s.charges();
        assert_eq!(charges[0].position, DVec2::new(-1.0, 0.0));
        assert_eq!(charges[0].polarity(), Polarity::Positive);
        assert_eq!(charges[1].position, DVec2::new(1.0, 0.0));
        assert_eq!(charges[1].q, -1e-9);
    }

    #[test]
    fn test_click_outside_viewport_ignored() {
        let mut s = Session::default();
        s.dispatch(Command::SelectNegative);
        assert_eq!(s.dispatch(Command::Click(DVec2::new(2.5, 0.0))), Outcome::Ignored);
        assert_eq!(s.dispatch(Command::Click(DVec2::new(0.0, -3.0))), Outcome::Ignored);
        assert!(s.charges().is_empty());
    }

    #[test]
    fn test_duplicate_positions_allowed() {
        let mut s = Session::default();
        s.dispatch(Command::SelectPositive);
        s.dispatch(Command::Click(DVec2::ZERO));
        s.dispatch(Command::Click(DVec2::ZERO));
        assert_eq!(s.charges().len(), 2);
    }

    // ========== Clear Tests ==========

    #[test]
    fn test_clear_resets_from_any_state() {
        for select in [None, Some(Command::SelectPositive), Some(Command::SelectNegative)] {
            for clicks in 0..3 {
                let mut s = Session::default();
                if let Some(cmd) = select {
                    s.dispatch(cmd);
                }
                for _ in 0..clicks {
                    s.dispatch(Command::Click(DVec2::new(0.1, 0.1)));
                }

                s.dispatch(Command::Clear);
                assert!(s.charges().is_empty());
                assert_eq!(s.mode(), Mode::Neutral);
            }
        }
    }

    #[test]
    fn test_clear_outcome() {
        let mut s = Session::default();
        assert_eq!(s.dispatch(Command::Clear), Outcome::Ignored);

        s.dispatch(Command::SelectPositive);
        assert_eq!(s.dispatch(Command::Clear), Outcome::ModeChanged);

        s.dispatch(Command::SelectPositive);
        s.dispatch(Command::Click(DVec2::ZERO));
        assert!(s.dispatch(Command::Clear).needs_retrace());
    }

    #[test]
    fn test_set_viewport_changes_click_region() {
        let mut s = Session::new(Viewport::new(1.0));
        s.dispatch(Command::SelectPositive);
        assert_eq!(s.dispatch(Command::Click(DVec2::new(1.5, 0.0))), Outcome::Ignored);

        s.set_viewport(Viewport::new(3.0));
        assert_eq!(s.dispatch(Command::Click(DVec2::new(1.5, 0.0))), Outcome::ChargesChanged);
    }
}
