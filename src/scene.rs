//! GUI-independent description of one redraw.
//!
//! [`Scene::build`] traces every field line for the current charges and
//! packs them, together with one disc per charge, into plain data a plotting
//! backend can draw without knowing anything about electrostatics. A scene
//! is rebuilt from scratch on every change and carries no state of its own.
//!
//! Drawing conventions:
//!
//! | Element | Appearance |
//! |---------|------------|
//! | Positive charge | red disc, radius 0.1, white `+` |
//! | Negative charge | blue disc, radius 0.1, white `-` |
//! | Field line | thin black curve |
//! | Axes | fixed square viewport, equal aspect, grid |

use std::f64::consts::TAU;

use glam::DVec2;

use crate::charge::Polarity;
use crate::config::SimConfig;
use crate::session::Session;
use crate::tracer::{FieldLine, Tracer};
use crate::viewport::Viewport;

/// Plot title.
pub const TITLE: &str = "Electric field force lines";

/// Disc radius in simulation units.
pub const DISC_RADIUS: f64 = 0.1;

/// Field line stroke width in points.
pub const LINE_WIDTH: f32 = 1.0;

/// An sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn for_polarity(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Positive => Rgb::RED,
            Polarity::Negative => Rgb::BLUE,
        }
    }
}

#[cfg(feature = "egui")]
impl From<Rgb> for egui::Color32 {
    fn from(c: Rgb) -> Self {
        egui::Color32::from_rgb(c.0, c.1, c.2)
    }
}

/// A filled charge marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Disc {
    pub center: DVec2,
    pub radius: f64,
    pub polarity: Polarity,
    pub fill: Rgb,
    pub glyph: &'static str,
    pub glyph_color: Rgb,
}

impl Disc {
    fn for_charge(center: DVec2, polarity: Polarity) -> Self {
        Self {
            center,
            radius: DISC_RADIUS,
            polarity,
            fill: Rgb::for_polarity(polarity),
            glyph: polarity.glyph(),
            glyph_color: Rgb::WHITE,
        }
    }

    /// Outline approximated by `segments` vertices, counter-clockwise.
    pub fn outline(&self, segments: usize) -> Vec<[f64; 2]> {
        (0..segments)
            .map(|i| {
                let p = self.center + self.radius * DVec2::from_angle(TAU * i as f64 / segments as f64);
                [p.x, p.y]
            })
            .collect()
    }
}

/// A field line ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<[f64; 2]>,
    pub color: Rgb,
    pub width: f32,
}

impl From<&FieldLine> for Polyline {
    fn from(line: &FieldLine) -> Self {
        Self {
            points: line.to_xy(),
            color: Rgb::BLACK,
            width: LINE_WIDTH,
        }
    }
}

/// Everything one redraw needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub title: &'static str,
    pub viewport: Viewport,
    pub show_grid: bool,
    pub equal_aspect: bool,
    pub discs: Vec<Disc>,
    pub lines: Vec<Polyline>,
}

impl Scene {
    /// Trace all lines for `session` and lay out the scene.
    ///
    /// Lines are traced only when there is at least one charge.
    pub fn build(session: &Session, config: &SimConfig) -> Self {
        let charges = session.charges();
        let mut scene = Self::empty(config.viewport);
        if charges.is_empty() {
            return scene;
        }

        scene.discs = charges
            .iter()
            .map(|c| Disc::for_charge(c.position, c.polarity()))
            .collect();
        scene.lines = Tracer::from_config(config)
            .trace_all(charges)
            .iter()
            .map(Polyline::from)
            .collect();
        scene
    }

    /// Empty axes.
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            title: TITLE,
            viewport,
            show_grid: true,
            equal_aspect: true,
            discs: Vec::new(),
            lines: Vec::new(),
        }
    }
}
