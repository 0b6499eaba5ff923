//! End-to-end scenarios: commands in, scene out.
//!
//! These drive a [`Session`] exactly as the viewer does and check the
//! resulting [`Scene`] with the default constants.

use efield::prelude::*;
use efield::Rgb;

fn session_with(commands: &[Command]) -> Session {
    let mut session = Session::new(Viewport::default());
    for &cmd in commands {
        session.dispatch(cmd);
    }
    session
}

// ============================================================================
// Single Charge
// ============================================================================

#[test]
fn test_single_positive_charge_scene() {
    let session = session_with(&[Command::SelectPositive, Command::Click(DVec2::ZERO)]);
    let config = SimConfig::default();
    let scene = Scene::build(&session, &config);

    assert_eq!(scene.discs.len(), 1);
    assert_eq!(scene.discs[0].fill, Rgb::RED);
    assert_eq!(scene.lines.len(), 12);

    let lines = Tracer::from_config(&config).trace_all(session.charges());
    assert_eq!(lines.len(), 12);
    for line in &lines {
        assert_eq!(line.termination, Termination::LeftViewport);
        // Outward: every step gets farther from the charge
        for pair in line.points.windows(2) {
            assert!(pair[1].length() > pair[0].length());
        }
    }
}

#[test]
fn test_single_negative_charge_scene() {
    let session = session_with(&[Command::SelectNegative, Command::Click(DVec2::new(-0.3, 0.4))]);
    let scene = Scene::build(&session, &SimConfig::default());

    assert_eq!(scene.discs.len(), 1);
    assert_eq!(scene.discs[0].fill, Rgb::BLUE);
    assert_eq!(scene.discs[0].glyph, "-");
    assert_eq!(scene.lines.len(), 12);

    // Lines follow +E from the mirrored seed, so they fall back into the sink
    let sink = DVec2::new(-0.3, 0.4);
    for line in &scene.lines {
        for &[x, y] in &line.points {
            assert!(DVec2::new(x, y).distance(sink) <= 0.15 + 1e-9);
        }
    }
}

// ============================================================================
// Multiple Charges
// ============================================================================

#[test]
fn test_dipole_scene() {
    let session = session_with(&[
        Command::SelectPositive,
        Command::Click(DVec2::new(-0.8, 0.0)),
        Command::SelectNegative,
        Command::Click(DVec2::new(0.8, 0.0)),
    ]);
    let config = SimConfig::default();

    let e = electric_field(session.charges(), DVec2::ZERO, &config.field);
    assert!(e.x > 0.0);
    assert!(e.y.abs() < 1e-9 * e.x);

    let lines = Tracer::from_config(&config).trace_all(session.charges());
    assert_eq!(lines.len(), 24);
    for line in &lines {
        assert!(line.points.len() <= config.tracer.max_steps() + 1);
    }

    // The +x line from the positive charge heads straight for the sink
    let toward_sink = &lines[0];
    assert!(toward_sink.points[1].x > toward_sink.points[0].x);
}

#[test]
fn test_many_charges_stay_bounded() {
    let mut commands = Vec::new();
    for i in 0..6 {
        commands.push(if i % 2 == 0 {
            Command::SelectPositive
        } else {
            Command::SelectNegative
        });
        let angle = i as f64;
        commands.push(Command::Click(DVec2::new(angle.cos(), angle.sin()) * 1.2));
    }
    let session = session_with(&commands);
    let config = SimConfig::default();
    let scene = Scene::build(&session, &config);

    assert_eq!(scene.discs.len(), 6);
    assert_eq!(scene.lines.len(), 72);
    for line in &scene.lines {
        assert!(!line.points.is_empty());
        assert!(line.points.len() <= config.tracer.max_steps() + 1);
        assert!(line.points.iter().all(|[x, y]| x.is_finite() && y.is_finite()));
    }
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_delete_all_returns_to_empty_axes() {
    let mut session = session_with(&[
        Command::SelectPositive,
        Command::Click(DVec2::new(0.5, 0.5)),
        Command::Click(DVec2::new(-0.5, 0.5)),
    ]);
    assert!(session.dispatch(Command::Clear).needs_retrace());

    let scene = Scene::build(&session, &SimConfig::default());
    assert!(scene.discs.is_empty());
    assert!(scene.lines.is_empty());
    assert_eq!(session.mode(), Mode::Neutral);

    // Neutral again: clicks do nothing until a button is pressed
    assert_eq!(session.dispatch(Command::Click(DVec2::ZERO)), Outcome::Ignored);
}
