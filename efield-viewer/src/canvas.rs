//! Plotting canvas.
//!
//! Draws a [`Scene`] with `egui_plot` and reports canvas clicks in
//! simulation coordinates. The view is pinned to the scene's viewport:
//! panning, zooming and box-zoom are disabled so a click always maps to the
//! same point of the plane.

use efield::scene::Scene;
use efield::DVec2;
use egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, PlotPoints, Polygon, Text};

/// Vertices used to approximate a charge disc.
const DISC_SEGMENTS: usize = 32;

/// Show `scene` and return the clicked point, if the canvas was clicked
/// this frame.
pub fn show_canvas(ui: &mut egui::Ui, scene: &Scene) -> Option<DVec2> {
    let min = scene.viewport.min();
    let max = scene.viewport.max();

    let mut plot = Plot::new("field_canvas")
        .show_grid(scene.show_grid)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);
    if scene.equal_aspect {
        plot = plot.data_aspect(1.0);
    }

    let response = plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max([min.x, min.y], [max.x, max.y]));

        for line in &scene.lines {
            plot_ui.line(
                Line::new(PlotPoints::from(line.points.clone()))
                    .color(Color32::from(line.color))
                    .width(line.width),
            );
        }

        // Discs after lines so charges sit on top
        for disc in &scene.discs {
            let fill = Color32::from(disc.fill);
            plot_ui.polygon(
                Polygon::new(PlotPoints::from(disc.outline(DISC_SEGMENTS)))
                    .fill_color(fill)
                    .stroke(Stroke::new(1.0, fill)),
            );
            plot_ui.text(
                Text::new(
                    PlotPoint::new(disc.center.x, disc.center.y),
                    RichText::new(disc.glyph)
                        .color(Color32::from(disc.glyph_color))
                        .strong(),
                )
                .anchor(Align2::CENTER_CENTER),
            );
        }

        plot_ui.pointer_coordinate()
    });

    if response.response.clicked() {
        response.inner.map(|p| DVec2::new(p.x, p.y))
    } else {
        None
    }
}
