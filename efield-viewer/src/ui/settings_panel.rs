//! Tracer and field settings panel

use efield::config::{
    MAX_DENSITY, MAX_LINES_PER_CHARGE, MAX_VIEWPORT_BOUND, MIN_START_RADIUS, MIN_STEP_LENGTH,
};
use efield::SimConfig;
use egui::Ui;

pub fn render_settings_panel(ui: &mut Ui, config: &mut SimConfig) -> bool {
    let mut changed = false;

    ui.heading("Field Lines");

    ui.horizontal(|ui| {
        ui.label("Lines per charge:");
        changed |= ui
            .add(
                egui::DragValue::new(&mut config.tracer.lines_per_charge)
                    .range(1..=MAX_LINES_PER_CHARGE),
            )
            .changed();
    });

    ui.horizontal(|ui| {
        ui.label("Density:");
        changed |= ui
            .add(egui::DragValue::new(&mut config.tracer.density).range(1..=MAX_DENSITY))
            .on_hover_text("Each line takes at most density × 100 steps")
            .changed();
    });

    ui.horizontal(|ui| {
        ui.label("Step length:");
        changed |= ui
            .add(
                egui::DragValue::new(&mut config.tracer.step_length)
                    .speed(0.005)
                    .range(MIN_STEP_LENGTH..=1.0),
            )
            .changed();
    });

    ui.horizontal(|ui| {
        ui.label("Start radius:");
        changed |= ui
            .add(
                egui::DragValue::new(&mut config.tracer.start_radius)
                    .speed(0.005)
                    .range(MIN_START_RADIUS..=1.0),
            )
            .changed();
    });

    ui.horizontal(|ui| {
        ui.label("Magnitude cutoff:");
        changed |= ui
            .add(
                egui::DragValue::new(&mut config.tracer.magnitude_cutoff)
                    .speed(0.01)
                    .range(0.0..=100.0),
            )
            .changed();
    });

    ui.separator();
    ui.heading("Field");

    ui.horizontal(|ui| {
        ui.label("Exclusion radius:");
        changed |= ui
            .add(
                egui::DragValue::new(&mut config.field.exclusion_radius)
                    .speed(0.005)
                    .range(0.001..=0.5),
            )
            .on_hover_text("Charges closer than this to a sample point are skipped")
            .changed();
    });

    ui.separator();
    ui.heading("Viewport");

    ui.horizontal(|ui| {
        ui.label("Half-width:");
        changed |= ui
            .add(
                egui::DragValue::new(&mut config.viewport.bound)
                    .speed(0.05)
                    .range(0.5..=MAX_VIEWPORT_BOUND),
            )
            .changed();
    });

    ui.add_space(8.0);

    if ui.button("Reset to defaults").clicked() {
        *config = SimConfig::default();
        changed = true;
    }

    ui.label(
        egui::RichText::new("Settings only; charges are never saved")
            .small()
            .weak(),
    );

    changed
}
