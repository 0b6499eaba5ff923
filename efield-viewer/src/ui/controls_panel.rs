//! Charge placement buttons and mode status

use efield::{Command, Mode};
use egui::Ui;

/// Draw the three buttons and the status label.
///
/// Returns the command for the button pressed this frame, if any.
pub fn render_controls_panel(ui: &mut Ui, mode: Mode) -> Option<Command> {
    let mut command = None;

    let full_width = egui::vec2(ui.available_width(), 0.0);

    if ui
        .add_sized(
            full_width,
            egui::Button::new("Add positive charge (+)").selected(mode == Mode::AddingPositive),
        )
        .clicked()
    {
        command = Some(Command::SelectPositive);
    }

    if ui
        .add_sized(
            full_width,
            egui::Button::new("Add negative charge (-)").selected(mode == Mode::AddingNegative),
        )
        .clicked()
    {
        command = Some(Command::SelectNegative);
    }

    if ui.add_sized(full_width, egui::Button::new("Delete All")).clicked() {
        command = Some(Command::Clear);
    }

    ui.label(mode.status_text());

    command
}
