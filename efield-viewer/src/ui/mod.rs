//! UI panels for the viewer

mod controls_panel;
mod settings_panel;

pub use controls_panel::render_controls_panel;
pub use settings_panel::render_settings_panel;
