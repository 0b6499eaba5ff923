//! Electric Field Simulator - desktop viewer
//!
//! Buttons pick a placement mode, clicks on the canvas drop charges, and the
//! field lines are retraced after every change.

mod canvas;
mod ui;

use std::time::Instant;

use eframe::egui;
use efield::{Command, Scene, Session, SimConfig};

use crate::canvas::show_canvas;
use crate::ui::{render_controls_panel, render_settings_panel};

/// Seconds a transient status message stays visible.
const STATUS_TIMEOUT_SECS: u64 = 5;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Electric Field Simulator"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Electric Field Simulator",
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
    )
}

struct ViewerApp {
    /// Last valid settings; the only config the tracer ever sees
    applied_config: SimConfig,
    /// Settings as edited in the side panel
    config: SimConfig,
    session: Session,
    /// Last built scene, replaced on every mutation
    scene: Scene,
    status_message: Option<(String, Instant)>,
    current_file: Option<String>,
}

impl ViewerApp {
    fn new() -> Self {
        let config = SimConfig::default();
        let session = Session::new(config.viewport);
        let scene = Scene::build(&session, &config);

        log::info!("viewer started with default settings");

        Self {
            applied_config: config,
            config,
            session,
            scene,
            status_message: None,
            current_file: None,
        }
    }

    fn apply(&mut self, command: Command) {
        let outcome = self.session.dispatch(command);
        log::debug!("{:?} -> {:?}", command, outcome);
        if outcome.needs_retrace() {
            self.retrace();
        }
    }

    fn retrace(&mut self) {
        self.scene = Scene::build(&self.session, &self.applied_config);
    }

    /// Apply the edited settings and redraw, or roll the edits back to the
    /// last valid settings.
    fn settings_changed(&mut self) {
        if let Err(e) = self.applied_config.update(self.config) {
            log::warn!("ignoring invalid settings: {}", e);
            self.show_status(format!("Invalid settings: {}", e));
            self.config = self.applied_config;
            return;
        }
        self.session.set_viewport(self.applied_config.viewport);
        self.retrace();
    }

    fn show_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    // ========================================================================
    // Settings files (using rfd)
    // ========================================================================

    fn save_settings(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("efield-settings.json")
            .save_file()
        else {
            return;
        };

        let path_str = path.display().to_string();
        match self.applied_config.save(&path) {
            Ok(()) => {
                log::info!("saved settings to {}", path_str);
                self.show_status(format!("Saved to {}", path_str));
                self.current_file = Some(path_str);
            }
            Err(e) => {
                log::warn!("saving {} failed: {}", path_str, e);
                self.show_status(format!("Save failed: {}", e));
            }
        }
    }

    fn load_settings(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        let path_str = path.display().to_string();
        match SimConfig::load(&path) {
            Ok(config) => {
                log::info!("loaded settings from {}", path_str);
                self.config = config;
                self.settings_changed();
                self.show_status(format!("Loaded {}", path_str));
                self.current_file = Some(path_str);
            }
            Err(e) => {
                log::warn!("loading {} failed: {}", path_str, e);
                self.show_status(format!("Load failed: {}", e));
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut command = None;

        // Menu bar
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save settings...").clicked() {
                        self.save_settings();
                        ui.close_menu();
                    }
                    if ui.button("Load settings...").clicked() {
                        self.load_settings();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, time)) = &self.status_message {
                    if time.elapsed().as_secs() < STATUS_TIMEOUT_SECS {
                        ui.label(msg);
                    } else {
                        self.status_message = None;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} charges", self.session.charges().len()));
                    ui.separator();
                    if let Some(file) = &self.current_file {
                        ui.label(egui::RichText::new(file).small().weak());
                    } else {
                        ui.label(egui::RichText::new("(default settings)").small().weak());
                    }
                });
            });
        });

        // Buttons and mode label under the canvas
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            command = render_controls_panel(ui, self.session.mode());
            ui.add_space(4.0);
        });

        egui::SidePanel::right("settings")
            .min_width(240.0)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Save settings...").clicked() {
                        self.save_settings();
                    }
                    if ui.button("Load settings...").clicked() {
                        self.load_settings();
                    }
                });
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    if render_settings_panel(ui, &mut self.config) {
                        self.settings_changed();
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.scene.title);
            });
            if let Some(point) = show_canvas(ui, &self.scene) {
                command = command.or(Some(Command::Click(point)));
            }
        });

        if let Some(command) = command {
            self.apply(command);
        }

        // Keep the status timeout ticking without input
        if self.status_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }
    }
}
