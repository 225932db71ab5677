//! Fractal tree window built with eframe/egui.
//!
//! [`FractalViewer`] owns a [`FractalTree`] and exposes it through a
//! fixed-size canvas and three buttons: Advance, Reset and Quit.

use crate::paint;
use eframe::App;
use sketch_core::{
    config::FractalConfig,
    error::ConfigError,
    fractal::FractalTree,
};

/// Actions offered by the control buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FractalCommand {
    Advance,
    Reset,
    Quit,
}

/// Main application state for the fractal tree window.
///
/// ### Fields
/// - `tree` - Depth counter and the canvas the tree is drawn on.
/// - `notice` - Message shown in the status bar after a refused command.
/// - `quit_requested` - Set by [`FractalCommand::Quit`]; the next frame
///   closes the viewport.
pub struct FractalViewer {
    tree: FractalTree,
    notice: Option<String>,
    quit_requested: bool,
}

impl FractalViewer {
    pub fn new(cfg: FractalConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            tree: FractalTree::new(cfg)?,
            notice: None,
            quit_requested: false,
        })
    }

    pub fn tree(&self) -> &FractalTree {
        &self.tree
    }

    /// Runs one button command against the sketch.
    pub fn apply(&mut self, cmd: FractalCommand) {
        log::debug!("command {:?}", cmd);
        self.notice = None;

        match cmd {
            FractalCommand::Advance => {
                if let Err(err) = self.tree.advance() {
                    log::warn!("advance refused: {}", err);
                    self.notice = Some(err.to_string());
                }
            }
            FractalCommand::Reset => self.tree.reset(),
            FractalCommand::Quit => {
                log::info!("quit requested");
                self.quit_requested = true;
            }
        }
    }

    /// Builds the button row under the canvas.
    fn ui_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("control_frame").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut pressed = None;
                if ui.button("Advance").clicked() {
                    pressed = Some(FractalCommand::Advance);
                }
                if ui.button("Reset").clicked() {
                    pressed = Some(FractalCommand::Reset);
                }
                if ui.button("Quit").clicked() {
                    pressed = Some(FractalCommand::Quit);
                }
                if let Some(cmd) = pressed {
                    self.apply(cmd);
                }

                ui.separator();
                ui.label(format!(
                    "depth = {} / {}",
                    self.tree.depth(),
                    self.tree.config().max_depth
                ));
                ui.label(format!("segments = {}", self.tree.segment_count()));
                if let Some(notice) = &self.notice {
                    ui.colored_label(egui::Color32::YELLOW, notice);
                }
            });
        });
    }

    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            paint::show_canvas(ui, self.tree.canvas());
        });
    }
}

impl App for FractalViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_controls(ctx);
        self.ui_central_panel(ctx);

        if self.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
