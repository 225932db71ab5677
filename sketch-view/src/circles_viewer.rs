//! Moving circles window built with eframe/egui.
//!
//! Pointer presses on the canvas feed [`MovingCircles::click`] until both
//! circles exist; after that a press grabs the circle under the pointer
//! and dragging moves it.

use crate::paint;
use eframe::App;
use glam::Vec2;
use sketch_core::{
    circles::{CircleId, CircleState, MovingCircles},
    config::CirclesConfig,
    error::ConfigError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CirclesCommand {
    Clear,
    Quit,
}

/// Main application state for the moving circles window.
///
/// ### Fields
/// - `circles` - The state machine and its canvas.
/// - `grabbed` - Circle currently held by the pointer, if any.
/// - `quit_requested` - Set by [`CirclesCommand::Quit`].
pub struct CirclesViewer {
    circles: MovingCircles,
    grabbed: Option<CircleId>,
    quit_requested: bool,
}

impl CirclesViewer {
    pub fn new(cfg: CirclesConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            circles: MovingCircles::new(cfg)?,
            grabbed: None,
            quit_requested: false,
        })
    }

    pub fn circles(&self) -> &MovingCircles {
        &self.circles
    }

    pub fn apply(&mut self, cmd: CirclesCommand) {
        log::debug!("command {:?}", cmd);
        match cmd {
            CirclesCommand::Clear => {
                self.grabbed = None;
                self.circles.clear();
            }
            CirclesCommand::Quit => {
                log::info!("quit requested");
                self.quit_requested = true;
            }
        }
    }

    /// Primary button went down at canvas position `pos`.
    pub fn pointer_down(&mut self, pos: Vec2) {
        if matches!(self.circles.state(), CircleState::DraggingCircles { .. }) {
            self.grabbed = self.circles.hit_test(pos);
        } else {
            self.circles.click(pos);
        }
    }

    /// Pointer moved to `pos` while the primary button is held.
    pub fn pointer_dragged(&mut self, pos: Vec2) {
        if let Some(id) = self.grabbed
            && let Some(conn) = self.circles.drag(id, pos)
        {
            log::trace!("{:?} dragged, distance {}", id, conn.label());
        }
    }

    pub fn pointer_up(&mut self) {
        self.grabbed = None;
    }

    fn hint(&self) -> &'static str {
        match self.circles.state() {
            CircleState::WaitingForFirstClick => "click to place the first circle",
            CircleState::WaitingForSecondClick { .. } => "click to place the second circle",
            CircleState::DraggingCircles { .. } => "drag either circle",
        }
    }

    fn ui_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("control_frame").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    self.apply(CirclesCommand::Clear);
                }
                if ui.button("Quit").clicked() {
                    self.apply(CirclesCommand::Quit);
                }

                ui.separator();
                ui.label(self.hint());
            });
        });
    }

    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, rect) = paint::show_canvas(ui, self.circles.canvas());

            let pressed = ui.input(|i| i.pointer.primary_pressed());
            let released = ui.input(|i| i.pointer.primary_released());

            if pressed
                && response.hovered()
                && let Some(p) = response.interact_pointer_pos().or(response.hover_pos())
            {
                self.pointer_down(paint::screen_to_canvas(p, rect));
            }

            if response.dragged()
                && let Some(p) = response.interact_pointer_pos()
            {
                self.pointer_dragged(paint::screen_to_canvas(p, rect));
            }

            if released {
                self.pointer_up();
            }
        });
    }
}

impl App for CirclesViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_controls(ctx);
        self.ui_central_panel(ctx);

        if self.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
