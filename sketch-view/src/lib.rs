//! eframe/egui front ends for the sketches in `sketch-core`.
//!
//! - [`fractal_viewer`] — window for the fractal tree.
//! - [`circles_viewer`] — window for the moving circles.
//! - [`paint`] — shared canvas painting and coordinate mapping.
//! - [`cli`] — command-line arguments of both binaries.

pub mod circles_viewer;
pub mod cli;
pub mod fractal_viewer;
pub mod paint;

/// Initialises `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

/// Window options sized to fit a square canvas plus the button row.
pub fn native_options(canvas_size: f32, title: &str) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([canvas_size + 16.0, canvas_size + 56.0])
            .with_resizable(false),
        ..Default::default()
    }
}
