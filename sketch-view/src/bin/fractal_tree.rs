//! Fractal tree window.
//!
//! Parses the command line, sets up logging and hands control to
//! [`FractalViewer`] inside the eframe event loop.

use anyhow::Context;
use clap::Parser;
use sketch_view::{cli::FractalArgs, fractal_viewer::FractalViewer};

fn main() -> anyhow::Result<()> {
    sketch_view::init_logging();

    let args = FractalArgs::parse();
    let cfg = args.config();
    let viewer = FractalViewer::new(cfg).context("invalid fractal tree configuration")?;
    log::info!(
        "starting fractal tree: canvas {}px, max depth {}",
        cfg.canvas_size,
        cfg.max_depth
    );

    eframe::run_native(
        "Fractal Tree",
        sketch_view::native_options(cfg.canvas_size, "Fractal Tree"),
        Box::new(move |_cc| Ok(Box::new(viewer))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the fractal tree window: {e}"))
}
