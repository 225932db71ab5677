//! Moving circles window.

use anyhow::Context;
use clap::Parser;
use sketch_view::{circles_viewer::CirclesViewer, cli::CirclesArgs};

fn main() -> anyhow::Result<()> {
    sketch_view::init_logging();

    let args = CirclesArgs::parse();
    let cfg = args.config();
    let viewer = CirclesViewer::new(cfg).context("invalid moving circles configuration")?;
    log::info!(
        "starting moving circles: canvas {}px, radius {}",
        cfg.canvas_size,
        cfg.radius
    );

    eframe::run_native(
        "Moving Circles",
        sketch_view::native_options(cfg.canvas_size, "Moving Circles"),
        Box::new(move |_cc| Ok(Box::new(viewer))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the moving circles window: {e}"))
}
