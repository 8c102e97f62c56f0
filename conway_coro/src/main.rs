// main.rs - Game of Life host: egui window driving the simulation engine

use anyhow::{Context, Result};
use eframe::egui;
use tracing::info;

mod config;
mod control;
mod ui;

use config::{AppConfig, WINDOW_H, WINDOW_W};
use control::Controller;
use ui::ConwayApp;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let config = AppConfig::from_env();
    info!(?config, "starting Game of Life");

    let runtime = if config.concurrent_rows {
        Some(tokio::runtime::Runtime::new().context("building tokio runtime")?)
    } else {
        None
    };
    let controller = Controller::new(&config, runtime)?;
    let cell_size = config.cell_size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(ConwayApp::new(controller, cell_size))),
    )
    .map_err(|err| anyhow::anyhow!("event loop failed: {err}"))
}
