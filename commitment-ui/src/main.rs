// Desktop entry point for the commitment wizard
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use commitment::loader::load_review_input;
use commitment::{Config, ReviewInput};
use commitment_ui::CommitmentApp;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(None)?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.application.log_level()),
    )
    .init();

    let input = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_review_input(&path)?,
        None => ReviewInput::demo(),
    };
    log::info!("Reviewing '{}' commitment", input.type_label);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([600.0, 600.0])
            .with_title(&config.application.name),
        ..Default::default()
    };

    let title = config.application.name.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            if config.ui.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }
            Ok(Box::new(CommitmentApp::new(cc, config, input)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start eframe: {}", e))
}
