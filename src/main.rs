mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::StarfishApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load the table before anything is served; a bad data file is fatal.
    let path = data::loader::default_data_path();
    let table = data::loader::load(&path)
        .with_context(|| format!("starfish occurrence data unavailable ({})", path.display()))?;
    log::info!(
        "loaded {} occurrence records ({} species) from {}",
        table.len(),
        table.species_values.len(),
        path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(table);
    eframe::run_native(
        "Starfish Data & Tracking",
        options,
        Box::new(move |_cc| Ok(Box::new(StarfishApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI session failed: {e}"))
}
