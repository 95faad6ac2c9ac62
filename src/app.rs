use eframe::egui;

use crate::state::AppState;
use crate::ui::{chart, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StarfishApp {
    pub state: AppState,
}

impl StarfishApp {
    /// The state already holds a successfully loaded table; construction
    /// happens only after `load` succeeded.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for StarfishApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: occurrence scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            chart::scatter_chart(ui, &self.state);
        });
    }
}
