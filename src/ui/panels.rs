use eframe::egui::{self, ScrollArea, Ui};

use crate::data::filter::{ChartKind, SpeciesFilter, DEPTH_MAX, DEPTH_MIN, DEPTH_STEP};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter column: view chooser, species chooser, depth range.
///
/// Only the depth range drives the chart; the view and species selects are
/// declared controls without behavior behind them yet.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- View chooser ----
            ui.strong("Select View:");
            egui::ComboBox::from_id_salt("chart_chooser")
                .selected_text(state.filters.chart_kind.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for kind in [ChartKind::Map, ChartKind::Bar] {
                        ui.selectable_value(&mut state.filters.chart_kind, kind, kind.label());
                    }
                });

            ui.add_space(8.0);

            // ---- Species chooser (no initial selection) ----
            ui.strong("Filter by Species:");
            let species_text = state
                .filters
                .species
                .map(SpeciesFilter::label)
                .unwrap_or("");
            egui::ComboBox::from_id_salt("species_select")
                .selected_text(species_text)
                .show_ui(ui, |ui: &mut Ui| {
                    for choice in [SpeciesFilter::All, SpeciesFilter::Common, SpeciesFilter::Sun] {
                        ui.selectable_value(
                            &mut state.filters.species,
                            Some(choice),
                            choice.label(),
                        );
                    }
                });

            ui.add_space(8.0);

            // ---- Depth range (min/max slider pair, 0–500 m, step 10) ----
            ui.strong("Depth Range (meters):");
            let (mut lo, mut hi) = state.filters.depth_range;
            let lo_changed = ui
                .add(
                    egui::Slider::new(&mut lo, DEPTH_MIN..=DEPTH_MAX)
                        .step_by(DEPTH_STEP)
                        .suffix(" m")
                        .text("min"),
                )
                .changed();
            let hi_changed = ui
                .add(
                    egui::Slider::new(&mut hi, DEPTH_MIN..=DEPTH_MAX)
                        .step_by(DEPTH_STEP)
                        .suffix(" m")
                        .text("max"),
                )
                .changed();
            if lo_changed || hi_changed {
                state.set_depth_range(lo, hi, lo_changed);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: app title plus record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Starfish Data & Tracking");
        ui.separator();
        ui.label(format!(
            "{} occurrences loaded, {} in depth range",
            state.table.len(),
            state.chart.len()
        ));
    });
}
