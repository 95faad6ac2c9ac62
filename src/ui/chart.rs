use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Occurrence scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart description as a longitude/latitude scatter.
///
/// Points are grouped by species label purely for legend and colour; an empty
/// description draws an empty plot. Axes, zoom and interaction belong to the
/// plot widget.
pub fn scatter_chart(ui: &mut Ui, state: &AppState) {
    // Group points per species so each gets one legend entry.
    let mut series: BTreeMap<Option<&str>, Vec<[f64; 2]>> = BTreeMap::new();
    for point in &state.chart.points {
        series
            .entry(point.species.as_deref())
            .or_default()
            .push([point.x, point.y]);
    }

    Plot::new("occurrence_map")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (species, coords) in series {
                let points = Points::new(PlotPoints::from(coords))
                    .radius(3.0)
                    .color(state.species_colors.color_for(species))
                    .name(species.unwrap_or("Asteroidea"));
                plot_ui.points(points);
            }
        });
}
