use crate::color::SpeciesColors;
use crate::data::filter::{self, ChartDescription, FilterState};
use crate::data::model::OccurrenceTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the UI needs, independent of rendering.
///
/// Constructed only after the table has loaded successfully, so a view can
/// never be served without data. The table is read-only from here on; every
/// control change derives a fresh chart from it.
pub struct AppState {
    /// The loaded table. Never mutated after construction.
    pub table: OccurrenceTable,

    /// Current control values.
    pub filters: FilterState,

    /// Chart derived from the current depth range.
    pub chart: ChartDescription,

    /// Stable colour per species label, for the plot legend.
    pub species_colors: SpeciesColors,
}

impl AppState {
    /// Wrap a freshly loaded table and compute the initial chart from the
    /// default filter values.
    pub fn new(table: OccurrenceTable) -> Self {
        let filters = FilterState::default();
        let chart = filter::render(filters.depth_range, &table);
        let species_colors = SpeciesColors::new(&table.species_values);
        Self {
            table,
            filters,
            chart,
            species_colors,
        }
    }

    /// Recompute the chart after a control change.
    pub fn refilter(&mut self) {
        self.chart = filter::render(self.filters.depth_range, &self.table);
    }

    /// Update the depth range, keeping `lo <= hi`, and recompute the chart.
    /// `moved_lo` tells which handle the user dragged so the other one yields.
    pub fn set_depth_range(&mut self, lo: f64, hi: f64, moved_lo: bool) {
        let (lo, hi) = if lo <= hi {
            (lo, hi)
        } else if moved_lo {
            (lo, lo)
        } else {
            (hi, hi)
        };
        self.filters.depth_range = (lo, hi);
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use crate::data::model::Occurrence;

    use super::*;

    fn sample_table() -> OccurrenceTable {
        OccurrenceTable::from_records(vec![
            Occurrence {
                depth: 10.0,
                longitude: 1.0,
                latitude: 2.0,
                species: Some("Common Starfish".to_string()),
            },
            Occurrence {
                depth: 60.0,
                longitude: 3.0,
                latitude: 4.0,
                species: Some("Sun Star".to_string()),
            },
        ])
    }

    #[test]
    fn initial_chart_uses_default_shallow_range() {
        let state = AppState::new(sample_table());
        assert_eq!(state.filters.depth_range, (0.0, 50.0));
        assert_eq!(state.chart.len(), 1);
        assert_eq!(state.chart.points[0].x, 1.0);
    }

    #[test]
    fn widening_the_range_picks_up_deeper_records() {
        let mut state = AppState::new(sample_table());
        state.set_depth_range(0.0, 100.0, false);
        assert_eq!(state.chart.len(), 2);
    }

    #[test]
    fn crossed_handles_collapse_to_the_dragged_one() {
        let mut state = AppState::new(sample_table());
        // Dragging the lower handle past the upper one.
        state.set_depth_range(80.0, 50.0, true);
        assert_eq!(state.filters.depth_range, (80.0, 80.0));
        // Dragging the upper handle below the lower one.
        state.set_depth_range(80.0, 20.0, false);
        assert_eq!(state.filters.depth_range, (20.0, 20.0));
    }
}
