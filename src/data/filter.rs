use super::model::OccurrenceTable;

// ---------------------------------------------------------------------------
// Filter state – current values of the UI controls
// ---------------------------------------------------------------------------

/// Which visualization the "Select View" control asks for.
/// Declared in the UI but not yet wired to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Map,
    Bar,
}

impl ChartKind {
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Map => "Species Distribution Map",
            ChartKind::Bar => "Depth Analysis (Histogram)",
        }
    }
}

/// The "Filter by Species" control options.
/// Declared in the UI but not yet wired to filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesFilter {
    All,
    Common,
    Sun,
}

impl SpeciesFilter {
    pub fn label(self) -> &'static str {
        match self {
            SpeciesFilter::All => "Asteroidea (All)",
            SpeciesFilter::Common => "Common Starfish",
            SpeciesFilter::Sun => "Sun Star",
        }
    }
}

/// Depth control bounds in meters.
pub const DEPTH_MIN: f64 = 0.0;
pub const DEPTH_MAX: f64 = 500.0;
/// Slider step in meters.
pub const DEPTH_STEP: f64 = 10.0;

/// Current control values, owned by the UI layer. The render function below
/// receives the depth range as a parameter and never stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Inclusive `(lo, hi)` depth interval in meters.
    pub depth_range: (f64, f64),
    pub chart_kind: ChartKind,
    /// The species select starts with nothing chosen.
    pub species: Option<SpeciesFilter>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            // Default to shallow depth.
            depth_range: (0.0, 50.0),
            chart_kind: ChartKind::default(),
            species: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Chart description – the output handed to the plot widget
// ---------------------------------------------------------------------------

/// One plottable point derived from a surviving record.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Longitude.
    pub x: f64,
    /// Latitude.
    pub y: f64,
    /// Species label, used only for legend grouping and color.
    pub species: Option<String>,
}

/// The derived set of plottable points, in table order. Recomputed from
/// scratch on every control change; never cached across changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartDescription {
    pub points: Vec<ChartPoint>,
}

impl ChartDescription {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// The filter-and-render callback
// ---------------------------------------------------------------------------

/// Select every record with `lo <= depth <= hi` (inclusive on both ends) and
/// map the survivors to `(longitude, latitude)` points in table order.
///
/// Pure: identical inputs always yield an identical description and the table
/// is never mutated. A range that matches nothing (including an inverted or
/// out-of-bounds one) yields an empty description, not an error.
pub fn render(depth_range: (f64, f64), table: &OccurrenceTable) -> ChartDescription {
    let (lo, hi) = depth_range;
    let points = table
        .records
        .iter()
        .filter(|r| lo <= r.depth && r.depth <= hi)
        .map(|r| ChartPoint {
            x: r.longitude,
            y: r.latitude,
            species: r.species.clone(),
        })
        .collect();
    ChartDescription { points }
}

#[cfg(test)]
mod tests {
    use crate::data::model::Occurrence;

    use super::*;

    fn table(rows: &[(f64, f64, f64)]) -> OccurrenceTable {
        OccurrenceTable::from_records(
            rows.iter()
                .map(|&(depth, longitude, latitude)| Occurrence {
                    depth,
                    longitude,
                    latitude,
                    species: None,
                })
                .collect(),
        )
    }

    #[test]
    fn keeps_exactly_the_rows_in_range_in_table_order() {
        let t = table(&[
            (5.0, 1.0, 1.5),
            (50.0, 2.0, 2.5),
            (51.0, 3.0, 3.5),
            (0.0, 4.0, 4.5),
            (499.0, 5.0, 5.5),
        ]);
        let chart = render((0.0, 50.0), &t);
        let xy: Vec<(f64, f64)> = chart.points.iter().map(|p| (p.x, p.y)).collect();
        // Both endpoints inclusive, survivors in original order, no duplicates.
        assert_eq!(xy, vec![(1.0, 1.5), (2.0, 2.5), (4.0, 4.5)]);
    }

    #[test]
    fn render_is_idempotent() {
        let t = table(&[(10.0, 1.0, 2.0), (60.0, 3.0, 4.0), (45.0, 5.0, 6.0)]);
        let first = render((0.0, 50.0), &t);
        let second = render((0.0, 50.0), &t);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_width_range_at_zero_keeps_only_depth_zero() {
        let t = table(&[(0.0, 1.0, 2.0), (0.1, 3.0, 4.0), (0.0, 5.0, 6.0)]);
        let chart = render((0.0, 0.0), &t);
        let xy: Vec<(f64, f64)> = chart.points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(1.0, 2.0), (5.0, 6.0)]);
    }

    #[test]
    fn range_above_max_depth_yields_no_points() {
        let t = table(&[(10.0, 1.0, 2.0), (450.0, 3.0, 4.0)]);
        let chart = render((500.0, 500.0), &t);
        assert!(chart.is_empty());
    }

    #[test]
    fn shallow_range_scenario() {
        let t = table(&[(10.0, 1.0, 2.0), (60.0, 3.0, 4.0)]);
        let chart = render((0.0, 50.0), &t);
        assert_eq!(
            chart.points,
            vec![ChartPoint {
                x: 1.0,
                y: 2.0,
                species: None
            }]
        );
    }

    #[test]
    fn empty_table_yields_no_points_for_any_range() {
        let t = table(&[]);
        assert!(render((0.0, 50.0), &t).is_empty());
        assert!(render((0.0, 500.0), &t).is_empty());
    }

    #[test]
    fn out_of_bounds_and_inverted_ranges_do_not_panic() {
        let t = table(&[(10.0, 1.0, 2.0)]);
        assert!(render((600.0, 700.0), &t).is_empty());
        assert!(render((-50.0, -1.0), &t).is_empty());
        assert!(render((50.0, 0.0), &t).is_empty());
    }

    #[test]
    fn render_does_not_mutate_the_table() {
        let t = table(&[(10.0, 1.0, 2.0), (20.0, 3.0, 4.0)]);
        let before = t.clone();
        let _ = render((0.0, 15.0), &t);
        assert_eq!(t.records, before.records);
    }

    #[test]
    fn points_carry_species_labels() {
        let t = OccurrenceTable::from_records(vec![Occurrence {
            depth: 30.0,
            longitude: -4.0,
            latitude: 50.0,
            species: Some("Sun Star".to_string()),
        }]);
        let chart = render((0.0, 50.0), &t);
        assert_eq!(chart.points[0].species.as_deref(), Some("Sun Star"));
    }
}
