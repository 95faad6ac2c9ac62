use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Occurrence – one row of the source table
// ---------------------------------------------------------------------------

/// A single starfish occurrence observation (one CSV row).
///
/// `depth` is meters below the surface and is never negative; the loader
/// rejects rows that violate this.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Occurrence {
    pub depth: f64,
    pub longitude: f64,
    pub latitude: f64,
    /// Species label. The source schema does not guarantee this column.
    #[serde(default)]
    pub species: Option<String>,
}

// ---------------------------------------------------------------------------
// OccurrenceTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full in-memory table, loaded once at startup and never mutated.
/// Downstream code only derives filtered views from it.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceTable {
    /// All records, in source-file order.
    pub records: Vec<Occurrence>,
    /// Sorted set of unique species labels present in the table.
    pub species_values: BTreeSet<String>,
}

impl OccurrenceTable {
    /// Build the table and its species index from loaded records.
    pub fn from_records(records: Vec<Occurrence>) -> Self {
        let species_values = records
            .iter()
            .filter_map(|r| r.species.clone())
            .collect();
        OccurrenceTable {
            records,
            species_values,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(depth: f64, species: Option<&str>) -> Occurrence {
        Occurrence {
            depth,
            longitude: -4.5,
            latitude: 50.3,
            species: species.map(str::to_string),
        }
    }

    #[test]
    fn species_index_is_deduplicated_and_sorted() {
        let table = OccurrenceTable::from_records(vec![
            row(10.0, Some("Sun Star")),
            row(20.0, Some("Common Starfish")),
            row(30.0, Some("Sun Star")),
            row(40.0, None),
        ]);
        let species: Vec<&str> = table.species_values.iter().map(String::as_str).collect();
        assert_eq!(species, vec!["Common Starfish", "Sun Star"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn empty_table_has_no_species() {
        let table = OccurrenceTable::from_records(Vec::new());
        assert!(table.is_empty());
        assert!(table.species_values.is_empty());
    }
}
