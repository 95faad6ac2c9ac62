/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   data/starfish.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV once at startup → OccurrenceTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ OccurrenceTable │  Vec<Occurrence>, species index
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  depth predicate → ChartDescription
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
