use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Occurrence, OccurrenceTable};

/// Columns the source file must declare in its header row.
pub const REQUIRED_COLUMNS: [&str; 3] = ["depth", "longitude", "latitude"];

// ---------------------------------------------------------------------------
// DataUnavailable – fatal load-time failure
// ---------------------------------------------------------------------------

/// Why the occurrence file could not be turned into an [`OccurrenceTable`].
///
/// Any of these is fatal at startup: the app must not serve a view without
/// its table, and there is no retry.
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("cannot open occurrence file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("occurrence file {path}: unreadable header: {source}")]
    BadHeader {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("occurrence file {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("occurrence file {path}, data row {row}: {source}")]
    BadRow {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("occurrence file {path}, data row {row}: negative depth {depth}")]
    NegativeDepth { path: PathBuf, row: usize, depth: f64 },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fixed location of the occurrence CSV, relative to the package directory.
pub fn default_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("starfish.csv")
}

/// Load the occurrence table from a CSV file. Called exactly once, at startup.
///
/// Expected layout: a header row naming at least `depth`, `longitude` and
/// `latitude` (numeric). A `species` text column is honoured when present.
pub fn load(path: &Path) -> Result<OccurrenceTable, DataUnavailable> {
    let file = std::fs::File::open(path).map_err(|source| DataUnavailable::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| DataUnavailable::BadHeader {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataUnavailable::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<Occurrence>().enumerate() {
        let row = i + 1;
        let record = result.map_err(|source| DataUnavailable::BadRow {
            path: path.to_path_buf(),
            row,
            source,
        })?;
        // Depth is meters below the surface; negative values mean bad data.
        if record.depth < 0.0 {
            return Err(DataUnavailable::NegativeDepth {
                path: path.to_path_buf(),
                row,
                depth: record.depth,
            });
        }
        records.push(record);
    }

    Ok(OccurrenceTable::from_records(records))
}
