//! pvt-results: tabular and JSON export of evaluated fluid properties.

pub mod csv;
pub mod snapshot;

pub use csv::{
    format_value, property_header, property_row, write_pairs, write_property_table, write_row,
    write_string_row,
};
pub use snapshot::{load_snapshot, save_snapshot};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot not found: {path}")]
    SnapshotNotFound { path: String },
}
