use carpool_core::CarpoolError;

/// Errors raised while reading surveys, resolving postcodes or writing results.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required survey column is absent; ingestion cannot proceed.
    #[error("column '{column}' not found; available columns: {}", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("invalid postcode table: {0}")]
    InvalidPostcodeTable(String),

    #[error(transparent)]
    Core(#[from] CarpoolError),
}

pub type Result<T> = std::result::Result<T, IoError>;
