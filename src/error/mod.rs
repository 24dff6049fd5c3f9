//! Error handling for the growth-standard engine.
//!
//! Missing measurements are not errors: the evaluator degrades those fields to
//! `None`. The variants here cover malformed reference data and infrastructure
//! failures (I/O, Parquet decoding, a repository that cannot answer).

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for the growth-standard engine
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error opening or reading a specific file
    #[error("File error for {}: {context}: {source}", .path.display())]
    File {
        /// The file involved
        path: PathBuf,
        /// What was being attempted
        context: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error decoding JSON reference rows or measurements
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is missing from a reference batch
    #[error("Column not found: {column}")]
    ColumnNotFound {
        /// Name of the missing column
        column: String,
    },

    /// A reference row is malformed (bad key, unordered thresholds, nulls)
    #[error("Invalid reference record: {0}")]
    InvalidRecord(String),

    /// Two reference rows share the same key within a (sex, kind) group
    #[error("Duplicate reference record for {sex} {kind} at key {key}")]
    DuplicateRecord {
        /// Sex tag of the group
        sex: String,
        /// Measurement kind tag of the group
        kind: String,
        /// The repeated measure key
        key: String,
    },

    /// Sex string that maps to neither table tag
    #[error("Unknown sex: {0}")]
    UnknownSex(String),

    /// Measurement kind tag that is not one of the reference table kinds
    #[error("Unknown measurement kind: {0}")]
    UnknownMeasurementKind(String),

    /// Reference table file whose format cannot be determined
    #[error("Unsupported reference table format: {0}")]
    UnsupportedFormat(String),

    /// The reference repository failed to answer a lookup
    #[error("Repository error: {0}")]
    Repository(String),
}

impl GrowthError {
    /// Create an invalid-record error from any displayable message
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Create a repository error from any displayable message
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}

/// Result type for growth-standard operations
pub type Result<T> = std::result::Result<T, GrowthError>;
