//! Configuration for growth evaluation.

use crate::error::{GrowthError, Result};
use crate::reference::StandardTable;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration for the `GrowthEvaluator`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Age (months) from which weight-for-height replaces weight-for-length
    pub length_cutoff_months: u32,
    /// Decimal places BMI is rounded to
    pub bmi_decimals: u32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            length_cutoff_months: 24, // Recumbent length below 2 years
            bmi_decimals: 2,
        }
    }
}

impl EvaluatorConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length/height cutoff age
    #[must_use]
    pub const fn with_length_cutoff_months(mut self, months: u32) -> Self {
        self.length_cutoff_months = months;
        self
    }

    /// Set the BMI rounding precision
    #[must_use]
    pub const fn with_bmi_decimals(mut self, decimals: u32) -> Self {
        self.bmi_decimals = decimals;
        self
    }
}

impl fmt::Display for EvaluatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluator Configuration:")?;
        writeln!(f, "  Length/Height Cutoff (months): {}", self.length_cutoff_months)?;
        writeln!(f, "  BMI Decimals: {}", self.bmi_decimals)
    }
}

/// On-disk format of a reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Array of JSON row objects
    Json,
    /// Parquet file in the reference schema layout
    Parquet,
}

impl TableFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("parquet" | "pq") => Ok(Self::Parquet),
            _ => Err(GrowthError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Where to load the reference table from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTableConfig {
    /// Path to the table file
    pub path: PathBuf,
    /// File format
    pub format: TableFormat,
}

impl ReferenceTableConfig {
    /// Configure a table path, inferring the format from its extension
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = TableFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    /// Load the configured table
    pub fn load(&self) -> Result<StandardTable> {
        match self.format {
            TableFormat::Json => StandardTable::from_json_file(&self.path),
            TableFormat::Parquet => StandardTable::from_parquet_file(&self.path),
        }
    }
}
