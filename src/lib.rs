//! A Rust library for classifying child growth against reference standard
//! tables, producing per-dimension categories and an overall nutrition status.

pub mod algorithm;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
pub mod reference;

// Re-export the most common types for easier use
// Core types
pub use config::{EvaluatorConfig, ReferenceTableConfig, TableFormat};
pub use error::{GrowthError, Result};

// Engine
pub use algorithm::growth::{
    GrowthEvaluator, age_in_months, body_mass_index, classify, overall_status,
};

// Seams
pub use common::traits::{Clock, FixedClock, GrowthStandardRepository, SystemClock};

// Models
pub use models::{
    ChildMeasurement, EvaluationResult, GrowthCategory, GrowthStandardRecord, HalfCm, MeasureKey,
    MeasurementKind, NutritionStatus, ReferenceKind, Sex, StandardRow, Thresholds,
};

// Reference storage
pub use reference::StandardTable;
