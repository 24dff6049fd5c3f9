//! Domain models for growth evaluation
//!
//! This module contains the inputs, reference rows and outputs the
//! classification engine works with.

pub mod category;
pub mod child;
pub mod evaluation;
pub mod standard;

// Re-export commonly used types
pub use category::{GrowthCategory, LabelLadder, MeasurementKind, NutritionStatus};
pub use child::{ChildMeasurement, Sex};
pub use evaluation::EvaluationResult;
pub use standard::{
    GrowthStandardRecord, HalfCm, MeasureKey, ReferenceKind, StandardRow, Thresholds,
};
