//! Growth-standard classification
//!
//! Given a child's sex, birthdate, weight and height, the engine computes age
//! and BMI, looks up reference thresholds, classifies weight-for-age,
//! length/height-for-age and weight-for-length/height, and reduces the three
//! categories to one nutrition-status verdict.

pub mod age;
pub mod bmi;
pub mod classifier;
pub mod evaluator;
pub mod status;

// Re-export the engine entry points
pub use age::{age_in_months, months_between};
pub use bmi::{body_mass_index, body_mass_index_with_precision};
pub use classifier::classify;
pub use evaluator::GrowthEvaluator;
pub use status::overall_status;
