//! Overall nutrition-status aggregation
//!
//! Rules are applied in strict priority order over the classifications that
//! are present:
//!
//! 1. any severe category -> Severe Malnutrition
//! 2. any of Underweight / Stunted / Wasted -> Moderate Malnutrition
//! 3. any of Overweight / Obese -> Overweight/Obese
//! 4. all of Normal / Tall -> Normal
//!
//! With nothing classified there is no verdict. Rule 4 is never applied to an
//! empty set.

use crate::models::{GrowthCategory, NutritionStatus};

fn present(
    classifications: &[Option<GrowthCategory>; 3],
) -> impl Iterator<Item = GrowthCategory> + '_ {
    classifications.iter().flatten().copied()
}

/// Reduce the WFA, LFA and WFL/WFH categories to one verdict
#[must_use]
pub fn overall_status(classifications: [Option<GrowthCategory>; 3]) -> Option<NutritionStatus> {
    if present(&classifications).next().is_none() {
        return None;
    }

    if present(&classifications).any(GrowthCategory::is_severe) {
        Some(NutritionStatus::SevereMalnutrition)
    } else if present(&classifications).any(GrowthCategory::is_moderate) {
        Some(NutritionStatus::ModerateMalnutrition)
    } else if present(&classifications).any(GrowthCategory::is_overweight) {
        Some(NutritionStatus::OverweightObese)
    } else if present(&classifications).all(GrowthCategory::is_healthy) {
        Some(NutritionStatus::Normal)
    } else {
        None
    }
}
