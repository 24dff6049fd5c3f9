//! Evaluation result model

use super::category::{GrowthCategory, NutritionStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating one child measurement
///
/// Every field is optional: a missing birthdate leaves the whole result empty,
/// and a missing reference row leaves only its own classification empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Age in whole months at evaluation time
    pub age_months: Option<u32>,
    /// Body-mass index, rounded to two decimals
    pub bmi: Option<f64>,
    /// Weight-for-age category
    #[serde(rename = "statusWeightForAge")]
    pub weight_for_age: Option<GrowthCategory>,
    /// Length/height-for-age category
    #[serde(rename = "statusHeightForAge")]
    pub height_for_age: Option<GrowthCategory>,
    /// Weight-for-length or weight-for-height category
    #[serde(rename = "statusWeightForLengthOrHeight")]
    pub weight_for_length_or_height: Option<GrowthCategory>,
    /// Overall verdict
    pub overall: Option<NutritionStatus>,
}

impl EvaluationResult {
    /// Result with every field absent
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The three per-dimension classifications in WFA, LFA, WFL/WFH order
    #[must_use]
    pub const fn classifications(&self) -> [Option<GrowthCategory>; 3] {
        [
            self.weight_for_age,
            self.height_for_age,
            self.weight_for_length_or_height,
        ]
    }

    /// Whether all three dimensions were classified
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.classifications().iter().all(Option::is_some)
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_dash<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| "-".to_string(), |v| v.to_string())
        }

        writeln!(f, "Growth Evaluation:")?;
        writeln!(f, "  Age (months): {}", or_dash(self.age_months))?;
        writeln!(f, "  BMI: {}", or_dash(self.bmi.map(|b| format!("{b:.2}"))))?;
        writeln!(f, "  Weight-for-Age: {}", or_dash(self.weight_for_age))?;
        writeln!(f, "  Height-for-Age: {}", or_dash(self.height_for_age))?;
        writeln!(
            f,
            "  Weight-for-Length/Height: {}",
            or_dash(self.weight_for_length_or_height)
        )?;
        writeln!(f, "  Overall: {}", or_dash(self.overall))
    }
}
