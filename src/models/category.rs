//! Growth categories and nutrition status verdicts
//!
//! Each classification dimension carries its own ladder of labels. The
//! verdicts are the values the aggregator reduces three categories to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three growth dimensions a measurement is classified along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    /// Weight-for-age (WFA)
    WeightForAge,
    /// Length/height-for-age (LFA)
    HeightForAge,
    /// Weight-for-length or weight-for-height (WFL/WFH)
    WeightForLengthOrHeight,
}

/// Ordered labels for one dimension, from the lowest tier upwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelLadder {
    /// Below -3 SD
    pub severe: GrowthCategory,
    /// Between -3 SD and -2 SD
    pub moderate: GrowthCategory,
    /// Above +2 SD (up to +3 SD when an obese tier exists)
    pub upper: GrowthCategory,
    /// Above +3 SD; `None` when the dimension has no such tier
    pub obese: Option<GrowthCategory>,
}

impl MeasurementKind {
    /// The label ladder for this dimension
    #[must_use]
    pub const fn ladder(self) -> LabelLadder {
        match self {
            Self::WeightForAge => LabelLadder {
                severe: GrowthCategory::SeverelyUnderweight,
                moderate: GrowthCategory::Underweight,
                upper: GrowthCategory::Overweight,
                obese: Some(GrowthCategory::Obese),
            },
            Self::HeightForAge => LabelLadder {
                severe: GrowthCategory::SeverelyStunted,
                moderate: GrowthCategory::Stunted,
                upper: GrowthCategory::Tall,
                obese: None,
            },
            Self::WeightForLengthOrHeight => LabelLadder {
                severe: GrowthCategory::SeverelyWasted,
                moderate: GrowthCategory::Wasted,
                upper: GrowthCategory::Overweight,
                obese: Some(GrowthCategory::Obese),
            },
        }
    }

    /// Short name of the dimension
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::WeightForAge => "WFA",
            Self::HeightForAge => "LFA",
            Self::WeightForLengthOrHeight => "WFL/WFH",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Category assigned to one measurement along one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthCategory {
    #[serde(rename = "Severely Underweight")]
    SeverelyUnderweight,
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Severely Stunted")]
    SeverelyStunted,
    #[serde(rename = "Stunted")]
    Stunted,
    #[serde(rename = "Severely Wasted")]
    SeverelyWasted,
    #[serde(rename = "Wasted")]
    Wasted,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Tall")]
    Tall,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl GrowthCategory {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SeverelyUnderweight => "Severely Underweight",
            Self::Underweight => "Underweight",
            Self::SeverelyStunted => "Severely Stunted",
            Self::Stunted => "Stunted",
            Self::SeverelyWasted => "Severely Wasted",
            Self::Wasted => "Wasted",
            Self::Normal => "Normal",
            Self::Tall => "Tall",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Below -3 SD on any dimension
    #[must_use]
    pub const fn is_severe(self) -> bool {
        matches!(
            self,
            Self::SeverelyUnderweight | Self::SeverelyStunted | Self::SeverelyWasted
        )
    }

    /// Between -3 SD and -2 SD on any dimension
    #[must_use]
    pub const fn is_moderate(self) -> bool {
        matches!(self, Self::Underweight | Self::Stunted | Self::Wasted)
    }

    /// Above +2 SD on a weight-based dimension
    #[must_use]
    pub const fn is_overweight(self) -> bool {
        matches!(self, Self::Overweight | Self::Obese)
    }

    /// Within the healthy range (tall stature counts as healthy)
    #[must_use]
    pub const fn is_healthy(self) -> bool {
        matches!(self, Self::Normal | Self::Tall)
    }
}

impl fmt::Display for GrowthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Overall nutrition-status verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NutritionStatus {
    #[serde(rename = "Severe Malnutrition")]
    SevereMalnutrition,
    #[serde(rename = "Moderate Malnutrition")]
    ModerateMalnutrition,
    #[serde(rename = "Overweight/Obese")]
    OverweightObese,
    #[serde(rename = "Normal")]
    Normal,
}

impl NutritionStatus {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SevereMalnutrition => "Severe Malnutrition",
            Self::ModerateMalnutrition => "Moderate Malnutrition",
            Self::OverweightObese => "Overweight/Obese",
            Self::Normal => "Normal",
        }
    }
}

impl fmt::Display for NutritionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
