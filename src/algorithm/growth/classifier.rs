//! Threshold classification of a single measurement
//!
//! The ladder is evaluated bottom-up and the first matching tier wins:
//!
//! | tier     | condition                         |
//! |----------|-----------------------------------|
//! | severe   | `value < -3 SD`                   |
//! | moderate | `-3 SD <= value < -2 SD`          |
//! | normal   | `-2 SD <= value <= +2 SD`         |
//! | upper    | `+2 SD < value` (`<= +3 SD` if set)|
//! | obese    | `value > +3 SD`, weight kinds only|

use crate::models::{GrowthCategory, MeasurementKind, Thresholds};

/// Classify `value` against one reference row
///
/// `value` must be finite; callers drop missing or non-finite measurements
/// before classifying.
#[must_use]
pub fn classify(value: f64, thresholds: &Thresholds, kind: MeasurementKind) -> GrowthCategory {
    let ladder = kind.ladder();

    if value < thresholds.sd_minus3 {
        ladder.severe
    } else if value < thresholds.sd_minus2 {
        ladder.moderate
    } else if value <= thresholds.sd_plus2 {
        GrowthCategory::Normal
    } else {
        match (thresholds.sd_plus3, ladder.obese) {
            (Some(sd_plus3), Some(obese)) if value > sd_plus3 => obese,
            _ => ladder.upper,
        }
    }
}
