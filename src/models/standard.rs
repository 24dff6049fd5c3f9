//! Growth reference standard rows
//!
//! A reference table holds one row per (sex, measurement kind, measure key)
//! with the SD cutoffs used to bucket a measurement. Age-based kinds are keyed
//! by whole months; length/height-based kinds are keyed on a half-centimetre
//! grid.

use super::child::Sex;
use crate::error::{GrowthError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when checking that a stored key lies on its grid
const KEY_GRID_TOLERANCE: f64 = 1e-6;

/// The kinds of reference table rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReferenceKind {
    /// Weight-for-age, keyed by age in months
    WeightForAge,
    /// Length/height-for-age, keyed by age in months
    HeightForAge,
    /// Weight-for-length (recumbent, under 24 months), keyed by length
    WeightForLength,
    /// Weight-for-height (standing, 24 months and over), keyed by height
    WeightForHeight,
}

impl ReferenceKind {
    /// Every table kind
    pub const ALL: [Self; 4] = [
        Self::WeightForAge,
        Self::HeightForAge,
        Self::WeightForLength,
        Self::WeightForHeight,
    ];

    /// Storage tag for this kind
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::WeightForAge => "weight_for_age",
            Self::HeightForAge => "height_for_age",
            Self::WeightForLength => "weight_for_length",
            Self::WeightForHeight => "weight_for_height",
        }
    }

    /// Whether rows of this kind are keyed by age in months
    #[must_use]
    pub const fn is_age_based(self) -> bool {
        matches!(self, Self::WeightForAge | Self::HeightForAge)
    }
}

impl FromStr for ReferenceKind {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' ', '/'], "_");
        match normalized.as_str() {
            "weight_for_age" | "wfa" => Ok(Self::WeightForAge),
            "height_for_age" | "length_for_age" | "length_height_for_age" | "lfa" | "hfa" => {
                Ok(Self::HeightForAge)
            }
            "weight_for_length" | "wfl" => Ok(Self::WeightForLength),
            "weight_for_height" | "wfh" => Ok(Self::WeightForHeight),
            _ => Err(GrowthError::UnknownMeasurementKind(s.to_string())),
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A length or height expressed as a whole number of half-centimetres
///
/// Keys compare as integers, so `151.5` and `151.50` are the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfCm(u32);

impl HalfCm {
    /// Round a measured length to the nearest half-centimetre
    ///
    /// Halfway values round away from zero (151.25 -> 151.5). Returns `None`
    /// for non-positive or non-finite input.
    #[must_use]
    pub fn nearest(cm: f64) -> Option<Self> {
        if !cm.is_finite() || cm <= 0.0 {
            return None;
        }
        let halves = (cm * 2.0).round();
        if halves > f64::from(u32::MAX) {
            return None;
        }
        Some(Self(halves as u32))
    }

    /// Interpret a stored table value, which must already lie on the grid
    #[must_use]
    pub fn from_table_value(cm: f64) -> Option<Self> {
        if !cm.is_finite() || cm < 0.0 {
            return None;
        }
        let halves = cm * 2.0;
        let rounded = halves.round();
        if (halves - rounded).abs() > KEY_GRID_TOLERANCE || rounded > f64::from(u32::MAX) {
            return None;
        }
        Some(Self(rounded as u32))
    }

    /// Number of half-centimetres
    #[must_use]
    pub const fn halves(self) -> u32 {
        self.0
    }

    /// Value in centimetres
    #[must_use]
    pub fn centimetres(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl fmt::Display for HalfCm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.centimetres())
    }
}

/// Lookup key into a reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeasureKey {
    /// Age in whole months
    AgeMonths(u32),
    /// Length/height on the half-centimetre grid
    Length(HalfCm),
}

impl MeasureKey {
    /// Build the key for a stored row of the given kind
    pub fn for_table(kind: ReferenceKind, value: f64) -> Result<Self> {
        if kind.is_age_based() {
            if !value.is_finite()
                || value < 0.0
                || value.fract().abs() > KEY_GRID_TOLERANCE
                || value > f64::from(u32::MAX)
            {
                return Err(GrowthError::invalid_record(format!(
                    "{kind} key must be a whole number of months, got {value}"
                )));
            }
            Ok(Self::AgeMonths(value.round() as u32))
        } else {
            HalfCm::from_table_value(value).map(Self::Length).ok_or_else(|| {
                GrowthError::invalid_record(format!(
                    "{kind} key must lie on a 0.5 cm grid, got {value}"
                ))
            })
        }
    }

    /// Whether this key fits rows of the given kind
    #[must_use]
    pub const fn matches_kind(self, kind: ReferenceKind) -> bool {
        match self {
            Self::AgeMonths(_) => kind.is_age_based(),
            Self::Length(_) => !kind.is_age_based(),
        }
    }
}

impl fmt::Display for MeasureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgeMonths(months) => write!(f, "{months}"),
            Self::Length(length) => write!(f, "{length}"),
        }
    }
}

/// SD cutoffs of one reference row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// -3 SD cutoff
    pub sd_minus3: f64,
    /// -2 SD cutoff
    pub sd_minus2: f64,
    /// +2 SD cutoff
    pub sd_plus2: f64,
    /// +3 SD cutoff; `None` leaves the upper tier open-ended
    pub sd_plus3: Option<f64>,
}

impl Thresholds {
    /// Create a set of cutoffs with a bounded upper tier
    #[must_use]
    pub const fn new(sd_minus3: f64, sd_minus2: f64, sd_plus2: f64, sd_plus3: f64) -> Self {
        Self {
            sd_minus3,
            sd_minus2,
            sd_plus2,
            sd_plus3: Some(sd_plus3),
        }
    }

    /// Create a set of cutoffs without a +3 SD bound
    #[must_use]
    pub const fn open_ended(sd_minus3: f64, sd_minus2: f64, sd_plus2: f64) -> Self {
        Self {
            sd_minus3,
            sd_minus2,
            sd_plus2,
            sd_plus3: None,
        }
    }

    /// Check that cutoffs are finite and ordered `-3 < -2 < +2 <= +3`
    pub fn validate(&self) -> Result<()> {
        let finite = [self.sd_minus3, self.sd_minus2, self.sd_plus2]
            .iter()
            .all(|v| v.is_finite())
            && self.sd_plus3.is_none_or(f64::is_finite);
        if !finite {
            return Err(GrowthError::invalid_record(format!(
                "thresholds must be finite: {self:?}"
            )));
        }

        if !(self.sd_minus3 < self.sd_minus2 && self.sd_minus2 < self.sd_plus2) {
            return Err(GrowthError::invalid_record(format!(
                "thresholds out of order (sd_minus3 < sd_minus2 < sd_plus2): {self:?}"
            )));
        }

        if let Some(sd_plus3) = self.sd_plus3 {
            if sd_plus3 < self.sd_plus2 {
                return Err(GrowthError::invalid_record(format!(
                    "sd_plus3 {sd_plus3} is below sd_plus2 {}",
                    self.sd_plus2
                )));
            }
        }

        Ok(())
    }
}

/// A reference row as stored in JSON or Parquet, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRow {
    /// `boy` or `girl`
    pub sex: String,
    /// One of the [`ReferenceKind`] tags
    #[serde(alias = "measurementKind", alias = "kind")]
    pub measurement_kind: String,
    /// Age in months or length/height in centimetres
    #[serde(alias = "measureKey")]
    pub measure_key: f64,
    /// -3 SD cutoff
    #[serde(alias = "sdMinus3")]
    pub sd_minus3: f64,
    /// -2 SD cutoff
    #[serde(alias = "sdMinus2")]
    pub sd_minus2: f64,
    /// +2 SD cutoff
    #[serde(alias = "sdPlus2")]
    pub sd_plus2: f64,
    /// +3 SD cutoff, absent for an open-ended upper tier
    #[serde(default, alias = "sdPlus3")]
    pub sd_plus3: Option<f64>,
}

/// A validated reference row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthStandardRecord {
    /// Sex the row applies to
    pub sex: Sex,
    /// Table kind
    pub kind: ReferenceKind,
    /// Lookup key within the (sex, kind) group
    pub key: MeasureKey,
    /// SD cutoffs
    pub thresholds: Thresholds,
}

impl GrowthStandardRecord {
    /// Create a record, checking key shape and threshold ordering
    pub fn new(
        sex: Sex,
        kind: ReferenceKind,
        key: MeasureKey,
        thresholds: Thresholds,
    ) -> Result<Self> {
        if !key.matches_kind(kind) {
            return Err(GrowthError::invalid_record(format!(
                "key {key} does not fit {kind} rows"
            )));
        }
        thresholds.validate()?;
        Ok(Self {
            sex,
            kind,
            key,
            thresholds,
        })
    }
}

impl TryFrom<StandardRow> for GrowthStandardRecord {
    type Error = GrowthError;

    fn try_from(row: StandardRow) -> Result<Self> {
        let sex: Sex = row.sex.parse()?;
        let kind: ReferenceKind = row.measurement_kind.parse()?;
        let key = MeasureKey::for_table(kind, row.measure_key)?;
        let thresholds = Thresholds {
            sd_minus3: row.sd_minus3,
            sd_minus2: row.sd_minus2,
            sd_plus2: row.sd_plus2,
            sd_plus3: row.sd_plus3,
        };
        Self::new(sex, kind, key, thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_cm_rounding() {
        assert_eq!(HalfCm::nearest(151.3).unwrap().to_string(), "151.5");
        assert_eq!(HalfCm::nearest(151.76).unwrap().to_string(), "152.0");
        assert_eq!(HalfCm::nearest(151.2).unwrap().to_string(), "151.0");
        assert_eq!(HalfCm::nearest(151.25).unwrap().to_string(), "151.5");
        assert_eq!(HalfCm::nearest(80.0).unwrap().halves(), 160);
        assert!(HalfCm::nearest(0.0).is_none());
        assert!(HalfCm::nearest(-4.0).is_none());
        assert!(HalfCm::nearest(f64::NAN).is_none());
    }

    #[test]
    fn test_half_cm_compares_numerically() {
        // Storage with two decimals must hit the same key as a one-decimal query
        assert_eq!(HalfCm::from_table_value(151.50), HalfCm::nearest(151.3));
        assert_eq!(HalfCm::from_table_value(45.0), HalfCm::nearest(45.1));
        assert!(HalfCm::from_table_value(45.3).is_none());
    }

    #[test]
    fn test_measure_key_for_table() {
        assert_eq!(
            MeasureKey::for_table(ReferenceKind::WeightForAge, 24.0).unwrap(),
            MeasureKey::AgeMonths(24)
        );
        assert!(MeasureKey::for_table(ReferenceKind::HeightForAge, 2.5).is_err());
        assert!(MeasureKey::for_table(ReferenceKind::HeightForAge, -1.0).is_err());
        assert_eq!(
            MeasureKey::for_table(ReferenceKind::WeightForHeight, 80.5).unwrap(),
            MeasureKey::Length(HalfCm::nearest(80.5).unwrap())
        );
        assert!(MeasureKey::for_table(ReferenceKind::WeightForLength, 80.25).is_err());
    }

    #[test]
    fn test_reference_kind_parsing() {
        assert_eq!(
            "weight-for-age".parse::<ReferenceKind>().unwrap(),
            ReferenceKind::WeightForAge
        );
        assert_eq!(
            "length_height_for_age".parse::<ReferenceKind>().unwrap(),
            ReferenceKind::HeightForAge
        );
        assert_eq!(
            "Weight For Height".parse::<ReferenceKind>().unwrap(),
            ReferenceKind::WeightForHeight
        );
        for kind in ReferenceKind::ALL {
            assert_eq!(kind.tag().parse::<ReferenceKind>().unwrap(), kind);
        }
        assert!(matches!(
            "bmi_for_age".parse::<ReferenceKind>(),
            Err(GrowthError::UnknownMeasurementKind(_))
        ));
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Thresholds::new(10.0, 12.0, 18.0, 20.0).validate().is_ok());
        assert!(Thresholds::new(10.0, 12.0, 18.0, 18.0).validate().is_ok());
        assert!(Thresholds::open_ended(10.0, 12.0, 18.0).validate().is_ok());
        assert!(Thresholds::new(12.0, 12.0, 18.0, 20.0).validate().is_err());
        assert!(Thresholds::new(10.0, 12.0, 18.0, 17.0).validate().is_err());
        assert!(Thresholds::open_ended(10.0, f64::NAN, 18.0).validate().is_err());
    }

    #[test]
    fn test_record_from_row() {
        let row = StandardRow {
            sex: "girl".to_string(),
            measurement_kind: "weight_for_length".to_string(),
            measure_key: 65.0,
            sd_minus3: 5.5,
            sd_minus2: 5.9,
            sd_plus2: 8.1,
            sd_plus3: None,
        };
        let record = GrowthStandardRecord::try_from(row).unwrap();

        assert_eq!(record.sex, Sex::Female);
        assert_eq!(record.kind, ReferenceKind::WeightForLength);
        assert_eq!(record.key.to_string(), "65.0");
        assert_eq!(record.thresholds.sd_plus3, None);
    }

    #[test]
    fn test_record_rejects_mismatched_key() {
        let result = GrowthStandardRecord::new(
            Sex::Male,
            ReferenceKind::WeightForAge,
            MeasureKey::Length(HalfCm::nearest(80.0).unwrap()),
            Thresholds::new(1.0, 2.0, 3.0, 4.0),
        );
        assert!(matches!(result, Err(GrowthError::InvalidRecord(_))));
    }
}
