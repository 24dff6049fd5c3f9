//! Growth evaluation orchestrator
//!
//! This module implements the evaluation of one child measurement against a
//! growth reference repository: age and BMI, three table lookups, three
//! classifications and the overall verdict.

use super::age::age_in_months;
use super::bmi::body_mass_index_with_precision;
use super::classifier::classify;
use super::status::overall_status;
use crate::common::traits::{Clock, GrowthStandardRepository, SystemClock};
use crate::config::EvaluatorConfig;
use crate::error::Result;
use crate::models::{
    ChildMeasurement, EvaluationResult, GrowthCategory, HalfCm, MeasureKey, MeasurementKind,
    ReferenceKind, Sex,
};
use log::{debug, info};
use rayon::prelude::*;

/// Evaluates child measurements against a growth reference repository
///
/// The evaluator holds no mutable state, so a single instance can evaluate
/// any number of children concurrently.
#[derive(Debug, Clone)]
pub struct GrowthEvaluator<R, C = SystemClock> {
    repository: R,
    clock: C,
    config: EvaluatorConfig,
}

impl<R: GrowthStandardRepository> GrowthEvaluator<R, SystemClock> {
    /// Create an evaluator that ages children against the system date
    #[must_use]
    pub fn with_system_clock(repository: R) -> Self {
        Self::new(repository, SystemClock)
    }
}

impl<R: GrowthStandardRepository, C: Clock> GrowthEvaluator<R, C> {
    /// Create an evaluator with the default configuration
    #[must_use]
    pub fn new(repository: R, clock: C) -> Self {
        Self {
            repository,
            clock,
            config: EvaluatorConfig::default(),
        }
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// The backing repository
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Weight-for-length below the cutoff age, weight-for-height from it on
    #[must_use]
    pub const fn measurement_kind_for_age(&self, age_months: u32) -> ReferenceKind {
        if age_months < self.config.length_cutoff_months {
            ReferenceKind::WeightForLength
        } else {
            ReferenceKind::WeightForHeight
        }
    }

    /// Evaluate one child
    ///
    /// Missing data never fails: without a birthdate every field is `None`,
    /// and each missing measurement or reference row empties only its own
    /// classification. Errors come only from the repository.
    pub fn evaluate(&self, measurement: &ChildMeasurement) -> Result<EvaluationResult> {
        let today = self.clock.today();
        let Some(age_months) = age_in_months(measurement.birthdate, today) else {
            debug!("No usable birthdate, skipping evaluation");
            return Ok(EvaluationResult::empty());
        };

        let bmi = body_mass_index_with_precision(
            measurement.weight_kg,
            measurement.height_cm,
            self.config.bmi_decimals,
        );

        let sex = measurement.sex;
        let weight = usable_measurement(measurement.weight_kg);
        let height = usable_measurement(measurement.height_cm);
        let age_key = MeasureKey::AgeMonths(age_months);

        let weight_for_age = self.classify_dimension(
            sex,
            ReferenceKind::WeightForAge,
            Some(age_key),
            weight,
            MeasurementKind::WeightForAge,
        )?;

        let height_for_age = self.classify_dimension(
            sex,
            ReferenceKind::HeightForAge,
            Some(age_key),
            height,
            MeasurementKind::HeightForAge,
        )?;

        let length_key = height.and_then(HalfCm::nearest).map(MeasureKey::Length);
        let weight_for_length_or_height = self.classify_dimension(
            sex,
            self.measurement_kind_for_age(age_months),
            length_key,
            weight,
            MeasurementKind::WeightForLengthOrHeight,
        )?;

        let overall = overall_status([weight_for_age, height_for_age, weight_for_length_or_height]);

        debug!(
            "Evaluated {sex} child aged {age_months} months: WFA={weight_for_age:?} \
             LFA={height_for_age:?} WFL/WFH={weight_for_length_or_height:?} overall={overall:?}"
        );

        Ok(EvaluationResult {
            age_months: Some(age_months),
            bmi,
            weight_for_age,
            height_for_age,
            weight_for_length_or_height,
            overall,
        })
    }

    /// Evaluate many children in parallel
    ///
    /// Results are returned in input order; one failing lookup does not stop
    /// the other evaluations.
    pub fn evaluate_batch(&self, measurements: &[ChildMeasurement]) -> Vec<Result<EvaluationResult>> {
        let results: Vec<Result<EvaluationResult>> = measurements
            .par_iter()
            .map(|measurement| self.evaluate(measurement))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            "Evaluated {} measurements ({failed} failed)",
            measurements.len()
        );
        results
    }

    fn classify_dimension(
        &self,
        sex: Sex,
        table: ReferenceKind,
        key: Option<MeasureKey>,
        value: Option<f64>,
        kind: MeasurementKind,
    ) -> Result<Option<GrowthCategory>> {
        let (Some(key), Some(value)) = (key, value) else {
            return Ok(None);
        };

        match self.repository.lookup(sex, table, key)? {
            Some(thresholds) => Ok(Some(classify(value, &thresholds, kind))),
            None => {
                debug!(
                    "No {table} reference row for {} at key {key}",
                    sex.table_tag()
                );
                Ok(None)
            }
        }
    }
}

/// Measurements must be finite and positive to be classified
fn usable_measurement(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
