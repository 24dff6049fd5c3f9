//! End-to-end tests for growth evaluation against a fixture reference table

mod utils;

use growth_standards::{
    ChildMeasurement, EvaluationResult, FixedClock, GrowthCategory, GrowthError, GrowthEvaluator,
    NutritionStatus, Sex, StandardTable,
};
use std::sync::Arc;
use utils::{
    CountingRepository, FailingRepository, born_months_ago, evaluation_date, fixture_table,
    init_logging,
};

fn evaluator() -> GrowthEvaluator<StandardTable, FixedClock> {
    init_logging();
    GrowthEvaluator::new(fixture_table(), FixedClock::new(evaluation_date()))
}

fn boy(months: u32) -> ChildMeasurement {
    ChildMeasurement::new(Sex::Male).with_birthdate(born_months_ago(months))
}

#[test]
fn test_underweight_two_year_old() {
    let result = evaluator()
        .evaluate(&boy(24).with_weight(9.0).with_height(80.0))
        .unwrap();

    assert_eq!(result.age_months, Some(24));
    assert_eq!(result.bmi, Some(14.06));
    assert_eq!(result.weight_for_age, Some(GrowthCategory::Underweight));
    assert_eq!(result.height_for_age, Some(GrowthCategory::Stunted));
    assert_eq!(result.weight_for_length_or_height, Some(GrowthCategory::Normal));
    assert_eq!(result.overall, Some(NutritionStatus::ModerateMalnutrition));
}

#[test]
fn test_severe_wins_over_tall() {
    // 95 cm has no weight-for-height row in the fixture
    let result = evaluator()
        .evaluate(&boy(24).with_weight(8.0).with_height(95.0))
        .unwrap();

    assert_eq!(result.weight_for_age, Some(GrowthCategory::SeverelyUnderweight));
    assert_eq!(result.height_for_age, Some(GrowthCategory::Tall));
    assert_eq!(result.weight_for_length_or_height, None);
    assert_eq!(result.overall, Some(NutritionStatus::SevereMalnutrition));
}

#[test]
fn test_under_two_uses_weight_for_length() {
    // 74.8 cm rounds to the 75.0 cm length row
    let result = evaluator()
        .evaluate(&boy(12).with_weight(12.5).with_height(74.8))
        .unwrap();

    assert_eq!(result.age_months, Some(12));
    assert_eq!(result.weight_for_age, Some(GrowthCategory::Overweight));
    assert_eq!(result.height_for_age, Some(GrowthCategory::Normal));
    assert_eq!(result.weight_for_length_or_height, Some(GrowthCategory::Obese));
    assert_eq!(result.overall, Some(NutritionStatus::OverweightObese));
}

#[test]
fn test_open_ended_weight_for_height_row() {
    let result = evaluator()
        .evaluate(&boy(24).with_weight(20.0).with_height(86.4))
        .unwrap();

    assert_eq!(result.weight_for_age, Some(GrowthCategory::Obese));
    assert_eq!(result.height_for_age, Some(GrowthCategory::Normal));
    assert_eq!(result.weight_for_length_or_height, Some(GrowthCategory::Overweight));
    assert_eq!(result.overall, Some(NutritionStatus::OverweightObese));
}

#[test]
fn test_missing_birthdate_short_circuits() {
    let repository = CountingRepository::new(fixture_table());
    let evaluator = GrowthEvaluator::new(&repository, FixedClock::new(evaluation_date()));

    let child = ChildMeasurement::new(Sex::Male).with_weight(9.0).with_height(80.0);
    let result = evaluator.evaluate(&child).unwrap();

    assert_eq!(result, EvaluationResult::empty());
    assert_eq!(repository.lookups(), 0);
}

#[test]
fn test_missing_height_degrades_only_height_fields() {
    let result = evaluator().evaluate(&boy(24).with_weight(12.0)).unwrap();

    assert_eq!(result.age_months, Some(24));
    assert_eq!(result.bmi, None);
    assert_eq!(result.weight_for_age, Some(GrowthCategory::Normal));
    assert_eq!(result.height_for_age, None);
    assert_eq!(result.weight_for_length_or_height, None);
    assert_eq!(result.overall, Some(NutritionStatus::Normal));
}

#[test]
fn test_no_matching_rows_gives_no_verdict() {
    // The fixture has no rows for 30-month-olds or 90 cm
    let result = evaluator()
        .evaluate(&boy(30).with_weight(13.0).with_height(90.0))
        .unwrap();

    assert_eq!(result.age_months, Some(30));
    assert_eq!(result.bmi, Some(16.05));
    assert_eq!(result.classifications(), [None, None, None]);
    assert_eq!(result.overall, None);
}

#[test]
fn test_sex_selects_reference_rows() {
    let girl = ChildMeasurement::new(Sex::Female)
        .with_birthdate(born_months_ago(24))
        .with_weight(9.5)
        .with_height(80.0);
    let result = evaluator().evaluate(&girl).unwrap();

    // Girls' 24-month row has sd_minus2 = 9.0, boys' has 10.0
    assert_eq!(result.weight_for_age, Some(GrowthCategory::Normal));
    assert_eq!(result.height_for_age, None);
}

#[test]
fn test_repository_failure_propagates() {
    let evaluator = GrowthEvaluator::new(FailingRepository, FixedClock::new(evaluation_date()));
    let err = evaluator
        .evaluate(&boy(24).with_weight(9.0).with_height(80.0))
        .unwrap_err();

    assert!(matches!(err, GrowthError::Repository(_)));
}

#[test]
fn test_evaluation_is_idempotent() {
    let evaluator = evaluator();
    let child = boy(24).with_weight(9.0).with_height(80.0);

    let first = evaluator.evaluate(&child).unwrap();
    let second = evaluator.evaluate(&child).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_batch_preserves_order() {
    let children = vec![
        boy(24).with_weight(9.0).with_height(80.0),
        ChildMeasurement::new(Sex::Male),
        boy(12).with_weight(12.5).with_height(74.8),
    ];
    let results = evaluator().evaluate_batch(&children);

    assert_eq!(results.len(), 3);
    let overall: Vec<Option<NutritionStatus>> = results
        .into_iter()
        .map(|r| r.unwrap().overall)
        .collect();
    assert_eq!(
        overall,
        vec![
            Some(NutritionStatus::ModerateMalnutrition),
            None,
            Some(NutritionStatus::OverweightObese),
        ]
    );
}

#[test]
fn test_batch_reports_each_failure() {
    let evaluator = GrowthEvaluator::new(FailingRepository, FixedClock::new(evaluation_date()));
    let children = vec![
        boy(24).with_weight(9.0),
        ChildMeasurement::new(Sex::Female),
    ];
    let results = evaluator.evaluate_batch(&children);

    assert!(results[0].is_err());
    // No birthdate means no lookups, so nothing can fail
    assert_eq!(results[1].as_ref().unwrap(), &EvaluationResult::empty());
}

#[test]
fn test_shared_table_across_threads() {
    let table = Arc::new(fixture_table());
    let child = boy(24).with_weight(9.0).with_height(80.0);

    let results: Vec<EvaluationResult> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let evaluator =
                    GrowthEvaluator::new(Arc::clone(&table), FixedClock::new(evaluation_date()));
                let child = child.clone();
                scope.spawn(move || evaluator.evaluate(&child).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0].overall, Some(NutritionStatus::ModerateMalnutrition));
}

#[test]
fn test_result_serializes_to_output_contract() {
    let result = evaluator()
        .evaluate(&boy(24).with_weight(9.0).with_height(80.0))
        .unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["ageMonths"], 24);
    assert_eq!(value["bmi"], 14.06);
    assert_eq!(value["statusWeightForAge"], "Underweight");
    assert_eq!(value["statusHeightForAge"], "Stunted");
    assert_eq!(value["statusWeightForLengthOrHeight"], "Normal");
    assert_eq!(value["overall"], "Moderate Malnutrition");
}
