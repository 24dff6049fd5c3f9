//! Example evaluating a file of child measurements
//!
//! Usage:
//!
//! ```text
//! cargo run --example evaluate -- <reference-table.{json,parquet}> <measurements.json> [YYYY-MM-DD]
//! ```
//!
//! The measurements file is a JSON array of
//! `{"sex": "Male", "birthdate": "2023-01-01", "weightKg": 9.0, "heightCm": 80.0}`
//! objects. Without an explicit date, ages are computed against today.

use anyhow::{Context, bail};
use chrono::NaiveDate;
use growth_standards::error::util::safe_read_to_string;
use growth_standards::{
    ChildMeasurement, Clock, FixedClock, GrowthEvaluator, ReferenceTableConfig, SystemClock,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: evaluate <reference-table> <measurements.json> [YYYY-MM-DD]");
    }

    let table_config = ReferenceTableConfig::from_path(&args[0])
        .with_context(|| format!("Unsupported reference table: {}", args[0]))?;
    let table = table_config
        .load()
        .with_context(|| format!("Failed to load reference table {}", args[0]))?;

    let content = safe_read_to_string(Path::new(&args[1]), "reading measurements")?;
    let measurements: Vec<ChildMeasurement> =
        serde_json::from_str(&content).context("Failed to parse measurements")?;

    let today = match args.get(2) {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid evaluation date: {date}"))?,
        None => SystemClock.today(),
    };
    println!("Evaluating {} measurements as of {today}", measurements.len());

    let evaluator = GrowthEvaluator::new(table, FixedClock::new(today));
    println!("{}", evaluator.config());

    let mut results = Vec::with_capacity(measurements.len());
    for (index, result) in evaluator.evaluate_batch(&measurements).into_iter().enumerate() {
        let result = result.with_context(|| format!("Evaluation failed for record {index}"))?;
        results.push(result);
    }

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
