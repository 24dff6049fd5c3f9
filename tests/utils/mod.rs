//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use growth_standards::{
    GrowthError, GrowthStandardRepository, MeasureKey, ReferenceKind, Result, Sex, StandardRow,
    StandardTable, Thresholds,
};

/// Evaluation date used by every fixed-clock test
#[must_use]
pub fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Birthdate that makes a child exactly `months` old on [`evaluation_date`]
#[must_use]
pub fn born_months_ago(months: u32) -> NaiveDate {
    evaluation_date()
        .checked_sub_months(chrono::Months::new(months))
        .unwrap()
}

fn row(sex: &str, kind: &str, key: f64, sd: [f64; 3], sd_plus3: Option<f64>) -> StandardRow {
    StandardRow {
        sex: sex.to_string(),
        measurement_kind: kind.to_string(),
        measure_key: key,
        sd_minus3: sd[0],
        sd_minus2: sd[1],
        sd_plus2: sd[2],
        sd_plus3,
    }
}

/// Raw rows of a small reference table covering boys at 12 and 24 months
#[must_use]
pub fn fixture_rows() -> Vec<StandardRow> {
    vec![
        row("boy", "weight_for_age", 24.0, [8.6, 10.0, 15.3], Some(17.1)),
        row("boy", "height_for_age", 24.0, [78.0, 81.0, 93.9], Some(97.0)),
        row("boy", "weight_for_height", 80.0, [8.3, 8.8, 11.8], Some(12.8)),
        row("boy", "weight_for_height", 86.5, [9.4, 10.1, 13.5], None),
        row("boy", "weight_for_age", 12.0, [6.9, 7.7, 12.0], Some(13.3)),
        row("boy", "height_for_age", 12.0, [68.6, 71.0, 80.5], Some(82.9)),
        row("boy", "weight_for_length", 75.0, [7.7, 8.3, 11.0], Some(12.0)),
        row("girl", "weight_for_age", 24.0, [8.1, 9.0, 14.8], Some(16.9)),
    ]
}

/// In-memory table built from [`fixture_rows`]
#[must_use]
pub fn fixture_table() -> StandardTable {
    StandardTable::from_rows(fixture_rows()).unwrap()
}

/// Unique temp-file path for one test
#[must_use]
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("growth_standards_{}_{name}", std::process::id()))
}

/// Repository whose backing store is unreachable
#[derive(Debug, Default)]
pub struct FailingRepository;

impl GrowthStandardRepository for FailingRepository {
    fn lookup(&self, _sex: Sex, kind: ReferenceKind, _key: MeasureKey) -> Result<Option<Thresholds>> {
        Err(GrowthError::repository(format!("{kind} store unavailable")))
    }
}

/// Repository wrapper that counts lookups
#[derive(Debug)]
pub struct CountingRepository<R> {
    inner: R,
    lookups: AtomicUsize,
}

impl<R> CountingRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl<R: GrowthStandardRepository> GrowthStandardRepository for CountingRepository<R> {
    fn lookup(&self, sex: Sex, kind: ReferenceKind, key: MeasureKey) -> Result<Option<Thresholds>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(sex, kind, key)
    }
}

/// Initialise logging once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
