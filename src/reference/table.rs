//! In-memory growth reference table

use crate::common::traits::GrowthStandardRepository;
use crate::error::{GrowthError, Result};
use crate::models::{GrowthStandardRecord, MeasureKey, ReferenceKind, Sex, StandardRow, Thresholds};
use rustc_hash::FxHashMap;

type RowKey = (Sex, ReferenceKind, MeasureKey);

/// Reference rows indexed by (sex, kind, key)
///
/// The table is built once and then only read, so one instance can be shared
/// across threads (behind `&` or `Arc`) by any number of evaluators.
#[derive(Debug, Clone, Default)]
pub struct StandardTable {
    rows: FxHashMap<RowKey, Thresholds>,
}

impl StandardTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from validated records
    ///
    /// Fails on the first duplicate key within a (sex, kind) group.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = GrowthStandardRecord>,
    {
        let mut table = Self::new();
        for record in records {
            table.insert(record)?;
        }
        Ok(table)
    }

    /// Build a table from raw rows, validating each one
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = StandardRow>,
    {
        let mut table = Self::new();
        for (index, row) in rows.into_iter().enumerate() {
            let record = GrowthStandardRecord::try_from(row).map_err(|e| match e {
                GrowthError::InvalidRecord(msg) => {
                    GrowthError::InvalidRecord(format!("row {index}: {msg}"))
                }
                other => other,
            })?;
            table.insert(record)?;
        }
        Ok(table)
    }

    /// Add one record
    pub fn insert(&mut self, record: GrowthStandardRecord) -> Result<()> {
        record.thresholds.validate()?;

        let key = (record.sex, record.kind, record.key);
        if self.rows.contains_key(&key) {
            return Err(GrowthError::DuplicateRecord {
                sex: record.sex.table_tag().to_string(),
                kind: record.kind.tag().to_string(),
                key: record.key.to_string(),
            });
        }
        self.rows.insert(key, record.thresholds);
        Ok(())
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of one (sex, kind) group, ordered by key
    #[must_use]
    pub fn records_for(&self, sex: Sex, kind: ReferenceKind) -> Vec<GrowthStandardRecord> {
        let mut records: Vec<GrowthStandardRecord> = self
            .rows
            .iter()
            .filter(|((s, k, _), _)| *s == sex && *k == kind)
            .map(|(&(sex, kind, key), &thresholds)| GrowthStandardRecord {
                sex,
                kind,
                key,
                thresholds,
            })
            .collect();
        records.sort_by_key(|record| record.key);
        records
    }

    /// All rows, ordered by sex, kind and key
    #[must_use]
    pub fn records(&self) -> Vec<GrowthStandardRecord> {
        let mut records: Vec<GrowthStandardRecord> = self
            .rows
            .iter()
            .map(|(&(sex, kind, key), &thresholds)| GrowthStandardRecord {
                sex,
                kind,
                key,
                thresholds,
            })
            .collect();
        records.sort_by_key(|record| (record.sex, record.kind, record.key));
        records
    }
}

impl GrowthStandardRepository for StandardTable {
    fn lookup(&self, sex: Sex, kind: ReferenceKind, key: MeasureKey) -> Result<Option<Thresholds>> {
        Ok(self.rows.get(&(sex, kind, key)).copied())
    }
}
