//! Parquet storage for reference tables
//!
//! Reference tables are stored one row per threshold set with the columns
//! `sex`, `measurement_kind`, `measure_key`, `sd_minus3`, `sd_minus2`,
//! `sd_plus2` and a nullable `sd_plus3`. Numeric columns written as integers
//! or `Float32` are cast to `Float64` on read.

use super::table::StandardTable;
use crate::error::util::safe_open_file;
use crate::error::{GrowthError, Result};
use crate::models::{GrowthStandardRecord, MeasureKey, StandardRow};
use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use log::{debug, info};
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// Column holding the `boy`/`girl` tag
pub const SEX_COLUMN: &str = "sex";
/// Column holding the table kind tag
pub const KIND_COLUMN: &str = "measurement_kind";
/// Column holding the age or length key
pub const KEY_COLUMN: &str = "measure_key";
/// -3 SD column
pub const SD_MINUS3_COLUMN: &str = "sd_minus3";
/// -2 SD column
pub const SD_MINUS2_COLUMN: &str = "sd_minus2";
/// +2 SD column
pub const SD_PLUS2_COLUMN: &str = "sd_plus2";
/// +3 SD column (nullable)
pub const SD_PLUS3_COLUMN: &str = "sd_plus3";

/// Arrow schema of a stored reference table
#[must_use]
pub fn reference_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(SEX_COLUMN, DataType::Utf8, false),
        Field::new(KIND_COLUMN, DataType::Utf8, false),
        Field::new(KEY_COLUMN, DataType::Float64, false),
        Field::new(SD_MINUS3_COLUMN, DataType::Float64, false),
        Field::new(SD_MINUS2_COLUMN, DataType::Float64, false),
        Field::new(SD_PLUS2_COLUMN, DataType::Float64, false),
        Field::new(SD_PLUS3_COLUMN, DataType::Float64, true),
    ]))
}

fn required_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| GrowthError::ColumnNotFound {
            column: name.to_string(),
        })
}

fn as_string_array(column: &ArrayRef, name: &str) -> Result<StringArray> {
    let column = if column.data_type() == &DataType::Utf8 {
        Arc::clone(column)
    } else {
        debug!("Casting column '{name}' from {:?} to Utf8", column.data_type());
        cast(column.as_ref(), &DataType::Utf8)?
    };
    column
        .as_any()
        .downcast_ref::<StringArray>()
        .cloned()
        .ok_or_else(|| GrowthError::invalid_record(format!("column '{name}' is not a string column")))
}

fn as_float_array(column: &ArrayRef, name: &str) -> Result<Float64Array> {
    let column = if column.data_type() == &DataType::Float64 {
        Arc::clone(column)
    } else {
        debug!("Casting column '{name}' from {:?} to Float64", column.data_type());
        cast(column.as_ref(), &DataType::Float64)?
    };
    column
        .as_any()
        .downcast_ref::<Float64Array>()
        .cloned()
        .ok_or_else(|| GrowthError::invalid_record(format!("column '{name}' is not numeric")))
}

fn string_value(array: &StringArray, name: &str, row: usize) -> Result<String> {
    if array.is_null(row) {
        return Err(GrowthError::invalid_record(format!("row {row}: '{name}' is null")));
    }
    Ok(array.value(row).to_string())
}

fn float_value(array: &Float64Array, name: &str, row: usize) -> Result<f64> {
    if array.is_null(row) {
        return Err(GrowthError::invalid_record(format!("row {row}: '{name}' is null")));
    }
    Ok(array.value(row))
}

/// Convert one Arrow batch into validated reference records
///
/// A missing `sd_plus3` column is treated as all-null (open-ended upper tier).
pub fn records_from_batch(batch: &RecordBatch) -> Result<Vec<GrowthStandardRecord>> {
    let sex = as_string_array(required_column(batch, SEX_COLUMN)?, SEX_COLUMN)?;
    let kind = as_string_array(required_column(batch, KIND_COLUMN)?, KIND_COLUMN)?;
    let key = as_float_array(required_column(batch, KEY_COLUMN)?, KEY_COLUMN)?;
    let sd_minus3 = as_float_array(required_column(batch, SD_MINUS3_COLUMN)?, SD_MINUS3_COLUMN)?;
    let sd_minus2 = as_float_array(required_column(batch, SD_MINUS2_COLUMN)?, SD_MINUS2_COLUMN)?;
    let sd_plus2 = as_float_array(required_column(batch, SD_PLUS2_COLUMN)?, SD_PLUS2_COLUMN)?;
    let sd_plus3 = match batch.column_by_name(SD_PLUS3_COLUMN) {
        Some(column) => Some(as_float_array(column, SD_PLUS3_COLUMN)?),
        None => {
            debug!("No '{SD_PLUS3_COLUMN}' column, treating upper tier as open-ended");
            None
        }
    };

    (0..batch.num_rows())
        .map(|row| {
            let raw = StandardRow {
                sex: string_value(&sex, SEX_COLUMN, row)?,
                measurement_kind: string_value(&kind, KIND_COLUMN, row)?,
                measure_key: float_value(&key, KEY_COLUMN, row)?,
                sd_minus3: float_value(&sd_minus3, SD_MINUS3_COLUMN, row)?,
                sd_minus2: float_value(&sd_minus2, SD_MINUS2_COLUMN, row)?,
                sd_plus2: float_value(&sd_plus2, SD_PLUS2_COLUMN, row)?,
                sd_plus3: sd_plus3
                    .as_ref()
                    .filter(|array| !array.is_null(row))
                    .map(|array| array.value(row)),
            };
            GrowthStandardRecord::try_from(raw).map_err(|e| match e {
                GrowthError::InvalidRecord(msg) => {
                    GrowthError::InvalidRecord(format!("row {row}: {msg}"))
                }
                other => other,
            })
        })
        .collect()
}

fn key_value(key: MeasureKey) -> f64 {
    match key {
        MeasureKey::AgeMonths(months) => f64::from(months),
        MeasureKey::Length(length) => length.centimetres(),
    }
}

impl StandardTable {
    /// Read a table from a Parquet file
    pub fn from_parquet_file(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "loading growth reference table")?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

        let mut table = Self::new();
        let mut batches = 0usize;
        for batch in reader {
            let batch = batch?;
            for record in records_from_batch(&batch)? {
                table.insert(record)?;
            }
            batches += 1;
        }

        info!(
            "Loaded {} growth reference rows from {} ({batches} batches)",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Export the table as a single Arrow batch in [`reference_schema`] layout
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let records = self.records();

        let sex: Vec<&str> = records.iter().map(|r| r.sex.table_tag()).collect();
        let kind: Vec<&str> = records.iter().map(|r| r.kind.tag()).collect();
        let key: Vec<f64> = records.iter().map(|r| key_value(r.key)).collect();
        let sd_minus3: Vec<f64> = records.iter().map(|r| r.thresholds.sd_minus3).collect();
        let sd_minus2: Vec<f64> = records.iter().map(|r| r.thresholds.sd_minus2).collect();
        let sd_plus2: Vec<f64> = records.iter().map(|r| r.thresholds.sd_plus2).collect();
        let sd_plus3: Vec<Option<f64>> = records.iter().map(|r| r.thresholds.sd_plus3).collect();

        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(sex)),
            Arc::new(StringArray::from(kind)),
            Arc::new(Float64Array::from(key)),
            Arc::new(Float64Array::from(sd_minus3)),
            Arc::new(Float64Array::from(sd_minus2)),
            Arc::new(Float64Array::from(sd_plus2)),
            Arc::new(Float64Array::from(sd_plus3)),
        ];

        Ok(RecordBatch::try_new(reference_schema(), columns)?)
    }

    /// Write the table to a Parquet file
    pub fn write_parquet_file(&self, path: &Path) -> Result<()> {
        let batch = self.to_record_batch()?;
        let file = File::create(path).map_err(|e| GrowthError::File {
            path: path.to_path_buf(),
            context: "Failed to create reference table file".to_string(),
            source: e,
        })?;

        let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
        writer.write(&batch)?;
        writer.close()?;

        info!("Wrote {} growth reference rows to {}", self.len(), path.display());
        Ok(())
    }
}
