//! Growth reference table storage
//!
//! This module provides the in-memory [`StandardTable`] repository and the
//! loaders that seed it from JSON or Parquet files.

pub mod json;
pub mod parquet_store;
pub mod table;

pub use parquet_store::{records_from_batch, reference_schema};
pub use table::StandardTable;
