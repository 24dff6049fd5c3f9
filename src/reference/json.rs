//! JSON loading for reference tables
//!
//! The JSON form is an array of [`StandardRow`] objects, snake_case or
//! camelCase field names, with `sd_plus3` optional.

use super::table::StandardTable;
use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::models::StandardRow;
use log::info;
use std::io::{BufReader, Read};
use std::path::Path;

impl StandardTable {
    /// Read a table from any JSON source
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let rows: Vec<StandardRow> = serde_json::from_reader(reader)?;
        Self::from_rows(rows)
    }

    /// Read a table from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "loading growth reference table")?;
        let table = Self::from_json_reader(BufReader::new(file))?;
        info!(
            "Loaded {} growth reference rows from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }
}
