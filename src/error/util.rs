//! Utility functions for error handling
//!
//! This module provides helpers that attach the file path and purpose to I/O
//! failures when reading reference tables and measurement files.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GrowthError, Result};

/// Open a file, reporting which file failed and why it was needed
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if path.is_dir() {
        return Err(GrowthError::File {
            path: path.to_path_buf(),
            context: format!("Expected a file for: {purpose}"),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"),
        });
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            io::ErrorKind::NotFound => format!("File not found - needed for: {purpose}"),
            _ => format!("Failed to open file for: {purpose}"),
        };
        GrowthError::File {
            path: path.to_path_buf(),
            context,
            source: e,
        }
    })
}

/// Read a whole file to a string with the same error context as [`safe_open_file`]
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match io::Read::read_to_string(&mut file, &mut content) {
        Ok(_) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text".to_string()
                }
                _ => format!("Failed to read file content for: {purpose}"),
            };
            Err(GrowthError::File {
                path: path.to_path_buf(),
                context,
                source: e,
            })
        }
    }
}
