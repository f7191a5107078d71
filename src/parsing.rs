//! File parsing functionality for the catalog dataset
//!
//! This module handles loading and parsing the catalog CSV file.

use crate::common::TitleRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Parse the catalog CSV file and load the title records for analysis
///
/// This function:
/// - Opens the CSV file and reads its header row
/// - Deserializes each row into a [`TitleRecord`]
/// - Ignores columns the data model does not use
///
/// Any missing column, unparseable year, or unknown content type aborts the
/// load with the underlying [`csv::Error`].
///
/// # Arguments
/// * `file_path` - Path to the catalog CSV file
///
/// # Returns
/// * `Ok(Vec<TitleRecord>)` - Successfully parsed title records
/// * `Err(ParsingError)` - If file reading or CSV parsing failed
pub fn parse_title_records(file_path: &Path) -> Result<Vec<TitleRecord>> {
    let mut reader = csv::Reader::from_path(file_path)?;

    let mut titles = Vec::new();
    for record in reader.deserialize() {
        let title: TitleRecord = record?;
        titles.push(title);
    }

    Ok(titles)
}
