use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

pub const NAME_COLUMN: &str = "Name";
pub const CODE_COLUMN: &str = "Code";

/// Data-shape failures in the source CSV. These abort the run before the
/// output file is touched.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("missing required column '{0}' in CSV header")]
    MissingColumn(&'static str),

    /// The code becomes the value set entry's `fullName`, its unique
    /// identifier, so it must not be blank.
    #[error("data row {0}: country code is empty")]
    EmptyCode(usize),
}

/// One country entry from the source table. Fields arrive trimmed of
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Code")]
    pub code: String,
}

pub fn read_records(path: &Path) -> Result<Vec<CountryRecord>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_records_from(file).with_context(|| format!("Failed to read {}", path.display()))
}

/// Reads all country records from a CSV source, preserving row order.
/// The header must contain `Name` and `Code` columns (any order, extra
/// columns ignored).
pub fn read_records_from<R: Read>(input: R) -> Result<Vec<CountryRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    // Check the header up front so a missing column is reported as such,
    // not as a per-row deserialization failure.
    let headers = reader.headers().context("Failed to read CSV header")?;
    for column in [NAME_COLUMN, CODE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn(column).into());
        }
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<CountryRecord>().enumerate() {
        let record = row.with_context(|| format!("Failed to parse data row {}", idx + 1))?;
        if record.code.is_empty() {
            return Err(DataError::EmptyCode(idx + 1).into());
        }
        records.push(record);
    }

    Ok(records)
}
