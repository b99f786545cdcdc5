//! CSV contact loader.
//!
//! Reads the `number` column of a headered CSV file. Extra columns are
//! ignored and blank numbers are skipped.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::error::{Result, SenderError};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, error};

/// Header of the column holding phone numbers.
pub const NUMBER_COLUMN: &str = "number";

/// One phone number as it appeared in the input file (trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContact {
    pub number: String,
}

#[derive(Debug, Deserialize)]
struct ContactRow {
    #[serde(default)]
    number: Option<String>,
}

/// Load contacts from a CSV file.
///
/// Never fails: a missing file, a missing `number` header, or any read error
/// is logged and yields an empty list so the caller can end the run cleanly.
pub fn load_contacts<P: AsRef<Path>>(path: P) -> Vec<RawContact> {
    match try_load_contacts(path.as_ref()) {
        Ok(contacts) => contacts,
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    }
}

/// Load contacts, reporting why loading failed.
///
/// Errors are `FileMissing`, `MalformedInput` (no `number` header) or
/// `ReadError`. A file with no usable rows is `Ok` with an empty list.
pub fn try_load_contacts(path: &Path) -> Result<Vec<RawContact>> {
    if !path.exists() {
        return Err(SenderError::FileMissing(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?;
    if !headers.iter().any(|h| h == NUMBER_COLUMN) {
        return Err(SenderError::MalformedInput {
            path: path.to_path_buf(),
            column: NUMBER_COLUMN.to_string(),
        });
    }

    let mut contacts = Vec::new();
    for row in reader.deserialize::<ContactRow>() {
        let row = row?;
        let number = row.number.as_deref().unwrap_or("").trim();
        if number.is_empty() {
            continue;
        }
        contacts.push(RawContact {
            number: number.to_string(),
        });
    }

    debug!("loaded {} contacts from {:?}", contacts.len(), path);
    Ok(contacts)
}
