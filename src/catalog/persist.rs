use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde_json::Value;

use super::CatalogError;
use crate::state::ServerRecord;

/// What: Pick the record list out of a decoded catalog document.
///
/// Inputs:
/// - `doc`: Parsed JSON, either a bare array or a `{"servers": [...]}` envelope
///
/// Output:
/// - The array value holding the records.
///
/// # Errors
/// - A JSON error when the document has neither shape.
fn records_value(doc: Value) -> Result<Value, serde_json::Error> {
    match doc {
        Value::Array(_) => Ok(doc),
        Value::Object(mut map) => map.remove("servers").ok_or_else(|| {
            serde_json::Error::custom("expected an object with a \"servers\" array")
        }),
        _ => Err(serde_json::Error::custom(
            "expected an array of servers or an object with a \"servers\" array",
        )),
    }
}

/// What: Read and decode server records from a JSON file.
///
/// Inputs:
/// - `path`: File path to read JSON from
///
/// Output:
/// - Decoded records in file order, or the I/O / JSON error.
///
/// # Errors
/// - `CatalogError::Io` when the file cannot be read
/// - `CatalogError::Json` when the content is neither an array nor an envelope of records
pub fn read_records(path: &Path) -> Result<Vec<ServerRecord>, CatalogError> {
    let s = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&s)?;
    let records: Vec<ServerRecord> = serde_json::from_value(records_value(doc)?)?;
    tracing::debug!(
        path = %path.display(),
        count = records.len(),
        "[Catalog] Read catalog file"
    );
    Ok(records)
}

/// What: Persist records to `path` as pretty JSON.
///
/// Inputs:
/// - `path`: File path to write JSON to
/// - `records`: Records to write (bare array form)
///
/// # Errors
/// - `CatalogError::Io` when the parent directory or file cannot be written
/// - `CatalogError::Json` when serialization fails
///
/// Details:
/// - Creates the parent directory if it doesn't exist.
pub fn write_records(path: &Path, records: &[ServerRecord]) -> Result<(), CatalogError> {
    let s = serde_json::to_string_pretty(records)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, s)?;
    tracing::debug!(
        path = %path.display(),
        count = records.len(),
        "[Catalog] Wrote catalog file"
    );
    Ok(())
}
