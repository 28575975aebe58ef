//! Read a single property record from JSON.
//!
//! The JSON object uses the dataset's wire field names (see
//! `domain::RawPropertyRecord`); a missing field or out-of-vocabulary
//! categorical label fails here with a schema-class error, before the
//! pipeline runs.

use std::fs::File;
use std::path::Path;

use crate::domain::RawPropertyRecord;
use crate::error::AppError;

pub fn read_record_json(path: &Path) -> Result<RawPropertyRecord, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open record JSON '{}': {e}", path.display()))
    })?;
    let record: RawPropertyRecord = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid record JSON: {e}")))?;
    Ok(record)
}

/// Write a record as pretty JSON (used by `predict --sample --emit`).
pub fn write_record_json(path: &Path, record: &RawPropertyRecord) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create record JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, record)
        .map_err(|e| AppError::new(2, format!("Failed to write record JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_record_round_trips_through_a_file() {
        let dir = std::env::temp_dir().join("homeval-record-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.json");

        let record = RawPropertyRecord::sample();
        write_record_json(&path, &record).unwrap();
        let back = read_record_json(&path).unwrap();
        assert_eq!(back, record);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_a_schema_class_error() {
        let err = read_record_json(Path::new("/nonexistent/record.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
