//! Write scored batch results as CSV.

use std::path::Path;

use crate::domain::Categorical;
use crate::error::AppError;
use crate::io::batch::ScoredRow;

/// Export one row per scored record: the key identifying fields plus the
/// priced interval, rounded to whole dollars.
pub fn write_results_csv(path: &Path, scored: &[ScoredRow]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::new(2, format!("Failed to create results CSV '{}': {e}", path.display()))
    })?;

    writer
        .write_record([
            "line", "WARD", "STRUCT", "GRADE", "GBA", "SALEYEAR", "lower", "point", "upper",
        ])
        .map_err(|e| AppError::new(2, format!("Failed to write results CSV: {e}")))?;

    for row in scored {
        writer
            .write_record([
                row.line.to_string(),
                row.record.ward.label().to_string(),
                row.record.structure.label().to_string(),
                row.record.grade.label().to_string(),
                row.record.gba.to_string(),
                row.record.saleyear.to_string(),
                format!("{:.0}", row.result.lower),
                format!("{:.0}", row.result.point),
                format!("{:.0}", row.result.upper),
            ])
            .map_err(|e| AppError::new(2, format!("Failed to write results CSV: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush results CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PredictionResult, RawPropertyRecord};

    #[test]
    fn writes_header_and_one_row_per_record() {
        let dir = std::env::temp_dir().join("homeval-export-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("results.csv");

        let scored = vec![ScoredRow {
            line: 2,
            record: RawPropertyRecord::sample(),
            result: PredictionResult {
                lower: 248_165.22,
                point: 600_000.0,
                upper: 951_834.78,
            },
        }];
        write_results_csv(&path, &scored).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert!(lines.next().unwrap().starts_with("line,WARD"));
        let row = lines.next().unwrap();
        assert!(row.contains("Ward 3"));
        assert!(row.contains("600000"));
        assert!(row.contains("248165"));

        std::fs::remove_file(&path).ok();
    }
}
