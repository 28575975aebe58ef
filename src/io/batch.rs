//! CSV batch ingest.
//!
//! Turns a CSV of property rows into `RawPropertyRecord`s that are safe to
//! hand to the pipeline.
//!
//! Design goals:
//!
//! - **Strict header schema**: all 23 wire columns must be present (clear
//!   error, exit code 2)
//! - **Row-level validation**: a bad row is reported with its line number
//!   and skipped; the remaining rows are still scored
//! - **Deterministic behavior**: rows are processed in file order

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{
    Categorical, ExtWall, Grade, Heat, IntWall, PredictionResult, RawPropertyRecord, Roof,
    Structure, Style, Ward, parse_label,
};
use crate::error::AppError;

/// A row-level error encountered during ingest or scoring.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// One successfully parsed row, tagged with its CSV line number.
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub line: usize,
    pub record: RawPropertyRecord,
}

/// One scored row of a batch run.
#[derive(Debug, Clone)]
pub struct ScoredRow {
    pub line: usize,
    pub record: RawPropertyRecord,
    pub result: PredictionResult,
}

/// Ingest output: parsed rows plus whatever went wrong, row by row.
#[derive(Debug, Clone)]
pub struct BatchInput {
    pub rows: Vec<ParsedRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

const REQUIRED_COLUMNS: [&str; 23] = [
    "ROOMS",
    "BEDRM",
    "BATHRM",
    "HF_BATHRM",
    "KITCHENS",
    "FIREPLACES",
    "AC",
    "RMDL",
    "HEAT",
    "STYLE",
    "INTWALL",
    "EXTWALL",
    "ROOF",
    "STRUCT",
    "GRADE",
    "WARD",
    "AYB",
    "EYB",
    "GBA",
    "LANDAREA",
    "CNDTN",
    "SALE_NUM",
    "SALEYEAR",
];

/// Load property records from a CSV file.
pub fn load_records(path: &Path) -> Result<BatchInput, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because records() starts after the header row and CSV line
        // numbers are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(parsed) => rows.push(ParsedRow { line, record: parsed }),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    Ok(BatchInput {
        rows,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_string(), i))
        .collect()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !header_map.contains_key(*c))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::new(
            2,
            format!("CSV is missing required column(s): {}", missing.join(", ")),
        ));
    }
    Ok(())
}

fn cell<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    column: &str,
) -> Result<&'a str, String> {
    let idx = *header_map.get(column).ok_or_else(|| format!("missing column {column}"))?;
    record.get(idx).ok_or_else(|| format!("row is too short for column {column}"))
}

fn parse_u32(record: &StringRecord, header_map: &HashMap<String, usize>, column: &str) -> Result<u32, String> {
    let raw = cell(record, header_map, column)?;
    raw.parse::<u32>()
        .map_err(|_| format!("invalid {column}: '{raw}' is not a non-negative integer"))
}

fn parse_bool(record: &StringRecord, header_map: &HashMap<String, usize>, column: &str) -> Result<bool, String> {
    let raw = cell(record, header_map, column)?;
    match raw {
        "0" | "false" | "N" => Ok(false),
        "1" | "true" | "Y" => Ok(true),
        _ => Err(format!("invalid {column}: '{raw}' is not a 0/1 flag")),
    }
}

fn parse_category<T: Categorical>(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<T, String> {
    parse_label::<T>(cell(record, header_map, T::FIELD)?)
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<RawPropertyRecord, String> {
    Ok(RawPropertyRecord {
        rooms: parse_u32(record, header_map, "ROOMS")?,
        bedrm: parse_u32(record, header_map, "BEDRM")?,
        bathrm: parse_u32(record, header_map, "BATHRM")?,
        hf_bathrm: parse_u32(record, header_map, "HF_BATHRM")?,
        kitchens: parse_u32(record, header_map, "KITCHENS")?,
        fireplaces: parse_u32(record, header_map, "FIREPLACES")?,
        ac: parse_bool(record, header_map, "AC")?,
        rmdl: parse_bool(record, header_map, "RMDL")?,
        heat: parse_category::<Heat>(record, header_map)?,
        style: parse_category::<Style>(record, header_map)?,
        intwall: parse_category::<IntWall>(record, header_map)?,
        extwall: parse_category::<ExtWall>(record, header_map)?,
        roof: parse_category::<Roof>(record, header_map)?,
        structure: parse_category::<Structure>(record, header_map)?,
        grade: parse_category::<Grade>(record, header_map)?,
        ward: parse_category::<Ward>(record, header_map)?,
        ayb: parse_u32(record, header_map, "AYB")?,
        eyb: parse_u32(record, header_map, "EYB")?,
        gba: parse_u32(record, header_map, "GBA")?,
        landarea: parse_u32(record, header_map, "LANDAREA")?,
        cndtn: parse_u32(record, header_map, "CNDTN")?,
        sale_num: parse_u32(record, header_map, "SALE_NUM")?,
        saleyear: parse_u32(record, header_map, "SALEYEAR")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "ROOMS,BEDRM,BATHRM,HF_BATHRM,KITCHENS,FIREPLACES,AC,RMDL,HEAT,STYLE,INTWALL,EXTWALL,ROOF,STRUCT,GRADE,WARD,AYB,EYB,GBA,LANDAREA,CNDTN,SALE_NUM,SALEYEAR";
    const SAMPLE_ROW: &str = "3,3,2,1,1,0,0,0,Forced Air,2 Story,Hardwood,Brick/Siding,Comp Shingle,Single,Average,Ward 3,1935,1972,1577,2736,4,1,2017";

    fn write_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("homeval-batch-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();
        path
    }

    #[test]
    fn parses_a_well_formed_row() {
        let path = write_csv("ok.csv", &format!("{HEADER}\n{SAMPLE_ROW}\n"));
        let batch = load_records(&path).unwrap();
        assert_eq!(batch.rows_read, 1);
        assert_eq!(batch.rows.len(), 1);
        assert!(batch.row_errors.is_empty());
        assert_eq!(batch.rows[0].record, RawPropertyRecord::sample());
        assert_eq!(batch.rows[0].line, 2);
    }

    #[test]
    fn missing_column_fails_up_front() {
        let header = HEADER.replace("WARD,", "");
        let path = write_csv("missing-col.csv", &format!("{header}\n"));
        let err = load_records(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("WARD"));
    }

    #[test]
    fn bad_label_is_a_row_error_and_other_rows_survive() {
        let bad = SAMPLE_ROW.replace("Ward 3", "Ward 9");
        let path = write_csv("bad-label.csv", &format!("{HEADER}\n{bad}\n{SAMPLE_ROW}\n"));
        let batch = load_records(&path).unwrap();
        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.row_errors.len(), 1);
        assert_eq!(batch.row_errors[0].line, 2);
        assert!(batch.row_errors[0].message.contains("Ward 9"));
    }

    #[test]
    fn non_numeric_count_is_a_row_error() {
        let bad = SAMPLE_ROW.replacen("3,", "three,", 1);
        let path = write_csv("bad-count.csv", &format!("{HEADER}\n{bad}\n"));
        let batch = load_records(&path).unwrap();
        assert!(batch.rows.is_empty());
        assert!(batch.row_errors[0].message.contains("ROOMS"));
    }
}
