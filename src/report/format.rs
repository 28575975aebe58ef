//! Formatted terminal output: the price message, record echo, schema table,
//! and batch summary.

use crate::domain::{Categorical, PredictionResult, RawPropertyRecord};
use crate::io::batch::{RowError, ScoredRow};
use crate::schema::FieldInfo;

/// Lower bounds under this floor are suppressed from the message: a
/// non-positive or implausibly low figure is noise to a reader, so only
/// the upper bound is shown. The floor itself still shows the full range.
pub const FULL_RANGE_FLOOR: f64 = 100_000.0;

/// Format a dollar amount as whole dollars with thousands separators.
///
/// Fractional cents are truncated toward zero, matching how the figures
/// are quoted to users.
pub fn format_usd(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// The user-facing price message, applying the display policy.
pub fn format_prediction(result: &PredictionResult) -> String {
    let point = format_usd(result.point);
    let upper = format_usd(result.upper);

    if result.lower >= FULL_RANGE_FLOOR {
        let lower = format_usd(result.lower);
        format!(
            "Based on the features, the price of the property is {point}. \
             This type of house typically sold from {lower} up to {upper}."
        )
    } else {
        format!(
            "Based on the features, the price of the property is {point}. \
             This type of house typically sold up to {upper}."
        )
    }
}

/// Echo the record being scored, one field per line in input order.
pub fn format_record(record: &RawPropertyRecord) -> String {
    let yn = |flag: bool| if flag { "yes" } else { "no" };
    let rows: [(&str, String); 23] = [
        ("ROOMS", record.rooms.to_string()),
        ("BEDRM", record.bedrm.to_string()),
        ("BATHRM", record.bathrm.to_string()),
        ("HF_BATHRM", record.hf_bathrm.to_string()),
        ("KITCHENS", record.kitchens.to_string()),
        ("FIREPLACES", record.fireplaces.to_string()),
        ("AC", yn(record.ac).to_string()),
        ("RMDL", yn(record.rmdl).to_string()),
        ("HEAT", record.heat.label().to_string()),
        ("STYLE", record.style.label().to_string()),
        ("INTWALL", record.intwall.label().to_string()),
        ("EXTWALL", record.extwall.label().to_string()),
        ("ROOF", record.roof.label().to_string()),
        ("STRUCT", record.structure.label().to_string()),
        ("GRADE", record.grade.label().to_string()),
        ("WARD", record.ward.label().to_string()),
        ("AYB", record.ayb.to_string()),
        ("EYB", record.eyb.to_string()),
        ("GBA", record.gba.to_string()),
        ("LANDAREA", record.landarea.to_string()),
        ("CNDTN", record.cndtn.to_string()),
        ("SALE_NUM", record.sale_num.to_string()),
        ("SALEYEAR", record.saleyear.to_string()),
    ];

    let mut out = String::new();
    out.push_str("=== Property record ===\n");
    for (field, value) in rows {
        out.push_str(&format!("{field:<12} {value}\n"));
    }
    out
}

/// The printable field schema.
pub fn format_schema(rows: &[FieldInfo]) -> String {
    let mut out = String::new();
    out.push_str("=== Input field schema (23 fields) ===\n");
    for row in rows {
        out.push_str(&format!("{:<12} {:<12} {}\n", row.field, row.kind, row.domain));
    }
    out
}

/// Summarize a batch run: counts, per-row prices, then row errors.
pub fn format_batch_summary(scored: &[ScoredRow], errors: &[RowError], rows_read: usize) -> String {
    let mut out = String::new();
    out.push_str("=== Batch scoring ===\n");
    out.push_str(&format!(
        "Rows read: {rows_read}  scored: {}  rejected: {}\n",
        scored.len(),
        errors.len()
    ));

    for row in scored {
        out.push_str(&format!(
            "line {:<5} {:<8} {:<10} point {}  range {} - {}\n",
            row.line,
            row.record.ward.label(),
            row.record.grade.label(),
            format_usd(row.result.point),
            format_usd(row.result.lower),
            format_usd(row.result.upper),
        ));
    }

    if !errors.is_empty() {
        out.push_str("--- rejected rows ---\n");
        for err in errors {
            out.push_str(&format!("line {:<5} {}\n", err.line, err.message));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(point: f64, half_width: f64) -> PredictionResult {
        PredictionResult {
            lower: point - half_width,
            point,
            upper: point + half_width,
        }
    }

    #[test]
    fn format_usd_groups_thousands_and_truncates() {
        assert_eq!(format_usd(248_165.22), "$248,165");
        assert_eq!(format_usd(951_834.78), "$951,834");
        assert_eq!(format_usd(600_000.0), "$600,000");
        assert_eq!(format_usd(999.0), "$999");
        assert_eq!(format_usd(-96_000.5), "-$96,000");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn full_range_shown_when_lower_bound_is_meaningful() {
        let message = format_prediction(&result(600_000.0, 351_834.78));
        assert!(message.contains("$600,000"));
        assert!(message.contains("from $248,165 up to $951,834"));
    }

    #[test]
    fn low_lower_bound_shows_upper_only() {
        let message = format_prediction(&result(400_000.0, 351_834.78));
        assert!(!message.contains("from $"));
        assert!(message.contains("up to $751,834"));
    }

    #[test]
    fn full_range_floor_is_inclusive() {
        let at_floor = PredictionResult {
            lower: 100_000.0,
            point: 451_834.78,
            upper: 803_669.56,
        };
        assert!(format_prediction(&at_floor).contains("from $100,000"));

        let below_floor = PredictionResult {
            lower: 99_999.99,
            point: 451_834.77,
            upper: 803_669.55,
        };
        assert!(!format_prediction(&below_floor).contains("from $"));
    }

    #[test]
    fn record_echo_lists_every_field() {
        let echo = format_record(&RawPropertyRecord::sample());
        for field in [
            "ROOMS", "HF_BATHRM", "HEAT", "STRUCT", "GRADE", "WARD", "SALEYEAR",
        ] {
            assert!(echo.contains(field), "missing {field}");
        }
        assert!(echo.contains("Brick/Siding"));
    }

    #[test]
    fn batch_summary_reports_counts_and_errors() {
        let errors = vec![RowError {
            line: 4,
            message: "invalid ROOMS: 0 is outside [1, 6]".to_string(),
        }];
        let summary = format_batch_summary(&[], &errors, 1);
        assert!(summary.contains("scored: 0"));
        assert!(summary.contains("rejected: 1"));
        assert!(summary.contains("line 4"));
        assert!(summary.contains("ROOMS"));
    }
}
