//! Field schema: declared domains for every raw input field.
//!
//! Responsibilities:
//!
//! - declare the closed numeric range for each count/year/area field as data,
//!   so it can be both enforced and printed
//! - `validate` a raw record into a `ValidRecord`, the only input the
//!   feature engineering step accepts
//! - `describe` the full 23-field schema for the `schema` subcommand
//!
//! Categorical fields need no runtime range check: their enum types cannot
//! hold a label outside the declared set (see `domain::Categorical`).

use crate::domain::{
    Categorical, ExtWall, Grade, Heat, IntWall, RawPropertyRecord, Roof, Structure, Style, Ward,
    labels,
};
use crate::error::AppError;

/// A closed integer range for one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntDomain {
    pub field: &'static str,
    pub min: u32,
    pub max: u32,
}

impl IntDomain {
    const fn new(field: &'static str, min: u32, max: u32) -> Self {
        Self { field, min, max }
    }

    fn check(&self, value: u32) -> Result<(), AppError> {
        if value < self.min || value > self.max {
            return Err(AppError::schema_violation(
                self.field,
                format!("{value} is outside [{}, {}]", self.min, self.max),
            ));
        }
        Ok(())
    }
}

pub const ROOMS: IntDomain = IntDomain::new("ROOMS", 1, 6);
pub const BEDRM: IntDomain = IntDomain::new("BEDRM", 1, 6);
pub const BATHRM: IntDomain = IntDomain::new("BATHRM", 0, 6);
pub const HF_BATHRM: IntDomain = IntDomain::new("HF_BATHRM", 0, 2);
pub const KITCHENS: IntDomain = IntDomain::new("KITCHENS", 0, 4);
pub const FIREPLACES: IntDomain = IntDomain::new("FIREPLACES", 0, 1);
pub const AYB: IntDomain = IntDomain::new("AYB", 1914, 2018);
pub const EYB: IntDomain = IntDomain::new("EYB", 1964, 2018);
pub const GBA: IntDomain = IntDomain::new("GBA", 1204, 1800);
pub const LANDAREA: IntDomain = IntDomain::new("LANDAREA", 1425, 3460);
pub const CNDTN: IntDomain = IntDomain::new("CNDTN", 1, 6);
pub const SALE_NUM: IntDomain = IntDomain::new("SALE_NUM", 1, 5);
pub const SALEYEAR: IntDomain = IntDomain::new("SALEYEAR", 2010, 2018);

/// A record that passed domain validation.
///
/// This is a borrow-only proof token: `features::engineer` accepts nothing
/// else, so a prediction can never be computed from an unvalidated record.
#[derive(Debug, Clone, Copy)]
pub struct ValidRecord<'a>(&'a RawPropertyRecord);

impl<'a> ValidRecord<'a> {
    pub fn record(self) -> &'a RawPropertyRecord {
        self.0
    }
}

/// Check every numeric field against its declared domain.
///
/// The first out-of-domain field aborts validation with an error naming the
/// field, its value, and the allowed range.
pub fn validate(record: &RawPropertyRecord) -> Result<ValidRecord<'_>, AppError> {
    ROOMS.check(record.rooms)?;
    BEDRM.check(record.bedrm)?;
    BATHRM.check(record.bathrm)?;
    HF_BATHRM.check(record.hf_bathrm)?;
    KITCHENS.check(record.kitchens)?;
    FIREPLACES.check(record.fireplaces)?;
    AYB.check(record.ayb)?;
    EYB.check(record.eyb)?;
    GBA.check(record.gba)?;
    LANDAREA.check(record.landarea)?;
    CNDTN.check(record.cndtn)?;
    SALE_NUM.check(record.sale_num)?;
    SALEYEAR.check(record.saleyear)?;
    Ok(ValidRecord(record))
}

/// One row of the printable schema description.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    pub field: &'static str,
    pub kind: &'static str,
    pub domain: String,
}

/// Describe all 23 fields in input order.
pub fn describe() -> Vec<FieldInfo> {
    fn int(d: IntDomain) -> FieldInfo {
        FieldInfo {
            field: d.field,
            kind: "integer",
            domain: format!("[{}, {}]", d.min, d.max),
        }
    }

    fn flag(field: &'static str) -> FieldInfo {
        FieldInfo {
            field,
            kind: "boolean",
            domain: "true | false".to_string(),
        }
    }

    fn category<T: Categorical>() -> FieldInfo {
        FieldInfo {
            field: T::FIELD,
            kind: "categorical",
            domain: labels::<T>().join(" | "),
        }
    }

    vec![
        int(ROOMS),
        int(BEDRM),
        int(BATHRM),
        int(HF_BATHRM),
        int(KITCHENS),
        int(FIREPLACES),
        flag("AC"),
        flag("RMDL"),
        category::<Heat>(),
        category::<Style>(),
        category::<IntWall>(),
        category::<ExtWall>(),
        category::<Roof>(),
        category::<Structure>(),
        category::<Grade>(),
        category::<Ward>(),
        int(AYB),
        int(EYB),
        int(GBA),
        int(LANDAREA),
        int(CNDTN),
        int(SALE_NUM),
        int(SALEYEAR),
    ]
}

/// The wire labels admitted for a categorical column, if `field` is one.
///
/// Used by artifact loading to verify categorical term coverage.
pub fn category_levels(field: &str) -> Option<Vec<&'static str>> {
    match field {
        "HEAT" => Some(labels::<Heat>()),
        "STYLE" => Some(labels::<Style>()),
        "INTWALL" => Some(labels::<IntWall>()),
        "EXTWALL" => Some(labels::<ExtWall>()),
        "ROOF" => Some(labels::<Roof>()),
        "STRUCT" => Some(labels::<Structure>()),
        "GRADE" => Some(labels::<Grade>()),
        "WARD" => Some(labels::<Ward>()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_record_is_valid() {
        let record = RawPropertyRecord::sample();
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn rooms_below_minimum_names_the_field() {
        let mut record = RawPropertyRecord::sample();
        record.rooms = 0;
        let err = validate(&record).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("ROOMS"));
        assert!(err.to_string().contains("[1, 6]"));
    }

    #[test]
    fn domain_bounds_are_inclusive() {
        let mut record = RawPropertyRecord::sample();
        record.ayb = 1914;
        record.saleyear = 2018;
        record.eyb = 2018;
        assert!(validate(&record).is_ok());

        record.ayb = 1913;
        assert!(validate(&record).is_err());
    }

    #[test]
    fn out_of_range_area_is_rejected() {
        let mut record = RawPropertyRecord::sample();
        record.gba = 1801;
        let err = validate(&record).unwrap_err();
        assert!(err.to_string().contains("GBA"));
    }

    #[test]
    fn describe_covers_all_23_fields() {
        let rows = describe();
        assert_eq!(rows.len(), 23);
        let ward = rows.iter().find(|r| r.field == "WARD").unwrap();
        assert!(ward.domain.contains("Ward 1"));
        assert!(ward.domain.contains("Ward 8"));
    }
}
