//! Feature engineering: validated record -> estimator input vector.
//!
//! The transform is pure and total over validated records: there is no
//! failure path once `schema::validate` has passed (in particular
//! `ROOMS >= 1`, so the square-feet-per-room division is always defined).

use crate::domain::{Categorical, ExtWall, Grade, Heat, IntWall, Roof, Structure, Style, Ward};
use crate::schema::ValidRecord;

/// The engineered feature vector, one per prediction call.
///
/// Field declaration order is the trained-column order; `COLUMNS` and
/// `values()` iterate in exactly this order. This is the binding contract
/// with the estimator: if the model is retrained with a different column
/// set, both `COLUMNS` and the artifact must change in lock-step (artifact
/// loading verifies the match).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub bathrm: u32,
    pub hf_bathrm: u32,
    pub heat: Heat,
    pub ac: bool,
    pub bedrm: u32,
    pub sale_num: u32,
    /// `SALEYEAR - AYB`, unclamped.
    pub ayb_saleyear_diff: i64,
    /// `max(0, SALEYEAR - EYB)`; clamped so an effective-built year recorded
    /// after the sale year cannot inject a negative age.
    pub eyb_saleyear_diff: i64,
    pub gba: u32,
    pub style: Style,
    pub structure: Structure,
    pub grade: Grade,
    pub cndtn: u32,
    pub extwall: ExtWall,
    pub roof: Roof,
    pub intwall: IntWall,
    pub kitchens: u32,
    pub fireplaces: u32,
    pub landarea: u32,
    pub ward: Ward,
    pub saleyear: u32,
    pub rmdl: bool,
    /// `GBA / ROOMS` in square feet per room.
    pub sqft_rooms: f64,
}

/// A single feature value as the estimator sees it.
///
/// Categorical fields pass through as their wire label; mapping labels to
/// numbers is the estimator's encoding step, not ours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Label(&'static str),
}

impl FeatureVector {
    /// Trained-column names, in training order.
    pub const COLUMNS: [&'static str; 23] = [
        "BATHRM",
        "HF_BATHRM",
        "HEAT",
        "AC",
        "BEDRM",
        "SALE_NUM",
        "AYB_SALEYEAR_DIFF",
        "EYB_SALEYEAR_DIFF",
        "GBA",
        "STYLE",
        "STRUCT",
        "GRADE",
        "CNDTN",
        "EXTWALL",
        "ROOF",
        "INTWALL",
        "KITCHENS",
        "FIREPLACES",
        "LANDAREA",
        "WARD",
        "SALEYEAR",
        "RMDL",
        "SQFT_ROOMS",
    ];

    /// All `(column, value)` pairs in training order.
    pub fn values(&self) -> [(&'static str, FeatureValue); 23] {
        use FeatureValue::{Label, Number};
        [
            ("BATHRM", Number(f64::from(self.bathrm))),
            ("HF_BATHRM", Number(f64::from(self.hf_bathrm))),
            ("HEAT", Label(self.heat.label())),
            ("AC", Number(if self.ac { 1.0 } else { 0.0 })),
            ("BEDRM", Number(f64::from(self.bedrm))),
            ("SALE_NUM", Number(f64::from(self.sale_num))),
            ("AYB_SALEYEAR_DIFF", Number(self.ayb_saleyear_diff as f64)),
            ("EYB_SALEYEAR_DIFF", Number(self.eyb_saleyear_diff as f64)),
            ("GBA", Number(f64::from(self.gba))),
            ("STYLE", Label(self.style.label())),
            ("STRUCT", Label(self.structure.label())),
            ("GRADE", Label(self.grade.label())),
            ("CNDTN", Number(f64::from(self.cndtn))),
            ("EXTWALL", Label(self.extwall.label())),
            ("ROOF", Label(self.roof.label())),
            ("INTWALL", Label(self.intwall.label())),
            ("KITCHENS", Number(f64::from(self.kitchens))),
            ("FIREPLACES", Number(f64::from(self.fireplaces))),
            ("LANDAREA", Number(f64::from(self.landarea))),
            ("WARD", Label(self.ward.label())),
            ("SALEYEAR", Number(f64::from(self.saleyear))),
            ("RMDL", Number(if self.rmdl { 1.0 } else { 0.0 })),
            ("SQFT_ROOMS", Number(self.sqft_rooms)),
        ]
    }
}

/// Derive the estimator's feature vector from a validated record.
///
/// Every raw field except `ROOMS` carries over; `ROOMS` only enters through
/// the derived `SQFT_ROOMS` density.
pub fn engineer(record: ValidRecord<'_>) -> FeatureVector {
    let r = record.record();

    let saleyear = i64::from(r.saleyear);
    let ayb_saleyear_diff = saleyear - i64::from(r.ayb);
    let eyb_saleyear_diff = (saleyear - i64::from(r.eyb)).max(0);
    let sqft_rooms = f64::from(r.gba) / f64::from(r.rooms);

    FeatureVector {
        bathrm: r.bathrm,
        hf_bathrm: r.hf_bathrm,
        heat: r.heat,
        ac: r.ac,
        bedrm: r.bedrm,
        sale_num: r.sale_num,
        ayb_saleyear_diff,
        eyb_saleyear_diff,
        gba: r.gba,
        style: r.style,
        structure: r.structure,
        grade: r.grade,
        cndtn: r.cndtn,
        extwall: r.extwall,
        roof: r.roof,
        intwall: r.intwall,
        kitchens: r.kitchens,
        fireplaces: r.fireplaces,
        landarea: r.landarea,
        ward: r.ward,
        saleyear: r.saleyear,
        rmdl: r.rmdl,
        sqft_rooms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawPropertyRecord;
    use crate::schema;

    fn engineered(record: &RawPropertyRecord) -> FeatureVector {
        engineer(schema::validate(record).unwrap())
    }

    #[test]
    fn derives_year_diffs_and_room_density() {
        let record = RawPropertyRecord::sample();
        let features = engineered(&record);

        assert_eq!(features.ayb_saleyear_diff, 82); // 2017 - 1935
        assert_eq!(features.eyb_saleyear_diff, 45); // 2017 - 1972
        assert!((features.sqft_rooms - 1577.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn eyb_diff_clamps_to_zero_when_sale_precedes_improvement() {
        let mut record = RawPropertyRecord::sample();
        record.saleyear = 2010;
        record.eyb = 2015;
        let features = engineered(&record);
        assert_eq!(features.eyb_saleyear_diff, 0);

        // Boundary: equal years yield zero without clamping.
        record.saleyear = 2015;
        assert_eq!(engineered(&record).eyb_saleyear_diff, 0);
    }

    #[test]
    fn ayb_diff_is_not_clamped() {
        let mut record = RawPropertyRecord::sample();
        record.ayb = 2018;
        record.saleyear = 2010;
        assert_eq!(engineered(&record).ayb_saleyear_diff, -8);
    }

    #[test]
    fn engineer_is_deterministic() {
        let record = RawPropertyRecord::sample();
        assert_eq!(engineered(&record), engineered(&record));
    }

    #[test]
    fn values_follow_trained_column_order() {
        let features = engineered(&RawPropertyRecord::sample());
        let values = features.values();
        for (pair, column) in values.iter().zip(FeatureVector::COLUMNS.iter()) {
            assert_eq!(pair.0, *column);
        }
        assert_eq!(values[2].1, FeatureValue::Label("Forced Air"));
        assert_eq!(values[22].0, "SQFT_ROOMS");
    }

    #[test]
    fn room_column_is_absent() {
        assert!(!FeatureVector::COLUMNS.contains(&"ROOMS"));
    }
}
