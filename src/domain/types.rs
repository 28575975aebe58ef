//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - assembled from JSON or CSV at the input boundary
//! - validated and transformed in-memory during a prediction call
//! - echoed back in reports and exports
//!
//! Serde field/variant names match the wire labels of the D.C. residential
//! assessment dataset (`BATHRM`, `HF_BATHRM`, "Forced Air", ...), so a record
//! round-trips through JSON with the vocabulary the model was trained on.

use serde::{Deserialize, Serialize};

/// A categorical property attribute with a closed set of wire labels.
///
/// Categorical fields are valid by construction: the serde/`FromStr` parse
/// fails on any label outside the declared set, so a constructed value is
/// always in-domain.
pub trait Categorical: Sized + Copy + 'static {
    /// Wire field name (e.g. `"HEAT"`).
    const FIELD: &'static str;
    /// Every admissible value, in dataset order.
    const ALL: &'static [Self];

    /// Wire label for this value (e.g. `"Hot Water Rad"`).
    fn label(self) -> &'static str;
}

/// Parse a categorical label, reporting the admissible set on failure.
pub fn parse_label<T: Categorical>(s: &str) -> Result<T, String> {
    T::ALL
        .iter()
        .copied()
        .find(|v| v.label() == s)
        .ok_or_else(|| {
            let options: Vec<&str> = T::ALL.iter().map(|v| v.label()).collect();
            format!(
                "unknown {} value '{s}' (expected one of: {})",
                T::FIELD,
                options.join(", ")
            )
        })
}

/// All wire labels for a categorical field, in dataset order.
pub fn labels<T: Categorical>() -> Vec<&'static str> {
    T::ALL.iter().map(|v| v.label()).collect()
}

/// Heating type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heat {
    #[serde(rename = "Forced Air")]
    ForcedAir,
    #[serde(rename = "Hot Water Rad")]
    HotWaterRad,
    #[serde(rename = "Warm Cool")]
    WarmCool,
    #[serde(rename = "Ht Pump")]
    HtPump,
}

impl Categorical for Heat {
    const FIELD: &'static str = "HEAT";
    const ALL: &'static [Self] = &[Self::ForcedAir, Self::HotWaterRad, Self::WarmCool, Self::HtPump];

    fn label(self) -> &'static str {
        match self {
            Self::ForcedAir => "Forced Air",
            Self::HotWaterRad => "Hot Water Rad",
            Self::WarmCool => "Warm Cool",
            Self::HtPump => "Ht Pump",
        }
    }
}

/// Architectural style (stories).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "1 Story")]
    OneStory,
    #[serde(rename = "1.5 Story Fin")]
    OneHalfStoryFin,
    #[serde(rename = "2 Story")]
    TwoStory,
    #[serde(rename = "2.5 Story Fin")]
    TwoHalfStoryFin,
    #[serde(rename = "3 Story")]
    ThreeStory,
}

impl Categorical for Style {
    const FIELD: &'static str = "STYLE";
    const ALL: &'static [Self] = &[
        Self::OneStory,
        Self::OneHalfStoryFin,
        Self::TwoStory,
        Self::TwoHalfStoryFin,
        Self::ThreeStory,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::OneStory => "1 Story",
            Self::OneHalfStoryFin => "1.5 Story Fin",
            Self::TwoStory => "2 Story",
            Self::TwoHalfStoryFin => "2.5 Story Fin",
            Self::ThreeStory => "3 Story",
        }
    }
}

/// Interior wall finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntWall {
    Hardwood,
    #[serde(rename = "Hardwood/Carp")]
    HardwoodCarp,
    #[serde(rename = "Wood Floor")]
    WoodFloor,
    Carpet,
}

impl Categorical for IntWall {
    const FIELD: &'static str = "INTWALL";
    const ALL: &'static [Self] = &[Self::Hardwood, Self::HardwoodCarp, Self::WoodFloor, Self::Carpet];

    fn label(self) -> &'static str {
        match self {
            Self::Hardwood => "Hardwood",
            Self::HardwoodCarp => "Hardwood/Carp",
            Self::WoodFloor => "Wood Floor",
            Self::Carpet => "Carpet",
        }
    }
}

/// Exterior wall material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtWall {
    #[serde(rename = "Common Brick")]
    CommonBrick,
    #[serde(rename = "Brick/Siding")]
    BrickSiding,
    #[serde(rename = "Vinyl Siding")]
    VinylSiding,
    #[serde(rename = "Wood Siding")]
    WoodSiding,
    Stucco,
    #[serde(rename = "Face Brick")]
    FaceBrick,
}

impl Categorical for ExtWall {
    const FIELD: &'static str = "EXTWALL";
    const ALL: &'static [Self] = &[
        Self::CommonBrick,
        Self::BrickSiding,
        Self::VinylSiding,
        Self::WoodSiding,
        Self::Stucco,
        Self::FaceBrick,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::CommonBrick => "Common Brick",
            Self::BrickSiding => "Brick/Siding",
            Self::VinylSiding => "Vinyl Siding",
            Self::WoodSiding => "Wood Siding",
            Self::Stucco => "Stucco",
            Self::FaceBrick => "Face Brick",
        }
    }
}

/// Roof material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Roof {
    #[serde(rename = "Built Up")]
    BuiltUp,
    #[serde(rename = "Metal- Sms")]
    MetalSms,
    #[serde(rename = "Comp Shingle")]
    CompShingle,
    Slate,
    Neopren,
    Shake,
}

impl Categorical for Roof {
    const FIELD: &'static str = "ROOF";
    const ALL: &'static [Self] = &[
        Self::BuiltUp,
        Self::MetalSms,
        Self::CompShingle,
        Self::Slate,
        Self::Neopren,
        Self::Shake,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::BuiltUp => "Built Up",
            Self::MetalSms => "Metal- Sms",
            Self::CompShingle => "Comp Shingle",
            Self::Slate => "Slate",
            Self::Neopren => "Neopren",
            Self::Shake => "Shake",
        }
    }
}

/// Building structure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Structure {
    #[serde(rename = "Row Inside")]
    RowInside,
    Single,
    #[serde(rename = "Semi-Detached")]
    SemiDetached,
    #[serde(rename = "Row End")]
    RowEnd,
    Multi,
}

impl Categorical for Structure {
    const FIELD: &'static str = "STRUCT";
    const ALL: &'static [Self] = &[
        Self::RowInside,
        Self::Single,
        Self::SemiDetached,
        Self::RowEnd,
        Self::Multi,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::RowInside => "Row Inside",
            Self::Single => "Single",
            Self::SemiDetached => "Semi-Detached",
            Self::RowEnd => "Row End",
            Self::Multi => "Multi",
        }
    }
}

/// Assessment grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Average,
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Good Quality")]
    GoodQuality,
    #[serde(rename = "Very Good")]
    VeryGood,
    Superior,
    Excellent,
    #[serde(rename = "Exceptional-A")]
    ExceptionalA,
}

impl Categorical for Grade {
    const FIELD: &'static str = "GRADE";
    const ALL: &'static [Self] = &[
        Self::Average,
        Self::AboveAverage,
        Self::GoodQuality,
        Self::VeryGood,
        Self::Superior,
        Self::Excellent,
        Self::ExceptionalA,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Average => "Average",
            Self::AboveAverage => "Above Average",
            Self::GoodQuality => "Good Quality",
            Self::VeryGood => "Very Good",
            Self::Superior => "Superior",
            Self::Excellent => "Excellent",
            Self::ExceptionalA => "Exceptional-A",
        }
    }
}

/// Administrative ward (location feature; D.C. has eight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ward {
    #[serde(rename = "Ward 1")]
    Ward1,
    #[serde(rename = "Ward 2")]
    Ward2,
    #[serde(rename = "Ward 3")]
    Ward3,
    #[serde(rename = "Ward 4")]
    Ward4,
    #[serde(rename = "Ward 5")]
    Ward5,
    #[serde(rename = "Ward 6")]
    Ward6,
    #[serde(rename = "Ward 7")]
    Ward7,
    #[serde(rename = "Ward 8")]
    Ward8,
}

impl Categorical for Ward {
    const FIELD: &'static str = "WARD";
    const ALL: &'static [Self] = &[
        Self::Ward1,
        Self::Ward2,
        Self::Ward3,
        Self::Ward4,
        Self::Ward5,
        Self::Ward6,
        Self::Ward7,
        Self::Ward8,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Ward1 => "Ward 1",
            Self::Ward2 => "Ward 2",
            Self::Ward3 => "Ward 3",
            Self::Ward4 => "Ward 4",
            Self::Ward5 => "Ward 5",
            Self::Ward6 => "Ward 6",
            Self::Ward7 => "Ward 7",
            Self::Ward8 => "Ward 8",
        }
    }
}

/// The 23 user-adjustable attributes of one residential property.
///
/// Constructed fresh per prediction request, immutable once built, and
/// discarded after the pipeline call returns. Categorical fields cannot hold
/// out-of-domain values; numeric ranges are enforced by `schema::validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPropertyRecord {
    #[serde(rename = "ROOMS")]
    pub rooms: u32,
    #[serde(rename = "BEDRM")]
    pub bedrm: u32,
    #[serde(rename = "BATHRM")]
    pub bathrm: u32,
    #[serde(rename = "HF_BATHRM")]
    pub hf_bathrm: u32,
    #[serde(rename = "KITCHENS")]
    pub kitchens: u32,
    #[serde(rename = "FIREPLACES")]
    pub fireplaces: u32,
    #[serde(rename = "AC")]
    pub ac: bool,
    #[serde(rename = "RMDL")]
    pub rmdl: bool,
    #[serde(rename = "HEAT")]
    pub heat: Heat,
    #[serde(rename = "STYLE")]
    pub style: Style,
    #[serde(rename = "INTWALL")]
    pub intwall: IntWall,
    #[serde(rename = "EXTWALL")]
    pub extwall: ExtWall,
    #[serde(rename = "ROOF")]
    pub roof: Roof,
    #[serde(rename = "STRUCT")]
    pub structure: Structure,
    #[serde(rename = "GRADE")]
    pub grade: Grade,
    #[serde(rename = "WARD")]
    pub ward: Ward,
    #[serde(rename = "AYB")]
    pub ayb: u32,
    #[serde(rename = "EYB")]
    pub eyb: u32,
    #[serde(rename = "GBA")]
    pub gba: u32,
    #[serde(rename = "LANDAREA")]
    pub landarea: u32,
    #[serde(rename = "CNDTN")]
    pub cndtn: u32,
    #[serde(rename = "SALE_NUM")]
    pub sale_num: u32,
    #[serde(rename = "SALEYEAR")]
    pub saleyear: u32,
}

impl RawPropertyRecord {
    /// A representative mid-market record (the dataset's default property:
    /// a 1935 two-story single in Ward 3, sold in 2017).
    pub fn sample() -> Self {
        Self {
            rooms: 3,
            bedrm: 3,
            bathrm: 2,
            hf_bathrm: 1,
            kitchens: 1,
            fireplaces: 0,
            ac: false,
            rmdl: false,
            heat: Heat::ForcedAir,
            style: Style::TwoStory,
            intwall: IntWall::Hardwood,
            extwall: ExtWall::BrickSiding,
            roof: Roof::CompShingle,
            structure: Structure::Single,
            grade: Grade::Average,
            ward: Ward::Ward3,
            ayb: 1935,
            eyb: 1972,
            gba: 1577,
            landarea: 2736,
            cndtn: 4,
            sale_num: 1,
            saleyear: 2017,
        }
    }
}

/// A price estimate wrapped in its prediction interval.
///
/// `lower = point - K` and `upper = point + K` for the calibrated interval
/// half-width `K`; all three values are in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub lower: f64,
    pub point: f64,
    pub upper: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_label_accepts_exact_wire_labels() {
        assert_eq!(parse_label::<Heat>("Hot Water Rad").unwrap(), Heat::HotWaterRad);
        assert_eq!(parse_label::<Roof>("Metal- Sms").unwrap(), Roof::MetalSms);
        assert_eq!(parse_label::<Grade>("Exceptional-A").unwrap(), Grade::ExceptionalA);
    }

    #[test]
    fn parse_label_rejects_unknown_and_names_field() {
        let err = parse_label::<Ward>("Ward 9").unwrap_err();
        assert!(err.contains("WARD"));
        assert!(err.contains("Ward 9"));
        assert!(err.contains("Ward 8"));
    }

    #[test]
    fn record_round_trips_through_json_with_wire_names() {
        let record = RawPropertyRecord::sample();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"HF_BATHRM\":1"));
        assert!(json.contains("\"HEAT\":\"Forced Air\""));
        assert!(json.contains("\"STRUCT\":\"Single\""));
        let back: RawPropertyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn serde_rejects_out_of_domain_label() {
        let mut json = serde_json::to_value(RawPropertyRecord::sample()).unwrap();
        json["ROOF"] = serde_json::Value::String("Thatch".to_string());
        assert!(serde_json::from_value::<RawPropertyRecord>(json).is_err());
    }
}
