//! Reference catalog for Porondam marriage compatibility.
//!
//! This crate provides:
//! - The 27 nakshatras and 12 rashis with their lords and attributes
//! - Literal compatibility tables (yoni, gana, graha maitri)
//! - Positional classifications (rajju, vedha, vashya, varna, pakshi)
//! - Longitude to nakshatra/pada and rashi conversion
//!
//! Everything here is immutable static data and pure functions.

pub mod consistency;
pub mod error;
pub mod gana;
pub mod graha;
pub mod maitri;
pub mod matrix;
pub mod nadi;
pub mod nakshatra;
pub mod pakshi;
pub mod rajju;
pub mod rashi;
pub mod util;
pub mod varna;
pub mod vashya;
pub mod vedha;
pub mod yoni;

pub use consistency::{ensure_catalog, verify_catalog};
pub use error::CatalogError;
pub use gana::{ALL_GANAS, GANA_MATRIX, Gana, gana_score};
pub use graha::{ALL_GRAHAS, Graha};
pub use maitri::{GRAHA_MAITRI, Maitri, graha_maitri};
pub use matrix::{CompatibilityMatrix, MatrixClass, MatrixRow};
pub use nadi::{ALL_NADIS, Nadi};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_CATALOG, NAKSHATRA_COUNT, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo,
    NakshatraRecord, PADA_SPAN, RashiPart, nakshatra_count, nakshatra_from_longitude,
    nakshatra_from_rashi, nakshatra_record, validate_pada,
};
pub use pakshi::{ALL_PAKSHIS, Pakshi, pakshi_of};
pub use rajju::{NAKSHATRA_RAJJU, Rajju, rajju_of};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_CATALOG, RASHI_COUNT, RASHI_SPAN, Rashi, RashiInfo, RashiRecord,
    deg_to_dms, rashi_from_longitude, rashi_record,
};
pub use util::normalize_360;
pub use varna::{Varna, varna_of};
pub use vashya::{Vashya, vashya_compatible, vashya_of};
pub use vedha::{VEDHA_PAIRS, is_vedha};
pub use yoni::{ALL_YONIS, YONI_MATRIX, Yoni, YoniGender, yoni_score};
