//! Nakshatra (lunar mansion) catalog and longitude conversion.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, and each nakshatra into 4 padas of 3 deg 20'.
//! Every nakshatra carries the fixed attributes Porondam matching reads:
//! ruling graha, gana, yoni (with its polarity) and nadi.

use serde::Serialize;

use crate::error::CatalogError;
use crate::gana::Gana;
use crate::graha::Graha;
use crate::nadi::Nadi;
use crate::rashi::Rashi;
use crate::util::normalize_360;
use crate::yoni::{Yoni, YoniGender};

/// Number of nakshatras in the zodiac.
pub const NAKSHATRA_COUNT: u8 = 27;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Fixed attributes of one nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NakshatraRecord {
    pub nakshatra: Nakshatra,
    /// 1-based id (1 = Ashwini).
    pub id: u8,
    pub name: &'static str,
    pub sinhala: &'static str,
    /// Ruling graha.
    pub lord: Graha,
    pub gana: Gana,
    pub yoni: Yoni,
    pub yoni_gender: YoniGender,
    pub nadi: Nadi,
}

/// Nakshatra catalog, indexed by `id - 1`.
pub static NAKSHATRA_CATALOG: [NakshatraRecord; 27] = [
    NakshatraRecord {
        nakshatra: Nakshatra::Ashwini,
        id: 1,
        name: "Ashwini",
        sinhala: "අස්විද",
        lord: Graha::Ketu,
        gana: Gana::Deva,
        yoni: Yoni::Horse,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Vata,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Bharani,
        id: 2,
        name: "Bharani",
        sinhala: "බෙරණ",
        lord: Graha::Shukra,
        gana: Gana::Manushya,
        yoni: Yoni::Elephant,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Pitta,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Krittika,
        id: 3,
        name: "Krittika",
        sinhala: "කැති",
        lord: Graha::Surya,
        gana: Gana::Rakshasa,
        yoni: Yoni::Sheep,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Kapha,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Rohini,
        id: 4,
        name: "Rohini",
        sinhala: "රෙහෙණ",
        lord: Graha::Chandra,
        gana: Gana::Manushya,
        yoni: Yoni::Serpent,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Kapha,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Mrigashira,
        id: 5,
        name: "Mrigashira",
        sinhala: "මුවසිරස",
        lord: Graha::Mangal,
        gana: Gana::Deva,
        yoni: Yoni::Serpent,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Kapha,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Ardra,
        id: 6,
        name: "Ardra",
        sinhala: "අද",
        lord: Graha::Rahu,
        gana: Gana::Manushya,
        yoni: Yoni::Dog,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Vata,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Punarvasu,
        id: 7,
        name: "Punarvasu",
        sinhala: "පුනාවස",
        lord: Graha::Guru,
        gana: Gana::Deva,
        yoni: Yoni::Cat,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Vata,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Pushya,
        id: 8,
        name: "Pushya",
        sinhala: "පුස",
        lord: Graha::Shani,
        gana: Gana::Deva,
        yoni: Yoni::Goat,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Pitta,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Ashlesha,
        id: 9,
        name: "Ashlesha",
        sinhala: "අස්ලිස",
        lord: Graha::Buddh,
        gana: Gana::Rakshasa,
        yoni: Yoni::Cat,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Kapha,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Magha,
        id: 10,
        name: "Magha",
        sinhala: "මා",
        lord: Graha::Ketu,
        gana: Gana::Rakshasa,
        yoni: Yoni::Rat,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Kapha,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::PurvaPhalguni,
        id: 11,
        name: "Purva Phalguni",
        sinhala: "පුවපල්",
        lord: Graha::Shukra,
        gana: Gana::Manushya,
        yoni: Yoni::Rat,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Pitta,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::UttaraPhalguni,
        id: 12,
        name: "Uttara Phalguni",
        sinhala: "උත්‍රපල්",
        lord: Graha::Surya,
        gana: Gana::Manushya,
        yoni: Yoni::Cow,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Vata,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Hasta,
        id: 13,
        name: "Hasta",
        sinhala: "හත",
        lord: Graha::Chandra,
        gana: Gana::Deva,
        yoni: Yoni::Buffalo,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Vata,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Chitra,
        id: 14,
        name: "Chitra",
        sinhala: "සිත",
        lord: Graha::Mangal,
        gana: Gana::Rakshasa,
        yoni: Yoni::Tiger,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Pitta,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Swati,
        id: 15,
        name: "Swati",
        sinhala: "සා",
        lord: Graha::Rahu,
        gana: Gana::Deva,
        yoni: Yoni::Buffalo,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Kapha,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Vishakha,
        id: 16,
        name: "Vishakha",
        sinhala: "විසා",
        lord: Graha::Guru,
        gana: Gana::Rakshasa,
        yoni: Yoni::Tiger,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Kapha,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Anuradha,
        id: 17,
        name: "Anuradha",
        sinhala: "අනුර",
        lord: Graha::Shani,
        gana: Gana::Deva,
        yoni: Yoni::Deer,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Pitta,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Jyeshtha,
        id: 18,
        name: "Jyeshtha",
        sinhala: "දෙට",
        lord: Graha::Buddh,
        gana: Gana::Rakshasa,
        yoni: Yoni::Deer,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Vata,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Mula,
        id: 19,
        name: "Mula",
        sinhala: "මුල",
        lord: Graha::Ketu,
        gana: Gana::Rakshasa,
        yoni: Yoni::Dog,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Vata,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::PurvaAshadha,
        id: 20,
        name: "Purva Ashadha",
        sinhala: "පුවසල",
        lord: Graha::Shukra,
        gana: Gana::Manushya,
        yoni: Yoni::Monkey,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Pitta,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::UttaraAshadha,
        id: 21,
        name: "Uttara Ashadha",
        sinhala: "උත්‍රසල",
        lord: Graha::Surya,
        gana: Gana::Manushya,
        yoni: Yoni::Mongoose,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Kapha,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Shravana,
        id: 22,
        name: "Shravana",
        sinhala: "සවන",
        lord: Graha::Chandra,
        gana: Gana::Deva,
        yoni: Yoni::Monkey,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Kapha,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Dhanishtha,
        id: 23,
        name: "Dhanishta",
        sinhala: "දනිට",
        lord: Graha::Mangal,
        gana: Gana::Rakshasa,
        yoni: Yoni::Lion,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Pitta,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Shatabhisha,
        id: 24,
        name: "Shatabhisha",
        sinhala: "සියාවස",
        lord: Graha::Rahu,
        gana: Gana::Rakshasa,
        yoni: Yoni::Horse,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Vata,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::PurvaBhadrapada,
        id: 25,
        name: "Purva Bhadrapada",
        sinhala: "පුවපුටුප",
        lord: Graha::Guru,
        gana: Gana::Manushya,
        yoni: Yoni::Lion,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Vata,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::UttaraBhadrapada,
        id: 26,
        name: "Uttara Bhadrapada",
        sinhala: "උත්‍රපුටුප",
        lord: Graha::Shani,
        gana: Gana::Manushya,
        yoni: Yoni::Cow,
        yoni_gender: YoniGender::Female,
        nadi: Nadi::Pitta,
    },
    NakshatraRecord {
        nakshatra: Nakshatra::Revati,
        id: 27,
        name: "Revati",
        sinhala: "රේවති",
        lord: Graha::Buddh,
        gana: Gana::Deva,
        yoni: Yoni::Elephant,
        yoni_gender: YoniGender::Male,
        nadi: Nadi::Kapha,
    },
];

impl Nakshatra {
    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// 1-based id (Ashwini=1 .. Revati=27).
    pub const fn id(self) -> u8 {
        self.index() + 1
    }

    /// Nakshatra for a 1-based id.
    pub fn from_id(id: u8) -> Result<Self, CatalogError> {
        if (1..=NAKSHATRA_COUNT).contains(&id) {
            Ok(ALL_NAKSHATRAS[(id - 1) as usize])
        } else {
            Err(CatalogError::out_of_range(
                "nakshatra id",
                id,
                1,
                NAKSHATRA_COUNT as i64,
            ))
        }
    }

    pub fn record(self) -> &'static NakshatraRecord {
        &NAKSHATRA_CATALOG[self.index() as usize]
    }

    pub fn name(self) -> &'static str {
        self.record().name
    }

    pub fn sinhala_name(self) -> &'static str {
        self.record().sinhala
    }

    pub fn lord(self) -> Graha {
        self.record().lord
    }

    pub fn gana(self) -> Gana {
        self.record().gana
    }

    pub fn yoni(self) -> Yoni {
        self.record().yoni
    }

    pub fn nadi(self) -> Nadi {
        self.record().nadi
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Catalog record for a 1-based nakshatra id.
pub fn nakshatra_record(id: u8) -> Result<&'static NakshatraRecord, CatalogError> {
    Nakshatra::from_id(id).map(Nakshatra::record)
}

/// Check a 1-based pada number.
pub fn validate_pada(pada: u8) -> Result<u8, CatalogError> {
    if (1..=4).contains(&pada) {
        Ok(pada)
    } else {
        Err(CatalogError::out_of_range("pada", pada, 1, 4))
    }
}

/// Cyclic forward count from `from` to `to`, both inclusive, in [1, 27].
///
/// Counting from a nakshatra to itself gives 1; to the next one gives 2;
/// to the one before gives 27.
pub const fn nakshatra_count(from: Nakshatra, to: Nakshatra) -> u8 {
    ((to.index() + NAKSHATRA_COUNT - from.index()) % NAKSHATRA_COUNT) + 1
}

/// Result of a nakshatra lookup from longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Determine nakshatra and pada from sidereal lunar longitude.
///
/// Any real input is accepted; it is first wrapped into [0, 360). A
/// longitude exactly on a boundary belongs to the nakshatra (and pada)
/// that starts there.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let quarter = quarter_index(lon);
    let nak_idx = quarter / 4;
    let pada_idx = quarter % 4;
    let degrees_in_nakshatra = (lon - (nak_idx as f64) * NAKSHATRA_SPAN).max(0.0);
    let degrees_in_pada = (lon - (quarter as f64) * PADA_SPAN).max(0.0);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}

/// Quarters (padas) in the zodiac.
const QUARTER_COUNT: u8 = NAKSHATRA_COUNT * 4;

/// Distance, in quarters, within which a longitude sits on a boundary.
const QUARTER_SNAP: f64 = 1e-11;

/// Global pada index in [0, 108) for a longitude in [0, 360].
///
/// Scaling by 108/360 is exact for whole and decimal degrees, so 20.0 maps
/// to exactly 6.0. A product landing a rounding error below a boundary
/// (e.g. `k * NAKSHATRA_SPAN`) is snapped onto it.
fn quarter_index(lon: f64) -> u8 {
    let scaled = lon * f64::from(QUARTER_COUNT) / 360.0;
    let nearest = scaled.round();
    let q = if (scaled - nearest).abs() < QUARTER_SNAP {
        nearest
    } else {
        scaled.floor()
    };
    // min() guards lon == 360.0 after wrapping a tiny negative input
    (q.max(0.0) as u8).min(QUARTER_COUNT - 1)
}

/// Which part of a rashi to pick when only the rashi is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RashiPart {
    Start,
    #[default]
    Middle,
    End,
}

/// Approximate the nakshatra of a chart for which only the rashi is known.
///
/// A rashi holds 2.25 nakshatras; the first one starting in it is
/// `floor((rashi_id - 1) * 2.25) + 1`, and `Middle`/`End` step one/two
/// nakshatras on from there (never past Revati).
pub fn nakshatra_from_rashi(rashi: Rashi, part: RashiPart) -> Nakshatra {
    // floor(i * 2.25) == (i * 9) / 4 for non-negative i
    let start = rashi.index() * 9 / 4;
    let idx = match part {
        RashiPart::Start => start,
        RashiPart::Middle => start + 1,
        RashiPart::End => (start + 2).min(NAKSHATRA_COUNT - 1),
    };
    ALL_NAKSHATRAS[idx as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_match_positions() {
        for (i, rec) in NAKSHATRA_CATALOG.iter().enumerate() {
            assert_eq!(rec.id as usize, i + 1);
            assert_eq!(rec.nakshatra, ALL_NAKSHATRAS[i]);
        }
    }

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(n.id() as usize, i + 1);
        }
    }

    #[test]
    fn names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
            assert!(!n.sinhala_name().is_empty());
        }
    }

    #[test]
    fn from_id_bounds() {
        assert_eq!(Nakshatra::from_id(1), Ok(Nakshatra::Ashwini));
        assert_eq!(Nakshatra::from_id(27), Ok(Nakshatra::Revati));
        assert!(Nakshatra::from_id(0).is_err());
        assert_eq!(
            Nakshatra::from_id(28),
            Err(CatalogError::OutOfRange {
                field: "nakshatra id",
                value: 28,
                min: 1,
                max: 27,
            })
        );
    }

    #[test]
    fn known_records() {
        let ashwini = Nakshatra::Ashwini.record();
        assert_eq!(ashwini.lord, Graha::Ketu);
        assert_eq!(ashwini.gana, Gana::Deva);
        assert_eq!(ashwini.yoni, Yoni::Horse);
        assert_eq!(ashwini.nadi, Nadi::Vata);

        let pushya = Nakshatra::Pushya.record();
        assert_eq!(pushya.yoni, Yoni::Goat);
        assert_eq!(pushya.lord, Graha::Shani);

        assert_eq!(Nakshatra::Shatabhisha.nadi(), Nadi::Vata);
        assert_eq!(Nakshatra::Bharani.nadi(), Nadi::Pitta);
    }

    #[test]
    fn pada_validation() {
        assert_eq!(validate_pada(1), Ok(1));
        assert_eq!(validate_pada(4), Ok(4));
        assert!(validate_pada(0).is_err());
        assert!(validate_pada(5).is_err());
    }

    #[test]
    fn count_same_is_one() {
        for n in ALL_NAKSHATRAS {
            assert_eq!(nakshatra_count(n, n), 1);
        }
    }

    #[test]
    fn count_wraps() {
        assert_eq!(nakshatra_count(Nakshatra::Ashwini, Nakshatra::Bharani), 2);
        assert_eq!(nakshatra_count(Nakshatra::Bharani, Nakshatra::Ashwini), 27);
        assert_eq!(nakshatra_count(Nakshatra::Revati, Nakshatra::Ashwini), 2);
        assert_eq!(nakshatra_count(Nakshatra::Ashwini, Nakshatra::Revati), 27);
    }

    #[test]
    fn count_always_in_range() {
        for a in ALL_NAKSHATRAS {
            for b in ALL_NAKSHATRAS {
                let c = nakshatra_count(a, b);
                assert!((1..=27).contains(&c));
                let expected = ((b.id() as i32 - a.id() as i32 + 27) % 27) + 1;
                assert_eq!(c as i32, expected);
            }
        }
    }

    #[test]
    fn nakshatra_span_correct() {
        assert!((NAKSHATRA_SPAN - 13.333_333_333_333_334).abs() < 1e-10);
        assert!((PADA_SPAN - 3.333_333_333_333_333_5).abs() < 1e-10);
    }

    #[test]
    fn nakshatra_at_0() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert!(info.degrees_in_nakshatra.abs() < 1e-10);
    }

    #[test]
    fn nakshatra_all_27_boundaries() {
        for i in 0..27u8 {
            let lon = i as f64 * NAKSHATRA_SPAN;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra.index(), i, "boundary at nakshatra {i}");
            assert_eq!(info.pada, 1, "pada at boundary of nakshatra {i}");
        }
    }

    #[test]
    fn decimal_pada_boundaries_start_their_pada() {
        // every multiple of 10 deg is an exact quarter boundary: q = 3 * deg / 10
        for step in 0..36u8 {
            let lon = f64::from(step) * 10.0;
            let q = step * 3;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra.index(), q / 4, "nakshatra at {lon} deg");
            assert_eq!(info.pada, q % 4 + 1, "pada at {lon} deg");
            assert!(info.degrees_in_pada < 1e-9, "offset at {lon} deg");
        }
    }

    #[test]
    fn pada_boundaries_from_span_multiples() {
        for q in 0..108u8 {
            let lon = f64::from(q) * PADA_SPAN;
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra.index(), q / 4, "nakshatra at quarter {q}");
            assert_eq!(info.pada, q % 4 + 1, "pada at quarter {q}");
        }
    }

    #[test]
    fn just_below_boundary_stays_in_previous_pada() {
        let info = nakshatra_from_longitude(20.0 - 1e-9);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert_eq!(info.pada, 2);
        let info = nakshatra_from_longitude(20.0);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert_eq!(info.pada, 3);
    }

    #[test]
    fn nakshatra_padas() {
        assert_eq!(nakshatra_from_longitude(0.0).pada, 1);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN + 0.1).pada, 2);
        assert_eq!(nakshatra_from_longitude(2.0 * PADA_SPAN + 0.1).pada, 3);
        assert_eq!(nakshatra_from_longitude(3.0 * PADA_SPAN + 0.1).pada, 4);
    }

    #[test]
    fn ten_degrees_is_ashwini_fourth_pada() {
        let info = nakshatra_from_longitude(10.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn nakshatra_wrap() {
        let info = nakshatra_from_longitude(361.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert!((info.degrees_in_nakshatra - 1.0).abs() < 1e-10);
        assert_eq!(nakshatra_from_longitude(360.0).nakshatra, Nakshatra::Ashwini);
    }

    #[test]
    fn nakshatra_negative() {
        // -1 -> 359 deg, inside Revati (starts at 346.667)
        let info = nakshatra_from_longitude(-1.0);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn tiny_negative_stays_in_range() {
        let info = nakshatra_from_longitude(-1e-20);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert!((1..=4).contains(&info.pada));
    }

    #[test]
    fn chitra_at_180() {
        assert_eq!(nakshatra_from_longitude(180.0).nakshatra, Nakshatra::Chitra);
    }

    #[test]
    fn from_rashi_parts() {
        assert_eq!(
            nakshatra_from_rashi(Rashi::Mesha, RashiPart::Start),
            Nakshatra::Ashwini
        );
        assert_eq!(
            nakshatra_from_rashi(Rashi::Mesha, RashiPart::Middle),
            Nakshatra::Bharani
        );
        assert_eq!(
            nakshatra_from_rashi(Rashi::Vrishabha, RashiPart::Start),
            Nakshatra::Krittika
        );
        assert_eq!(
            nakshatra_from_rashi(Rashi::Meena, RashiPart::Start),
            Nakshatra::PurvaBhadrapada
        );
        assert_eq!(
            nakshatra_from_rashi(Rashi::Meena, RashiPart::End),
            Nakshatra::Revati
        );
    }
}
