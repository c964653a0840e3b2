//! Rashi (zodiac sign) catalog and longitude conversion.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Each rashi is ruled by one of the
//! seven classical grahas.

use serde::Serialize;

use crate::error::CatalogError;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Number of rashis in the zodiac.
pub const RASHI_COUNT: u8 = 12;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Fixed attributes of one rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RashiRecord {
    pub rashi: Rashi,
    /// 1-based id (1 = Mesha).
    pub id: u8,
    /// Sanskrit name.
    pub name: &'static str,
    /// Western (English) name.
    pub english: &'static str,
    pub sinhala: &'static str,
    /// Ruling graha.
    pub lord: Graha,
}

/// Rashi catalog, indexed by `id - 1`.
pub static RASHI_CATALOG: [RashiRecord; 12] = [
    RashiRecord {
        rashi: Rashi::Mesha,
        id: 1,
        name: "Mesha",
        english: "Aries",
        sinhala: "මේෂ",
        lord: Graha::Mangal,
    },
    RashiRecord {
        rashi: Rashi::Vrishabha,
        id: 2,
        name: "Vrishabha",
        english: "Taurus",
        sinhala: "වෘෂභ",
        lord: Graha::Shukra,
    },
    RashiRecord {
        rashi: Rashi::Mithuna,
        id: 3,
        name: "Mithuna",
        english: "Gemini",
        sinhala: "මිථුන",
        lord: Graha::Buddh,
    },
    RashiRecord {
        rashi: Rashi::Karka,
        id: 4,
        name: "Karka",
        english: "Cancer",
        sinhala: "කටක",
        lord: Graha::Chandra,
    },
    RashiRecord {
        rashi: Rashi::Simha,
        id: 5,
        name: "Simha",
        english: "Leo",
        sinhala: "සිංහ",
        lord: Graha::Surya,
    },
    RashiRecord {
        rashi: Rashi::Kanya,
        id: 6,
        name: "Kanya",
        english: "Virgo",
        sinhala: "කන්‍යා",
        lord: Graha::Buddh,
    },
    RashiRecord {
        rashi: Rashi::Tula,
        id: 7,
        name: "Tula",
        english: "Libra",
        sinhala: "තුලා",
        lord: Graha::Shukra,
    },
    RashiRecord {
        rashi: Rashi::Vrischika,
        id: 8,
        name: "Vrishchika",
        english: "Scorpio",
        sinhala: "වෘශ්චික",
        lord: Graha::Mangal,
    },
    RashiRecord {
        rashi: Rashi::Dhanu,
        id: 9,
        name: "Dhanus",
        english: "Sagittarius",
        sinhala: "ධනු",
        lord: Graha::Guru,
    },
    RashiRecord {
        rashi: Rashi::Makara,
        id: 10,
        name: "Makara",
        english: "Capricorn",
        sinhala: "මකර",
        lord: Graha::Shani,
    },
    RashiRecord {
        rashi: Rashi::Kumbha,
        id: 11,
        name: "Kumbha",
        english: "Aquarius",
        sinhala: "කුම්භ",
        lord: Graha::Shani,
    },
    RashiRecord {
        rashi: Rashi::Meena,
        id: 12,
        name: "Meena",
        english: "Pisces",
        sinhala: "මීන",
        lord: Graha::Guru,
    },
];

impl Rashi {
    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based id (Mesha=1 .. Meena=12).
    pub const fn id(self) -> u8 {
        self.index() + 1
    }

    /// Rashi for a 1-based id.
    pub fn from_id(id: u8) -> Result<Self, CatalogError> {
        if (1..=RASHI_COUNT).contains(&id) {
            Ok(ALL_RASHIS[(id - 1) as usize])
        } else {
            Err(CatalogError::out_of_range(
                "rashi id",
                id,
                1,
                RASHI_COUNT as i64,
            ))
        }
    }

    pub fn record(self) -> &'static RashiRecord {
        &RASHI_CATALOG[self.index() as usize]
    }

    /// Sanskrit name of the rashi.
    pub fn name(self) -> &'static str {
        self.record().name
    }

    /// Western (English) name of the rashi.
    pub fn western_name(self) -> &'static str {
        self.record().english
    }

    pub fn sinhala_name(self) -> &'static str {
        self.record().sinhala
    }

    /// Planetary lord of the rashi.
    pub fn lord(self) -> Graha {
        self.record().lord
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Catalog record for a 1-based rashi id.
pub fn rashi_record(id: u8) -> Result<&'static RashiRecord, CatalogError> {
    Rashi::from_id(id).map(Rashi::record)
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal lunar longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), etc. Any real input is wrapped
/// into [0, 360) first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = ((lon / RASHI_SPAN).floor() as u8).min(RASHI_COUNT - 1);
    let degrees_in_rashi = lon - (rashi_idx as f64) * RASHI_SPAN;

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}
