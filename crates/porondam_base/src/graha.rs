//! The nine grahas used as nakshatra and rashi lords.

use serde::Serialize;

use crate::matrix::MatrixClass;

/// Planetary lord of a nakshatra or rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// Lords in weekday order, shadow grahas last.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sinhala name of the graha.
    pub const fn sinhala_name(self) -> &'static str {
        match self {
            Self::Surya => "රවි",
            Self::Chandra => "චන්ද්‍ර",
            Self::Mangal => "කුජ",
            Self::Buddh => "බුධ",
            Self::Guru => "ගුරු",
            Self::Shukra => "සිකුරු",
            Self::Shani => "ශනි",
            Self::Rahu => "රාහු",
            Self::Ketu => "කේතු",
        }
    }

    /// Position in [`ALL_GRAHAS`], used as the maitri row offset.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl MatrixClass for Graha {
    fn label(self) -> &'static str {
        self.english_name()
    }
}
