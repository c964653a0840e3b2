//! Rajju (body region) of each nakshatra.

use serde::Serialize;

use crate::nakshatra::Nakshatra;

/// Body region a nakshatra is associated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rajju {
    /// Feet.
    Pada,
    /// Hip.
    Kati,
    /// Navel.
    Nabhi,
    /// Neck.
    Kantha,
    /// Head.
    Shira,
}

impl Rajju {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pada => "Pada",
            Self::Kati => "Kati",
            Self::Nabhi => "Nabhi",
            Self::Kantha => "Kantha",
            Self::Shira => "Shira",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Pada => "Feet",
            Self::Kati => "Hip",
            Self::Nabhi => "Navel",
            Self::Kantha => "Neck",
            Self::Shira => "Head",
        }
    }
}

/// Rajju per nakshatra, indexed by nakshatra index.
pub const NAKSHATRA_RAJJU: [Rajju; 27] = [
    Rajju::Kantha, // 1 Ashwini
    Rajju::Kati, // 2 Bharani
    Rajju::Pada, // 3 Krittika
    Rajju::Shira, // 4 Rohini
    Rajju::Nabhi, // 5 Mrigashira
    Rajju::Kantha, // 6 Ardra
    Rajju::Kati, // 7 Punarvasu
    Rajju::Pada, // 8 Pushya
    Rajju::Shira, // 9 Ashlesha
    Rajju::Nabhi, // 10 Magha
    Rajju::Kantha, // 11 PurvaPhalguni
    Rajju::Kati, // 12 UttaraPhalguni
    Rajju::Pada, // 13 Hasta
    Rajju::Shira, // 14 Chitra
    Rajju::Nabhi, // 15 Swati
    Rajju::Kantha, // 16 Vishakha
    Rajju::Kati, // 17 Anuradha
    Rajju::Pada, // 18 Jyeshtha
    Rajju::Shira, // 19 Mula
    Rajju::Nabhi, // 20 PurvaAshadha
    Rajju::Kantha, // 21 UttaraAshadha
    Rajju::Kati, // 22 Shravana
    Rajju::Pada, // 23 Dhanishtha
    Rajju::Shira, // 24 Shatabhisha
    Rajju::Nabhi, // 25 PurvaBhadrapada
    Rajju::Kantha, // 26 UttaraBhadrapada
    Rajju::Kati, // 27 Revati
];

pub const fn rajju_of(nakshatra: Nakshatra) -> Rajju {
    NAKSHATRA_RAJJU[nakshatra.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::ALL_NAKSHATRAS;

    #[test]
    fn five_cycle() {
        for n in ALL_NAKSHATRAS.iter().skip(5) {
            let earlier = ALL_NAKSHATRAS[n.index() as usize - 5];
            assert_eq!(rajju_of(*n), rajju_of(earlier), "{}", n.name());
        }
    }

    #[test]
    fn known_regions() {
        assert_eq!(rajju_of(Nakshatra::Ashwini), Rajju::Kantha);
        assert_eq!(rajju_of(Nakshatra::Bharani), Rajju::Kati);
        assert_eq!(rajju_of(Nakshatra::Shatabhisha), Rajju::Shira);
        assert_eq!(rajju_of(Nakshatra::Revati), Rajju::Kati);
    }
}
