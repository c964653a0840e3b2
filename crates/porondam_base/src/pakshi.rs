//! Pakshi (totem bird) of each nakshatra.

use serde::Serialize;

use crate::nakshatra::Nakshatra;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pakshi {
    Peacock,
    Crow,
    Owl,
    Cock,
    Vulture,
}

pub const ALL_PAKSHIS: [Pakshi; 5] = [
    Pakshi::Peacock,
    Pakshi::Crow,
    Pakshi::Owl,
    Pakshi::Cock,
    Pakshi::Vulture,
];

impl Pakshi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peacock => "Peacock",
            Self::Crow => "Crow",
            Self::Owl => "Owl",
            Self::Cock => "Cock",
            Self::Vulture => "Vulture",
        }
    }
}

/// Birds cycle every five nakshatras starting with Peacock at Ashwini.
pub const fn pakshi_of(nakshatra: Nakshatra) -> Pakshi {
    ALL_PAKSHIS[(nakshatra.index() % 5) as usize]
}
