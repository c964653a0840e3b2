//! Varna (caste class) of the rashis, in traditional rank order.

use serde::Serialize;

use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

impl Varna {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brahmin => "Brahmin",
            Self::Kshatriya => "Kshatriya",
            Self::Vaishya => "Vaishya",
            Self::Shudra => "Shudra",
        }
    }

    /// Rank 0 (Brahmin) .. 3 (Shudra).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Brahmin => 0,
            Self::Kshatriya => 1,
            Self::Vaishya => 2,
            Self::Shudra => 3,
        }
    }
}

/// Water signs are Brahmin, fire signs Kshatriya, air signs Vaishya and
/// earth signs Shudra.
pub const fn varna_of(rashi: Rashi) -> Varna {
    match rashi {
        Rashi::Karka | Rashi::Vrischika | Rashi::Meena => Varna::Brahmin,
        Rashi::Mesha | Rashi::Simha | Rashi::Dhanu => Varna::Kshatriya,
        Rashi::Mithuna | Rashi::Tula | Rashi::Kumbha => Varna::Vaishya,
        Rashi::Vrishabha | Rashi::Kanya | Rashi::Makara => Varna::Shudra,
    }
}
