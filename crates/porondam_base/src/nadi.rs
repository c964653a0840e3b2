//! Nadi (constitutional humor) classes.

use serde::Serialize;

/// Ayurvedic humor assigned to each nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nadi {
    Vata,
    Pitta,
    Kapha,
}

pub const ALL_NADIS: [Nadi; 3] = [Nadi::Vata, Nadi::Pitta, Nadi::Kapha];

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }
}
