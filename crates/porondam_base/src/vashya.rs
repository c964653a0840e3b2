//! Vashya (mutual influence) groups of the rashis.

use serde::Serialize;

use crate::rashi::Rashi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vashya {
    /// Quadrupeds.
    Chatushpada,
    /// Human.
    Manava,
    /// Water-dwelling.
    Jalachara,
    /// Forest-dwelling.
    Vanachara,
    /// Insect.
    Keeta,
}

impl Vashya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chatushpada => "Chatushpada",
            Self::Manava => "Manava",
            Self::Jalachara => "Jalachara",
            Self::Vanachara => "Vanachara",
            Self::Keeta => "Keeta",
        }
    }
}

/// Vashya group of a rashi. Simha is a forest dweller here, not a
/// quadruped.
pub const fn vashya_of(rashi: Rashi) -> Vashya {
    match rashi {
        Rashi::Mesha | Rashi::Vrishabha | Rashi::Dhanu | Rashi::Makara => Vashya::Chatushpada,
        Rashi::Mithuna | Rashi::Kanya | Rashi::Tula | Rashi::Kumbha => Vashya::Manava,
        Rashi::Karka | Rashi::Meena => Vashya::Jalachara,
        Rashi::Simha => Vashya::Vanachara,
        Rashi::Vrischika => Vashya::Keeta,
    }
}

/// Same group, or a human sign paired with a quadruped sign.
pub fn vashya_compatible(a: Vashya, b: Vashya) -> bool {
    a == b
        || matches!(
            (a, b),
            (Vashya::Manava, Vashya::Chatushpada) | (Vashya::Chatushpada, Vashya::Manava)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simha_is_vanachara() {
        assert_eq!(vashya_of(Rashi::Simha), Vashya::Vanachara);
    }

    #[test]
    fn human_quadruped_compatible() {
        assert!(vashya_compatible(Vashya::Manava, Vashya::Chatushpada));
        assert!(vashya_compatible(Vashya::Chatushpada, Vashya::Manava));
        assert!(!vashya_compatible(Vashya::Manava, Vashya::Jalachara));
        assert!(!vashya_compatible(Vashya::Vanachara, Vashya::Chatushpada));
    }

    #[test]
    fn same_group_compatible() {
        assert!(vashya_compatible(Vashya::Keeta, Vashya::Keeta));
    }
}
