//! Gana (temperament) classes and their compatibility table.

use serde::Serialize;

use crate::error::CatalogError;
use crate::matrix::{CompatibilityMatrix, MatrixClass};

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    /// Divine.
    Deva,
    /// Human.
    Manushya,
    /// Demonic.
    Rakshasa,
}

pub const ALL_GANAS: [Gana; 3] = [Gana::Deva, Gana::Manushya, Gana::Rakshasa];

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }
}

impl MatrixClass for Gana {
    fn label(self) -> &'static str {
        self.name()
    }
}

/// Gana compatibility out of 6, row = bride's gana, column = groom's gana.
pub static GANA_MATRIX: CompatibilityMatrix<Gana, u8> = CompatibilityMatrix::new(
    "gana",
    &[
        (
            Gana::Deva,
            &[(Gana::Deva, 6), (Gana::Manushya, 5), (Gana::Rakshasa, 1)],
        ),
        (
            Gana::Manushya,
            &[(Gana::Deva, 6), (Gana::Manushya, 6), (Gana::Rakshasa, 0)],
        ),
        (
            Gana::Rakshasa,
            &[(Gana::Deva, 0), (Gana::Manushya, 0), (Gana::Rakshasa, 6)],
        ),
    ],
);

pub fn gana_score(bride: Gana, groom: Gana) -> Result<u8, CatalogError> {
    GANA_MATRIX.lookup(bride, groom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete() {
        assert!(GANA_MATRIX.check_complete(&ALL_GANAS).is_ok());
    }

    #[test]
    fn same_gana_full_marks() {
        for g in ALL_GANAS {
            assert_eq!(gana_score(g, g), Ok(6));
        }
    }

    #[test]
    fn deva_manushya_is_directional() {
        assert_eq!(gana_score(Gana::Deva, Gana::Manushya), Ok(5));
        assert_eq!(gana_score(Gana::Manushya, Gana::Deva), Ok(6));
    }

    #[test]
    fn deva_rakshasa_is_directional() {
        assert_eq!(gana_score(Gana::Deva, Gana::Rakshasa), Ok(1));
        assert_eq!(gana_score(Gana::Rakshasa, Gana::Deva), Ok(0));
    }
}
