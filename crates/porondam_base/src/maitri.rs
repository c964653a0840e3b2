//! Planetary friendship (graha maitri) as used by Porondam.
//!
//! This is the matching table of the Sinhala Porondam tradition, not the
//! BPHS naisargika table: it covers Rahu and Ketu and differs in several
//! cells (e.g. Moon counts Jupiter as a friend).
//!
//! Rows are read as "how the first graha regards the second". The table
//! is not symmetric: Saturn regards Mars as an enemy while Mars is neutral
//! to Saturn, and Mercury regards the Moon as an enemy while the Moon is
//! neutral to Mercury.

use serde::Serialize;

use crate::error::CatalogError;
use crate::graha::Graha;
use crate::matrix::CompatibilityMatrix;

/// Relationship of one graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Maitri {
    Friend,
    Neutral,
    Enemy,
}

impl Maitri {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "friend",
            Self::Neutral => "neutral",
            Self::Enemy => "enemy",
        }
    }
}

use Graha::{Buddh, Chandra, Guru, Ketu, Mangal, Rahu, Shani, Shukra, Surya};
use Maitri::{Enemy, Friend, Neutral};

/// Graha maitri table. The diagonal is stated as neutral.
pub static GRAHA_MAITRI: CompatibilityMatrix<Graha, Maitri> = CompatibilityMatrix::new(
    "graha maitri",
    &[
        (
            Surya,
            &[
                (Surya, Neutral),
                (Chandra, Friend),
                (Mangal, Friend),
                (Buddh, Neutral),
                (Guru, Friend),
                (Shukra, Enemy),
                (Shani, Enemy),
                (Rahu, Enemy),
                (Ketu, Neutral),
            ],
        ),
        (
            Chandra,
            &[
                (Surya, Friend),
                (Chandra, Neutral),
                (Mangal, Neutral),
                (Buddh, Neutral),
                (Guru, Friend),
                (Shukra, Neutral),
                (Shani, Neutral),
                (Rahu, Enemy),
                (Ketu, Neutral),
            ],
        ),
        (
            Mangal,
            &[
                (Surya, Friend),
                (Chandra, Friend),
                (Mangal, Neutral),
                (Buddh, Enemy),
                (Guru, Friend),
                (Shukra, Neutral),
                (Shani, Neutral),
                (Rahu, Enemy),
                (Ketu, Neutral),
            ],
        ),
        (
            Buddh,
            &[
                (Surya, Neutral),
                (Chandra, Enemy),
                (Mangal, Neutral),
                (Buddh, Neutral),
                (Guru, Neutral),
                (Shukra, Friend),
                (Shani, Neutral),
                (Rahu, Neutral),
                (Ketu, Neutral),
            ],
        ),
        (
            Guru,
            &[
                (Surya, Friend),
                (Chandra, Friend),
                (Mangal, Friend),
                (Buddh, Neutral),
                (Guru, Neutral),
                (Shukra, Enemy),
                (Shani, Neutral),
                (Rahu, Enemy),
                (Ketu, Neutral),
            ],
        ),
        (
            Shukra,
            &[
                (Surya, Enemy),
                (Chandra, Neutral),
                (Mangal, Neutral),
                (Buddh, Friend),
                (Guru, Neutral),
                (Shukra, Neutral),
                (Shani, Friend),
                (Rahu, Neutral),
                (Ketu, Neutral),
            ],
        ),
        (
            Shani,
            &[
                (Surya, Enemy),
                (Chandra, Enemy),
                (Mangal, Enemy),
                (Buddh, Friend),
                (Guru, Neutral),
                (Shukra, Friend),
                (Shani, Neutral),
                (Rahu, Friend),
                (Ketu, Neutral),
            ],
        ),
        (
            Rahu,
            &[
                (Surya, Enemy),
                (Chandra, Enemy),
                (Mangal, Enemy),
                (Buddh, Neutral),
                (Guru, Enemy),
                (Shukra, Neutral),
                (Shani, Friend),
                (Rahu, Neutral),
                (Ketu, Neutral),
            ],
        ),
        (
            Ketu,
            &[
                (Surya, Neutral),
                (Chandra, Neutral),
                (Mangal, Neutral),
                (Buddh, Neutral),
                (Guru, Neutral),
                (Shukra, Neutral),
                (Shani, Neutral),
                (Rahu, Neutral),
                (Ketu, Neutral),
            ],
        ),
    ],
);

/// How `graha` regards `other`, read from the row of `graha`.
pub fn graha_maitri(graha: Graha, other: Graha) -> Result<Maitri, CatalogError> {
    GRAHA_MAITRI.lookup(graha, other)
}
