//! Yoni (animal nature) classes and their compatibility table.
//!
//! Scores run 0..=4: 4 same yoni, 3 friendly, 2 neutral, 1 enemy,
//! 0 sworn enemy. Sheep and Goat are kept as separate classes because the
//! catalog assigns both. The Goat column is 2 (neutral) in every row but
//! its own, matching how the traditional table was applied.

use serde::Serialize;

use crate::error::CatalogError;
use crate::matrix::{CompatibilityMatrix, MatrixClass};

/// The animal nature assigned to each nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
    Goat,
}

/// All yoni classes, in table order.
pub const ALL_YONIS: [Yoni; 15] = [
    Yoni::Horse,
    Yoni::Elephant,
    Yoni::Sheep,
    Yoni::Serpent,
    Yoni::Dog,
    Yoni::Cat,
    Yoni::Rat,
    Yoni::Cow,
    Yoni::Buffalo,
    Yoni::Tiger,
    Yoni::Deer,
    Yoni::Monkey,
    Yoni::Mongoose,
    Yoni::Lion,
    Yoni::Goat,
];

impl Yoni {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horse => "Horse",
            Self::Elephant => "Elephant",
            Self::Sheep => "Sheep",
            Self::Serpent => "Serpent",
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Rat => "Rat",
            Self::Cow => "Cow",
            Self::Buffalo => "Buffalo",
            Self::Tiger => "Tiger",
            Self::Deer => "Deer",
            Self::Monkey => "Monkey",
            Self::Mongoose => "Mongoose",
            Self::Lion => "Lion",
            Self::Goat => "Goat",
        }
    }
}

impl MatrixClass for Yoni {
    fn label(self) -> &'static str {
        self.name()
    }
}

/// Polarity of a nakshatra's yoni. Carried for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YoniGender {
    Male,
    Female,
}

impl YoniGender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

use Yoni::{
    Buffalo, Cat, Cow, Deer, Dog, Elephant, Goat, Horse, Lion, Mongoose, Monkey, Rat, Serpent,
    Sheep, Tiger,
};

/// Yoni compatibility, row = bride's yoni, column = groom's yoni.
pub static YONI_MATRIX: CompatibilityMatrix<Yoni, u8> = CompatibilityMatrix::new(
    "yoni",
    &[
        (
            Horse,
            &[
                (Horse, 4), (Elephant, 2), (Sheep, 2), (Serpent, 2), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 1), (Buffalo, 0), (Tiger, 1), (Deer, 3), (Monkey, 2), (Mongoose, 2),
                (Lion, 1), (Goat, 2),
            ],
        ),
        (
            Elephant,
            &[
                (Horse, 2), (Elephant, 4), (Sheep, 3), (Serpent, 2), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 2), (Buffalo, 2), (Tiger, 1), (Deer, 2), (Monkey, 2), (Mongoose, 2),
                (Lion, 0), (Goat, 2),
            ],
        ),
        (
            Sheep,
            &[
                (Horse, 2), (Elephant, 3), (Sheep, 4), (Serpent, 2), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 2), (Buffalo, 2), (Tiger, 1), (Deer, 2), (Monkey, 0), (Mongoose, 2),
                (Lion, 1), (Goat, 2),
            ],
        ),
        (
            Serpent,
            &[
                (Horse, 2), (Elephant, 2), (Sheep, 2), (Serpent, 4), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 1), (Buffalo, 2), (Tiger, 2), (Deer, 2), (Monkey, 2), (Mongoose, 0),
                (Lion, 2), (Goat, 2),
            ],
        ),
        (
            Dog,
            &[
                (Horse, 2), (Elephant, 2), (Sheep, 2), (Serpent, 2), (Dog, 4), (Cat, 2), (Rat, 2),
                (Cow, 2), (Buffalo, 2), (Tiger, 2), (Deer, 0), (Monkey, 2), (Mongoose, 2),
                (Lion, 2), (Goat, 2),
            ],
        ),
        (
            Cat,
            &[
                (Horse, 2), (Elephant, 2), (Sheep, 2), (Serpent, 2), (Dog, 2), (Cat, 4), (Rat, 0),
                (Cow, 2), (Buffalo, 2), (Tiger, 2), (Deer, 2), (Monkey, 2), (Mongoose, 2),
                (Lion, 2), (Goat, 2),
            ],
        ),
        (
            Rat,
            &[
                (Horse, 2), (Elephant, 2), (Sheep, 2), (Serpent, 2), (Dog, 2), (Cat, 0), (Rat, 4),
                (Cow, 2), (Buffalo, 2), (Tiger, 2), (Deer, 2), (Monkey, 2), (Mongoose, 2),
                (Lion, 2), (Goat, 2),
            ],
        ),
        (
            Cow,
            &[
                (Horse, 1), (Elephant, 2), (Sheep, 2), (Serpent, 1), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 4), (Buffalo, 3), (Tiger, 0), (Deer, 2), (Monkey, 2), (Mongoose, 2),
                (Lion, 1), (Goat, 2),
            ],
        ),
        (
            Buffalo,
            &[
                (Horse, 0), (Elephant, 2), (Sheep, 2), (Serpent, 2), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 3), (Buffalo, 4), (Tiger, 1), (Deer, 2), (Monkey, 2), (Mongoose, 2),
                (Lion, 1), (Goat, 2),
            ],
        ),
        (
            Tiger,
            &[
                (Horse, 1), (Elephant, 1), (Sheep, 1), (Serpent, 2), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 0), (Buffalo, 1), (Tiger, 4), (Deer, 1), (Monkey, 2), (Mongoose, 2),
                (Lion, 2), (Goat, 2),
            ],
        ),
        (
            Deer,
            &[
                (Horse, 3), (Elephant, 2), (Sheep, 2), (Serpent, 2), (Dog, 0), (Cat, 2), (Rat, 2),
                (Cow, 2), (Buffalo, 2), (Tiger, 1), (Deer, 4), (Monkey, 2), (Mongoose, 2),
                (Lion, 1), (Goat, 2),
            ],
        ),
        (
            Monkey,
            &[
                (Horse, 2), (Elephant, 2), (Sheep, 0), (Serpent, 2), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 2), (Buffalo, 2), (Tiger, 2), (Deer, 2), (Monkey, 4), (Mongoose, 2),
                (Lion, 2), (Goat, 2),
            ],
        ),
        (
            Mongoose,
            &[
                (Horse, 2), (Elephant, 2), (Sheep, 2), (Serpent, 0), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 2), (Buffalo, 2), (Tiger, 2), (Deer, 2), (Monkey, 2), (Mongoose, 4),
                (Lion, 2), (Goat, 2),
            ],
        ),
        (
            Lion,
            &[
                (Horse, 1), (Elephant, 0), (Sheep, 1), (Serpent, 2), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 1), (Buffalo, 1), (Tiger, 2), (Deer, 1), (Monkey, 2), (Mongoose, 2),
                (Lion, 4), (Goat, 2),
            ],
        ),
        (
            Goat,
            &[
                (Horse, 2), (Elephant, 3), (Sheep, 4), (Serpent, 2), (Dog, 2), (Cat, 2), (Rat, 2),
                (Cow, 2), (Buffalo, 2), (Tiger, 1), (Deer, 2), (Monkey, 0), (Mongoose, 2),
                (Lion, 1), (Goat, 4),
            ],
        ),
    ],
);

/// Yoni score for a bride/groom pair, read from the bride's row.
pub fn yoni_score(bride: Yoni, groom: Yoni) -> Result<u8, CatalogError> {
    YONI_MATRIX.lookup(bride, groom)
}
