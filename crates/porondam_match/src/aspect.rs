//! The twenty Porondam aspects and their scored form.

use serde::Serialize;

/// One of the twenty named compatibility factors, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Aspect {
    /// Birth-star distance.
    Nakath,
    /// Temperament.
    Gana,
    /// Progeny.
    Mahendra,
    /// Longevity of the union.
    StreeDeerga,
    /// Animal affinity.
    Yoni,
    /// Moon-sign distance.
    Rashi,
    /// Friendship of the sign rulers.
    RashiAdhipathi,
    /// Mutual influence.
    Vashya,
    /// Body region.
    Rajju,
    /// Obstruction.
    Vedha,
    /// Gender pairing.
    Linga,
    /// Lineage.
    Gotra,
    /// Caste class.
    Varna,
    /// Vitality.
    Vruksha,
    /// Lifespan balance.
    Ayusha,
    /// Totem bird.
    Pakshi,
    /// Elemental balance.
    PanchaMahaBhutha,
    /// Daily harmony.
    Dina,
    /// Constitutional humor.
    Nadi,
    /// Planetary disposition.
    Graha,
}

pub const ASPECT_COUNT: usize = 20;

pub const ALL_ASPECTS: [Aspect; ASPECT_COUNT] = [
    Aspect::Nakath,
    Aspect::Gana,
    Aspect::Mahendra,
    Aspect::StreeDeerga,
    Aspect::Yoni,
    Aspect::Rashi,
    Aspect::RashiAdhipathi,
    Aspect::Vashya,
    Aspect::Rajju,
    Aspect::Vedha,
    Aspect::Linga,
    Aspect::Gotra,
    Aspect::Varna,
    Aspect::Vruksha,
    Aspect::Ayusha,
    Aspect::Pakshi,
    Aspect::PanchaMahaBhutha,
    Aspect::Dina,
    Aspect::Nadi,
    Aspect::Graha,
];

/// Sum of the twenty per-aspect maximums.
pub const TOTAL_MAX_POINTS: u16 = {
    let mut sum = 0u16;
    let mut i = 0;
    while i < ASPECT_COUNT {
        sum += ALL_ASPECTS[i].max_points() as u16;
        i += 1;
    }
    sum
};

impl Aspect {
    /// 0-based position in reporting order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn max_points(self) -> u8 {
        match self {
            Self::Nakath | Self::Dina => 3,
            Self::Gana => 6,
            Self::Yoni => 4,
            Self::Rashi => 7,
            Self::RashiAdhipathi | Self::Graha => 5,
            Self::Vashya => 2,
            Self::Nadi => 8,
            Self::Mahendra
            | Self::StreeDeerga
            | Self::Rajju
            | Self::Vedha
            | Self::Linga
            | Self::Gotra
            | Self::Varna
            | Self::Vruksha
            | Self::Ayusha
            | Self::Pakshi
            | Self::PanchaMahaBhutha => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Nakath => "Nakath Porondam",
            Self::Gana => "Gana Porondam",
            Self::Mahendra => "Mahendra Porondam",
            Self::StreeDeerga => "Stree Deerga Porondam",
            Self::Yoni => "Yoni Porondam",
            Self::Rashi => "Rashi Porondam",
            Self::RashiAdhipathi => "Rashi Adhipathi Porondam",
            Self::Vashya => "Vashya Porondam",
            Self::Rajju => "Rajju Porondam",
            Self::Vedha => "Vedha Porondam",
            Self::Linga => "Linga Porondam",
            Self::Gotra => "Gotra Porondam",
            Self::Varna => "Varna Porondam",
            Self::Vruksha => "Vruksha Porondam",
            Self::Ayusha => "Ayusha Porondam",
            Self::Pakshi => "Pakshi Porondam",
            Self::PanchaMahaBhutha => "Pancha Maha Bhutha Porondam",
            Self::Dina => "Dina Porondam",
            Self::Nadi => "Nadi Porondam",
            Self::Graha => "Graha Porondam",
        }
    }

    pub const fn sinhala_name(self) -> &'static str {
        match self {
            Self::Nakath => "නැකත් පොරොන්දම",
            Self::Gana => "ගණ පොරොන්දම",
            Self::Mahendra => "මහේන්ද්‍ර පොරොන්දම",
            Self::StreeDeerga => "ස්ත්‍රී දීර්ඝ පොරොන්දම",
            Self::Yoni => "යෝනි පොරොන්දම",
            Self::Rashi => "රාශි පොරොන්දම",
            Self::RashiAdhipathi => "රාශි අධිපති පොරොන්දම",
            Self::Vashya => "වශ්‍ය පොරොන්දම",
            Self::Rajju => "රජ්ජු පොරොන්දම",
            Self::Vedha => "වේධ පොරොන්දම",
            Self::Linga => "ලිංග පොරොන්දම",
            Self::Gotra => "ගෝත්‍ර පොරොන්දම",
            Self::Varna => "වර්ණ පොරොන්දම",
            Self::Vruksha => "වෘක්ෂ පොරොන්දම",
            Self::Ayusha => "ආයුෂ පොරොන්දම",
            Self::Pakshi => "පක්ෂි පොරොන්දම",
            Self::PanchaMahaBhutha => "පංච මහා භූත පොරොන්දම",
            Self::Dina => "දින පොරොන්දම",
            Self::Nadi => "නාඩි පොරොන්දම",
            Self::Graha => "ග්‍රහ පොරොන්දම",
        }
    }
}

/// A pair of parallel English and Sinhala texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bilingual {
    pub english: &'static str,
    pub sinhala: &'static str,
}

impl Bilingual {
    pub const fn new(english: &'static str, sinhala: &'static str) -> Self {
        Self { english, sinhala }
    }
}

/// The scored outcome of one aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectScore {
    pub aspect: Aspect,
    pub name: &'static str,
    pub name_sinhala: &'static str,
    pub max_points: u8,
    /// Awarded points, `0 <= score <= max_points`.
    pub score: u8,
    pub favorable: bool,
    pub description: Bilingual,
}

impl AspectScore {
    /// Score `points` with the given rationale. `points` must not exceed
    /// the aspect's maximum.
    pub fn new(aspect: Aspect, points: u8, favorable: bool, description: Bilingual) -> Self {
        debug_assert!(
            points <= aspect.max_points(),
            "{} awarded {points} of {}",
            aspect.name(),
            aspect.max_points()
        );
        Self {
            aspect,
            name: aspect.name(),
            name_sinhala: aspect.sinhala_name(),
            max_points: aspect.max_points(),
            score: points,
            favorable,
            description,
        }
    }

    /// All-or-nothing score: full points when favorable, none otherwise.
    pub fn binary(aspect: Aspect, favorable: bool, texts: &BinaryTexts) -> Self {
        let (points, description) = if favorable {
            (aspect.max_points(), texts.favorable)
        } else {
            (0, texts.unfavorable)
        };
        Self::new(aspect, points, favorable, description)
    }
}

/// Fixed rationale for the two outcomes of an all-or-nothing aspect.
#[derive(Debug, Clone, Copy)]
pub struct BinaryTexts {
    pub favorable: Bilingual,
    pub unfavorable: Bilingual,
}
