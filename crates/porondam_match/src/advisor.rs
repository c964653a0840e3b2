//! Aggregation of aspect scores into an overall percentage and advice.

use serde::Serialize;

use crate::aspect::{Aspect, AspectScore, Bilingual};

/// Round-half-up percentage of awarded over attainable points.
///
/// Evaluated in integers: `round(100 a / m) = floor((200 a + m) / 2m)`.
pub fn overall_score(scores: &[AspectScore]) -> u8 {
    let (awarded, max) = scores.iter().fold((0u32, 0u32), |(a, m), s| {
        (a + s.score as u32, m + s.max_points as u32)
    });
    if max == 0 {
        return 0;
    }
    ((200 * awarded + max) / (2 * max)).min(100) as u8
}

/// Number of favorable aspects.
pub fn matched_count(scores: &[AspectScore]) -> u8 {
    scores.iter().filter(|s| s.favorable).count() as u8
}

/// Qualitative band of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CompatibilityTier {
    Challenging,
    Moderate,
    Good,
    Excellent,
}

impl CompatibilityTier {
    pub const fn from_score(overall: u8) -> Self {
        match overall {
            70.. => Self::Excellent,
            50..=69 => Self::Good,
            30..=49 => Self::Moderate,
            _ => Self::Challenging,
        }
    }

    pub const fn label(self) -> Bilingual {
        match self {
            Self::Excellent => Bilingual::new("Excellent", "විශිෂ්ට"),
            Self::Good => Bilingual::new("Good", "හොඳ"),
            Self::Moderate => Bilingual::new("Moderate", "මධ්‍යස්ථ"),
            Self::Challenging => Bilingual::new("Challenging", "අභියෝගාත්මක"),
        }
    }
}

const TIER_HIGH: Bilingual = Bilingual::new(
    "This is an excellent match with strong compatibility across most aspects.",
    "මෙය බොහෝ අංශවල ශක්තිමත් ගැලපීමක් සහිත විශිෂ්ට ගැලපීමකි.",
);
const TIER_MID: Bilingual = Bilingual::new(
    "This is a good match with moderate compatibility. Some areas may need attention.",
    "මෙය මධ්‍යස්ථ ගැලපීමක් සහිත හොඳ ගැලපීමකි. සමහර ක්ෂේත්‍රවලට අවධානය අවශ්‍ය විය හැක.",
);
const TIER_LOW: Bilingual = Bilingual::new(
    "This match shows some challenges. Consider consulting an astrologer for remedies.",
    "මෙම ගැලපීම සමහර අභියෝග පෙන්නුම් කරයි. පිළියම් සඳහා ජ්‍යෝතිෂ්‍යවේදියෙකුගෙන් උපදෙස් ලබා ගැනීම සලකා බලන්න.",
);

/// Warning clauses in the order they are appended.
const WARNINGS: [(Aspect, Bilingual); 4] = [
    (
        Aspect::Nadi,
        Bilingual::new(
            "Nadi Dosha present - consider performing Nadi Dosha Nivarana puja.",
            "නාඩි දෝෂය පවතී - නාඩි දෝෂ නිවාරණ පූජාව සිදු කිරීම සලකා බලන්න.",
        ),
    ),
    (
        Aspect::Gana,
        Bilingual::new(
            "Different temperaments - practice patience and understanding in daily life.",
            "විවිධ ස්වභාවයන් - දෛනික ජීවිතයේ ඉවසීම හා අවබෝධය පුහුණු කරන්න.",
        ),
    ),
    (
        Aspect::Yoni,
        Bilingual::new(
            "Physical compatibility needs attention - open communication is key.",
            "ශාරීරික ගැලපීමට අවධානය අවශ්‍ය - විවෘත සන්නිවේදනය ප්‍රධාන වේ.",
        ),
    ),
    (
        Aspect::Rajju,
        Bilingual::new(
            "Same Rajju - traditional remedies may be considered.",
            "එකම රජ්ජු - සාම්ප්‍රදායික පිළියම් සලකා බැලිය හැක.",
        ),
    ),
];

/// Free-text guidance in both languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub english: String,
    pub sinhala: String,
}

/// Tier message for `overall`, then one warning per unfavorable nadi,
/// gana, yoni or rajju aspect, space-separated.
pub fn recommend(scores: &[AspectScore], overall: u8) -> Recommendation {
    let tier = match overall {
        70.. => TIER_HIGH,
        50..=69 => TIER_MID,
        _ => TIER_LOW,
    };

    let unfavorable =
        |aspect: Aspect| scores.iter().any(|s| s.aspect == aspect && !s.favorable);
    let clauses: Vec<Bilingual> = std::iter::once(tier)
        .chain(
            WARNINGS
                .iter()
                .filter(|(aspect, _)| unfavorable(*aspect))
                .map(|&(_, text)| text),
        )
        .collect();

    Recommendation {
        english: join(&clauses, |b| b.english),
        sinhala: join(&clauses, |b| b.sinhala),
    }
}

fn join(clauses: &[Bilingual], pick: fn(&Bilingual) -> &'static str) -> String {
    clauses.iter().map(pick).collect::<Vec<_>>().join(" ")
}
