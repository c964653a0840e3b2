//! Vedha (obstruction) nakshatra pairs.

use crate::nakshatra::Nakshatra;
use Nakshatra::*;

/// Unordered nakshatra pairs that obstruct each other. Dhanishtha appears
/// in two pairs.
pub const VEDHA_PAIRS: [(Nakshatra, Nakshatra); 14] = [
    (Ashwini, Jyeshtha),
    (Bharani, Anuradha),
    (Krittika, Vishakha),
    (Rohini, Swati),
    (Mrigashira, Dhanishtha),
    (Ardra, Shravana),
    (Punarvasu, UttaraAshadha),
    (Pushya, PurvaAshadha),
    (Ashlesha, Mula),
    (Magha, Revati),
    (PurvaPhalguni, UttaraBhadrapada),
    (UttaraPhalguni, PurvaBhadrapada),
    (Hasta, Shatabhisha),
    (Chitra, Dhanishtha),
];

/// Whether the two nakshatras form a vedha pair, in either order.
pub fn is_vedha(a: Nakshatra, b: Nakshatra) -> bool {
    VEDHA_PAIRS
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}
