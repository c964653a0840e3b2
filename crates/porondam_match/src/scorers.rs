//! The twenty aspect scorers.
//!
//! Every scorer is a pure function of the attributes it needs. Arguments
//! come in role order (bride, groom); scorers whose rule is symmetric
//! take them in the same order for uniformity. The shared mansion
//! distance is always [`nakshatra_count`] from the bride's nakshatra to
//! the groom's.

use porondam_base::{
    CatalogError, Gana, Graha, Maitri, Nadi, Nakshatra, Rashi, Yoni, gana_score, graha_maitri,
    is_vedha, nakshatra_count, pakshi_of, rajju_of, varna_of, vashya_compatible, vashya_of,
    yoni_score,
};

use crate::aspect::{ASPECT_COUNT, Aspect, AspectScore, Bilingual, BinaryTexts};
use crate::chart::{Gender, ResolvedChart};

const NAKATH_COUNTS: [u8; 12] = [1, 3, 5, 7, 10, 12, 14, 16, 19, 21, 23, 25];
const MAHENDRA_COUNTS: [u8; 8] = [4, 7, 10, 13, 16, 19, 22, 25];
const STREE_DEERGA_MIN_COUNT: u8 = 13;
/// Sign differences (plus 0) counted as harmonious.
const RASHI_DIFFS: [u8; 8] = [1, 2, 3, 4, 5, 7, 9, 11];
/// Remainders of the count mod 9 that spoil daily harmony.
const DINA_BAD_REMAINDERS: [u8; 4] = [2, 4, 6, 8];

const NAKATH: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Birth stars are compatible - indicates mental harmony and understanding",
        "උපන් නැකත් ගැලපේ - මානසික සමගිය හා අවබෝධය පෙන්නුම් කරයි",
    ),
    unfavorable: Bilingual::new(
        "Birth stars show some tension - may require effort for understanding",
        "උපන් නැකත් යම් ආතතියක් පෙන්නුම් කරයි - අවබෝධය සඳහා උත්සාහය අවශ්‍ය විය හැක",
    ),
};

const MAHENDRA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Favorable for progeny - indicates healthy and intelligent children",
        "දරු සම්පත සඳහා හිතකර - නිරෝගී හා බුද්ධිමත් දරුවන් පෙන්නුම් කරයි",
    ),
    unfavorable: Bilingual::new(
        "Neutral for progeny - children's welfare not specifically indicated",
        "දරු සම්පත සඳහා මධ්‍යස්ථ - දරුවන්ගේ සුභසාධනය විශේෂයෙන් පෙන්නුම් නොකරයි",
    ),
};

const STREE_DEERGA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Indicates long and prosperous married life for the wife",
        "භාර්යාවට දීර්ඝ හා සාර්ථක විවාහ ජීවිතයක් පෙන්නුම් කරයි",
    ),
    unfavorable: Bilingual::new(
        "Wife's longevity aspect is neutral",
        "භාර්යාවගේ ආයු අංශය මධ්‍යස්ථ වේ",
    ),
};

const RASHI: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Moon signs are compatible - indicates emotional harmony",
        "චන්ද්‍ර රාශි ගැලපේ - චිත්තවේගීය සමගිය පෙන්නුම් කරයි",
    ),
    unfavorable: Bilingual::new(
        "Moon signs need balancing - emotional adjustment may be needed",
        "චන්ද්‍ර රාශි සමතුලිත කිරීම අවශ්‍ය - චිත්තවේගීය සැකසුම් අවශ්‍ය විය හැක",
    ),
};

const VASHYA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Mutual attraction and influence is positive",
        "අන්‍යෝන්‍ය ආකර්ෂණය හා බලපෑම ධනාත්මක වේ",
    ),
    unfavorable: Bilingual::new("Attraction aspect is neutral", "ආකර්ෂණ අංශය මධ්‍යස්ථ වේ"),
};

const RAJJU: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Physical bond is favorable - indicates lasting relationship",
        "ශාරීරික බැඳීම හිතකර වේ - කල්පවත්නා සම්බන්ධතාවයක් පෙන්නුම් කරයි",
    ),
    unfavorable: Bilingual::new(
        "Same Rajju - traditional caution advised for this aspect",
        "එකම රජ්ජු - මෙම අංශය සඳහා සාම්ප්‍රදායික අවධානය අවශ්‍ය වේ",
    ),
};

const VEDHA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "No obstruction between stars - relationship flows smoothly",
        "තාරකා අතර බාධාවක් නැත - සම්බන්ධතාවය සුමටව ගලා යයි",
    ),
    unfavorable: Bilingual::new(
        "Vedha dosha present - may face obstacles in relationship",
        "වේධ දෝෂය පවතී - සම්බන්ධතාවයේ බාධා ඇති විය හැක",
    ),
};

const LINGA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Gender compatibility is natural",
        "ස්ත්‍රී පුරුෂ ගැලපීම ස්වාභාවික වේ",
    ),
    unfavorable: Bilingual::new(
        "Same gender - traditional matching not applicable",
        "එකම ස්ත්‍රී පුරුෂ භාවය - සාම්ප්‍රදායික ගැලපීම අදාළ නොවේ",
    ),
};

const GOTRA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Different lineages - genetic compatibility favorable",
        "විවිධ පරම්පරා - ජාන ගැලපීම හිතකර වේ",
    ),
    unfavorable: Bilingual::new(
        "Same nakshatra - verify family lineage separately",
        "එකම නැකත - පවුල් පරම්පරාව වෙන වෙනම සත්‍යාපනය කරන්න",
    ),
};

const VARNA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Social and spiritual compatibility is favorable",
        "සමාජීය හා ආධ්‍යාත්මික ගැලපීම හිතකර වේ",
    ),
    unfavorable: Bilingual::new(
        "Different spiritual inclinations - mutual respect important",
        "විවිධ ආධ්‍යාත්මික නැඹුරුතා - අන්‍යෝන්‍ය ගෞරවය වැදගත් වේ",
    ),
};

const VRUKSHA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Physical strength compatibility is good for progeny",
        "ශාරීරික ශක්ති ගැලපීම දරු සම්පත සඳහා හොඳයි",
    ),
    unfavorable: Bilingual::new(
        "Physical vitality aspect is neutral",
        "ශාරීරික ශක්ති අංශය මධ්‍යස්ථ වේ",
    ),
};

const AYUSHA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Life expectancy compatibility is favorable",
        "ආයු ගැලපීම හිතකර වේ",
    ),
    unfavorable: Bilingual::new(
        "Longevity aspect needs attention",
        "දීර්ඝායු අංශයට අවධානය අවශ්‍ය වේ",
    ),
};

const PAKSHI: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Lucky bird signs are compatible",
        "වාසනාවන්ත පක්ෂි ලකුණු ගැලපේ",
    ),
    unfavorable: Bilingual::new(
        "Bird signs are different - minor aspect",
        "පක්ෂි ලකුණු වෙනස් - සුළු අංශයකි",
    ),
};

const PANCHA_MAHA_BHUTHA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Five elements are balanced between partners",
        "පංච මහා භූත දෙපාර්ශ්වය අතර සමතුලිත වේ",
    ),
    unfavorable: Bilingual::new(
        "Same elemental constitution - health awareness advised",
        "එකම මූලද්‍රව්‍ය ස්වභාවය - සෞඛ්‍ය දැනුවත්භාවය අවශ්‍ය වේ",
    ),
};

const DINA: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Daily life compatibility is favorable",
        "දෛනික ජීවිත ගැලපීම හිතකර වේ",
    ),
    unfavorable: Bilingual::new(
        "Some daily friction possible - patience helps",
        "යම් දෛනික ගැටුම් ඇති විය හැක - ඉවසීම උපකාරී වේ",
    ),
};

const NADI: BinaryTexts = BinaryTexts {
    favorable: Bilingual::new(
        "Health and genetic compatibility is excellent",
        "සෞඛ්‍ය හා ජාන ගැලපීම විශිෂ්ට වේ",
    ),
    unfavorable: Bilingual::new(
        "Same Nadi (Nadi Dosha) - health precautions advised",
        "එකම නාඩි (නාඩි දෝෂය) - සෞඛ්‍ය පූර්වාරක්ෂාව අවශ්‍ය වේ",
    ),
};

// Multi-tier texts, selected by awarded points.

const GANA_MATCHED: Bilingual = Bilingual::new(
    "Temperaments are well matched - indicates harmony in daily life",
    "ස්වභාවයන් හොඳින් ගැලපේ - දෛනික ජීවිතයේ සමගිය පෙන්නුම් කරයි",
);
const GANA_DIFFERENT: Bilingual = Bilingual::new(
    "Different temperaments - may need adjustment in expectations",
    "විවිධ ස්වභාවයන් - අපේක්ෂාවන්හි සැකසුම් අවශ්‍ය විය හැක",
);
const GANA_OPPOSED: Bilingual = Bilingual::new(
    "Temperaments clash - conscious effort is needed for harmony",
    "ස්වභාවයන් ගැටේ - සමගිය සඳහා සවිඥානික උත්සාහයක් අවශ්‍ය වේ",
);

const YONI_SAME: Bilingual = Bilingual::new(
    "Same yoni - physical and intimate compatibility is excellent",
    "එකම යෝනිය - ශාරීරික හා සමීප ගැලපීම විශිෂ්ට වේ",
);
const YONI_FRIENDLY: Bilingual = Bilingual::new(
    "Physical and intimate compatibility is favorable",
    "ශාරීරික හා සමීප ගැලපීම හිතකර වේ",
);
const YONI_NEUTRAL: Bilingual = Bilingual::new(
    "Physical compatibility needs attention and understanding",
    "ශාරීරික ගැලපීම සඳහා අවධානය හා අවබෝධය අවශ්‍ය වේ",
);
const YONI_HOSTILE: Bilingual = Bilingual::new(
    "Yoni natures are hostile - physical compatibility needs great care",
    "යෝනි ස්වභාවයන් විරුද්ධ වේ - ශාරීරික ගැලපීමට විශේෂ අවධානය අවශ්‍ය වේ",
);

const ADHIPATHI_FRIEND: Bilingual = Bilingual::new(
    "Ruling planets are friendly - supports mutual understanding",
    "පාලක ග්‍රහයන් මිත්‍ර වේ - අන්‍යෝන්‍ය අවබෝධයට සහාය වේ",
);
const ADHIPATHI_NEUTRAL: Bilingual = Bilingual::new(
    "Ruling planets are neutral - understanding grows with effort",
    "පාලක ග්‍රහයන් මධ්‍යස්ථ වේ - උත්සාහයෙන් අවබෝධය වර්ධනය වේ",
);
const ADHIPATHI_ENEMY: Bilingual = Bilingual::new(
    "Ruling planets have tension - may affect thought harmony",
    "පාලක ග්‍රහයන්ට ආතතියක් ඇත - සිතුවිලි සමගියට බලපෑ හැක",
);

const GRAHA_FRIEND: Bilingual = Bilingual::new(
    "Planetary influences are harmonious",
    "ග්‍රහ බලපෑම් සුසංයෝගී වේ",
);
const GRAHA_NEUTRAL: Bilingual = Bilingual::new(
    "Planetary influences are neutral - neither aiding nor hindering",
    "ග්‍රහ බලපෑම් මධ්‍යස්ථ වේ - උපකාරයක් හෝ බාධාවක් නොවේ",
);
const GRAHA_ENEMY: Bilingual = Bilingual::new(
    "Planetary influences need balancing",
    "ග්‍රහ බලපෑම් සමතුලිත කිරීම අවශ්‍ය වේ",
);

/// Birth-star distance: count in a fixed set of twelve.
pub fn nakath(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    let count = nakshatra_count(bride, groom);
    AspectScore::binary(Aspect::Nakath, NAKATH_COUNTS.contains(&count), &NAKATH)
}

/// Temperament: gana matrix, favorable from 5 of 6.
pub fn gana(bride: Gana, groom: Gana) -> Result<AspectScore, CatalogError> {
    let points = gana_score(bride, groom)?;
    let description = match points {
        5.. => GANA_MATCHED,
        1..=4 => GANA_DIFFERENT,
        0 => GANA_OPPOSED,
    };
    Ok(AspectScore::new(Aspect::Gana, points, points >= 5, description))
}

/// Progeny: count every third star from the fourth.
pub fn mahendra(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    let count = nakshatra_count(bride, groom);
    AspectScore::binary(Aspect::Mahendra, MAHENDRA_COUNTS.contains(&count), &MAHENDRA)
}

/// Longevity of the union: groom at least thirteen stars on.
pub fn stree_deerga(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    let count = nakshatra_count(bride, groom);
    AspectScore::binary(
        Aspect::StreeDeerga,
        count >= STREE_DEERGA_MIN_COUNT,
        &STREE_DEERGA,
    )
}

/// Animal affinity: yoni matrix read from the bride's row, favorable
/// from 3 of 4.
pub fn yoni(bride: Yoni, groom: Yoni) -> Result<AspectScore, CatalogError> {
    let points = yoni_score(bride, groom)?;
    let description = match points {
        4.. => YONI_SAME,
        3 => YONI_FRIENDLY,
        2 => YONI_NEUTRAL,
        _ => YONI_HOSTILE,
    };
    Ok(AspectScore::new(Aspect::Yoni, points, points >= 3, description))
}

/// Moon-sign distance: absolute id difference.
pub fn rashi(bride: Rashi, groom: Rashi) -> AspectScore {
    let diff = bride.id().abs_diff(groom.id());
    AspectScore::binary(
        Aspect::Rashi,
        diff == 0 || RASHI_DIFFS.contains(&diff),
        &RASHI,
    )
}

/// Friendship of the sign rulers: friend 5, neutral 3, enemy 0.
pub fn rashi_adhipathi(bride_lord: Graha, groom_lord: Graha) -> Result<AspectScore, CatalogError> {
    let (points, description) = match graha_maitri(bride_lord, groom_lord)? {
        Maitri::Friend => (5, ADHIPATHI_FRIEND),
        Maitri::Neutral => (3, ADHIPATHI_NEUTRAL),
        Maitri::Enemy => (0, ADHIPATHI_ENEMY),
    };
    Ok(AspectScore::new(
        Aspect::RashiAdhipathi,
        points,
        points >= 3,
        description,
    ))
}

/// Mutual influence: same vashya group, or human with quadruped.
pub fn vashya(bride: Rashi, groom: Rashi) -> AspectScore {
    let ok = vashya_compatible(vashya_of(bride), vashya_of(groom));
    AspectScore::binary(Aspect::Vashya, ok, &VASHYA)
}

/// Body region: favorable when the rajju differs.
pub fn rajju(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    AspectScore::binary(Aspect::Rajju, rajju_of(bride) != rajju_of(groom), &RAJJU)
}

/// Obstruction: favorable unless the pair is a vedha pair.
pub fn vedha(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    AspectScore::binary(Aspect::Vedha, !is_vedha(bride, groom), &VEDHA)
}

pub fn linga(bride: Gender, groom: Gender) -> AspectScore {
    AspectScore::binary(Aspect::Linga, bride != groom, &LINGA)
}

pub fn gotra(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    AspectScore::binary(Aspect::Gotra, bride != groom, &GOTRA)
}

/// Caste class: equal or adjacent varna ranks.
pub fn varna(bride: Rashi, groom: Rashi) -> AspectScore {
    let diff = varna_of(bride).rank().abs_diff(varna_of(groom).rank());
    AspectScore::binary(Aspect::Varna, diff <= 1, &VARNA)
}

/// Vitality: nakshatra ids more than three apart (not cyclic).
pub fn vruksha(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    AspectScore::binary(Aspect::Vruksha, bride.id().abs_diff(groom.id()) > 3, &VRUKSHA)
}

/// Lifespan balance: groom's nakshatra id not below the bride's.
pub fn ayusha(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    AspectScore::binary(Aspect::Ayusha, groom.id() >= bride.id(), &AYUSHA)
}

/// Totem bird: same bird, or ids whose residues mod 5 differ by at most
/// one. Residues 0 and 4 are not adjacent.
pub fn pakshi(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    let ok = pakshi_of(bride) == pakshi_of(groom)
        || (bride.id() % 5).abs_diff(groom.id() % 5) <= 1;
    AspectScore::binary(Aspect::Pakshi, ok, &PAKSHI)
}

pub fn pancha_maha_bhutha(bride: Nadi, groom: Nadi) -> AspectScore {
    AspectScore::binary(Aspect::PanchaMahaBhutha, bride != groom, &PANCHA_MAHA_BHUTHA)
}

/// Daily harmony: count mod 9 must not be even and non-zero.
pub fn dina(bride: Nakshatra, groom: Nakshatra) -> AspectScore {
    let remainder = nakshatra_count(bride, groom) % 9;
    AspectScore::binary(
        Aspect::Dina,
        !DINA_BAD_REMAINDERS.contains(&remainder),
        &DINA,
    )
}

/// Constitutional humor: favorable when the nadis differ.
pub fn nadi(bride: Nadi, groom: Nadi) -> AspectScore {
    AspectScore::binary(Aspect::Nadi, bride != groom, &NADI)
}

/// Planetary disposition: friend 5, neutral 3, enemy 1.
pub fn graha(bride_lord: Graha, groom_lord: Graha) -> Result<AspectScore, CatalogError> {
    let (points, description) = match graha_maitri(bride_lord, groom_lord)? {
        Maitri::Friend => (5, GRAHA_FRIEND),
        Maitri::Neutral => (3, GRAHA_NEUTRAL),
        Maitri::Enemy => (1, GRAHA_ENEMY),
    };
    Ok(AspectScore::new(Aspect::Graha, points, points >= 3, description))
}

/// Score all twenty aspects for charts already placed in their roles.
pub fn score_aspects(
    bride: &ResolvedChart,
    groom: &ResolvedChart,
) -> Result<[AspectScore; ASPECT_COUNT], CatalogError> {
    let (bn, gn) = (bride.nakshatra, groom.nakshatra);
    let (br, gr) = (bride.rashi, groom.rashi);

    Ok([
        nakath(bn, gn),
        gana(bn.gana(), gn.gana())?,
        mahendra(bn, gn),
        stree_deerga(bn, gn),
        yoni(bn.yoni(), gn.yoni())?,
        rashi(br, gr),
        rashi_adhipathi(br.lord(), gr.lord())?,
        vashya(br, gr),
        rajju(bn, gn),
        vedha(bn, gn),
        linga(bride.gender, groom.gender),
        gotra(bn, gn),
        varna(br, gr),
        vruksha(bn, gn),
        ayusha(bn, gn),
        pakshi(bn, gn),
        pancha_maha_bhutha(bn.nadi(), gn.nadi()),
        dina(bn, gn),
        nadi(bn.nadi(), gn.nadi()),
        graha(br.lord(), gr.lord())?,
    ])
}
