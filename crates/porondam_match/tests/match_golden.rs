//! Golden scenarios and exhaustive invariants for match scoring.

use porondam_match::{
    ALL_ASPECTS, Aspect, ChartAttributes, ChartField, ChartSlot, CompatibilityTier, Gender,
    MatchConfig, MatchError, MatchReport, Role, ScoringDate, TOTAL_MAX_POINTS, compute_match,
    compute_match_with,
};

use Gender::{Female, Male};

fn run(n1: u8, n2: u8, r1: u8, r2: u8, g1: Gender, g2: Gender) -> MatchReport {
    compute_match(
        &ChartAttributes::new(n1, r1, g1),
        &ChartAttributes::new(n2, r2, g2),
    )
    .unwrap()
}

fn points(report: &MatchReport) -> Vec<u8> {
    report.scores.iter().map(|s| s.score).collect()
}

// ---------------------------------------------------------------------------
// Named scenarios
// ---------------------------------------------------------------------------

#[test]
fn ashwini_bharani_same_sign() {
    let r = run(1, 2, 1, 1, Male, Female);
    let nadi = r.score(Aspect::Nadi);
    assert_eq!((nadi.score, nadi.max_points, nadi.favorable), (8, 8, true));
    let linga = r.score(Aspect::Linga);
    assert_eq!((linga.score, linga.favorable), (1, true));

    assert_eq!(
        points(&r),
        [0, 6, 0, 1, 2, 7, 3, 2, 1, 1, 1, 1, 1, 0, 0, 1, 1, 3, 8, 3]
    );
    assert_eq!(r.awarded_points(), 42);
    assert_eq!(r.overall_score, 78);
    assert_eq!(r.matched_count, 15);
    assert_eq!(r.compatibility, CompatibilityTier::Excellent);
    assert!(r.recommendation.english.starts_with("This is an excellent match"));
}

#[test]
fn ashwini_shatabhisha_share_vata() {
    let r = run(1, 24, 1, 11, Male, Female);
    let nadi = r.score(Aspect::Nadi);
    assert_eq!((nadi.score, nadi.favorable), (0, false));
    assert!(r.recommendation.english.contains("Nadi Dosha"));
    assert!(r.recommendation.sinhala.contains("නාඩි දෝෂය"));

    assert_eq!(
        points(&r),
        [3, 0, 0, 0, 4, 0, 0, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 3, 0, 1]
    );
    assert_eq!(r.overall_score, 35);
    assert_eq!(r.matched_count, 10);
    assert_eq!(r.compatibility, CompatibilityTier::Moderate);
    assert!(r.recommendation.english.starts_with("This match shows some challenges."));
    // gana unfavorable, yoni and rajju fine
    assert!(r.recommendation.english.contains("Different temperaments"));
    assert!(!r.recommendation.english.contains("Physical compatibility"));
    assert!(!r.recommendation.english.contains("Same Rajju"));

    let unfavorable: Vec<Aspect> = r.unfavorable().map(|s| s.aspect).collect();
    assert_eq!(unfavorable.len(), 10);
    assert!(unfavorable.contains(&Aspect::Nadi));
    assert!(unfavorable.contains(&Aspect::Gana));
    assert!(!unfavorable.contains(&Aspect::Yoni));
}

#[test]
fn unfavorable_lists_the_rest_in_order() {
    for (n1, n2, r1, r2) in [(1, 2, 1, 1), (8, 23, 4, 5), (14, 10, 7, 5), (27, 1, 12, 1)] {
        let r = run(n1, n2, r1, r2, Female, Male);
        let idx: Vec<u8> = r.unfavorable().map(|s| s.aspect.index()).collect();
        assert_eq!(idx.len() as u8, r.total_aspects - r.matched_count);
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
        assert!(r.unfavorable().all(|s| !s.favorable));
    }
}

#[test]
fn identical_nakshatras() {
    let r = run(5, 5, 2, 2, Male, Female);
    let gotra = r.score(Aspect::Gotra);
    assert_eq!((gotra.score, gotra.favorable), (0, false));
    let vruksha = r.score(Aspect::Vruksha);
    assert_eq!((vruksha.score, vruksha.favorable), (0, false));
    let rajju = r.score(Aspect::Rajju);
    assert!(!rajju.favorable);
    assert!(r.recommendation.english.ends_with("Same Rajju - traditional remedies may be considered."));
    assert!(r.recommendation.sinhala.ends_with("එකම රජ්ජු - සාම්ප්‍රදායික පිළියම් සලකා බැලිය හැක."));
    assert_eq!(
        points(&r),
        [3, 6, 0, 0, 4, 7, 3, 2, 0, 1, 1, 0, 1, 0, 1, 1, 0, 3, 0, 3]
    );
    assert_eq!(r.overall_score, 67);
}

#[test]
fn goat_and_lion_are_directional() {
    // Pushya (Goat) bride, Dhanishtha (Lion) groom
    let r = run(8, 23, 4, 5, Female, Male);
    assert_eq!(r.score(Aspect::Yoni).score, 1);
    assert_eq!(
        points(&r),
        [3, 1, 1, 1, 1, 7, 5, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 3, 0, 5]
    );
    assert_eq!(r.overall_score, 63);

    // Two male charts: the second chart takes the bride role
    let r = run(8, 23, 4, 5, Male, Male);
    assert_eq!(r.first.role, Role::Groom);
    assert_eq!(r.second.role, Role::Bride);
    assert_eq!(r.score(Aspect::Yoni).score, 2);
    assert!(!r.score(Aspect::Linga).favorable);
    assert_eq!(
        points(&r),
        [0, 0, 1, 1, 2, 7, 5, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 5]
    );
    assert_eq!(r.overall_score, 48);

    // Two female charts: the first chart takes the bride role
    let r = run(8, 23, 4, 5, Female, Female);
    assert_eq!(r.first.role, Role::Bride);
    assert_eq!(r.second.role, Role::Groom);
    assert_eq!(r.overall_score, 61);
    assert_eq!(r.matched_count, 13);
}

#[test]
fn chitra_magha_enemy_lords() {
    // Tula (Venus) bride, Simha (Sun) groom: Venus sees Sun as enemy
    let r = run(14, 10, 7, 5, Female, Male);
    let adhipathi = r.score(Aspect::RashiAdhipathi);
    assert_eq!((adhipathi.score, adhipathi.favorable), (0, false));
    let graha = r.score(Aspect::Graha);
    assert_eq!((graha.score, graha.favorable), (1, false));
    assert_eq!(r.overall_score, 59);
    assert_eq!(r.matched_count, 11);
    assert_eq!(r.compatibility, CompatibilityTier::Good);
}

#[test]
fn longitude_charts_match_index_charts() {
    // 10 deg: Ashwini pada 4, Mesha. 205 deg: Vishakha pada 2, Tula.
    let a = ChartAttributes::from_longitude(10.0, Male);
    let b = ChartAttributes::from_longitude(205.0, Female);
    let r = compute_match(&a, &b).unwrap();
    assert_eq!(r.first.nakshatra_id, 1);
    assert_eq!(r.first.pada, Some(4));
    assert_eq!(r.first.rashi_id, 1);
    assert_eq!(r.second.nakshatra_id, 16);
    assert_eq!(r.second.pada, Some(2));
    assert_eq!(r.second.rashi_id, 7);

    let by_index = run(1, 16, 1, 7, Male, Female);
    assert_eq!(r.scores, by_index.scores);
    assert_eq!(r.overall_score, 48);
    assert_eq!(r.matched_count, 13);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn out_of_range_ids_abort() {
    let ok = ChartAttributes::new(1, 1, Male);
    for (bad, field) in [
        (ChartAttributes::new(0, 1, Female), ChartField::Nakshatra),
        (ChartAttributes::new(28, 1, Female), ChartField::Nakshatra),
        (ChartAttributes::new(1, 0, Female), ChartField::Rashi),
        (ChartAttributes::new(1, 13, Female), ChartField::Rashi),
        (ChartAttributes::new(1, 1, Female).with_pada(0), ChartField::Pada),
        (ChartAttributes::new(1, 1, Female).with_pada(5), ChartField::Pada),
    ] {
        match compute_match(&ok, &bad) {
            Err(MatchError::InvalidChart {
                chart: ChartSlot::Second,
                field: f,
                ..
            }) => assert_eq!(f, field),
            other => panic!("expected invalid second chart, got {other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Exhaustive invariants
// ---------------------------------------------------------------------------

fn check_invariants(r: &MatchReport) {
    for (s, a) in r.scores.iter().zip(ALL_ASPECTS) {
        assert_eq!(s.aspect, a);
        assert_eq!(s.max_points, a.max_points());
        assert!(s.score <= s.max_points, "{} {}", a.name(), s.score);
        let threshold = match a {
            Aspect::Gana => 5,
            Aspect::Yoni | Aspect::RashiAdhipathi | Aspect::Graha => 3,
            _ => a.max_points(),
        };
        assert_eq!(s.favorable, s.score >= threshold, "{}", a.name());
    }
    let awarded = r.awarded_points() as u32;
    assert_eq!(
        r.overall_score as u32,
        (200 * awarded + TOTAL_MAX_POINTS as u32) / (2 * TOTAL_MAX_POINTS as u32)
    );
    assert!(r.overall_score <= 100);
    assert_eq!(
        r.matched_count as usize,
        r.scores.iter().filter(|s| s.favorable).count()
    );
    assert_eq!(r.total_aspects, 20);
    assert_eq!(r.compatibility, CompatibilityTier::from_score(r.overall_score));
}

#[test]
fn every_nakshatra_pair() {
    let mut awarded = 0u32;
    let mut overall = 0u32;
    let mut lo = u8::MAX;
    let mut hi = 0u8;
    for n1 in 1..=27 {
        for n2 in 1..=27 {
            let r = run(n1, n2, 1, 7, Male, Female);
            check_invariants(&r);
            awarded += r.awarded_points() as u32;
            overall += r.overall_score as u32;
            lo = lo.min(r.overall_score);
            hi = hi.max(r.overall_score);
        }
    }
    assert_eq!(awarded, 21580);
    assert_eq!(overall, 39920);
    assert_eq!((lo, hi), (28, 76));
}

#[test]
fn every_rashi_pair() {
    let mut awarded = 0u32;
    for r1 in 1..=12 {
        for r2 in 1..=12 {
            let r = run(10, 20, r1, r2, Female, Male);
            check_invariants(&r);
            awarded += r.awarded_points() as u32;
        }
    }
    assert_eq!(awarded, 4438);
}

#[test]
fn favorable_total_same_sign() {
    let mut favorable = 0u32;
    for n1 in 1..=27 {
        for n2 in 1..=27 {
            favorable += run(n1, n2, 3, 3, Female, Male).matched_count as u32;
        }
    }
    assert_eq!(favorable, 10475);
}

#[test]
fn every_gender_combination() {
    for g1 in [Male, Female] {
        for g2 in [Male, Female] {
            for n in [1, 9, 18, 27] {
                let r = run(n, 28 - n, 4, 9, g1, g2);
                check_invariants(&r);
                assert_eq!(r.score(Aspect::Linga).favorable, g1 != g2);
                assert_ne!(r.first.role, r.second.role);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Purity and serialization
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_identical() {
    let a = ChartAttributes::new(12, 6, Female).with_pada(3);
    let b = ChartAttributes::new(21, 10, Male);
    let config = MatchConfig::default().with_date(ScoringDate::new(2025, 6, 1).unwrap());
    let first = compute_match_with(&a, &b, &config).unwrap();
    let second = compute_match_with(&a, &b, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn report_json_shape() {
    let config = MatchConfig::default().with_date("2024-03-09".parse().unwrap());
    let r = compute_match_with(
        &ChartAttributes::new(1, 1, Male),
        &ChartAttributes::new(2, 1, Female),
        &config,
    )
    .unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["overallScore"], 78);
    assert_eq!(v["matchedCount"], 15);
    assert_eq!(v["totalAspects"], 20);
    assert_eq!(v["compatibility"], "Excellent");
    assert_eq!(v["scoredOn"], "2024-03-09");
    assert_eq!(v["scores"].as_array().map(Vec::len), Some(20));
    assert_eq!(v["scores"][18]["aspect"], "nadi");
    assert_eq!(v["scores"][18]["maxPoints"], 8);
    assert_eq!(v["first"]["role"], "groom");
    assert_eq!(v["second"]["gender"], "female");
}

#[test]
fn chart_attributes_from_json() {
    let a: ChartAttributes = serde_json::from_str(
        r#"{"position":{"indices":{"nakshatra":14,"rashi":7}},"gender":"female"}"#,
    )
    .unwrap();
    assert_eq!(a, ChartAttributes::new(14, 7, Female));

    let b: ChartAttributes =
        serde_json::from_str(r#"{"position":{"longitude":200.0},"gender":"male"}"#).unwrap();
    assert_eq!(b, ChartAttributes::from_longitude(200.0, Male));

    let bad: Result<ScoringDate, _> = serde_json::from_str(r#""2023-02-30""#);
    assert!(bad.is_err());
}
