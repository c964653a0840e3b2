//! Integration tests for the catalog and longitude lookups.

use porondam_base::{
    ALL_NAKSHATRAS, ALL_RASHIS, Gana, Graha, NAKSHATRA_SPAN, Nakshatra, PADA_SPAN, Rashi,
    RashiPart, Yoni, deg_to_dms, ensure_catalog, gana_score, graha_maitri, is_vedha,
    nakshatra_count, nakshatra_from_longitude, nakshatra_from_rashi, nakshatra_record,
    rajju_of, rashi_from_longitude, rashi_record, yoni_score,
};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_verifies() {
    assert_eq!(ensure_catalog(), Ok(()));
}

#[test]
fn record_lookups_by_id() {
    let rec = nakshatra_record(14).unwrap();
    assert_eq!(rec.nakshatra, Nakshatra::Chitra);
    assert_eq!(rec.lord, Graha::Mangal);
    assert!(nakshatra_record(0).is_err());

    let rec = rashi_record(12).unwrap();
    assert_eq!(rec.rashi, Rashi::Meena);
    assert_eq!(rec.lord, Graha::Guru);
    assert!(rashi_record(13).is_err());
}

#[test]
fn every_catalog_pair_scores() {
    for a in ALL_NAKSHATRAS {
        for b in ALL_NAKSHATRAS {
            let y = yoni_score(a.yoni(), b.yoni()).unwrap();
            assert!(y <= 4);
            let g = gana_score(a.gana(), b.gana()).unwrap();
            assert!(g <= 6);
            graha_maitri(a.lord(), b.lord()).unwrap();
        }
    }
    for a in ALL_RASHIS {
        for b in ALL_RASHIS {
            graha_maitri(a.lord(), b.lord()).unwrap();
        }
    }
}

#[test]
fn gana_table_is_directional() {
    assert_eq!(gana_score(Gana::Deva, Gana::Manushya), Ok(5));
    assert_eq!(gana_score(Gana::Manushya, Gana::Deva), Ok(6));
    assert_eq!(gana_score(Gana::Rakshasa, Gana::Deva), Ok(0));
    assert_eq!(gana_score(Gana::Deva, Gana::Rakshasa), Ok(1));
}

#[test]
fn yoni_identity_is_full() {
    for a in ALL_NAKSHATRAS {
        assert_eq!(yoni_score(a.yoni(), a.yoni()), Ok(4));
    }
    assert_eq!(yoni_score(Yoni::Cat, Yoni::Rat), Ok(0));
}

#[test]
fn count_is_cyclic() {
    for a in ALL_NAKSHATRAS {
        assert_eq!(nakshatra_count(a, a), 1);
        for b in ALL_NAKSHATRAS {
            let ab = nakshatra_count(a, b);
            let ba = nakshatra_count(b, a);
            assert!((1..=27).contains(&ab));
            if a != b {
                assert_eq!(ab as u16 + ba as u16, 29);
            }
        }
    }
    assert_eq!(nakshatra_count(Nakshatra::Revati, Nakshatra::Ashwini), 2);
}

#[test]
fn rajju_and_vedha_are_positional() {
    assert_eq!(rajju_of(Nakshatra::Ashwini), rajju_of(Nakshatra::Ardra));
    assert!(is_vedha(Nakshatra::Magha, Nakshatra::Revati));
    assert!(!is_vedha(Nakshatra::Magha, Nakshatra::Ashwini));
}

// ---------------------------------------------------------------------------
// Nakshatra from longitude
// ---------------------------------------------------------------------------

#[test]
fn nakshatra_sweep_all_27() {
    for i in 0..27u8 {
        let lon = i as f64 * NAKSHATRA_SPAN + NAKSHATRA_SPAN / 2.0;
        let info = nakshatra_from_longitude(lon);
        assert_eq!(info.nakshatra.index(), i, "nakshatra at {lon} deg");
    }
}

#[test]
fn pada_extremes() {
    for i in 0..27u8 {
        let start = i as f64 * NAKSHATRA_SPAN;
        let first = nakshatra_from_longitude(start + 1e-9);
        assert_eq!(first.nakshatra.index(), i);
        assert_eq!(first.pada, 1);

        let last = nakshatra_from_longitude(start + NAKSHATRA_SPAN - 1e-9);
        assert_eq!(last.nakshatra.index(), i);
        assert_eq!(last.pada, 4);
    }
}

#[test]
fn exact_decimal_boundaries() {
    // (longitude, nakshatra id, pada): each longitude starts a pada
    let cases: [(f64, u8, u8); 12] = [
        (0.0, 1, 1),
        (10.0, 1, 4),
        (20.0, 2, 3),
        (30.0, 3, 2),
        (40.0, 4, 1),
        (90.0, 7, 4),
        (120.0, 10, 1),
        (180.0, 14, 3),
        (200.0, 16, 1),
        (250.0, 19, 4),
        (330.0, 25, 4),
        (350.0, 27, 2),
    ];
    for (lon, id, pada) in cases {
        let info = nakshatra_from_longitude(lon);
        assert_eq!(
            (info.nakshatra.id(), info.pada),
            (id, pada),
            "nakshatra/pada at {lon} deg"
        );
        assert!(info.degrees_in_pada < 1e-9, "offset in pada at {lon} deg");
    }
}

#[test]
fn pada_offsets_within_span() {
    let info = nakshatra_from_longitude(200.0);
    assert!(info.degrees_in_nakshatra >= 0.0 && info.degrees_in_nakshatra < NAKSHATRA_SPAN);
    assert!(info.degrees_in_pada >= 0.0 && info.degrees_in_pada < PADA_SPAN);
}

#[test]
fn longitude_is_periodic() {
    for base in [1.5, 47.25, 123.4, 200.0, 359.5] {
        let expected = nakshatra_from_longitude(base);
        for k in [-3.0, -1.0, 1.0, 2.0, 5.0] {
            let info = nakshatra_from_longitude(base + 360.0 * k);
            assert_eq!(info.nakshatra, expected.nakshatra, "{base} + 360*{k}");
            assert_eq!(info.pada, expected.pada, "{base} + 360*{k}");
            assert_eq!(
                rashi_from_longitude(base + 360.0 * k).rashi,
                rashi_from_longitude(base).rashi
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Rashi
// ---------------------------------------------------------------------------

#[test]
fn rashi_sweep_all_12() {
    for (i, r) in ALL_RASHIS.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0;
        let info = rashi_from_longitude(lon);
        assert_eq!(info.rashi, *r, "rashi at {lon} deg");
    }
}

#[test]
fn rashi_dms_precision() {
    let lon = 45.0 + 30.0 / 60.0 + 15.5 / 3600.0;
    let info = rashi_from_longitude(lon);
    assert_eq!(info.rashi, Rashi::Vrishabha);
    assert_eq!(info.dms.degrees, 15);
    assert_eq!(info.dms.minutes, 30);
    assert!((info.dms.seconds - 15.5).abs() < 0.01, "seconds = {}", info.dms.seconds);
}

#[test]
fn dms_round_trip() {
    let d = deg_to_dms(23.853);
    let reconstructed = d.degrees as f64 + d.minutes as f64 / 60.0 + d.seconds / 3600.0;
    assert!((reconstructed - 23.853).abs() < 1e-10, "reconstructed = {reconstructed}");
}

#[test]
fn rashi_fallback_lands_inside_rashi() {
    // The fallback nakshatra must overlap the rashi it came from.
    for r in ALL_RASHIS {
        for part in [RashiPart::Start, RashiPart::Middle, RashiPart::End] {
            let n = nakshatra_from_rashi(r, part);
            let n_start = n.index() as f64 * NAKSHATRA_SPAN;
            let n_end = n_start + NAKSHATRA_SPAN;
            let r_start = r.index() as f64 * 30.0;
            let r_end = r_start + 30.0;
            assert!(
                n_start < r_end && n_end > r_start,
                "{} {:?} -> {}",
                r.name(),
                part,
                n.name()
            );
        }
    }
}
