//! Integration tests — parse pattern text in both input shapes.

use chordlib::{parse_pattern, pattern_to_json, Fingering, Pattern, PRESETS};
use pretty_assertions::assert_eq;

use Fingering::{Fretted, Muted, Open};

// ─── Compact form ───────────────────────────────────────────────────

#[test]
fn parse_compact_form() {
    let pattern = parse_pattern("2212xx").expect("Failed to parse 2212xx");
    assert_eq!(
        pattern,
        Pattern::new([Fretted(2), Fretted(2), Fretted(1), Fretted(2), Muted, Muted])
    );
}

#[test]
fn compact_form_is_case_insensitive() {
    assert_eq!(
        parse_pattern("2212XX").unwrap(),
        parse_pattern("2212xx").unwrap()
    );
}

#[test]
fn compact_form_with_zeros() {
    let pattern = parse_pattern("022100").unwrap();
    assert_eq!(
        pattern,
        Pattern::new([Open, Fretted(2), Fretted(2), Fretted(1), Open, Open])
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(
        parse_pattern("  x32010\n").unwrap(),
        parse_pattern("x32010").unwrap()
    );
}

// ─── Free form ──────────────────────────────────────────────────────

#[test]
fn parse_all_open() {
    let pattern = parse_pattern("0 0 0 0 0 0").unwrap();
    assert_eq!(pattern, Pattern::new([Open; 6]));
}

#[test]
fn separators_are_interchangeable() {
    let compact = parse_pattern("x32010").unwrap();
    for raw in [
        "x 3 2 0 1 0",
        "x,3,2,0,1,0",
        "x/3/2/0/1/0",
        "x-3-2-0-1-0",
        "x, 3, 2, 0, 1, 0",
        "x  3\t2 0 1 0",
    ] {
        assert_eq!(parse_pattern(raw).unwrap(), compact, "separator form {raw:?}");
    }
}

#[test]
fn multi_digit_frets_need_separators() {
    let pattern = parse_pattern("10 12 12 11 10 10").unwrap();
    assert_eq!(
        pattern,
        Pattern::new([
            Fretted(10),
            Fretted(12),
            Fretted(12),
            Fretted(11),
            Fretted(10),
            Fretted(10),
        ])
    );
}

#[test]
fn no_upper_bound_on_fret_numbers() {
    let pattern = parse_pattern("x x x x x 9999").unwrap();
    assert_eq!(pattern.fingerings()[5], Fretted(9999));
}

// ─── Validation errors ──────────────────────────────────────────────

#[test]
fn empty_input_is_rejected() {
    for raw in ["", "   ", "\t\n"] {
        let err = parse_pattern(raw).unwrap_err();
        assert!(err.contains("6 valores"), "unexpected message: {err}");
    }
}

#[test]
fn wrong_value_count_is_rejected() {
    for raw in ["221xx", "2212000", "2 2 1 x x", "2 2 1 2 x x x"] {
        let err = parse_pattern(raw).unwrap_err();
        assert!(
            err.contains("exactamente 6 valores"),
            "pattern {raw:?}: unexpected message: {err}"
        );
    }
}

#[test]
fn invalid_token_is_rejected() {
    for raw in ["2a12xx", "x 3 2 0 1 b", "x 3 2 0 1 1.5"] {
        let err = parse_pattern(raw).unwrap_err();
        assert!(
            err.contains("Solo se permiten"),
            "pattern {raw:?}: unexpected message: {err}"
        );
    }
}

// ─── Presets ────────────────────────────────────────────────────────

#[test]
fn all_presets_parse() {
    for preset in PRESETS {
        parse_pattern(preset.pattern)
            .unwrap_or_else(|e| panic!("Preset {:?} failed to parse: {e}", preset.name));
    }
}

// ─── JSON serialization ─────────────────────────────────────────────

#[test]
fn pattern_json_roundtrip() {
    let pattern = parse_pattern("022100").unwrap();
    let json = pattern_to_json(&pattern).expect("Should serialize to JSON");

    let deserialized: Pattern = serde_json::from_str(&json).expect("Should deserialize from JSON");
    assert_eq!(deserialized, pattern);
}
