use proptest::prelude::*;
use value::{coerce, coerce_number, Arg, RawParam};

// ======================================================================
// Numbers
// ======================================================================

#[test]
fn plain_decimals() {
    assert_eq!(coerce_number("10"), 10.0);
    assert_eq!(coerce_number("-2.5"), -2.5);
    assert_eq!(coerce_number("+7"), 7.0);
    assert_eq!(coerce_number("1e3"), 1000.0);
    assert_eq!(coerce_number(".5"), 0.5);
    assert_eq!(coerce_number("3."), 3.0);
    assert_eq!(coerce_number("007"), 7.0);
}

#[test]
fn whitespace_and_empty() {
    assert_eq!(coerce_number("  42\t"), 42.0);
    assert_eq!(coerce_number(""), 0.0);
    assert_eq!(coerce_number("   "), 0.0);
}

#[test]
fn infinity_spellings() {
    assert_eq!(coerce_number("Infinity"), f64::INFINITY);
    assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    assert!(coerce_number("inf").is_nan());
    assert!(coerce_number("infinity").is_nan());
    assert!(coerce_number("NaN").is_nan());
}

#[test]
fn radix_literals_are_unsigned() {
    assert_eq!(coerce_number("0x10"), 16.0);
    assert_eq!(coerce_number("0B11"), 3.0);
    assert!(coerce_number("-0x10").is_nan());
}

#[test]
fn garbage_becomes_nan() {
    for token in ["abc", "12abc", "1,000", "--1", "-", "1e", "0x1g"] {
        assert!(coerce_number(token).is_nan(), "{token:?} should be NaN");
    }
}

// ======================================================================
// Arguments
// ======================================================================

#[test]
fn matrix_tokens() {
    let arg = coerce(&RawParam::from("[[1,2],[3,4]]"));
    assert_eq!(arg, Arg::Matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
}

#[test]
fn malformed_matrix_is_nan() {
    let arg = coerce(&RawParam::from("[[1,2],[3,"));
    assert!(arg.as_number().is_nan());
    assert!(arg.as_matrix().is_none());
}

#[test]
fn repeated_keys_are_nan() {
    let arg = coerce(&RawParam::Repeated(vec!["1".into(), "2".into()]));
    assert!(arg.as_number().is_nan());
}

#[test]
fn missing_argument_is_nan() {
    assert!(Arg::missing().as_number().is_nan());
}

proptest! {
    #[test]
    fn integers_round_trip(n in -1_000_000_000i64..1_000_000_000i64) {
        prop_assert_eq!(coerce_number(&n.to_string()), n as f64);
    }

    #[test]
    fn never_panics(s in "\\PC*") {
        let _ = coerce(&RawParam::Single(s));
    }
}
