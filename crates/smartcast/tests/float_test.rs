//! Integration tests for float conversion.

use pretty_assertions::assert_eq;
use rstest::rstest;
use smartcast::prelude::*;

#[rstest]
#[case("1.5", 1.5)]
#[case("3.25", 3.25)]
#[case("0.1", 0.1)]
#[case("-2.5", -2.5)]
#[case("+0.5", 0.5)]
#[case("1", 1.0)]
#[case("0", 0.0)]
#[case("-5", -5.0)]
#[case("123", 123.0)]
#[case(".5", 0.5)]
#[case("-.25", -0.25)]
#[case("0.0001", 0.0001)]
#[case("2.5e-3", 0.0025)]
fn text_converts(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(to_float(input).unwrap(), Some(expected));
}

#[rstest]
#[case(1.5)]
#[case(0.0)]
#[case(-2.5)]
fn floats_pass_through(#[case] input: f64) {
    assert_eq!(to_float(input).unwrap(), Some(input));
}

#[rstest]
#[case(1, 1.0)]
#[case(0, 0.0)]
#[case(-5, -5.0)]
#[case(100, 100.0)]
fn integers_widen(#[case] input: i64, #[case] expected: f64) {
    assert_eq!(to_float(input).unwrap(), Some(expected));
}

#[test]
fn null_policy() {
    assert_eq!(float().accept_null(true).cast_from(None::<&str>).unwrap(), None);
    let error = to_float(None::<f64>).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidType);
}

#[test]
fn not_numeric_keeps_text() {
    let error = to_float("some text").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotNumeric);
    assert_eq!(error.to_string(), "Value some text is not numeric");
}

#[rstest]
#[case("1")]
#[case("1e5")]
#[case("1.")]
#[case(".5")]
fn strict_requires_decimal_form(#[case] input: &str) {
    let error = float().strict(true).cast_from(input).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidType);
    assert_eq!(error.value(), input);
}

#[rstest]
#[case("1e400")]
#[case("-1e400")]
#[case("1.7976931348623159e308")]
fn overflow_is_reported(#[case] input: &str) {
    assert_eq!(to_float(input).unwrap_err().kind(), ErrorKind::FloatOverflow);
}

#[test]
fn zero_rejected_when_disabled() {
    let cast = float().accept_zero(false);
    assert_eq!(cast.cast_from("0.0").unwrap_err().kind(), ErrorKind::ZeroValue);
    assert_eq!(cast.cast_from(-0.0).unwrap_err().kind(), ErrorKind::ZeroValue);
}

#[rstest]
#[case("-5.5", NumberSign::Positive)]
#[case("-1.1", NumberSign::Positive)]
#[case("-0.1", NumberSign::Positive)]
#[case("5.5", NumberSign::Negative)]
#[case("0.1", NumberSign::Negative)]
#[case("+5.5", NumberSign::Negative)]
#[case("+0.1", NumberSign::Negative)]
fn sign_mismatch_on_text(#[case] input: &str, #[case] sign: NumberSign) {
    let error = float().sign(sign).cast_from(input).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidNumberSign);
}

#[rstest]
#[case(-10.25, NumberSign::Positive)]
#[case(-1.75, NumberSign::Positive)]
#[case(10.25, NumberSign::Negative)]
#[case(1.75, NumberSign::Negative)]
fn sign_mismatch_on_floats(#[case] input: f64, #[case] sign: NumberSign) {
    let error = float().sign(sign).cast_from(input).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidNumberSign);
}

#[rstest]
#[case(NumberSign::Positive)]
#[case(NumberSign::Negative)]
fn zero_satisfies_any_sign(#[case] sign: NumberSign) {
    assert_eq!(float().sign(sign).cast_from("0.0").unwrap(), Some(0.0));
    assert_eq!(float().sign(sign).cast_from(0.0).unwrap(), Some(0.0));
}
