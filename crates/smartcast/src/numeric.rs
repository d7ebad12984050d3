//! Numeric helpers shared by the integer, float and array conversions
//!
//! The literal grammar mirrors what configuration files and query strings
//! usually contain: optional surrounding whitespace, an optional sign, digits
//! with an optional fraction (or a bare fraction such as `.5`) and an optional
//! exponent. Hex, octal, binary, `inf` and `nan` are not numbers here.

use std::fmt::Display;
use std::iter;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::CastError;

static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[ \t\n\r\x0B\x0C]*(?P<body>[+-]?(?:(?P<int>[0-9]+)(?:\.(?P<frac>[0-9]*))?|\.(?P<bare>[0-9]+))(?:[eE](?P<exp>[+-]?[0-9]+))?)[ \t\n\r\x0B\x0C]*$",
    )
    .expect("numeric literal pattern is valid")
});

/// Largest number of decimal digits an `i64` magnitude can have.
const MAX_I64_DIGITS: i64 = 19;

/// Exponents are clamped to this magnitude; anything larger already
/// overflows or truncates to zero.
const EXPONENT_LIMIT: i64 = 1_000_000_000;

// ============================================================================
// NUMBER SIGN
// ============================================================================

/// Sign constraint for numeric conversions.
///
/// Zero satisfies every constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberSign {
    /// No constraint.
    #[default]
    Any,
    /// Rejects values below zero.
    Positive,
    /// Rejects values above zero.
    Negative,
}

impl NumberSign {
    /// Returns true if `value` satisfies this constraint.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcast::numeric::NumberSign;
    ///
    /// assert!(NumberSign::Positive.permits(0));
    /// assert!(NumberSign::Negative.permits(-0.0));
    /// assert!(!NumberSign::Negative.permits(3));
    /// ```
    pub fn permits<T: PartialOrd + Default>(self, value: T) -> bool {
        match self {
            Self::Any => true,
            Self::Positive => value >= T::default(),
            Self::Negative => value <= T::default(),
        }
    }
}

// ============================================================================
// NUMERIC LITERAL
// ============================================================================

/// A numeric string split into its parts.
///
/// # Examples
///
/// ```
/// use smartcast::numeric::NumericLiteral;
///
/// let literal = NumericLiteral::parse(" -12.50e1 ").unwrap();
/// assert_eq!(literal.as_str(), "-12.50e1");
/// assert_eq!(literal.truncate_to_i64(), Some(-125));
///
/// assert!(NumericLiteral::parse("1...0").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericLiteral<'a> {
    body: &'a str,
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: i64,
    has_point: bool,
    has_exponent: bool,
}

impl<'a> NumericLiteral<'a> {
    /// Parses `text`, returning `None` if it is not a numeric literal.
    pub fn parse(text: &'a str) -> Option<Self> {
        let caps = NUMERIC_LITERAL.captures(text)?;
        let body = caps.name("body")?.as_str();

        let (integer, fraction, has_point) = match caps.name("int") {
            Some(int) => match caps.name("frac") {
                Some(frac) => (int.as_str(), frac.as_str(), true),
                None => (int.as_str(), "", false),
            },
            None => ("", caps.name("bare")?.as_str(), true),
        };

        let exp = caps.name("exp").map(|m| m.as_str());

        Some(Self {
            body,
            negative: body.starts_with('-'),
            integer,
            fraction,
            exponent: exp.map_or(0, parse_exponent),
            has_point,
            has_exponent: exp.is_some(),
        })
    }

    /// The literal without surrounding whitespace.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.body
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True when the literal has neither a decimal point nor an exponent.
    #[must_use]
    pub fn is_integral_form(&self) -> bool {
        !self.has_point && !self.has_exponent
    }

    /// Truncates the literal toward zero.
    ///
    /// Works on the decimal digits directly, so the result is exact for
    /// every literal and `None` means the truncated value lies outside the
    /// `i64` range.
    #[must_use]
    pub fn truncate_to_i64(&self) -> Option<i64> {
        let digits = || self.integer.bytes().chain(self.fraction.bytes());
        let total = self.integer.len() + self.fraction.len();
        let leading_zeros = digits().take_while(|&b| b == b'0').count();

        if leading_zeros == total {
            return Some(0);
        }

        // Position of the decimal point counted from the first significant digit.
        let point = (self.integer.len() as i64)
            .saturating_add(self.exponent)
            .saturating_sub(leading_zeros as i64);

        if point <= 0 {
            return Some(0);
        }
        if point > MAX_I64_DIGITS {
            return None;
        }

        // At most 19 digits, which always fits in a u64.
        let magnitude = digits()
            .skip(leading_zeros)
            .chain(iter::repeat(b'0'))
            .take(point as usize)
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));

        if self.negative {
            if magnitude == i64::MIN.unsigned_abs() {
                Some(i64::MIN)
            } else {
                i64::try_from(magnitude).ok().map(|m| -m)
            }
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Parses the literal as a double. Magnitudes beyond the finite range
    /// come back as infinities.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.body.parse::<f64>().ok()
    }
}

fn parse_exponent(text: &str) -> i64 {
    text.parse::<i64>()
        .unwrap_or(if text.starts_with('-') {
            -EXPONENT_LIMIT
        } else {
            EXPONENT_LIMIT
        })
        .clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT)
}

/// Returns true if `text` is a numeric literal.
///
/// # Examples
///
/// ```
/// use smartcast::numeric::is_numeric;
///
/// assert!(is_numeric("+1.5e3"));
/// assert!(is_numeric(".5"));
/// assert!(is_numeric(" 42 "));
/// assert!(!is_numeric("0x1A"));
/// assert!(!is_numeric(""));
/// ```
pub fn is_numeric(text: &str) -> bool {
    NUMERIC_LITERAL.is_match(text)
}

/// A number recovered from text: integer-form literals that fit `i64`
/// become integers, everything else a finite double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

/// Reads numeric-looking text as a number.
///
/// Returns `None` for non-numeric text and for literals whose double value
/// is not finite.
///
/// # Examples
///
/// ```
/// use smartcast::numeric::{Number, number_from_text};
///
/// assert_eq!(number_from_text("02"), Some(Number::Integer(2)));
/// assert_eq!(number_from_text("1.0"), Some(Number::Float(1.0)));
/// assert_eq!(number_from_text("apple"), None);
/// ```
pub fn number_from_text(text: &str) -> Option<Number> {
    let literal = NumericLiteral::parse(text)?;

    if literal.is_integral_form()
        && let Ok(value) = literal.as_str().parse::<i64>()
    {
        return Some(Number::Integer(value));
    }

    literal
        .to_f64()
        .filter(|value| value.is_finite())
        .map(Number::Float)
}

// ============================================================================
// POLICY CHECKS
// ============================================================================

/// Fails with `ZeroValue` if `value` is zero and zero is not accepted.
pub(crate) fn check_zero<T>(value: T, accept_zero: bool) -> Result<(), CastError>
where
    T: PartialEq + Default + Display,
{
    if !accept_zero && value == T::default() {
        return Err(CastError::zero_value(value.to_string()));
    }
    Ok(())
}

/// Fails with `InvalidNumberSign` if `value` violates `sign`.
pub(crate) fn check_sign<T>(value: T, sign: NumberSign) -> Result<(), CastError>
where
    T: PartialOrd + Default + Display + Copy,
{
    if sign.permits(value) {
        Ok(())
    } else {
        Err(CastError::invalid_number_sign(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn grammar_accepts() {
        for text in [
            "0", "-5", "+10", "1.", ".5", "-.25", "1e3", "1E-3", "1.5e+2", " 7", "7 ", "\t7\n",
            "000123",
        ] {
            assert!(is_numeric(text), "{text:?} should be numeric");
        }
    }

    #[test]
    fn grammar_rejects() {
        for text in [
            "", " ", ".", "-", "+-1", "1...0", "1.2.3", "1e", "e5", "0x1A", "1_000", "inf", "NaN",
            "1 2", "١٢",
        ] {
            assert!(!is_numeric(text), "{text:?} should not be numeric");
        }
    }

    #[test]
    fn literal_parts() {
        let literal = NumericLiteral::parse("-.25").unwrap();
        assert!(literal.is_negative());
        assert!(!literal.is_integral_form());
        assert_eq!(literal.as_str(), "-.25");

        assert!(NumericLiteral::parse("+12").unwrap().is_integral_form());
        assert!(!NumericLiteral::parse("12e0").unwrap().is_integral_form());
    }

    #[test]
    fn truncation() {
        let cases = [
            ("0", 0),
            ("123", 123),
            ("-5", -5),
            ("1.9", 1),
            ("-1.9", -1),
            ("-0.5", 0),
            ("0.0001", 0),
            ("1e3", 1000),
            ("1.25e1", 12),
            ("125e-1", 12),
            ("5e-400", 0),
            ("000123", 123),
            ("9223372036854775807", i64::MAX),
            ("-9223372036854775808", i64::MIN),
            ("922337203685477580.79e1", i64::MAX),
        ];
        for (text, expected) in cases {
            assert_eq!(
                NumericLiteral::parse(text).unwrap().truncate_to_i64(),
                Some(expected),
                "{text}"
            );
        }
    }

    #[test]
    fn truncation_overflow() {
        for text in [
            "9223372036854775808",
            "-9223372036854775809",
            "9999999999999999999",
            "9999999999999999999999999",
            "1e19",
            "1e999999999999",
        ] {
            assert_eq!(
                NumericLiteral::parse(text).unwrap().truncate_to_i64(),
                None,
                "{text}"
            );
        }
    }

    #[test]
    fn zero_with_huge_exponent_is_zero() {
        assert_eq!(
            NumericLiteral::parse("0e999999999999")
                .unwrap()
                .truncate_to_i64(),
            Some(0)
        );
    }

    #[test]
    fn numbers_from_text() {
        assert_eq!(number_from_text("-2"), Some(Number::Integer(-2)));
        assert_eq!(number_from_text("+7"), Some(Number::Integer(7)));
        assert_eq!(number_from_text("3.5"), Some(Number::Float(3.5)));
        assert_eq!(number_from_text("1e2"), Some(Number::Float(100.0)));
        assert_eq!(
            number_from_text("9223372036854775808"),
            Some(Number::Float(9_223_372_036_854_775_808.0))
        );
        assert_eq!(number_from_text("1e400"), None);
        assert_eq!(number_from_text("foo"), None);
    }

    #[test]
    fn sign_permits_zero() {
        assert!(NumberSign::Positive.permits(0i64));
        assert!(NumberSign::Negative.permits(0i64));
        assert!(NumberSign::Positive.permits(-0.0f64));
        assert!(NumberSign::Any.permits(-1i64));
        assert!(!NumberSign::Positive.permits(-1i64));
    }

    #[test]
    fn zero_check() {
        assert!(check_zero(0i64, true).is_ok());
        assert!(check_zero(1i64, false).is_ok());
        assert_eq!(
            check_zero(-0.0f64, false).unwrap_err().kind(),
            ErrorKind::ZeroValue
        );
    }

    #[test]
    fn sign_check_reports_value() {
        let error = check_sign(-5i64, NumberSign::Positive).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidNumberSign);
        assert_eq!(error.value(), "-5");
    }

    #[test]
    fn sign_deserializes_lowercase() {
        let sign: NumberSign = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(sign, NumberSign::Negative);
    }
}
