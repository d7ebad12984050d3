//! Float conversion

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{Cast, CastError};
use crate::numeric::{NumberSign, NumericLiteral, check_sign, check_zero};

static STRICT_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+\.[0-9]+$").expect("decimal pattern is valid"));

// ============================================================================
// INPUT
// ============================================================================

/// Values accepted by [`FloatCast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatInput<'a> {
    Text(&'a str),
    Float(f64),
    /// Widened to `f64` without any text rules applied.
    Integer(i64),
    Null,
}

impl<'a> From<&'a str> for FloatInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for FloatInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FloatInput<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for FloatInput<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<i64> for FloatInput<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl<'a, T: Into<FloatInput<'a>>> From<Option<T>> for FloatInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// FLOAT CAST
// ============================================================================

/// Converts text or numbers to `f64`.
///
/// Defaults: any sign, not strict, zero accepted, null rejected.
///
/// Strict mode only accepts plain decimal text with a mandatory point
/// (`"1.5"`, `"-0.25"`); bare integers and exponent forms are rejected.
/// Literals beyond the finite double range fail with `FloatOverflow`.
///
/// # Examples
///
/// ```
/// use smartcast::casts::FloatCast;
/// use smartcast::foundation::{Cast, ErrorKind};
///
/// assert_eq!(FloatCast::new().cast_from("-.25").unwrap(), Some(-0.25));
/// assert_eq!(
///     FloatCast::new().cast_from("1e400").unwrap_err().kind(),
///     ErrorKind::FloatOverflow,
/// );
/// assert_eq!(
///     FloatCast::new().strict(true).cast_from("1").unwrap_err().kind(),
///     ErrorKind::InvalidType,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FloatCast {
    pub sign: NumberSign,
    pub strict: bool,
    pub accept_zero: bool,
    pub accept_null: bool,
}

impl Default for FloatCast {
    fn default() -> Self {
        Self {
            sign: NumberSign::Any,
            strict: false,
            accept_zero: true,
            accept_null: false,
        }
    }
}

impl FloatCast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn sign(mut self, sign: NumberSign) -> Self {
        self.sign = sign;
        self
    }

    /// Requires an explicit decimal point in text input.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn accept_zero(mut self, accept_zero: bool) -> Self {
        self.accept_zero = accept_zero;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn accept_null(mut self, accept_null: bool) -> Self {
        self.accept_null = accept_null;
        self
    }

    fn parse_text(&self, text: &str) -> Result<f64, CastError> {
        let literal = NumericLiteral::parse(text).ok_or_else(|| CastError::not_numeric(text))?;

        if self.strict && !STRICT_DECIMAL.is_match(text) {
            return Err(CastError::invalid_type(text));
        }

        let value = literal
            .to_f64()
            .ok_or_else(|| CastError::not_numeric(text))?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CastError::float_overflow(text))
        }
    }
}

fn check_typed(value: f64) -> Result<f64, CastError> {
    if value.is_nan() {
        Err(CastError::not_numeric(value.to_string()))
    } else if value.is_infinite() {
        Err(CastError::float_overflow(value.to_string()))
    } else {
        Ok(value)
    }
}

impl Cast for FloatCast {
    type Input<'a> = FloatInput<'a>;
    type Output = Option<f64>;

    fn cast(&self, input: FloatInput<'_>) -> Result<Option<f64>, CastError> {
        let value = match input {
            FloatInput::Null if self.accept_null => return Ok(None),
            FloatInput::Null => return Err(CastError::null_not_accepted()),
            FloatInput::Float(value) => check_typed(value)?,
            FloatInput::Integer(value) => value as f64,
            FloatInput::Text(text) => self.parse_text(text)?,
        };

        check_zero(value, self.accept_zero)?;
        check_sign(value, self.sign)?;

        Ok(Some(value))
    }
}

/// Creates a float conversion with default options.
#[must_use]
pub fn float() -> FloatCast {
    FloatCast::new()
}
