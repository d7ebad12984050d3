//! Integer conversion

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{Cast, CastError};
use crate::numeric::{NumberSign, NumericLiteral, check_sign, check_zero};

static TRAILING_ZERO_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.0+$").expect("trailing zero pattern is valid"));

static FRACTIONAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[0-9]").expect("fractional part pattern is valid"));

// ============================================================================
// INPUT
// ============================================================================

/// Values accepted by [`IntegerCast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerInput<'a> {
    Text(&'a str),
    Integer(i64),
    Null,
}

impl<'a> From<&'a str> for IntegerInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for IntegerInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for IntegerInput<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for IntegerInput<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl<'a, T: Into<IntegerInput<'a>>> From<Option<T>> for IntegerInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// INTEGER CAST
// ============================================================================

/// Converts text or integers to `i64`.
///
/// Defaults: any sign, strict, zero accepted, null rejected.
///
/// Text is checked against the numeric grammar, a trailing `.0+` is dropped
/// (`"123.000"` reads as `123`), and in strict mode any remaining fractional
/// digits are rejected. Non-strict mode truncates toward zero. Values outside
/// the `i64` range fail with `IntegerOverflow`.
///
/// # Examples
///
/// ```
/// use smartcast::casts::IntegerCast;
/// use smartcast::foundation::{Cast, ErrorKind};
///
/// let cast = IntegerCast::new();
/// assert_eq!(cast.cast_from("123.000").unwrap(), Some(123));
/// assert_eq!(cast.cast_from("1.5").unwrap_err().kind(), ErrorKind::InvalidType);
///
/// let loose = IntegerCast::new().strict(false);
/// assert_eq!(loose.cast_from("1.5").unwrap(), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntegerCast {
    pub sign: NumberSign,
    pub strict: bool,
    pub accept_zero: bool,
    pub accept_null: bool,
}

impl Default for IntegerCast {
    fn default() -> Self {
        Self {
            sign: NumberSign::Any,
            strict: true,
            accept_zero: true,
            accept_null: false,
        }
    }
}

impl IntegerCast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn sign(mut self, sign: NumberSign) -> Self {
        self.sign = sign;
        self
    }

    /// Rejects text with a fractional part instead of truncating it.
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

    fn parse_text(&self, text: &str) -> Result<i64, CastError> {
        if NumericLiteral::parse(text).is_none() {
            return Err(CastError::not_numeric(text));
        }

        let normalized = TRAILING_ZERO_FRACTION.replace(text, "");

        if self.strict && FRACTIONAL_PART.is_match(&normalized) {
            return Err(CastError::invalid_type(text));
        }

        // Dropping `.0+` from a literal leaves a literal.
        let literal =
            NumericLiteral::parse(&normalized).ok_or_else(|| CastError::not_numeric(text))?;

        literal
            .truncate_to_i64()
            .ok_or_else(|| CastError::integer_overflow(text))
    }
}

impl Cast for IntegerCast {
    type Input<'a> = IntegerInput<'a>;
    type Output = Option<i64>;

    fn cast(&self, input: IntegerInput<'_>) -> Result<Option<i64>, CastError> {
        let value = match input {
            IntegerInput::Null if self.accept_null => return Ok(None),
            IntegerInput::Null => return Err(CastError::null_not_accepted()),
            IntegerInput::Integer(value) => value,
            IntegerInput::Text(text) => self.parse_text(text)?,
        };

        check_zero(value, self.accept_zero)?;
        check_sign(value, self.sign)?;

        Ok(Some(value))
    }
}

/// Creates an integer conversion with default options.
#[must_use]
pub fn integer() -> IntegerCast {
    IntegerCast::new()
}
