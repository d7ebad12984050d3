//! Boolean conversion

use crate::foundation::{Cast, CastError};

const TRUTHY: [&str; 4] = ["1", "true", "on", "yes"];
const FALSY: [&str; 4] = ["0", "false", "off", "no"];

/// Values accepted by [`BooleanCast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanInput<'a> {
    Text(&'a str),
    Bool(bool),
}

impl<'a> From<&'a str> for BooleanInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for BooleanInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for BooleanInput<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Converts text to `bool` using a fixed vocabulary.
///
/// `1`, `true`, `on`, `yes` read as `true`; `0`, `false`, `off`, `no` read as
/// `false`. Matching ignores case and surrounding whitespace. Anything else,
/// including empty text, fails with `InvalidBooleanString`.
///
/// # Examples
///
/// ```
/// use smartcast::casts::BooleanCast;
/// use smartcast::foundation::Cast;
///
/// assert!(BooleanCast.cast_from("YES").unwrap());
/// assert!(!BooleanCast.cast_from("off").unwrap());
/// assert!(BooleanCast.cast_from("maybe").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BooleanCast;

impl Cast for BooleanCast {
    type Input<'a> = BooleanInput<'a>;
    type Output = bool;

    fn cast(&self, input: BooleanInput<'_>) -> Result<bool, CastError> {
        let text = match input {
            BooleanInput::Bool(value) => return Ok(value),
            BooleanInput::Text(text) => text,
        };

        let word = text.trim();
        if word.is_empty() {
            return Err(CastError::invalid_boolean_string(text));
        }

        if TRUTHY.iter().any(|t| word.eq_ignore_ascii_case(t)) {
            Ok(true)
        } else if FALSY.iter().any(|f| word.eq_ignore_ascii_case(f)) {
            Ok(false)
        } else {
            Err(CastError::invalid_boolean_string(text))
        }
    }
}

/// Creates a boolean conversion.
#[must_use]
pub const fn boolean() -> BooleanCast {
    BooleanCast
}
