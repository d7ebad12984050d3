//! Error types for conversion failures
//!
//! Every failure is a single [`CastError`] tagged with one [`ErrorKind`].
//! The kind decides the message; the error carries the offending value so
//! callers can report what was rejected without keeping the input around.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed set of ways a conversion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The caller passed a structurally invalid configuration, such as an
    /// allow-list that is neither a set nor a backed enumeration.
    InvalidArgument,
    /// The value is present but fails a structural or format expectation.
    InvalidType,
    /// The value cannot be read as a number at all.
    NotNumeric,
    /// The value is numeric but outside the `i64` range.
    IntegerOverflow,
    /// The value is numeric but outside the finite `f64` range.
    FloatOverflow,
    /// The value is zero and zero was not accepted.
    ZeroValue,
    /// The value's sign conflicts with the required sign.
    InvalidNumberSign,
    /// The text is not part of the boolean vocabulary.
    InvalidBooleanString,
}

impl ErrorKind {
    /// Stable machine-readable code, suitable for i18n lookups and APIs.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::InvalidType => "invalid_type",
            Self::NotNumeric => "not_numeric",
            Self::IntegerOverflow => "integer_overflow",
            Self::FloatOverflow => "float_overflow",
            Self::ZeroValue => "zero_value",
            Self::InvalidNumberSign => "invalid_number_sign",
            Self::InvalidBooleanString => "invalid_boolean_string",
        }
    }

    /// Returns true for the two range-exceeded kinds.
    #[must_use]
    pub const fn is_overflow(self) -> bool {
        matches!(self, Self::IntegerOverflow | Self::FloatOverflow)
    }

    /// Returns true when the failure points at the caller's configuration
    /// rather than at the data being converted.
    #[must_use]
    pub const fn is_caller_error(self) -> bool {
        matches!(self, Self::InvalidArgument)
    }

    fn describe(self, value: &str) -> String {
        match self {
            Self::InvalidArgument => format!("Invalid argument {value}"),
            Self::InvalidType => format!("Value '{value}' has invalid type"),
            Self::NotNumeric => format!("Value {value} is not numeric"),
            Self::IntegerOverflow => format!("Integer overflow: {value}"),
            Self::FloatOverflow => format!("Float overflow: {value}"),
            Self::ZeroValue => "Zero value is not accepted".to_owned(),
            Self::InvalidNumberSign => format!("Value {value} has invalid number sign"),
            Self::InvalidBooleanString => {
                format!("Value '{value}' is not a valid boolean string")
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// CAST ERROR
// ============================================================================

/// A conversion failure.
///
/// The message is derived from the kind and the offending value when the
/// error is built, so every error of a given kind reads the same way.
///
/// # Examples
///
/// ```
/// use smartcast::foundation::{CastError, ErrorKind};
///
/// let error = CastError::not_numeric("some text");
/// assert_eq!(error.kind(), ErrorKind::NotNumeric);
/// assert_eq!(error.value(), "some text");
/// assert_eq!(error.to_string(), "Value some text is not numeric");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[error("{message}{}", render_detail(.detail.as_deref()))]
pub struct CastError {
    kind: ErrorKind,
    value: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<Cow<'static, str>>,
}

fn render_detail(detail: Option<&str>) -> String {
    detail.map(|d| format!(" ({d})")).unwrap_or_default()
}

impl CastError {
    /// Creates an error of the given kind for an offending value.
    ///
    /// `value` is the display form of the rejected input, or its type name
    /// (`null`, `array`) when it has no meaningful text form.
    pub fn new(kind: ErrorKind, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            kind,
            message: kind.describe(&value),
            value,
            detail: None,
        }
    }

    /// Attaches extra diagnostic context, such as a parser message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_detail(mut self, detail: impl Into<Cow<'static, str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn invalid_argument(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, value)
    }

    pub fn invalid_type(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidType, value)
    }

    pub fn not_numeric(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotNumeric, value)
    }

    pub fn integer_overflow(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::IntegerOverflow, value)
    }

    pub fn float_overflow(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::FloatOverflow, value)
    }

    pub fn zero_value(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::ZeroValue, value)
    }

    pub fn invalid_number_sign(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumberSign, value)
    }

    pub fn invalid_boolean_string(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidBooleanString, value)
    }

    /// Error for an absent value where null is not accepted.
    pub fn null_not_accepted() -> Self {
        Self::invalid_type(NULL_TYPE_NAME)
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable code of the error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The offending value, or its type name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Renders the error as a JSON object for API responses.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "value": self.value,
            "message": self.message,
            "detail": self.detail,
        })
    }
}

/// Type name reported for an absent value.
pub const NULL_TYPE_NAME: &str = "null";

/// Type name reported for a sequence value.
pub const ARRAY_TYPE_NAME: &str = "array";
