//! The converter: default options for every operation in one place
//!
//! A [`Converter`] bundles the options of each cast so an application can
//! configure them once (in code or from JSON) and then convert values
//! without repeating flags at every call site.
//!
//! # Examples
//!
//! ```
//! use smartcast::converter::Converter;
//!
//! let converter = Converter::from_json_str(r#"{
//!     "integer": { "sign": "positive", "accept_zero": false },
//!     "array": { "accept_null": true }
//! }"#).unwrap();
//!
//! assert_eq!(converter.to_integer("42").unwrap(), Some(42));
//! assert!(converter.to_integer("0").is_err());
//! assert_eq!(converter.to_array(None::<&str>).unwrap(), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::casts::{
    AllowedValues, ArrayCast, ArrayInput, BooleanCast, BooleanInput, Element, FloatCast,
    FloatInput, IntegerCast, IntegerInput, MatchOptions, allowed::ensure_allowed,
};
use crate::foundation::{Cast, CastError};

/// Options for every conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Converter {
    pub integer: IntegerCast,
    pub float: FloatCast,
    pub array: ArrayCast,
    pub allowed: MatchOptions,
}

impl Converter {
    /// Creates a converter with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the text is not valid JSON, has the
    /// wrong shape, or names an unknown option.
    pub fn from_json_str(json: &str) -> Result<Self, CastError> {
        let converter: Self = serde_json::from_str(json).map_err(|e| {
            CastError::invalid_argument("configuration").with_detail(e.to_string())
        })?;

        tracing::debug!(
            integer_strict = converter.integer.strict,
            float_strict = converter.float.strict,
            max_depth = converter.array.max_depth,
            allowed_strict = converter.allowed.strict,
            "loaded converter configuration"
        );

        Ok(converter)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_integer(mut self, integer: IntegerCast) -> Self {
        self.integer = integer;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_float(mut self, float: FloatCast) -> Self {
        self.float = float;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_array(mut self, array: ArrayCast) -> Self {
        self.array = array;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_allowed(mut self, allowed: MatchOptions) -> Self {
        self.allowed = allowed;
        self
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    /// Converts `value` to an integer.
    ///
    /// # Errors
    ///
    /// `InvalidType`, `NotNumeric`, `IntegerOverflow`, `ZeroValue` or
    /// `InvalidNumberSign`.
    pub fn to_integer<'a>(
        &self,
        value: impl Into<IntegerInput<'a>>,
    ) -> Result<Option<i64>, CastError> {
        self.integer.cast(value.into())
    }

    /// Converts `value` to a float.
    ///
    /// # Errors
    ///
    /// `InvalidType`, `NotNumeric`, `FloatOverflow`, `ZeroValue` or
    /// `InvalidNumberSign`.
    pub fn to_float<'a>(
        &self,
        value: impl Into<FloatInput<'a>>,
    ) -> Result<Option<f64>, CastError> {
        self.float.cast(value.into())
    }

    /// Converts `value` to a boolean.
    ///
    /// # Errors
    ///
    /// `InvalidBooleanString` for text outside the vocabulary.
    pub fn to_boolean<'a>(&self, value: impl Into<BooleanInput<'a>>) -> Result<bool, CastError> {
        BooleanCast.cast(value.into())
    }

    /// Converts `value` to a list.
    ///
    /// # Errors
    ///
    /// `InvalidType` for malformed list text or a rejected null.
    pub fn to_array<'a>(
        &self,
        value: impl Into<ArrayInput<'a>>,
    ) -> Result<Option<Vec<Element>>, CastError> {
        self.array.cast(value.into())
    }

    /// Checks `value` against an allow-list.
    ///
    /// # Errors
    ///
    /// `InvalidType` when nothing matches or null is rejected,
    /// `InvalidArgument` when `allowed` names an enumeration without backing
    /// values.
    pub fn ensure_allowed_value<'a>(
        &self,
        value: impl Into<Option<&'a str>>,
        allowed: &AllowedValues,
    ) -> Result<Option<String>, CastError> {
        ensure_allowed(value.into(), allowed, self.allowed)
    }
}
