//! # smartcast
//!
//! Strict, configurable conversion of untrusted text (query strings, form
//! fields, environment variables, config files) into typed values.
//!
//! ## Quick Start
//!
//! ```
//! use smartcast::prelude::*;
//!
//! assert_eq!(to_integer("123.000").unwrap(), Some(123));
//! assert_eq!(to_float("-.5").unwrap(), Some(-0.5));
//! assert!(to_boolean("Yes").unwrap());
//!
//! let list = to_array("apple, banana , cherry").unwrap().unwrap();
//! assert_eq!(list, vec![Element::from("apple"), Element::from("banana"), Element::from("cherry")]);
//!
//! let allowed = AllowedValues::set(["draft", "live"]);
//! assert_eq!(ensure_allowed_value("live", &allowed).unwrap().as_deref(), Some("live"));
//! ```
//!
//! ## Operations
//!
//! | Operation | Cast | Defaults |
//! |---|---|---|
//! | [`to_integer`] | [`IntegerCast`](casts::IntegerCast) | any sign, strict, zero ok, null rejected |
//! | [`to_float`] | [`FloatCast`](casts::FloatCast) | any sign, not strict, zero ok, null rejected |
//! | [`to_boolean`] | [`BooleanCast`](casts::BooleanCast) | |
//! | [`to_array`] | [`ArrayCast`](casts::ArrayCast) | null rejected, depth 128 |
//! | [`ensure_allowed_value`] | [`AllowedValuesCast`](casts::AllowedValuesCast) | strict, null rejected |
//!
//! The free functions use the defaults. Configure a cast with its builder
//! methods, or load a whole [`Converter`](converter::Converter) from JSON.
//!
//! ## Errors
//!
//! Every failure is a [`CastError`](foundation::CastError) tagged with an
//! [`ErrorKind`](foundation::ErrorKind) and carrying the offending value.

pub mod casts;
pub mod converter;
pub mod enumeration;
pub mod foundation;
mod macros;
pub mod numeric;
pub mod prelude;

use casts::{
    AllowedValues, ArrayCast, ArrayInput, BooleanCast, BooleanInput, Element, FloatCast,
    FloatInput, IntegerCast, IntegerInput, MatchOptions,
};
use foundation::{Cast, CastResult};

/// Converts `value` to an integer with the default options.
///
/// # Errors
///
/// See [`IntegerCast`].
pub fn to_integer<'a>(value: impl Into<IntegerInput<'a>>) -> CastResult<Option<i64>> {
    IntegerCast::default().cast(value.into())
}

/// Converts `value` to a float with the default options.
///
/// # Errors
///
/// See [`FloatCast`].
pub fn to_float<'a>(value: impl Into<FloatInput<'a>>) -> CastResult<Option<f64>> {
    FloatCast::default().cast(value.into())
}

/// Converts `value` to a boolean.
///
/// # Errors
///
/// See [`BooleanCast`].
pub fn to_boolean<'a>(value: impl Into<BooleanInput<'a>>) -> CastResult<bool> {
    BooleanCast.cast(value.into())
}

/// Converts `value` to a list with the default options.
///
/// # Errors
///
/// See [`ArrayCast`].
pub fn to_array<'a>(value: impl Into<ArrayInput<'a>>) -> CastResult<Option<Vec<Element>>> {
    ArrayCast::default().cast(value.into())
}

/// Checks `value` against `allowed` with exact comparison, rejecting null.
///
/// # Errors
///
/// See [`AllowedValuesCast`](casts::AllowedValuesCast).
pub fn ensure_allowed_value<'a>(
    value: impl Into<Option<&'a str>>,
    allowed: &AllowedValues,
) -> CastResult<Option<String>> {
    casts::allowed::ensure_allowed(value.into(), allowed, MatchOptions::default())
}
