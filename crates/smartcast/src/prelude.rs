//! Prelude module for convenient imports.
//!
//! Provides a single `use smartcast::prelude::*;` import that brings in the
//! conversion trait, every cast, the error types and the free functions.
//!
//! # Examples
//!
//! ```
//! use smartcast::prelude::*;
//!
//! let flag = to_boolean("off").unwrap();
//! let count = integer().accept_zero(false).cast_from("3").unwrap();
//! assert_eq!((flag, count), (false, Some(3)));
//! ```

// ============================================================================
// FOUNDATION: Core trait and errors
// ============================================================================

pub use crate::foundation::{Cast, CastError, CastResult, ErrorKind, cast_all};

// ============================================================================
// CASTS: All built-in conversions
// ============================================================================

pub use crate::casts::{
    AllowedValues, AllowedValuesCast, ArrayCast, ArrayInput, BooleanCast, BooleanInput, Element,
    FloatCast, FloatInput, IntegerCast, IntegerInput, MatchOptions, NumberSign, Scalar, array,
    boolean, float, integer,
};

// ============================================================================
// ENUMERATIONS AND CONFIGURATION
// ============================================================================

pub use crate::converter::Converter;
pub use crate::enumeration::{BackedEnum, EnumDescriptor, EnumRegistry};

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

pub use crate::{ensure_allowed_value, to_array, to_boolean, to_float, to_integer};
