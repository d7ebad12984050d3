//! Core conversion types and traits
//!
//! This module contains the building blocks shared by every conversion:
//!
//! - **Traits**: `Cast`
//! - **Errors**: `CastError`, `ErrorKind`
//!
//! # Architecture
//!
//! ## 1. Closed inputs
//!
//! Each conversion declares the loosely-typed forms it accepts as an enum,
//! so "is this already the target type" becomes a variant match:
//!
//! ```rust,ignore
//! match input {
//!     IntegerInput::Integer(value) => value,
//!     IntegerInput::Text(text) => parse(text)?,
//!     IntegerInput::Null => return Ok(None),
//! }
//! ```
//!
//! ## 2. One error, many kinds
//!
//! Failures are a single [`CastError`] tagged with an [`ErrorKind`]. The
//! message is formatted centrally from the kind and the offending value:
//!
//! ```rust,ignore
//! let error = CastError::integer_overflow("9223372036854775808");
//! assert_eq!(error.code(), "integer_overflow");
//! ```

pub mod error;
pub mod traits;

pub use error::{ARRAY_TYPE_NAME, CastError, ErrorKind, NULL_TYPE_NAME};
pub use traits::{Cast, cast_all};

/// A conversion result using the standard `CastError`.
pub type CastResult<T> = Result<T, CastError>;
