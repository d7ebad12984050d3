//! Built-in conversions
//!
//! One module per operation. Each cast struct carries the options for its
//! operation and implements [`Cast`](crate::foundation::Cast).
//!
//! # Examples
//!
//! ```
//! use smartcast::prelude::*;
//!
//! let port = integer().sign(NumberSign::Positive).accept_zero(false);
//! assert_eq!(port.cast_from("8080").unwrap(), Some(8080));
//!
//! let ratio = float().strict(true);
//! assert_eq!(ratio.cast_from("0.75").unwrap(), Some(0.75));
//! ```

// Numeric conversions
pub mod float;
pub mod integer;

// Text conversions
pub mod allowed;
pub mod array;
pub mod boolean;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use allowed::{AllowedValues, AllowedValuesCast, MatchOptions, Scalar};
pub use array::{ArrayCast, ArrayInput, Element, array};
pub use boolean::{BooleanCast, BooleanInput, boolean};
pub use float::{FloatCast, FloatInput, float};
pub use integer::{IntegerCast, IntegerInput, integer};

pub use crate::numeric::NumberSign;
