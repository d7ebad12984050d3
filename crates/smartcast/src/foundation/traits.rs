//! Core traits for the conversion system
//!
//! This module defines the trait every conversion implements.

use crate::foundation::CastError;

// ============================================================================
// CORE CAST TRAIT
// ============================================================================

/// The core trait that all conversions implement.
///
/// An implementor is a configured conversion: its fields are the options
/// (strictness, sign, null policy, ...) and [`cast`](Cast::cast) applies
/// them to one input. Conversions hold no mutable state, so a single value
/// can be shared freely across threads.
///
/// # Type Parameters
///
/// * `Input` - A closed sum of the loosely-typed forms the conversion accepts
/// * `Output` - The strictly-typed result
///
/// # Examples
///
/// ```
/// use smartcast::foundation::Cast;
/// use smartcast::casts::{IntegerCast, NumberSign};
///
/// let positive = IntegerCast::new().sign(NumberSign::Positive);
///
/// assert_eq!(positive.cast_from("42").unwrap(), Some(42));
/// assert!(positive.cast_from("-1").is_err());
/// ```
pub trait Cast {
    /// The accepted input forms.
    type Input<'a>;

    /// The converted value.
    type Output;

    /// Converts one input value.
    ///
    /// # Returns
    ///
    /// * `Ok(output)` if the input satisfies every configured policy
    /// * `Err(CastError)` tagged with exactly one kind otherwise
    fn cast(&self, input: Self::Input<'_>) -> Result<Self::Output, CastError>;

    /// Converts any value that turns into `Self::Input`.
    ///
    /// Lets callers pass `&str`, `String`, integers, `Option<_>` and so on
    /// without naming the input enum.
    fn cast_from<'a, S>(&self, value: S) -> Result<Self::Output, CastError>
    where
        Self: Sized,
        S: Into<Self::Input<'a>>,
    {
        self.cast(value.into())
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Applies a conversion to every item, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use smartcast::foundation::cast_all;
/// use smartcast::casts::BooleanCast;
///
/// let flags = cast_all(&BooleanCast, ["yes", "off", "1"]).unwrap();
/// assert_eq!(flags, vec![true, false, true]);
/// ```
pub fn cast_all<'a, C, I>(cast: &C, values: I) -> Result<Vec<C::Output>, CastError>
where
    C: Cast,
    I: IntoIterator,
    I::Item: Into<C::Input<'a>>,
{
    values
        .into_iter()
        .map(|value| cast.cast(value.into()))
        .collect()
}
