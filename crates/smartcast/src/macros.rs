//! Macros for declaring backed enumerations.
//!
//! # Available Macros
//!
//! - [`backed_enum!`]: declare an enum together with its
//!   [`BackedEnum`](crate::enumeration::BackedEnum) implementation
//!
//! # Examples
//!
//! ```rust,ignore
//! use smartcast::backed_enum;
//!
//! backed_enum! {
//!     /// Supported output formats.
//!     #[derive(serde::Serialize)]
//!     pub enum Format {
//!         Json = "json",
//!         Yaml = "yaml",
//!     }
//! }
//! ```

/// Declares an enum whose cases are backed by string constants.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` is always applied.
/// Add extra derives and docs through attributes on the enum and its cases.
#[macro_export]
macro_rules! backed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$case_meta:meta])*
                $case:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$case_meta])*
                $case,
            )+
        }

        impl $crate::enumeration::BackedEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn cases() -> &'static [Self] {
                &[$(Self::$case),+]
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$case => stringify!($case),)+
                }
            }

            fn value(self) -> &'static str {
                match self {
                    $(Self::$case => $value,)+
                }
            }
        }
    };
}
