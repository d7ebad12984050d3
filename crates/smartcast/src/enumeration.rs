//! Enumeration reflection for allow-list checks
//!
//! An allow-list can name a closed set of string constants instead of
//! listing them. This module describes such sets:
//!
//! - [`BackedEnum`] is implemented by Rust enums whose cases map to string
//!   constants (usually through [`backed_enum!`](crate::backed_enum)).
//! - [`EnumDescriptor`] is the runtime view: ordered cases, each with an
//!   optional backing value.
//! - [`EnumRegistry`] resolves descriptors by name, for allow-lists that come
//!   from configuration.

use std::collections::HashMap;

// ============================================================================
// BACKED ENUM
// ============================================================================

/// A Rust enum whose cases are backed by string constants.
///
/// # Examples
///
/// ```
/// use smartcast::backed_enum;
/// use smartcast::enumeration::BackedEnum;
///
/// backed_enum! {
///     pub enum Level {
///         Low = "low",
///         High = "high",
///     }
/// }
///
/// assert_eq!(Level::NAME, "Level");
/// assert_eq!(Level::High.value(), "high");
/// assert_eq!(Level::from_value("low"), Some(Level::Low));
/// ```
pub trait BackedEnum: Copy + 'static {
    /// Name of the enumeration.
    const NAME: &'static str;

    /// All cases in declaration order.
    fn cases() -> &'static [Self];

    /// Name of this case.
    fn name(self) -> &'static str;

    /// Backing value of this case.
    fn value(self) -> &'static str;

    /// Finds the first case whose backing value equals `value`.
    fn from_value(value: &str) -> Option<Self> {
        Self::cases().iter().copied().find(|case| case.value() == value)
    }
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// One case of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumCase {
    pub name: String,
    /// Backing value; `None` for cases of a unit enumeration.
    pub value: Option<String>,
}

/// Runtime description of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    cases: Vec<EnumCase>,
    backed: bool,
}

impl EnumDescriptor {
    /// Describes a [`BackedEnum`].
    #[must_use]
    pub fn of<E: BackedEnum>() -> Self {
        Self::backed(
            E::NAME,
            E::cases().iter().map(|case| (case.name(), case.value())),
        )
    }

    /// Describes a backed enumeration from `(case name, backing value)` pairs.
    pub fn backed<N, V>(name: impl Into<String>, cases: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            cases: cases
                .into_iter()
                .map(|(name, value)| EnumCase {
                    name: name.into(),
                    value: Some(value.into()),
                })
                .collect(),
            backed: true,
        }
    }

    /// Describes an enumeration whose cases carry no backing values.
    pub fn unit<N>(name: impl Into<String>, cases: impl IntoIterator<Item = N>) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            cases: cases
                .into_iter()
                .map(|name| EnumCase {
                    name: name.into(),
                    value: None,
                })
                .collect(),
            backed: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cases in declaration order.
    #[must_use]
    pub fn cases(&self) -> &[EnumCase] {
        &self.cases
    }

    /// True if every case maps to a backing value.
    #[must_use]
    pub fn is_backed(&self) -> bool {
        self.backed
    }

    /// Backing values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().filter_map(|case| case.value.as_deref())
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Enumerations addressable by name.
///
/// # Examples
///
/// ```
/// use smartcast::enumeration::{EnumDescriptor, EnumRegistry};
///
/// let mut registry = EnumRegistry::new();
/// registry.register(EnumDescriptor::backed("Color", [("Red", "red"), ("Blue", "blue")]));
///
/// assert!(registry.contains("Color"));
/// assert_eq!(registry.get("Color").unwrap().cases().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    enums: HashMap<String, EnumDescriptor>,
}

impl EnumRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor, replacing any previous one with the same name.
    pub fn register(&mut self, descriptor: EnumDescriptor) -> &mut Self {
        self.enums.insert(descriptor.name.clone(), descriptor);
        self
    }

    /// Adds a [`BackedEnum`] under its own name.
    pub fn register_enum<E: BackedEnum>(&mut self) -> &mut Self {
        self.register(EnumDescriptor::of::<E>())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EnumDescriptor> {
        self.enums.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}
