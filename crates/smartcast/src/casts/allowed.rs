//! Allow-list conversion
//!
//! Checks that a string belongs to a fixed set of values or to the backing
//! values of an enumeration.
//!
//! Comparison is exact by default. With `strict` off it follows loose
//! equality between a string and each kind of [`Scalar`]:
//!
//! | allowed value | matches when |
//! |---|---|
//! | numeric string or number | both sides are numeric and numerically equal |
//! | number, input not numeric | the number's decimal rendering equals the input |
//! | bool | the input's truthiness equals it (`""` and `"0"` are false) |
//! | null | the input is empty |
//! | other strings | the strings are equal |

use serde::{Deserialize, Serialize};

use crate::casts::array::json_type;
use crate::enumeration::{BackedEnum, EnumDescriptor, EnumRegistry};
use crate::foundation::{Cast, CastError};
use crate::numeric::{Number, NumericLiteral};

// ============================================================================
// SCALAR
// ============================================================================

/// One member of an allowed-value set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Exact comparison: only text with identical content matches.
    #[must_use]
    pub fn strict_eq(&self, text: &str) -> bool {
        matches!(self, Self::Text(value) if value == text)
    }

    /// Loose comparison against `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcast::casts::Scalar;
    ///
    /// assert!(Scalar::Integer(2).loose_eq("2.0"));
    /// assert!(Scalar::from("10").loose_eq("1e1"));
    /// assert!(Scalar::Bool(false).loose_eq("0"));
    /// assert!(!Scalar::Integer(2).loose_eq("two"));
    /// ```
    #[must_use]
    pub fn loose_eq(&self, text: &str) -> bool {
        match self {
            Self::Null => text.is_empty(),
            Self::Bool(value) => *value == is_truthy(text),
            Self::Integer(value) => match loose_number(text) {
                Some(number) => numbers_equal(Number::Integer(*value), number),
                None => value.to_string() == text,
            },
            Self::Float(value) => match loose_number(text) {
                Some(number) => numbers_equal(Number::Float(*value), number),
                None => value.to_string() == text,
            },
            Self::Text(value) => match (loose_number(value), loose_number(text)) {
                (Some(left), Some(right)) => numbers_equal(left, right),
                _ => value == text,
            },
        }
    }

    fn matches(&self, text: &str, strict: bool) -> bool {
        if strict {
            self.strict_eq(text)
        } else {
            self.loose_eq(text)
        }
    }

    fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Self::Null),
            serde_json::Value::Bool(value) => Some(Self::Bool(*value)),
            serde_json::Value::Number(number) => number
                .as_i64()
                .map(Self::Integer)
                .or_else(|| number.as_f64().map(Self::Float)),
            serde_json::Value::String(text) => Some(Self::Text(text.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

fn is_truthy(text: &str) -> bool {
    !(text.is_empty() || text == "0")
}

fn loose_number(text: &str) -> Option<Number> {
    let literal = NumericLiteral::parse(text)?;
    if literal.is_integral_form()
        && let Ok(value) = literal.as_str().parse::<i64>()
    {
        return Some(Number::Integer(value));
    }
    literal.to_f64().map(Number::Float)
}

fn numbers_equal(left: Number, right: Number) -> bool {
    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => a == b,
        (Number::Integer(a), Number::Float(b)) | (Number::Float(b), Number::Integer(a)) => {
            a as f64 == b
        }
        (Number::Float(a), Number::Float(b)) => a == b,
    }
}

// ============================================================================
// ALLOWED VALUES
// ============================================================================

/// The values an input may take.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedValues {
    /// Explicit members; a match returns the input unchanged.
    Set(Vec<Scalar>),
    /// Backing values of an enumeration; a match returns the backing value.
    Enum(EnumDescriptor),
}

impl AllowedValues {
    /// Builds an explicit set.
    pub fn set<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self::Set(values.into_iter().map(Into::into).collect())
    }

    /// Uses the backing values of `E`.
    #[must_use]
    pub fn of_enum<E: BackedEnum>() -> Self {
        Self::Enum(EnumDescriptor::of::<E>())
    }

    /// Resolves an allow-list description from JSON.
    ///
    /// An array becomes a set of scalars. A string names an enumeration in
    /// `registry`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for any other shape, for arrays holding
    /// nested arrays or objects, and for names missing from `registry`.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use smartcast::casts::{AllowedValues, Scalar};
    /// use smartcast::enumeration::EnumRegistry;
    ///
    /// let registry = EnumRegistry::new();
    /// let allowed = AllowedValues::from_json(&json!(["a", 1]), &registry).unwrap();
    /// assert_eq!(allowed, AllowedValues::Set(vec![Scalar::from("a"), Scalar::Integer(1)]));
    ///
    /// assert!(AllowedValues::from_json(&json!("Missing"), &registry).is_err());
    /// ```
    pub fn from_json(value: &serde_json::Value, registry: &EnumRegistry) -> Result<Self, CastError> {
        match value {
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| {
                    Scalar::from_json(item).ok_or_else(|| {
                        CastError::invalid_argument(json_type(item))
                            .with_detail("allowed values must be scalars")
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Set),
            serde_json::Value::String(name) => registry
                .get(name)
                .cloned()
                .map(Self::Enum)
                .ok_or_else(|| {
                    CastError::invalid_argument(name.as_str()).with_detail("unknown enumeration")
                }),
            other => Err(CastError::invalid_argument(json_type(other))
                .with_detail("expected an array of values or an enumeration name")),
        }
    }
}

impl From<EnumDescriptor> for AllowedValues {
    fn from(descriptor: EnumDescriptor) -> Self {
        Self::Enum(descriptor)
    }
}

impl From<Vec<Scalar>> for AllowedValues {
    fn from(values: Vec<Scalar>) -> Self {
        Self::Set(values)
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Options for allow-list checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
    /// Exact comparison when true, loose comparison otherwise.
    pub strict: bool,
    pub accept_null: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strict: true,
            accept_null: false,
        }
    }
}

impl MatchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn accept_null(mut self, accept_null: bool) -> Self {
        self.accept_null = accept_null;
        self
    }
}

/// Checks `value` against `allowed`.
pub(crate) fn ensure_allowed(
    value: Option<&str>,
    allowed: &AllowedValues,
    options: MatchOptions,
) -> Result<Option<String>, CastError> {
    let Some(text) = value else {
        return if options.accept_null {
            Ok(None)
        } else {
            Err(CastError::null_not_accepted())
        };
    };

    match allowed {
        AllowedValues::Set(values) => {
            if values.iter().any(|member| member.matches(text, options.strict)) {
                Ok(Some(text.to_owned()))
            } else {
                Err(CastError::invalid_type(text))
            }
        }
        AllowedValues::Enum(descriptor) => {
            if !descriptor.is_backed() {
                return Err(CastError::invalid_argument(descriptor.name())
                    .with_detail("enumeration is not backed"));
            }

            tracing::trace!(
                enumeration = descriptor.name(),
                cases = descriptor.cases().len(),
                strict = options.strict,
                "resolving value against enumeration"
            );

            descriptor
                .values()
                .find(|backing| {
                    if options.strict {
                        *backing == text
                    } else {
                        Scalar::Text((*backing).to_owned()).loose_eq(text)
                    }
                })
                .map(|backing| Some(backing.to_owned()))
                .ok_or_else(|| CastError::invalid_type(text))
        }
    }
}

// ============================================================================
// ALLOWED VALUES CAST
// ============================================================================

/// Restricts a string to an allow-list.
///
/// # Examples
///
/// ```
/// use smartcast::casts::AllowedValuesCast;
/// use smartcast::foundation::{Cast, ErrorKind};
///
/// let cast = AllowedValuesCast::one_of(["draft", "live"]);
/// assert_eq!(cast.cast_from("live").unwrap().as_deref(), Some("live"));
/// assert_eq!(cast.cast_from("gone").unwrap_err().kind(), ErrorKind::InvalidType);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AllowedValuesCast {
    pub allowed: AllowedValues,
    pub options: MatchOptions,
}

impl AllowedValuesCast {
    pub fn new(allowed: impl Into<AllowedValues>) -> Self {
        Self {
            allowed: allowed.into(),
            options: MatchOptions::default(),
        }
    }

    /// Allows exactly the given values.
    pub fn one_of<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        Self::new(AllowedValues::set(values))
    }

    /// Allows the backing values of `E`.
    #[must_use]
    pub fn of_enum<E: BackedEnum>() -> Self {
        Self::new(AllowedValues::of_enum::<E>())
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn accept_null(mut self, accept_null: bool) -> Self {
        self.options.accept_null = accept_null;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }
}

impl Cast for AllowedValuesCast {
    type Input<'a> = Option<&'a str>;
    type Output = Option<String>;

    fn cast(&self, input: Option<&str>) -> Result<Option<String>, CastError> {
        ensure_allowed(input, &self.allowed, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use serde_json::json;

    crate::backed_enum! {
        enum Code {
            One = "1",
            Two = "2",
            Alpha = "alpha",
        }
    }

    fn mixed() -> AllowedValues {
        AllowedValues::Set(vec![Scalar::from("1"), Scalar::Integer(2), Scalar::from("3")])
    }

    #[test]
    fn loose_match_against_mixed_set() {
        let options = MatchOptions::new().strict(false);
        assert_eq!(
            ensure_allowed(Some("2"), &mixed(), options).unwrap().as_deref(),
            Some("2")
        );
    }

    #[test]
    fn strict_match_requires_text() {
        let allowed = AllowedValues::Set(vec![Scalar::Integer(1), Scalar::Integer(2), Scalar::from("3")]);
        let error = ensure_allowed(Some("2"), &allowed, MatchOptions::new()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidType);
        assert_eq!(error.value(), "2");
    }

    #[test]
    fn set_returns_original_text() {
        let options = MatchOptions::new().strict(false);
        let result = ensure_allowed(Some("2.0"), &mixed(), options).unwrap();
        assert_eq!(result.as_deref(), Some("2.0"));
    }

    #[test]
    fn enum_returns_backing_value() {
        let allowed = AllowedValues::of_enum::<Code>();
        let loose = MatchOptions::new().strict(false);
        assert_eq!(
            ensure_allowed(Some("02"), &allowed, loose).unwrap().as_deref(),
            Some("2")
        );
        assert_eq!(
            ensure_allowed(Some("02"), &allowed, MatchOptions::new()).unwrap_err().kind(),
            ErrorKind::InvalidType
        );
    }

    #[test]
    fn enum_first_match_wins() {
        let descriptor = EnumDescriptor::backed("Dup", [("A", "1.0"), ("B", "1")]);
        let loose = MatchOptions::new().strict(false);
        assert_eq!(
            ensure_allowed(Some("1"), &descriptor.into(), loose).unwrap().as_deref(),
            Some("1.0")
        );
    }

    #[test]
    fn unit_enum_is_caller_error() {
        let allowed = AllowedValues::Enum(EnumDescriptor::unit("Suit", ["Hearts"]));
        let error = ensure_allowed(Some("Hearts"), &allowed, MatchOptions::new()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.value(), "Suit");
    }

    #[test]
    fn null_policy_runs_first() {
        let allowed = AllowedValues::Enum(EnumDescriptor::unit("Suit", ["Hearts"]));
        let error = ensure_allowed(None, &allowed, MatchOptions::new()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidType);
        assert_eq!(
            ensure_allowed(None, &allowed, MatchOptions::new().accept_null(true)).unwrap(),
            None
        );
    }

    #[test]
    fn loose_equality_table() {
        assert!(Scalar::Null.loose_eq(""));
        assert!(!Scalar::Null.loose_eq("0"));
        assert!(Scalar::Bool(true).loose_eq("yes"));
        assert!(Scalar::Bool(false).loose_eq(""));
        assert!(!Scalar::Bool(false).loose_eq("0.0"));
        assert!(Scalar::Float(1.5).loose_eq("1.50"));
        assert!(Scalar::Integer(10).loose_eq(" 10"));
        assert!(Scalar::from("abc").loose_eq("abc"));
        assert!(!Scalar::from("abc").loose_eq("ABC"));
        assert!(!Scalar::from("1").strict_eq(" 1"));
    }

    #[test]
    fn from_json_shapes() {
        let mut registry = EnumRegistry::new();
        registry.register_enum::<Code>();

        assert!(matches!(
            AllowedValues::from_json(&json!("Code"), &registry),
            Ok(AllowedValues::Enum(_))
        ));
        assert_eq!(
            AllowedValues::from_json(&json!([null, true, 1.5]), &registry).unwrap(),
            AllowedValues::Set(vec![Scalar::Null, Scalar::Bool(true), Scalar::Float(1.5)])
        );

        for bad in [json!(42), json!({"a": 1}), json!([[1]]), json!("Nope")] {
            let error = AllowedValues::from_json(&bad, &registry).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidArgument, "{bad}");
        }
    }

    #[test]
    fn cast_trait_accepts_plain_text() {
        let cast = AllowedValuesCast::of_enum::<Code>();
        assert_eq!(cast.cast_from("alpha").unwrap().as_deref(), Some("alpha"));
        assert_eq!(cast.cast(None).unwrap_err().kind(), ErrorKind::InvalidType);
    }
}
