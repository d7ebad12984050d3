//! Array conversion
//!
//! Text becomes a list in one of two ways:
//!
//! - **Bracketed literal**: `[1, "2", [3]]` is read as a JSON array and every
//!   element is normalized recursively.
//! - **Delimited list**: `apple, banana , cherry` is split on commas and each
//!   trimmed item is normalized.
//!
//! Normalization turns numeric-looking text into numbers (`"02"` becomes
//! `2`, `"1.5"` becomes `1.5`) and leaves everything else alone.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::{ARRAY_TYPE_NAME, Cast, CastError};
use crate::numeric::{Number, number_from_text};

/// Default maximum nesting depth for bracketed literals (DoS protection).
const DEFAULT_MAX_DEPTH: usize = 128;

// ============================================================================
// ELEMENT
// ============================================================================

/// One element of a converted list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Element {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<Element>),
    /// A JSON object nested inside a bracketed literal, in source key order.
    Map(IndexMap<String, Element>),
}

impl Element {
    /// Builds an element from text, reading numeric-looking text as a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcast::casts::Element;
    ///
    /// assert_eq!(Element::from_text("02"), Element::Integer(2));
    /// assert_eq!(Element::from_text("-1.0"), Element::Float(-1.0));
    /// assert_eq!(Element::from_text("foo"), Element::Text("foo".into()));
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        number_from_text(text).map_or_else(|| Self::Text(text.to_owned()), Self::from)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a double; integers are widened.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Element]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the element's type, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::List(_) => ARRAY_TYPE_NAME,
            Self::Map(_) => "map",
        }
    }

    /// Renders the element as JSON.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(value) => serde_json::Value::Bool(*value),
            Self::Integer(value) => serde_json::Value::from(*value),
            Self::Float(value) => serde_json::Number::from_f64(*value)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Text(value) => serde_json::Value::String(value.clone()),
            Self::List(items) => items.iter().map(Self::to_json_value).collect(),
            Self::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json_value()))
                    .collect(),
            ),
        }
    }
}

impl From<Number> for Element {
    fn from(number: Number) -> Self {
        match number {
            Number::Integer(value) => Self::Integer(value),
            Number::Float(value) => Self::Float(value),
        }
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Element>> From<Vec<T>> for Element {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// Values accepted by [`ArrayCast`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayInput<'a> {
    Text(&'a str),
    /// An existing list, returned unchanged.
    List(Vec<Element>),
    Null,
}

impl<'a> From<&'a str> for ArrayInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for ArrayInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Element>> for ArrayInput<'_> {
    fn from(items: Vec<Element>) -> Self {
        Self::List(items)
    }
}

impl<'a, T: Into<ArrayInput<'a>>> From<Option<T>> for ArrayInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// ARRAY CAST
// ============================================================================

/// Converts text to a list of [`Element`]s.
///
/// Defaults: null rejected, bracketed literals nested at most 128 levels.
///
/// Text framed by `[` and `]` is parsed as a JSON array; text with no
/// brackets is split on commas. A bracket on only one end, empty text, or an
/// empty comma-separated item fails with `InvalidType`.
///
/// # Examples
///
/// ```
/// use smartcast::casts::{ArrayCast, Element};
/// use smartcast::foundation::Cast;
///
/// let list = ArrayCast::new().cast_from("[1, \"02\", \"foo\"]").unwrap().unwrap();
/// assert_eq!(list, vec![Element::Integer(1), Element::Integer(2), Element::from("foo")]);
///
/// let list = ArrayCast::new().cast_from("apple, banana , cherry").unwrap().unwrap();
/// assert_eq!(list.len(), 3);
///
/// assert!(ArrayCast::new().cast_from("1,,3").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrayCast {
    pub accept_null: bool,
    pub max_depth: usize,
}

impl Default for ArrayCast {
    fn default() -> Self {
        Self {
            accept_null: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ArrayCast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn accept_null(mut self, accept_null: bool) -> Self {
        self.accept_null = accept_null;
        self
    }

    /// Sets the maximum nesting depth for bracketed literals.
    ///
    /// The outer list counts as depth 1.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    fn parse_text(&self, text: &str) -> Result<Vec<Element>, CastError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(CastError::invalid_type(text));
        }

        match (trimmed.starts_with('['), trimmed.ends_with(']')) {
            (true, true) => self.parse_bracketed(text, trimmed),
            (false, false) => parse_delimited(text, trimmed),
            _ => Err(CastError::invalid_type(text).with_detail("unbalanced brackets")),
        }
    }

    fn parse_bracketed(&self, text: &str, literal: &str) -> Result<Vec<Element>, CastError> {
        tracing::trace!(len = literal.len(), "parsing bracketed array literal");

        let parsed: serde_json::Value = serde_json::from_str(literal)
            .map_err(|e| CastError::invalid_type(text).with_detail(e.to_string()))?;

        match parsed {
            serde_json::Value::Array(items) => self.normalize_list(text, items, 1),
            other => Err(CastError::invalid_type(text)
                .with_detail(format!("expected an array literal, found {}", json_type(&other)))),
        }
    }

    fn normalize_list(
        &self,
        text: &str,
        items: Vec<serde_json::Value>,
        depth: usize,
    ) -> Result<Vec<Element>, CastError> {
        if depth > self.max_depth {
            return Err(CastError::invalid_type(text).with_detail(format!(
                "array nesting exceeds maximum depth of {}",
                self.max_depth
            )));
        }

        items
            .into_iter()
            .map(|item| self.normalize(text, item, depth))
            .collect()
    }

    fn normalize(
        &self,
        text: &str,
        value: serde_json::Value,
        depth: usize,
    ) -> Result<Element, CastError> {
        Ok(match value {
            serde_json::Value::Null => Element::Null,
            serde_json::Value::Bool(value) => Element::Bool(value),
            serde_json::Value::Number(number) => number_element(&number),
            serde_json::Value::String(value) => match number_from_text(&value) {
                Some(number) => Element::from(number),
                None => Element::Text(value),
            },
            serde_json::Value::Array(items) => {
                Element::List(self.normalize_list(text, items, depth + 1)?)
            }
            serde_json::Value::Object(entries) => {
                if depth + 1 > self.max_depth {
                    return Err(CastError::invalid_type(text).with_detail(format!(
                        "array nesting exceeds maximum depth of {}",
                        self.max_depth
                    )));
                }
                let mut map = IndexMap::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key, self.normalize(text, value, depth + 1)?);
                }
                Element::Map(map)
            }
        })
    }
}

fn parse_delimited(text: &str, list: &str) -> Result<Vec<Element>, CastError> {
    tracing::trace!(len = list.len(), "parsing delimited list");

    list.split(',')
        .map(|item| {
            let item = item.trim();
            if item.is_empty() {
                Err(CastError::invalid_type(text).with_detail("empty list item"))
            } else {
                Ok(Element::from_text(item))
            }
        })
        .collect()
}

fn number_element(number: &serde_json::Number) -> Element {
    match (number.as_i64(), number.as_f64()) {
        (Some(value), _) => Element::Integer(value),
        (None, Some(value)) => Element::Float(value),
        (None, None) => Element::Text(number.to_string()),
    }
}

pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => ARRAY_TYPE_NAME,
        serde_json::Value::Object(_) => "object",
    }
}

impl Cast for ArrayCast {
    type Input<'a> = ArrayInput<'a>;
    type Output = Option<Vec<Element>>;

    fn cast(&self, input: ArrayInput<'_>) -> Result<Option<Vec<Element>>, CastError> {
        match input {
            ArrayInput::Null if self.accept_null => Ok(None),
            ArrayInput::Null => Err(CastError::null_not_accepted()),
            ArrayInput::List(items) => Ok(Some(items)),
            ArrayInput::Text(text) => self.parse_text(text).map(Some),
        }
    }
}

/// Creates an array conversion with default options.
#[must_use]
pub fn array() -> ArrayCast {
    ArrayCast::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use serde_json::json;

    fn list(text: &str) -> serde_json::Value {
        let items = array().cast_from(text).unwrap().unwrap();
        Element::List(items).to_json_value()
    }

    fn kind(text: &str) -> ErrorKind {
        array().cast_from(text).unwrap_err().kind()
    }

    #[test]
    fn bracketed_numbers() {
        assert_eq!(list("[1,2,3]"), json!([1, 2, 3]));
        assert_eq!(list("[1.0,2,3.5]"), json!([1.0, 2, 3.5]));
        assert_eq!(list("[-1.0,-2,3]"), json!([-1.0, -2, 3]));
        assert_eq!(list(" [ ] "), json!([]));
    }

    #[test]
    fn bracketed_strings_are_normalized() {
        assert_eq!(list(r#"["1","02","foo"]"#), json!([1, 2, "foo"]));
        assert_eq!(list(r#"["1.5", "1e2", " 7 "]"#), json!([1.5, 100.0, 7]));
    }

    #[test]
    fn nested_lists_are_normalized_recursively() {
        assert_eq!(list(r#"[1,[2,"3"],[4,["5"]]]"#), json!([1, [2, 3], [4, [5]]]));
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(list("[true,false,null]"), json!([true, false, null]));
    }

    #[test]
    fn nested_objects_keep_key_order() {
        let items = array().cast_from(r#"[{"b": "2", "a": [ "x" ]}]"#).unwrap().unwrap();
        let Element::Map(map) = &items[0] else {
            panic!("expected a map, got {:?}", items[0]);
        };
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(map["b"], Element::Integer(2));
        assert_eq!(map["a"], Element::from(vec!["x"]));
    }

    #[test]
    fn big_json_integers_become_floats() {
        assert_eq!(
            list("[9223372036854775808]"),
            json!([9_223_372_036_854_775_808.0_f64])
        );
    }

    #[test]
    fn delimited_lists() {
        assert_eq!(list("1,2,3,4"), json!([1, 2, 3, 4]));
        assert_eq!(list("apple, banana , cherry"), json!(["apple", "banana", "cherry"]));
        assert_eq!(list("42"), json!([42]));
        assert_eq!(list("apple"), json!(["apple"]));
        assert_eq!(list("a[b, c]d"), json!(["a[b", "c]d"]));
    }

    #[test]
    fn rejects_malformed_text() {
        for text in [
            "", "   ", "[", "]", "[,]", "[1,,2]", "[1,2,3", "1,2,3]", "1,,3", "1 , , 2", ",1", "1,",
            "[1] [2]",
        ] {
            assert_eq!(kind(text), ErrorKind::InvalidType, "{text:?}");
        }
    }

    #[test]
    fn json_errors_carry_detail() {
        let error = array().cast_from("[1,2,3").unwrap_err();
        assert_eq!(error.detail(), Some("unbalanced brackets"));

        let error = array().cast_from("[1,,2]").unwrap_err();
        assert!(error.detail().is_some());
        assert_eq!(error.value(), "[1,,2]");
    }

    #[test]
    fn depth_limit() {
        let shallow = array().max_depth(2);
        assert!(shallow.cast_from("[1,[2]]").is_ok());
        assert_eq!(
            shallow.cast_from("[1,[2,[3]]]").unwrap_err().kind(),
            ErrorKind::InvalidType
        );
        assert!(shallow.cast_from(r#"[{"a": 1}]"#).is_ok());
        assert!(shallow.cast_from(r#"[[{"a": 1}]]"#).is_err());
    }

    #[test]
    fn lists_are_returned_unchanged() {
        let items = vec![Element::from("02"), Element::from(vec![Element::from("1")])];
        assert_eq!(array().cast_from(items.clone()).unwrap(), Some(items));
    }

    #[test]
    fn null_policy() {
        assert_eq!(array().accept_null(true).cast(ArrayInput::Null).unwrap(), None);
        assert_eq!(
            array().cast(ArrayInput::Null).unwrap_err().kind(),
            ErrorKind::InvalidType
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(Element::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Element::from("x").as_str(), Some("x"));
        assert!(Element::Null.is_null());
        assert_eq!(Element::from(vec![1i64]).type_name(), "array");
        assert_eq!(Element::Bool(true).as_bool(), Some(true));
    }
}
