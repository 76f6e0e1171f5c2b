//! Style property values and responsive values.
//!
//! # Example
//!
//! ```
//! use stylekit::prelude::*;
//!
//! // A plain value applies unconditionally.
//! let color: ResponsiveValue = "red".into();
//! assert!(!color.is_responsive());
//!
//! // A responsive value overrides per breakpoint.
//! let padding: ResponsiveValue = BreakpointMap::<StyleValue>::new().base("0").md("2rem").into();
//! assert!(padding.is_responsive());
//! ```

use std::fmt;

use serde_json::{Map, Value};

use crate::breakpoint::{Breakpoint, BreakpointMap};

/// A single style property value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A string value such as `"16px"` or `"red"`.
    Str(String),
    /// A numeric value such as `700` or `1.5`.
    Number(f64),
    /// A nested object, serialized as JSON when stringified.
    Object(Map<String, Value>),
}

impl StyleValue {
    /// Canonical string form: strings as-is, numbers in shortest decimal form,
    /// objects as compact JSON.
    pub fn to_css_string(&self) -> String {
        match self {
            StyleValue::Str(s) => s.clone(),
            StyleValue::Number(n) => format_number(*n),
            StyleValue::Object(map) => Value::Object(map.clone()).to_string(),
        }
    }

    /// Get the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Convert a JSON value. Booleans and arrays fall back to their string form.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => StyleValue::Str(s),
            Value::Number(n) => StyleValue::Number(n.as_f64().unwrap_or_default()),
            Value::Object(map) => StyleValue::Object(map),
            Value::Null => StyleValue::Str(String::new()),
            other => StyleValue::Str(other.to_string()),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<Map<String, Value>> for StyleValue {
    fn from(value: Map<String, Value>) -> Self {
        StyleValue::Object(value)
    }
}

/// Format a number the way a JavaScript engine prints it: no trailing `.0`,
/// no negative zero, and exponent form (`1e+21`, `1e-7`) outside
/// `1e-6 <= |n| < 1e21`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{n:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    n.to_string()
}

/// A value that is either unconditional or varies per breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsiveValue<T = StyleValue> {
    /// Applies at every width.
    Scalar(T),
    /// Applies only at the breakpoints that were set; nothing cascades.
    Responsive(BreakpointMap<T>),
}

impl<T> ResponsiveValue<T> {
    /// Whether this value varies per breakpoint.
    pub fn is_responsive(&self) -> bool {
        matches!(self, ResponsiveValue::Responsive(_))
    }

    /// The value that applies exactly at `breakpoint`, without cascading.
    ///
    /// Scalars only apply at `base`.
    pub fn at(&self, breakpoint: Breakpoint) -> Option<&T> {
        match self {
            ResponsiveValue::Scalar(v) if breakpoint.is_base() => Some(v),
            ResponsiveValue::Scalar(_) => None,
            ResponsiveValue::Responsive(map) => map.get(breakpoint),
        }
    }

    /// Convert into a breakpoint map, wrapping a scalar as `{base: value}`.
    pub fn into_map(self) -> BreakpointMap<T> {
        match self {
            ResponsiveValue::Scalar(v) => BreakpointMap::new().with(Breakpoint::Base, v),
            ResponsiveValue::Responsive(map) => map,
        }
    }

    /// Map the inner value(s).
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ResponsiveValue<U> {
        match self {
            ResponsiveValue::Scalar(v) => ResponsiveValue::Scalar(f(v)),
            ResponsiveValue::Responsive(map) => ResponsiveValue::Responsive(map.map(f)),
        }
    }

    /// Map the inner value(s) through a fallible function. The breakpoint is
    /// `None` for scalars.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(Option<Breakpoint>, T) -> std::result::Result<U, E>,
    ) -> std::result::Result<ResponsiveValue<U>, E> {
        match self {
            ResponsiveValue::Scalar(v) => Ok(ResponsiveValue::Scalar(f(None, v)?)),
            ResponsiveValue::Responsive(map) => {
                Ok(ResponsiveValue::Responsive(map.try_map(|bp, v| f(Some(bp), v))?))
            }
        }
    }
}

impl ResponsiveValue<StyleValue> {
    /// Infer a responsive value from loosely typed JSON.
    ///
    /// This is the one place where a plain object is told apart from a
    /// responsive map: an object with at least one key naming a known
    /// breakpoint is responsive. Unknown keys in such an object are dropped,
    /// and `null` entries count as absent. Any other value is a scalar.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) if map.keys().any(|k| Breakpoint::from_name(k).is_some()) => {
                let mut out = BreakpointMap::new();
                for (key, entry) in map {
                    if entry.is_null() {
                        continue;
                    }
                    out.insert_named(&key, StyleValue::from_json(entry));
                }
                ResponsiveValue::Responsive(out)
            }
            other => ResponsiveValue::Scalar(StyleValue::from_json(other)),
        }
    }
}

impl<T> From<BreakpointMap<T>> for ResponsiveValue<T> {
    fn from(map: BreakpointMap<T>) -> Self {
        ResponsiveValue::Responsive(map)
    }
}

impl From<StyleValue> for ResponsiveValue<StyleValue> {
    fn from(value: StyleValue) -> Self {
        ResponsiveValue::Scalar(value)
    }
}

impl From<&str> for ResponsiveValue<StyleValue> {
    fn from(value: &str) -> Self {
        ResponsiveValue::Scalar(value.into())
    }
}

impl From<String> for ResponsiveValue<StyleValue> {
    fn from(value: String) -> Self {
        ResponsiveValue::Scalar(value.into())
    }
}

impl From<f64> for ResponsiveValue<StyleValue> {
    fn from(value: f64) -> Self {
        ResponsiveValue::Scalar(value.into())
    }
}

impl From<i32> for ResponsiveValue<StyleValue> {
    fn from(value: i32) -> Self {
        ResponsiveValue::Scalar(value.into())
    }
}

impl From<u32> for ResponsiveValue<StyleValue> {
    fn from(value: u32) -> Self {
        ResponsiveValue::Scalar(value.into())
    }
}

impl From<Map<String, Value>> for ResponsiveValue<StyleValue> {
    fn from(value: Map<String, Value>) -> Self {
        ResponsiveValue::Scalar(value.into())
    }
}

impl From<&str> for ResponsiveValue<String> {
    fn from(value: &str) -> Self {
        ResponsiveValue::Scalar(value.to_string())
    }
}

impl From<String> for ResponsiveValue<String> {
    fn from(value: String) -> Self {
        ResponsiveValue::Scalar(value)
    }
}

/// Implement `From<T> for ResponsiveValue<T>` for keyword types.
macro_rules! impl_scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $crate::types::ResponsiveValue<$ty> {
                fn from(value: $ty) -> Self {
                    $crate::types::ResponsiveValue::Scalar(value)
                }
            }
        )*
    };
}
pub(crate) use impl_scalar_from;

/// A property-name to responsive-value mapping, in insertion order.
///
/// Built fresh for each resolution; setting a property that is already
/// present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRequest {
    entries: Vec<(String, ResponsiveValue)>,
}

impl StyleRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a property.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<ResponsiveValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Set a property, replacing any previous value while keeping its position.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<ResponsiveValue>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Get the value of a property.
    pub fn get(&self, property: &str) -> Option<&ResponsiveValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the request has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponsiveValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<ResponsiveValue>> FromIterator<(K, V)> for StyleRequest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut request = Self::new();
        for (property, value) in iter {
            request.insert(property, value);
        }
        request
    }
}

impl From<Map<String, Value>> for StyleRequest {
    /// Build a request from a JSON object, inferring responsive values with
    /// [`ResponsiveValue::from_json`]. `null` properties are skipped.
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(property, value)| (property, ResponsiveValue::from_json(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_format_like_js() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.02), "-0.02");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn object_values_serialize_as_json() {
        let json = json!({"foo": "bar", "n": 2});
        let Value::Object(map) = json else { unreachable!() };
        assert_eq!(StyleValue::Object(map).to_css_string(), r#"{"foo":"bar","n":2}"#);
    }

    #[test]
    fn json_with_breakpoint_key_is_responsive() {
        let value = ResponsiveValue::from_json(json!({"base": "red", "md": "blue", "huge": "x"}));
        let ResponsiveValue::Responsive(map) = value else {
            panic!("expected a responsive value");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(Breakpoint::Md), Some(&StyleValue::from("blue")));
    }

    #[test]
    fn json_without_breakpoint_key_is_scalar() {
        let value = ResponsiveValue::from_json(json!({"foo": "bar"}));
        assert!(!value.is_responsive());
    }

    #[test]
    fn null_entries_are_absent() {
        let value = ResponsiveValue::from_json(json!({"base": null, "lg": "3rem"}));
        assert_eq!(value.at(Breakpoint::Base), None);
        assert_eq!(value.at(Breakpoint::Lg), Some(&StyleValue::from("3rem")));
    }

    #[test]
    fn scalar_applies_only_at_base() {
        let value: ResponsiveValue = "red".into();
        assert!(value.at(Breakpoint::Base).is_some());
        assert!(value.at(Breakpoint::Sm).is_none());
    }

    #[test]
    fn request_keeps_insertion_order_and_replaces_in_place() {
        let request = StyleRequest::new()
            .set("color", "red")
            .set("fontSize", "16px")
            .set("color", "blue");

        let names: Vec<_> = request.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["color", "fontSize"]);
        assert_eq!(request.get("color"), Some(&ResponsiveValue::from("blue")));
    }

    #[test]
    fn request_from_json_skips_nulls() {
        let Value::Object(map) = json!({"color": "red", "margin": null, "padding": {"sm": "1rem"}})
        else {
            unreachable!()
        };
        let request = StyleRequest::from(map);
        assert_eq!(request.len(), 2);
        assert!(request.get("padding").is_some_and(ResponsiveValue::is_responsive));
    }
}
