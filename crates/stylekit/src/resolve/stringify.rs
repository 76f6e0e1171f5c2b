//! Canonical string forms of responsive values.

use serde_json::Value;

use crate::breakpoint::BreakpointMap;
use crate::types::{ResponsiveValue, StyleValue};

/// The stringified form of a [`ResponsiveValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Stringified {
    /// A plain value (including a plain object serialized as JSON).
    Scalar(String),
    /// One string per breakpoint that was set.
    Responsive(BreakpointMap<String>),
}

impl Stringified {
    /// Convert into a breakpoint map, wrapping a scalar as `{base: value}`.
    pub fn into_map(self) -> BreakpointMap<String> {
        match self {
            Stringified::Scalar(s) => ResponsiveValue::Scalar(s).into_map(),
            Stringified::Responsive(map) => map,
        }
    }
}

/// Stringify a responsive value.
///
/// Responsive maps keep their shape with every entry stringified
/// independently; scalars are stringified directly.
pub fn stringify(value: &ResponsiveValue) -> Stringified {
    match value {
        ResponsiveValue::Scalar(v) => Stringified::Scalar(v.to_css_string()),
        ResponsiveValue::Responsive(map) => {
            Stringified::Responsive(map.clone().map(|v| v.to_css_string()))
        }
    }
}

/// Stringify loosely typed JSON, telling plain objects apart from responsive
/// maps with [`ResponsiveValue::from_json`].
pub fn stringify_json(value: Value) -> Stringified {
    stringify(&ResponsiveValue::from_json(value))
}

/// Stringify a single style value.
pub fn stringify_value(value: &StyleValue) -> String {
    value.to_css_string()
}
