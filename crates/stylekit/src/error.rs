//! Error types for the style utilities.

use crate::breakpoint::Breakpoint;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building styles.
///
/// Every validating operation checks all of its inputs before producing
/// output, so an `Err` never comes with a partially built style.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A size/spacing value without a recognised CSS unit.
    #[error(
        "Invalid {property} value{}: {value}. Use a number or a string with a valid CSS unit.",
        breakpoint_suffix(.breakpoint)
    )]
    InvalidUnit {
        property: String,
        breakpoint: Option<Breakpoint>,
        value: String,
    },

    /// A keyword outside of the accepted set (alignment, direction, timing, ...).
    #[error("Invalid {kind} value: '{value}'")]
    InvalidKeyword { kind: &'static str, value: String },

    /// A color string that could not be parsed.
    #[error("Invalid color format: '{0}'")]
    InvalidColor(String),

    /// A numeric argument outside its allowed range.
    #[error("{constraint} (got {value})")]
    OutOfRange { constraint: &'static str, value: f64 },

    /// A duration or delay that is not a valid CSS time.
    #[error("Invalid duration or delay value: '{0}'")]
    InvalidTime(String),

    /// An item passed to a combinator that lacks the expected property.
    #[error("Invalid {kind} object at position {index}")]
    InvalidComposite { kind: &'static str, index: usize },

    /// An unknown typography preset name.
    #[error("Invalid typography preset: '{0}'")]
    InvalidPreset(String),

    /// An empty font family string.
    #[error("Font family cannot be empty")]
    EmptyFontFamily,
}

fn breakpoint_suffix(breakpoint: &Option<Breakpoint>) -> String {
    match breakpoint {
        Some(bp) => format!(" for {}", bp.name()),
        None => String::new(),
    }
}

impl Error {
    /// Create a unit error for a plain (non-responsive) value.
    pub fn invalid_unit(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidUnit {
            property: property.into(),
            breakpoint: None,
            value: value.into(),
        }
    }

    /// Create a unit error for the entry of a responsive value at `breakpoint`.
    pub fn invalid_unit_at(
        property: impl Into<String>,
        breakpoint: Breakpoint,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidUnit {
            property: property.into(),
            breakpoint: Some(breakpoint),
            value: value.into(),
        }
    }

    /// Create a keyword error.
    pub fn invalid_keyword(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidKeyword {
            kind,
            value: value.into(),
        }
    }

    /// Create a color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor(value.into())
    }

    /// Create a range error.
    pub fn out_of_range(constraint: &'static str, value: f64) -> Self {
        Self::OutOfRange { constraint, value }
    }
}
