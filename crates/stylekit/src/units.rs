//! CSS length validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::breakpoint::Breakpoint;
use crate::types::{ResponsiveValue, StyleValue};
use crate::{Error, Result};

static CSS_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d+(\.\d+)?(px|em|rem|%|vh|vw|vmin|vmax|ex|ch)$")
        .expect("css length pattern is valid")
});

/// Whether a string is a number followed by a supported CSS unit.
///
/// ```
/// use stylekit::units::is_valid_css_unit;
///
/// assert!(is_valid_css_unit("1.5rem"));
/// assert!(is_valid_css_unit("-2px"));
/// assert!(!is_valid_css_unit("16"));
/// assert!(!is_valid_css_unit("1.5 rem"));
/// ```
pub fn is_valid_css_unit(value: &str) -> bool {
    CSS_LENGTH.is_match(value)
}

/// Numbers are always accepted; strings must carry a unit.
pub fn is_valid_length(value: &StyleValue) -> bool {
    match value {
        StyleValue::Number(_) => true,
        StyleValue::Str(s) => is_valid_css_unit(s),
        StyleValue::Object(_) => false,
    }
}

/// Check every breakpoint of a length-valued property.
///
/// The error names the property and, for responsive values, the offending
/// breakpoint.
pub fn validate_lengths(property: &str, value: &ResponsiveValue) -> Result<()> {
    let check = |breakpoint: Option<Breakpoint>, v: &StyleValue| {
        if is_valid_length(v) {
            return Ok(());
        }
        Err(match breakpoint {
            Some(bp) => Error::invalid_unit_at(property, bp, v.to_css_string()),
            None => Error::invalid_unit(property, v.to_css_string()),
        })
    };

    match value {
        ResponsiveValue::Scalar(v) => check(None, v),
        ResponsiveValue::Responsive(map) => map.iter().try_for_each(|(bp, v)| check(Some(bp), v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::BreakpointMap;

    #[test]
    fn accepts_every_unit() {
        for unit in ["px", "em", "rem", "%", "vh", "vw", "vmin", "vmax", "ex", "ch"] {
            assert!(is_valid_css_unit(&format!("10{unit}")), "{unit}");
        }
    }

    #[test]
    fn rejects_bare_and_malformed() {
        for value in ["", "px", "10", "10pt", ".5em", "1.em", "auto"] {
            assert!(!is_valid_css_unit(value), "{value}");
        }
    }

    #[test]
    fn numbers_are_valid_lengths() {
        assert!(is_valid_length(&StyleValue::Number(16.0)));
        assert!(!is_valid_length(&"sixteen".into()));
    }

    #[test]
    fn responsive_errors_name_the_breakpoint() {
        let value: ResponsiveValue = BreakpointMap::<StyleValue>::new()
            .base("16px")
            .md("big")
            .into();
        let err = validate_lengths("font size", &value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid font size value for md: big. Use a number or a string with a valid CSS unit."
        );
        assert!(validate_lengths("font size", &"2rem".into()).is_ok());
    }
}
