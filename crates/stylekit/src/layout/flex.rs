//! Flexbox helpers.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{StyleObject, StyleValue, keyword_enum};
use crate::{Error, Result};

static FLEX_BASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)?(px|em|rem|%)$").expect("flex basis pattern is valid")
});

keyword_enum! {
    /// `flex-direction`.
    FlexDirection, "flexDirection" {
        #[default]
        Row => "row",
        Column => "column",
    }
}

keyword_enum! {
    /// `justify-content` for flex containers.
    FlexJustify, "justifyContent" {
        #[default]
        Start => "start",
        End => "end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

keyword_enum! {
    /// `align-items` for flex containers.
    FlexAlign, "alignItems" {
        Start => "start",
        End => "end",
        Center => "center",
        #[default]
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

/// Build a flex container style.
///
/// ```
/// use stylekit::layout::{flex_container, FlexAlign, FlexDirection, FlexJustify};
///
/// let style = flex_container(FlexDirection::Column, FlexJustify::SpaceAround, FlexAlign::End);
/// assert_eq!(style.str_value("display"), Some("flex"));
/// assert_eq!(style.str_value("justifyContent"), Some("space-around"));
/// ```
pub fn flex_container(
    direction: FlexDirection,
    justify: FlexJustify,
    align: FlexAlign,
) -> StyleObject {
    StyleObject::new()
        .with("display", "flex")
        .with("flexDirection", direction.as_str())
        .with("justifyContent", justify.as_str())
        .with("alignItems", align.as_str())
}

/// Build a flex item style with `flexBasis`, `flexGrow` and `flexShrink`.
///
/// A string basis must be `auto`, `content` or a non-negative length in
/// `px`, `em`, `rem` or `%`.
///
/// # Errors
///
/// Fails on negative grow/shrink factors or an invalid basis.
pub fn flex_item(grow: f64, basis: impl Into<StyleValue>, shrink: f64) -> Result<StyleObject> {
    if grow < 0.0 {
        return Err(Error::out_of_range("grow must be non-negative", grow));
    }
    if shrink < 0.0 {
        return Err(Error::out_of_range("shrink must be non-negative", shrink));
    }

    let basis = basis.into();
    let valid = match &basis {
        StyleValue::Str(s) => s == "auto" || s == "content" || FLEX_BASIS.is_match(s),
        StyleValue::Number(_) => true,
        StyleValue::Object(_) => false,
    };
    if !valid {
        return Err(Error::invalid_keyword("basis", basis.to_css_string()));
    }

    Ok(StyleObject::new()
        .with("flexBasis", basis)
        .with("flexGrow", grow)
        .with("flexShrink", shrink))
}
