//! Typography helpers.
//!
//! Each single-property helper resolves its value in static mode, so a
//! responsive value comes back with the base entry at the top level and the
//! other tiers under media-query keys.

use std::fmt;
use std::str::FromStr;

use crate::resolve::resolve_static;
use crate::types::{
    ResponsiveValue, StyleObject, StyleRequest, StyleValue, impl_scalar_from, keyword_enum,
};
use crate::units::validate_lengths;
use crate::{Error, Result};

/// A `font-weight` keyword or numeric weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Lighter,
    Bolder,
    /// A multiple of 100 between 100 and 900.
    Numeric(i32),
}

impl FontWeight {
    fn validate(self) -> Result<Self> {
        match self {
            FontWeight::Numeric(n) if !(100..=900).contains(&n) || n % 100 != 0 => Err(
                Error::out_of_range("Font weight must be a multiple of 100 between 100 and 900", n as f64),
            ),
            weight => Ok(weight),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Normal => f.write_str("normal"),
            FontWeight::Bold => f.write_str("bold"),
            FontWeight::Lighter => f.write_str("lighter"),
            FontWeight::Bolder => f.write_str("bolder"),
            FontWeight::Numeric(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for FontWeight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            "lighter" => Ok(FontWeight::Lighter),
            "bolder" => Ok(FontWeight::Bolder),
            other => other
                .parse::<i32>()
                .map_err(|_| Error::invalid_keyword("font weight", other))
                .and_then(|n| FontWeight::Numeric(n).validate()),
        }
    }
}

impl From<i32> for FontWeight {
    fn from(n: i32) -> Self {
        FontWeight::Numeric(n)
    }
}

impl From<i32> for ResponsiveValue<FontWeight> {
    fn from(n: i32) -> Self {
        ResponsiveValue::Scalar(FontWeight::Numeric(n))
    }
}

impl From<FontWeight> for StyleValue {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Numeric(n) => StyleValue::from(n),
            keyword => StyleValue::Str(keyword.to_string()),
        }
    }
}

impl_scalar_from!(FontWeight);

keyword_enum! {
    /// `text-align`.
    TextAlign, "text align" {
        #[default]
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

keyword_enum! {
    /// `text-transform`.
    TextTransform, "text transform" {
        #[default]
        None => "none",
        Capitalize => "capitalize",
        Uppercase => "uppercase",
        Lowercase => "lowercase",
    }
}

keyword_enum! {
    /// `text-decoration`.
    TextDecoration, "text decoration" {
        #[default]
        None => "none",
        Underline => "underline",
        Overline => "overline",
        LineThrough => "line-through",
    }
}

keyword_enum! {
    /// `font-style`.
    FontStyle, "font style" {
        #[default]
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

/// Named combinations of line height and letter spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypographyPreset {
    Heading,
    Subheading,
    #[default]
    Body,
    Caption,
}

impl TypographyPreset {
    /// `(lineHeight, letterSpacing)` for this preset.
    pub const fn metrics(self) -> (&'static str, Option<&'static str>) {
        match self {
            TypographyPreset::Heading => ("1.2", Some("-0.02em")),
            TypographyPreset::Subheading => ("1.3", Some("-0.01em")),
            TypographyPreset::Body => ("1.5", None),
            TypographyPreset::Caption => ("1.4", Some("0.01em")),
        }
    }
}

impl FromStr for TypographyPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "heading" => Ok(TypographyPreset::Heading),
            "subheading" => Ok(TypographyPreset::Subheading),
            "body" => Ok(TypographyPreset::Body),
            "caption" => Ok(TypographyPreset::Caption),
            other => Err(Error::InvalidPreset(other.to_string())),
        }
    }
}

fn single(property: &str, value: ResponsiveValue) -> StyleObject {
    resolve_static(&StyleRequest::new().set(property, value))
}

fn weights(value: ResponsiveValue<FontWeight>) -> Result<ResponsiveValue> {
    value.try_map(|_, weight| weight.validate().map(StyleValue::from))
}

fn keywords<T: Into<StyleValue>>(value: ResponsiveValue<T>) -> ResponsiveValue {
    value.map(Into::into)
}

/// `fontSize`, validated per breakpoint.
///
/// # Example
///
/// ```
/// use stylekit::prelude::*;
/// use stylekit::typography::font_size;
///
/// let style = font_size(BreakpointMap::<StyleValue>::new().base("16px").md("18px")).unwrap();
/// assert_eq!(style.str_value("fontSize"), Some("16px"));
/// let md = style.nested("@media (min-width: 768px)").unwrap();
/// assert_eq!(md.str_value("fontSize"), Some("18px"));
///
/// assert!(font_size("large").is_err());
/// ```
pub fn font_size(size: impl Into<ResponsiveValue>) -> Result<StyleObject> {
    let size = size.into();
    validate_lengths("font size", &size)?;
    Ok(single("fontSize", size))
}

/// `lineHeight`, validated per breakpoint. Unitless numbers are accepted.
pub fn line_height(height: impl Into<ResponsiveValue>) -> Result<StyleObject> {
    let height = height.into();
    validate_lengths("line height", &height)?;
    Ok(single("lineHeight", height))
}

/// `letterSpacing`, validated per breakpoint.
pub fn letter_spacing(spacing: impl Into<ResponsiveValue>) -> Result<StyleObject> {
    let spacing = spacing.into();
    validate_lengths("letter spacing", &spacing)?;
    Ok(single("letterSpacing", spacing))
}

/// `fontWeight`. Numeric weights must be multiples of 100 from 100 to 900.
pub fn font_weight(weight: impl Into<ResponsiveValue<FontWeight>>) -> Result<StyleObject> {
    Ok(single("fontWeight", weights(weight.into())?))
}

/// `textAlign`.
pub fn text_align(align: impl Into<ResponsiveValue<TextAlign>>) -> StyleObject {
    single("textAlign", keywords(align.into()))
}

/// `textTransform`.
pub fn text_transform(transform: impl Into<ResponsiveValue<TextTransform>>) -> StyleObject {
    single("textTransform", keywords(transform.into()))
}

/// `textDecoration`.
pub fn text_decoration(decoration: impl Into<ResponsiveValue<TextDecoration>>) -> StyleObject {
    single("textDecoration", keywords(decoration.into()))
}

/// `fontStyle`.
pub fn font_style(style: impl Into<ResponsiveValue<FontStyle>>) -> StyleObject {
    single("fontStyle", keywords(style.into()))
}

/// `fontFamily`. A blank plain value is rejected; responsive entries are
/// taken as given.
pub fn font_family(family: impl Into<ResponsiveValue<String>>) -> Result<StyleObject> {
    let family = family.into();
    if let ResponsiveValue::Scalar(name) = &family {
        if name.trim().is_empty() {
            return Err(Error::EmptyFontFamily);
        }
    }
    Ok(single("fontFamily", family.map(StyleValue::from)))
}

/// Combine a preset with a size, weight and alignment.
///
/// The properties are resolved as one request in the order `fontSize`,
/// `fontWeight`, `textAlign`, `lineHeight`, `letterSpacing`, so every base
/// value comes before the media-query entries.
///
/// # Example
///
/// ```
/// use stylekit::prelude::*;
/// use stylekit::typography::{create_typography, FontWeight, TextAlign, TypographyPreset};
///
/// let style = create_typography(
///     TypographyPreset::Heading,
///     BreakpointMap::<StyleValue>::new().base("24px").md("32px"),
///     FontWeight::Bold,
///     TextAlign::Center,
/// )
/// .unwrap();
///
/// let keys: Vec<_> = style.keys().collect();
/// assert_eq!(
///     keys,
///     ["fontSize", "fontWeight", "textAlign", "lineHeight", "letterSpacing", "@media (min-width: 768px)"]
/// );
/// ```
pub fn create_typography(
    preset: TypographyPreset,
    size: impl Into<ResponsiveValue>,
    weight: impl Into<ResponsiveValue<FontWeight>>,
    align: impl Into<ResponsiveValue<TextAlign>>,
) -> Result<StyleObject> {
    let size = size.into();
    validate_lengths("font size", &size)?;
    let (line_height, letter_spacing) = preset.metrics();

    let mut request = StyleRequest::new()
        .set("fontSize", size)
        .set("fontWeight", weights(weight.into())?)
        .set("textAlign", keywords(align.into()))
        .set("lineHeight", line_height);
    if let Some(spacing) = letter_spacing {
        request.insert("letterSpacing", spacing);
    }
    Ok(resolve_static(&request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::{Breakpoint, BreakpointMap};

    const MD: &str = "@media (min-width: 768px)";
    const LG: &str = "@media (min-width: 1024px)";

    #[test]
    fn font_size_plain_and_responsive() {
        let style = font_size("16px").unwrap();
        assert_eq!(style, StyleObject::new().with("fontSize", "16px"));

        let style = font_size(
            BreakpointMap::<StyleValue>::new()
                .base("16px")
                .md("18px")
                .lg("20px"),
        )
        .unwrap();
        assert_eq!(style.str_value("fontSize"), Some("16px"));
        assert_eq!(style.nested(MD).unwrap().str_value("fontSize"), Some("18px"));
        assert_eq!(style.nested(LG).unwrap().str_value("fontSize"), Some("20px"));
    }

    #[test]
    fn length_errors_name_property_and_breakpoint() {
        let err = font_size("big").unwrap_err();
        assert_eq!(err, Error::invalid_unit("font size", "big"));

        let err = letter_spacing(BreakpointMap::<StyleValue>::new().base("0.05em").md("wide"))
            .unwrap_err();
        assert_eq!(err, Error::invalid_unit_at("letter spacing", Breakpoint::Md, "wide"));
    }

    #[test]
    fn line_height_accepts_numbers() {
        let style = line_height(1.5).unwrap();
        assert_eq!(style.value("lineHeight"), Some(&StyleValue::Number(1.5)));
        assert_eq!(line_height("2em").unwrap().str_value("lineHeight"), Some("2em"));
        assert_eq!(
            letter_spacing(2).unwrap().value("letterSpacing"),
            Some(&StyleValue::Number(2.0))
        );
    }

    #[test]
    fn font_weights() {
        assert_eq!(font_weight(FontWeight::Bold).unwrap().str_value("fontWeight"), Some("bold"));
        assert_eq!(
            font_weight(700).unwrap().value("fontWeight"),
            Some(&StyleValue::Number(700.0))
        );

        let style = font_weight(
            BreakpointMap::<FontWeight>::new()
                .base(FontWeight::Normal)
                .md(FontWeight::Bold),
        )
        .unwrap();
        assert_eq!(style.str_value("fontWeight"), Some("normal"));
        assert_eq!(style.nested(MD).unwrap().str_value("fontWeight"), Some("bold"));

        assert!(font_weight(750).is_err());
        assert!(font_weight(1000).is_err());
        assert_eq!("600".parse::<FontWeight>(), Ok(FontWeight::Numeric(600)));
        assert!("heavy".parse::<FontWeight>().is_err());
    }

    #[test]
    fn keyword_properties() {
        assert_eq!(text_align(TextAlign::Center).str_value("textAlign"), Some("center"));
        assert_eq!(
            text_transform(TextTransform::Uppercase),
            StyleObject::new().with("textTransform", "uppercase")
        );
        assert_eq!(
            text_decoration(TextDecoration::LineThrough).str_value("textDecoration"),
            Some("line-through")
        );

        let style = font_style(
            BreakpointMap::<FontStyle>::new()
                .base(FontStyle::Normal)
                .md(FontStyle::Italic),
        );
        assert_eq!(style.str_value("fontStyle"), Some("normal"));
        assert_eq!(style.nested(MD).unwrap().str_value("fontStyle"), Some("italic"));

        assert!("middle".parse::<TextAlign>().is_err());
    }

    #[test]
    fn font_families() {
        let style = font_family("Arial, sans-serif").unwrap();
        assert_eq!(style.str_value("fontFamily"), Some("Arial, sans-serif"));

        let style = font_family(
            BreakpointMap::<String>::new()
                .base("Arial, sans-serif")
                .md("Helvetica, sans-serif"),
        )
        .unwrap();
        assert_eq!(
            style.nested(MD).unwrap().str_value("fontFamily"),
            Some("Helvetica, sans-serif")
        );

        assert_eq!(font_family("   "), Err(Error::EmptyFontFamily));
    }

    #[test]
    fn heading_preset() {
        let style = create_typography(
            TypographyPreset::Heading,
            BreakpointMap::<StyleValue>::new().base("24px").md("32px"),
            FontWeight::Bold,
            TextAlign::Center,
        )
        .unwrap();
        let expected = StyleObject::new()
            .with("fontSize", "24px")
            .with("fontWeight", "bold")
            .with("textAlign", "center")
            .with("lineHeight", "1.2")
            .with("letterSpacing", "-0.02em")
            .with(MD, StyleObject::new().with("fontSize", "32px"));
        assert_eq!(style, expected);
    }

    #[test]
    fn body_preset_with_defaults() {
        let style = create_typography(
            TypographyPreset::Body,
            BreakpointMap::<StyleValue>::new().base("16px").lg("18px"),
            FontWeight::default(),
            TextAlign::default(),
        )
        .unwrap();
        let expected = StyleObject::new()
            .with("fontSize", "16px")
            .with("fontWeight", "normal")
            .with("textAlign", "left")
            .with("lineHeight", "1.5")
            .with(LG, StyleObject::new().with("fontSize", "18px"));
        assert_eq!(style, expected);
    }

    #[test]
    fn preset_names() {
        assert_eq!("caption".parse::<TypographyPreset>(), Ok(TypographyPreset::Caption));
        let err = "invalid".parse::<TypographyPreset>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid typography preset: 'invalid'");
        assert!(create_typography(
            TypographyPreset::Caption,
            "16",
            FontWeight::Normal,
            TextAlign::Left
        )
        .is_err());
    }
}
