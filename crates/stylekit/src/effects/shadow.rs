//! Box and text shadows.

use std::str::FromStr;

use crate::color::is_valid_color;
use crate::types::{StyleObject, format_number};
use crate::{Error, Result};

/// Shadow color used when none is given.
pub const DEFAULT_SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.1)";

/// Shadow geometry in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShadowOffset {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    /// Ignored by text shadows.
    pub spread: f64,
}

impl ShadowOffset {
    /// Create an offset with zero spread.
    pub const fn new(x: f64, y: f64, blur: f64) -> Self {
        Self {
            x,
            y,
            blur,
            spread: 0.0,
        }
    }

    /// Builder: set the spread radius.
    pub const fn spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }
}

/// Preset shadow sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShadowSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Xxl,
}

impl ShadowSize {
    /// The geometry of this preset.
    pub const fn offset(self) -> ShadowOffset {
        match self {
            ShadowSize::Sm => ShadowOffset::new(0.0, 1.0, 2.0),
            ShadowSize::Md => ShadowOffset::new(0.0, 2.0, 4.0),
            ShadowSize::Lg => ShadowOffset::new(0.0, 4.0, 8.0),
            ShadowSize::Xl => ShadowOffset::new(0.0, 8.0, 16.0),
            ShadowSize::Xxl => ShadowOffset::new(0.0, 12.0, 24.0),
        }
    }
}

impl FromStr for ShadowSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sm" => Ok(ShadowSize::Sm),
            "md" => Ok(ShadowSize::Md),
            "lg" => Ok(ShadowSize::Lg),
            "xl" => Ok(ShadowSize::Xl),
            "2xl" => Ok(ShadowSize::Xxl),
            other => Err(Error::invalid_keyword("shadow size", other)),
        }
    }
}

/// A preset size or explicit geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shadow {
    Preset(ShadowSize),
    Custom(ShadowOffset),
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow::Preset(ShadowSize::default())
    }
}

impl Shadow {
    fn offset(self) -> ShadowOffset {
        match self {
            Shadow::Preset(size) => size.offset(),
            Shadow::Custom(offset) => offset,
        }
    }
}

impl From<ShadowSize> for Shadow {
    fn from(size: ShadowSize) -> Self {
        Shadow::Preset(size)
    }
}

impl From<ShadowOffset> for Shadow {
    fn from(offset: ShadowOffset) -> Self {
        Shadow::Custom(offset)
    }
}

fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

fn check_color(color: &str) -> Result<()> {
    if is_valid_color(color) {
        Ok(())
    } else {
        Err(Error::invalid_color(color))
    }
}

/// Build `{boxShadow: "[inset ]<x> <y> <blur> <spread> <color>"}`.
///
/// # Example
///
/// ```
/// use stylekit::effects::{box_shadow, ShadowSize, DEFAULT_SHADOW_COLOR};
///
/// let style = box_shadow(ShadowSize::Lg, DEFAULT_SHADOW_COLOR, false).unwrap();
/// assert_eq!(
///     style.str_value("boxShadow"),
///     Some("0px 4px 8px 0px rgba(0, 0, 0, 0.1)")
/// );
/// ```
pub fn box_shadow(shadow: impl Into<Shadow>, color: &str, inset: bool) -> Result<StyleObject> {
    check_color(color)?;
    let o = shadow.into().offset();
    let prefix = if inset { "inset " } else { "" };
    Ok(StyleObject::new().with(
        "boxShadow",
        format!(
            "{prefix}{} {} {} {} {color}",
            px(o.x),
            px(o.y),
            px(o.blur),
            px(o.spread)
        ),
    ))
}

/// Build `{textShadow: "<x> <y> <blur> <color>"}`.
pub fn text_shadow(shadow: impl Into<Shadow>, color: &str) -> Result<StyleObject> {
    check_color(color)?;
    let o = shadow.into().offset();
    Ok(StyleObject::new().with(
        "textShadow",
        format!("{} {} {} {color}", px(o.x), px(o.y), px(o.blur)),
    ))
}
