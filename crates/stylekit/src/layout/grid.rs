//! CSS grid helpers.
//!
//! Every grid property accepts a responsive value; the result is resolved in
//! static mode, so responsive entries end up under media-query keys.
//!
//! # Example
//!
//! ```
//! use stylekit::layout::{GridContainer, GridTrack};
//! use stylekit::prelude::*;
//!
//! let style = GridContainer::new()
//!     .columns(BreakpointMap::<GridTrack>::new().base(1).md(2))
//!     .gap("20px")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(style.str_value("gridTemplateColumns"), Some("repeat(1, 1fr)"));
//! let md = style.nested("@media (min-width: 768px)").unwrap();
//! assert_eq!(md.str_value("gridTemplateColumns"), Some("repeat(2, 1fr)"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::breakpoint::Breakpoint;
use crate::resolve::resolve_static;
use crate::types::{
    ResponsiveValue, StyleObject, StyleRequest, StyleValue, impl_scalar_from, keyword_enum,
};
use crate::{Error, Result};

static GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)?(px|em|rem|%)$").expect("gap pattern is valid")
});

keyword_enum! {
    /// `justify-items`, `align-items`, `justify-self` and `align-self`.
    GridAlign, "grid alignment" {
        Start => "start",
        End => "end",
        Center => "center",
        #[default]
        Stretch => "stretch",
    }
}

keyword_enum! {
    /// `justify-content` and `align-content`.
    GridContentAlign, "grid content alignment" {
        #[default]
        Start => "start",
        End => "end",
        Center => "center",
        Stretch => "stretch",
        SpaceAround => "space-around",
        SpaceBetween => "space-between",
        SpaceEvenly => "space-evenly",
    }
}

/// A track list: a count of equal `1fr` tracks or a literal template.
#[derive(Debug, Clone, PartialEq)]
pub enum GridTrack {
    /// `repeat(n, 1fr)`; must be at least 1.
    Count(i64),
    /// Used verbatim, e.g. `1fr 2fr` or `auto`.
    Template(String),
}

impl From<i32> for GridTrack {
    fn from(n: i32) -> Self {
        GridTrack::Count(i64::from(n))
    }
}

impl From<&str> for GridTrack {
    fn from(template: &str) -> Self {
        GridTrack::Template(template.to_string())
    }
}

impl From<i32> for ResponsiveValue<GridTrack> {
    fn from(n: i32) -> Self {
        ResponsiveValue::Scalar(n.into())
    }
}

impl From<&str> for ResponsiveValue<GridTrack> {
    fn from(template: &str) -> Self {
        ResponsiveValue::Scalar(template.into())
    }
}

/// A grid line: `auto` or a 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLine {
    #[default]
    Auto,
    Line(i64),
}

impl From<i32> for GridLine {
    fn from(n: i32) -> Self {
        GridLine::Line(i64::from(n))
    }
}

impl From<i32> for ResponsiveValue<GridLine> {
    fn from(n: i32) -> Self {
        ResponsiveValue::Scalar(n.into())
    }
}

impl_scalar_from!(GridTrack, GridLine);

fn tracks(
    constraint: &'static str,
    value: &ResponsiveValue<GridTrack>,
) -> Result<ResponsiveValue<StyleValue>> {
    value.clone().try_map(|_, track| match track {
        GridTrack::Count(n) if n < 1 => Err(Error::out_of_range(constraint, n as f64)),
        GridTrack::Count(n) => Ok(StyleValue::from(format!("repeat({n}, 1fr)"))),
        GridTrack::Template(t) => Ok(StyleValue::from(t)),
    })
}

fn gap(value: &ResponsiveValue<String>) -> Result<ResponsiveValue<StyleValue>> {
    value.clone().try_map(|bp: Option<Breakpoint>, gap| {
        if GAP.is_match(&gap) {
            return Ok(StyleValue::from(gap));
        }
        Err(match bp {
            Some(bp) => Error::invalid_unit_at("gap", bp, gap),
            None => Error::invalid_unit("gap", gap),
        })
    })
}

fn line(
    constraint: &'static str,
    value: &ResponsiveValue<GridLine>,
) -> Result<ResponsiveValue<StyleValue>> {
    value.clone().try_map(|_, line| match line {
        GridLine::Auto => Ok(StyleValue::from("auto")),
        GridLine::Line(n) if n < 1 => Err(Error::out_of_range(constraint, n as f64)),
        GridLine::Line(n) => Ok(StyleValue::Number(n as f64)),
    })
}

fn keywords<T: Into<StyleValue>>(value: &ResponsiveValue<T>) -> ResponsiveValue<StyleValue>
where
    T: Clone,
{
    value.clone().map(Into::into)
}

/// Builder for a grid container.
///
/// Defaults: one column, `auto` rows, `1rem` gap, stretched items and
/// start-aligned content.
#[derive(Debug, Clone)]
pub struct GridContainer {
    columns: ResponsiveValue<GridTrack>,
    rows: ResponsiveValue<GridTrack>,
    gap: ResponsiveValue<String>,
    justify_items: ResponsiveValue<GridAlign>,
    align_items: ResponsiveValue<GridAlign>,
    justify_content: ResponsiveValue<GridContentAlign>,
    align_content: ResponsiveValue<GridContentAlign>,
}

impl Default for GridContainer {
    fn default() -> Self {
        Self {
            columns: 1.into(),
            rows: "auto".into(),
            gap: "1rem".into(),
            justify_items: GridAlign::Stretch.into(),
            align_items: GridAlign::Stretch.into(),
            justify_content: GridContentAlign::Start.into(),
            align_content: GridContentAlign::Start.into(),
        }
    }
}

impl GridContainer {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column tracks. A count `n` becomes `repeat(n, 1fr)`.
    pub fn columns(mut self, columns: impl Into<ResponsiveValue<GridTrack>>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Set the row tracks. A count `n` becomes `repeat(n, 1fr)`.
    pub fn rows(mut self, rows: impl Into<ResponsiveValue<GridTrack>>) -> Self {
        self.rows = rows.into();
        self
    }

    /// Set the gap, a length in `px`, `em`, `rem` or `%`.
    pub fn gap(mut self, gap: impl Into<ResponsiveValue<String>>) -> Self {
        self.gap = gap.into();
        self
    }

    /// Set `justifyItems`.
    pub fn justify_items(mut self, value: impl Into<ResponsiveValue<GridAlign>>) -> Self {
        self.justify_items = value.into();
        self
    }

    /// Set `alignItems`.
    pub fn align_items(mut self, value: impl Into<ResponsiveValue<GridAlign>>) -> Self {
        self.align_items = value.into();
        self
    }

    /// Set `justifyContent`.
    pub fn justify_content(mut self, value: impl Into<ResponsiveValue<GridContentAlign>>) -> Self {
        self.justify_content = value.into();
        self
    }

    /// Set `alignContent`.
    pub fn align_content(mut self, value: impl Into<ResponsiveValue<GridContentAlign>>) -> Self {
        self.align_content = value.into();
        self
    }

    /// Validate and resolve into a style object with `display: grid` first.
    ///
    /// # Errors
    ///
    /// Fails on a track count below 1 or a gap without a `px`, `em`, `rem`
    /// or `%` unit.
    pub fn build(&self) -> Result<StyleObject> {
        let request = StyleRequest::new()
            .set("display", "grid")
            .set(
                "gridTemplateColumns",
                tracks("columns must be a positive number or a valid CSS value", &self.columns)?,
            )
            .set(
                "gridTemplateRows",
                tracks("rows must be a positive number or a valid CSS value", &self.rows)?,
            )
            .set("gap", gap(&self.gap)?)
            .set("justifyItems", keywords(&self.justify_items))
            .set("alignItems", keywords(&self.align_items))
            .set("justifyContent", keywords(&self.justify_content))
            .set("alignContent", keywords(&self.align_content));
        Ok(resolve_static(&request))
    }
}

/// Builder for a grid item.
///
/// All lines default to `auto` and both self-alignments to `stretch`.
#[derive(Debug, Clone)]
pub struct GridItem {
    column_start: ResponsiveValue<GridLine>,
    column_end: ResponsiveValue<GridLine>,
    row_start: ResponsiveValue<GridLine>,
    row_end: ResponsiveValue<GridLine>,
    justify_self: ResponsiveValue<GridAlign>,
    align_self: ResponsiveValue<GridAlign>,
}

impl Default for GridItem {
    fn default() -> Self {
        Self {
            column_start: GridLine::Auto.into(),
            column_end: GridLine::Auto.into(),
            row_start: GridLine::Auto.into(),
            row_end: GridLine::Auto.into(),
            justify_self: GridAlign::Stretch.into(),
            align_self: GridAlign::Stretch.into(),
        }
    }
}

impl GridItem {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `gridColumnStart`.
    pub fn column_start(mut self, line: impl Into<ResponsiveValue<GridLine>>) -> Self {
        self.column_start = line.into();
        self
    }

    /// Set `gridColumnEnd`.
    pub fn column_end(mut self, line: impl Into<ResponsiveValue<GridLine>>) -> Self {
        self.column_end = line.into();
        self
    }

    /// Set `gridRowStart`.
    pub fn row_start(mut self, line: impl Into<ResponsiveValue<GridLine>>) -> Self {
        self.row_start = line.into();
        self
    }

    /// Set `gridRowEnd`.
    pub fn row_end(mut self, line: impl Into<ResponsiveValue<GridLine>>) -> Self {
        self.row_end = line.into();
        self
    }

    /// Set `justifySelf`.
    pub fn justify_self(mut self, value: impl Into<ResponsiveValue<GridAlign>>) -> Self {
        self.justify_self = value.into();
        self
    }

    /// Set `alignSelf`.
    pub fn align_self(mut self, value: impl Into<ResponsiveValue<GridAlign>>) -> Self {
        self.align_self = value.into();
        self
    }

    /// Validate and resolve into a style object.
    ///
    /// # Errors
    ///
    /// Fails on a line number below 1.
    pub fn build(&self) -> Result<StyleObject> {
        let request = StyleRequest::new()
            .set(
                "gridColumnStart",
                line("colStart must be a positive number or \"auto\"", &self.column_start)?,
            )
            .set(
                "gridColumnEnd",
                line("colEnd must be a positive number or \"auto\"", &self.column_end)?,
            )
            .set(
                "gridRowStart",
                line("rowStart must be a positive number or \"auto\"", &self.row_start)?,
            )
            .set(
                "gridRowEnd",
                line("rowEnd must be a positive number or \"auto\"", &self.row_end)?,
            )
            .set("justifySelf", keywords(&self.justify_self))
            .set("alignSelf", keywords(&self.align_self));
        Ok(resolve_static(&request))
    }
}
