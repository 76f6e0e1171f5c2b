//! Keyframes and the `animation` shorthand.
//!
//! # Example
//!
//! ```
//! use stylekit::animation::{keyframes_css, Animation, Keyframes};
//!
//! let frames = Keyframes::new()
//!     .frame("0%", [("opacity", "0")])
//!     .frame("100%", [("opacity", "1")]);
//! assert_eq!(
//!     keyframes_css("fadeIn", &frames),
//!     "@keyframes fadeIn { 0% { opacity: 0; } 100% { opacity: 1; } }"
//! );
//!
//! let style = Animation::new("fadeIn").duration(200).build().unwrap();
//! assert_eq!(
//!     style.str_value("animation"),
//!     Some("fadeIn 200ms ease 0s 1 normal none running")
//! );
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::effects::TimingFunction;
use crate::types::{StyleObject, StyleValue, format_number, keyword_enum};
use crate::{Error, Result};

static TIME_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)?(ms|s)$").expect("time value pattern is valid")
});

/// Keyframe selectors (`0%`, `from`, ...) with their declarations, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keyframes {
    frames: Vec<(String, Vec<(String, StyleValue)>)>,
}

impl Keyframes {
    /// Create an empty keyframe list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a keyframe.
    pub fn frame<K, V>(
        mut self,
        selector: impl Into<String>,
        declarations: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<StyleValue>,
    {
        let declarations = declarations
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.frames.push((selector.into(), declarations));
        self
    }

    /// Whether there are no keyframes.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Render an `@keyframes` rule.
pub fn keyframes_css(name: &str, frames: &Keyframes) -> String {
    let body = frames
        .frames
        .iter()
        .map(|(selector, declarations)| {
            let declarations = declarations
                .iter()
                .map(|(prop, value)| format!("{prop}: {value};"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{selector} {{ {declarations} }}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("@keyframes {name} {{ {body} }}")
}

/// A CSS time value for durations and delays.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    /// Milliseconds; written as `<n>ms`.
    Millis(f64),
    /// A literal such as `1s` or `0.5s`, validated on build.
    Literal(String),
}

impl TimeValue {
    fn to_css(&self) -> Result<String> {
        let text = match self {
            TimeValue::Millis(ms) => format!("{}ms", format_number(*ms)),
            TimeValue::Literal(s) => s.clone(),
        };
        if TIME_VALUE.is_match(&text) {
            Ok(text)
        } else {
            Err(Error::InvalidTime(text))
        }
    }
}

impl From<f64> for TimeValue {
    fn from(ms: f64) -> Self {
        TimeValue::Millis(ms)
    }
}

impl From<u32> for TimeValue {
    fn from(ms: u32) -> Self {
        TimeValue::Millis(f64::from(ms))
    }
}

impl From<i32> for TimeValue {
    fn from(ms: i32) -> Self {
        TimeValue::Millis(f64::from(ms))
    }
}

impl From<&str> for TimeValue {
    fn from(s: &str) -> Self {
        TimeValue::Literal(s.to_string())
    }
}

/// How many times an animation runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationCount {
    /// A finite count; must not be negative.
    Count(f64),
    /// `infinite`.
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::Count(1.0)
    }
}

impl From<f64> for IterationCount {
    fn from(n: f64) -> Self {
        IterationCount::Count(n)
    }
}

impl From<i32> for IterationCount {
    fn from(n: i32) -> Self {
        IterationCount::Count(f64::from(n))
    }
}

keyword_enum! {
    /// `animation-direction`.
    AnimationDirection, "animation direction" {
        #[default]
        Normal => "normal",
        Reverse => "reverse",
        Alternate => "alternate",
        AlternateReverse => "alternate-reverse",
    }
}

keyword_enum! {
    /// `animation-fill-mode`.
    FillMode, "animation fill mode" {
        #[default]
        None => "none",
        Forwards => "forwards",
        Backwards => "backwards",
        Both => "both",
    }
}

keyword_enum! {
    /// `animation-play-state`.
    PlayState, "animation play state" {
        #[default]
        Running => "running",
        Paused => "paused",
    }
}

/// Builder for the `animation` shorthand.
///
/// Defaults: `1s ease 0s 1 normal none running`.
#[derive(Debug, Clone)]
pub struct Animation {
    name: String,
    duration: TimeValue,
    timing: TimingFunction,
    delay: TimeValue,
    iteration_count: IterationCount,
    direction: AnimationDirection,
    fill_mode: FillMode,
    play_state: PlayState,
}

impl Animation {
    /// Start an animation referencing the keyframes called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: TimeValue::Literal("1s".into()),
            timing: TimingFunction::Ease,
            delay: TimeValue::Literal("0s".into()),
            iteration_count: IterationCount::default(),
            direction: AnimationDirection::default(),
            fill_mode: FillMode::default(),
            play_state: PlayState::default(),
        }
    }

    /// Set the duration. Numbers are milliseconds.
    pub fn duration(mut self, duration: impl Into<TimeValue>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Set the timing function.
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Set the delay. Numbers are milliseconds.
    pub fn delay(mut self, delay: impl Into<TimeValue>) -> Self {
        self.delay = delay.into();
        self
    }

    /// Set the iteration count.
    pub fn iteration_count(mut self, count: impl Into<IterationCount>) -> Self {
        self.iteration_count = count.into();
        self
    }

    /// Run forever.
    pub fn infinite(self) -> Self {
        self.iteration_count(IterationCount::Infinite)
    }

    /// Set the direction.
    pub fn direction(mut self, direction: AnimationDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the fill mode.
    pub fn fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Set the play state.
    pub fn play_state(mut self, play_state: PlayState) -> Self {
        self.play_state = play_state;
        self
    }

    /// Validate and render the shorthand string.
    ///
    /// # Errors
    ///
    /// Fails on invalid durations/delays or a negative iteration count.
    pub fn to_css(&self) -> Result<String> {
        let duration = self.duration.to_css()?;
        let delay = self.delay.to_css()?;
        let count = match self.iteration_count {
            IterationCount::Count(n) if n < 0.0 => {
                return Err(Error::out_of_range(
                    "Iteration count must be a positive number or \"infinite\"",
                    n,
                ));
            }
            IterationCount::Count(n) => format_number(n),
            IterationCount::Infinite => "infinite".to_string(),
        };

        Ok(format!(
            "{} {duration} {} {delay} {count} {} {} {}",
            self.name, self.timing, self.direction, self.fill_mode, self.play_state
        ))
    }

    /// Build `{animation: "..."}`.
    ///
    /// # Errors
    ///
    /// See [`Animation::to_css`].
    pub fn build(&self) -> Result<StyleObject> {
        Ok(StyleObject::new().with("animation", self.to_css()?))
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IterationCount::Count(n) => f.write_str(&format_number(*n)),
            IterationCount::Infinite => f.write_str("infinite"),
        }
    }
}

impl FromStr for IterationCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "infinite" {
            return Ok(IterationCount::Infinite);
        }
        s.parse::<f64>()
            .map(IterationCount::Count)
            .map_err(|_| Error::invalid_keyword("iteration count", s))
    }
}

/// One item for [`multiple_animations`].
#[derive(Debug, Clone, Copy)]
pub enum AnimationPart<'a> {
    /// A shorthand string such as `"spin 1s"`.
    Text(&'a str),
    /// A style object carrying an `animation` entry.
    Style(&'a StyleObject),
}

impl<'a> From<&'a str> for AnimationPart<'a> {
    fn from(text: &'a str) -> Self {
        AnimationPart::Text(text)
    }
}

impl<'a> From<&'a StyleObject> for AnimationPart<'a> {
    fn from(style: &'a StyleObject) -> Self {
        AnimationPart::Style(style)
    }
}

/// Join several animations into one `{animation: "a, b"}` object.
///
/// # Errors
///
/// Fails on the first style object without an `animation` string.
pub fn multiple_animations<'a, I>(parts: I) -> Result<StyleObject>
where
    I: IntoIterator,
    I::Item: Into<AnimationPart<'a>>,
{
    let mut texts = vec![];
    for (index, part) in parts.into_iter().enumerate() {
        let text = match part.into() {
            AnimationPart::Text(text) => text,
            AnimationPart::Style(style) => style
                .str_value("animation")
                .ok_or(Error::InvalidComposite {
                    kind: "animation",
                    index,
                })?,
        };
        texts.push(text.to_string());
    }
    Ok(StyleObject::new().with("animation", texts.join(", ")))
}
