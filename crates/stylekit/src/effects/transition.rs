//! The `transition` shorthand and timing functions.

use std::fmt;
use std::str::FromStr;

use crate::logging::targets;
use crate::types::{StyleObject, format_number};
use crate::{Error, Result};

/// Durations or delays above this many milliseconds log a warning.
pub const LONG_TIMING_MS: f64 = 10_000.0;

/// A CSS easing function.
///
/// `cubic-bezier(...)` and `steps(...)` are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TimingFunction {
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Linear,
    /// A `cubic-bezier(...)` or `steps(...)` function.
    Function(String),
}

impl TimingFunction {
    /// The CSS text.
    pub fn as_str(&self) -> &str {
        match self {
            TimingFunction::Ease => "ease",
            TimingFunction::EaseIn => "ease-in",
            TimingFunction::EaseOut => "ease-out",
            TimingFunction::EaseInOut => "ease-in-out",
            TimingFunction::Linear => "linear",
            TimingFunction::Function(f) => f,
        }
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimingFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "ease" => TimingFunction::Ease,
            "ease-in" => TimingFunction::EaseIn,
            "ease-out" => TimingFunction::EaseOut,
            "ease-in-out" => TimingFunction::EaseInOut,
            "linear" => TimingFunction::Linear,
            f if f.starts_with("cubic-bezier") || f.starts_with("steps") => {
                TimingFunction::Function(f.to_string())
            }
            other => return Err(Error::invalid_keyword("timing function", other)),
        })
    }
}

/// Build `{transition: "<property> <duration>ms <timing> <delay>ms"}`.
///
/// # Errors
///
/// Fails on a negative duration or delay.
///
/// # Example
///
/// ```
/// use stylekit::effects::{transition, TimingFunction};
///
/// let style = transition("opacity", 500.0, TimingFunction::EaseIn, 100.0).unwrap();
/// assert_eq!(style.str_value("transition"), Some("opacity 500ms ease-in 100ms"));
/// ```
pub fn transition(
    property: &str,
    duration_ms: f64,
    timing: TimingFunction,
    delay_ms: f64,
) -> Result<StyleObject> {
    if duration_ms < 0.0 {
        return Err(Error::out_of_range(
            "Duration must be a non-negative number",
            duration_ms,
        ));
    }
    if delay_ms < 0.0 {
        return Err(Error::out_of_range(
            "Delay must be a non-negative number",
            delay_ms,
        ));
    }
    if duration_ms > LONG_TIMING_MS || delay_ms > LONG_TIMING_MS {
        tracing::warn!(
            target: targets::HELPERS,
            property,
            duration_ms,
            delay_ms,
            "Very long duration or delay detected. Ensure this is intentional."
        );
    }

    Ok(StyleObject::new().with(
        "transition",
        format!(
            "{property} {}ms {timing} {}ms",
            format_number(duration_ms),
            format_number(delay_ms)
        ),
    ))
}

/// Join several transition objects into one `{transition: "a, b"}`.
///
/// # Errors
///
/// Fails on the first object without a `transition` string.
pub fn multiple_transitions<'a>(
    transitions: impl IntoIterator<Item = &'a StyleObject>,
) -> Result<StyleObject> {
    let parts = transitions
        .into_iter()
        .enumerate()
        .map(|(index, style)| {
            style
                .str_value("transition")
                .ok_or(Error::InvalidComposite {
                    kind: "transition",
                    index,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StyleObject::new().with("transition", parts.join(", ")))
}
