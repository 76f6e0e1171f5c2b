//! Breakpoint table and per-breakpoint value maps.
//!
//! Breakpoints are ordered by their minimum viewport width:
//!
//! | Breakpoint | Min width |
//! |------------|-----------|
//! | `base`     | 0         |
//! | `sm`       | 640px     |
//! | `md`       | 768px     |
//! | `lg`       | 1024px    |
//! | `xl`       | 1280px    |
//! | `2xl`      | 1536px    |
//!
//! `base` never gets a media-query wrapper.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A named viewport-width threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Breakpoint {
    /// Unconditional tier (0px).
    Base = 0,
    /// 640px and up.
    Sm = 1,
    /// 768px and up.
    Md = 2,
    /// 1024px and up.
    Lg = 3,
    /// 1280px and up.
    Xl = 4,
    /// 1536px and up.
    Xxl = 5,
}

impl Breakpoint {
    /// All breakpoints in ascending threshold order.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Minimum viewport width in pixels.
    pub const fn min_width(self) -> u32 {
        match self {
            Breakpoint::Base => 0,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }

    /// The tag used for this breakpoint in responsive maps.
    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Look up a breakpoint by its tag. Returns `None` for unknown tags.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.name() == name)
    }

    /// Whether this is the unconditional `base` tier.
    pub const fn is_base(self) -> bool {
        matches!(self, Breakpoint::Base)
    }

    /// Media-query key used in statically resolved style objects,
    /// e.g. `@media (min-width: 768px)`. `None` for `base`.
    pub fn media_query(self) -> Option<String> {
        if self.is_base() {
            None
        } else {
            Some(format!("@media (min-width: {}px)", self.min_width()))
        }
    }

    /// Breakpoint index into a [`BreakpointMap`].
    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::invalid_keyword("breakpoint", s))
    }
}

/// A partial mapping from [`Breakpoint`] to `T`.
///
/// Only breakpoints that were explicitly set carry a value; iteration always
/// follows ascending threshold order, whatever order the entries were set in.
///
/// # Example
///
/// ```
/// use stylekit::breakpoint::{Breakpoint, BreakpointMap};
///
/// let map: BreakpointMap<&str> = BreakpointMap::new().md("blue").base("red");
/// let tiers: Vec<_> = map.iter().map(|(bp, v)| (bp, *v)).collect();
/// assert_eq!(tiers, vec![(Breakpoint::Base, "red"), (Breakpoint::Md, "blue")]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointMap<T> {
    entries: [Option<T>; 6],
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self {
            entries: [None, None, None, None, None, None],
        }
    }
}

impl<T> BreakpointMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value at a breakpoint, replacing any previous one.
    pub fn insert(&mut self, breakpoint: Breakpoint, value: T) -> Option<T> {
        self.entries[breakpoint.index()].replace(value)
    }

    /// Set the value for a breakpoint tag.
    ///
    /// Unknown tags are ignored and `false` is returned.
    pub fn insert_named(&mut self, name: &str, value: T) -> bool {
        match Breakpoint::from_name(name) {
            Some(bp) => {
                self.insert(bp, value);
                true
            }
            None => false,
        }
    }

    /// Remove the value at a breakpoint.
    pub fn remove(&mut self, breakpoint: Breakpoint) -> Option<T> {
        self.entries[breakpoint.index()].take()
    }

    /// Get the value at a breakpoint, if one was set.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.entries[breakpoint.index()].as_ref()
    }

    /// Whether a value was set at `breakpoint`.
    pub fn contains(&self, breakpoint: Breakpoint) -> bool {
        self.entries[breakpoint.index()].is_some()
    }

    /// Number of breakpoints with a value.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no breakpoint has a value.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    /// Iterate over set entries in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(|bp| self.get(bp).map(|v| (bp, v)))
    }

    /// Map every set entry through `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> BreakpointMap<U> {
        let [a, b, c, d, e, g] = self.entries;
        BreakpointMap {
            entries: [
                a.map(&mut f),
                b.map(&mut f),
                c.map(&mut f),
                d.map(&mut f),
                e.map(&mut f),
                g.map(&mut f),
            ],
        }
    }

    /// Map every set entry through a fallible `f`, stopping at the first error.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(Breakpoint, T) -> std::result::Result<U, E>,
    ) -> std::result::Result<BreakpointMap<U>, E> {
        let mut out = BreakpointMap::new();
        for (bp, value) in Breakpoint::ALL.into_iter().zip(self.entries) {
            if let Some(value) = value {
                out.insert(bp, f(bp, value)?);
            }
        }
        Ok(out)
    }

    /// Builder: set the `base` value.
    pub fn base(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Base, value)
    }

    /// Builder: set the `sm` value.
    pub fn sm(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Sm, value)
    }

    /// Builder: set the `md` value.
    pub fn md(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Md, value)
    }

    /// Builder: set the `lg` value.
    pub fn lg(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Lg, value)
    }

    /// Builder: set the `xl` value.
    pub fn xl(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Xl, value)
    }

    /// Builder: set the `2xl` value.
    pub fn xxl(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Xxl, value)
    }

    /// Builder: set the value at any breakpoint.
    pub fn with(mut self, breakpoint: Breakpoint, value: impl Into<T>) -> Self {
        self.insert(breakpoint, value.into());
        self
    }
}

impl<T> FromIterator<(Breakpoint, T)> for BreakpointMap<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (bp, value) in iter {
            map.insert(bp, value);
        }
        map
    }
}
