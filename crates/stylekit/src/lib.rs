//! Responsive style generation utilities.
//!
//! This crate builds CSS-in-JS style objects, featuring:
//!
//! - **Responsive values**: Per-breakpoint values resolved into media-query
//!   sub-objects ([`resolve::resolve_static`])
//! - **Dynamic styles**: CSS custom properties kept in a style sink and
//!   regenerated on viewport resize ([`resolve::StyleRegistry`])
//! - **Colors**: Parsing, HSL adjustment and hex/rgb conversion
//! - **Layout**: Flexbox and grid helpers
//! - **Effects**: Shadows, transitions and animations
//! - **Typography**: Font helpers and presets
//!
//! # Example
//!
//! ```
//! use stylekit::prelude::*;
//!
//! let request = StyleRequest::new()
//!     .set("color", "red")
//!     .set("padding", BreakpointMap::<StyleValue>::new().base("1rem").lg("2rem"));
//!
//! // Static mode: media-query sub-objects.
//! let style = resolve_static(&request);
//! assert_eq!(style.str_value("padding"), Some("1rem"));
//!
//! // Dynamic mode: custom-property references.
//! let mut registry = StyleRegistry::server();
//! let style = registry.responsive(&request);
//! assert_eq!(style.str_value("color"), Some("var(--css-in-js-utils-0)"));
//! ```

pub mod animation;
pub mod breakpoint;
pub mod color;
pub mod effects;
pub mod environment;
pub mod global;
pub mod layout;
pub mod logging;
pub mod resolve;
pub mod sink;
pub mod types;
pub mod typography;
pub mod units;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::animation::{Animation, Keyframes};
    pub use crate::breakpoint::{Breakpoint, BreakpointMap};
    pub use crate::effects::{Shadow, ShadowOffset, ShadowSize, TimingFunction};
    pub use crate::environment::{ChannelResizeSource, ResizeEmitter, ResizeEvent, ResizeSource};
    pub use crate::layout::{GridContainer, GridItem};
    pub use crate::resolve::{RegistryConfig, StyleRegistry, resolve_static};
    pub use crate::sink::{LiveSink, NullSink, StyleSink};
    pub use crate::types::{ResponsiveValue, StyleEntry, StyleObject, StyleRequest, StyleValue};
    pub use crate::typography::{FontWeight, TextAlign, TypographyPreset};
    pub use crate::{Error, Result};
}
