//! Responsive value resolution.
//!
//! Two modes share the same input:
//!
//! - static mode ([`resolve_static`]) merges `base` values into the top level
//!   and nests every other tier under its `@media (min-width: ...)` key;
//! - custom-property mode ([`StyleRegistry::responsive`]) registers each value
//!   under a synthesized `--css-in-js-utils-<N>` id and returns `var(<id>)`
//!   references backed by generated `:root { ... }` CSS.

mod merge;
mod registry;
mod stringify;
mod table;

pub use merge::resolve_static;
pub use registry::{DEFAULT_ID_PREFIX, RegistryConfig, StyleRegistry};
pub use stringify::{Stringified, stringify, stringify_json, stringify_value};
pub use table::PropertyTable;
