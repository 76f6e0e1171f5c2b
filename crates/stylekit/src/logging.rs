//! Logging targets.
//!
//! stylekit uses the `tracing` crate for instrumentation. To see logs, install
//! a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("stylekit::registry=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Static resolution.
    pub const RESOLVE: &str = "stylekit::resolve";
    /// Custom-property registry and keyframe store.
    pub const REGISTRY: &str = "stylekit::registry";
    /// Style sink writes.
    pub const SINK: &str = "stylekit::sink";
    /// Resize handling.
    pub const RESIZE: &str = "stylekit::resize";
    /// Style helpers (effects, animation, layout, typography).
    pub const HELPERS: &str = "stylekit::helpers";
}
