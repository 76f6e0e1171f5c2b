//! The default process-wide registry.
//!
//! These functions forward to one shared [`StyleRegistry`], created lazily as
//! a server-like registry. An interactive host swaps in a browser-like one
//! with [`install`] before resolving any styles.
//!
//! # Example
//!
//! ```
//! use stylekit::global;
//! use stylekit::prelude::*;
//!
//! global::clear_styles();
//! let style = global::responsive(&StyleRequest::new().set("color", "red"));
//! assert_eq!(style.str_value("color"), Some("var(--css-in-js-utils-0)"));
//! assert_eq!(
//!     global::get_responsive_styles(),
//!     ":root { --css-in-js-utils-0: red; }"
//! );
//! ```

use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::animation::Keyframes;
use crate::logging::targets;
use crate::resolve::StyleRegistry;
use crate::types::{StyleObject, StyleRequest};

static REGISTRY: OnceLock<Mutex<StyleRegistry>> = OnceLock::new();

fn registry() -> &'static Mutex<StyleRegistry> {
    REGISTRY.get_or_init(|| Mutex::new(StyleRegistry::server()))
}

/// Replace the shared registry, returning the previous one.
pub fn install(registry: StyleRegistry) -> StyleRegistry {
    tracing::debug!(target: targets::REGISTRY, "installed global style registry");
    std::mem::replace(&mut *self::registry().lock(), registry)
}

/// Run `f` with exclusive access to the shared registry.
///
/// The lock is not reentrant: calling any other function of this module
/// from inside `f` deadlocks. Use the `&mut StyleRegistry` argument instead.
pub fn with_registry<R>(f: impl FnOnce(&mut StyleRegistry) -> R) -> R {
    f(&mut registry().lock())
}

/// See [`StyleRegistry::responsive`].
pub fn responsive(request: &StyleRequest) -> StyleObject {
    with_registry(|r| r.responsive(request))
}

/// See [`StyleRegistry::get_responsive_styles`].
pub fn get_responsive_styles() -> String {
    with_registry(|r| r.get_responsive_styles())
}

/// See [`StyleRegistry::clear_styles`].
pub fn clear_styles() {
    with_registry(StyleRegistry::clear_styles);
}

/// See [`StyleRegistry::keyframe`].
pub fn keyframe(name: &str, frames: &Keyframes) -> String {
    with_registry(|r| r.keyframe(name, frames))
}

/// See [`StyleRegistry::get_all_keyframes`].
pub fn get_all_keyframes() -> String {
    with_registry(|r| r.get_all_keyframes())
}

/// See [`StyleRegistry::clear_keyframes`].
pub fn clear_keyframes() {
    with_registry(StyleRegistry::clear_keyframes);
}

/// See [`StyleRegistry::get_all_styles`].
pub fn get_all_styles() -> String {
    with_registry(|r| r.get_all_styles())
}

/// See [`StyleRegistry::process_resize_events`].
pub fn process_resize_events() -> usize {
    with_registry(StyleRegistry::process_resize_events)
}
