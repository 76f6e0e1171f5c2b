//! Output surfaces for generated CSS text.
//!
//! A [`StyleSink`] is chosen once, when a registry is constructed:
//! [`NullSink`] for server-like contexts and [`LiveSink`] for browser-like
//! ones. Sink text only ever grows between resets.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::logging::targets;

/// A writable output surface for generated CSS.
pub trait StyleSink: Send + fmt::Debug {
    /// Append CSS text after the existing content.
    fn append(&mut self, css: &str);

    /// The full text written so far.
    fn text(&self) -> String;

    /// Drop all text. The backing resource, if any, is kept.
    fn clear(&mut self);

    /// Whether this sink feeds a live stylesheet.
    fn is_live(&self) -> bool;
}

/// A sink for server-like contexts: every write is a silent no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StyleSink for NullSink {
    fn append(&mut self, _css: &str) {}

    fn text(&self) -> String {
        String::new()
    }

    fn clear(&mut self) {}

    fn is_live(&self) -> bool {
        false
    }
}

/// The stylesheet resource behind a [`LiveSink`].
#[derive(Debug, Default)]
struct StyleElement {
    text: String,
}

/// A sink backed by a lazily created stylesheet resource.
///
/// The resource is created on the first append and reused afterwards. Clones
/// share the same resource, so a renderer can keep a handle while the
/// registry owns the sink.
///
/// # Example
///
/// ```
/// use stylekit::sink::{LiveSink, StyleSink};
///
/// let mut sink = LiveSink::new();
/// let handle = sink.clone();
/// assert!(!handle.is_created());
///
/// sink.append(":root { }");
/// assert!(handle.is_created());
/// assert_eq!(handle.text(), ":root { }");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LiveSink {
    element: Arc<Mutex<Option<StyleElement>>>,
}

impl LiveSink {
    /// Create a sink with no backing resource yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the backing resource exists.
    pub fn is_created(&self) -> bool {
        self.element.lock().is_some()
    }
}

impl StyleSink for LiveSink {
    fn append(&mut self, css: &str) {
        let mut element = self.element.lock();
        let element = element.get_or_insert_with(|| {
            tracing::debug!(target: targets::SINK, "created style element");
            StyleElement::default()
        });
        element.text.push_str(css);
        tracing::trace!(target: targets::SINK, bytes = css.len(), "appended css");
    }

    fn text(&self) -> String {
        self.element
            .lock()
            .as_ref()
            .map(|e| e.text.clone())
            .unwrap_or_default()
    }

    fn clear(&mut self) {
        if let Some(element) = self.element.lock().as_mut() {
            element.text.clear();
        }
    }

    fn is_live(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_discards_writes() {
        let mut sink = NullSink;
        sink.append("a { }");
        assert_eq!(sink.text(), "");
        assert!(!sink.is_live());
    }

    #[test]
    fn live_sink_appends() {
        let mut sink = LiveSink::new();
        sink.append("a");
        sink.append("b");
        assert_eq!(sink.text(), "ab");
    }

    #[test]
    fn live_sink_is_created_lazily_and_survives_clear() {
        let mut sink = LiveSink::new();
        assert!(!sink.is_created());
        assert_eq!(sink.text(), "");

        sink.append("x");
        sink.clear();
        assert!(sink.is_created());
        assert_eq!(sink.text(), "");
    }
}
