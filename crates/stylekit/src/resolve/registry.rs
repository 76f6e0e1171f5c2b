//! Custom-property mode.
//!
//! A [`StyleRegistry`] owns everything dynamic resolution needs: the property
//! table, the id counter, the keyframe store, the output sink and the resize
//! source. Hosts construct one per context (per request when rendering on a
//! server, once per window in an interactive host); [`crate::global`] wraps a
//! default instance for code that prefers free functions.
//!
//! # Example
//!
//! ```
//! use stylekit::prelude::*;
//!
//! let mut registry = StyleRegistry::browser(LiveSink::new(), ChannelResizeSource::new().0);
//! let style = registry.responsive(
//!     &StyleRequest::new().set("color", "red").set("fontSize", "16px"),
//! );
//!
//! assert_eq!(style.str_value("color"), Some("var(--css-in-js-utils-0)"));
//! assert_eq!(
//!     registry.sink_text(),
//!     ":root { --css-in-js-utils-0: red;--css-in-js-utils-1: 16px; }"
//! );
//! ```

use crossbeam_channel::{Receiver, TryRecvError};

use super::stringify::stringify;
use super::table::PropertyTable;
use crate::animation::{Keyframes, keyframes_css};
use crate::environment::{ResizeEvent, ResizeSource};
use crate::logging::targets;
use crate::sink::{NullSink, StyleSink};
use crate::types::{StyleObject, StyleRequest};

/// Default prefix for synthesized custom-property ids.
pub const DEFAULT_ID_PREFIX: &str = "--css-in-js-utils-";

/// Registry settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Prefix of every synthesized id; the counter value is appended.
    pub id_prefix: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Builder: set the id prefix.
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }
}

/// The context object behind custom-property mode.
#[derive(Debug)]
pub struct StyleRegistry {
    config: RegistryConfig,
    table: PropertyTable,
    counter: usize,
    keyframes: Vec<String>,
    sink: Box<dyn StyleSink>,
    resize: Option<Box<dyn ResizeSource>>,
    resize_rx: Option<Receiver<ResizeEvent>>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::server()
    }
}

impl StyleRegistry {
    /// A server-like registry: nothing is written anywhere and no resize
    /// listener is ever attached. Styles are read back with
    /// [`get_responsive_styles`](Self::get_responsive_styles).
    pub fn server() -> Self {
        Self::with_config(RegistryConfig::default(), Box::new(NullSink), None)
    }

    /// A browser-like registry writing into `sink` and refreshing on
    /// events from `resize`.
    pub fn browser(
        sink: impl StyleSink + 'static,
        resize: impl ResizeSource + 'static,
    ) -> Self {
        Self::with_config(
            RegistryConfig::default(),
            Box::new(sink),
            Some(Box::new(resize)),
        )
    }

    /// Create a registry with every collaborator given explicitly.
    ///
    /// The registry is server-like whenever the sink is not live.
    pub fn with_config(
        config: RegistryConfig,
        sink: Box<dyn StyleSink>,
        resize: Option<Box<dyn ResizeSource>>,
    ) -> Self {
        tracing::debug!(
            target: targets::REGISTRY,
            live = sink.is_live(),
            prefix = %config.id_prefix,
            "created style registry"
        );
        Self {
            config,
            table: PropertyTable::new(),
            counter: 0,
            keyframes: vec![],
            sink,
            resize,
            resize_rx: None,
        }
    }

    /// The registry settings.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Whether this registry runs server-like.
    pub fn is_server(&self) -> bool {
        !self.sink.is_live()
    }

    /// The property table.
    pub fn property_table(&self) -> &PropertyTable {
        &self.table
    }

    /// Whether the resize listener has been attached.
    pub fn is_listening(&self) -> bool {
        self.resize_rx.is_some()
    }

    /// Resolve a request in custom-property mode.
    ///
    /// Every property gets a fresh id, even if the same name was registered
    /// before; the result maps each property to `var(<id>)`. In a
    /// browser-like registry the whole table is regenerated into the sink
    /// and the resize listener is attached on first use. An empty request
    /// does nothing.
    pub fn responsive(&mut self, request: &StyleRequest) -> StyleObject {
        let mut result = StyleObject::new();
        if request.is_empty() {
            return result;
        }

        for (property, value) in request.iter() {
            let id = self.next_id();
            let values = stringify(value).into_map();
            tracing::debug!(
                target: targets::REGISTRY,
                property,
                %id,
                breakpoints = values.len(),
                "registered custom property"
            );
            self.table.insert(id.clone(), values);
            result.insert(property, format!("var({id})"));
        }

        if !self.is_server() {
            self.write_table();
            self.attach_resize_listener();
        }

        result
    }

    /// Regenerate the `:root { ... }` text for the whole table.
    ///
    /// Works in any environment.
    pub fn get_responsive_styles(&self) -> String {
        self.table.to_css()
    }

    /// Empty the table, restart ids at 0 and clear the sink text.
    ///
    /// The resize listener and the sink's backing resource are kept.
    pub fn clear_styles(&mut self) {
        tracing::debug!(
            target: targets::REGISTRY,
            entries = self.table.len(),
            "cleared custom properties"
        );
        self.table.clear();
        self.counter = 0;
        self.sink.clear();
    }

    /// Register an `@keyframes` rule and return its CSS.
    pub fn keyframe(&mut self, name: &str, frames: &Keyframes) -> String {
        let css = keyframes_css(name, frames);
        tracing::debug!(target: targets::REGISTRY, name, "registered keyframes");
        if !self.is_server() {
            self.sink.append(&css);
        }
        self.keyframes.push(css.clone());
        css
    }

    /// Every registered `@keyframes` rule, one per line.
    pub fn get_all_keyframes(&self) -> String {
        self.keyframes.join("\n")
    }

    /// Forget every registered `@keyframes` rule.
    pub fn clear_keyframes(&mut self) {
        self.keyframes.clear();
    }

    /// Keyframes followed by the custom-property block.
    pub fn get_all_styles(&self) -> String {
        format!(
            "{}\n{}",
            self.get_all_keyframes(),
            self.get_responsive_styles()
        )
    }

    /// The text written to the sink so far.
    pub fn sink_text(&self) -> String {
        self.sink.text()
    }

    /// Handle pending resize events.
    ///
    /// Each event appends a full regeneration of the table to the sink.
    /// Returns how many events were handled. Call this from the host's event
    /// loop.
    pub fn process_resize_events(&mut self) -> usize {
        let Some(rx) = self.resize_rx.clone() else {
            return 0;
        };

        let mut handled = 0;
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    tracing::trace!(
                        target: targets::RESIZE,
                        width = event.width,
                        height = event.height,
                        "viewport resized"
                    );
                    self.write_table();
                    handled += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!(target: targets::RESIZE, "resize source disconnected");
                    self.resize_rx = None;
                    break;
                }
            }
        }
        handled
    }

    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.config.id_prefix, self.counter);
        self.counter += 1;
        id
    }

    fn write_table(&mut self) {
        let css = self.table.to_css();
        self.sink.append(&css);
    }

    fn attach_resize_listener(&mut self) {
        if self.resize_rx.is_some() {
            return;
        }
        if let Some(source) = self.resize.as_mut() {
            self.resize_rx = Some(source.subscribe());
            tracing::info!(target: targets::RESIZE, "attached resize listener");
        }
    }
}
