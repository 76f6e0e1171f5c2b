//! Viewport resize notifications.
//!
//! A browser-like host hands the registry a [`ResizeSource`]. The registry
//! subscribes to it at most once, the first time it writes custom properties,
//! and drains the resulting channel when the host calls
//! [`StyleRegistry::process_resize_events`](crate::resolve::StyleRegistry::process_resize_events)
//! from its event loop.
//!
//! # Example
//!
//! ```
//! use stylekit::prelude::*;
//!
//! let (source, emitter) = ChannelResizeSource::new();
//! let mut registry = StyleRegistry::browser(LiveSink::new(), source);
//! registry.responsive(&StyleRequest::new().set("color", "red"));
//!
//! emitter.emit(800, 600);
//! assert_eq!(registry.process_resize_events(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TrySendError, unbounded};
use parking_lot::Mutex;

use crate::logging::targets;

/// A viewport size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    /// New viewport width in pixels.
    pub width: u32,
    /// New viewport height in pixels.
    pub height: u32,
}

/// Something that can deliver viewport resize events.
pub trait ResizeSource: Send + fmt::Debug {
    /// Attach a listener and return the channel its events arrive on.
    ///
    /// Only events reported after this call are delivered.
    fn subscribe(&mut self) -> Receiver<ResizeEvent>;
}

/// The sender of the attached listener, shared with every emitter.
type ListenerSlot = Arc<Mutex<Option<Sender<ResizeEvent>>>>;

/// A [`ResizeSource`] fed through a [`ResizeEmitter`].
///
/// Each subscription opens a fresh channel and replaces the previous
/// listener. Events reported while nothing is subscribed are dropped.
#[derive(Debug)]
pub struct ChannelResizeSource {
    listener: ListenerSlot,
    subscriptions: usize,
}

impl ChannelResizeSource {
    /// Create a source and the emitter the host uses to feed it.
    pub fn new() -> (Self, ResizeEmitter) {
        let listener = ListenerSlot::default();
        (
            Self {
                listener: listener.clone(),
                subscriptions: 0,
            },
            ResizeEmitter { listener },
        )
    }

    /// How many listeners have been attached.
    pub fn subscriptions(&self) -> usize {
        self.subscriptions
    }
}

impl ResizeSource for ChannelResizeSource {
    fn subscribe(&mut self) -> Receiver<ResizeEvent> {
        let (tx, rx) = unbounded();
        *self.listener.lock() = Some(tx);
        self.subscriptions += 1;
        rx
    }
}

/// Host-side handle that reports viewport size changes.
#[derive(Debug, Clone)]
pub struct ResizeEmitter {
    listener: ListenerSlot,
}

impl ResizeEmitter {
    /// Report a new viewport size.
    ///
    /// Returns `false` when the event was dropped: no listener is attached
    /// yet, or the attached one has gone away.
    pub fn emit(&self, width: u32, height: u32) -> bool {
        let mut listener = self.listener.lock();
        let Some(tx) = listener.as_ref() else {
            tracing::trace!(target: targets::RESIZE, width, height, "no resize listener attached");
            return false;
        };

        match tx.try_send(ResizeEvent { width, height }) {
            Ok(()) => true,
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!(target: targets::RESIZE, "resize listener is gone");
                *listener = None;
                false
            }
            Err(TrySendError::Full(_)) => false,
        }
    }

    /// Whether a listener is currently attached.
    pub fn is_attached(&self) -> bool {
        self.listener.lock().is_some()
    }
}
