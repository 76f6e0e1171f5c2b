//! Transitions and shadows.

mod shadow;
mod transition;

pub use shadow::{
    DEFAULT_SHADOW_COLOR, Shadow, ShadowOffset, ShadowSize, box_shadow, text_shadow,
};
pub use transition::{LONG_TIMING_MS, TimingFunction, multiple_transitions, transition};
