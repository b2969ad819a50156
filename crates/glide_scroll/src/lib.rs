//! Glide smooth scrolling
//!
//! Inertial wheel scrolling with edge bounce and an animated scrollbar for
//! immediate-mode GUI windows. The host keeps ownership of its windows and
//! exposes them through [`glide_core::ScrollSurface`]; Glide keeps one small
//! animation record per surface in a [`ScrollStates`] store.
//!
//! # Features
//!
//! - **Momentum**: wheel notches add velocity that decays exponentially
//! - **Edge bounce**: pushing or flinging past an edge builds an overscroll
//!   that eases back; the real offset never leaves `[0, max]`
//! - **Animated scrollbar**: thumb eases to position, squashes and leads
//!   into a bounce, and fades in with hover feedback
//! - **Framerate independent**: every animated scalar uses the same
//!   exponential easing, so behavior does not depend on the frame rate
//!
//! # Frame order
//!
//! ```text
//! wheel + dt -> update (physics, writes offset) -> render (layout, animate, paint)
//! ```

mod error;

pub mod config;
pub mod physics;
pub mod scrollbar;
pub mod scroller;
pub mod state;

pub use config::{ScrollConfig, ScrollbarConfig};
pub use error::ConfigError;
pub use physics::{clamp_offset, update_scroll};
pub use scrollbar::{squashed_thumb_length, thumb_length, ScrollbarLayout};
pub use scroller::{FrameInput, SmoothScroller};
pub use state::{ScrollStates, SmoothScrollState};
