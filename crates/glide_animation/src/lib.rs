//! Glide Animation
//!
//! Every animated scalar in Glide (scroll velocity, overscroll, scrollbar
//! thumb position and opacity) moves with the same first-order low-pass
//! filter:
//!
//! ```text
//! next = current + (target - current) * (1 - e^(-rate * dt))
//! ```
//!
//! It is framerate independent, converges faster for larger `rate`, and is a
//! no-op at `dt = 0`.
//!
//! # Example
//!
//! ```rust
//! use glide_animation::ease_out;
//!
//! let mut alpha = 0.0;
//! for _ in 0..60 {
//!     alpha = ease_out(alpha, 1.0, 8.0, 1.0 / 60.0);
//! }
//! assert!(alpha > 0.99);
//! ```

pub mod easing;

pub use easing::{ease_out, snap_to, snap_to_zero};
