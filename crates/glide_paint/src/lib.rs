//! Glide Paint API
//!
//! The write-only drawing side of the host contract. The scrollbar renderer
//! talks to a [`DrawSurface`]; hosts implement it over their own draw lists,
//! and [`PaintContext`] records commands for tests and headless runs.

pub mod context;
pub mod primitives;

pub use context::{DrawSurface, PaintCommand, PaintContext};
pub use primitives::{CornerRadius, RoundedRect};
