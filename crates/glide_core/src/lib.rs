//! Glide Core
//!
//! Foundational types shared by the Glide smooth-scrolling crates:
//!
//! - **Geometry**: `Point`, `Size` and `Rect` in logical pixels
//! - **Color**: linear RGBA colors with alpha scaling
//! - **Surfaces**: the contract a host GUI implements so its scrollable
//!   windows can be animated (`ScrollSurface`, `SurfaceGeometry`, `SurfaceId`)
//!
//! # Example
//!
//! ```rust
//! use glide_core::{Rect, SurfaceId};
//!
//! let id = SurfaceId::from_name("Scroll Tester");
//! assert_eq!(id, SurfaceId::from_name("Scroll Tester"));
//!
//! let track = Rect::new(386.0, 20.0, 14.0, 280.0);
//! assert_eq!(track.bottom(), 300.0);
//! ```

pub mod color;
pub mod geometry;
pub mod surface;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use surface::{ScrollSurface, SurfaceGeometry, SurfaceId};
