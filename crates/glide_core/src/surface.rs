//! Host scroll-surface contract
//!
//! Glide never owns windows. The host GUI keeps its own window objects and
//! exposes each scrollable one through [`ScrollSurface`]: a stable identity,
//! read/write access to the vertical scroll offset, the read-only scroll limit,
//! and the geometry the scrollbar is laid out against.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::geometry::{Rect, Size};

/// Stable identity of a scrollable surface.
///
/// Glide keys its per-surface animation state by this id, so the host must
/// hand back the same id for the same window every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl SurfaceId {
    /// Derive an id from a window label.
    ///
    /// The hash is stable for the lifetime of the process, which is all the
    /// state store requires.
    pub fn from_name(name: &str) -> Self {
        let mut hasher = FxHasher::default();
        name.hash(&mut hasher);
        Self(hasher.finish())
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Geometry of a scrollable surface for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceGeometry {
    /// Outer bounds of the window, title bar included.
    pub bounds: Rect,
    /// Visible content region (the viewport) in the same coordinate space.
    pub inner_rect: Rect,
    /// Full size of the scrolled content, padding included.
    pub content_size: Size,
}

impl SurfaceGeometry {
    pub fn viewport_height(&self) -> f32 {
        self.inner_rect.height()
    }

    pub fn content_height(&self) -> f32 {
        self.content_size.height
    }

    /// Scroll limit implied by this geometry (`content - viewport`, never negative).
    pub fn implied_max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height()).max(0.0)
    }
}

/// Read-modify-write access to a host window's vertical scroll.
///
/// Offsets follow the host convention: `0` is the top, `max_scroll_offset()`
/// is the bottom. Glide only ever writes offsets inside that range.
pub trait ScrollSurface {
    fn id(&self) -> SurfaceId;

    fn scroll_offset(&self) -> f32;

    fn set_scroll_offset(&mut self, offset: f32);

    /// Maximum scroll offset; `0` (or less) means the surface cannot scroll.
    fn max_scroll_offset(&self) -> f32;

    fn geometry(&self) -> SurfaceGeometry;

    fn is_scrollable(&self) -> bool {
        self.max_scroll_offset() > 0.0
    }
}
