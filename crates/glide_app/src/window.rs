//! The "Scroll Tester" window: a fixed-size window listing numbered lines.

use glide_core::{Rect, ScrollSurface, Size, SurfaceGeometry, SurfaceId};

pub const TITLE: &str = "Scroll Tester";

const TITLE_BAR_HEIGHT: f32 = 19.0;
const WINDOW_PADDING: f32 = 8.0;
const LINE_HEIGHT: f32 = 17.0;
/// Stats lines plus the separator drawn above the list
const HEADER_LINES: usize = 6;
const DEFAULT_LINES: usize = 200;

/// Simulated host window with the same layout as an immediate-mode text list.
#[derive(Debug, Clone)]
pub struct TesterWindow {
    id: SurfaceId,
    bounds: Rect,
    line_count: usize,
    offset: f32,
}

impl TesterWindow {
    /// Window of `size` at the origin with the default 200 lines.
    pub fn new(size: Size) -> Self {
        Self {
            id: SurfaceId::from_name(TITLE),
            bounds: Rect::new(0.0, 0.0, size.width, size.height),
            line_count: DEFAULT_LINES,
            offset: 0.0,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Change the number of list lines. The scroll offset is left as is and
    /// gets re-clamped by the next scroll update.
    pub fn set_line_count(&mut self, lines: usize) {
        self.line_count = lines;
    }

    pub fn line_label(index: usize) -> String {
        format!("Tester {}", index + 1)
    }

    /// Indices of the list lines at least partially inside the viewport.
    pub fn visible_lines(&self) -> std::ops::Range<usize> {
        let viewport = self.inner_rect().height();
        let list_top = WINDOW_PADDING + HEADER_LINES as f32 * LINE_HEIGHT - self.offset;
        let first = ((-list_top) / LINE_HEIGHT).floor().max(0.0) as usize;
        let last = ((viewport - list_top) / LINE_HEIGHT).ceil().max(0.0) as usize;
        first.min(self.line_count)..last.min(self.line_count)
    }

    fn inner_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x(),
            self.bounds.y() + TITLE_BAR_HEIGHT,
            self.bounds.width(),
            (self.bounds.height() - TITLE_BAR_HEIGHT).max(0.0),
        )
    }

    fn content_height(&self) -> f32 {
        WINDOW_PADDING * 2.0 + (HEADER_LINES + self.line_count) as f32 * LINE_HEIGHT
    }
}

impl Default for TesterWindow {
    fn default() -> Self {
        Self::new(Size::new(1200.0, 1050.0))
    }
}

impl ScrollSurface for TesterWindow {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn max_scroll_offset(&self) -> f32 {
        self.geometry().implied_max_scroll()
    }

    fn geometry(&self) -> SurfaceGeometry {
        SurfaceGeometry {
            bounds: self.bounds,
            inner_rect: self.inner_rect(),
            content_size: Size::new(self.bounds.width(), self.content_height()),
        }
    }
}
