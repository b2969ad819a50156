//! Per-frame entry points for the host

use glide_core::{Point, ScrollSurface, SurfaceId};
use glide_paint::DrawSurface;

use crate::config::ScrollConfig;
use crate::physics::update_scroll;
use crate::scrollbar::ScrollbarLayout;
use crate::state::{ScrollStates, SmoothScrollState};

/// Host input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Vertical wheel delta in notches; positive scrolls toward the top
    pub wheel_delta: f32,
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Pointer position, if the pointer is over the host window
    pub pointer: Option<Point>,
}

/// Smooth scrolling for any number of host surfaces.
///
/// Call [`update`](Self::update) then [`render`](Self::render) once per
/// surface per frame, after the surface's own layout pass (or
/// [`frame`](Self::frame), which does both in that order).
///
/// # Example
///
/// ```rust
/// use glide_core::{Rect, ScrollSurface, Size, SurfaceGeometry, SurfaceId};
/// use glide_paint::PaintContext;
/// use glide_scroll::{FrameInput, SmoothScroller};
///
/// struct Panel {
///     offset: f32,
/// }
///
/// impl ScrollSurface for Panel {
///     fn id(&self) -> SurfaceId {
///         SurfaceId::from_name("panel")
///     }
///     fn scroll_offset(&self) -> f32 {
///         self.offset
///     }
///     fn set_scroll_offset(&mut self, offset: f32) {
///         self.offset = offset;
///     }
///     fn max_scroll_offset(&self) -> f32 {
///         1200.0
///     }
///     fn geometry(&self) -> SurfaceGeometry {
///         SurfaceGeometry {
///             bounds: Rect::new(0.0, 0.0, 400.0, 320.0),
///             inner_rect: Rect::new(0.0, 20.0, 400.0, 300.0),
///             content_size: Size::new(400.0, 1500.0),
///         }
///     }
/// }
///
/// let mut scroller = SmoothScroller::default();
/// let mut panel = Panel { offset: 0.0 };
/// let mut paint = PaintContext::new();
///
/// let input = FrameInput {
///     wheel_delta: -1.0,
///     delta_time: 1.0 / 60.0,
///     pointer: None,
/// };
/// scroller.frame(&mut panel, &input, &mut paint);
///
/// assert!(panel.offset > 0.0);
/// assert_eq!(paint.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SmoothScroller {
    config: ScrollConfig,
    states: ScrollStates,
}

impl SmoothScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            states: ScrollStates::new(),
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Swap tunables at runtime; existing state is re-bounded on the next update.
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    pub fn states(&self) -> &ScrollStates {
        &self.states
    }

    pub fn states_mut(&mut self) -> &mut ScrollStates {
        &mut self.states
    }

    /// Current state of a surface (zero state if never touched).
    pub fn state(&self, id: SurfaceId) -> SmoothScrollState {
        self.states.get(id)
    }

    pub fn is_animating(&self, id: SurfaceId) -> bool {
        self.states.peek(id).is_some_and(SmoothScrollState::is_animating)
    }

    /// Run the physics for one frame and write the clamped offset back.
    ///
    /// Returns true while momentum or a bounce is still in flight.
    pub fn update<S>(&mut self, surface: &mut S, wheel_delta: f32, dt: f32) -> bool
    where
        S: ScrollSurface + ?Sized,
    {
        if !surface.is_scrollable() {
            return false;
        }
        let state = self.states.get_or_insert(surface.id());
        update_scroll(state, surface, wheel_delta, dt, &self.config)
    }

    /// Lay out, animate and paint the scrollbar.
    ///
    /// Besides drawing, this advances the thumb position and fade-in by `dt`.
    /// Returns the layout that was painted, or `None` for surfaces that
    /// cannot scroll.
    pub fn render<S, D>(
        &mut self,
        surface: &S,
        dt: f32,
        pointer: Option<Point>,
        draw: &mut D,
    ) -> Option<ScrollbarLayout>
    where
        S: ScrollSurface + ?Sized,
        D: DrawSurface + ?Sized,
    {
        let layout = self.tick_scrollbar(surface, dt)?;
        let state = self.states.get(surface.id());
        layout.paint(&state, pointer, &self.config.scrollbar, draw);
        Some(layout)
    }

    /// Advance the scrollbar animation without painting.
    ///
    /// Hosts that skip drawing a surface for a frame call this instead of
    /// [`render`](Self::render) so the thumb does not stall.
    pub fn tick_scrollbar<S>(&mut self, surface: &S, dt: f32) -> Option<ScrollbarLayout>
    where
        S: ScrollSurface + ?Sized,
    {
        let max_offset = surface.max_scroll_offset();
        if !(max_offset > 0.0) {
            return None;
        }
        let state = self.states.get_or_insert(surface.id());
        let layout = ScrollbarLayout::compute(
            &surface.geometry(),
            surface.scroll_offset(),
            max_offset,
            state,
            &self.config,
        )?;
        state.advance_scrollbar(layout.target_offset, dt, &self.config.scrollbar);
        Some(layout)
    }

    /// Update then render one surface for one frame.
    pub fn frame<S, D>(
        &mut self,
        surface: &mut S,
        input: &FrameInput,
        draw: &mut D,
    ) -> Option<ScrollbarLayout>
    where
        S: ScrollSurface + ?Sized,
        D: DrawSurface + ?Sized,
    {
        self.update(surface, input.wheel_delta, input.delta_time);
        self.render(surface, input.delta_time, input.pointer, draw)
    }
}
