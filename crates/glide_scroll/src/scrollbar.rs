//! Animated scrollbar
//!
//! The bar is recomputed from scratch every frame: layout is a pure function
//! of geometry, scroll position and overscroll, and only the thumb position
//! and fade are carried between frames (in [`SmoothScrollState`]).

use glide_core::{Color, Point, Rect, SurfaceGeometry};
use glide_paint::DrawSurface;

use crate::config::{ScrollConfig, ScrollbarConfig};
use crate::state::SmoothScrollState;

/// Thumb length for a track, before any overscroll squash.
///
/// `viewport / content` is clamped to `[min_normalized_size, 1]`, scaled to
/// the track, floored at `min_thumb_size` and never longer than the track.
pub fn thumb_length(
    viewport_height: f32,
    content_height: f32,
    track_height: f32,
    config: &ScrollbarConfig,
) -> f32 {
    if !(track_height > 0.0) {
        return 0.0;
    }
    let normalized = if content_height > 0.0 {
        (viewport_height / content_height).clamp(config.min_normalized_size, 1.0)
    } else {
        1.0
    };
    (track_height * normalized)
        .max(config.min_thumb_size)
        .min(track_height)
}

/// Shrink the thumb in proportion to the visible overscroll.
///
/// Never shorter than half the minimum thumb size, never longer than `length`.
pub fn squashed_thumb_length(
    length: f32,
    overscroll_visual: f32,
    max_overscroll: f32,
    config: &ScrollbarConfig,
) -> f32 {
    if overscroll_visual == 0.0 || !(max_overscroll > 0.0) {
        return length;
    }
    let stretch = (overscroll_visual.abs() / max_overscroll).min(1.0);
    (length * (1.0 - config.squash * stretch))
        .max(config.min_thumb_size * 0.5)
        .min(length)
}

/// Where the scrollbar wants to be this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarLayout {
    /// Track rect along the right edge of the surface
    pub track: Rect,
    /// Thumb length after squash
    pub thumb_length: f32,
    /// Target thumb offset from the track top
    pub target_offset: f32,
}

impl ScrollbarLayout {
    /// Lay out the bar for a surface, or `None` if there is nothing to draw.
    pub fn compute(
        geometry: &SurfaceGeometry,
        offset: f32,
        max_offset: f32,
        state: &SmoothScrollState,
        config: &ScrollConfig,
    ) -> Option<Self> {
        if !(max_offset > 0.0) {
            return None;
        }
        let bar = &config.scrollbar;
        let inner = geometry.inner_rect;
        let track = Rect::new(
            geometry.bounds.right() - bar.width,
            inner.top(),
            bar.width,
            inner.height(),
        );
        if !(track.height() > 0.0) {
            return None;
        }

        let length = thumb_length(
            geometry.viewport_height(),
            geometry.content_height(),
            track.height(),
            bar,
        );
        let length = squashed_thumb_length(
            length,
            state.overscroll_visual,
            config.max_overscroll,
            bar,
        );

        let travel = (track.height() - length).max(0.0);
        let ratio = (offset / max_offset).clamp(0.0, 1.0);
        // Lead into the bounce: top overscroll pulls the thumb up
        let target_offset =
            (ratio * travel - state.overscroll_visual * bar.overscroll_lead).clamp(0.0, travel);

        Some(Self {
            track,
            thumb_length: length,
            target_offset,
        })
    }

    /// Thumb rect at the animated offset, kept inside the track.
    pub fn thumb_rect(&self, grab_anim: f32, config: &ScrollbarConfig) -> Rect {
        let padding = config.thumb_padding.min(self.track.width() * 0.5);
        Rect::new(
            self.track.x() + padding,
            self.track.y() + grab_anim,
            self.track.width() - padding * 2.0,
            self.thumb_length,
        )
        .clamp_y_to(&self.track)
    }

    /// Emit the track, then the thumb on top of it.
    pub fn paint<D>(
        &self,
        state: &SmoothScrollState,
        pointer: Option<Point>,
        config: &ScrollbarConfig,
        draw: &mut D,
    ) where
        D: DrawSurface + ?Sized,
    {
        let (track_color, thumb_color) = self.colors(state, pointer, config);
        draw.fill_rounded_rect(self.track, track_color, config.track_rounding);
        draw.fill_rounded_rect(
            self.thumb_rect(state.grab_anim, config),
            thumb_color,
            config.thumb_rounding,
        );
    }

    /// Track and thumb colors for the current fade and hover.
    pub fn colors(
        &self,
        state: &SmoothScrollState,
        pointer: Option<Point>,
        config: &ScrollbarConfig,
    ) -> (Color, Color) {
        let hovered = pointer.is_some_and(|p| self.track.contains(p));
        let hover_factor = if hovered {
            config.hover_alpha
        } else {
            config.idle_alpha
        };
        (
            config
                .track_color
                .scale_alpha(state.alpha * config.track_alpha),
            config.thumb_color.scale_alpha(state.alpha * hover_factor),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::Size;
    use glide_paint::{PaintCommand, PaintContext};

    fn geometry(content_height: f32) -> SurfaceGeometry {
        SurfaceGeometry {
            bounds: Rect::new(100.0, 50.0, 400.0, 620.0),
            inner_rect: Rect::new(100.0, 70.0, 400.0, 600.0),
            content_size: Size::new(400.0, content_height),
        }
    }

    #[test]
    fn test_thumb_length_ratio() {
        let config = ScrollbarConfig::default();
        let length = thumb_length(300.0, 1500.0, 600.0, &config);
        assert!((length - 120.0).abs() < 1e-3, "got {length}");
    }

    #[test]
    fn test_thumb_length_floors() {
        let config = ScrollbarConfig::default();
        // 0.01 clamps up to the 0.05 normalized floor: 0.05 * 600 = 30
        let length = thumb_length(10.0, 1000.0, 600.0, &config);
        assert!((length - 30.0).abs() < 1e-3, "got {length}");

        // normalized floor gives 5px, pixel floor lifts it to 12
        let length = thumb_length(10.0, 1000.0, 100.0, &config);
        assert_eq!(length, 12.0);

        // never longer than the track
        assert_eq!(thumb_length(10.0, 1000.0, 8.0, &config), 8.0);
        assert_eq!(thumb_length(300.0, 0.0, 600.0, &config), 600.0);
        assert_eq!(thumb_length(300.0, 1500.0, 0.0, &config), 0.0);
    }

    #[test]
    fn test_squash() {
        let config = ScrollbarConfig::default();
        assert_eq!(squashed_thumb_length(100.0, 0.0, 60.0, &config), 100.0);

        let squashed = squashed_thumb_length(100.0, 60.0, 60.0, &config);
        assert!((squashed - 65.0).abs() < 1e-3);
        assert_eq!(
            squashed_thumb_length(100.0, -30.0, 60.0, &config),
            squashed_thumb_length(100.0, 30.0, 60.0, &config),
            "squash depends on magnitude only"
        );

        // floored at half the minimum thumb size
        assert_eq!(squashed_thumb_length(7.0, 60.0, 60.0, &config), 6.0);
    }

    #[test]
    fn test_layout_track_on_right_edge() {
        let config = ScrollConfig::default();
        let layout = ScrollbarLayout::compute(
            &geometry(3000.0),
            0.0,
            2400.0,
            &SmoothScrollState::default(),
            &config,
        )
        .expect("scrollable surface should lay out");

        assert_eq!(layout.track.right(), 500.0);
        assert_eq!(layout.track.width(), config.scrollbar.width);
        assert_eq!(layout.track.top(), 70.0);
        assert_eq!(layout.track.height(), 600.0);
        assert_eq!(layout.target_offset, 0.0);
    }

    #[test]
    fn test_layout_target_tracks_ratio() {
        let config = ScrollConfig::default();
        let state = SmoothScrollState::default();
        let layout =
            ScrollbarLayout::compute(&geometry(3000.0), 1200.0, 2400.0, &state, &config).unwrap();
        let travel = 600.0 - layout.thumb_length;
        assert!((layout.target_offset - travel * 0.5).abs() < 1e-3);

        let bottom =
            ScrollbarLayout::compute(&geometry(3000.0), 2400.0, 2400.0, &state, &config).unwrap();
        assert!((bottom.target_offset - travel).abs() < 1e-3);
    }

    #[test]
    fn test_layout_leads_into_bottom_bounce() {
        let config = ScrollConfig::default();
        let resting = SmoothScrollState::default();
        let bouncing = SmoothScrollState {
            overscroll_target: -40.0,
            overscroll_visual: -40.0,
            ..Default::default()
        };

        let mid_rest =
            ScrollbarLayout::compute(&geometry(3000.0), 1200.0, 2400.0, &resting, &config).unwrap();
        let mid_bounce =
            ScrollbarLayout::compute(&geometry(3000.0), 1200.0, 2400.0, &bouncing, &config)
                .unwrap();
        assert!(mid_bounce.thumb_length < mid_rest.thumb_length);
        assert!(
            mid_bounce.target_offset > mid_rest.target_offset,
            "bottom overscroll should push the thumb down"
        );

        let travel = 600.0 - mid_bounce.thumb_length;
        let end =
            ScrollbarLayout::compute(&geometry(3000.0), 2400.0, 2400.0, &bouncing, &config)
                .unwrap();
        assert!(end.target_offset <= travel + 1e-3);
    }

    #[test]
    fn test_layout_none_when_not_scrollable() {
        let config = ScrollConfig::default();
        let state = SmoothScrollState::default();
        assert!(ScrollbarLayout::compute(&geometry(600.0), 0.0, 0.0, &state, &config).is_none());

        let flat = SurfaceGeometry {
            inner_rect: Rect::new(100.0, 70.0, 400.0, 0.0),
            ..geometry(3000.0)
        };
        assert!(ScrollbarLayout::compute(&flat, 0.0, 100.0, &state, &config).is_none());
    }

    #[test]
    fn test_thumb_rect_clamped_to_track() {
        let config = ScrollConfig::default();
        let layout = ScrollbarLayout::compute(
            &geometry(3000.0),
            0.0,
            2400.0,
            &SmoothScrollState::default(),
            &config,
        )
        .unwrap();

        let overshoot = layout.thumb_rect(10_000.0, &config.scrollbar);
        assert!(overshoot.bottom() <= layout.track.bottom());
        assert!(overshoot.top() >= layout.track.top());

        let inside = layout.thumb_rect(0.0, &config.scrollbar);
        assert_eq!(inside.x(), layout.track.x() + config.scrollbar.thumb_padding);
        assert_eq!(
            inside.width(),
            config.scrollbar.width - 2.0 * config.scrollbar.thumb_padding
        );
    }

    #[test]
    fn test_paint_order_and_hover_colors() {
        let config = ScrollConfig::default();
        let state = SmoothScrollState {
            alpha: 1.0,
            ..Default::default()
        };
        let layout =
            ScrollbarLayout::compute(&geometry(3000.0), 0.0, 2400.0, &state, &config).unwrap();

        let mut idle = PaintContext::new();
        layout.paint(&state, None, &config.scrollbar, &mut idle);
        assert_eq!(idle.len(), 2);
        let PaintCommand::FillRoundedRect {
            rect: track,
            color: track_color,
        } = &idle.commands()[0];
        assert_eq!(track.rect, layout.track);
        assert!((track_color.a - 0.53 * 0.4).abs() < 1e-4);
        assert!((idle.commands()[1].color().a - 0.6).abs() < 1e-6);

        let mut hovered = PaintContext::new();
        layout.paint(&state, Some(layout.track.center()), &config.scrollbar, &mut hovered);
        assert_eq!(hovered.commands()[1].color().a, 1.0);
    }

    #[test]
    fn test_faded_out_bar_is_transparent() {
        let config = ScrollConfig::default();
        let state = SmoothScrollState::default();
        let layout =
            ScrollbarLayout::compute(&geometry(3000.0), 0.0, 2400.0, &state, &config).unwrap();
        let (track, thumb) = layout.colors(&state, None, &config.scrollbar);
        assert_eq!(track.a, 0.0);
        assert_eq!(thumb.a, 0.0);
    }
}
