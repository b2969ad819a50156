//! Per-frame debug readout, the text the tester window shows above its list.

use std::fmt;

use crate::headless_assert::ScrollSnapshot;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub velocity: f32,
    pub overscroll: f32,
    pub current_scroll: f32,
    pub scroll_max: f32,
    pub fps: f32,
}

impl FrameStats {
    pub fn new(frame: u64, snapshot: &ScrollSnapshot, fps: f32) -> Self {
        Self {
            frame,
            velocity: snapshot.velocity,
            overscroll: snapshot.overscroll_target,
            current_scroll: snapshot.offset,
            scroll_max: snapshot.max_offset,
            fps,
        }
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} Velocity: {:.2} Overscroll: {:.2} Current Scroll: {:.2} Scroll Max: {:.2} FPS: {:.1}",
            self.frame, self.velocity, self.overscroll, self.current_scroll, self.scroll_max, self.fps
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let snapshot = ScrollSnapshot {
            offset: 12.5,
            max_offset: 2487.0,
            velocity: -40.0,
            overscroll_target: 0.0,
            ..Default::default()
        };
        let line = FrameStats::new(3, &snapshot, 60.0).to_string();
        assert_eq!(
            line,
            "#3 Velocity: -40.00 Overscroll: 0.00 Current Scroll: 12.50 Scroll Max: 2487.00 FPS: 60.0"
        );
    }
}
