//! Assertion helpers for headless scroll scenarios.

use glide_core::ScrollSurface;
use glide_scroll::SmoothScrollState;
use serde::{Deserialize, Serialize};

/// Observable scroll state after a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollSnapshot {
    pub offset: f32,
    pub max_offset: f32,
    pub velocity: f32,
    pub overscroll_target: f32,
    pub overscroll_visual: f32,
    pub thumb_offset: f32,
    pub scrollbar_alpha: f32,
}

impl ScrollSnapshot {
    pub fn capture<S>(surface: &S, state: &SmoothScrollState) -> Self
    where
        S: ScrollSurface + ?Sized,
    {
        Self {
            offset: surface.scroll_offset(),
            max_offset: surface.max_scroll_offset(),
            velocity: state.velocity,
            overscroll_target: state.overscroll_target,
            overscroll_visual: state.overscroll_visual,
            thumb_offset: state.grab_anim,
            scrollbar_alpha: state.alpha,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.velocity == 0.0 && self.overscroll_target == 0.0 && self.overscroll_visual == 0.0
    }
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

pub fn evaluate_assert_offset(min: f32, max: f32, snapshot: &ScrollSnapshot) -> AssertionResult {
    within("offset", snapshot.offset, min, max)
}

pub fn evaluate_assert_overscroll(
    min: f32,
    max: f32,
    snapshot: &ScrollSnapshot,
) -> AssertionResult {
    within("overscroll", snapshot.overscroll_target, min, max)
}

pub fn evaluate_assert_settled(snapshot: &ScrollSnapshot) -> AssertionResult {
    if snapshot.is_settled() {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "still_animating".to_string(),
            message: format!(
                "velocity {:.2}, overscroll {:.2}/{:.2}",
                snapshot.velocity, snapshot.overscroll_target, snapshot.overscroll_visual
            ),
        }
    }
}

fn within(what: &str, value: f32, min: f32, max: f32) -> AssertionResult {
    if value >= min && value <= max {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "out_of_range".to_string(),
            message: format!("{what}: expected {min:.2}..={max:.2}, got {value:.2}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_range_is_inclusive() {
        let snapshot = ScrollSnapshot {
            offset: 10.0,
            ..Default::default()
        };
        assert_eq!(
            evaluate_assert_offset(10.0, 10.0, &snapshot),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_offset(11.0, 20.0, &snapshot),
            AssertionResult::Failed { ref code, .. } if code == "out_of_range"
        ));
    }

    #[test]
    fn test_settled_requires_all_motion_zero() {
        let moving = ScrollSnapshot {
            overscroll_visual: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            evaluate_assert_settled(&moving),
            AssertionResult::Failed { .. }
        ));
        assert_eq!(
            evaluate_assert_settled(&ScrollSnapshot::default()),
            AssertionResult::Passed
        );
    }
}
