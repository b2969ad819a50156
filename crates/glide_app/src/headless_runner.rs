//! Scenario runner that drives the tester window frame by frame.

use anyhow::{bail, Result};
use glide_core::{Point, ScrollSurface, Size};
use glide_paint::PaintContext;
use glide_scroll::{FrameInput, ScrollConfig, SmoothScroller};

use crate::frame_stats::FrameStats;
use crate::headless_assert::{
    evaluate_assert_offset, evaluate_assert_overscroll, evaluate_assert_settled, AssertionResult,
    ScrollSnapshot,
};
use crate::headless_report::HeadlessReport;
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::window::TesterWindow;

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Simulated frame rate; every frame advances by exactly `1 / fps` seconds.
    pub fps: f32,
    /// Tester window size.
    pub window_size: Size,
    /// Log a [`FrameStats`] line for every frame.
    pub trace: bool,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            fps: 60.0,
            window_size: Size::new(1200.0, 1050.0),
            trace: false,
        }
    }
}

impl HeadlessRunConfig {
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps
    }

    fn validate(&self) -> Result<()> {
        if !(self.fps > 0.0 && self.fps.is_finite()) {
            bail!("headless fps must be a positive number, got {}", self.fps);
        }
        if !(self.window_size.width > 0.0 && self.window_size.height > 0.0) {
            bail!("headless window size must be non-zero");
        }
        Ok(())
    }
}

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON with the default scroll tuning and run config.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    run_loaded_scenario(&scenario, ScrollConfig::default(), HeadlessRunConfig::default())
}

/// Execute a pre-loaded scenario.
pub fn run_loaded_scenario(
    scenario: &HeadlessScenario,
    scroll_config: ScrollConfig,
    run_cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    run_cfg.validate()?;
    scroll_config.validate()?;

    let mut harness = Harness::new(scroll_config, run_cfg);
    tracing::debug!(
        "running {} steps at {} fps, max offset {:.1}",
        scenario.steps.len(),
        run_cfg.fps,
        harness.window.max_scroll_offset()
    );

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let (assertion, result) = match step {
            ScenarioStep::Wheel { delta, frames } => {
                harness.run_frames(*delta, *frames);
                continue;
            }
            ScenarioStep::Idle { frames } => {
                harness.run_frames(0.0, *frames);
                continue;
            }
            ScenarioStep::Pointer { x, y } => {
                harness.pointer = Some(Point::new(*x, *y));
                continue;
            }
            ScenarioStep::PointerLeave => {
                harness.pointer = None;
                continue;
            }
            ScenarioStep::Resize { lines } => {
                harness.window.set_line_count(*lines);
                continue;
            }
            ScenarioStep::AssertOffset { min, max } => (
                "assert_offset",
                evaluate_assert_offset(*min, *max, &harness.snapshot()),
            ),
            ScenarioStep::AssertSettled => (
                "assert_settled",
                evaluate_assert_settled(&harness.snapshot()),
            ),
            ScenarioStep::AssertOverscroll { min, max } => (
                "assert_overscroll",
                evaluate_assert_overscroll(*min, *max, &harness.snapshot()),
            ),
        };

        if let AssertionResult::Failed { code, message } = result {
            tracing::debug!("step {step_index} failed {assertion} ({code}): {message}");
            let report = HeadlessReport::failed(
                assertion,
                step_index,
                code,
                message,
                harness.elapsed_frames,
                harness.elapsed_ms(),
                harness.snapshot(),
            )
            .with_paint_commands(harness.paint.len());
            return Ok(RunOutcome::Failed { report });
        }
    }

    let report = HeadlessReport::passed(
        harness.elapsed_frames,
        harness.elapsed_ms(),
        harness.snapshot(),
    )
    .with_paint_commands(harness.paint.len());
    Ok(RunOutcome::Passed { report })
}

struct Harness {
    scroller: SmoothScroller,
    window: TesterWindow,
    paint: PaintContext,
    pointer: Option<Point>,
    run_cfg: HeadlessRunConfig,
    elapsed_frames: u64,
}

impl Harness {
    fn new(scroll_config: ScrollConfig, run_cfg: HeadlessRunConfig) -> Self {
        Self {
            scroller: SmoothScroller::new(scroll_config),
            window: TesterWindow::new(run_cfg.window_size),
            paint: PaintContext::new(),
            pointer: None,
            run_cfg,
            elapsed_frames: 0,
        }
    }

    fn run_frames(&mut self, wheel_delta: f32, frames: u32) {
        let input = FrameInput {
            wheel_delta,
            delta_time: self.run_cfg.frame_dt(),
            pointer: self.pointer,
        };
        for _ in 0..frames {
            self.paint.clear();
            self.scroller.frame(&mut self.window, &input, &mut self.paint);
            self.elapsed_frames = self.elapsed_frames.saturating_add(1);

            if self.run_cfg.trace {
                let stats = FrameStats::new(self.elapsed_frames, &self.snapshot(), self.run_cfg.fps);
                tracing::info!("{stats}");
            }
        }
    }

    fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot::capture(&self.window, &self.scroller.state(self.window.id()))
    }

    fn elapsed_ms(&self) -> u64 {
        (self.elapsed_frames as f64 * 1000.0 / self.run_cfg.fps as f64).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_fps() {
        let scenario = HeadlessScenario { steps: Vec::new() };
        let cfg = HeadlessRunConfig {
            fps: 0.0,
            ..Default::default()
        };
        assert!(run_loaded_scenario(&scenario, ScrollConfig::default(), cfg).is_err());
    }

    #[test]
    fn test_rejects_invalid_scroll_config() {
        let scenario = HeadlessScenario { steps: Vec::new() };
        let config = ScrollConfig {
            velocity_decay: -1.0,
            ..Default::default()
        };
        assert!(run_loaded_scenario(&scenario, config, HeadlessRunConfig::default()).is_err());
    }

    #[test]
    fn test_elapsed_time_follows_fps() {
        let outcome = run_loaded_scenario(
            &HeadlessScenario {
                steps: vec![ScenarioStep::Idle { frames: 30 }],
            },
            ScrollConfig::default(),
            HeadlessRunConfig {
                fps: 120.0,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(outcome.report().elapsed_frames, 30);
        assert_eq!(outcome.report().elapsed_ms, 250);
        assert_eq!(outcome.report().paint_commands, 2);
    }
}
