//! Scenario definition for headless scroll runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Sequence of scripted input and assertions.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid scenario {}", path.display()))
    }
}

fn one_frame() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Feed `delta` wheel notches on each of `frames` frames.
    Wheel {
        delta: f32,
        #[serde(default = "one_frame")]
        frames: u32,
    },
    /// Run frames with no wheel input.
    Idle { frames: u32 },
    /// Move the pointer; applies to every following frame.
    Pointer { x: f32, y: f32 },
    /// Remove the pointer from the window.
    PointerLeave,
    /// Change the number of list lines in the tester window.
    Resize { lines: usize },
    AssertOffset { min: f32, max: f32 },
    /// Momentum and bounce have both come to rest.
    AssertSettled,
    /// Bounds for the overscroll target.
    AssertOverscroll { min: f32, max: f32 },
}
