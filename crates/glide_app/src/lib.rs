//! Glide scroll tester
//!
//! A headless stand-in for a GUI host: one fixed-size "Scroll Tester" window
//! with 200 numbered lines, driven frame by frame from a JSON scenario of
//! wheel input, pointer moves and assertions on the resulting scroll state.
//!
//! ```rust
//! use glide_app::{run_scenario, ReportStatus};
//!
//! let outcome = run_scenario(
//!     r#"{ "steps": [
//!         { "type": "wheel", "delta": 1.0, "frames": 5 },
//!         { "type": "assert_offset", "min": 0.0, "max": 0.0 },
//!         { "type": "idle", "frames": 120 },
//!         { "type": "assert_settled" }
//!     ] }"#,
//! )
//! .unwrap();
//! assert_eq!(outcome.report().status, ReportStatus::Passed);
//! ```

pub mod frame_stats;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_scenario;
pub mod window;

pub use frame_stats::FrameStats;
pub use headless_assert::{AssertionResult, ScrollSnapshot};
pub use headless_report::{HeadlessReport, ReportStatus};
pub use headless_runner::{run_loaded_scenario, run_scenario, HeadlessRunConfig, RunOutcome};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use window::TesterWindow;
