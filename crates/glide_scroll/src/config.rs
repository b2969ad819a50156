//! Scroll and scrollbar tunables
//!
//! Both structs deserialize with `#[serde(default)]`, so a TOML file only
//! needs the fields it overrides:
//!
//! ```toml
//! scroll_multiplier = 70.0
//! max_overscroll = 40.0
//!
//! [scrollbar]
//! width = 10.0
//! ```

use std::path::Path;

use glide_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ============================================================================
// Scrollbar Configuration
// ============================================================================

/// Appearance and animation of the custom scrollbar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Track thickness in pixels
    pub width: f32,
    /// Horizontal gap between track edge and thumb
    pub thumb_padding: f32,
    /// Corner radius of the track
    pub track_rounding: f32,
    /// Corner radius of the thumb
    pub thumb_rounding: f32,
    /// Minimum thumb length in pixels
    pub min_thumb_size: f32,
    /// Lower bound of `viewport / content` used for the thumb length
    pub min_normalized_size: f32,
    /// How far the thumb leads into an overscroll (pixels per overscroll pixel)
    pub overscroll_lead: f32,
    /// Fraction of thumb length lost at maximum overscroll
    pub squash: f32,
    /// Easing rate of the thumb position
    pub grab_rate: f32,
    /// Easing rate of the fade-in
    pub fade_rate: f32,
    /// Track opacity relative to the scrollbar fade
    pub track_alpha: f32,
    /// Thumb opacity while the pointer is over the track
    pub hover_alpha: f32,
    /// Thumb opacity otherwise
    pub idle_alpha: f32,
    pub track_color: Color,
    pub thumb_color: Color,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            width: 14.0,
            thumb_padding: 2.0,
            track_rounding: 9.0,
            thumb_rounding: 3.0,
            min_thumb_size: 12.0,
            min_normalized_size: 0.05,
            overscroll_lead: 0.2,
            squash: 0.35,
            grab_rate: 15.0,
            fade_rate: 8.0,
            track_alpha: 0.4,
            hover_alpha: 1.0,
            idle_alpha: 0.6,
            // Dark-theme scrollbar background and grab
            track_color: Color::rgba(0.02, 0.02, 0.02, 0.53),
            thumb_color: Color::rgba(0.31, 0.31, 0.31, 1.0),
        }
    }
}

// ============================================================================
// Scroll Configuration
// ============================================================================

/// Physics tunables for inertial scrolling and edge bounce
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Accumulate overscroll at the edges (false = hard stop)
    pub bounce_enabled: bool,
    /// Velocity added per wheel notch (pixels/second)
    pub scroll_multiplier: f32,
    /// Exponential decay rate of the momentum
    pub velocity_decay: f32,
    /// Velocities below this snap to zero
    pub velocity_epsilon: f32,
    /// Minimum speed at which hitting an edge turns into a bounce
    pub hard_hit_velocity: f32,
    /// Overscroll pixels produced per unit of velocity on a hard hit
    pub bounce_strength: f32,
    /// Exponential rate at which overscroll returns to rest
    pub bounce_decay: f32,
    /// Scale applied to wheel impulses pushing past an edge
    pub overscroll_multiplier: f32,
    /// Overscroll below this snaps to zero
    pub overscroll_epsilon: f32,
    /// Largest overscroll in pixels, in either direction
    pub max_overscroll: f32,
    /// Rate at which the visible overscroll follows its target
    pub visual_follow_rate: f32,
    /// Scrollbar configuration
    pub scrollbar: ScrollbarConfig,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            bounce_enabled: true,
            scroll_multiplier: 50.0,
            velocity_decay: 8.0,
            velocity_epsilon: 0.5,
            hard_hit_velocity: 50.0,
            bounce_strength: 0.15,
            bounce_decay: 12.0,
            overscroll_multiplier: 0.4,
            overscroll_epsilon: 0.1,
            max_overscroll: 60.0,
            visual_follow_rate: 15.0,
            scrollbar: ScrollbarConfig::default(),
        }
    }
}

impl ScrollConfig {
    /// Create config with bounce disabled
    pub fn no_bounce() -> Self {
        Self {
            bounce_enabled: false,
            ..Default::default()
        }
    }

    /// Short glide, quick snap-back
    pub fn snappy() -> Self {
        Self {
            velocity_decay: 14.0,
            bounce_decay: 18.0,
            visual_follow_rate: 22.0,
            ..Default::default()
        }
    }

    /// Long glide, soft snap-back
    pub fn floaty() -> Self {
        Self {
            scroll_multiplier: 70.0,
            velocity_decay: 4.0,
            bounce_decay: 8.0,
            visual_follow_rate: 10.0,
            ..Default::default()
        }
    }

    /// Parse a (possibly partial) TOML document and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!("loaded scroll config from {}", path.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values that would break the overscroll bound or stall easing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("scroll_multiplier", self.scroll_multiplier),
            ("velocity_decay", self.velocity_decay),
            ("hard_hit_velocity", self.hard_hit_velocity),
            ("bounce_strength", self.bounce_strength),
            ("bounce_decay", self.bounce_decay),
            ("overscroll_multiplier", self.overscroll_multiplier),
            ("visual_follow_rate", self.visual_follow_rate),
            ("scrollbar.thumb_padding", self.scrollbar.thumb_padding),
            ("scrollbar.track_rounding", self.scrollbar.track_rounding),
            ("scrollbar.thumb_rounding", self.scrollbar.thumb_rounding),
            ("scrollbar.min_thumb_size", self.scrollbar.min_thumb_size),
            ("scrollbar.overscroll_lead", self.scrollbar.overscroll_lead),
            ("scrollbar.grab_rate", self.scrollbar.grab_rate),
            ("scrollbar.fade_rate", self.scrollbar.fade_rate),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("must be finite and >= 0, got {value}")));
            }
        }

        // Snap epsilons must be positive or decay never reaches exactly zero
        let positive = [
            ("velocity_epsilon", self.velocity_epsilon),
            ("overscroll_epsilon", self.overscroll_epsilon),
            ("max_overscroll", self.max_overscroll),
            ("scrollbar.width", self.scrollbar.width),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be finite and > 0, got {value}")));
            }
        }

        let unit = [
            ("scrollbar.squash", self.scrollbar.squash),
            ("scrollbar.track_alpha", self.scrollbar.track_alpha),
            ("scrollbar.hover_alpha", self.scrollbar.hover_alpha),
            ("scrollbar.idle_alpha", self.scrollbar.idle_alpha),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("must be within [0, 1], got {value}")));
            }
        }

        let min_norm = self.scrollbar.min_normalized_size;
        if !(min_norm > 0.0 && min_norm <= 1.0) {
            return Err(invalid(
                "scrollbar.min_normalized_size",
                format!("must be within (0, 1], got {min_norm}"),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
