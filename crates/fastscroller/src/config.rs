//! Construction-time configuration for the fast scroller.
//!
//! The values are immutable once a scroller is built. Paintable resources are
//! passed separately (see [`ScrollbarResources`](crate::ScrollbarResources))
//! because they are not data.

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::Easing;
use crate::constants::{
    DEFAULT_THICKNESS, DRAG_DEADBAND, HIDE_DELAY_AFTER_DRAGGING_MS, HIDE_DELAY_AFTER_VISIBLE_MS,
    HIDE_DURATION_MS, SCROLLBAR_FULL_OPAQUE, SHOW_DURATION_MS,
};
use crate::error::{ScrollerError, ScrollerResult};

/// Configuration for scrollbar behavior and sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// Minimum thickness of thumb and track
    pub default_thickness: f32,
    /// Content must exceed the track by at least this much before a bar shows
    pub minimum_range: f32,
    /// Minimum width of the touch band; `None` uses `default_thickness`
    pub min_touch_area: Option<f32>,
    /// Minimum thumb length along the track
    pub min_thumb_length: f32,
    /// Place the vertical bar at the logical end instead of always on the right
    pub anchor_at_end: bool,
    /// Fade-in duration
    pub show_duration_ms: u64,
    /// Fade-out duration after the auto-hide delay
    pub hide_duration_ms: u64,
    /// Auto-hide delay after becoming visible
    pub hide_delay_after_visible_ms: u64,
    /// Auto-hide delay after a drag ends
    pub hide_delay_after_dragging_ms: u64,
    /// Distance from the thumb center the pointer must reach before a drag scrolls
    pub drag_deadband: f32,
    /// Paint alpha at full opacity
    pub max_alpha: u8,
    /// Interpolation curve of the fade
    pub easing: Easing,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            default_thickness: DEFAULT_THICKNESS,
            minimum_range: 0.0,
            min_touch_area: None,
            min_thumb_length: 0.0,
            anchor_at_end: true,
            show_duration_ms: SHOW_DURATION_MS,
            hide_duration_ms: HIDE_DURATION_MS,
            hide_delay_after_visible_ms: HIDE_DELAY_AFTER_VISIBLE_MS,
            hide_delay_after_dragging_ms: HIDE_DELAY_AFTER_DRAGGING_MS,
            drag_deadband: DRAG_DEADBAND,
            max_alpha: SCROLLBAR_FULL_OPAQUE,
            easing: Easing::default(),
        }
    }
}

impl ScrollerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default thickness.
    pub fn default_thickness(mut self, thickness: f32) -> Self {
        self.default_thickness = thickness;
        self
    }

    /// Set the minimum scrollable range.
    pub fn minimum_range(mut self, range: f32) -> Self {
        self.minimum_range = range;
        self
    }

    /// Set the minimum touch band width.
    pub fn min_touch_area(mut self, area: f32) -> Self {
        self.min_touch_area = Some(area);
        self
    }

    /// Set the minimum thumb length.
    pub fn min_thumb_length(mut self, length: f32) -> Self {
        self.min_thumb_length = length;
        self
    }

    /// Anchor the vertical bar at the logical end (true) or start (false).
    pub fn anchor_at_end(mut self, at_end: bool) -> Self {
        self.anchor_at_end = at_end;
        self
    }

    /// Set the fade-in duration.
    pub fn show_duration_ms(mut self, ms: u64) -> Self {
        self.show_duration_ms = ms;
        self
    }

    /// Set the fade-out duration.
    pub fn hide_duration_ms(mut self, ms: u64) -> Self {
        self.hide_duration_ms = ms;
        self
    }

    /// Set both auto-hide delays.
    pub fn hide_delays_ms(mut self, after_visible: u64, after_dragging: u64) -> Self {
        self.hide_delay_after_visible_ms = after_visible;
        self.hide_delay_after_dragging_ms = after_dragging;
        self
    }

    /// Set the drag deadband.
    pub fn drag_deadband(mut self, deadband: f32) -> Self {
        self.drag_deadband = deadband;
        self
    }

    /// Set the fade easing.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Width of the perpendicular band that accepts thumb presses.
    pub fn touch_area(&self) -> f32 {
        self.min_touch_area.unwrap_or(self.default_thickness)
    }

    pub fn show_duration(&self) -> Duration {
        Duration::from_millis(self.show_duration_ms)
    }

    pub fn hide_duration(&self) -> Duration {
        Duration::from_millis(self.hide_duration_ms)
    }

    pub fn hide_delay_after_visible(&self) -> Duration {
        Duration::from_millis(self.hide_delay_after_visible_ms)
    }

    pub fn hide_delay_after_dragging(&self) -> Duration {
        Duration::from_millis(self.hide_delay_after_dragging_ms)
    }

    /// Reject values the geometry engine cannot work with.
    pub fn validate(&self) -> ScrollerResult<()> {
        check_length("default_thickness", self.default_thickness)?;
        check_length("minimum_range", self.minimum_range)?;
        check_length("min_thumb_length", self.min_thumb_length)?;
        check_length("drag_deadband", self.drag_deadband)?;
        if let Some(area) = self.min_touch_area {
            check_length("min_touch_area", area)?;
        }
        if self.max_alpha == 0 {
            return Err(ScrollerError::InvalidConfig {
                field: "max_alpha",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn check_length(field: &'static str, value: f32) -> ScrollerResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScrollerError::InvalidConfig {
            field,
            reason: format!("expected a finite, non-negative length, got {}", value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ScrollerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.touch_area(), DEFAULT_THICKNESS);
        assert_eq!(config.hide_delay_after_visible(), Duration::from_millis(1500));
        assert_eq!(config.hide_delay_after_dragging(), Duration::from_millis(1200));
    }

    #[test]
    fn test_negative_length_rejected() {
        let config = ScrollerConfig::new().min_thumb_length(-1.0);
        assert_eq!(
            config.validate().unwrap_err(),
            ScrollerError::InvalidConfig {
                field: "min_thumb_length",
                reason: "expected a finite, non-negative length, got -1".to_string(),
            }
        );
    }

    #[test]
    fn test_nan_touch_area_rejected() {
        let config = ScrollerConfig::new().min_touch_area(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ScrollerError::InvalidConfig {
                field: "min_touch_area",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_alpha_rejected() {
        let config = ScrollerConfig {
            max_alpha: 0,
            ..ScrollerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ScrollerConfig =
            serde_json::from_str(r#"{ "minimum_range": 100.0, "anchor_at_end": false }"#).unwrap();
        assert_eq!(config.minimum_range, 100.0);
        assert!(!config.anchor_at_end);
        assert_eq!(config.show_duration_ms, SHOW_DURATION_MS);
        assert_eq!(config.easing, Easing::AccelerateDecelerate);
    }
}
