//! Centralized constants for the fast scroller.
//!
//! Defaults for [`ScrollerConfig`](crate::ScrollerConfig) and the headless host
//! live here so the values are defined once.

// =============================================================================
// Fade timings
// =============================================================================

/// Duration of the fade-in animation
pub const SHOW_DURATION_MS: u64 = 500;

/// Duration of the fade-out animation started by the auto-hide timer
pub const HIDE_DURATION_MS: u64 = 500;

/// Auto-hide delay armed when the scroller becomes visible
pub const HIDE_DELAY_AFTER_VISIBLE_MS: u64 = 1500;

/// Auto-hide delay armed when a drag ends
pub const HIDE_DELAY_AFTER_DRAGGING_MS: u64 = 1200;

/// Paint alpha at full opacity
pub const SCROLLBAR_FULL_OPAQUE: u8 = 255;

// =============================================================================
// Geometry
// =============================================================================

/// Default thickness of thumb and track when the resources report less
pub const DEFAULT_THICKNESS: f32 = 8.0;

/// Pointer movement (in device-independent pixels) below which a drag does not scroll
pub const DRAG_DEADBAND: f32 = 2.0;

// =============================================================================
// Host
// =============================================================================

/// Interval between animation frames delivered by the headless host
pub const FRAME_INTERVAL_MS: u64 = 16;
