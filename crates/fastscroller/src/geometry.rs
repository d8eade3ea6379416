//! Thumb geometry, hit-testing and drag-to-scroll translation.
//!
//! One [`AxisGeometry`] exists per axis. It is recomputed from the host's
//! scroll metrics on every scroll-position update and consulted by the
//! pointer and paint paths.

use crate::layout::{Axis, Bounds, Point, Size};
use crate::host::Viewport;

/// Inputs to the thumb computation that come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryParams {
    /// Content must exceed the track by at least this much
    pub minimum_range: f32,
    /// Lower bound on the thumb length
    pub min_thumb_length: f32,
}

/// Dynamic thumb state for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGeometry {
    axis: Axis,
    needed: bool,
    content_length: f32,
    track_area: f32,
    leading_padding: f32,
    thumb_length: f32,
    thumb_center: f32,
    drag_anchor_position: f32,
    drag_anchor_scroll_offset: f32,
}

impl AxisGeometry {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            needed: false,
            content_length: 0.0,
            track_area: 0.0,
            leading_padding: 0.0,
            thumb_length: 0.0,
            thumb_center: 0.0,
            drag_anchor_position: 0.0,
            drag_anchor_scroll_offset: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Whether the content is long enough along this axis to show a bar.
    pub fn needed(&self) -> bool {
        self.needed
    }

    pub fn content_length(&self) -> f32 {
        self.content_length
    }

    pub fn track_area(&self) -> f32 {
        self.track_area
    }

    pub fn leading_padding(&self) -> f32 {
        self.leading_padding
    }

    pub fn thumb_length(&self) -> f32 {
        self.thumb_length
    }

    pub fn thumb_center(&self) -> f32 {
        self.thumb_center
    }

    pub fn drag_anchor_position(&self) -> f32 {
        self.drag_anchor_position
    }

    pub fn drag_anchor_scroll_offset(&self) -> f32 {
        self.drag_anchor_scroll_offset
    }

    /// Start of the thumb along the track.
    pub fn thumb_start(&self) -> f32 {
        self.thumb_center - self.thumb_length / 2.0
    }

    pub fn thumb_end(&self) -> f32 {
        self.thumb_center + self.thumb_length / 2.0
    }

    /// Largest scroll offset the host accepts along this axis.
    pub fn max_scroll(&self) -> f32 {
        (self.content_length - self.track_area).max(0.0)
    }

    /// Recompute from fresh host metrics. Returns whether the axis is needed.
    pub fn update(
        &mut self,
        content_length: f32,
        viewport: &Viewport,
        offset: f32,
        params: GeometryParams,
    ) -> bool {
        self.content_length = content_length;
        self.track_area = viewport.track_area(self.axis);
        self.leading_padding = viewport.padding.leading(self.axis);
        self.needed = is_scroll_needed(content_length, self.track_area, params.minimum_range);

        if self.needed {
            self.thumb_length =
                thumb_length(self.track_area, content_length, params.min_thumb_length);
            self.thumb_center = thumb_center(
                self.leading_padding,
                self.track_area,
                self.thumb_length,
                content_length,
                offset,
            );
        }
        self.needed
    }

    /// Forget everything measured so far; the axis is no longer needed.
    pub fn reset(&mut self) {
        *self = Self::new(self.axis);
    }

    /// Whether `coord` (along this axis) falls on the thumb.
    pub fn contains_along(&self, coord: f32) -> bool {
        coord >= self.thumb_start() && coord <= self.thumb_end()
    }

    /// Record where a drag started.
    pub fn begin_drag(&mut self, pointer: f32, scroll_offset: f32) {
        self.drag_anchor_position = pointer;
        self.drag_anchor_scroll_offset = scroll_offset;
    }

    /// Scroll delta for a pointer move while dragging this axis.
    ///
    /// Returns `None` when the pointer is within `deadband` of the thumb
    /// center or when the move does not change the offset.
    pub fn drag_to(&self, pointer: f32, current_offset: f32, deadband: f32) -> Option<f32> {
        if (self.thumb_center - pointer).abs() < deadband {
            log::trace!(
                "{:?} drag at {} inside deadband of thumb center {}",
                self.axis,
                pointer,
                self.thumb_center
            );
            return None;
        }
        let delta = drag_scroll_delta(
            self.drag_anchor_position,
            pointer,
            self.drag_anchor_scroll_offset,
            current_offset,
            self.content_length,
            self.track_area,
            self.thumb_length,
        );
        (delta != 0.0).then_some(delta)
    }

    /// Thumb rectangle in view coordinates for a bar of `thickness`.
    pub fn thumb_bounds(&self, view: Size, thickness: f32, on_left: bool) -> Bounds {
        match self.axis {
            Axis::Vertical => {
                let x = if on_left { 0.0 } else { view.width - thickness };
                Bounds::new(x, self.thumb_start(), thickness, self.thumb_length)
            }
            Axis::Horizontal => Bounds::new(
                self.thumb_start(),
                view.height - thickness,
                self.thumb_length,
                thickness,
            ),
        }
    }

    /// Track rectangle in view coordinates for a bar of `thickness`.
    pub fn track_bounds(&self, view: Size, thickness: f32, on_left: bool) -> Bounds {
        match self.axis {
            Axis::Vertical => {
                let x = if on_left { 0.0 } else { view.width - thickness };
                Bounds::new(x, self.leading_padding, thickness, self.track_area)
            }
            Axis::Horizontal => Bounds::new(
                self.leading_padding,
                view.height - thickness,
                self.track_area,
                thickness,
            ),
        }
    }

    /// Whether `point` presses this axis's thumb.
    ///
    /// The perpendicular band is `band` wide and anchored to the edge the bar
    /// sits on; only the vertical bar can move to the left edge.
    pub fn hit_test(&self, point: Point, view: Size, band: f32, on_left: bool) -> bool {
        if !self.needed {
            return false;
        }
        let in_band = match self.axis {
            Axis::Vertical => {
                if on_left {
                    point.x <= band
                } else {
                    point.x >= view.width - band
                }
            }
            Axis::Horizontal => point.y >= view.height - band,
        };
        in_band && self.contains_along(point.along(self.axis))
    }
}

/// Whether content of `content_length` needs a bar on a track of `track_area`.
///
/// Content must exceed the track; `minimum_range` only raises the bar.
pub fn is_scroll_needed(content_length: f32, track_area: f32, minimum_range: f32) -> bool {
    let max_scroll = content_length - track_area;
    track_area > 0.0 && max_scroll > 0.0 && max_scroll >= minimum_range
}

/// Thumb length proportional to the visible share of the content.
///
/// The minimum is capped at the track so the thumb always fits.
pub fn thumb_length(track_area: f32, content_length: f32, min_thumb_length: f32) -> f32 {
    if content_length <= 0.0 {
        return track_area;
    }
    let proportional = (track_area * track_area / content_length).min(track_area);
    proportional.max(min_thumb_length.min(track_area))
}

/// Thumb center for a scroll `offset`, including the leading padding.
pub fn thumb_center(
    leading_padding: f32,
    track_area: f32,
    thumb_length: f32,
    content_length: f32,
    offset: f32,
) -> f32 {
    let max_scroll = content_length - track_area;
    let ratio = if max_scroll > 0.0 {
        (offset / max_scroll).clamp(0.0, 1.0)
    } else {
        0.0
    };
    leading_padding + thumb_length / 2.0 + (track_area - thumb_length) * ratio
}

/// Clamp a scroll offset to the valid range for the given extents.
pub fn clamp_scroll_offset(offset: f32, content_length: f32, track_area: f32) -> f32 {
    let max_scroll = (content_length - track_area).max(0.0);
    offset.clamp(0.0, max_scroll)
}

/// Convert a thumb drag into the scroll delta the host should apply.
///
/// The pointer travel since the drag began is mapped onto the scrollable
/// range, added to the offset at drag start, clamped, and returned relative to
/// the host's current offset. Degenerate tracks produce no scroll.
pub fn drag_scroll_delta(
    anchor_position: f32,
    pointer: f32,
    anchor_scroll_offset: f32,
    current_offset: f32,
    content_length: f32,
    track_area: f32,
    thumb_length: f32,
) -> f32 {
    let travel = track_area - thumb_length;
    if track_area <= 0.0 || travel <= 0.0 {
        return 0.0;
    }
    let percentage = (pointer - anchor_position) / travel;
    let max_scroll = (content_length - track_area).max(0.0);
    let desired = clamp_scroll_offset(
        anchor_scroll_offset + percentage * max_scroll,
        content_length,
        track_area,
    );
    desired - current_offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Padding;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn viewport(width: f32, height: f32) -> Viewport {
        Viewport::new(Size::new(width, height), Padding::ZERO)
    }

    fn params(minimum_range: f32) -> GeometryParams {
        GeometryParams {
            minimum_range,
            min_thumb_length: 0.0,
        }
    }

    #[test]
    fn test_long_content_needs_scroll() {
        let mut g = AxisGeometry::new(Axis::Vertical);
        assert!(g.update(10000.0, &viewport(400.0, 1000.0), 0.0, params(100.0)));
        assert_eq!(g.track_area(), 1000.0);
        assert!(approx_eq(g.thumb_length(), 100.0));
        assert!(approx_eq(g.thumb_center(), 50.0));
    }

    #[test]
    fn test_short_content_not_needed() {
        let mut g = AxisGeometry::new(Axis::Vertical);
        assert!(!g.update(1050.0, &viewport(400.0, 1000.0), 0.0, params(100.0)));
        assert!(!g.hit_test(Point::new(399.0, 10.0), Size::new(400.0, 1000.0), 40.0, false));
    }

    #[test]
    fn test_minimum_range_boundary_is_inclusive() {
        assert!(is_scroll_needed(1100.0, 1000.0, 100.0));
        assert!(!is_scroll_needed(1099.0, 1000.0, 100.0));
    }

    #[test]
    fn test_content_equal_to_track_not_needed() {
        assert!(!is_scroll_needed(1000.0, 1000.0, 0.0));
        assert!(is_scroll_needed(1000.5, 1000.0, 0.0));
    }

    #[test]
    fn test_zero_track_never_needed() {
        assert!(!is_scroll_needed(5000.0, 0.0, 0.0));
    }

    #[test]
    fn test_thumb_length_respects_minimum_and_track() {
        assert!(approx_eq(thumb_length(1000.0, 100000.0, 48.0), 48.0));
        assert!(approx_eq(thumb_length(1000.0, 2000.0, 48.0), 500.0));
        // A minimum larger than the track is capped at the track
        assert!(approx_eq(thumb_length(30.0, 100000.0, 48.0), 30.0));
    }

    #[test]
    fn test_thumb_center_with_padding() {
        let vp = Viewport::new(Size::new(400.0, 1040.0), Padding::new(20.0, 0.0, 20.0, 0.0));
        let mut g = AxisGeometry::new(Axis::Vertical);
        g.update(10000.0, &vp, 9000.0, params(100.0));
        // Thumb pinned to the end of the track
        assert!(approx_eq(g.thumb_end(), 1020.0));
        g.update(10000.0, &vp, 0.0, params(100.0));
        assert!(approx_eq(g.thumb_start(), 20.0));
    }

    #[test]
    fn test_overscroll_keeps_thumb_on_track() {
        let mut g = AxisGeometry::new(Axis::Vertical);
        g.update(10000.0, &viewport(400.0, 1000.0), 12000.0, params(0.0));
        assert!(approx_eq(g.thumb_end(), 1000.0));
        g.update(10000.0, &viewport(400.0, 1000.0), -50.0, params(0.0));
        assert!(approx_eq(g.thumb_start(), 0.0));
    }

    #[test]
    fn test_hit_test_right_edge_band() {
        let view = Size::new(400.0, 1000.0);
        let mut g = AxisGeometry::new(Axis::Vertical);
        g.update(10000.0, &viewport(400.0, 1000.0), 4500.0, params(100.0));
        // thumb spans [450, 550]
        assert!(g.hit_test(Point::new(390.0, 500.0), view, 24.0, false));
        assert!(g.hit_test(Point::new(390.0, 450.0), view, 24.0, false));
        assert!(!g.hit_test(Point::new(390.0, 560.0), view, 24.0, false));
        assert!(!g.hit_test(Point::new(300.0, 500.0), view, 24.0, false));
    }

    #[test]
    fn test_hit_test_left_edge_band() {
        let view = Size::new(400.0, 1000.0);
        let mut g = AxisGeometry::new(Axis::Vertical);
        g.update(10000.0, &viewport(400.0, 1000.0), 4500.0, params(100.0));
        assert!(g.hit_test(Point::new(10.0, 500.0), view, 24.0, true));
        assert!(!g.hit_test(Point::new(390.0, 500.0), view, 24.0, true));
    }

    #[test]
    fn test_hit_test_horizontal_bottom_band() {
        let view = Size::new(1000.0, 400.0);
        let mut g = AxisGeometry::new(Axis::Horizontal);
        g.update(10000.0, &viewport(1000.0, 400.0), 0.0, params(100.0));
        // thumb spans [0, 100] along x
        assert!(g.hit_test(Point::new(50.0, 395.0), view, 24.0, false));
        assert!(!g.hit_test(Point::new(50.0, 300.0), view, 24.0, false));
        assert!(!g.hit_test(Point::new(150.0, 395.0), view, 24.0, false));
    }

    #[test]
    fn test_drag_maps_pointer_travel_to_offset() {
        // track 1000, thumb 100, content 10000 -> 900px of travel for 9000 of scroll
        let delta = drag_scroll_delta(500.0, 590.0, 4500.0, 4500.0, 10000.0, 1000.0, 100.0);
        assert!(approx_eq(delta, 900.0));
    }

    #[test]
    fn test_drag_clamps_to_range() {
        let delta = drag_scroll_delta(500.0, 5000.0, 4500.0, 4500.0, 10000.0, 1000.0, 100.0);
        assert!(approx_eq(4500.0 + delta, 9000.0));
        let delta = drag_scroll_delta(500.0, -5000.0, 4500.0, 4500.0, 10000.0, 1000.0, 100.0);
        assert!(approx_eq(4500.0 + delta, 0.0));
    }

    #[test]
    fn test_drag_on_degenerate_track_is_noop() {
        assert_eq!(drag_scroll_delta(0.0, 50.0, 0.0, 0.0, 500.0, 0.0, 0.0), 0.0);
        assert_eq!(drag_scroll_delta(0.0, 50.0, 0.0, 0.0, 1000.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_deadband_suppresses_jitter() {
        let mut g = AxisGeometry::new(Axis::Vertical);
        g.update(10000.0, &viewport(400.0, 1000.0), 4500.0, params(100.0));
        g.begin_drag(500.0, 4500.0);
        assert_eq!(g.drag_to(501.0, 4500.0, 2.0), None);
        assert!(g.drag_to(503.0, 4500.0, 2.0).is_some());
    }

    #[test]
    fn test_reset_clears_need() {
        let mut g = AxisGeometry::new(Axis::Horizontal);
        g.update(10000.0, &viewport(1000.0, 400.0), 0.0, params(0.0));
        g.reset();
        assert!(!g.needed());
        assert_eq!(g.axis(), Axis::Horizontal);
        assert_eq!(g.thumb_length(), 0.0);
    }
}
