//! Host view contract.
//!
//! The host is the scrollable list the overlay is drawn on. It owns the
//! content, the scroll position, the clock and the event queue; the scroller
//! only reads metrics from it and asks it to scroll, repaint and schedule
//! callbacks. Every scroller entry point takes the host by reference, so the
//! scroller never stores one.

use slotmap::new_key_type;
use web_time::{Duration, Instant};

use crate::layout::{Axis, LayoutDirection, Padding, Size};

new_key_type! {
    /// Registration of a scroller hook with the host.
    pub struct SubscriptionId;
    /// A delayed callback scheduled with the host.
    pub struct TimerToken;
}

/// Hooks a scroller registers when it attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostHook {
    /// Scroll notifications, delivered to [`FastScroller::on_scrolled`](crate::FastScroller::on_scrolled)
    ScrollListener,
    /// Pointer interception, delivered to `on_intercept_pointer` / `on_pointer`
    PointerInterceptor,
    /// Overlay paint pass, delivered to `on_draw_over`
    DrawOver,
}

/// Host viewport dimensions and insets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub size: Size,
    pub padding: Padding,
}

impl Viewport {
    pub fn new(size: Size, padding: Padding) -> Self {
        Self { size, padding }
    }

    /// Length of the track along `axis`: the viewport minus the padding on
    /// both ends of that axis. Never negative.
    pub fn track_area(&self, axis: Axis) -> f32 {
        (self.size.along(axis) - self.padding.leading(axis) - self.padding.trailing(axis)).max(0.0)
    }
}

/// What the scroller needs from the scrollable view it decorates.
pub trait ScrollHost {
    /// Total scrollable content extent along `axis`.
    fn scroll_range(&self, axis: Axis) -> f32;

    /// Current scroll position along `axis`.
    fn scroll_offset(&self, axis: Axis) -> f32;

    /// Scroll by a signed delta. Must apply immediately so the next
    /// `scroll_offset` read reflects it.
    fn scroll_by(&mut self, dx: f32, dy: f32);

    fn viewport(&self) -> Viewport;

    fn layout_direction(&self) -> LayoutDirection;

    /// Whether the host is showing layout bounds for debugging.
    fn is_showing_layout_bounds(&self) -> bool {
        false
    }

    /// Monotonic clock used for animation timing.
    fn now(&self) -> Instant;

    /// Request a repaint of the host view.
    fn invalidate(&mut self);

    /// Request an animation frame (`on_frame`) on the next vsync.
    fn request_frame(&mut self);

    fn subscribe(&mut self, hook: HostHook) -> SubscriptionId;

    /// Remove a registration. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);

    /// Schedule `on_timer` with the returned token after `delay`.
    fn post_delayed(&mut self, delay: Duration) -> TimerToken;

    /// Cancel a scheduled callback. Unknown or fired tokens are ignored.
    fn cancel_delayed(&mut self, token: TimerToken);
}
