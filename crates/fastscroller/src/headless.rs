//! Headless host for driving a scroller without a window.
//!
//! [`HeadlessHost`] is an in-memory scrollable view with a manual clock.
//! [`Harness`] wires it to a [`FastScroller`] and plays the host's event
//! queue: scroll notifications, pointer dispatch with interception, paint
//! passes, delayed callbacks and animation frames, all in time order.

use std::collections::VecDeque;

use slotmap::SlotMap;
use web_time::{Duration, Instant};

use crate::constants::FRAME_INTERVAL_MS;
use crate::error::ScrollerResult;
use crate::event::PointerEvent;
use crate::host::{HostHook, ScrollHost, SubscriptionId, TimerToken, Viewport};
use crate::layout::{Axis, Bounds, LayoutDirection, Padding, Point, Size};
use crate::renderer::{Canvas, Color};
use crate::scroller::{DrawPass, FastScroller};

/// In-memory scrollable view.
#[derive(Debug)]
pub struct HeadlessHost {
    viewport: Viewport,
    content: Size,
    offset: Point,
    direction: LayoutDirection,
    showing_layout_bounds: bool,
    origin: Instant,
    elapsed: Duration,
    subscriptions: SlotMap<SubscriptionId, HostHook>,
    timers: SlotMap<TimerToken, Instant>,
    frame_due: Option<Instant>,
    /// Applied scroll deltas not yet delivered to the scroll listener
    notifications: VecDeque<(f32, f32)>,
    /// Deltas requested through `scroll_by`
    scroll_requests: Vec<(f32, f32)>,
    invalidations: usize,
}

impl HeadlessHost {
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            viewport: Viewport::new(viewport, Padding::ZERO),
            content,
            offset: Point::zero(),
            direction: LayoutDirection::Ltr,
            showing_layout_bounds: false,
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            subscriptions: SlotMap::with_key(),
            timers: SlotMap::with_key(),
            frame_due: None,
            notifications: VecDeque::new(),
            scroll_requests: Vec::new(),
            invalidations: 0,
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.viewport.padding = padding;
        self
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_layout_bounds(mut self, showing: bool) -> Self {
        self.showing_layout_bounds = showing;
        self
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport.size = size;
        self.offset = self.clamped(self.offset);
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.viewport.padding = padding;
        self.offset = self.clamped(self.offset);
    }

    pub fn set_content(&mut self, content: Size) {
        self.content = content;
        self.offset = self.clamped(self.offset);
    }

    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    pub fn content(&self) -> Size {
        self.content
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Largest offset along `axis`.
    pub fn max_offset(&self, axis: Axis) -> f32 {
        (self.content.along(axis) - self.viewport.track_area(axis)).max(0.0)
    }

    /// Deltas the scroller asked for, in order.
    pub fn scroll_requests(&self) -> &[(f32, f32)] {
        &self.scroll_requests
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations
    }

    pub fn is_subscribed(&self, hook: HostHook) -> bool {
        self.subscriptions.values().any(|h| *h == hook)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_due.is_some()
    }

    /// Scroll the content as a user gesture would. Returns the applied delta.
    pub fn scroll_content(&mut self, dx: f32, dy: f32) -> (f32, f32) {
        let target = self.clamped(Point::new(self.offset.x + dx, self.offset.y + dy));
        let applied = (target.x - self.offset.x, target.y - self.offset.y);
        self.offset = target;
        if applied != (0.0, 0.0) {
            self.notifications.push_back(applied);
        }
        applied
    }

    pub fn take_notification(&mut self) -> Option<(f32, f32)> {
        self.notifications.pop_front()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn set_clock(&mut self, at: Instant) {
        self.elapsed = at.duration_since(self.origin);
    }

    /// Earliest timer due at or before `until`.
    fn next_timer(&self, until: Instant) -> Option<(TimerToken, Instant)> {
        self.timers
            .iter()
            .filter(|(_, deadline)| **deadline <= until)
            .min_by_key(|(_, deadline)| **deadline)
            .map(|(token, deadline)| (token, *deadline))
    }

    fn clamped(&self, offset: Point) -> Point {
        Point::new(
            offset.x.clamp(0.0, self.max_offset(Axis::Horizontal)),
            offset.y.clamp(0.0, self.max_offset(Axis::Vertical)),
        )
    }
}

impl ScrollHost for HeadlessHost {
    fn scroll_range(&self, axis: Axis) -> f32 {
        self.content.along(axis)
    }

    fn scroll_offset(&self, axis: Axis) -> f32 {
        self.offset.along(axis)
    }

    fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.scroll_requests.push((dx, dy));
        self.scroll_content(dx, dy);
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn is_showing_layout_bounds(&self) -> bool {
        self.showing_layout_bounds
    }

    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    fn request_frame(&mut self) {
        if self.frame_due.is_none() {
            self.frame_due = Some(self.now() + Duration::from_millis(FRAME_INTERVAL_MS));
        }
    }

    fn subscribe(&mut self, hook: HostHook) -> SubscriptionId {
        self.subscriptions.insert(hook)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.remove(id);
    }

    fn post_delayed(&mut self, delay: Duration) -> TimerToken {
        let deadline = self.now() + delay;
        self.timers.insert(deadline)
    }

    fn cancel_delayed(&mut self, token: TimerToken) {
        self.timers.remove(token);
    }
}

/// A recorded paint operation, in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Fill { bounds: Bounds, color: Color },
    DebugRect { bounds: Bounds },
}

impl DrawOp {
    pub fn bounds(&self) -> Bounds {
        match self {
            DrawOp::Fill { bounds, .. } | DrawOp::DebugRect { bounds } => *bounds,
        }
    }
}

/// Canvas that records operations with the current transform applied.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    tx: f32,
    ty: f32,
    sx: f32,
    sy: f32,
    ops: Vec<DrawOp>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            sx: 1.0,
            sy: 1.0,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Whether the transform is back to identity.
    pub fn is_identity(&self) -> bool {
        self.tx == 0.0 && self.ty == 0.0 && self.sx == 1.0 && self.sy == 1.0
    }

    fn map(&self, bounds: Bounds) -> Bounds {
        let x0 = self.tx + self.sx * bounds.x;
        let x1 = self.tx + self.sx * bounds.right();
        let y0 = self.ty + self.sy * bounds.y;
        let y1 = self.ty + self.sy * bounds.bottom();
        Bounds::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs())
    }
}

impl Canvas for RecordingCanvas {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.tx += self.sx * dx;
        self.ty += self.sy * dy;
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.sx *= sx;
        self.sy *= sy;
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let bounds = self.map(bounds);
        self.ops.push(DrawOp::Fill { bounds, color });
    }

    fn stroke_debug_rect(&mut self, bounds: Bounds) {
        let bounds = self.map(bounds);
        self.ops.push(DrawOp::DebugRect { bounds });
    }
}

/// A host and an attached scroller, driven together.
#[derive(Debug)]
pub struct Harness {
    pub host: HeadlessHost,
    pub scroller: FastScroller,
    claimed: bool,
    last_frame: Vec<DrawOp>,
}

impl Harness {
    /// Attach `scroller` to `host`.
    pub fn new(mut host: HeadlessHost, mut scroller: FastScroller) -> ScrollerResult<Self> {
        scroller.attach(&mut host)?;
        Ok(Self {
            host,
            scroller,
            claimed: false,
            last_frame: Vec::new(),
        })
    }

    /// User scroll by a delta; the listener sees the applied amount.
    pub fn scroll_content(&mut self, dx: f32, dy: f32) {
        self.host.scroll_content(dx, dy);
        self.flush();
    }

    /// Dispatch a pointer event. Returns whether the scroller consumed it.
    ///
    /// Once the interceptor claims a gesture, the remaining events go to
    /// `on_pointer` until the gesture ends.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        if !self.host.is_subscribed(HostHook::PointerInterceptor) {
            return false;
        }
        let consumed = if self.claimed {
            self.scroller.on_pointer(&mut self.host, event);
            true
        } else if self.scroller.on_intercept_pointer(&mut self.host, event) {
            self.claimed = true;
            true
        } else {
            false
        };
        if event.ends_gesture() {
            self.claimed = false;
        }
        self.flush();
        consumed
    }

    /// Press at `from`, move through `steps` even increments to `to`, release.
    pub fn drag(&mut self, from: Point, to: Point, steps: u32) -> bool {
        let claimed = self.pointer(PointerEvent::down(from.x, from.y));
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.pointer(PointerEvent::moved(x, y));
        }
        self.pointer(PointerEvent::up(to.x, to.y));
        claimed
    }

    /// Run an overlay paint pass.
    pub fn draw(&mut self) -> DrawPass {
        if !self.host.is_subscribed(HostHook::DrawOver) {
            self.last_frame.clear();
            return DrawPass::Skipped;
        }
        let mut canvas = RecordingCanvas::new();
        let pass = self.scroller.on_draw_over(&mut self.host, &mut canvas);
        self.last_frame = canvas.into_ops();
        self.flush();
        pass
    }

    /// Operations recorded by the last [`draw`](Self::draw).
    pub fn last_frame(&self) -> &[DrawOp] {
        &self.last_frame
    }

    pub fn resize(&mut self, size: Size) {
        self.host.set_viewport_size(size);
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.host.set_padding(padding);
    }

    /// Advance the clock, firing timers and animation frames as they fall due.
    pub fn advance(&mut self, duration: Duration) {
        let end = self.host.now() + duration;
        loop {
            let timer = self.host.next_timer(end);
            let frame = self.host.frame_due.filter(|due| *due <= end);
            match (timer, frame) {
                (Some((token, deadline)), Some(due)) if deadline <= due => {
                    self.fire_timer(token, deadline)
                }
                (Some((token, deadline)), None) => self.fire_timer(token, deadline),
                (_, Some(due)) => {
                    self.host.set_clock(due);
                    self.host.frame_due = None;
                    self.scroller.on_frame(&mut self.host);
                }
                (None, None) => break,
            }
            self.flush();
        }
        self.host.set_clock(end);
    }

    pub fn detach(&mut self) {
        self.scroller.detach(&mut self.host);
        self.claimed = false;
    }

    fn fire_timer(&mut self, token: TimerToken, deadline: Instant) {
        self.host.set_clock(deadline);
        self.host.timers.remove(token);
        self.scroller.on_timer(&mut self.host, token);
    }

    /// Deliver queued scroll notifications while the listener is registered.
    fn flush(&mut self) {
        while let Some((dx, dy)) = self.host.take_notification() {
            if self.host.is_subscribed(HostHook::ScrollListener) {
                self.scroller.on_scrolled(&mut self.host, dx, dy);
            }
        }
    }
}
