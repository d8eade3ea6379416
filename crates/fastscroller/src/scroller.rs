//! The fast scroller widget.
//!
//! [`FastScroller`] couples three things:
//! - the visibility state machine (Hidden / Visible / Dragging),
//! - the fade animation (Out / FadingIn / In / FadingOut),
//! - the per-axis geometry that turns scroll metrics into thumbs and thumb
//!   drags back into scroll deltas.
//!
//! The host drives it through the `on_*` entry points from its single event
//! queue. A drag asks the host to scroll, the host reports the scroll back via
//! [`FastScroller::on_scrolled`], and the thumb follows. The loop settles
//! because the drag target is derived from the offset at drag start rather
//! than from the thumb position, and moves inside the deadband are dropped.

use crate::animation::{AnimationOutcome, AnimationPhase, FadeAnimator, FadeSettled};
use crate::callback::Callback;
use crate::config::ScrollerConfig;
use crate::error::{ScrollerError, ScrollerResult};
use crate::event::{PointerAction, PointerEvent, ScrollerAction};
use crate::geometry::{AxisGeometry, GeometryParams};
use crate::host::{HostHook, ScrollHost, SubscriptionId, TimerToken, Viewport};
use crate::layout::{Axis, LayoutDirection, Point};
use crate::renderer::{Canvas, Paintable, ScrollbarResources};
use crate::state::{DragState, HideDelay, ScrollerState, Visibility};

use serde::Serialize;
use web_time::Duration;

/// Host registrations made by [`FastScroller::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscriptions {
    pub scroll: SubscriptionId,
    pub pointer: SubscriptionId,
    pub draw: SubscriptionId,
}

/// Result of an overlay paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawPass {
    /// Viewport changed since the last pass; scroller hidden, nothing drawn
    Resized,
    /// Nothing to draw (faded out)
    Skipped,
    /// At least the visible bars were drawn
    Drawn,
}

/// Thumb-and-track overlay for a scrollable host view.
pub struct FastScroller {
    config: ScrollerConfig,
    resources: ScrollbarResources,
    state: ScrollerState,
    observer: Callback<ScrollerAction>,
    subscriptions: Option<Subscriptions>,
    hide_timer: Option<TimerToken>,
    vertical_thumb_width: f32,
    vertical_track_width: f32,
    horizontal_thumb_height: f32,
    horizontal_track_height: f32,
    vertical_touch_band: f32,
    horizontal_touch_band: f32,
    showing_layout_bounds: bool,
}

impl FastScroller {
    /// Build a scroller. Fails if the configuration is out of range.
    pub fn new(mut resources: ScrollbarResources, config: ScrollerConfig) -> ScrollerResult<Self> {
        config.validate()?;

        let thickness = config.default_thickness;
        let vertical_thumb_width = thickness.max(resources.vertical_thumb.intrinsic_thickness());
        let vertical_track_width = thickness.max(resources.vertical_track.intrinsic_thickness());
        let horizontal_thumb_height =
            thickness.max(resources.horizontal_thumb.intrinsic_thickness());
        let horizontal_track_height =
            thickness.max(resources.horizontal_track.intrinsic_thickness());
        let touch_area = config.touch_area();

        let fade = FadeAnimator::new(config.easing, config.show_duration());
        resources.set_alpha(fade.alpha(config.max_alpha));

        Ok(Self {
            state: ScrollerState::new(fade),
            resources,
            observer: Callback::none(),
            subscriptions: None,
            hide_timer: None,
            vertical_thumb_width,
            vertical_track_width,
            horizontal_thumb_height,
            horizontal_track_height,
            vertical_touch_band: touch_area.max(vertical_thumb_width),
            horizontal_touch_band: touch_area.max(horizontal_thumb_height),
            showing_layout_bounds: false,
            config,
        })
    }

    /// Set the observer notified of redraws and drag starts.
    pub fn on_action<F>(mut self, f: F) -> Self
    where
        F: Fn(ScrollerAction) + 'static,
    {
        self.observer = Callback::new(f);
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Register with `host` and snapshot its viewport.
    pub fn attach<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> ScrollerResult<Subscriptions> {
        if self.subscriptions.is_some() {
            return Err(ScrollerError::AlreadyAttached);
        }
        let subscriptions = Subscriptions {
            scroll: host.subscribe(HostHook::ScrollListener),
            pointer: host.subscribe(HostHook::PointerInterceptor),
            draw: host.subscribe(HostHook::DrawOver),
        };
        self.state.reset_geometry(host.viewport());
        self.subscriptions = Some(subscriptions);
        log::debug!("FastScroller: attached, viewport {:?}", self.state.viewport());
        Ok(subscriptions)
    }

    /// Remove every registration and pending callback. Safe to call when not
    /// attached or more than once.
    pub fn detach<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        let Some(subscriptions) = self.subscriptions.take() else {
            log::trace!("FastScroller: detach while not attached");
            return;
        };
        host.unsubscribe(subscriptions.scroll);
        host.unsubscribe(subscriptions.pointer);
        host.unsubscribe(subscriptions.draw);
        self.cancel_hide(host);

        if self.state.fade.snap_out().is_some() {
            log::trace!("FastScroller: fade cancelled on detach");
        }
        let plan = self.state.transition(Visibility::Hidden);
        if let Some(axis) = plan.released {
            self.thumb_mut(axis.axis()).set_pressed(false);
        }
        self.state.reset_geometry(Viewport::default());
        self.apply_alpha();
        log::debug!("FastScroller: detached");
    }

    pub fn is_attached(&self) -> bool {
        self.subscriptions.is_some()
    }

    pub fn subscriptions(&self) -> Option<Subscriptions> {
        self.subscriptions
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollerState {
        &self.state
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    pub fn drag_state(&self) -> DragState {
        self.state.drag()
    }

    pub fn animation_phase(&self) -> AnimationPhase {
        self.state.animation_phase()
    }

    /// Current overlay opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.state.fade().opacity()
    }

    /// Paint alpha applied to the resources.
    pub fn alpha(&self) -> u8 {
        self.state.fade().alpha(self.config.max_alpha)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.visibility().is_dragging()
    }

    pub fn is_visible(&self) -> bool {
        self.state.visibility() == Visibility::Visible
    }

    pub fn geometry(&self, axis: Axis) -> &AxisGeometry {
        self.state.geometry(axis)
    }

    /// Whether an auto-hide callback is scheduled.
    pub fn hide_pending(&self) -> bool {
        self.hide_timer.is_some()
    }

    pub fn resources(&self) -> &ScrollbarResources {
        &self.resources
    }

    pub fn vertical_thumb(&self) -> &dyn Paintable {
        self.resources.vertical_thumb.as_ref()
    }

    pub fn horizontal_thumb(&self) -> &dyn Paintable {
        self.resources.horizontal_thumb.as_ref()
    }

    // =========================================================================
    // Visibility state machine
    // =========================================================================

    fn set_visibility<H: ScrollHost + ?Sized>(&mut self, host: &mut H, to: Visibility) {
        let plan = self.state.transition(to);
        if plan.from != plan.to {
            log::debug!("FastScroller: {:?} -> {:?}", plan.from, plan.to);
        }

        if let Some(axis) = plan.released {
            self.thumb_mut(axis.axis()).set_pressed(false);
        }
        if let Some(axis) = plan.pressed {
            self.thumb_mut(axis.axis()).set_pressed(true);
        }
        if plan.cancel_hide {
            self.cancel_hide(host);
        }
        if plan.pressed.is_some() {
            self.observer.call(ScrollerAction::DragStart);
        }
        if plan.redraw {
            self.request_redraw(host);
        }
        if plan.show {
            self.show(host);
        }
        if let Some(delay) = plan.rearm {
            self.reset_hide_delay(host, delay);
        }
        if plan.forced_hide {
            if let Some(outcome) = self.state.fade.snap_out() {
                self.on_animation_end(host, outcome);
            }
            self.apply_alpha();
        }
    }

    fn request_redraw<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        host.invalidate();
        self.observer.call(ScrollerAction::Redraw);
    }

    fn cancel_hide<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(token) = self.hide_timer.take() {
            host.cancel_delayed(token);
        }
    }

    fn reset_hide_delay<H: ScrollHost + ?Sized>(&mut self, host: &mut H, delay: HideDelay) {
        self.cancel_hide(host);
        let duration = match delay {
            HideDelay::AfterVisible => self.config.hide_delay_after_visible(),
            HideDelay::AfterDragging => self.config.hide_delay_after_dragging(),
        };
        self.hide_timer = Some(host.post_delayed(duration));
    }

    /// Delayed callback from the host.
    pub fn on_timer<H: ScrollHost + ?Sized>(&mut self, host: &mut H, token: TimerToken) {
        if self.hide_timer != Some(token) {
            log::trace!("FastScroller: ignoring stale timer {:?}", token);
            return;
        }
        self.hide_timer = None;
        let duration = self.config.hide_duration();
        self.hide(host, duration);
    }

    // =========================================================================
    // Fade animation
    // =========================================================================

    fn show<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        let now = host.now();
        if let Some(outcome) = self.state.fade.show(now) {
            self.on_animation_end(host, outcome);
        }
        if self.state.fade.is_running() {
            host.request_frame();
        }
        self.apply_alpha();
        self.showing_layout_bounds = host.is_showing_layout_bounds();
    }

    /// Start fading out over `duration`. No-op unless fading in or fully in.
    pub fn hide<H: ScrollHost + ?Sized>(&mut self, host: &mut H, duration: Duration) {
        let now = host.now();
        if let Some(outcome) = self.state.fade.hide(duration, now) {
            self.on_animation_end(host, outcome);
        }
        if self.state.fade.is_running() {
            host.request_frame();
        }
    }

    /// Animation frame from the host.
    pub fn on_frame<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if !self.state.fade.is_running() {
            return;
        }
        let outcome = self.state.fade.tick(host.now());
        self.apply_alpha();
        log::trace!("FastScroller: fade tick, alpha {}", self.alpha());
        self.request_redraw(host);

        match outcome {
            Some(outcome) => self.on_animation_end(host, outcome),
            None => host.request_frame(),
        }
    }

    fn on_animation_end<H: ScrollHost + ?Sized>(&mut self, host: &mut H, outcome: AnimationOutcome) {
        match self.state.fade.settle(outcome) {
            Some(FadeSettled::Out) => self.set_visibility(host, Visibility::Hidden),
            Some(FadeSettled::In) => self.request_redraw(host),
            None => log::trace!("FastScroller: fade cancelled, next directive takes over"),
        }
    }

    fn apply_alpha(&mut self) {
        let alpha = self.state.fade().alpha(self.config.max_alpha);
        self.resources.set_alpha(alpha);
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Scroll notification hook. Zero deltas are ignored.
    pub fn on_scrolled<H: ScrollHost + ?Sized>(&mut self, host: &mut H, dx: f32, dy: f32) {
        if dx != 0.0 || dy != 0.0 {
            let offset_x = host.scroll_offset(Axis::Horizontal);
            let offset_y = host.scroll_offset(Axis::Vertical);
            self.update_scroll_position(host, offset_x, offset_y);
        }
    }

    /// Recompute both axes for new scroll offsets and update visibility.
    pub fn update_scroll_position<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        offset_x: f32,
        offset_y: f32,
    ) {
        let viewport = self.state.viewport();
        let params = GeometryParams {
            minimum_range: self.config.minimum_range,
            min_thumb_length: self.config.min_thumb_length,
        };
        let vertical = self.state.vertical.update(
            host.scroll_range(Axis::Vertical),
            &viewport,
            offset_y,
            params,
        );
        let horizontal = self.state.horizontal.update(
            host.scroll_range(Axis::Horizontal),
            &viewport,
            offset_x,
            params,
        );

        if !vertical && !horizontal {
            if self.state.visibility() != Visibility::Hidden {
                self.set_visibility(host, Visibility::Hidden);
            }
            return;
        }
        if matches!(
            self.state.visibility(),
            Visibility::Hidden | Visibility::Visible
        ) {
            self.set_visibility(host, Visibility::Visible);
        }
    }

    /// Whether the vertical bar sits on the left edge.
    fn on_left<H: ScrollHost + ?Sized>(&self, host: &H) -> bool {
        (host.layout_direction() == LayoutDirection::Rtl) == self.config.anchor_at_end
    }

    /// Axis whose thumb is under `point`; horizontal wins where both overlap.
    fn thumb_at<H: ScrollHost + ?Sized>(&self, host: &H, point: Point) -> Option<Axis> {
        let view = self.state.viewport().size;
        let on_left = self.on_left(host);
        if self
            .state
            .horizontal
            .hit_test(point, view, self.horizontal_touch_band, on_left)
        {
            Some(Axis::Horizontal)
        } else if self
            .state
            .vertical
            .hit_test(point, view, self.vertical_touch_band, on_left)
        {
            Some(Axis::Vertical)
        } else {
            None
        }
    }

    fn thumb_mut(&mut self, axis: Axis) -> &mut Box<dyn Paintable> {
        match axis {
            Axis::Vertical => &mut self.resources.vertical_thumb,
            Axis::Horizontal => &mut self.resources.horizontal_thumb,
        }
    }

    // =========================================================================
    // Pointer handling
    // =========================================================================

    /// Decide whether the scroller claims the gesture.
    ///
    /// A press on a visible thumb starts a drag and claims; while dragging
    /// every event is claimed.
    pub fn on_intercept_pointer<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: PointerEvent,
    ) -> bool {
        match self.state.visibility() {
            Visibility::Visible => {
                event.action == PointerAction::Down && self.begin_drag(host, event.position)
            }
            Visibility::Dragging(_) => true,
            Visibility::Hidden => false,
        }
    }

    /// Pointer events for a gesture the scroller has claimed.
    pub fn on_pointer<H: ScrollHost + ?Sized>(&mut self, host: &mut H, event: PointerEvent) {
        if self.state.visibility() == Visibility::Hidden {
            return;
        }
        match event.action {
            PointerAction::Down => {
                self.begin_drag(host, event.position);
            }
            PointerAction::Up | PointerAction::Cancel => {
                if self.is_dragging() {
                    log::debug!("FastScroller: drag ended at {:?}", event.position);
                    self.set_visibility(host, Visibility::Visible);
                }
            }
            PointerAction::Move => {
                if let Some(axis) = self.state.visibility().drag_axis() {
                    self.show(host);
                    self.drag_to(host, axis.axis(), event.position);
                }
            }
        }
    }

    fn begin_drag<H: ScrollHost + ?Sized>(&mut self, host: &mut H, point: Point) -> bool {
        let Some(axis) = self.thumb_at(host, point) else {
            return false;
        };
        let offset = host.scroll_offset(axis);
        self.state
            .geometry_mut(axis)
            .begin_drag(point.along(axis), offset);
        log::debug!(
            "FastScroller: {:?} drag started at {} (offset {})",
            axis,
            point.along(axis),
            offset
        );
        self.set_visibility(host, Visibility::Dragging(axis.into()));
        true
    }

    fn drag_to<H: ScrollHost + ?Sized>(&mut self, host: &mut H, axis: Axis, point: Point) {
        let current = host.scroll_offset(axis);
        let geometry = self.state.geometry(axis);
        if let Some(delta) = geometry.drag_to(point.along(axis), current, self.config.drag_deadband)
        {
            let (dx, dy) = axis.delta(delta);
            host.scroll_by(dx, dy);
        }
    }

    // =========================================================================
    // Overlay paint
    // =========================================================================

    /// Paint the bars over the host content.
    ///
    /// A viewport change since the last pass hides the scroller and draws
    /// nothing; the next scroll update recomputes geometry and shows it again.
    pub fn on_draw_over<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        canvas: &mut dyn Canvas,
    ) -> DrawPass {
        let viewport = host.viewport();
        if viewport != self.state.viewport() {
            log::debug!(
                "FastScroller: viewport changed {:?} -> {:?}, hiding until next scroll",
                self.state.viewport().size,
                viewport.size
            );
            self.state.reset_geometry(viewport);
            self.set_visibility(host, Visibility::Hidden);
            return DrawPass::Resized;
        }
        if self.state.animation_phase() == AnimationPhase::Out {
            return DrawPass::Skipped;
        }

        let on_left = self.on_left(host);
        if self.state.vertical.needed() {
            self.draw_vertical(canvas, on_left);
        }
        if self.state.horizontal.needed() {
            self.draw_horizontal(canvas);
        }
        DrawPass::Drawn
    }

    fn draw_vertical(&mut self, canvas: &mut dyn Canvas, on_left: bool) {
        let view = self.state.viewport().size;
        let geometry = self.state.vertical;
        let thumb_width = self.vertical_thumb_width;

        let track = &mut self.resources.vertical_track;
        track.set_bounds(geometry.track_bounds(view, self.vertical_track_width, on_left));
        track.draw(canvas);

        let thumb_bounds = geometry.thumb_bounds(view, thumb_width, on_left);
        let thumb = &mut self.resources.vertical_thumb;
        if on_left {
            // Mirror the thumb so its shape faces the content.
            canvas.translate(thumb_width, thumb_bounds.y);
            canvas.scale(-1.0, 1.0);
            thumb.set_bounds(thumb_bounds.translate(-thumb_bounds.x, -thumb_bounds.y));
            thumb.draw(canvas);
            canvas.scale(-1.0, 1.0);
            canvas.translate(-thumb_width, -thumb_bounds.y);
        } else {
            thumb.set_bounds(thumb_bounds);
            thumb.draw(canvas);
        }

        if self.showing_layout_bounds {
            canvas.stroke_debug_rect(geometry.thumb_bounds(view, self.vertical_touch_band, on_left));
        }
    }

    fn draw_horizontal(&mut self, canvas: &mut dyn Canvas) {
        let view = self.state.viewport().size;
        let geometry = self.state.horizontal;

        let track = &mut self.resources.horizontal_track;
        track.set_bounds(geometry.track_bounds(view, self.horizontal_track_height, false));
        track.draw(canvas);

        let thumb = &mut self.resources.horizontal_thumb;
        thumb.set_bounds(geometry.thumb_bounds(view, self.horizontal_thumb_height, false));
        thumb.draw(canvas);

        if self.showing_layout_bounds {
            canvas.stroke_debug_rect(geometry.thumb_bounds(view, self.horizontal_touch_band, false));
        }
    }
}

impl std::fmt::Debug for FastScroller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastScroller")
            .field("visibility", &self.state.visibility())
            .field("animation", &self.state.animation_phase())
            .field("attached", &self.is_attached())
            .field("hide_pending", &self.hide_pending())
            .finish()
    }
}
