//! fastscroller - A draggable, auto-hiding scrollbar overlay
//!
//! A [`FastScroller`] decorates a scrollable host view with a thumb and track
//! per axis. The bars fade in when the content scrolls, fade out after a
//! period of inactivity, and can be dragged to scroll quickly. The host is
//! reached through the [`ScrollHost`] trait and paints through [`Canvas`].

mod animation;
mod callback;
mod config;
pub mod constants;
mod error;
mod event;
mod geometry;
pub mod headless;
mod host;
mod layout;
mod renderer;
mod scroller;
mod state;

#[cfg(test)]
mod tests;

pub use animation::{
    AnimationOutcome, AnimationPhase, Easing, FadeAnimator, FadeSettled, ValueAnimator,
};
pub use callback::Callback;
pub use config::ScrollerConfig;
pub use error::{ScrollerError, ScrollerResult};
pub use event::{PointerAction, PointerEvent, ScrollerAction};
pub use geometry::{
    clamp_scroll_offset, drag_scroll_delta, is_scroll_needed, thumb_center, thumb_length,
    AxisGeometry, GeometryParams,
};
pub use host::{HostHook, ScrollHost, SubscriptionId, TimerToken, Viewport};
pub use layout::{Axis, Bounds, LayoutDirection, Padding, Point, Size};
pub use renderer::{Canvas, Color, Paintable, ScrollbarResources, SolidPaintable};
pub use scroller::{DrawPass, FastScroller, Subscriptions};
pub use state::{DragAxis, DragState, HideDelay, ScrollerState, Transition, Visibility};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::ScrollerConfig;
    pub use crate::event::{PointerAction, PointerEvent, ScrollerAction};
    pub use crate::host::{HostHook, ScrollHost, Viewport};
    pub use crate::layout::{Axis, LayoutDirection, Padding, Point, Size};
    pub use crate::renderer::{Canvas, Color, Paintable, ScrollbarResources};
    pub use crate::scroller::{DrawPass, FastScroller};
    pub use crate::state::{DragState, Visibility};
}
