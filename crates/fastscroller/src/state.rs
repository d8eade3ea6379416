//! Composite scroller state.
//!
//! Visibility, drag axis and fade phase are three overlapping dimensions. The
//! drag axis lives inside [`Visibility::Dragging`], so "dragging an axis" and
//! "in the dragging state" cannot disagree. All visibility changes go through
//! [`ScrollerState::transition`], which returns the side effects the caller
//! must perform on the host.

use serde::Serialize;

use crate::animation::{AnimationPhase, FadeAnimator};
use crate::geometry::AxisGeometry;
use crate::host::Viewport;
use crate::layout::Axis;

/// Which thumb is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragAxis {
    Horizontal,
    Vertical,
}

impl DragAxis {
    pub fn axis(&self) -> Axis {
        match self {
            DragAxis::Horizontal => Axis::Horizontal,
            DragAxis::Vertical => Axis::Vertical,
        }
    }
}

impl From<Axis> for DragAxis {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => DragAxis::Horizontal,
            Axis::Vertical => DragAxis::Vertical,
        }
    }
}

/// Flat view of the drag dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragState {
    #[default]
    None,
    DraggingHorizontal,
    DraggingVertical,
}

/// Interaction state of the scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Not shown; pointer events pass through
    #[default]
    Hidden,
    /// Shown and following the scroll position
    Visible,
    /// A thumb is held by the pointer
    Dragging(DragAxis),
}

impl Visibility {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Visibility::Dragging(_))
    }

    pub fn drag(&self) -> DragState {
        match self {
            Visibility::Dragging(DragAxis::Horizontal) => DragState::DraggingHorizontal,
            Visibility::Dragging(DragAxis::Vertical) => DragState::DraggingVertical,
            Visibility::Hidden | Visibility::Visible => DragState::None,
        }
    }

    pub fn drag_axis(&self) -> Option<DragAxis> {
        match self {
            Visibility::Dragging(axis) => Some(*axis),
            Visibility::Hidden | Visibility::Visible => None,
        }
    }
}

/// Auto-hide delay to arm after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideDelay {
    AfterVisible,
    AfterDragging,
}

/// Side effects of a visibility transition, in the order they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Visibility,
    pub to: Visibility,
    /// Thumb to show pressed; drag start must be reported
    pub pressed: Option<DragAxis>,
    /// Thumb to release
    pub released: Option<DragAxis>,
    /// Pending auto-hide must be cancelled
    pub cancel_hide: bool,
    /// Visibility value changed; a repaint is due
    pub redraw: bool,
    /// Fade must move towards visible
    pub show: bool,
    /// Auto-hide delay to (re)arm
    pub rearm: Option<HideDelay>,
    /// Entered `Hidden` from a shown state; the fade snaps out
    pub forced_hide: bool,
}

impl Transition {
    /// Work out the effects of moving from `from` to `to`.
    pub fn plan(from: Visibility, to: Visibility) -> Self {
        let entering_drag = to.is_dragging() && from.drag_axis() != to.drag_axis();
        let leaving_drag = from.is_dragging() && from.drag_axis() != to.drag_axis();
        let hiding = to == Visibility::Hidden && from != Visibility::Hidden;

        let rearm = if leaving_drag && to == Visibility::Visible {
            Some(HideDelay::AfterDragging)
        } else if !leaving_drag && to == Visibility::Visible {
            Some(HideDelay::AfterVisible)
        } else {
            None
        };

        Self {
            from,
            to,
            pressed: if entering_drag { to.drag_axis() } else { None },
            released: if leaving_drag { from.drag_axis() } else { None },
            cancel_hide: entering_drag || hiding,
            redraw: from != to,
            show: to != Visibility::Hidden,
            rearm,
            forced_hide: hiding,
        }
    }
}

/// All mutable scroller state, owned by the widget.
#[derive(Debug, Clone)]
pub struct ScrollerState {
    visibility: Visibility,
    pub(crate) fade: FadeAnimator,
    pub(crate) vertical: AxisGeometry,
    pub(crate) horizontal: AxisGeometry,
    /// Last observed host viewport, used to detect resizes
    pub(crate) viewport: Viewport,
}

impl ScrollerState {
    pub fn new(fade: FadeAnimator) -> Self {
        Self {
            visibility: Visibility::Hidden,
            fade,
            vertical: AxisGeometry::new(Axis::Vertical),
            horizontal: AxisGeometry::new(Axis::Horizontal),
            viewport: Viewport::default(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn drag(&self) -> DragState {
        self.visibility.drag()
    }

    pub fn animation_phase(&self) -> AnimationPhase {
        self.fade.phase()
    }

    pub fn fade(&self) -> &FadeAnimator {
        &self.fade
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn geometry(&self, axis: Axis) -> &AxisGeometry {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    pub(crate) fn geometry_mut(&mut self, axis: Axis) -> &mut AxisGeometry {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }

    /// Whether any axis currently needs a bar.
    pub fn any_needed(&self) -> bool {
        self.vertical.needed() || self.horizontal.needed()
    }

    /// The single place visibility changes.
    pub fn transition(&mut self, to: Visibility) -> Transition {
        let plan = Transition::plan(self.visibility, to);
        self.visibility = to;
        plan
    }

    /// Return to defaults after a size change: geometry is forgotten and the
    /// cached viewport replaced. Visibility is left to the caller's transition.
    pub fn reset_geometry(&mut self, viewport: Viewport) {
        self.vertical.reset();
        self.horizontal.reset();
        self.viewport = viewport;
    }
}
