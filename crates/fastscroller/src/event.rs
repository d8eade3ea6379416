//! Pointer input from the host and notifications to the observer.

use crate::layout::Point;

/// Single-pointer gesture phase delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Pointer pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// Gesture taken away by the host (treated like a release).
    Cancel,
}

/// Pointer event in host view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            position: Point::new(x, y),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Cancel, x, y)
    }

    /// Whether this event ends the current gesture.
    pub fn ends_gesture(&self) -> bool {
        matches!(self.action, PointerAction::Up | PointerAction::Cancel)
    }
}

/// Notifications sent to the optional observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollerAction {
    /// The overlay needs to be painted again.
    Redraw,
    /// A thumb drag began.
    DragStart,
}
