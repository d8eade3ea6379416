//! Optional observer hook.
//!
//! The scroller reports [`ScrollerAction`](crate::ScrollerAction)s to whoever
//! embeds it. Instead of storing `Option<Box<dyn Fn(T) -> M>>` directly, the
//! scroller keeps a `Callback<T, M>` which can be empty.
//!
//! # Examples
//!
//! ```
//! use fastscroller::{Callback, ScrollerAction};
//!
//! let cb: Callback<ScrollerAction> = Callback::new(|action| {
//!     if action == ScrollerAction::DragStart {
//!         // e.g. haptic feedback
//!     }
//! });
//! assert!(cb.call(ScrollerAction::Redraw).is_some());
//! ```

use std::fmt;

/// A callback wrapper that may or may not hold a handler.
///
/// - `T`: the value handed to the callback
/// - `M`: what the callback returns (unit for plain observers)
pub struct Callback<T, M = ()> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `None` when no handler is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("is_some", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_callback_none() {
        let cb: Callback<i32> = Callback::none();
        assert!(!cb.is_some());
        assert_eq!(cb.call(1), None);
    }

    #[test]
    fn test_callback_records_values() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let cb: Callback<i32> = Callback::new(move |v| sink.borrow_mut().push(v));
        cb.call(3);
        cb.call(7);
        assert_eq!(*seen.borrow(), vec![3, 7]);
    }
}
