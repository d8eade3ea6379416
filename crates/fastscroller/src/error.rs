//! Error types for scroller construction and attachment.

use thiserror::Error;

/// Errors raised while building or attaching a [`FastScroller`](crate::FastScroller).
///
/// Event handlers never fail; only setup paths return these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollerError {
    /// A configuration value is out of range
    #[error("Invalid config field '{field}': {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// `attach` was called while a host is still attached
    #[error("Scroller is already attached to a host; detach it first")]
    AlreadyAttached,
}

/// Result type for scroller setup operations.
pub type ScrollerResult<T> = Result<T, ScrollerError>;
