//! Error type returned when extracting from an empty [`Optional`].
//!
//! [`Optional`]: crate::Optional

use thiserror::Error;

/// The error produced by [`Optional::expect`] and [`Optional::unwrap`] when
/// called on an [`Empty`] container.
///
/// Absence is reported as a value rather than a panic, so callers can treat
/// a missing value as a normal branch in composed pipelines.
///
/// [`Optional::expect`]: crate::Optional::expect
/// [`Optional::unwrap`]: crate::Optional::unwrap
/// [`Empty`]: crate::Optional::Empty
///
/// # Examples
///
/// ```
/// use optional_std::{EmptyValueError, Optional};
///
/// let x: Optional<u32> = Optional::Empty;
/// let err: EmptyValueError = x.expect("missing id").unwrap_err();
/// assert_eq!(err.to_string(), "missing id");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct EmptyValueError {
    message: String,
}

impl EmptyValueError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        EmptyValueError {
            message: message.into(),
        }
    }

    /// The human-readable description carried by this error.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}
