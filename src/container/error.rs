//! Error types for the container boundaries.
//!
//! This module provides the error type produced when a panicking
//! computation is captured as a value by
//! [`Outcome::catch_panic`](super::Outcome::catch_panic).

use std::any::Any;

/// A panic captured at the [`catch_panic`](super::Outcome::catch_panic)
/// boundary.
///
/// The panic payload is normalized into a message so the error channel's
/// type stays consistent regardless of what was panicked with: `&str` and
/// `String` payloads become the message verbatim, anything else a fixed
/// fallback.
///
/// # Examples
///
/// ```rust
/// use totality::container::Outcome;
///
/// let caught = Outcome::catch_panic(|| -> i32 { panic!("boom") });
/// let error = caught.into_result().unwrap_err();
/// assert_eq!(error.message(), "boom");
/// assert_eq!(format!("{}", error), "panicked: boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    const OPAQUE_PAYLOAD_MESSAGE: &'static str = "panic payload of unknown type";

    /// Normalizes a raw panic payload into a `CaughtPanic`.
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload.downcast_ref::<&str>().map_or_else(
            || {
                payload
                    .downcast_ref::<String>()
                    .map_or_else(|| Self::OPAQUE_PAYLOAD_MESSAGE.to_string(), Clone::clone)
            },
            |text| (*text).to_string(),
        );

        Self { message }
    }

    /// Returns the normalized panic message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use totality::container::Outcome;
    ///
    /// let caught = Outcome::catch_panic(|| -> i32 { panic!("invalid json") });
    /// let error = caught.into_result().unwrap_err();
    /// assert_eq!(error.message(), "invalid json");
    /// ```
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl std::error::Error for CaughtPanic {}
