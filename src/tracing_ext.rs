//! Tracing integration for outcome pipelines.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use crate::types::Outcome;

/// Extension trait emitting tracing events for each outcome state.
///
/// Like [`inspect`](Outcome::inspect), this is a pure observation hook: the
/// outcome is returned unchanged, so the call can sit anywhere in a chain.
///
/// # Examples
///
/// ```
/// use outcome_rail::tracing_ext::OutcomeTraceExt;
/// use outcome_rail::{Outcome, RailError};
///
/// let outcome = Outcome::<i32, _>::failure(RailError::not_found("no such order"))
///     .traced("load_order")
///     .recover(|_| Outcome::success(0));
///
/// assert_eq!(outcome.into_value(), Some(0));
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Logs this outcome under the given operation name and returns it unchanged.
    ///
    /// Successes log at trace level, cancellations at debug, failures at warn.
    #[must_use]
    fn traced(self, operation: &str) -> Self;
}

impl<T, E> OutcomeTraceExt for Outcome<T, E>
where
    E: Display,
{
    fn traced(self, operation: &str) -> Self {
        match &self {
            Outcome::Success(_) => {
                tracing::trace!(operation, "operation succeeded");
            }
            Outcome::Cancelled(error) => {
                tracing::debug!(operation, error = %error, "operation cancelled");
            }
            Outcome::Failure(error) => {
                tracing::warn!(operation, error = %error, "operation failed");
            }
        }
        self
    }
}
