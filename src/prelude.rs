//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`RailError`], [`ErrorKind`], [`CancelledError`],
//!   [`Validator`]
//! - **Traits**: [`IntoOutcome`], [`ErrorDetail`]
//! - With the `async` feature: [`CancellableExt`], [`CancellationToken`]
//! - With the `tracing` feature: [`OutcomeTraceExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//! use serde_json::json;
//!
//! let payload = json!({ "email": "user@example.com" });
//! let checked = Validator::new(&payload)
//!     .property("email", |email| email.required().email())
//!     .validate()
//!     .map(|value| value.clone());
//!
//! assert!(checked.is_success());
//! ```

// Core types
pub use crate::types::{CancelledError, ErrorKind, Outcome, RailError};

// Validation
pub use crate::validation::Validator;

// Traits
pub use crate::traits::{ErrorDetail, IntoOutcome};

#[cfg(feature = "async")]
pub use crate::async_ext::{Cancellable, CancellableExt, CancellationToken};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTraceExt;

/// Result alias for functions that fail with the crate's error taxonomy.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude::*;
///
/// fn find_user(id: u64) -> RailResult<String> {
///     if id == 0 {
///         Outcome::failure(RailError::not_found("user 0 does not exist"))
///     } else {
///         Outcome::success(format!("user-{id}"))
///     }
/// }
///
/// assert!(find_user(0).is_failure());
/// ```
pub type RailResult<T> = Outcome<T, RailError>;
