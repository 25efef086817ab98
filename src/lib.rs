//! Railway-oriented outcome handling: an explicit success/failure/cancelled
//! union, composable transformation chains, cooperative cancellation for async
//! work, and a fluent validator that accumulates path-qualified errors.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Railway Pipeline
//!
//! ```
//! use outcome_rail::{Outcome, RailError};
//!
//! let shipped = Outcome::<i32, RailError>::success(5)
//!     .map(|x| x * 2)
//!     .and_then(|x| {
//!         if x > 8 {
//!             Outcome::success(x)
//!         } else {
//!             Outcome::failure(RailError::business_rule("too small"))
//!         }
//!     })
//!     .fold(|v| format!("shipped {v}"), |e| format!("rejected: {e}"));
//!
//! assert_eq!(shipped, "shipped 10");
//! ```
//!
//! ## Accumulating Validation
//!
//! ```
//! use outcome_rail::Validator;
//! use serde_json::json;
//!
//! let signup = json!({ "name": "", "age": 10 });
//! let result = Validator::new(&signup)
//!     .property("name", |name| name.not_empty())
//!     .property("age", |age| age.min(18.0))
//!     .validate();
//!
//! assert_eq!(
//!     result.into_error().unwrap().to_string(),
//!     "name cannot be empty, age must be at least 18",
//! );
//! ```
//!
//! ## Cooperative Cancellation
//!
//! ```rust,ignore
//! use outcome_rail::{Outcome, RailError};
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let outcome = Outcome::<Order, RailError>::success(order)
//!     .map_async_cancellable(|o| enrich(o), &token)
//!     .await;
//! ```

/// Adapters between external parsers and the outcome type
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits consumed by the core
pub mod traits;
/// The outcome union and the error taxonomy
pub mod types;
/// Fluent, path-tracking validation
pub mod validation;

/// Async bridging with cooperative cancellation (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tracing hooks for outcome pipelines (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::{ErrorDetail, IntoOutcome};
pub use types::{CancelledError, ErrorKind, ErrorVec, Outcome, RailError};
pub use validation::{PathSegment, PathStack, Validator};
