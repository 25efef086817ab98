//! Core types: the [`Outcome`] union and the error taxonomy.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, RailError};
//!
//! let outcome = Outcome::<i32, RailError>::success(5)
//!     .map(|x| x * 2)
//!     .and_then(|x| {
//!         if x > 8 {
//!             Outcome::success(x)
//!         } else {
//!             Outcome::failure(RailError::business_rule("too small"))
//!         }
//!     });
//!
//! assert_eq!(outcome.into_value(), Some(10));
//! ```
use smallvec::SmallVec;

pub mod outcome;
pub mod rail_error;

pub use outcome::Outcome;
pub use rail_error::{CancelledError, ErrorKind, RailError};

/// SmallVec-backed list used for accumulating validation messages.
///
/// Inline storage covers the common case of a handful of errors without touching
/// the heap.
pub type ErrorVec<E> = SmallVec<[E; 4]>;
