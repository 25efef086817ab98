//! Asynchronous bridging between futures and [`Outcome`](crate::Outcome).
//!
//! Cancellation here is advisory: a [`CancellationToken`] already triggered at
//! entry short-circuits to a cancelled outcome without the supplied closure ever
//! running, and a token triggering mid-flight determines which outcome is
//! surfaced — it never preempts work that does not observe it.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, RailError};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let token = CancellationToken::new();
//! token.cancel();
//!
//! let outcome = Outcome::<i32, RailError>::success(5)
//!     .map_async_cancellable(|x| async move { Ok(x * 2) }, &token)
//!     .await;
//!
//! assert!(outcome.is_cancelled());
//! # }
//! ```

mod cancellable;
mod outcome_async;

pub use cancellable::{Cancellable, CancellableExt};

pub use tokio_util::sync::CancellationToken;
