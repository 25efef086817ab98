//! Asynchronous combinators on [`Outcome`].

use core::future::Future;

use tokio_util::sync::CancellationToken;

use crate::async_ext::Cancellable;
use crate::types::rail_error::CancelledError;
use crate::types::Outcome;

impl<T, E> Outcome<T, E> {
    /// Awaits a future and captures its result as an outcome.
    ///
    /// Together with [`into_result`](Outcome::into_result) this forms the bridge
    /// between outcome pipelines and plain async code:
    /// `Outcome::from_future(async { outcome.into_result() })` round-trips
    /// successes and failures exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let outcome = Outcome::from_future(async { Ok::<_, RailError>(21) }).await;
    /// assert_eq!(outcome.into_value(), Some(21));
    /// # }
    /// ```
    pub async fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>>,
    {
        Self::from_result(future.await)
    }

    /// Awaits a future unless `cancel` triggers first.
    ///
    /// A token already triggered at entry yields a cancelled outcome without the
    /// future ever being polled; a token triggering mid-flight drops the future
    /// and yields a cancelled outcome. The settlement the abandoned work would
    /// have produced is irrelevant to the returned outcome.
    pub async fn from_future_cancellable<Fut>(future: Fut, cancel: &CancellationToken) -> Self
    where
        Fut: Future<Output = Result<T, E>>,
        E: From<CancelledError>,
    {
        if cancel.is_cancelled() {
            return Self::Cancelled(CancelledError::new().into());
        }
        match Cancellable::new(future, cancel).await {
            Ok(result) => Self::from_result(result),
            Err(cancelled) => Self::Cancelled(cancelled.into()),
        }
    }

    /// Asynchronous counterpart of [`map`](Outcome::map).
    ///
    /// The mapper's error lands on the failure channel; a non-success outcome
    /// passes through without the mapper being invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let outcome = Outcome::<i32, RailError>::success(2)
    ///     .map_async(|x| async move { Ok(x * 2) })
    ///     .await;
    /// assert_eq!(outcome.into_value(), Some(4));
    /// # }
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Self::Success(value) => Outcome::from_result(f(value).await),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Cancelled(error) => Outcome::Cancelled(error),
        }
    }

    /// [`map_async`](Outcome::map_async) with a cancellation short-circuit.
    ///
    /// A token already triggered at entry yields a cancelled outcome and the
    /// mapper is never invoked; a token triggering while the mapper's future is
    /// in flight drops that future and yields a cancelled outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    /// use tokio_util::sync::CancellationToken;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let token = CancellationToken::new();
    /// token.cancel();
    ///
    /// let outcome = Outcome::<i32, RailError>::success(2)
    ///     .map_async_cancellable(|x| async move { Ok(x * 2) }, &token)
    ///     .await;
    /// assert!(outcome.is_cancelled());
    /// # }
    /// ```
    pub async fn map_async_cancellable<U, F, Fut>(
        self,
        f: F,
        cancel: &CancellationToken,
    ) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
        E: From<CancelledError>,
    {
        match self {
            Self::Success(value) => {
                if cancel.is_cancelled() {
                    return Outcome::Cancelled(CancelledError::new().into());
                }
                match Cancellable::new(f(value), cancel).await {
                    Ok(result) => Outcome::from_result(result),
                    Err(cancelled) => Outcome::Cancelled(cancelled.into()),
                }
            }
            Self::Failure(error) => Outcome::Failure(error),
            Self::Cancelled(error) => Outcome::Cancelled(error),
        }
    }

    /// Asynchronous counterpart of [`and_then`](Outcome::and_then).
    ///
    /// The closure's outcome is returned as-is, without re-wrapping.
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(error) => Outcome::Failure(error),
            Self::Cancelled(error) => Outcome::Cancelled(error),
        }
    }

    /// [`and_then_async`](Outcome::and_then_async) with a cancellation
    /// short-circuit, mirroring
    /// [`map_async_cancellable`](Outcome::map_async_cancellable).
    pub async fn and_then_async_cancellable<U, F, Fut>(
        self,
        f: F,
        cancel: &CancellationToken,
    ) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
        E: From<CancelledError>,
    {
        match self {
            Self::Success(value) => {
                if cancel.is_cancelled() {
                    return Outcome::Cancelled(CancelledError::new().into());
                }
                match Cancellable::new(f(value), cancel).await {
                    Ok(outcome) => outcome,
                    Err(cancelled) => Outcome::Cancelled(cancelled.into()),
                }
            }
            Self::Failure(error) => Outcome::Failure(error),
            Self::Cancelled(error) => Outcome::Cancelled(error),
        }
    }
}
