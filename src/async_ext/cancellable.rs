//! Future wrapper racing a computation against a cancellation token.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

use crate::types::rail_error::CancelledError;

pin_project! {
    /// A future that resolves early when its cancellation token triggers.
    ///
    /// The token is polled before the inner future on every wake, so a token that
    /// triggers while the work is in flight wins the race and the wrapper resolves
    /// to `Err(CancelledError)`. The inner future is dropped at that point; the
    /// token itself never preempts work, it only decides what this wrapper
    /// resolves to.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::async_ext::CancellableExt;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let token = CancellationToken::new();
    /// let result = async { 7 }.with_cancellation(&token).await;
    /// assert_eq!(result.ok(), Some(7));
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Cancellable<'a, F> {
        #[pin]
        future: F,
        #[pin]
        cancelled: WaitForCancellationFuture<'a>,
        finished: bool,
    }
}

impl<'a, F> Cancellable<'a, F>
where
    F: Future,
{
    /// Wraps `future` so it races against `token`.
    #[inline]
    pub fn new(future: F, token: &'a CancellationToken) -> Self {
        Self { future, cancelled: token.cancelled(), finished: false }
    }
}

impl<F> Future for Cancellable<'_, F>
where
    F: Future,
{
    type Output = Result<F::Output, CancelledError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if this.cancelled.poll(cx).is_ready() {
            *this.finished = true;
            return Poll::Ready(Err(CancelledError::new()));
        }

        match this.future.poll(cx) {
            Poll::Ready(value) => {
                *this.finished = true;
                Poll::Ready(Ok(value))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F> FusedFuture for Cancellable<'_, F>
where
    F: Future,
{
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

/// Extension trait attaching a cancellation token to any future.
///
/// # Examples
///
/// ```
/// use outcome_rail::async_ext::CancellableExt;
/// use tokio_util::sync::CancellationToken;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let token = CancellationToken::new();
/// token.cancel();
///
/// let result = async { 7 }.with_cancellation(&token).await;
/// assert!(result.is_err());
/// # }
/// ```
pub trait CancellableExt: Future + Sized {
    /// Races this future against `token`.
    fn with_cancellation(self, token: &CancellationToken) -> Cancellable<'_, Self> {
        Cancellable::new(self, token)
    }
}

impl<F> CancellableExt for F where F: Future {}
