//! The [`Outcome`] disjoint union and its combinator set.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::traits::ErrorDetail;
use crate::types::rail_error::CancelledError;

mod iter;

pub use iter::{IntoIter, Iter};

/// A railway-oriented result carrying either a success value or an error.
///
/// `Outcome<T, E>` has exactly three states: [`Success`](Outcome::Success),
/// [`Failure`](Outcome::Failure), and [`Cancelled`](Outcome::Cancelled). Cancellation
/// is a distinguished sub-case of failure: [`is_failure`](Outcome::is_failure) reports
/// `true` for cancelled outcomes as well, and every failure-channel combinator
/// (`map_err`, `recover`, `inspect_err`, ...) treats the two alike while preserving
/// the discriminant.
///
/// All combinators are total: a non-matching state passes through unchanged rather
/// than panicking, so chains short-circuit on the failure channel. The only panicking
/// operations are the explicitly unchecked accessors ([`unwrap`](Outcome::unwrap),
/// [`expect`](Outcome::expect), [`unwrap_failure`](Outcome::unwrap_failure)).
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, RailError};
///
/// let doubled = Outcome::<i32, RailError>::success(21).map(|x| x * 2);
/// assert_eq!(doubled.into_value(), Some(42));
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
    Cancelled(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let o = Outcome::<i32, RailError>::success(42);
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let o = Outcome::<i32, _>::failure(RailError::not_found("no such user"));
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Creates a cancelled outcome carrying a cancellation-flavoured error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let o: Outcome<i32, RailError> = Outcome::cancelled();
    /// assert!(o.is_cancelled());
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn cancelled() -> Self
    where
        E: From<CancelledError>,
    {
        Self::Cancelled(CancelledError::new().into())
    }

    /// Creates a cancelled outcome naming the cancelled operation.
    ///
    /// The operation name is advisory context on the error; it does not take part
    /// in error equality.
    #[must_use]
    #[inline]
    pub fn cancelled_for(operation: impl Into<String>) -> Self
    where
        E: From<CancelledError>,
    {
        Self::Cancelled(CancelledError::for_operation(operation).into())
    }

    /// Runs a fallible closure, capturing its result as an outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let o = Outcome::from_fn(|| "17".parse::<i32>().map_err(|e| RailError::validation(e.to_string())));
    /// assert_eq!(o.into_value(), Some(17));
    /// ```
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        Self::from_result(f())
    }

    /// Converts a `Result` into an outcome.
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts into a `Result`, folding cancellation into the error side.
    ///
    /// This is the inverse of the future-bridging constructors: a `Success` becomes
    /// `Ok` and both failure states become `Err`. Re-importing the `Result` yields a
    /// plain `Failure` since `Result` has no third state.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) | Self::Cancelled(error) => Err(error),
        }
    }

    /// Returns `true` if the outcome is a success.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is a failure, including cancellation.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` if the outcome was cancelled.
    #[must_use]
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }

    /// Returns a reference to the success value, if any.
    #[must_use]
    #[inline]
    pub fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference to the error, if any.
    ///
    /// Both `Failure` and `Cancelled` report their error here.
    #[must_use]
    #[inline]
    pub fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) | Self::Cancelled(error) => Some(error),
        }
    }

    /// Extracts the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Extracts the error, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) | Self::Cancelled(error) => Some(error),
        }
    }

    /// Returns the success value, panicking on failure.
    ///
    /// Unchecked access signals programmer error, not a data-level failure; prefer
    /// [`fold`](Outcome::fold), [`unwrap_or`](Outcome::unwrap_or), or
    /// [`into_result`](Outcome::into_result) at boundaries.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Failure` or `Cancelled`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::unwrap()` on a `Failure` value: {error:?}")
            }
            Self::Cancelled(error) => {
                panic!("called `Outcome::unwrap()` on a `Cancelled` value: {error:?}")
            }
        }
    }

    /// Returns the success value, panicking with `msg` on failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Failure` or `Cancelled`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) | Self::Cancelled(error) => panic!("{msg}: {error:?}"),
        }
    }

    /// Returns the error, panicking on success.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: core::fmt::Debug,
    {
        match self {
            Self::Success(value) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value: {value:?}")
            }
            Self::Failure(error) | Self::Cancelled(error) => error,
        }
    }

    /// Maps the success value, leaving the failure channel untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let o = Outcome::<i32, RailError>::success(2).map(|x| x + 1);
    /// assert_eq!(o.into_value(), Some(3));
    ///
    /// let e = Outcome::<i32, _>::failure(RailError::technical("boom")).map(|x| x + 1);
    /// assert!(e.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Cancelled(error) => Outcome::Cancelled(error),
        }
    }

    /// Maps the success value through a fallible closure.
    ///
    /// A closure error lands on the failure channel; the failure channel itself
    /// passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let o = Outcome::<&str, RailError>::success("not a number")
    ///     .try_map(|s| s.parse::<i32>().map_err(|e| RailError::validation(e.to_string())));
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn try_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => Outcome::from_result(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Cancelled(error) => Outcome::Cancelled(error),
        }
    }

    /// Maps the error, preserving the discriminant.
    ///
    /// A `Cancelled` outcome stays cancelled even when its error is rewritten.
    #[must_use]
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
            Self::Cancelled(error) => Outcome::Cancelled(f(error)),
        }
    }

    /// Chains a computation that itself produces an outcome.
    ///
    /// The closure's outcome is returned as-is, without re-wrapping, so nested
    /// failures surface unchanged. This is the monadic bind underpinning the
    /// identity and associativity laws of the type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// fn half(x: i32) -> Outcome<i32, RailError> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure(RailError::business_rule("odd input"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).and_then(half).into_value(), Some(2));
    /// assert!(Outcome::success(3).and_then(half).is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Cancelled(error) => Outcome::Cancelled(error),
        }
    }

    /// Observes the success value without consuming it.
    ///
    /// The outcome is returned unchanged. As a pure observation hook the closure is
    /// not a transform boundary: a panic inside it propagates to the caller.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Observes the error (failure or cancellation) without consuming it.
    ///
    /// The outcome is returned unchanged; panics inside the closure propagate.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        match &self {
            Self::Failure(error) | Self::Cancelled(error) => f(error),
            Self::Success(_) => {}
        }
        self
    }

    /// Collapses the outcome by invoking exactly one of the two branches.
    ///
    /// Cancellation takes the failure branch. This is the terminal used to leave the
    /// outcome world.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let text = Outcome::<i32, RailError>::success(10)
    ///     .fold(|v| format!("got {v}"), |e| format!("failed: {e}"));
    /// assert_eq!(text, "got 10");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) | Self::Cancelled(error) => on_failure(error),
        }
    }

    /// Returns the success value or the supplied default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            _ => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) | Self::Cancelled(error) => f(error),
        }
    }

    /// Attempts recovery from the failure channel.
    ///
    /// A success passes through; a failure or cancellation delegates to `f`, which
    /// may substitute any outcome, including another failure to remain unrecovered.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let o = Outcome::<i32, _>::failure(RailError::not_found("missing"))
    ///     .recover(|_| Outcome::success(0));
    /// assert_eq!(o.into_value(), Some(0));
    /// ```
    #[must_use]
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) | Self::Cancelled(error) => f(error),
        }
    }

    /// Returns `self` on success, otherwise the already-constructed alternative.
    ///
    /// The alternative is an eager value, so its construction cost is paid by the
    /// caller even when unused; use [`recover`](Outcome::recover) when the fallback
    /// is expensive to build.
    #[must_use]
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            _ => alternative,
        }
    }

    /// Serializes to the wire shape `{ success, value?, error? }`.
    ///
    /// Only the error's name and message cross this boundary; the causal chain does
    /// not. Success values that cannot be represented as JSON serialize as `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    /// use serde_json::json;
    ///
    /// let ok = Outcome::<i32, RailError>::success(7);
    /// assert_eq!(ok.to_json(), json!({ "success": true, "value": 7 }));
    ///
    /// let err = Outcome::<i32, _>::failure(RailError::not_found("no row"));
    /// assert_eq!(
    ///     err.to_json(),
    ///     json!({ "success": false, "error": { "name": "NotFoundError", "message": "no row" } }),
    /// );
    /// ```
    #[must_use]
    pub fn to_json(&self) -> Value
    where
        T: Serialize,
        E: ErrorDetail,
    {
        match self {
            Self::Success(value) => json!({
                "success": true,
                "value": serde_json::to_value(value).unwrap_or(Value::Null),
            }),
            Self::Failure(error) | Self::Cancelled(error) => json!({
                "success": false,
                "error": { "name": error.name(), "message": error.message() },
            }),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: ErrorDetail,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            name: &'a str,
            message: String,
        }

        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Self::Success(value) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("value", value)?;
            }
            Self::Failure(error) | Self::Cancelled(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field(
                    "error",
                    &ErrorBody { name: error.name(), message: error.message() },
                )?;
            }
        }
        state.end()
    }
}
