//! Extension trait bridging `std::result::Result` into [`Outcome`].

use crate::types::Outcome;

/// Adds `.into_outcome()` to `Result` for ergonomic entry into railway chains.
///
/// # Examples
///
/// ```
/// use outcome_rail::{IntoOutcome, RailError};
///
/// let outcome = "21"
///     .parse::<i32>()
///     .map_err(|e| RailError::validation(e.to_string()))
///     .into_outcome()
///     .map(|x| x * 2);
///
/// assert_eq!(outcome.into_value(), Some(42));
/// ```
pub trait IntoOutcome<T, E> {
    /// Converts into an [`Outcome`].
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}
