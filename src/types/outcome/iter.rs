use crate::types::outcome::Outcome;

/// Borrowing iterator over the success value (zero or one items).
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over the success value (zero or one items).
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> Outcome<T, E> {
    /// Iterates over the success value, yielding nothing on failure.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.success_ref() }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects a sequence of outcomes into an outcome of a `Vec`.
///
/// The first non-success outcome short-circuits the collection, preserving its
/// discriminant: a cancelled element yields a cancelled collection.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, RailError};
///
/// let all: Outcome<Vec<i32>, RailError> =
///     (1..=3).map(Outcome::success).collect();
/// assert_eq!(all.into_value(), Some(vec![1, 2, 3]));
/// ```
impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let iter = iter.into_iter();
        let mut values = Vec::with_capacity(iter.size_hint().0);
        for outcome in iter {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(error) => return Outcome::Failure(error),
                Outcome::Cancelled(error) => return Outcome::Cancelled(error),
            }
        }
        Outcome::Success(values)
    }
}
