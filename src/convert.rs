//! Adapters between external parsers and [`Outcome`].
//!
//! The conversions to and from `std::result::Result` live on [`Outcome`] itself
//! (and on the [`IntoOutcome`](crate::IntoOutcome) extension trait); this module
//! wraps external schema validators and deserializers so their failures surface
//! as Validation-kind errors.

use core::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{Outcome, RailError};

/// Wraps an external parse function into an outcome-producing validator.
///
/// Any schema library exposing a `(&Value) -> Result<T, E>` parse entry point can
/// be adapted this way; its error's display form becomes the message of a
/// Validation-kind [`RailError`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::adapt_parser;
/// use serde_json::{json, Value};
///
/// let parse_id = adapt_parser(|value: &Value| {
///     value.as_u64().ok_or("id must be an unsigned integer")
/// });
///
/// assert_eq!(parse_id(&json!(7)).into_value(), Some(7));
/// assert!(parse_id(&json!("seven")).is_failure());
/// ```
pub fn adapt_parser<T, E, F>(parse: F) -> impl Fn(&Value) -> Outcome<T, RailError>
where
    F: Fn(&Value) -> Result<T, E>,
    E: Display,
{
    move |value| match parse(value) {
        Ok(parsed) => Outcome::Success(parsed),
        Err(error) => Outcome::Failure(RailError::validation(error.to_string())),
    }
}

/// Deserializes a JSON value into `T`, reporting failures as validation errors.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_value;
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct User {
///     name: String,
/// }
///
/// let user: outcome_rail::Outcome<User, _> = from_value(&json!({ "name": "ada" }));
/// assert_eq!(user.into_value(), Some(User { name: "ada".into() }));
///
/// let bad: outcome_rail::Outcome<User, _> = from_value(&json!({ "name": 5 }));
/// assert!(bad.is_failure());
/// ```
pub fn from_value<T>(value: &Value) -> Outcome<T, RailError>
where
    T: DeserializeOwned,
{
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Outcome::Success(parsed),
        Err(error) => Outcome::Failure(RailError::validation(error.to_string())),
    }
}
