use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::types::{ErrorVec, Outcome, RailError};
use crate::validation::path::{PathSegment, PathStack};

const REQUIRED: &str = "{path} is required";
const NOT_EMPTY: &str = "{path} cannot be empty";
const MIN_LENGTH: &str = "{path} must be at least {n} characters";
const MAX_LENGTH: &str = "{path} must be at most {n} characters";
const IS_NUMBER: &str = "{path} must be a number";
const MIN: &str = "{path} must be at least {n}";
const MAX: &str = "{path} must be at most {n}";
const EMAIL: &str = "{path} must be a valid email address";
const MATCHES: &str = "{path} has an invalid format";
const ONE_OF: &str = "{path} must be one of the allowed values";
const MISSING_OR_NULL: &str = "{path} is missing or null";
const NOT_AN_ARRAY: &str = "{path} is not an array";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
    })
}

/// Renders bound values without a trailing `.0` on whole numbers.
fn format_bound(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Chainable rule-builder that validates a value and its nested fields.
///
/// A validator walks a borrowed [`serde_json::Value`], evaluating predicate rules
/// against the currently focused location and accumulating every error it finds
/// rather than stopping at the first. Each error message is recorded with the
/// dot/bracket-joined path of the failing location (`address.street`,
/// `items[2].price`), or `value` for the top-level datum.
///
/// Rules are type-guarded, not type-enforcing: a rule whose runtime type does not
/// match the focused value ([`max_length`](Validator::max_length) on a number, say)
/// passes silently. Only [`required`](Validator::required) asserts presence, and
/// only [`is_number`](Validator::is_number) asserts numeric-ness, because the type
/// condition is the rule itself.
///
/// The terminal [`validate`](Validator::validate) converts the accumulated errors
/// into an [`Outcome`]: a Validation-kind failure joining the messages in
/// accumulation order, or a success wrapping the original top-level value.
///
/// A validator is a single synchronous chain over mutable state; it is not meant
/// to be shared across concurrent validations.
///
/// # Examples
///
/// ```
/// use outcome_rail::Validator;
/// use serde_json::json;
///
/// let data = json!({ "name": "", "age": 10 });
/// let result = Validator::new(&data)
///     .property("name", |name| name.not_empty())
///     .property("age", |age| age.min(18.0))
///     .validate();
///
/// let error = result.into_error().unwrap();
/// assert_eq!(error.to_string(), "name cannot be empty, age must be at least 18");
/// ```
#[must_use]
#[derive(Debug)]
pub struct Validator<'a> {
    root: &'a Value,
    focus: Option<&'a Value>,
    path: PathStack,
    errors: ErrorVec<String>,
    pending: Option<String>,
}

impl<'a> Validator<'a> {
    /// Starts a validation chain over `value`.
    pub fn new(value: &'a Value) -> Self {
        Self {
            root: value,
            focus: Some(value),
            path: PathStack::new(),
            errors: ErrorVec::new(),
            pending: None,
        }
    }

    /// Records a failure, consuming the pending custom message if one is set.
    ///
    /// `{path}` is substituted at this point, so the rendered message always
    /// reflects the full path of the failing location.
    fn record(&mut self, default_template: &str) {
        let template = self.pending.take().unwrap_or_else(|| default_template.to_owned());
        self.errors.push(template.replace("{path}", &self.path.render()));
    }

    /// Descends into the property `name`, running `f` on a validator focused there.
    ///
    /// The property's path segment is pushed before `f` runs and popped after,
    /// whether or not `f` records errors. The chain continues on the parent either
    /// way. A missing property simply leaves the child unfocused, so every rule
    /// except [`required`](Validator::required) passes on it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validator;
    /// use serde_json::json;
    ///
    /// let user = json!({ "email": "nope" });
    /// let result = Validator::new(&user)
    ///     .property("email", |email| email.email())
    ///     .validate();
    ///
    /// assert_eq!(
    ///     result.into_error().unwrap().to_string(),
    ///     "email must be a valid email address",
    /// );
    /// ```
    pub fn property<F>(mut self, name: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let parent_focus = self.focus;
        let parent_pending = self.pending.take();
        self.path.push(PathSegment::field(name));
        self.focus = parent_focus.and_then(|v| v.get(name));

        let mut validated = f(self);

        validated.path.pop();
        validated.focus = parent_focus;
        validated.pending = parent_pending;
        validated
    }

    /// Descends into an object-typed field.
    ///
    /// Alias of [`property`](Validator::property), documenting intent at call
    /// sites that validate a nested object rather than a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validator;
    /// use serde_json::json;
    ///
    /// let data = json!({ "address": { "zipCode": "abc" } });
    /// let result = Validator::new(&data)
    ///     .nested("address", |address| {
    ///         address.property("zipCode", |zip| {
    ///             zip.matches(&regex::Regex::new(r"^\d{5}$").unwrap())
    ///         })
    ///     })
    ///     .validate();
    ///
    /// let message = result.into_error().unwrap().to_string();
    /// assert!(message.contains("address.zipCode"));
    /// ```
    pub fn nested<F>(self, name: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.property(name, f)
    }

    /// Validates every element of the array at `name` with `f`.
    ///
    /// A missing or `null` property records a single "missing or null" error and
    /// skips element validation entirely; a present value of any other
    /// non-array type records a single "not an array" error. Otherwise every
    /// element is visited in index order, each under an `[i]` path segment, with
    /// no short-circuit between elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validator;
    /// use serde_json::json;
    ///
    /// let order = json!({ "items": [{ "price": 10 }, { "price": -2 }] });
    /// let result = Validator::new(&order)
    ///     .array("items", |item| item.property("price", |price| price.min(0.0)))
    ///     .validate();
    ///
    /// let message = result.into_error().unwrap().to_string();
    /// assert_eq!(message, "items[1].price must be at least 0");
    /// ```
    pub fn array<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(Self) -> Self,
    {
        let parent_focus = self.focus;
        let field = parent_focus.and_then(|v| v.get(name));

        match field {
            None | Some(Value::Null) => {
                self.path.push(PathSegment::field(name));
                self.record(MISSING_OR_NULL);
                self.path.pop();
                self
            }
            Some(Value::Array(items)) => {
                let parent_pending = self.pending.take();
                self.path.push(PathSegment::field(name));
                for (i, item) in items.iter().enumerate() {
                    self.path.push(PathSegment::index(i));
                    self.focus = Some(item);
                    self = f(self);
                    // A pending message left by the element scope dies with it.
                    self.pending = None;
                    self.path.pop();
                }
                self.path.pop();
                self.focus = parent_focus;
                self.pending = parent_pending;
                self
            }
            Some(_) => {
                self.path.push(PathSegment::field(name));
                self.record(NOT_AN_ARRAY);
                self.path.pop();
                self
            }
        }
    }

    /// Sets a custom message for the next failing rule.
    ///
    /// The message replaces the failing rule's default template (it may itself use
    /// the `{path}` placeholder) and is consumed by that failure. Passing rules
    /// leave it in place; a second call overwrites it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validator;
    /// use serde_json::json;
    ///
    /// let data = json!("");
    /// let result = Validator::new(&data)
    ///     .with_message("a name is needed")
    ///     .not_empty()
    ///     .validate();
    ///
    /// assert_eq!(result.into_error().unwrap().to_string(), "a name is needed");
    /// ```
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.pending = Some(message.into());
        self
    }

    /// Fails when the focused value is missing or `null`.
    pub fn required(mut self) -> Self {
        match self.focus {
            None | Some(Value::Null) => self.record(REQUIRED),
            Some(_) => {}
        }
        self
    }

    /// Fails when the focused value is a blank string. Non-strings pass.
    pub fn not_empty(mut self) -> Self {
        if let Some(Value::String(s)) = self.focus {
            if s.trim().is_empty() {
                self.record(NOT_EMPTY);
            }
        }
        self
    }

    /// Fails when the focused string is shorter than `n` characters.
    pub fn min_length(mut self, n: usize) -> Self {
        if let Some(Value::String(s)) = self.focus {
            if s.chars().count() < n {
                let template = MIN_LENGTH.replace("{n}", &n.to_string());
                self.record(&template);
            }
        }
        self
    }

    /// Fails when the focused string is longer than `n` characters.
    pub fn max_length(mut self, n: usize) -> Self {
        if let Some(Value::String(s)) = self.focus {
            if s.chars().count() > n {
                let template = MAX_LENGTH.replace("{n}", &n.to_string());
                self.record(&template);
            }
        }
        self
    }

    /// Fails when the focused value is present but not a number.
    ///
    /// JSON numbers are always finite, so any focused number passes; a missing or
    /// `null` value is [`required`](Validator::required)'s concern, not this
    /// rule's.
    pub fn is_number(mut self) -> Self {
        match self.focus {
            None | Some(Value::Null) | Some(Value::Number(_)) => {}
            Some(_) => self.record(IS_NUMBER),
        }
        self
    }

    /// Fails when the focused number is below `n`. Non-numbers pass.
    pub fn min(mut self, n: f64) -> Self {
        if let Some(Value::Number(num)) = self.focus {
            if num.as_f64().is_some_and(|v| v < n) {
                let template = MIN.replace("{n}", &format_bound(n));
                self.record(&template);
            }
        }
        self
    }

    /// Fails when the focused number is above `n`. Non-numbers pass.
    pub fn max(mut self, n: f64) -> Self {
        if let Some(Value::Number(num)) = self.focus {
            if num.as_f64().is_some_and(|v| v > n) {
                let template = MAX.replace("{n}", &format_bound(n));
                self.record(&template);
            }
        }
        self
    }

    /// Fails when the focused string is not an email address. Non-strings pass.
    pub fn email(mut self) -> Self {
        if let Some(Value::String(s)) = self.focus {
            if !email_pattern().is_match(s) {
                self.record(EMAIL);
            }
        }
        self
    }

    /// Fails when the focused string does not match `pattern`. Non-strings pass.
    pub fn matches(mut self, pattern: &Regex) -> Self {
        if let Some(Value::String(s)) = self.focus {
            if !pattern.is_match(s) {
                self.record(MATCHES);
            }
        }
        self
    }

    /// Fails when the focused value is present but not in `allowed`.
    ///
    /// Membership uses strict value equality; `1` and `1.5` are distinct from
    /// `"1"` and `"1.5"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validator;
    /// use serde_json::json;
    ///
    /// let data = json!({ "status": "shipped" });
    /// let result = Validator::new(&data)
    ///     .property("status", |s| s.one_of(&[json!("pending"), json!("paid")]))
    ///     .validate();
    /// assert!(result.is_failure());
    /// ```
    pub fn one_of(mut self, allowed: &[Value]) -> Self {
        match self.focus {
            None | Some(Value::Null) => {}
            Some(value) => {
                if !allowed.contains(value) {
                    self.record(ONE_OF);
                }
            }
        }
        self
    }

    /// Fails with `message` when `predicate` rejects the focused value.
    ///
    /// The predicate always runs; an absent location is presented as `null` so the
    /// predicate can implement its own presence logic.
    pub fn custom<F>(mut self, predicate: F, message: &str) -> Self
    where
        F: FnOnce(&Value) -> bool,
    {
        if !predicate(self.focus.unwrap_or(&Value::Null)) {
            self.record(message);
        }
        self
    }

    /// Returns the errors accumulated so far, in recording order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Converts the accumulated errors into an [`Outcome`].
    ///
    /// With no errors the original top-level value passes through as a success;
    /// otherwise the messages are joined with `", "` in accumulation order
    /// (depth-first, declaration order) into a single Validation-kind
    /// [`RailError`]. The validator is consumed either way.
    pub fn validate(self) -> Outcome<&'a Value, RailError> {
        if self.errors.is_empty() {
            Outcome::Success(self.root)
        } else {
            Outcome::Failure(RailError::validation(self.errors.join(", ")))
        }
    }
}
