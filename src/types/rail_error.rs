//! The error taxonomy carried on the failure channel.
//!
//! The core combinators never inspect these kinds; they only require that an error
//! can carry a message and an optional causal chain. The two places the library
//! itself produces errors are cancellation ([`CancelledError`], converted into a
//! [`ErrorKind::Cancellation`] error) and validation (a [`ErrorKind::Validation`]
//! error from [`Validator::validate`](crate::Validator::validate)).

use core::fmt;

use thiserror::Error;

/// Closed set of error kinds, discriminating the failure taxonomy.
///
/// Matching on the kind is exhaustive; downstream code can rely on the compiler
/// flagging unhandled kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input failed validation rules.
    Validation,
    /// A requested entity does not exist.
    NotFound,
    /// The caller lacks permission.
    Unauthorized,
    /// A domain rule was violated.
    BusinessRule,
    /// An infrastructure or programming fault.
    Technical,
    /// An operation exceeded its deadline. Technical-flavoured.
    Timeout,
    /// Conflicting concurrent modification.
    Concurrency,
    /// An operation was cancelled before completion. Technical-flavoured.
    Cancellation,
}

impl ErrorKind {
    /// Stable name used on serialization boundaries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Validation => "ValidationError",
            Self::NotFound => "NotFoundError",
            Self::Unauthorized => "UnauthorizedError",
            Self::BusinessRule => "BusinessRuleError",
            Self::Technical => "TechnicalError",
            Self::Timeout => "TimeoutError",
            Self::Concurrency => "ConcurrencyError",
            Self::Cancellation => "CancelledError",
        }
    }

    /// Returns `true` for technical kinds, including the timeout and cancellation
    /// sub-kinds.
    #[must_use]
    pub const fn is_technical(self) -> bool {
        matches!(self, Self::Technical | Self::Timeout | Self::Cancellation)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A kind-discriminated error with a message and an optional cause.
///
/// Equality compares kind and message only; the causal chain is diagnostic context
/// and never takes part in comparisons.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ErrorKind, RailError};
///
/// let err = RailError::not_found("order 42 does not exist");
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "order 42 does not exist");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RailError {
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RailError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), cause: None }
    }

    /// Creates a [`ErrorKind::Validation`] error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Creates a [`ErrorKind::NotFound`] error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates a [`ErrorKind::Unauthorized`] error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Creates a [`ErrorKind::BusinessRule`] error.
    #[must_use]
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BusinessRule, message)
    }

    /// Creates a [`ErrorKind::Technical`] error.
    #[must_use]
    pub fn technical(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Technical, message)
    }

    /// Creates a [`ErrorKind::Timeout`] error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Creates a [`ErrorKind::Concurrency`] error.
    #[must_use]
    pub fn concurrency(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Concurrency, message)
    }

    /// Attaches the underlying cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::RailError;
    /// use std::error::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    /// let err = RailError::technical("failed to persist order").with_cause(io);
    /// assert!(err.source().is_some());
    /// ```
    #[must_use]
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for RailError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for RailError {}

impl From<CancelledError> for RailError {
    fn from(cancelled: CancelledError) -> Self {
        Self::new(ErrorKind::Cancellation, cancelled.to_string())
    }
}

/// Error produced when an operation is cancelled before completion.
///
/// Carries an optional operation name for diagnostics; the name never takes part
/// in equality.
#[derive(Debug, Clone, Default)]
pub struct CancelledError {
    operation: Option<String>,
}

impl PartialEq for CancelledError {
    fn eq(&self, _other: &Self) -> bool {
        // Operation context is advisory; all cancellations compare equal.
        true
    }
}

impl Eq for CancelledError {}

impl CancelledError {
    /// Creates a cancellation error with no operation context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cancellation error naming the cancelled operation.
    #[must_use]
    pub fn for_operation(operation: impl Into<String>) -> Self {
        Self { operation: Some(operation.into()) }
    }

    /// Returns the cancelled operation's name, if one was recorded.
    #[must_use]
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }
}

impl fmt::Display for CancelledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation {
            Some(operation) => write!(f, "operation '{operation}' was cancelled"),
            None => f.write_str("operation was cancelled"),
        }
    }
}

impl std::error::Error for CancelledError {}
