//! The minimal error contract the core serializes through.

use crate::types::rail_error::{CancelledError, RailError};

/// Name-and-message view of an error, used on serialization boundaries.
///
/// The core never inspects an error beyond this contract: any error that can
/// report a stable name and a human-readable message can ride the failure
/// channel of [`Outcome::to_json`](crate::Outcome::to_json). Stack traces and
/// causal chains deliberately stay behind this boundary.
pub trait ErrorDetail {
    /// Stable, machine-matchable error name.
    fn name(&self) -> &str;

    /// Human-readable message.
    fn message(&self) -> String;
}

impl ErrorDetail for RailError {
    fn name(&self) -> &str {
        self.kind().name()
    }

    fn message(&self) -> String {
        RailError::message(self).to_string()
    }
}

impl ErrorDetail for CancelledError {
    fn name(&self) -> &str {
        "CancelledError"
    }

    fn message(&self) -> String {
        self.to_string()
    }
}

impl ErrorDetail for String {
    fn name(&self) -> &str {
        "Error"
    }

    fn message(&self) -> String {
        self.clone()
    }
}

impl ErrorDetail for &str {
    fn name(&self) -> &str {
        "Error"
    }

    fn message(&self) -> String {
        (*self).to_string()
    }
}
