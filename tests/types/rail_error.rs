use std::error::Error;

use outcome_rail::{CancelledError, ErrorDetail, ErrorKind, RailError};

#[test]
fn kind_names_are_stable() {
    assert_eq!(ErrorKind::Validation.name(), "ValidationError");
    assert_eq!(ErrorKind::NotFound.name(), "NotFoundError");
    assert_eq!(ErrorKind::Unauthorized.name(), "UnauthorizedError");
    assert_eq!(ErrorKind::BusinessRule.name(), "BusinessRuleError");
    assert_eq!(ErrorKind::Technical.name(), "TechnicalError");
    assert_eq!(ErrorKind::Timeout.name(), "TimeoutError");
    assert_eq!(ErrorKind::Concurrency.name(), "ConcurrencyError");
    assert_eq!(ErrorKind::Cancellation.name(), "CancelledError");
}

#[test]
fn technical_flavoured_kinds_include_timeout_and_cancellation() {
    assert!(ErrorKind::Technical.is_technical());
    assert!(ErrorKind::Timeout.is_technical());
    assert!(ErrorKind::Cancellation.is_technical());

    assert!(!ErrorKind::Validation.is_technical());
    assert!(!ErrorKind::NotFound.is_technical());
    assert!(!ErrorKind::Unauthorized.is_technical());
    assert!(!ErrorKind::BusinessRule.is_technical());
    assert!(!ErrorKind::Concurrency.is_technical());
}

#[test]
fn constructors_set_the_matching_kind() {
    assert_eq!(RailError::validation("v").kind(), ErrorKind::Validation);
    assert_eq!(RailError::not_found("n").kind(), ErrorKind::NotFound);
    assert_eq!(RailError::unauthorized("u").kind(), ErrorKind::Unauthorized);
    assert_eq!(RailError::business_rule("b").kind(), ErrorKind::BusinessRule);
    assert_eq!(RailError::technical("t").kind(), ErrorKind::Technical);
    assert_eq!(RailError::timeout("t").kind(), ErrorKind::Timeout);
    assert_eq!(RailError::concurrency("c").kind(), ErrorKind::Concurrency);
}

#[test]
fn display_shows_the_message_only() {
    let err = RailError::not_found("order 42 does not exist");
    assert_eq!(err.to_string(), "order 42 does not exist");
    assert_eq!(err.message(), "order 42 does not exist");
}

#[test]
fn equality_ignores_the_cause_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let with_cause = RailError::technical("persist failed").with_cause(io);
    let without_cause = RailError::technical("persist failed");

    assert_eq!(with_cause, without_cause);
    assert!(with_cause.source().is_some());
    assert!(without_cause.source().is_none());

    assert_ne!(RailError::technical("persist failed"), RailError::timeout("persist failed"));
    assert_ne!(RailError::technical("a"), RailError::technical("b"));
}

#[test]
fn cause_chain_is_walkable() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let err = RailError::technical("persist failed").with_cause(io);

    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "disk on fire");
}

#[test]
fn cancelled_error_reports_the_operation_when_named() {
    let anonymous = CancelledError::new();
    assert_eq!(anonymous.to_string(), "operation was cancelled");
    assert_eq!(anonymous.operation(), None);

    let named = CancelledError::for_operation("load_order");
    assert_eq!(named.to_string(), "operation 'load_order' was cancelled");
    assert_eq!(named.operation(), Some("load_order"));
}

#[test]
fn cancellations_compare_equal_regardless_of_operation() {
    assert_eq!(CancelledError::new(), CancelledError::for_operation("load_order"));
}

#[test]
fn cancellation_converts_to_a_cancellation_kind_error() {
    let err: RailError = CancelledError::for_operation("sync").into();
    assert_eq!(err.kind(), ErrorKind::Cancellation);
    assert_eq!(err.message(), "operation 'sync' was cancelled");
    assert!(err.kind().is_technical());
}

#[test]
fn error_detail_exposes_name_and_message() {
    let err = RailError::unauthorized("token expired");
    assert_eq!(ErrorDetail::name(&err), "UnauthorizedError");
    assert_eq!(ErrorDetail::message(&err), "token expired");

    let cancelled = CancelledError::new();
    assert_eq!(ErrorDetail::name(&cancelled), "CancelledError");

    let plain = String::from("plain failure");
    assert_eq!(ErrorDetail::name(&plain), "Error");
    assert_eq!(ErrorDetail::message(&plain), "plain failure");
}
