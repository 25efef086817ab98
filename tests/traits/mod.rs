use outcome_rail::{ErrorDetail, IntoOutcome, Outcome, RailError};

#[test]
fn into_outcome_converts_both_result_variants() {
    let ok: Outcome<i32, RailError> = Ok(5).into_outcome();
    assert_eq!(ok.into_value(), Some(5));

    let err: Outcome<i32, RailError> = Err(RailError::technical("boom")).into_outcome();
    assert!(err.is_failure());
    assert!(!err.is_cancelled());
}

#[test]
fn into_outcome_feeds_straight_into_a_chain() {
    let doubled = "21"
        .parse::<i32>()
        .map_err(|e| RailError::validation(e.to_string()))
        .into_outcome()
        .map(|x| x * 2);

    assert_eq!(doubled.into_value(), Some(42));
}

#[test]
fn string_errors_satisfy_the_detail_contract() {
    let outcome = Outcome::<i32, String>::failure("plain failure".to_string());
    let error = outcome.into_error().unwrap();
    assert_eq!(error.name(), "Error");
    assert_eq!(ErrorDetail::message(&error), "plain failure");
}
