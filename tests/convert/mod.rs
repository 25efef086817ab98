use outcome_rail::convert::{adapt_parser, from_value};
use outcome_rail::{ErrorKind, Outcome};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize, Debug, PartialEq)]
struct User {
    name: String,
    age: u32,
}

#[test]
fn adapt_parser_wraps_an_external_parse_function() {
    let parse_id = adapt_parser(|value: &Value| value.as_u64().ok_or("not an unsigned integer"));

    assert_eq!(parse_id(&json!(7)).into_value(), Some(7));

    let failed = parse_id(&json!("seven"));
    let error = failed.into_error().unwrap();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.to_string(), "not an unsigned integer");
}

#[test]
fn from_value_deserializes_into_typed_data() {
    let ok: Outcome<User, _> = from_value(&json!({ "name": "ada", "age": 36 }));
    assert_eq!(ok.into_value(), Some(User { name: "ada".into(), age: 36 }));
}

#[test]
fn from_value_reports_deserialization_failures_as_validation_errors() {
    let bad: Outcome<User, _> = from_value(&json!({ "name": "ada", "age": "not a number" }));
    let error = bad.into_error().unwrap();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(!error.message().is_empty());
}
