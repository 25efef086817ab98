//! Validating a nested signup payload, collecting every problem at once.
//!
//! Run with: `cargo run --example validation_form`

use outcome_rail::Validator;
use serde_json::json;

fn main() {
    let signup = json!({
        "name": "",
        "email": "not-an-email",
        "age": 15,
        "address": { "street": "", "zipCode": "abc" },
        "interests": ["rust", "", "railways"],
    });

    let result = Validator::new(&signup)
        .property("name", |name| name.required().not_empty().max_length(60))
        .property("email", |email| email.required().email())
        .property("age", |age| age.is_number().min(18.0))
        .nested("address", |address| {
            address
                .property("street", |street| street.not_empty())
                .property("zipCode", |zip| {
                    zip.with_message("{path} must be a 5-digit code")
                        .matches(&regex::Regex::new(r"^\d{5}$").unwrap())
                })
        })
        .array("interests", |interest| interest.not_empty())
        .validate();

    match result.into_error() {
        None => println!("signup accepted"),
        Some(error) => {
            println!("signup rejected:");
            for problem in error.message().split(", ") {
                println!("  - {problem}");
            }
        }
    }
}
