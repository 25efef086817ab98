//! Quick tour of the outcome pipeline: construct, transform, recover, report.
//!
//! Run with: `cargo run --example quick_start`

use outcome_rail::prelude::*;

fn find_discount(code: &str) -> RailResult<u32> {
    match code {
        "WELCOME10" => Outcome::success(10),
        "VIP20" => Outcome::success(20),
        _ => Outcome::failure(RailError::not_found(format!("unknown discount code '{code}'"))),
    }
}

fn apply_discount(total: u32, percent: u32) -> RailResult<u32> {
    if percent > 50 {
        Outcome::failure(RailError::business_rule("discounts above 50% need approval"))
    } else {
        Outcome::success(total - total * percent / 100)
    }
}

fn main() {
    let checkout = find_discount("VIP20")
        .and_then(|percent| apply_discount(250, percent))
        .inspect(|total| println!("charging {total}"))
        .recover(|_| Outcome::success(250));

    println!("checkout -> {}", checkout.to_json());

    let failed = find_discount("BOGUS")
        .and_then(|percent| apply_discount(250, percent))
        .unwrap_or(250);

    println!("fallback total -> {failed}");
}
