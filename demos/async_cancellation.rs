//! Cooperative cancellation: the token decides what the pipeline reports,
//! without preempting the work itself.
//!
//! Run with: `cargo run --example async_cancellation --features async`

use std::time::Duration;

use outcome_rail::prelude::*;

async fn enrich(order_id: u32) -> Result<String, RailError> {
    // Stands in for a slow upstream call.
    tokio::time::sleep(Duration::from_secs(5)).await;
    Ok(format!("order-{order_id} with customer profile"))
}

#[tokio::main]
async fn main() {
    let token = CancellationToken::new();

    // A watchdog gives the upstream 50ms before giving up.
    let watchdog = {
        let token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        })
    };

    let outcome = Outcome::<u32, RailError>::success(42)
        .map_async_cancellable(enrich, &token)
        .await;

    let _ = watchdog.await;

    println!("pipeline -> {}", outcome.to_json());
    assert!(outcome.is_cancelled());
}
