use std::time::Duration;

use outcome_rail::async_ext::{Cancellable, CancellableExt, CancellationToken};

#[tokio::test]
async fn untouched_token_lets_the_future_complete() {
    let token = CancellationToken::new();
    let result = async { 7 }.with_cancellation(&token).await;
    assert_eq!(result.ok(), Some(7));
}

#[tokio::test]
async fn pre_cancelled_token_resolves_immediately() {
    let token = CancellationToken::new();
    token.cancel();

    let result = async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        7
    }
    .with_cancellation(&token)
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn mid_flight_cancellation_wins_the_race() {
    let token = CancellationToken::new();
    let work = Cancellable::new(
        async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            7
        },
        &token,
    );

    let (result, ()) = tokio::join!(work, async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });

    let cancelled = result.unwrap_err();
    assert_eq!(cancelled.to_string(), "operation was cancelled");
}

#[tokio::test]
async fn completed_work_is_unaffected_by_a_later_cancel() {
    let token = CancellationToken::new();
    let result = async { "done" }.with_cancellation(&token).await;
    token.cancel();

    assert_eq!(result.ok(), Some("done"));
}
