use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use outcome_rail::async_ext::CancellationToken;
use outcome_rail::{Outcome, RailError};

#[tokio::test]
async fn from_future_captures_fulfilment_and_rejection() {
    let ok = Outcome::from_future(async { Ok::<_, RailError>(21) }).await;
    assert_eq!(ok.into_value(), Some(21));

    let err = Outcome::<i32, _>::from_future(async { Err(RailError::timeout("too slow")) }).await;
    assert_eq!(err.into_error().unwrap(), RailError::timeout("too slow"));
}

#[tokio::test]
async fn bridging_round_trips_success_and_failure() {
    let ok = Outcome::from_future(async { Outcome::<i32, RailError>::success(5).into_result() })
        .await;
    assert_eq!(ok, Outcome::success(5));

    let err = Outcome::from_future(async {
        Outcome::<i32, _>::failure(RailError::not_found("gone")).into_result()
    })
    .await;
    assert_eq!(err, Outcome::failure(RailError::not_found("gone")));
}

#[tokio::test]
async fn from_future_cancellable_short_circuits_on_a_pre_cancelled_token() {
    let polled = AtomicBool::new(false);
    let token = CancellationToken::new();
    token.cancel();

    let outcome = Outcome::<i32, RailError>::from_future_cancellable(
        async {
            polled.store(true, Ordering::SeqCst);
            Ok(1)
        },
        &token,
    )
    .await;

    assert!(outcome.is_cancelled());
    assert!(!polled.load(Ordering::SeqCst), "future was polled despite cancellation");
}

#[tokio::test]
async fn from_future_cancellable_resolves_cancelled_mid_flight() {
    let token = CancellationToken::new();

    let (outcome, ()) = tokio::join!(
        Outcome::<i32, RailError>::from_future_cancellable(
            async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(1)
            },
            &token,
        ),
        async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        }
    );

    assert!(outcome.is_cancelled());
}

#[tokio::test]
async fn map_async_transforms_the_success_value() {
    let outcome = Outcome::<i32, RailError>::success(2)
        .map_async(|x| async move { Ok(x * 2) })
        .await;
    assert_eq!(outcome.into_value(), Some(4));
}

#[tokio::test]
async fn map_async_routes_mapper_errors_to_the_failure_channel() {
    let outcome = Outcome::<i32, RailError>::success(2)
        .map_async(|_| async { Err::<i32, _>(RailError::technical("enrich failed")) })
        .await;
    assert_eq!(outcome.into_error().unwrap(), RailError::technical("enrich failed"));
}

#[tokio::test]
async fn map_async_skips_the_mapper_on_failure() {
    let invoked = AtomicBool::new(false);
    let outcome = Outcome::<i32, _>::failure(RailError::technical("boom"))
        .map_async(|x| {
            invoked.store(true, Ordering::SeqCst);
            async move { Ok(x * 2) }
        })
        .await;

    assert!(outcome.is_failure());
    assert!(!invoked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn map_async_cancellable_never_invokes_the_mapper_when_pre_cancelled() {
    let invoked = AtomicBool::new(false);
    let token = CancellationToken::new();
    token.cancel();

    let outcome = Outcome::<i32, RailError>::success(2)
        .map_async_cancellable(
            |x| {
                invoked.store(true, Ordering::SeqCst);
                async move { Ok(x * 2) }
            },
            &token,
        )
        .await;

    assert!(outcome.is_cancelled());
    assert!(!invoked.load(Ordering::SeqCst), "mapper ran despite a cancelled token");
}

#[tokio::test]
async fn map_async_cancellable_resolves_cancelled_mid_flight() {
    let token = CancellationToken::new();

    let (outcome, ()) = tokio::join!(
        Outcome::<i32, RailError>::success(2).map_async_cancellable(
            |x| async move {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(x * 2)
            },
            &token,
        ),
        async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        }
    );

    assert!(outcome.is_cancelled());
}

#[tokio::test]
async fn map_async_cancellable_completes_when_the_token_stays_quiet() {
    let token = CancellationToken::new();
    let outcome = Outcome::<i32, RailError>::success(2)
        .map_async_cancellable(|x| async move { Ok(x * 2) }, &token)
        .await;
    assert_eq!(outcome.into_value(), Some(4));
}

#[tokio::test]
async fn and_then_async_returns_the_closure_outcome_unwrapped() {
    let ok = Outcome::<i32, RailError>::success(4)
        .and_then_async(|x| async move { Outcome::success(x + 1) })
        .await;
    assert_eq!(ok.into_value(), Some(5));

    let nested_failure = Outcome::<i32, RailError>::success(4)
        .and_then_async(|_| async { Outcome::<i32, _>::failure(RailError::business_rule("no")) })
        .await;
    assert_eq!(nested_failure.into_error().unwrap(), RailError::business_rule("no"));
}

#[tokio::test]
async fn and_then_async_cancellable_short_circuits_on_a_pre_cancelled_token() {
    let invoked = AtomicBool::new(false);
    let token = CancellationToken::new();
    token.cancel();

    let outcome = Outcome::<i32, RailError>::success(4)
        .and_then_async_cancellable(
            |x| {
                invoked.store(true, Ordering::SeqCst);
                async move { Outcome::success(x + 1) }
            },
            &token,
        )
        .await;

    assert!(outcome.is_cancelled());
    assert!(!invoked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn cancelled_outcomes_pass_through_async_combinators_unchanged() {
    let token = CancellationToken::new();
    let cancelled: Outcome<i32, RailError> = Outcome::cancelled();

    let outcome = cancelled
        .map_async(|x| async move { Ok(x) })
        .await
        .and_then_async_cancellable(|x| async move { Outcome::success(x) }, &token)
        .await;

    assert!(outcome.is_cancelled());
}
