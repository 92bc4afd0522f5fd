//! Integration tests for the async bridging operations on `Outcome`.
//!
//! These cover both directions of the bridge: capturing the settlement of
//! an external future, and awaiting an `Outcome` as an already-settled
//! future.

#![cfg(all(feature = "async", feature = "container"))]

use std::cell::Cell;
use std::time::Duration;

use rstest::rstest;
use totality::container::Outcome;

// =============================================================================
// from_future
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_from_future_captures_ok_as_success() {
    let future = async { Ok::<_, String>(42) };
    assert_eq!(Outcome::from_future(future).await, Outcome::Success(42));
}

#[rstest]
#[tokio::test]
async fn test_from_future_captures_err_as_failure() {
    let future = async { Err::<i32, _>("boom".to_string()) };
    assert_eq!(
        Outcome::from_future(future).await,
        Outcome::Failure("boom".to_string()),
    );
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_from_future_awaits_a_suspending_future() {
    let future = async {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok::<_, String>("done")
    };

    // Paused time: the sleep completes instantly without wall-clock delay.
    assert_eq!(Outcome::from_future(future).await, Outcome::Success("done"));
}

// =============================================================================
// from_future_or_else
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_from_future_or_else_transforms_the_failure() {
    let future = async { Err::<i32, _>("boom") };
    let outcome: Outcome<i32, String> =
        Outcome::from_future_or_else(future, |raw| format!("failed: {raw}")).await;

    assert_eq!(outcome, Outcome::Failure("failed: boom".to_string()));
}

#[rstest]
#[tokio::test]
async fn test_from_future_or_else_skips_the_transform_on_success() {
    let transformed = Cell::new(false);
    let future = async { Ok::<_, &str>(7) };

    let outcome: Outcome<i32, String> = Outcome::from_future_or_else(future, |raw| {
        transformed.set(true);
        raw.to_string()
    })
    .await;

    assert_eq!(outcome, Outcome::Success(7));
    assert!(!transformed.get());
}

// =============================================================================
// and_then_async
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_and_then_async_runs_the_step_on_success() {
    async fn lookup(id: i32) -> Outcome<String, String> {
        Outcome::Success(format!("user-{id}"))
    }

    let outcome: Outcome<i32, String> = Outcome::Success(7);
    assert_eq!(
        outcome.and_then_async(lookup).await,
        Outcome::Success("user-7".to_string()),
    );
}

#[rstest]
#[tokio::test]
async fn test_and_then_async_short_circuits_on_failure() {
    let invoked = Cell::new(false);

    let outcome: Outcome<i32, String> = Outcome::Failure("no id".to_string());
    let chained = outcome
        .and_then_async(|id| {
            invoked.set(true);
            async move { Outcome::Success(format!("user-{id}")) }
        })
        .await;

    assert_eq!(chained, Outcome::Failure("no id".to_string()));
    assert!(!invoked.get());
}

#[rstest]
#[tokio::test]
async fn test_and_then_async_propagates_step_failure() {
    async fn reject(id: i32) -> Outcome<String, String> {
        Outcome::Failure(format!("unknown id {id}"))
    }

    let outcome: Outcome<i32, String> = Outcome::Success(404);
    assert_eq!(
        outcome.and_then_async(reject).await,
        Outcome::Failure("unknown id 404".to_string()),
    );
}

#[rstest]
#[tokio::test]
async fn test_and_then_async_chains_repeatedly() {
    async fn halve(value: i32) -> Outcome<i32, String> {
        if value % 2 == 0 {
            Outcome::Success(value / 2)
        } else {
            Outcome::Failure(format!("{value} is odd"))
        }
    }

    let outcome: Outcome<i32, String> = Outcome::Success(8);
    let chained = outcome
        .and_then_async(halve)
        .await
        .and_then_async(halve)
        .await;
    assert_eq!(chained, Outcome::Success(2));

    let outcome: Outcome<i32, String> = Outcome::Success(6);
    let chained = outcome
        .and_then_async(halve)
        .await
        .and_then_async(halve)
        .await;
    assert_eq!(chained, Outcome::Failure("3 is odd".to_string()));
}

// =============================================================================
// IntoFuture
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_awaiting_a_success_resolves_ok() {
    let outcome: Outcome<i32, String> = Outcome::Success(42);
    assert_eq!(outcome.await, Ok(42));
}

#[rstest]
#[tokio::test]
async fn test_awaiting_a_failure_resolves_err() {
    let outcome: Outcome<i32, String> = Outcome::Failure("boom".to_string());
    assert_eq!(outcome.await, Err("boom".to_string()));
}

#[rstest]
#[tokio::test]
async fn test_round_trip_through_the_bridge() {
    let outcome: Outcome<i32, String> = Outcome::Success(21);

    // Outcome -> future -> Outcome recovers the original.
    let roundtripped = Outcome::from_future(outcome.clone().into_future()).await;
    assert_eq!(roundtripped, outcome);
}
