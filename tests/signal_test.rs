use otel_testkit::{CompletionSignal, ExportError, SignalState};
use proptest::prelude::*;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn wait_observes_resolution_from_another_task() {
    let signal = CompletionSignal::pending();
    let producer = signal.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        producer.succeed();
    });

    assert!(signal.wait(Duration::from_secs(1)).await);
    assert_eq!(signal.state(), SignalState::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn wait_times_out_on_a_signal_nobody_resolves() {
    let signal = CompletionSignal::pending();

    assert!(!signal.wait(Duration::from_millis(50)).await);
    // Timing out says nothing about the operation; the signal stays pending.
    assert_eq!(signal.state(), SignalState::Pending);
}

#[tokio::test]
async fn wait_on_an_already_resolved_signal_returns_at_once() {
    assert!(CompletionSignal::succeeded().wait(Duration::ZERO).await);
    assert!(
        CompletionSignal::failed(ExportError::AlreadyShutdown)
            .wait(Duration::ZERO)
            .await
    );
}

#[tokio::test(start_paused = true)]
async fn late_resolution_still_reaches_waiters_after_a_timeout() {
    let signal = CompletionSignal::pending();

    assert!(!signal.wait(Duration::from_millis(10)).await);
    signal.fail(ExportError::Backend("flush failed".to_string()));

    assert!(signal.wait(Duration::from_millis(10)).await);
    assert_eq!(signal.state(), SignalState::Failed);
    let cause = signal.failure().expect("failed signal carries a cause");
    assert!(cause.to_string().contains("flush failed"));
}

proptest! {
    // Whatever sequence of resolutions races in, only the first lands.
    #[test]
    fn first_resolution_wins(resolutions in proptest::collection::vec(any::<bool>(), 1..8)) {
        let signal = CompletionSignal::pending();

        let accepted: Vec<bool> = resolutions
            .iter()
            .map(|&succeed| {
                if succeed {
                    signal.succeed()
                } else {
                    signal.fail(ExportError::Backend("later failure".to_string()))
                }
            })
            .collect();

        prop_assert!(accepted[0]);
        prop_assert!(accepted[1..].iter().all(|&a| !a));

        let expected = if resolutions[0] {
            SignalState::Succeeded
        } else {
            SignalState::Failed
        };
        prop_assert_eq!(signal.state(), expected);
    }
}
