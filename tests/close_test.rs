//! `close()` contract: shutdown plus a bounded wait that never fails.
//!
//! Timing-sensitive cases run on tokio's paused clock so the 10 s bound is
//! exercised on virtual time.

use otel_testkit::domain::SpanRecord;
use otel_testkit::test_support::{MockExporter, SlowExporter};
use otel_testkit::{CLOSE_TIMEOUT, TelemetryExporter};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing_test::traced_test;

#[tokio::test(start_paused = true)]
async fn close_waits_for_a_shutdown_that_completes_in_time() {
    let exporter = Arc::new(SlowExporter::resolving_after(Duration::from_secs(5)));
    let wrapped = TelemetryExporter::wrap_span(exporter);

    let start = Instant::now();
    wrapped.close().await;
    let elapsed = start.elapsed();

    // No premature return: close only comes back once shutdown resolved.
    assert!(elapsed >= Duration::from_secs(5), "returned at {elapsed:?}");
    assert!(elapsed < CLOSE_TIMEOUT, "returned at {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn close_gives_up_after_the_bounded_wait() {
    let exporter = Arc::new(SlowExporter::never_resolving());
    let wrapped = TelemetryExporter::wrap_span(exporter);

    let start = Instant::now();
    wrapped.close().await;
    let elapsed = start.elapsed();

    assert!(elapsed >= CLOSE_TIMEOUT, "returned at {elapsed:?}");
    assert!(
        elapsed < CLOSE_TIMEOUT + Duration::from_secs(1),
        "returned at {elapsed:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn close_does_not_wait_out_a_shutdown_longer_than_the_bound() {
    let exporter = Arc::new(SlowExporter::resolving_after(Duration::from_secs(15)));
    let wrapped = TelemetryExporter::wrap_metric(exporter);

    let start = Instant::now();
    wrapped.close().await;
    let elapsed = start.elapsed();

    assert!(elapsed >= CLOSE_TIMEOUT, "returned at {elapsed:?}");
    assert!(
        elapsed < CLOSE_TIMEOUT + Duration::from_secs(1),
        "returned at {elapsed:?}"
    );
}

#[tokio::test]
async fn close_returns_immediately_for_an_inline_shutdown() {
    let exporter = Arc::new(MockExporter::<SpanRecord>::new());
    let wrapped = TelemetryExporter::wrap_span(exporter.clone());

    wrapped.close().await;

    assert_eq!(exporter.shutdown_calls(), 1);
}

#[traced_test]
#[tokio::test(start_paused = true)]
async fn close_timeout_is_logged_not_raised() {
    let exporter = Arc::new(SlowExporter::never_resolving());
    let wrapped = TelemetryExporter::wrap_span(exporter);

    wrapped.close().await;

    assert!(logs_contain("shutdown still pending after close timeout"));
}
