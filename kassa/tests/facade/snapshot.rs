use std::sync::Arc;
use std::time::Duration;

use kassa::{Granularity, Kassa, KassaError};
use kassa_mock::{DynamicMockSource, MockBehavior};

use crate::helpers::{dataset, dt, kassa_with_mock, order};

#[tokio::test]
async fn snapshot_from_static_mock() {
    let kassa = kassa_with_mock("scenario");
    let orders = kassa.snapshot().await.unwrap();
    assert_eq!(orders, dataset("scenario"));
}

#[tokio::test]
async fn snapshot_without_source_is_not_found() {
    let kassa = Kassa::builder().build().unwrap();
    let err = kassa.snapshot().await.unwrap_err();
    assert!(matches!(err, KassaError::NotFound { .. }));
}

#[tokio::test]
async fn repeated_snapshots_see_changes() {
    let (source, ctl) = DynamicMockSource::new_with_controller("store");
    let kassa = Kassa::builder().with_source(source).build().unwrap();

    ctl.set_orders(vec![order("a", "a@example.com", dt(2024, 1, 5, 9, 0, 0), 100)])
        .await;
    let first = kassa.series(&kassa.snapshot().await.unwrap(), Granularity::Monthly);
    assert_eq!(first.len(), 1);

    ctl.push_order(order("b", "b@example.com", dt(2024, 2, 5, 9, 0, 0), 50))
        .await;
    let second = kassa.series(&kassa.snapshot().await.unwrap(), Granularity::Monthly);
    let keys: Vec<&str> = second.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, ["2024-1", "2024-2"]);
    assert_eq!(ctl.fetch_count().await, 2);
}

#[tokio::test(start_paused = true)]
async fn hanging_source_times_out() {
    let (source, ctl) = DynamicMockSource::new_with_controller("slow");
    ctl.set_behavior(MockBehavior::Hang).await;
    let kassa = Kassa::builder()
        .with_source(source)
        .source_timeout(Duration::from_millis(250))
        .build()
        .unwrap();
    let err = kassa.snapshot().await.unwrap_err();
    assert_eq!(err, KassaError::source_timeout("slow"));
}

#[tokio::test]
async fn source_errors_are_attributed() {
    let (source, ctl) = DynamicMockSource::new_with_controller("flaky");
    ctl.set_behavior(MockBehavior::Fail(KassaError::Data("truncated payload".into())))
        .await;
    let kassa = Kassa::builder().with_source(source).build().unwrap();
    match kassa.snapshot().await.unwrap_err() {
        KassaError::Source { name, msg } => {
            assert_eq!(name, "flaky");
            assert!(msg.contains("truncated payload"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn forced_mock_failure_passes_through() {
    let kassa = Kassa::builder()
        .with_source(Arc::new(kassa_mock::MockSource::with_dataset("FAIL")))
        .build()
        .unwrap();
    let err = kassa.snapshot().await.unwrap_err();
    assert!(matches!(err, KassaError::Source { ref name, .. } if name == "kassa-mock"));
}
