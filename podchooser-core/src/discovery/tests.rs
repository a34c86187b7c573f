use crate::cluster::{LabelSelector, Pod, PodLister, PodPhase, ReplicaGroup, StaticPodLister};
use crate::discovery::{DiscoveryError, list_running_pods};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

// ---------------------------
// Helpers
// ---------------------------

fn pod(name: &str, phase: PodPhase) -> Pod {
    Pod::new(name, phase).with_label("app", "buildkitd")
}

fn names(pods: &[Pod]) -> Vec<&str> {
    pods.iter().map(|p| p.name.as_str()).collect()
}

fn group() -> ReplicaGroup {
    ReplicaGroup::new("buildkitd")
}

/// Never answers.
struct HangingLister;

#[async_trait]
impl PodLister for HangingLister {
    async fn list(&self, _selector: &LabelSelector) -> anyhow::Result<Vec<Pod>> {
        std::future::pending().await
    }
}

// ---------------------------
// Tests
// ---------------------------

#[tokio::test]
async fn keeps_only_running_pods_sorted_by_name() {
    // Arrange
    let lister = StaticPodLister::new(vec![
        pod("w-d", PodPhase::Running),
        pod("w-c", PodPhase::Pending),
        pod("w-b", PodPhase::Failed),
        pod("w-a", PodPhase::Running),
    ]);

    // Act
    let pods = list_running_pods(&lister, &group(), &CancellationToken::new(), None)
        .await
        .unwrap();

    // Assert
    assert_eq!(names(&pods), vec!["w-a", "w-d"]);
}

#[tokio::test]
async fn pending_pod_is_excluded_from_example_set() {
    // Arrange
    let lister = StaticPodLister::new(vec![
        pod("w-2", PodPhase::Running),
        pod("w-3", PodPhase::Pending),
        pod("w-1", PodPhase::Running),
    ]);

    // Act
    let pods = list_running_pods(&lister, &group(), &CancellationToken::new(), None)
        .await
        .unwrap();

    // Assert
    assert_eq!(names(&pods), vec!["w-1", "w-2"]);
}

#[tokio::test]
async fn terminating_pods_are_not_running() {
    // Arrange
    let mut leaving = pod("w-1", PodPhase::Running);
    leaving.deletion_timestamp = Some(chrono::Utc::now());
    let lister = StaticPodLister::new(vec![leaving, pod("w-2", PodPhase::Running)]);

    // Act
    let pods = list_running_pods(&lister, &group(), &CancellationToken::new(), None)
        .await
        .unwrap();

    // Assert
    assert_eq!(names(&pods), vec!["w-2"]);
}

#[tokio::test]
async fn pods_of_other_groups_are_ignored() {
    // Arrange
    let lister = StaticPodLister::new(vec![
        pod("w-1", PodPhase::Running),
        Pod::new("api-1", PodPhase::Running).with_label("app", "api"),
        Pod::new("orphan", PodPhase::Running),
    ]);

    // Act
    let pods = list_running_pods(&lister, &group(), &CancellationToken::new(), None)
        .await
        .unwrap();

    // Assert
    assert_eq!(names(&pods), vec!["w-1"]);
}

#[tokio::test]
async fn no_running_pods_is_an_empty_set() {
    // Arrange
    let lister = StaticPodLister::new(vec![pod("w-1", PodPhase::Pending)]);

    // Act
    let pods = list_running_pods(&lister, &group(), &CancellationToken::new(), None)
        .await
        .unwrap();

    // Assert
    assert!(pods.is_empty());
}

#[tokio::test]
async fn list_failure_is_propagated_with_its_source() {
    // Arrange
    let lister = StaticPodLister::failing("connection refused");

    // Act
    let err = list_running_pods(&lister, &group(), &CancellationToken::new(), None)
        .await
        .unwrap_err();

    // Assert
    match err {
        DiscoveryError::List { group, source } => {
            assert_eq!(group, "buildkitd");
            assert_eq!(source.to_string(), "connection refused");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_group_name_fails_before_listing() {
    // Arrange
    let lister = StaticPodLister::failing("must not be called");
    let group = ReplicaGroup::new("not a label!");

    // Act
    let err = list_running_pods(&lister, &group, &CancellationToken::new(), None)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(err, DiscoveryError::InvalidSelector(_)));
}

#[tokio::test]
async fn already_cancelled_token_short_circuits() {
    // Arrange
    let lister = StaticPodLister::new(vec![pod("w-1", PodPhase::Running)]);
    let cancel = CancellationToken::new();
    cancel.cancel();

    // Act
    let err = list_running_pods(&lister, &group(), &cancel, None)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(err, DiscoveryError::Cancelled { .. }));
}

#[tokio::test(start_paused = true)]
async fn cancellation_aborts_in_flight_list() {
    // Arrange
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let group = group();

    // Act
    let (result, _) = tokio::join!(
        list_running_pods(&HangingLister, &group, &cancel, None),
        async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        }
    );

    // Assert
    assert!(matches!(result, Err(DiscoveryError::Cancelled { .. })));
}

#[tokio::test(start_paused = true)]
async fn slow_list_times_out() {
    // Arrange
    let limit = Duration::from_secs(5);

    // Act
    let err = list_running_pods(&HangingLister, &group(), &CancellationToken::new(), Some(limit))
        .await
        .unwrap_err();

    // Assert
    match err {
        DiscoveryError::TimedOut { timeout, .. } => assert_eq!(timeout, limit),
        other => panic!("unexpected error: {other:?}"),
    }
}
