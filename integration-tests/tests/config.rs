use integration_tests::harness::{TestCluster, fixture_path};
use podchooser_core::conf::{ChooserStrategy, ConfigError, build_chooser, load_chooser_config};
use podchooser_core::{AffinityKey, CancellationToken, SelectionReason};
use pretty_assertions::assert_eq;

/// The sample file loads and builds a working sticky chooser
#[tokio::test]
async fn sticky_config_file_builds_sticky_chooser() {
    // Arrange
    let cluster = TestCluster::start("pods_mixed.json");
    let config = load_chooser_config(&fixture_path("sticky.hcl")).unwrap();

    // Act
    let chooser = build_chooser(
        &config,
        cluster.lister.clone(),
        Some(AffinityKey::from("session-42")),
    )
    .unwrap();
    let first = chooser.choose_pod(&CancellationToken::new()).await.unwrap();
    let second = chooser.choose_pod(&CancellationToken::new()).await.unwrap();

    // Assert
    assert_eq!(config.strategy, ChooserStrategy::Sticky);
    assert_eq!(config.replica_group, "buildkitd");
    assert_eq!(first.reason, SelectionReason::StickyHash);
    assert_eq!(first.chosen.name, second.chosen.name);
}

/// A sticky config without a key is rejected before any listing
#[tokio::test]
async fn sticky_config_without_key_is_rejected() {
    // Arrange
    let cluster = TestCluster::start("pods_mixed.json");
    let config = load_chooser_config(&fixture_path("sticky.hcl")).unwrap();

    // Act
    let result = build_chooser(&config, cluster.lister.clone(), None);

    // Assert
    assert!(matches!(
        result,
        Err(ConfigError::MissingAffinityKey { .. })
    ));
}
