use crate::cluster::ReplicaGroup;
use crate::ring::DEFAULT_POINTS_PER_NODE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChooserStrategy {
    #[default]
    Random,
    Sticky,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChooserConfig {
    /// Name of the replica group; pods carry it as their `app` label.
    pub replica_group: String,

    #[serde(default)]
    pub strategy: ChooserStrategy,

    /// Hash ring positions per pod (sticky only).
    #[serde(default = "default_ring_points")]
    pub ring_points: usize,

    pub list_timeout_ms: Option<u64>,

    /// Seeds the generator used by the random strategy.
    pub seed: Option<u64>,
}

impl ChooserConfig {
    pub fn new(replica_group: impl Into<String>, strategy: ChooserStrategy) -> Self {
        Self {
            replica_group: replica_group.into(),
            strategy,
            ring_points: DEFAULT_POINTS_PER_NODE,
            list_timeout_ms: None,
            seed: None,
        }
    }

    pub fn replica_group(&self) -> ReplicaGroup {
        ReplicaGroup::new(&self.replica_group)
    }

    pub fn list_timeout(&self) -> Option<Duration> {
        self.list_timeout_ms.map(Duration::from_millis)
    }
}

fn default_ring_points() -> usize {
    DEFAULT_POINTS_PER_NODE
}
