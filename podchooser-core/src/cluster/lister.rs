use crate::cluster::{LabelSelector, Pod};
use async_trait::async_trait;
use std::sync::Mutex;

/// Read-only "list pods matching a label selector" capability of the
/// orchestrator client. The namespace is implied by the implementor.
#[async_trait]
pub trait PodLister: Send + Sync {
    async fn list(&self, selector: &LabelSelector) -> anyhow::Result<Vec<Pod>>;
}

/// In-memory lister over a fixed pod snapshot.
#[derive(Debug, Default)]
pub struct StaticPodLister {
    pods: Mutex<Vec<Pod>>,
    failure: Option<String>,
}

impl StaticPodLister {
    pub fn new(pods: Vec<Pod>) -> Self {
        Self {
            pods: Mutex::new(pods),
            failure: None,
        }
    }

    /// A lister whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            pods: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Parse a JSON array of pods.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let pods: Vec<Pod> = serde_json::from_str(json)?;
        Ok(Self::new(pods))
    }

    /// Replace the snapshot, as a scale-up, scale-down or restart would.
    pub fn set_pods(&self, pods: Vec<Pod>) {
        *self.pods.lock().unwrap_or_else(|e| e.into_inner()) = pods;
    }
}

#[async_trait]
impl PodLister for StaticPodLister {
    async fn list(&self, selector: &LabelSelector) -> anyhow::Result<Vec<Pod>> {
        if let Some(message) = &self.failure {
            anyhow::bail!("{message}");
        }

        let pods = self.pods.lock().unwrap_or_else(|e| e.into_inner());
        Ok(pods
            .iter()
            .filter(|p| selector.matches(&p.labels))
            .cloned()
            .collect())
    }
}
