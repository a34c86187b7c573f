use crate::chooser::algorithms::choose_random;
use crate::chooser::{ChooseError, PodChooser, PodSelection, SelectionReason, ThreadRngSource};
use crate::cluster::{PodLister, ReplicaGroup};
use crate::discovery::list_running_pods;
use crate::ring::{DEFAULT_POINTS_PER_NODE, HashRing};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Caller-supplied key that pins work to one pod, e.g. a build or session id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AffinityKey(String);

impl AffinityKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AffinityKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for AffinityKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for AffinityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sends the same key to the same pod while the running set is unchanged.
///
/// Placement uses a consistent hash ring over pod names, so scaling the
/// group only moves the keys owned by the pods that joined or left.
#[derive(Clone)]
pub struct StickyPodChooser {
    lister: Arc<dyn PodLister>,
    group: ReplicaGroup,
    key: AffinityKey,
    ring_points: usize,
    list_timeout: Option<Duration>,
}

impl StickyPodChooser {
    pub fn new(lister: Arc<dyn PodLister>, group: ReplicaGroup, key: AffinityKey) -> Self {
        Self {
            lister,
            group,
            key,
            ring_points: DEFAULT_POINTS_PER_NODE,
            list_timeout: None,
        }
    }

    /// Virtual positions per pod on the hash ring.
    pub fn with_ring_points(mut self, points: usize) -> Self {
        self.ring_points = points;
        self
    }

    pub fn with_list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = Some(timeout);
        self
    }

    pub fn affinity_key(&self) -> &AffinityKey {
        &self.key
    }

    pub fn replica_group(&self) -> &ReplicaGroup {
        &self.group
    }
}

impl fmt::Debug for StickyPodChooser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyPodChooser")
            .field("group", &self.group)
            .field("key", &self.key)
            .field("ring_points", &self.ring_points)
            .field("list_timeout", &self.list_timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PodChooser for StickyPodChooser {
    async fn choose_pod(&self, cancel: &CancellationToken) -> Result<PodSelection, ChooseError> {
        let pods =
            list_running_pods(self.lister.as_ref(), &self.group, cancel, self.list_timeout).await?;

        if pods.is_empty() {
            return Err(ChooseError::NoRunningPods {
                group: self.group.name.clone(),
            });
        }

        let owner = {
            let ring = HashRing::new(pods.iter().map(|p| p.name.as_str()), self.ring_points);
            ring.lookup(self.key.as_str())
                .and_then(|name| pods.iter().position(|p| p.name == name))
        };

        if let Some(idx) = owner {
            debug!(affinity_key = %self.key, pod = %pods[idx].name, "sticky pod choice");
            return Ok(PodSelection::split(pods, idx, SelectionReason::StickyHash));
        }

        warn!(
            affinity_key = %self.key,
            group = %self.group,
            pods = pods.len(),
            "no pod found on hash ring for affinity key; falling back to random selection"
        );

        let mut selection =
            choose_random(pods, &mut ThreadRngSource).ok_or_else(|| ChooseError::NoRunningPods {
                group: self.group.name.clone(),
            })?;
        selection.reason = SelectionReason::StickyFallback;

        Ok(selection)
    }
}
