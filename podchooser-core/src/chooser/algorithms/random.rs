use crate::chooser::{
    ChooseError, PodChooser, PodSelection, RandSource, SelectionReason, ThreadRngSource,
};
use crate::cluster::{Pod, PodLister, ReplicaGroup};
use crate::discovery::list_running_pods;
use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Uniform pick over an already discovered set. `None` when `pods` is empty.
pub fn choose_random(pods: Vec<Pod>, source: &mut dyn RandSource) -> Option<PodSelection> {
    if pods.is_empty() {
        return None;
    }

    let n = source.next_index(pods.len()) % pods.len();
    debug!(len = pods.len(), n, "random pod choice");

    Some(PodSelection::split(pods, n, SelectionReason::Random))
}

/// Chooses uniformly among the running pods of a group.
pub struct RandomPodChooser {
    lister: Arc<dyn PodLister>,
    group: ReplicaGroup,
    rand_source: Option<Mutex<Box<dyn RandSource>>>,
    list_timeout: Option<Duration>,
}

impl RandomPodChooser {
    pub fn new(lister: Arc<dyn PodLister>, group: ReplicaGroup) -> Self {
        Self {
            lister,
            group,
            rand_source: None,
            list_timeout: None,
        }
    }

    /// Draw from `source` instead of the thread-local generator.
    pub fn with_rand_source(mut self, source: impl RandSource + 'static) -> Self {
        self.rand_source = Some(Mutex::new(Box::new(source)));
        self
    }

    pub fn with_list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = Some(timeout);
        self
    }

    pub fn replica_group(&self) -> &ReplicaGroup {
        &self.group
    }
}

impl fmt::Debug for RandomPodChooser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPodChooser")
            .field("group", &self.group)
            .field("injected_source", &self.rand_source.is_some())
            .field("list_timeout", &self.list_timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PodChooser for RandomPodChooser {
    async fn choose_pod(&self, cancel: &CancellationToken) -> Result<PodSelection, ChooseError> {
        let pods =
            list_running_pods(self.lister.as_ref(), &self.group, cancel, self.list_timeout).await?;

        let selection = match &self.rand_source {
            Some(source) => {
                let mut source = source.lock().unwrap_or_else(PoisonError::into_inner);
                choose_random(pods, &mut **source)
            }
            None => choose_random(pods, &mut ThreadRngSource),
        };

        selection.ok_or_else(|| ChooseError::NoRunningPods {
            group: self.group.name.clone(),
        })
    }
}
