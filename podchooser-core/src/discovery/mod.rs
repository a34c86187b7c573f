//! Replica discovery.
//!
//! Turns a replica group into the ordered set of pods that can take work
//! right now. Every call queries the orchestrator once; nothing is cached.

mod error;

#[cfg(test)]
mod tests;

pub use error::DiscoveryError;

use crate::cluster::{LabelSelector, Pod, PodLister, ReplicaGroup};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// List the running pods of `group`, sorted by name.
///
/// An empty result is not an error here; the choosers decide what an empty
/// set means. The list call is abandoned as soon as `cancel` fires or the
/// optional `timeout` elapses.
pub async fn list_running_pods(
    lister: &dyn PodLister,
    group: &ReplicaGroup,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
) -> Result<Vec<Pod>, DiscoveryError> {
    let selector = LabelSelector::for_group(group)?;

    let listed = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(group = %group, "pod listing cancelled");
            return Err(DiscoveryError::Cancelled {
                group: group.name.clone(),
            });
        }
        listed = list_with_timeout(lister, &selector, group, timeout) => listed,
    };

    let pods = listed.inspect_err(|e| warn!(group = %group, error = %e, "pod discovery failed"))?;

    let mut running: Vec<Pod> = pods
        .into_iter()
        .filter(|pod| {
            if pod.is_running() {
                debug!(pod = %pod.name, "pod running");
                return true;
            }

            if pod.is_terminating() {
                debug!(pod = %pod.name, phase = %pod.phase, "skipping terminating pod");
            }
            false
        })
        .collect();

    running.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(running)
}

async fn list_with_timeout(
    lister: &dyn PodLister,
    selector: &LabelSelector,
    group: &ReplicaGroup,
    timeout: Option<Duration>,
) -> Result<Vec<Pod>, DiscoveryError> {
    let listed = match timeout {
        Some(limit) => match tokio::time::timeout(limit, lister.list(selector)).await {
            Ok(listed) => listed,
            Err(_) => {
                return Err(DiscoveryError::TimedOut {
                    group: group.name.clone(),
                    timeout: limit,
                });
            }
        },
        None => lister.list(selector).await,
    };

    listed.map_err(|source| DiscoveryError::List {
        group: group.name.clone(),
        source,
    })
}
