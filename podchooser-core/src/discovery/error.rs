use crate::cluster::SelectorError;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("cannot build pod selector: {0}")]
    InvalidSelector(#[from] SelectorError),

    #[error("failed to list pods for replica group '{group}'")]
    List {
        group: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("listing pods for replica group '{group}' was cancelled")]
    Cancelled { group: String },

    #[error("listing pods for replica group '{group}' timed out after {timeout:?}")]
    TimedOut { group: String, timeout: Duration },
}
