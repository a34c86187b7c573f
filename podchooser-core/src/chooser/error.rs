use crate::discovery::DiscoveryError;

#[derive(Debug, thiserror::Error)]
pub enum ChooseError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("no running pods in replica group '{group}'")]
    NoRunningPods { group: String },
}

impl ChooseError {
    /// The group exists but nothing is running. Worth retrying later.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ChooseError::NoRunningPods { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            ChooseError::Discovery(DiscoveryError::Cancelled { .. })
        )
    }
}
