use crate::chooser::{ChooseError, PodSelection};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Picks the pod that should take the next unit of work.
///
/// The selected pod is returned together with every other running pod of the
/// group, so callers can fall back without asking the orchestrator again.
#[async_trait]
pub trait PodChooser: Send + Sync {
    async fn choose_pod(&self, cancel: &CancellationToken) -> Result<PodSelection, ChooseError>;
}
