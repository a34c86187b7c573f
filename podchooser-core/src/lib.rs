//! Chooses which worker pod of a replica group takes the next unit of work.
//!
//! Discovery lists the group's running pods on every call. A chooser then
//! picks one of them, either uniformly at random or by consistent hashing of
//! an affinity key, and hands back the rest as fallbacks.

pub mod chooser;
pub mod cluster;
pub mod conf;
pub mod discovery;
pub mod logging;
pub mod ring;

pub use chooser::{
    AffinityKey, ChooseError, PodChooser, PodSelection, RandSource, RandomPodChooser,
    SelectionReason, StickyPodChooser,
};
pub use cluster::{LabelSelector, Pod, PodLister, PodPhase, ReplicaGroup, StaticPodLister};
pub use discovery::{DiscoveryError, list_running_pods};

pub use tokio_util::sync::CancellationToken;
