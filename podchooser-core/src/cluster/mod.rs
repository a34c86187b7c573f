mod lister;
mod selector;
mod types;

pub use lister::{PodLister, StaticPodLister};
pub use selector::{APP_LABEL, LabelSelector, SelectorError, validate_label_value};
pub use types::{Pod, PodPhase, ReplicaGroup};
