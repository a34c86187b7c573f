
use crate::chooser::{PodSelection, RandSource};
use crate::cluster::{Pod, PodPhase, ReplicaGroup, StaticPodLister};
use std::collections::VecDeque;
use std::sync::Arc;

// ---------------------------
// Helpers
// ---------------------------

pub(super) const GROUP: &str = "buildkitd";

pub(super) fn group() -> ReplicaGroup {
    ReplicaGroup::new(GROUP)
}

pub(super) fn pod(name: &str, phase: PodPhase) -> Pod {
    Pod::new(name, phase).with_label("app", GROUP)
}

pub(super) fn running(names: &[&str]) -> Vec<Pod> {
    names.iter().map(|n| pod(n, PodPhase::Running)).collect()
}

pub(super) fn lister(pods: Vec<Pod>) -> Arc<StaticPodLister> {
    Arc::new(StaticPodLister::new(pods))
}

pub(super) fn other_names(selection: &PodSelection) -> Vec<&str> {
    selection.others.iter().map(|p| p.name.as_str()).collect()
}

/// Replays a fixed sequence of draws, then keeps returning the last one.
#[derive(Debug)]
pub(super) struct FixedDraws {
    draws: VecDeque<usize>,
    last: usize,
}

impl FixedDraws {
    pub(super) fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            last: 0,
        }
    }
}

impl RandSource for FixedDraws {
    fn next_index(&mut self, _len: usize) -> usize {
        if let Some(next) = self.draws.pop_front() {
            self.last = next;
        }
        self.last
    }
}
