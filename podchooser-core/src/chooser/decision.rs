use crate::cluster::Pod;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    Random,
    StickyHash,
    /// The hash ring had no owner for the key; picked at random instead.
    StickyFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PodSelection {
    pub chosen: Pod,
    /// Every other running pod, in discovery order.
    pub others: Vec<Pod>,
    pub reason: SelectionReason,
}

impl PodSelection {
    /// Take the pod at `idx` out of `pods`. `idx` must be in bounds.
    pub(crate) fn split(mut pods: Vec<Pod>, idx: usize, reason: SelectionReason) -> Self {
        let chosen = pods.remove(idx);

        Self {
            chosen,
            others: pods,
            reason,
        }
    }

    pub fn into_parts(self) -> (Pod, Vec<Pod>) {
        (self.chosen, self.others)
    }

    /// Size of the running set this selection was made from.
    pub fn pool_size(&self) -> usize {
        self.others.len() + 1
    }
}
