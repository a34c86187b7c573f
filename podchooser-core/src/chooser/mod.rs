//! Pod selection policies.
//!
//! Both policies run discovery on every call and share the `PodChooser`
//! contract, so callers never need to know which one they hold.

pub mod algorithms;
mod decision;
mod error;
mod rand_source;
mod strategy;

#[cfg(test)]
mod tests;

pub use algorithms::{AffinityKey, RandomPodChooser, StickyPodChooser, choose_random};
pub use decision::{PodSelection, SelectionReason};
pub use error::ChooseError;
pub use rand_source::{RandSource, ThreadRngSource};
pub use strategy::PodChooser;
