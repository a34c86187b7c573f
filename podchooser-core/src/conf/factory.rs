use crate::chooser::{AffinityKey, PodChooser, RandomPodChooser, StickyPodChooser};
use crate::cluster::PodLister;
use crate::conf::error::ConfigError;
use crate::conf::types::{ChooserConfig, ChooserStrategy};
use crate::conf::validate::validate_chooser_config;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::debug;

/// Build the chooser described by `config`.
///
/// The sticky strategy needs `affinity_key`; the random strategy ignores it.
pub fn build_chooser(
    config: &ChooserConfig,
    lister: Arc<dyn PodLister>,
    affinity_key: Option<AffinityKey>,
) -> Result<Box<dyn PodChooser>, ConfigError> {
    validate_chooser_config(config)?;

    let group = config.replica_group();

    let chooser: Box<dyn PodChooser> = match config.strategy {
        ChooserStrategy::Random => {
            let mut chooser = RandomPodChooser::new(lister, group);
            if let Some(seed) = config.seed {
                chooser = chooser.with_rand_source(StdRng::seed_from_u64(seed));
            }
            if let Some(timeout) = config.list_timeout() {
                chooser = chooser.with_list_timeout(timeout);
            }
            Box::new(chooser)
        }
        ChooserStrategy::Sticky => {
            let key = affinity_key.ok_or_else(|| ConfigError::MissingAffinityKey {
                group: config.replica_group.clone(),
            })?;

            let mut chooser =
                StickyPodChooser::new(lister, group, key).with_ring_points(config.ring_points);
            if let Some(timeout) = config.list_timeout() {
                chooser = chooser.with_list_timeout(timeout);
            }
            Box::new(chooser)
        }
    };

    debug!(
        group = %config.replica_group,
        strategy = ?config.strategy,
        "pod chooser built"
    );

    Ok(chooser)
}
