use crate::cluster::validate_label_value;
use crate::conf::error::{ValidationErrors, ValidationIssue};
use crate::conf::types::{ChooserConfig, ChooserStrategy};

#[derive(Default)]
pub struct ValidationCtx {
    issues: Vec<ValidationIssue>,
}

impl ValidationCtx {
    pub fn push(&mut self, issue: impl Into<ValidationIssue>) {
        self.issues.push(issue.into());
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.issues))
        }
    }
}

/// Check a chooser config, collecting every issue before failing.
pub fn validate_chooser_config(config: &ChooserConfig) -> Result<(), ValidationErrors> {
    let mut ctx = ValidationCtx::default();

    if config.replica_group.is_empty() {
        ctx.push(ValidationIssue::EmptyReplicaGroup);
    } else if let Err(e) = validate_label_value(&config.replica_group) {
        ctx.push(e);
    }

    if config.ring_points == 0 {
        ctx.push(ValidationIssue::ZeroRingPoints);
    }

    if config.seed.is_some() && config.strategy != ChooserStrategy::Random {
        ctx.push(ValidationIssue::SeedWithoutRandom);
    }

    if config.list_timeout_ms == Some(0) {
        ctx.push(ValidationIssue::ZeroListTimeout);
    }

    ctx.into_result()
}
