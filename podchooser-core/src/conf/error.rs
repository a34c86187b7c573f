use crate::cluster::SelectorError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("sticky chooser for replica group '{group}' needs an affinity key")]
    MissingAffinityKey { group: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("replica_group must not be empty")]
    EmptyReplicaGroup,

    #[error("replica_group is not a valid label value: {0}")]
    InvalidReplicaGroup(#[from] SelectorError),

    #[error("ring_points must be greater than zero")]
    ZeroRingPoints,

    #[error("list_timeout_ms must be greater than zero")]
    ZeroListTimeout,

    #[error("seed only applies to the random strategy")]
    SeedWithoutRandom,
}

#[derive(Debug, Error)]
#[error("configuration validation failed with {} issue(s)", .0.len())]
pub struct ValidationErrors(pub Vec<ValidationIssue>);
