use crate::conf::error::ConfigError;
use crate::conf::types::ChooserConfig;
use crate::conf::validate::validate_chooser_config;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ChooserFile {
    chooser: ChooserConfig,
}

/// Read and parse a chooser file without validating it.
pub fn parse_chooser_config(path: &Path) -> Result<ChooserConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let parsed: ChooserFile = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    Ok(parsed.chooser)
}

pub fn load_chooser_config(path: &Path) -> Result<ChooserConfig, ConfigError> {
    let config = parse_chooser_config(path)?;
    validate_chooser_config(&config)?;

    Ok(config)
}
