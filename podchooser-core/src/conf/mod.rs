mod error;
mod factory;
mod loader;
pub mod types;
mod validate;


pub use error::{ConfigError, ValidationErrors, ValidationIssue};
pub use factory::build_chooser;
pub use loader::{load_chooser_config, parse_chooser_config};
pub use types::{ChooserConfig, ChooserStrategy};
pub use validate::validate_chooser_config;
