#[cfg(feature = "cli")]
pub mod args;
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::CliConfig;

use crate::domain::options::OutputFormat;

pub(crate) const DEFAULT_FORMATS: &[OutputFormat] = &[OutputFormat::Text];
