use config::{Config, ConfigBuilder, ConfigError, Environment, File as ConfigFile};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT: &str = "./PDFs";
pub const DEFAULT_EXTENSION: &str = ".pdf";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuditConfig {
    /// Directory scanned recursively.
    pub root: PathBuf,
    /// Suffix a file name must end with to be audited.
    pub extension: String,
    /// Remove files that fail validation.
    pub delete_invalid: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            delete_invalid: false,
        }
    }
}

/// Defaults, then an optional `Config` file in the working directory, then
/// `PDF_SWEEP_*` environment variables.
pub fn load_configuration() -> Result<AuditConfig, ConfigError> {
    let builder = with_defaults()?
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(Environment::with_prefix("PDF_SWEEP").try_parsing(true))
        .build()?;
    builder.try_deserialize::<AuditConfig>()
}

/// Defaults overlaid with an explicit configuration file, which must exist.
pub fn load_configuration_from(path: impl AsRef<Path>) -> Result<AuditConfig, ConfigError> {
    let builder = with_defaults()?
        .add_source(ConfigFile::from(path.as_ref()).required(true))
        .build()?;
    builder.try_deserialize::<AuditConfig>()
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("root", DEFAULT_ROOT)?
        .set_default("extension", DEFAULT_EXTENSION)?
        .set_default("delete_invalid", false)
}
