//! Layered configuration loading
//!
//! Precedence, lowest first: the environment preset from
//! [`AppConfig::from_env`], `config/default.*`, the per-environment file, then
//! `BLOG__`-prefixed variables (`BLOG__SERVER__PORT=8080`).

use bh_shared::config::AppConfig;
use config::{Config, ConfigError, Environment as EnvironmentSource, File};

/// Prefix for structured environment overrides
pub const ENV_PREFIX: &str = "BLOG";

/// Load the application configuration from all sources
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let preset = AppConfig::from_env();
    let environment_file = preset.environment.config_file().to_string();

    Config::builder()
        .add_source(Config::try_from(&preset)?)
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&environment_file).required(false))
        .add_source(
            EnvironmentSource::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
