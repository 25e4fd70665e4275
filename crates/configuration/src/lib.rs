use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::ConfigArgs;
pub use settings::{Config, Defaults, Display, Limits, Logging};

/// File looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_NAME: &str = "accrue";

/// Prefix for environment overrides, e.g. `ACCRUE_LIMITS__MAX_TOTAL_PERIODS=5000`.
pub const ENV_PREFIX: &str = "ACCRUE";

/// Loads the application configuration.
///
/// Reads `path` if given (it must exist), otherwise an optional `accrue.toml` in the
/// working directory, then layers `ACCRUE_*` environment variables on top. The result
/// is deserialized into our strongly-typed `Config` struct and validated.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let builder = config::Config::builder();
    let builder = match path {
        Some(path) => builder.add_source(config::File::from(path)),
        None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
    };

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = settings.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

/// Parses configuration from TOML text, without consulting files or the environment.
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}
