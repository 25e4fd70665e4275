use crate::error::ConfigError;
use crate::load_config;
use crate::settings::Config;
use std::path::PathBuf;

/// Command-line flags that locate and override the configuration.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Path to a TOML configuration file (defaults to ./accrue.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum number of compounding periods a simulation may run.
    #[arg(long, global = true, value_name = "N")]
    pub max_periods: Option<u64>,

    /// Log filter directive, e.g. "debug" (RUST_LOG takes precedence).
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl ConfigArgs {
    /// Loads the configuration and applies the command-line overrides on top.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let mut config = load_config(self.config.as_deref())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(max_periods) = self.max_periods {
            config.limits.max_total_periods = max_periods;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
