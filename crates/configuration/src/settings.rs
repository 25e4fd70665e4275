use crate::error::ConfigError;
use core_types::CompoundingFrequency;
use serde::{Deserialize, Serialize};

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Bounds on the work a single calculation may request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of compounding periods (years × periods per year).
    /// Requests beyond this are rejected during validation.
    pub max_total_periods: u64,
}

/// How numbers are rendered by the command-line front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Appended to every money amount, e.g. "원" or " USD". Empty by default.
    pub currency_suffix: String,
    /// Decimal places for balances and invested totals.
    pub amount_decimals: u32,
    /// Decimal places for unit prices and quantities.
    pub price_decimals: u32,
    /// Decimal places for percentages.
    pub percent_decimals: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// A `tracing` filter directive, e.g. "warn" or "simulator=debug".
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
}

/// Values used when the caller leaves an option out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub frequency: CompoundingFrequency,
}

// --- Default Implementations ---
// This allows a user to omit any section from their toml
// and still have it work with sensible defaults.

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_total_periods: 100_000,
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            currency_suffix: String::new(),
            amount_decimals: 0,
            price_decimals: 2,
            percent_decimals: 2,
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Largest number of decimal places a `Decimal` can carry.
const MAX_DECIMALS: u32 = 28;

impl Config {
    /// Rejects settings that would make every calculation fail or render nonsense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_total_periods == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_total_periods must be greater than 0".to_string(),
            ));
        }

        let decimals = [
            ("display.amount_decimals", self.display.amount_decimals),
            ("display.price_decimals", self.display.price_decimals),
            ("display.percent_decimals", self.display.percent_decimals),
        ];
        for (name, value) in decimals {
            if value > MAX_DECIMALS {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be at most {}",
                    name, MAX_DECIMALS
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
