//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use hallucination_reports::config::{Config, DEFAULT_DISPLAY_NAME};
//!
//! // Use Config::from_env() in production
//! let config = Config::default();
//!
//! assert_eq!(config.display_name, DEFAULT_DISPLAY_NAME);
//! assert_eq!(config.excerpt_retry_budget, 120);
//! assert!(config.rng_seed.is_none());
//! ```

mod validation;

pub use validation::{
    validate_config, MAX_REPORT_COUNT, MAX_RETRY_BUDGET, MIN_EXCERPT_RETRY_BUDGET,
};

use crate::error::ConfigError;

/// Default path of the personal facts resource.
pub const DEFAULT_FACTS_PATH: &str = "./data/personal-facts.json";

/// Default path of the external sources resource.
pub const DEFAULT_SOURCES_PATH: &str = "./data/external-sources.json";

/// Default display name substituted into every template.
pub const DEFAULT_DISPLAY_NAME: &str = "Watson";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default attempt budget when drawing excerpts from sources.
pub const DEFAULT_EXCERPT_RETRY_BUDGET: u32 = 120;

/// Default redraw budget when a template collides with the recent set.
pub const DEFAULT_TEMPLATE_RETRY_BUDGET: u32 = 80;

/// Default number of reports the driver generates per run.
pub const DEFAULT_REPORT_COUNT: u32 = 1;

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the facts JSON resource.
    pub facts_path: String,
    /// Path of the sources JSON resource.
    pub sources_path: String,
    /// Name the reports are about.
    pub display_name: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Attempts allowed when drawing excerpts before falling back.
    pub excerpt_retry_budget: u32,
    /// Redraws allowed when a template was used recently.
    pub template_retry_budget: u32,
    /// Fixed seed for reproducible runs.
    pub rng_seed: Option<u64>,
    /// Number of reports to generate per run.
    pub report_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            facts_path: DEFAULT_FACTS_PATH.to_string(),
            sources_path: DEFAULT_SOURCES_PATH.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            excerpt_retry_budget: DEFAULT_EXCERPT_RETRY_BUDGET,
            template_retry_budget: DEFAULT_TEMPLATE_RETRY_BUDGET,
            rng_seed: None,
            report_count: DEFAULT_REPORT_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `FACTS_PATH`: Facts resource (default: `./data/personal-facts.json`)
    /// - `SOURCES_PATH`: Sources resource (default: `./data/external-sources.json`)
    /// - `DISPLAY_NAME`: Name used in reports (default: `Watson`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `EXCERPT_RETRY_BUDGET`: Excerpt draw attempts (default: `120`)
    /// - `TEMPLATE_RETRY_BUDGET`: Template redraws (default: `80`)
    /// - `RNG_SEED`: Seed for reproducible output (default: unset)
    /// - `REPORT_COUNT`: Reports per run (default: `1`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric variable does not parse or any
    /// value fails validation (see [`validate_config`]).
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let facts_path = std::env::var("FACTS_PATH").unwrap_or_else(|_| DEFAULT_FACTS_PATH.into());
        let sources_path =
            std::env::var("SOURCES_PATH").unwrap_or_else(|_| DEFAULT_SOURCES_PATH.into());
        let display_name =
            std::env::var("DISPLAY_NAME").unwrap_or_else(|_| DEFAULT_DISPLAY_NAME.into());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let excerpt_retry_budget =
            parse_env_u32("EXCERPT_RETRY_BUDGET", DEFAULT_EXCERPT_RETRY_BUDGET)?;
        let template_retry_budget =
            parse_env_u32("TEMPLATE_RETRY_BUDGET", DEFAULT_TEMPLATE_RETRY_BUDGET)?;
        let report_count = parse_env_u32("REPORT_COUNT", DEFAULT_REPORT_COUNT)?;
        let rng_seed = parse_env_optional_u64("RNG_SEED")?;

        let config = Self {
            facts_path,
            sources_path,
            display_name: display_name.trim().to_string(),
            log_level,
            excerpt_retry_budget,
            template_retry_budget,
            rng_seed,
            report_count,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an optional environment variable as u64.
fn parse_env_optional_u64(name: &str) -> Result<Option<u64>, ConfigError> {
    std::env::var(name).map_or(Ok(None), |val| {
        val.trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                var: name.into(),
                reason: "must be an unsigned 64-bit integer".into(),
            })
    })
}
