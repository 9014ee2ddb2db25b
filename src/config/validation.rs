//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Minimum attempts when drawing excerpts (at least one real draw).
pub const MIN_EXCERPT_RETRY_BUDGET: u32 = 1;

/// Maximum allowed retry budget for any bounded selection loop.
pub const MAX_RETRY_BUDGET: u32 = 10_000;

/// Maximum number of reports per run.
pub const MAX_REPORT_COUNT: u32 = 100;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`] if `FACTS_PATH` or
/// `SOURCES_PATH` is empty.
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `DISPLAY_NAME` must not be blank
/// - `EXCERPT_RETRY_BUDGET` must be between 1 and 10000
/// - `TEMPLATE_RETRY_BUDGET` must be at most 10000
/// - `REPORT_COUNT` must be between 1 and 100
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.facts_path.trim().is_empty() {
        return Err(ConfigError::MissingRequired {
            var: "FACTS_PATH".into(),
        });
    }

    if config.sources_path.trim().is_empty() {
        return Err(ConfigError::MissingRequired {
            var: "SOURCES_PATH".into(),
        });
    }

    if config.display_name.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DISPLAY_NAME".into(),
            reason: "must not be blank".into(),
        });
    }

    if !(MIN_EXCERPT_RETRY_BUDGET..=MAX_RETRY_BUDGET).contains(&config.excerpt_retry_budget) {
        return Err(ConfigError::InvalidValue {
            var: "EXCERPT_RETRY_BUDGET".into(),
            reason: format!("must be between {MIN_EXCERPT_RETRY_BUDGET} and {MAX_RETRY_BUDGET}"),
        });
    }

    if config.template_retry_budget > MAX_RETRY_BUDGET {
        return Err(ConfigError::InvalidValue {
            var: "TEMPLATE_RETRY_BUDGET".into(),
            reason: format!("must be between 0 and {MAX_RETRY_BUDGET}"),
        });
    }

    if config.report_count == 0 || config.report_count > MAX_REPORT_COUNT {
        return Err(ConfigError::InvalidValue {
            var: "REPORT_COUNT".into(),
            reason: format!("must be between 1 and {MAX_REPORT_COUNT}"),
        });
    }

    Ok(())
}
