use crate::config::types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;

const MAX_CONCURRENCY: u32 = 64;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.concurrency < 1 || config.concurrency > MAX_CONCURRENCY {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and {}, got {}",
            MAX_CONCURRENCY, config.concurrency
        )));
    }

    validate_timeout("robots-timeout-secs", config.robots_timeout_secs)?;
    validate_timeout("sitemap-timeout-secs", config.sitemap_timeout_secs)?;
    validate_timeout("page-timeout-secs", config.page_timeout_secs)?;

    if config.max_sitemaps < 1 {
        return Err(ConfigError::Validation(format!(
            "max-sitemaps must be >= 1, got {}",
            config.max_sitemaps
        )));
    }

    Ok(())
}

fn validate_timeout(name: &str, secs: u64) -> Result<(), ConfigError> {
    if secs < 1 || secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "{} must be between 1 and {}, got {}",
            name, MAX_TIMEOUT_SECS, secs
        )));
    }
    Ok(())
}

/// Validates user agent configuration
///
/// The value goes straight into a header, so it must be visible ASCII
/// (spaces allowed).
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.value.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent value cannot be empty".to_string(),
        ));
    }

    if !config
        .value
        .chars()
        .all(|c| c.is_ascii_graphic() || c == ' ')
    {
        return Err(ConfigError::Validation(format!(
            "user-agent value must be printable ASCII, got '{}'",
            config.value
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
