pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const HN_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hn-scraper")]
#[command(about = "Fetch top-level comments from a Hacker News thread via the official API")]
pub struct CliConfig {
    /// HN thread URL or numeric thread ID
    pub url_or_id: String,

    #[arg(short, long, default_value = "scraped_jobs.json")]
    pub output: String,

    #[arg(long, help = "Limit the number of comments to fetch")]
    pub limit: Option<usize>,

    #[arg(long, default_value = "10", help = "Maximum concurrent API requests")]
    pub max_concurrent: usize,

    #[arg(long, default_value = "0.1", help = "Delay between requests in seconds")]
    pub delay: f64,

    #[arg(long, default_value = HN_API_BASE)]
    pub api_base: String,

    #[arg(long, help = "Also write log lines to this file")]
    pub log_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_path("output", &self.output)?;
        validate_positive_number("max_concurrent", self.max_concurrent, 1)?;
        validate_range("delay", self.delay, 0.0, 60.0)?;
        if let Some(limit) = self.limit {
            validate_positive_number("limit", limit, 1)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    fn request_delay(&self) -> Duration {
        Duration::from_secs_f64(self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            url_or_id: "46857488".to_string(),
            output: "jobs.json".to_string(),
            limit: None,
            max_concurrent: 10,
            delay: 0.1,
            api_base: HN_API_BASE.to_string(),
            log_file: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = config();
        config.max_concurrent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_delay_rejected() {
        let mut config = config();
        config.delay = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = config();
        config.limit = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_api_base_rejected() {
        let mut config = config();
        config.api_base = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_delay_conversion() {
        assert_eq!(config().request_delay(), Duration::from_millis(100));
    }
}
