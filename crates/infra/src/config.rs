//! Configuration loading and representation.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use talentdesk_observability::LogFormat;

use crate::seed::SeedSource;
use crate::service::LatencyPolicy;

pub const LATENCY_MS_VAR: &str = "TALENTDESK_LATENCY_MS";
pub const JOBS_SEED_VAR: &str = "TALENTDESK_JOBS_SEED";
pub const CANDIDATES_SEED_VAR: &str = "TALENTDESK_CANDIDATES_SEED";
pub const LOG_FORMAT_VAR: &str = "TALENTDESK_LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Process configuration.
///
/// Every setting has a default; a variable that is set but malformed is an
/// error rather than being silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub latency: LatencyPolicy,
    pub jobs_seed: SeedSource,
    pub candidates_seed: SeedSource,
    pub log_format: LogFormat,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            latency: LatencyPolicy::default(),
            jobs_seed: SeedSource::Embedded,
            candidates_seed: SeedSource::Embedded,
            log_format: LogFormat::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(LATENCY_MS_VAR)) {
            let ms = raw.parse::<u64>().with_context(|| {
                format!("{LATENCY_MS_VAR} must be a whole number of milliseconds")
            })?;
            config.latency = LatencyPolicy::uniform(Duration::from_millis(ms));
        }

        if let Some(path) = non_empty(lookup(JOBS_SEED_VAR)) {
            config.jobs_seed = SeedSource::File(PathBuf::from(path));
        }

        if let Some(path) = non_empty(lookup(CANDIDATES_SEED_VAR)) {
            config.candidates_seed = SeedSource::File(PathBuf::from(path));
        }

        if let Some(raw) = non_empty(lookup(LOG_FORMAT_VAR)) {
            config.log_format = raw
                .parse()
                .with_context(|| format!("invalid {LOG_FORMAT_VAR}"))?;
        }

        if let Some(filter) = non_empty(lookup(LOG_FILTER_VAR)) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
