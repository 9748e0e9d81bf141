// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    log_filter: String,
    per_page: u32,
    seed_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const MAX_PER_PAGE: u32 = 100;

fn default_log_filter() -> String {
    "info".into()
}

fn default_per_page() -> u32 {
    10
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let log_filter = lookup("NEWSDESK_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        let per_page = match lookup("NEWSDESK_PER_PAGE") {
            Some(raw) => parse_per_page(&raw)?,
            None => default_per_page(),
        };

        let seed_file = lookup("NEWSDESK_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_filter,
            per_page,
            seed_file,
        })
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn seed_file(&self) -> Option<&PathBuf> {
        self.seed_file.as_ref()
    }
}

fn parse_per_page(raw: &str) -> Result<u32, ConfigError> {
    let value = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::Invalid(format!("NEWSDESK_PER_PAGE is not a number: {raw}")))?;
    if value == 0 || value > MAX_PER_PAGE {
        return Err(ConfigError::Invalid(format!(
            "NEWSDESK_PER_PAGE must be between 1 and {MAX_PER_PAGE}"
        )));
    }
    Ok(value)
}
