// src/config.rs

use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashSet;
use validator::Validate;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_SYMBOLS: [&str; 7] = ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "NVDA", "META"];
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

const API_KEY_VAR: &str = "ALPHAVANTAGE_API_KEY";
const BASE_URL_VAR: &str = "ALPHAVANTAGE_BASE_URL";
const SYMBOLS_VAR: &str = "MARKET_PULSE_SYMBOLS";
const BIND_VAR: &str = "MARKET_PULSE_BIND";

// Upstream endpoint and credentials
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApiConfig {
    #[validate(url)]
    pub base_url: String,
    #[validate(length(min = 1))]
    pub api_key: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let config = ApiConfig {
            base_url: base_url.into(),
            api_key: api_key.into(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiConfig,
    pub symbols: Vec<String>,
    pub bind_address: String,
}

impl Settings {
    /// Reads settings from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api = ApiConfig::new(base_url, api_key)?;

        let symbols = match lookup(SYMBOLS_VAR) {
            Some(raw) => parse_symbols(&raw),
            None => DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        };

        let bind_address = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Settings {
            api,
            symbols,
            bind_address,
        })
    }
}

// Comma separated, first-seen order preserved, blanks and repeats dropped
pub fn parse_symbols(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}
