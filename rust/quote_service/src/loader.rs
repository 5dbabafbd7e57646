// src/loader.rs

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{GlobalQuoteResponse, Overview, Quote};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

const GLOBAL_QUOTE: &str = "GLOBAL_QUOTE";
const OVERVIEW: &str = "OVERVIEW";

// Keys the upstream uses in place of a payload
const RATE_LIMIT_KEYS: [&str; 2] = ["Note", "Information"];
const ERROR_MESSAGE_KEY: &str = "Error Message";

/// Source of per-symbol market data.
///
/// [`AlphaVantageClient`] is the network implementation; the aggregators are
/// generic over this trait so they can be driven by any source.
pub trait StockApi {
    fn fetch_quote(&self, symbol: &str) -> impl Future<Output = Result<Quote, ApiError>> + Send;

    fn fetch_overview(&self, symbol: &str) -> impl Future<Output = Result<Overview, ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    http: Client,
    config: ApiConfig,
}

impl AlphaVantageClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: ApiConfig) -> Self {
        AlphaVantageClient { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn query_url(&self, function: &str, symbol: &str) -> Result<Url, ApiError> {
        if symbol.trim().is_empty() {
            return Err(ApiError::InvalidRequest("symbol must not be empty".to_string()));
        }

        Url::parse_with_params(
            &self.config.base_url,
            &[
                ("function", function),
                ("symbol", symbol),
                ("apikey", self.config.api_key.as_str()),
            ],
        )
        .map_err(|e| ApiError::InvalidRequest(format!("{}: {}", self.config.base_url, e)))
    }

    async fn query<T: DeserializeOwned>(&self, function: &str, symbol: &str) -> Result<T, ApiError> {
        let url = self.query_url(function, symbol)?;
        log::debug!("[{symbol}] GET {function}");

        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimited(format!("HTTP {}", response.status())));
        }
        let body = response.error_for_status()?.text().await?;

        parse_body(&body)
    }
}

impl StockApi for AlphaVantageClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, ApiError> {
        let response: GlobalQuoteResponse = self.query(GLOBAL_QUOTE, symbol).await?;
        Ok(response.global_quote)
    }

    async fn fetch_overview(&self, symbol: &str) -> Result<Overview, ApiError> {
        self.query(OVERVIEW, symbol).await
    }
}

/// Classifies an upstream body and decodes it into `T`.
///
/// The upstream answers quota exhaustion and bad calls with status 200 and a
/// one-key object, so those are checked before the payload shape.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::NoData);
    }

    let value: Value = serde_json::from_str(body)?;
    if let Some(object) = value.as_object() {
        for key in RATE_LIMIT_KEYS {
            if let Some(message) = object.get(key) {
                return Err(ApiError::RateLimited(message_text(message)));
            }
        }
        if let Some(message) = object.get(ERROR_MESSAGE_KEY) {
            return Err(ApiError::InvalidRequest(message_text(message)));
        }
    }

    Ok(serde_json::from_value(value)?)
}

fn message_text(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}
