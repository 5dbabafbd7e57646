// src/stub.rs

use crate::error::ApiError;
use crate::loader::StockApi;
use crate::models::{Overview, Quote};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    InvalidRequest,
    NoData,
    Decoding,
    RateLimited,
}

impl Failure {
    fn to_error(self) -> ApiError {
        match self {
            Failure::InvalidRequest => ApiError::InvalidRequest("stubbed".to_string()),
            Failure::NoData => ApiError::NoData,
            Failure::Decoding => {
                let err = serde_json::from_str::<Overview>("{}").unwrap_err();
                ApiError::Decoding(err)
            }
            Failure::RateLimited => ApiError::RateLimited("stubbed".to_string()),
        }
    }
}

/// In-memory [`StockApi`] with canned answers per symbol.
#[derive(Default)]
pub struct StubApi {
    quotes: HashMap<String, Quote>,
    overviews: HashMap<String, Overview>,
    quote_failures: HashMap<String, Failure>,
    overview_failures: HashMap<String, Failure>,
    delay: Option<Duration>,
    quote_calls: AtomicUsize,
    overview_calls: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(mut self, symbol: &str, name: &str, price: &str, change_percent: &str) -> Self {
        self.quotes.insert(
            symbol.to_string(),
            Quote {
                symbol: symbol.to_string(),
                price: price.to_string(),
                change: "0.00".to_string(),
                change_percent: change_percent.to_string(),
            },
        );
        self.overviews.insert(
            symbol.to_string(),
            Overview {
                symbol: symbol.to_string(),
                name: name.to_string(),
                description: format!("{name} description"),
                market_capitalization: "1000000000".to_string(),
                pe_ratio: "20.5".to_string(),
                week_high_52: "200.00".to_string(),
                week_low_52: "100.00".to_string(),
            },
        );
        self
    }

    // Makes the canned quote for `symbol` claim to be for `echo` instead.
    pub fn with_quote_echo(mut self, symbol: &str, echo: &str) -> Self {
        if let Some(quote) = self.quotes.get_mut(symbol) {
            quote.symbol = echo.to_string();
        }
        self
    }

    pub fn with_overview_echo(mut self, symbol: &str, echo: &str) -> Self {
        if let Some(overview) = self.overviews.get_mut(symbol) {
            overview.symbol = echo.to_string();
        }
        self
    }

    pub fn with_quote_failure(mut self, symbol: &str, failure: Failure) -> Self {
        self.quote_failures.insert(symbol.to_string(), failure);
        self
    }

    pub fn with_overview_failure(mut self, symbol: &str, failure: Failure) -> Self {
        self.overview_failures.insert(symbol.to_string(), failure);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn quote_calls(&self) -> usize {
        self.quote_calls.load(Ordering::SeqCst)
    }

    pub fn overview_calls(&self) -> usize {
        self.overview_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl StockApi for StubApi {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, ApiError> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if let Some(failure) = self.quote_failures.get(symbol) {
            return Err(failure.to_error());
        }
        self.quotes.get(symbol).cloned().ok_or(ApiError::NoData)
    }

    async fn fetch_overview(&self, symbol: &str) -> Result<Overview, ApiError> {
        self.overview_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if let Some(failure) = self.overview_failures.get(symbol) {
            return Err(failure.to_error());
        }
        self.overviews.get(symbol).cloned().ok_or(ApiError::NoData)
    }
}
