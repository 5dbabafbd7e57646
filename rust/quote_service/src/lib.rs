// src/lib.rs

pub mod aggregator;
pub mod config;
pub mod detail;
pub mod error;
pub mod loader;
pub mod models;
pub mod store;

#[cfg(test)]
mod stub;

pub use aggregator::{fetch_all, fetch_summary};
pub use config::{ApiConfig, Settings};
pub use detail::{fetch_detail, DetailFetcher, DetailStatus};
pub use error::{ApiError, ConfigError, FleetError, ListError};
pub use loader::{AlphaVantageClient, StockApi};
pub use models::{Overview, Quote, StockDetail, StockSummary};
pub use store::{StockListHandle, StockListState};
