// src/models.rs

use quote_service::{AlphaVantageClient, StockDetail, StockListHandle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared by every worker; the list store itself lives on the main runtime.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<AlphaVantageClient>,
    pub list: StockListHandle,
}

#[derive(Serialize, Deserialize)]
pub struct DetailResult {
    pub success: bool,
    pub detail: Option<StockDetail>,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct RefreshResult {
    pub generation: u64,
}
