// src/detail.rs

use crate::error::ApiError;
use crate::loader::StockApi;
use crate::models::StockDetail;
use std::sync::Arc;
use tokio::sync::watch;

/// Fetches the fundamentals of one symbol. Quote data is not consulted.
pub async fn fetch_detail<A: StockApi>(api: &A, symbol: &str) -> Result<StockDetail, ApiError> {
    let overview = api.fetch_overview(symbol).await?;
    Ok(StockDetail::from(overview))
}

#[derive(Debug)]
pub enum DetailStatus {
    Loading,
    Loaded(StockDetail),
    Failed(ApiError),
}

impl DetailStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailStatus::Loading)
    }

    pub fn detail(&self) -> Option<&StockDetail> {
        match self {
            DetailStatus::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            DetailStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Owns the detail-view state for one symbol and publishes every change.
pub struct DetailFetcher<A> {
    api: Arc<A>,
    symbol: String,
    status: watch::Sender<DetailStatus>,
}

impl<A: StockApi> DetailFetcher<A> {
    pub fn new(api: Arc<A>, symbol: impl Into<String>) -> Self {
        let (status, _) = watch::channel(DetailStatus::Loading);
        DetailFetcher {
            api,
            symbol: symbol.into(),
            status,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> watch::Ref<'_, DetailStatus> {
        self.status.borrow()
    }

    /// Runs one fetch, resetting the status to `Loading` first.
    pub async fn load(&mut self) -> watch::Ref<'_, DetailStatus> {
        self.status.send_replace(DetailStatus::Loading);

        let next = match fetch_detail(self.api.as_ref(), &self.symbol).await {
            Ok(detail) => DetailStatus::Loaded(detail),
            Err(e) => {
                log::warn!("[{}] failed to load detail: {e}", self.symbol);
                DetailStatus::Failed(e)
            }
        };
        self.status.send_replace(next);
        self.status.borrow()
    }

    /// Discards whatever was shown and fetches again from scratch.
    pub async fn retry(&mut self) -> watch::Ref<'_, DetailStatus> {
        self.load().await
    }
}
