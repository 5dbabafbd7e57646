// src/aggregator.rs

use crate::error::{ApiError, FleetError};
use crate::loader::StockApi;
use crate::models::StockSummary;
use futures::future::join_all;

/// Fetches quote and overview for `symbol` concurrently and joins them.
///
/// Both calls are always awaited. If both fail, the quote error is the one
/// reported. Halves whose echoed symbol differs from `symbol` are rejected.
pub async fn fetch_summary<A>(api: &A, symbol: &str) -> Result<StockSummary, ApiError>
where
    A: StockApi,
{
    let (quote, overview) = tokio::join!(api.fetch_quote(symbol), api.fetch_overview(symbol));
    StockSummary::merge(symbol, quote?, overview?)
}

/// Fans [`fetch_summary`] out over every symbol and waits for all of them.
///
/// Individual failures are logged and dropped. The survivors come back sorted
/// by symbol; an empty result is [`FleetError::NoDataAvailable`].
pub async fn fetch_all<A>(api: &A, symbols: &[String]) -> Result<Vec<StockSummary>, FleetError>
where
    A: StockApi,
{
    let outcomes = join_all(symbols.iter().map(|symbol| async move {
        (symbol, fetch_summary(api, symbol).await)
    }))
    .await;

    let mut stocks = Vec::with_capacity(outcomes.len());
    for (symbol, outcome) in outcomes {
        match outcome {
            Ok(summary) => stocks.push(summary),
            Err(e) => log::warn!("Error fetching {symbol}: {e}"),
        }
    }
    stocks.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    log::info!("Fetched {} of {} symbols", stocks.len(), symbols.len());
    if stocks.is_empty() {
        return Err(FleetError::NoDataAvailable);
    }
    Ok(stocks)
}
