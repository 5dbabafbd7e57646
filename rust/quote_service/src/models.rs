// src/models.rs

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

// Define the Global Quote API structure
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    pub global_quote: Quote,
}

/// Current price figures for one symbol, verbatim from upstream.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Quote {
    #[serde(rename = "01. symbol")]
    pub symbol: String,

    #[serde(rename = "05. price")]
    pub price: String,

    #[serde(rename = "09. change")]
    pub change: String,

    #[serde(rename = "10. change percent")]
    pub change_percent: String,
}

// Define Overview API structure
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Overview {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub market_capitalization: String,
    #[serde(rename = "PERatio")]
    pub pe_ratio: String,
    #[serde(rename = "52WeekHigh")]
    pub week_high_52: String,
    #[serde(rename = "52WeekLow")]
    pub week_low_52: String,
}

/// One row of the stock list: a quote and an overview joined on symbol.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StockSummary {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change_percent: String,
}

impl StockSummary {
    /// Joins both halves under `symbol`, the symbol the caller asked for.
    /// Both upstream echoes must name that symbol (ignoring case), otherwise
    /// the halves are not joined.
    pub fn merge(symbol: &str, quote: Quote, overview: Overview) -> Result<Self, ApiError> {
        if !quote.symbol.eq_ignore_ascii_case(symbol) || !overview.symbol.eq_ignore_ascii_case(symbol) {
            return Err(ApiError::SymbolMismatch {
                requested: symbol.to_string(),
                quote: quote.symbol,
                overview: overview.symbol,
            });
        }

        Ok(StockSummary {
            symbol: symbol.to_string(),
            name: overview.name,
            price: quote.price,
            change_percent: quote.change_percent,
        })
    }
}

/// Company fundamentals shown on the detail view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StockDetail {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub market_capitalization: String,
    pub pe_ratio: String,
    pub week_high_52: String,
    pub week_low_52: String,
}

impl From<Overview> for StockDetail {
    fn from(overview: Overview) -> Self {
        StockDetail {
            symbol: overview.symbol,
            name: overview.name,
            description: overview.description,
            market_capitalization: overview.market_capitalization,
            pe_ratio: overview.pe_ratio,
            week_high_52: overview.week_high_52,
            week_low_52: overview.week_low_52,
        }
    }
}
