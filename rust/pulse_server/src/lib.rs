// src/lib.rs

pub mod handlers;
pub mod models;

use actix_web::web;
use models::AppState;
use quote_service::{AlphaVantageClient, Settings, StockListHandle};
use std::sync::Arc;

/// Builds the client and starts the list store; needs a running tokio runtime.
pub fn app_state(settings: &Settings) -> AppState {
    let api = Arc::new(AlphaVantageClient::new(settings.api.clone()));
    let list = StockListHandle::spawn(Arc::clone(&api), settings.symbols.clone());
    AppState { api, list }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    use handlers::{health_check, list_stocks, refresh_stocks, stock_detail};

    cfg.service(list_stocks)
        .service(refresh_stocks)
        .service(stock_detail)
        .service(health_check);
}

pub async fn run_server(settings: Settings) -> std::io::Result<()> {
    use actix_web::{App, HttpServer};

    let state = web::Data::new(app_state(&settings));
    log::info!(
        "Starting pulse server at http://{} tracking {:?}",
        settings.bind_address,
        settings.symbols
    );

    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind(settings.bind_address.as_str())?
        .run()
        .await
}
