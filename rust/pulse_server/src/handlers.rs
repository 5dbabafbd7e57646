// src/handlers.rs

use crate::models::{AppState, DetailResult, RefreshResult};
use actix_web::{get, post, web, HttpResponse, Responder};
use quote_service::{ApiError, DetailFetcher, DetailStatus};
use std::sync::Arc;

#[get("/stocks")]
pub async fn list_stocks(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.list.snapshot())
}

#[post("/stocks/refresh")]
pub async fn refresh_stocks(state: web::Data<AppState>) -> impl Responder {
    match state.list.refresh().await {
        Ok(generation) => HttpResponse::Accepted().json(RefreshResult { generation }),
        Err(err) => HttpResponse::ServiceUnavailable().body(err.to_string()),
    }
}

#[get("/stocks/{symbol}")]
pub async fn stock_detail(path: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let symbol = path.into_inner().trim().to_ascii_uppercase();
    let mut fetcher = DetailFetcher::new(Arc::clone(&state.api), symbol);

    let status = fetcher.load().await;
    match &*status {
        DetailStatus::Loaded(detail) => HttpResponse::Ok().json(DetailResult {
            success: true,
            detail: Some(detail.clone()),
            message: format!("Loaded {}", detail.symbol),
        }),
        DetailStatus::Failed(err) => {
            let mut response = match err {
                ApiError::RateLimited(_) => HttpResponse::TooManyRequests(),
                ApiError::InvalidRequest(_) => HttpResponse::BadRequest(),
                _ => HttpResponse::BadGateway(),
            };
            response.json(DetailResult {
                success: false,
                detail: None,
                message: err.to_string(),
            })
        }
        DetailStatus::Loading => HttpResponse::InternalServerError().json(DetailResult {
            success: false,
            detail: None,
            message: "Detail fetch did not complete".to_string(),
        }),
    }
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}
