use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use crate::utils::config::EnvConfig;
use crate::utils::waafipay::WaafiPayGateway;

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub env: EnvConfig,
    pub gateway: Arc<dyn WaafiPayGateway>,
}

pub async fn health_checker(req: HttpRequest) -> impl Responder {
    let wants_html = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .map(|accept| accept.contains("text/html"))
        .unwrap_or(false);

    if wants_html {
        return HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body("<h1>WaafiPay relay backend alive</h1>");
    }

    HttpResponse::Ok().json(json!({ "status": "OK", "message": "WaafiPay relay backend alive" }))
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound()
        .json(json!({ "error": "Route not found, use / or /waafipay/confirm" }))
}

pub fn build_cors(env: &EnvConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE);

    match &env.allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}
