pub mod error;
pub mod files;
pub mod openapi;

use anyhow::Context;
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;

use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[utoipa::path(get, path = "/api/health", tag = "System",
    responses((status = 200, body = HealthResponse)))]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub fn router(ctx: AppContext) -> anyhow::Result<Router> {
    let cors_origin = ctx.cfg.cors_origin.clone();

    let api = Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(files::routes(ctx));

    let mut app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = cors_origin {
        let origin = HeaderValue::from_str(&origin).context("FILEDIFF_CORS_ORIGIN")?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    Ok(app)
}
