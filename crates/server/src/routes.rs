//! HTTP routes, handlers and middleware.

use std::time::{Duration, Instant};

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{info, Instrument};

use catalog::HotelOffer;
use engine::FilterCriteria;

use crate::error::ApiError;
use crate::orchestrator::RecommendationOrchestrator;

pub const RECOMMENDATIONS_PATH: &str = "/api/customers/recommendations";

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: RecommendationOrchestrator,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(orchestrator: RecommendationOrchestrator, request_timeout: Duration) -> Self {
        Self {
            orchestrator,
            request_timeout,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            RECOMMENDATIONS_PATH,
            get(preview_handler).post(recommend_handler),
        )
        .route("/healthz", get(healthz_handler))
        .layer(from_fn_with_state(state.clone(), request_middleware))
        .with_state(state)
}

/// POST: decode the filter body and run the engine
async fn recommend_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<HotelOffer>>, ApiError> {
    let criteria = FilterCriteria::from_json(&body)?;
    let offers = state.orchestrator.get_recommendations(criteria).await?;
    Ok(Json(offers))
}

/// GET: fixed-size unfiltered prefix of the catalog
async fn preview_handler(State(state): State<AppState>) -> Json<Vec<HotelOffer>> {
    Json(state.orchestrator.preview())
}

async fn healthz_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "offers": state.orchestrator.catalog_size(),
    }))
}

/// Request span, access log line and request timeout
async fn request_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, route = %route);

    async move {
        let start = Instant::now();
        let response = match tokio::time::timeout(state.request_timeout, next.run(request)).await {
            Ok(response) => response,
            Err(_) => ApiError::Timeout.into_response(),
        };
        info!(
            status = response.status().as_u16(),
            latency_ms = start.elapsed().as_millis() as u64,
            "{} {}",
            method,
            route
        );
        response
    }
    .instrument(span)
    .await
}
