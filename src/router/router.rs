// Router HTTP API implementation
// This file provides the HTTP endpoints for route aggregation
//
// Numan Thabit 2025 Nov

use crate::provider::MapsProvider;
use crate::router::aggregator::RouteAggregator;
use crate::router::collector::RouteCandidate;
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::get,
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

pub const NO_ROUTES_FOUND: &str = "No routes found";

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
}

/// Body of `GET /routes`; an empty result is still a 200 with an `error` field
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RoutesResponse {
    Found { routes: Vec<RouteCandidate> },
    NotFound { error: String },
}

impl RoutesResponse {
    pub fn from_routes(routes: Vec<RouteCandidate>) -> Self {
        if routes.is_empty() {
            RoutesResponse::NotFound {
                error: NO_ROUTES_FOUND.to_string(),
            }
        } else {
            RoutesResponse::Found { routes }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create the HTTP router with API endpoints
pub fn create_api_router<P>(
    aggregator: Arc<RouteAggregator<P>>,
    allowed_origins: &[String],
) -> Result<AxumRouter>
where
    P: MapsProvider + 'static,
{
    let origins = allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin: {o}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(AxumRouter::new()
        .route("/health", get(health_check))
        .route("/routes", get(get_routes::<P>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(aggregator))
}

/// Health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Aggregate up to three distinct driving routes between two addresses
async fn get_routes<P: MapsProvider + 'static>(
    State(aggregator): State<Arc<RouteAggregator<P>>>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RoutesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let found = aggregator
        .find_routes(&req.origin, &req.destination)
        .await
        .map_err(|e| {
            error!(error = %e, origin = %req.origin, destination = %req.destination, "route aggregation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    Ok(Json(RoutesResponse::from_routes(found.routes)))
}
