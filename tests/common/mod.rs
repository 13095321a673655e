//! Shared utilities for API tests: a mock Google Maps backend.

use route_aggr::router::router::create_api_router;
use route_aggr::router::RouteAggregator;
use route_aggr::transport::GoogleMaps;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Build the API router against a mock maps server.
pub fn api_router(server: &MockServer) -> axum::Router {
    let base = Url::parse(&format!("{}/maps/api/", server.uri())).unwrap();
    let maps = GoogleMaps::new(base, "test-key", Duration::from_secs(5)).unwrap();
    let aggregator = Arc::new(RouteAggregator::new(maps, "sa"));
    let origins: Vec<String> = ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect();
    create_api_router(aggregator, &origins).unwrap()
}

/// Geocoder that knows a fixed set of addresses and returns ZERO_RESULTS otherwise.
pub async fn mount_geocoder(server: &MockServer, places: Vec<(&'static str, f64, f64)>) {
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(move |req: &Request| {
            let address = query_value(req, "address").unwrap_or_default();
            match places.iter().find(|(name, _, _)| *name == address) {
                Some((_, lat, lng)) => ResponseTemplate::new(200).set_body_json(json!({
                    "status": "OK",
                    "results": [{ "geometry": { "location": { "lat": lat, "lng": lng } } }]
                })),
                None => ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "ZERO_RESULTS", "results": [] })),
            }
        })
        .mount(server)
        .await;
}

/// Directions backend answering per `avoid` value ("none" when absent).
pub async fn mount_directions<F>(server: &MockServer, by_avoid: F)
where
    F: Fn(&str) -> Value + Send + Sync + 'static,
{
    Mock::given(method("GET"))
        .and(path("/maps/api/directions/json"))
        .respond_with(move |req: &Request| {
            let avoid = query_value(req, "avoid").unwrap_or_else(|| "none".to_string());
            ResponseTemplate::new(200).set_body_json(by_avoid(&avoid))
        })
        .mount(server)
        .await;
}

pub fn route(summary: &str, distance: &str, duration: &str) -> Value {
    json!({
        "summary": summary,
        "legs": [{ "distance": { "text": distance }, "duration": { "text": duration } }],
        "overview_polyline": { "points": format!("{summary}-poly") }
    })
}

pub fn ok(routes: Vec<Value>) -> Value {
    json!({ "status": "OK", "routes": routes })
}

pub fn query_value(req: &Request, key: &str) -> Option<String> {
    req.url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// `avoid` values of every directions request the mock received, in order.
pub async fn directions_calls(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path().ends_with("directions/json"))
        .map(|r| query_value(r, "avoid").unwrap_or_else(|| "none".to_string()))
        .collect()
}
