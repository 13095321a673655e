// Maps provider seam
// This file defines the trait the route aggregator uses to reach the external
// geocoding and directions collaborators, plus the data both sides exchange
//
// Numan Thabit 2025 Nov

use crate::errors::AggrError;
use serde::Deserialize;
use std::future::Future;

/// Status string the directions API reports on success
pub const STATUS_OK: &str = "OK";

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// External geocoding + directions collaborator.
///
/// Futures are `Send` so the aggregator can run inside axum handlers.
pub trait MapsProvider: Send + Sync {
    /// Resolve an address to the first matching coordinate.
    /// `Ok(None)` means the provider answered but had no usable result.
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, AggrError>> + Send;

    fn directions(
        &self,
        query: &DirectionsQuery,
    ) -> impl Future<Output = Result<DirectionsResponse, AggrError>> + Send;
}

/// Route features the directions API can be told to avoid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avoid {
    Tolls,
    Highways,
    Ferries,
}

impl Avoid {
    pub fn as_str(self) -> &'static str {
        match self {
            Avoid::Tolls => "tolls",
            Avoid::Highways => "highways",
            Avoid::Ferries => "ferries",
        }
    }
}

/// Traffic model applied to departure-time estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficModel {
    BestGuess,
    Pessimistic,
    Optimistic,
}

impl TrafficModel {
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficModel::BestGuess => "best_guess",
            TrafficModel::Pessimistic => "pessimistic",
            TrafficModel::Optimistic => "optimistic",
        }
    }
}

/// One directions lookup, built per strategy
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsQuery {
    pub origin: String,
    pub destination: String,
    pub region: String,
    pub avoid: Option<Avoid>,
    /// Set only for lastmile trips; implies `departure_time=now`
    pub traffic_model: Option<TrafficModel>,
}

impl DirectionsQuery {
    /// Query parameters, excluding the API key
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
            ("mode", "driving".to_string()),
            ("alternatives", "true".to_string()),
            ("region", self.region.clone()),
        ];
        if let Some(model) = self.traffic_model {
            params.push(("departure_time", "now".to_string()));
            params.push(("traffic_model", model.as_str().to_string()));
        }
        if let Some(avoid) = self.avoid {
            params.push(("avoid", avoid.as_str().to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub overview_polyline: Option<OverviewPolyline>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    pub distance: TextValue,
    pub duration: TextValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewPolyline {
    #[serde(default)]
    pub points: String,
}
