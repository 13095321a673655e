// Router module - route aggregation plane
// This file wires trip classification, strategy iteration and result
// collection behind the HTTP API
//
// Numan Thabit 2025 Nov

pub mod aggregator;
pub mod collector;
pub mod distance;
pub mod strategy;

#[allow(clippy::module_inception)]
pub mod router;

pub use aggregator::{AggregatedRoutes, RouteAggregator};
pub use collector::{RouteCandidate, RouteCollector, MAX_ROUTES};
pub use distance::TripMode;
pub use strategy::{Strategy, STRATEGIES};
