// Route collection and deduplication
// Accumulates candidates across strategies in discovery order, keeping only
// one route per (distance text, duration text) pair and at most MAX_ROUTES
//
// Numan Thabit 2025 Nov

use crate::provider::DirectionsRoute;
use serde::Serialize;
use tracing::warn;

/// Upper bound on routes returned to the caller
pub const MAX_ROUTES: usize = 3;

pub const UNNAMED_ROUTE: &str = "Unnamed Route";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteCandidate {
    pub summary: String,
    #[serde(rename = "distance")]
    pub distance_text: String,
    #[serde(rename = "duration")]
    pub duration_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,
}

impl RouteCandidate {
    /// Extract a candidate from the first leg of a provider route.
    /// Routes without legs carry no distance/duration and are rejected.
    pub fn from_route(route: &DirectionsRoute) -> Option<Self> {
        let leg = route.legs.first()?;
        Some(Self {
            summary: route
                .summary
                .clone()
                .unwrap_or_else(|| UNNAMED_ROUTE.to_string()),
            distance_text: leg.distance.text.clone(),
            duration_text: leg.duration.text.clone(),
            polyline: route
                .overview_polyline
                .as_ref()
                .map(|p| p.points.clone())
                .filter(|points| !points.is_empty()),
        })
    }

    fn same_key(&self, other: &RouteCandidate) -> bool {
        self.distance_text == other.distance_text && self.duration_text == other.duration_text
    }
}

#[derive(Debug, Default)]
pub struct RouteCollector {
    routes: Vec<RouteCandidate>,
}

impl RouteCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_full(&self) -> bool {
        self.routes.len() >= MAX_ROUTES
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Add a candidate unless it duplicates an existing key or the collector is full.
    /// Returns whether it was kept.
    pub fn offer(&mut self, candidate: RouteCandidate) -> bool {
        if self.is_full() || self.routes.iter().any(|r| r.same_key(&candidate)) {
            return false;
        }
        self.routes.push(candidate);
        true
    }

    /// Offer every route of one provider response, stopping once full.
    /// Returns how many new routes were kept.
    pub fn extend_from(&mut self, routes: &[DirectionsRoute]) -> usize {
        let mut added = 0;
        for route in routes {
            if self.is_full() {
                break;
            }
            match RouteCandidate::from_route(route) {
                Some(candidate) => {
                    if self.offer(candidate) {
                        added += 1;
                    }
                }
                None => warn!(summary = ?route.summary, "route has no legs; skipping"),
            }
        }
        added
    }

    pub fn into_routes(self) -> Vec<RouteCandidate> {
        self.routes
    }
}
