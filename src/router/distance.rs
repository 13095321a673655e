// Distance estimation and trip mode selection
// Straight-line distance between two geocoded addresses decides whether a
// trip is treated as lastmile or intercity
//
// Numan Thabit 2025 Nov

use crate::provider::{Coordinate, MapsProvider};
use geo::{Distance, Geodesic, Point};
use std::fmt;
use tracing::warn;

/// Trips strictly longer than this are intercity
pub const INTERCITY_THRESHOLD_KM: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripMode {
    Lastmile,
    Intercity,
}

impl TripMode {
    /// An unknown distance counts as 0 km
    pub fn from_distance(distance_km: Option<f64>) -> Self {
        if distance_km.unwrap_or(0.0) > INTERCITY_THRESHOLD_KM {
            TripMode::Intercity
        } else {
            TripMode::Lastmile
        }
    }
}

impl fmt::Display for TripMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripMode::Lastmile => f.write_str("lastmile"),
            TripMode::Intercity => f.write_str("intercity"),
        }
    }
}

/// Geodesic distance on the WGS-84 ellipsoid, in kilometres
pub fn geodesic_km(a: Coordinate, b: Coordinate) -> f64 {
    let p1 = Point::new(a.lng, a.lat);
    let p2 = Point::new(b.lng, b.lat);
    Geodesic::distance(p1, p2) / 1000.0
}

/// Geocode both ends and measure the straight-line distance between them.
///
/// Returns `None` when either lookup errors or yields no result.
pub async fn estimate_distance_km<P: MapsProvider>(
    provider: &P,
    origin: &str,
    destination: &str,
) -> Option<f64> {
    let from = locate(provider, origin).await;
    let to = locate(provider, destination).await;
    Some(geodesic_km(from?, to?))
}

async fn locate<P: MapsProvider>(provider: &P, address: &str) -> Option<Coordinate> {
    match provider.geocode(address).await {
        Ok(Some(coord)) => Some(coord),
        Ok(None) => {
            warn!(address = %address, "geocoding returned no result");
            None
        }
        Err(err) => {
            warn!(address = %address, error = %err, "geocoding failed");
            None
        }
    }
}
