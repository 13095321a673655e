// Route strategies
// A fixed, ordered set of avoidance/traffic-model combinations used to
// coax different alternatives out of the same directions provider
//
// Numan Thabit 2025 Nov

pub use crate::provider::{Avoid, TrafficModel};

use crate::provider::DirectionsQuery;
use crate::router::distance::TripMode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub avoid: Option<Avoid>,
    pub traffic_model: TrafficModel,
}

/// Tried in this order; the aggregator stops early once it has enough routes
pub const STRATEGIES: [Strategy; 4] = [
    Strategy {
        avoid: None,
        traffic_model: TrafficModel::BestGuess,
    },
    Strategy {
        avoid: Some(Avoid::Tolls),
        traffic_model: TrafficModel::Pessimistic,
    },
    Strategy {
        avoid: Some(Avoid::Highways),
        traffic_model: TrafficModel::Optimistic,
    },
    Strategy {
        avoid: Some(Avoid::Ferries),
        traffic_model: TrafficModel::BestGuess,
    },
];

impl Strategy {
    /// Build the directions lookup for this strategy.
    /// Traffic modelling only applies to lastmile trips.
    pub fn directions_query(
        &self,
        origin: &str,
        destination: &str,
        mode: TripMode,
        region: &str,
    ) -> DirectionsQuery {
        DirectionsQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            region: region.to_string(),
            avoid: self.avoid,
            traffic_model: match mode {
                TripMode::Lastmile => Some(self.traffic_model),
                TripMode::Intercity => None,
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avoid={}/{}",
            self.avoid.map(Avoid::as_str).unwrap_or("none"),
            self.traffic_model.as_str()
        )
    }
}
