// Route aggregator
// Classifies the trip, walks the strategy list against the directions
// provider, and collects up to MAX_ROUTES distinct alternatives
//
// Numan Thabit 2025 Nov

use crate::errors::AggrError;
use crate::provider::MapsProvider;
use crate::router::collector::{RouteCandidate, RouteCollector};
use crate::router::distance::{estimate_distance_km, TripMode};
use crate::router::strategy::STRATEGIES;
use tracing::{debug, info, warn};

/// Outcome of one aggregation run
#[derive(Debug, Clone)]
pub struct AggregatedRoutes {
    /// `None` when either address could not be geocoded
    pub distance_km: Option<f64>,
    pub mode: TripMode,
    /// Number of strategies whose directions lookup was issued
    pub strategies_tried: usize,
    pub routes: Vec<RouteCandidate>,
}

pub struct RouteAggregator<P> {
    provider: P,
    region: String,
}

impl<P: MapsProvider> RouteAggregator<P> {
    pub fn new(provider: P, region: impl Into<String>) -> Self {
        Self {
            provider,
            region: region.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }

    /// Find up to three distinct driving routes between two addresses.
    ///
    /// Non-OK directions statuses skip the strategy; transport or HTTP
    /// failures of a directions lookup abort the whole run.
    pub async fn find_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<AggregatedRoutes, AggrError> {
        let distance_km = estimate_distance_km(&self.provider, origin, destination).await;
        let mode = TripMode::from_distance(distance_km);
        info!(
            origin = %origin,
            destination = %destination,
            distance_km = ?distance_km,
            mode = %mode,
            "trip classified"
        );

        let mut collector = RouteCollector::new();
        let mut strategies_tried = 0;

        for strategy in STRATEGIES.iter() {
            if collector.is_full() {
                break;
            }
            strategies_tried += 1;

            let query = strategy.directions_query(origin, destination, mode, &self.region);
            let resp = self.provider.directions(&query).await?;
            info!(
                strategy = %strategy,
                status = %resp.status,
                returned = resp.routes.len(),
                "directions lookup"
            );

            if !resp.is_ok() {
                warn!(
                    strategy = %strategy,
                    status = %resp.status,
                    message = ?resp.error_message,
                    "directions API error; skipping strategy"
                );
                continue;
            }

            let added = collector.extend_from(&resp.routes);
            debug!(strategy = %strategy, added, total = collector.len(), "collected routes");
        }

        info!(count = collector.len(), strategies_tried, "returning unique routes");

        Ok(AggregatedRoutes {
            distance_km,
            mode,
            strategies_tried,
            routes: collector.into_routes(),
        })
    }
}
