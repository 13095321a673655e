// Google Maps web services client
// This file implements the geocoding and directions lookups over HTTP,
// recording latency and error metrics for each call
//
// Numan Thabit 2025 Nov

use crate::config::ensure_trailing_slash;
use crate::errors::AggrError;
use crate::metrics::{REQ_ERRORS, REQ_LATENCY};
use crate::provider::{Coordinate, DirectionsQuery, DirectionsResponse, MapsProvider, STATUS_OK};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const SERVICE: &str = "google";

#[derive(Debug, Clone)]
pub struct GoogleMaps {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AggrError> {
        let http = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| AggrError::Transport(format!("build http client: {e}")))?;
        Ok(Self {
            http,
            base_url: ensure_trailing_slash(base_url),
            api_key: api_key.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, AggrError> {
        let _timer = REQ_LATENCY
            .with_label_values(&[SERVICE, method])
            .start_timer();

        let result = match self.base_url.join(path) {
            Ok(url) => self.send(url, params).await,
            Err(e) => Err(AggrError::Transport(format!("bad {method} url: {e}"))),
        };
        if result.is_err() {
            REQ_ERRORS.with_label_values(&[SERVICE, method]).inc();
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, AggrError> {
        let resp = self
            .http
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AggrError::Transport(format!("send: {e}")))?;
        if !resp.status().is_success() {
            return Err(AggrError::Provider(format!("http {}", resp.status())));
        }
        resp.json()
            .await
            .map_err(|e| AggrError::Decode(format!("json parse: {e}")))
    }
}

impl MapsProvider for GoogleMaps {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, AggrError> {
        let body: GeocodeResponse = self
            .get_json("geocode", "geocode/json", &[("address", address.to_string())])
            .await?;

        if body.status != STATUS_OK {
            warn!(
                address = %address,
                status = %body.status,
                message = ?body.error_message,
                "geocoding status not OK"
            );
            return Ok(None);
        }

        let coord = body.results.into_iter().next().map(|r| r.geometry.location);
        debug!(address = %address, coord = ?coord, "geocoded");
        Ok(coord)
    }

    async fn directions(&self, query: &DirectionsQuery) -> Result<DirectionsResponse, AggrError> {
        self.get_json("directions", "directions/json", &query.params())
            .await
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: Coordinate,
}
