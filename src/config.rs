// Configuration management module
// This file handles loading and validation of configuration settings
// from environment variables
//
// Numan Thabit 2025 Nov

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Google Maps Platform key used for both geocoding and directions
    pub google_maps_api_key: String,
    /// Address the HTTP API binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Comma-separated list of origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    /// Region bias passed to the directions API (ccTLD code)
    #[serde(default = "default_region")]
    pub region: String,
    /// Timeout applied to every outbound maps request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Base URL of the maps web services; overridden in tests
    #[serde(default = "default_maps_base_url")]
    pub maps_base_url: Url,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?;
        let mut cfg: Self = cfg
            .try_deserialize()
            .context("deserialize configuration from environment")?;
        cfg.maps_base_url = ensure_trailing_slash(cfg.maps_base_url);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.google_maps_api_key.trim().is_empty() {
            bail!("GOOGLE_MAPS_API_KEY is empty");
        }
        if self.request_timeout_secs == 0 {
            bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
        }
        if self.cors_origins().is_empty() {
            bail!("ALLOWED_ORIGINS must list at least one origin");
        }
        if !self.maps_base_url.path().ends_with('/') {
            bail!("MAPS_BASE_URL must end with '/': {}", self.maps_base_url);
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("invalid bind address: {}", self.bind_address))
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Config with defaults for everything except the key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            google_maps_api_key: api_key.into(),
            bind_address: default_bind_address(),
            allowed_origins: default_allowed_origins(),
            region: default_region(),
            request_timeout_secs: default_request_timeout_secs(),
            maps_base_url: default_maps_base_url(),
        }
    }
}

/// `Url::join` replaces the last segment of a base without a trailing slash
pub fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn default_bind_address() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_allowed_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

fn default_region() -> String {
    "sa".to_string()
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_maps_base_url() -> Url {
    Url::parse("https://maps.googleapis.com/maps/api/").expect("static maps base url is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_dev_setup() {
        let cfg = AppConfig::with_api_key("k");
        assert_eq!(
            cfg.cors_origins(),
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert_eq!(cfg.region, "sa");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(15));
        assert_eq!(cfg.socket_addr().unwrap().port(), 8000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let cfg = AppConfig::with_api_key("   ");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn origins_are_trimmed_and_empty_entries_dropped() {
        let mut cfg = AppConfig::with_api_key("k");
        cfg.allowed_origins = " http://a.test , ,http://b.test".to_string();
        assert_eq!(cfg.cors_origins(), vec!["http://a.test", "http://b.test"]);

        cfg.allowed_origins = " , ".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn base_url_without_trailing_slash_is_normalized() {
        let raw = Url::parse("https://maps.example.test/maps/api").unwrap();
        let mut cfg = AppConfig::with_api_key("k");
        cfg.maps_base_url = raw.clone();
        assert!(cfg.validate().is_err());

        cfg.maps_base_url = ensure_trailing_slash(raw);
        assert!(cfg.validate().is_ok());
        assert_eq!(
            cfg.maps_base_url.join("geocode/json").unwrap().path(),
            "/maps/api/geocode/json"
        );

        let already = Url::parse("https://maps.example.test/maps/api/").unwrap();
        assert_eq!(ensure_trailing_slash(already.clone()), already);
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let mut cfg = AppConfig::with_api_key("k");
        cfg.bind_address = "not-an-addr".to_string();
        assert!(cfg.validate().is_err());
    }
}
