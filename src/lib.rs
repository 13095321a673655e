// Library root module for route-aggr
// This file defines the public API and module structure for the route-aggr library
//
// Numan Thabit 2025 Nov

pub mod config;
pub mod errors;
pub mod metrics;
pub mod provider;
pub mod router;
pub mod transport;
