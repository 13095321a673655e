// Transport layer for external collaborators
// This file groups the HTTP clients used to reach third-party map services
//
// Numan Thabit 2025 Nov

pub mod google;

pub use google::GoogleMaps;
