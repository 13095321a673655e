// Error types and error handling module
// This file defines the errors raised while talking to the external
// geocoding and directions collaborators
//
// Numan Thabit 2025 Nov

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggrError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("decode error: {0}")]
    Decode(String),
}
