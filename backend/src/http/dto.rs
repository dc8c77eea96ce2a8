//! Envelope types for the HTTP API.
//!
//! The payload DTOs themselves live in [`crate::api`] and are re-exported
//! here for handler signatures.

use serde::{Deserialize, Serialize};

pub use crate::api::{DistributionReport, ScoreLookup, SubjectStatistics, TopEntry};

/// Success envelope wrapping every payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true` for successes
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    /// Status message
    pub message: String,
    /// Dataset backend connection status
    pub database: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
