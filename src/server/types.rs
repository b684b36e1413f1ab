//! Response bodies of the HTTP boundary.

use serde::Serialize;

/// Body of every non-success response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
