//! Request handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info};

use crate::domain::validate_domain;
use crate::models::ReconRequest;
use crate::run::{run_recon, ReconContext};

use super::types::{ErrorResponse, HealthResponse};

/// `POST /api/v1/recon`
///
/// 422 for an invalid domain, 200 with the `ReconResult` otherwise. A run
/// that fails unexpectedly answers 500 with an opaque message; the cause is
/// only logged.
pub async fn recon_handler(
    State(ctx): State<Arc<ReconContext>>,
    Json(request): Json<ReconRequest>,
) -> Response {
    let domain = match validate_domain(&request.domain) {
        Ok(domain) => domain,
        Err(e) => {
            info!("Rejected recon request for {:?}: {e}", request.domain);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    match run_recon(&domain, &ctx).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!("Recon for {domain} failed: {e:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// `GET /health`
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
        .into_response()
}
