//! Liveness probe.

use axum::Json;

use crate::handler::response::HealthResponse;

/// `GET /health`
///
/// Returns 200 while the process serves requests. The service holds no
/// connections worth probing beyond the blob store, which is only touched
/// on demand.
pub(crate) async fn health_status() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
