//! Handler for persisting a pathway under a shareable identifier.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use crate::handler::Result;
use crate::handler::error::ErrorKind;
use crate::handler::response::ShareResponse;
use crate::service::{ServiceConfig, SharingService};

/// Tracing target for share operations.
const TRACING_TARGET: &str = "pathview_server::handler::share";

/// Request body of `POST /share`.
#[derive(Debug, Deserialize)]
pub(crate) struct ShareRequest {
    pathway: Option<Value>,
    name: Option<String>,
}

/// `POST /share` with body `{ pathway: { nodes, edges, … }, name? }`
///
/// Stores the document and returns `{ id, url, blobUrl }`. 400 when the
/// body has no pathway or the pathway lacks its node/edge lists, 500 on
/// storage failure.
pub(crate) async fn share_pathway(
    State(sharing): State<SharingService>,
    State(config): State<ServiceConfig>,
    Json(request): Json<ShareRequest>,
) -> Result<Json<ShareResponse>> {
    let Some(pathway) = request.pathway else {
        return Err(ErrorKind::BadRequest.into());
    };

    let stored = sharing
        .store(pathway, request.name)
        .await
        .inspect_err(|err| {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %err,
                "Share failed"
            );
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        id = %stored.id,
        "Pathway shared"
    );

    let blob_url = sharing
        .storage()
        .public_url(&stored.key)
        .unwrap_or_else(|| config.load_url(&stored.id));

    Ok(Json(ShareResponse {
        url: config.share_url(&stored.id),
        blob_url,
        id: stored.id,
    }))
}
