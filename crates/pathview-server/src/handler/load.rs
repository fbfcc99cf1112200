//! Handler for resolving a share identifier to its stored pathway.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::handler::Result;
use crate::handler::error::ErrorKind;
use crate::service::{SharedPathway, SharingService};

/// Tracing target for load operations.
const TRACING_TARGET: &str = "pathview_server::handler::load";

/// Query parameters of `GET /load`.
#[derive(Debug, Deserialize)]
pub(crate) struct LoadQuery {
    id: Option<String>,
}

/// `GET /load?id=<8-char-hex-or-hyphen>`
///
/// Returns the stored `{ pathway, name }` record. 400 for a missing or
/// malformed id, 404 when no stored entry matches, 500 on storage failure.
pub(crate) async fn load_pathway(
    State(sharing): State<SharingService>,
    Query(query): Query<LoadQuery>,
) -> Result<Json<SharedPathway>> {
    let Some(id) = query.id else {
        return Err(ErrorKind::MissingId.into());
    };

    tracing::debug!(
        target: TRACING_TARGET,
        id = %id,
        "Load requested"
    );

    let record = sharing.retrieve(&id).await.inspect_err(|err| {
        tracing::warn!(
            target: TRACING_TARGET,
            id = %id,
            error = %err,
            "Load failed"
        );
    })?;

    Ok(Json(record))
}
