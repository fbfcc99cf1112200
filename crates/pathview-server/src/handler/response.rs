//! Response body types shared across handlers.

use serde::{Deserialize, Serialize};

/// JSON error body: `{ "error": <message> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Response body for a successful share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    /// The allocated 8-character identifier.
    pub id: String,
    /// Human-shareable viewer URL embedding the identifier.
    pub url: String,
    /// Direct URL of the stored blob.
    pub blob_url: String,
}

/// Response body for the health probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
}
