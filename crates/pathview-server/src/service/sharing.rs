//! Pathway sharing service: identifier allocation, persistence, retrieval.

use pathview_opendal::{StorageBackend, StorageError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Tracing target for sharing operations.
const TRACING_TARGET: &str = "pathview_server::service::sharing";

/// Namespace prefix for stored pathway blobs.
const NAMESPACE: &str = "pathways";

/// Display name used when the caller supplies none.
const DEFAULT_NAME: &str = "Shared Pathway";

/// Length of a share identifier.
const ID_LEN: usize = 8;

/// Errors produced by the sharing service.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// The document lacks a top-level `nodes` or `edges` list.
    #[error("invalid pathway data")]
    InvalidDocument,

    /// The identifier does not match the 8-character hex-or-hyphen shape.
    #[error("invalid id format: {0}")]
    InvalidIdentifier(String),

    /// No stored entry matches the identifier.
    #[error("pathway not found: {0}")]
    NotFound(String),

    /// A stored record could not be deserialized.
    #[error("stored pathway is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The backing store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A persisted shared pathway record.
///
/// Stored as UTF-8 JSON in the exact shape `{ "pathway": …, "name": … }`,
/// with the original raw document unmodified. Immutable once stored; there
/// is no update, expiry, or revocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedPathway {
    /// The original raw pathway document.
    pub pathway: Value,
    /// Display name for the share.
    pub name: String,
}

/// Outcome of a successful store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredShare {
    /// The allocated 8-character identifier.
    pub id: String,
    /// The blob key the record was written under.
    pub key: String,
}

/// Stores pathway documents in a blob store and resolves identifiers back
/// to them.
#[derive(Debug, Clone)]
pub struct SharingService {
    storage: StorageBackend,
}

impl SharingService {
    /// Creates a sharing service over the given storage backend.
    pub fn new(storage: StorageBackend) -> Self {
        Self { storage }
    }

    /// Returns the storage backend used by this service.
    pub fn storage(&self) -> &StorageBackend {
        &self.storage
    }

    /// Persists a pathway document under a freshly allocated identifier.
    ///
    /// The document must pass the pipeline's top-level shape check: `nodes`
    /// and `edges` both present as lists. The identifier is the first eight
    /// characters of a random v4 UUID. No collision check is performed;
    /// callers accept the negligible collision probability.
    pub async fn store(
        &self,
        pathway: Value,
        name: Option<String>,
    ) -> Result<StoredShare, ShareError> {
        if pathview_core::parse_value(&pathway).is_err() {
            return Err(ShareError::InvalidDocument);
        }

        let id = Uuid::new_v4().to_string()[..ID_LEN].to_owned();
        let key = format!("{NAMESPACE}/{id}.json");

        let record = SharedPathway {
            pathway,
            name: name.unwrap_or_else(|| DEFAULT_NAME.to_owned()),
        };
        let bytes = serde_json::to_vec(&record)?;

        self.storage.write(&key, &bytes).await?;

        tracing::info!(
            target: TRACING_TARGET,
            id = %id,
            name = %record.name,
            size = bytes.len(),
            "Pathway stored"
        );

        Ok(StoredShare { id, key })
    }

    /// Resolves an identifier to its stored pathway record.
    ///
    /// The identifier shape is validated before any storage access; lookup
    /// is by prefix match against the namespace, reading the first (and
    /// expected-only) matching entry.
    pub async fn retrieve(&self, id: &str) -> Result<SharedPathway, ShareError> {
        if !is_valid_id(id) {
            return Err(ShareError::InvalidIdentifier(id.to_owned()));
        }

        let prefix = format!("{NAMESPACE}/{id}");
        let entries = self.storage.list(&format!("{NAMESPACE}/")).await?;
        let Some(key) = entries.into_iter().find(|path| path.starts_with(&prefix)) else {
            return Err(ShareError::NotFound(id.to_owned()));
        };

        let bytes = self.storage.read(&key).await?;
        let record: SharedPathway = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            target: TRACING_TARGET,
            id = %id,
            name = %record.name,
            "Pathway retrieved"
        );

        Ok(record)
    }
}

/// Checks the fixed 8-character hex-or-hyphen identifier shape,
/// case-insensitively.
fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN && id.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
}

#[cfg(test)]
mod tests {
    use pathview_opendal::StorageConfig;
    use serde_json::json;

    use super::*;

    fn service() -> SharingService {
        SharingService::new(StorageBackend::new(StorageConfig::Memory).unwrap())
    }

    #[test]
    fn id_shape_check() {
        assert!(is_valid_id("ab12cd34"));
        assert!(is_valid_id("AB12CD34"));
        assert!(is_valid_id("ab12-d34"));
        assert!(!is_valid_id("zz"));
        assert!(!is_valid_id("ab12cd345"));
        assert!(!is_valid_id("gh12cd34"));
        assert!(!is_valid_id(""));
    }

    #[tokio::test]
    async fn store_then_retrieve_round_trips() -> anyhow::Result<()> {
        let service = service();
        let pathway = json!({"nodes": [{"id": "a"}], "edges": []});

        let stored = service
            .store(pathway.clone(), Some("My Pathway".into()))
            .await?;
        assert_eq!(stored.id.len(), 8);
        assert!(
            stored
                .id
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase() || c == '-')
        );

        let record = service.retrieve(&stored.id).await?;
        assert_eq!(record.pathway, pathway);
        assert_eq!(record.name, "My Pathway");
        Ok(())
    }

    #[tokio::test]
    async fn missing_name_defaults() -> anyhow::Result<()> {
        let service = service();
        let stored = service
            .store(json!({"nodes": [], "edges": []}), None)
            .await?;

        let record = service.retrieve(&stored.id).await?;
        assert_eq!(record.name, "Shared Pathway");
        Ok(())
    }

    #[tokio::test]
    async fn document_without_lists_is_rejected() {
        let service = service();

        let err = service.store(json!({"nodes": []}), None).await.unwrap_err();
        assert!(matches!(err, ShareError::InvalidDocument));

        let err = service.store(json!({}), None).await.unwrap_err();
        assert!(matches!(err, ShareError::InvalidDocument));
    }

    #[tokio::test]
    async fn validation_matches_the_pipeline_shape_check() {
        let service = service();

        // Non-list nodes fail the pipeline parse and are rejected here too.
        let err = service
            .store(json!({"nodes": "not-a-list", "edges": []}), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ShareError::InvalidDocument));

        let accepted = json!({"nodes": [], "edges": []});
        assert!(pathview_core::parse_value(&accepted).is_ok());
        assert!(service.store(accepted, None).await.is_ok());
    }

    #[tokio::test]
    async fn malformed_id_fails_before_storage_access() {
        let service = service();

        let err = service.retrieve("zz").await.unwrap_err();
        assert!(matches!(err, ShareError::InvalidIdentifier(_)));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let service = service();

        let err = service.retrieve("ab12cd34").await.unwrap_err();
        assert!(matches!(err, ShareError::NotFound(_)));
    }

    #[tokio::test]
    async fn stored_record_shape_is_stable() -> anyhow::Result<()> {
        let service = service();
        let stored = service
            .store(json!({"nodes": [], "edges": [], "extra": 1}), None)
            .await?;

        let bytes = service.storage().read(&stored.key).await?;
        let value: Value = serde_json::from_slice(&bytes)?;

        assert_eq!(value["name"], "Shared Pathway");
        assert_eq!(value["pathway"]["extra"], 1);
        Ok(())
    }
}
