//! Storage backend implementation.

use opendal::{Operator, services};

use crate::TRACING_TARGET;
use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};

/// Unified storage backend that wraps OpenDAL operators.
#[derive(Clone)]
pub struct StorageBackend {
    operator: Operator,
    config: StorageConfig,
}

impl StorageBackend {
    /// Creates a new storage backend from configuration.
    pub fn new(config: StorageConfig) -> StorageResult<Self> {
        let operator = Self::create_operator(&config)?;

        tracing::info!(
            target: TRACING_TARGET,
            backend = config.backend_name(),
            "Storage backend initialized"
        );

        Ok(Self { operator, config })
    }

    /// Returns the configuration for this backend.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Reads a blob from storage.
    pub async fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            "Reading blob"
        );

        let data = self.operator.read(path).await?.to_vec();

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            size = data.len(),
            "Blob read complete"
        );

        Ok(data)
    }

    /// Writes a blob to storage.
    pub async fn write(&self, path: &str, data: &[u8]) -> StorageResult<()> {
        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            size = data.len(),
            "Writing blob"
        );

        self.operator.write(path, data.to_vec()).await?;

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            "Blob write complete"
        );

        Ok(())
    }

    /// Checks if a blob exists.
    pub async fn exists(&self, path: &str) -> StorageResult<bool> {
        Ok(self.operator.exists(path).await?)
    }

    /// Lists blob paths in a directory.
    ///
    /// A missing directory lists as empty rather than failing, so prefix
    /// lookups against an untouched store behave like an empty store.
    pub async fn list(&self, path: &str) -> StorageResult<Vec<String>> {
        use futures::TryStreamExt;

        let lister = match self.operator.lister(path).await {
            Ok(lister) => lister,
            Err(err) if err.kind() == opendal::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let entries: Vec<_> = lister.try_collect().await?;

        Ok(entries.into_iter().map(|e| e.path().to_string()).collect())
    }

    /// Returns a public URL for a stored blob, when the backend has one.
    ///
    /// S3 yields an endpoint-based URL when a custom endpoint is configured,
    /// the filesystem backend yields the rooted path, and the memory backend
    /// has no addressable URL.
    #[must_use]
    pub fn public_url(&self, path: &str) -> Option<String> {
        match &self.config {
            StorageConfig::Fs { root } => {
                Some(format!("file://{}/{}", root.trim_end_matches('/'), path))
            }
            StorageConfig::S3(s3) => s3.endpoint.as_ref().map(|endpoint| {
                format!(
                    "{}/{}/{}",
                    endpoint.trim_end_matches('/'),
                    s3.bucket,
                    path
                )
            }),
            StorageConfig::Memory => None,
        }
    }

    /// Creates an OpenDAL operator based on configuration.
    fn create_operator(config: &StorageConfig) -> StorageResult<Operator> {
        match config {
            StorageConfig::Fs { root } => {
                let builder = services::Fs::default().root(root);

                Operator::new(builder)
                    .map(|op| op.finish())
                    .map_err(|e| StorageError::init(e.to_string()))
            }

            StorageConfig::S3(s3) => {
                let mut builder = services::S3::default().bucket(&s3.bucket);

                if let Some(ref region) = s3.region {
                    builder = builder.region(region);
                }

                if let Some(ref endpoint) = s3.endpoint {
                    builder = builder.endpoint(endpoint);
                }

                if let Some(ref access_key_id) = s3.access_key_id {
                    builder = builder.access_key_id(access_key_id);
                }

                if let Some(ref secret_access_key) = s3.secret_access_key {
                    builder = builder.secret_access_key(secret_access_key);
                }

                Operator::new(builder)
                    .map(|op| op.finish())
                    .map_err(|e| StorageError::init(e.to_string()))
            }

            StorageConfig::Memory => {
                let builder = services::Memory::default();

                Operator::new(builder)
                    .map(|op| op.finish())
                    .map_err(|e| StorageError::init(e.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBackend")
            .field("backend", &self.config.backend_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_backend() -> StorageBackend {
        StorageBackend::new(StorageConfig::Memory).unwrap()
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let backend = memory_backend();

        backend.write("pathways/ab12cd34.json", b"{}").await.unwrap();
        let data = backend.read("pathways/ab12cd34.json").await.unwrap();
        assert_eq!(data, b"{}");
    }

    #[tokio::test]
    async fn read_of_missing_blob_is_not_found() {
        let backend = memory_backend();

        let err = backend.read("pathways/missing.json").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn exists_reflects_written_blobs() {
        let backend = memory_backend();

        assert!(!backend.exists("pathways/ab12cd34.json").await.unwrap());
        backend.write("pathways/ab12cd34.json", b"{}").await.unwrap();
        assert!(backend.exists("pathways/ab12cd34.json").await.unwrap());
    }

    #[tokio::test]
    async fn list_of_untouched_store_is_empty() {
        let backend = memory_backend();
        let entries = backend.list("pathways/").await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn list_returns_written_paths() {
        let backend = memory_backend();
        backend.write("pathways/one.json", b"1").await.unwrap();
        backend.write("pathways/two.json", b"2").await.unwrap();

        let mut entries = backend.list("pathways/").await.unwrap();
        entries.sort();
        assert_eq!(entries, vec!["pathways/one.json", "pathways/two.json"]);
    }

    #[test]
    fn public_url_per_backend() {
        let fs = StorageBackend::new(StorageConfig::Fs {
            root: "/var/data/".into(),
        })
        .unwrap();
        assert_eq!(
            fs.public_url("pathways/x.json").as_deref(),
            Some("file:///var/data/pathways/x.json")
        );

        assert_eq!(memory_backend().public_url("pathways/x.json"), None);
    }
}
