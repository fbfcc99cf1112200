//! Storage configuration types.

use serde::{Deserialize, Serialize};

/// Storage backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Local filesystem rooted at a directory.
    Fs {
        /// Root directory for stored blobs.
        root: String,
    },
    /// Amazon S3 or an S3-compatible service.
    S3(S3Config),
    /// In-memory store. Contents are lost on process exit; intended for
    /// tests and local development.
    Memory,
}

impl StorageConfig {
    /// Returns the backend name as a static string.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Fs { .. } => "fs",
            Self::S3(_) => "s3",
            Self::Memory => "memory",
        }
    }
}

/// Amazon S3 configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Config {
    /// Bucket holding the stored blobs.
    pub bucket: String,
    /// AWS region.
    #[serde(default)]
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible services.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Access key id; falls back to the ambient credential chain.
    #[serde(default)]
    pub access_key_id: Option<String>,
    /// Secret access key; falls back to the ambient credential chain.
    #[serde(default)]
    pub secret_access_key: Option<String>,
}
