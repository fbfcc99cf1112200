//! Service configuration.

use pathview_opendal::{StorageBackend, StorageConfig, StorageResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Blob storage holding shared pathways.
    pub storage: StorageConfig,

    /// Public base URL of the viewer, used to build shareable links.
    pub public_url: Url,
}

impl ServiceConfig {
    /// Connects the configured storage backend.
    pub fn connect_storage(&self) -> StorageResult<StorageBackend> {
        StorageBackend::new(self.storage.clone())
    }

    /// Builds the human-shareable viewer URL for a share identifier.
    #[must_use]
    pub fn share_url(&self, id: &str) -> String {
        let mut url = self.public_url.clone();
        url.set_query(Some(&format!("id={id}")));
        url.to_string()
    }

    /// Builds the API retrieval URL for a share identifier.
    #[must_use]
    pub fn load_url(&self, id: &str) -> String {
        let mut url = self.public_url.clone();
        url.set_path("/load");
        url.set_query(Some(&format!("id={id}")));
        url.to_string()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::Memory,
            public_url: Url::parse("http://localhost:8080/").expect("static URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_embeds_the_id() {
        let config = ServiceConfig::default();
        assert_eq!(config.share_url("ab12cd34"), "http://localhost:8080/?id=ab12cd34");
        assert_eq!(config.load_url("ab12cd34"), "http://localhost:8080/load?id=ab12cd34");
    }
}
