//! Command-line configuration.

use std::net::{IpAddr, SocketAddr};

use clap::{Parser, ValueEnum};
use pathview_opendal::{S3Config, StorageConfig};
use pathview_server::service::ServiceConfig;
use url::Url;

use crate::TRACING_TARGET_CONFIG;

/// Pathway sharing service.
#[derive(Debug, Parser)]
#[command(name = "pathview", version, about)]
pub struct Cli {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "PATHVIEW_ADDRESS", default_value = "0.0.0.0")]
    pub address: IpAddr,

    /// Port to bind the HTTP listener to.
    #[arg(long, env = "PATHVIEW_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Public base URL of the pathway viewer, embedded in share links.
    #[arg(long, env = "PATHVIEW_PUBLIC_URL", default_value = "http://localhost:8080/")]
    pub public_url: Url,

    /// Storage backend for shared pathways.
    #[arg(long, env = "PATHVIEW_STORAGE_BACKEND", value_enum, default_value_t = Backend::Memory)]
    pub storage_backend: Backend,

    /// Root directory for the fs backend.
    #[arg(long, env = "PATHVIEW_STORAGE_ROOT", default_value = "./data")]
    pub storage_root: String,

    /// Bucket for the s3 backend.
    #[arg(long, env = "PATHVIEW_S3_BUCKET")]
    pub s3_bucket: Option<String>,

    /// Region for the s3 backend.
    #[arg(long, env = "PATHVIEW_S3_REGION")]
    pub s3_region: Option<String>,

    /// Custom endpoint for S3-compatible services.
    #[arg(long, env = "PATHVIEW_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// Access key id for the s3 backend.
    #[arg(long, env = "PATHVIEW_S3_ACCESS_KEY_ID")]
    pub s3_access_key_id: Option<String>,

    /// Secret access key for the s3 backend.
    #[arg(long, env = "PATHVIEW_S3_SECRET_ACCESS_KEY")]
    pub s3_secret_access_key: Option<String>,
}

/// Selectable storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Local filesystem.
    Fs,
    /// Amazon S3 or an S3-compatible service.
    S3,
    /// In-memory store, for development only.
    Memory,
}

impl Cli {
    /// Returns the socket address to listen on.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    /// Builds the service configuration from the parsed arguments.
    pub fn service_config(&self) -> anyhow::Result<ServiceConfig> {
        let storage = match self.storage_backend {
            Backend::Fs => StorageConfig::Fs {
                root: self.storage_root.clone(),
            },
            Backend::S3 => {
                let bucket = self
                    .s3_bucket
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("--s3-bucket is required for the s3 backend"))?;
                StorageConfig::S3(S3Config {
                    bucket,
                    region: self.s3_region.clone(),
                    endpoint: self.s3_endpoint.clone(),
                    access_key_id: self.s3_access_key_id.clone(),
                    secret_access_key: self.s3_secret_access_key.clone(),
                })
            }
            Backend::Memory => StorageConfig::Memory,
        };

        Ok(ServiceConfig {
            storage,
            public_url: self.public_url.clone(),
        })
    }
}

/// Logs the effective server configuration at startup.
pub fn log_server_config(cli: &Cli) {
    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        address = %cli.listen_addr(),
        public_url = %cli.public_url,
        storage = ?cli.storage_backend,
        "Server configuration loaded"
    );
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_give_a_memory_backed_config() {
        let cli = Cli::parse_from(["pathview"]);
        let config = cli.service_config().unwrap();

        assert_eq!(config.storage, StorageConfig::Memory);
        assert_eq!(cli.listen_addr().port(), 8080);
    }

    #[test]
    fn s3_backend_requires_a_bucket() {
        let cli = Cli::parse_from(["pathview", "--storage-backend", "s3"]);
        assert!(cli.service_config().is_err());
    }

    #[test]
    fn fs_backend_uses_the_storage_root() {
        let cli = Cli::parse_from([
            "pathview",
            "--storage-backend",
            "fs",
            "--storage-root",
            "/tmp/pathways",
        ]);
        let config = cli.service_config().unwrap();

        assert_eq!(
            config.storage,
            StorageConfig::Fs {
                root: "/tmp/pathways".into()
            }
        );
    }
}
