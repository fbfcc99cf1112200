//! Prelude module for convenient imports.

pub use crate::backend::StorageBackend;
pub use crate::config::{S3Config, StorageConfig};
pub use crate::error::{StorageError, StorageResult};
