//! Application state and dependency injection.

use pathview_opendal::StorageBackend;

use crate::service::{ServiceConfig, SharingService};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    storage: StorageBackend,
    sharing: SharingService,
    config: ServiceConfig,
}

impl ServiceState {
    /// Initializes application state from configuration.
    pub fn from_config(config: ServiceConfig) -> pathview_opendal::StorageResult<Self> {
        let storage = config.connect_storage()?;
        let sharing = SharingService::new(storage.clone());

        Ok(Self {
            storage,
            sharing,
            config,
        })
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(storage: StorageBackend);
impl_di!(sharing: SharingService);
impl_di!(config: ServiceConfig);
