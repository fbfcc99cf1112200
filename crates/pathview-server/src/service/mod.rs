//! Application services: configuration, state, and pathway sharing.

mod config;
mod sharing;
mod state;

pub use config::ServiceConfig;
pub use sharing::{ShareError, SharedPathway, SharingService, StoredShare};
pub use state::ServiceState;
