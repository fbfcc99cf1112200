//! Router middleware layers.

mod security;

pub use security::RouterSecurityExt;
