//! CORS middleware for the sharing API.
//!
//! Shared pathways are loaded by viewers hosted on arbitrary origins, so
//! both network operations are CORS-enabled for any origin. The layer also
//! answers OPTIONS preflight requests with 200 and no body.

use axum::Router;
use axum::http::Method;
use axum::http::header;
use tower_http::cors::{Any, CorsLayer};

/// Extension trait for `axum::`[`Router`] to apply security middleware.
pub trait RouterSecurityExt<S> {
    /// Layers a permissive CORS policy over the router.
    ///
    /// Allows any origin, the GET/POST/OPTIONS methods the API serves, and
    /// the content-type header.
    fn with_cors(self) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_cors(self) -> Self {
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        self.layer(cors_layer)
    }
}
