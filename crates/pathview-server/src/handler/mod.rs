//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod load;
mod monitors;
mod response;
mod share;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub use crate::handler::response::{ErrorResponse, HealthResponse, ShareResponse};
use crate::service::ServiceState;

/// Method fallback: the path exists but the verb does not match.
///
/// OPTIONS never reaches this handler; the CORS layer answers preflight
/// requests before routing.
#[inline]
async fn method_not_allowed() -> Response {
    ErrorKind::MethodNotAllowed.into_response()
}

/// Returns a [`Router`] with all pathway API routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/health", get(monitors::health_status))
        .route(
            "/load",
            get(load::load_pathway).fallback(method_not_allowed),
        )
        .route(
            "/share",
            post(share::share_pathway).fallback(method_not_allowed),
        )
}

#[cfg(test)]
mod test {
    use axum::http::{HeaderValue, Method, StatusCode, header};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::*;
    use crate::middleware::RouterSecurityExt;
    use crate::service::{ServiceConfig, ServiceState};

    /// Returns a new [`TestServer`] over a memory-backed service.
    fn create_test_server() -> anyhow::Result<TestServer> {
        let state = ServiceState::from_config(ServiceConfig::default())?;
        let app = routes().with_state(state).with_cors();
        let server = TestServer::new(app)?;
        Ok(server)
    }

    #[tokio::test]
    async fn health_endpoint_responds() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<HealthResponse>().status, "ok");
        Ok(())
    }

    #[tokio::test]
    async fn share_without_name_defaults_and_round_trips() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let pathway = json!({"nodes": [{"id": "a"}], "edges": []});

        let response = server
            .post("/share")
            .json(&json!({"pathway": pathway}))
            .await;
        response.assert_status_ok();

        let share = response.json::<ShareResponse>();
        assert_eq!(share.id.len(), 8);
        assert!(
            share
                .id
                .chars()
                .all(|c| matches!(c, 'a'..='f' | '0'..='9' | '-'))
        );
        assert!(share.url.contains(&format!("id={}", share.id)));
        assert!(!share.blob_url.is_empty());

        let response = server.get("/load").add_query_param("id", &share.id).await;
        response.assert_status_ok();

        let record = response.json::<Value>();
        assert_eq!(record["pathway"], pathway);
        assert_eq!(record["name"], "Shared Pathway");
        Ok(())
    }

    #[tokio::test]
    async fn share_with_name_keeps_it() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/share")
            .json(&json!({
                "pathway": {"nodes": [], "edges": []},
                "name": "Support Line",
            }))
            .await;
        response.assert_status_ok();

        let share = response.json::<ShareResponse>();
        let response = server.get("/load").add_query_param("id", &share.id).await;
        assert_eq!(response.json::<Value>()["name"], "Support Line");
        Ok(())
    }

    #[tokio::test]
    async fn share_rejects_incomplete_documents() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.post("/share").json(&json!({})).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .post("/share")
            .json(&json!({"pathway": {"nodes": []}}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<ErrorResponse>().error,
            "Invalid pathway data"
        );
        Ok(())
    }

    #[tokio::test]
    async fn load_without_id_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/load").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<ErrorResponse>().error,
            "Missing id parameter"
        );
        Ok(())
    }

    #[tokio::test]
    async fn load_with_malformed_id_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/load").add_query_param("id", "zz").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorResponse>().error, "Invalid id format");
        Ok(())
    }

    #[tokio::test]
    async fn load_with_unknown_id_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/load").add_query_param("id", "ab12cd34").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>().error, "Pathway not found");
        Ok(())
    }

    #[tokio::test]
    async fn wrong_verbs_are_method_not_allowed() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.post("/load").json(&json!({})).await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.json::<ErrorResponse>().error, "Method not allowed");

        let response = server.get("/share").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        Ok(())
    }

    #[tokio::test]
    async fn preflight_is_answered_with_cors_headers() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .method(Method::OPTIONS, "/share")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://example.com"))
            .add_header(
                header::ACCESS_CONTROL_REQUEST_METHOD,
                HeaderValue::from_static("POST"),
            )
            .await;
        response.assert_status_ok();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
        assert!(response.text().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn simple_responses_carry_cors_headers() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .get("/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://example.com"))
            .await;
        response.assert_status_ok();
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
        Ok(())
    }
}
