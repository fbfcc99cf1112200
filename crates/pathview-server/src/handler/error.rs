//! HTTP error handling for the pathway handlers.

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handler::response::ErrorResponse;
use crate::service::ShareError;

/// A specialized [`Result`] type for HTTP handler operations.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Enumeration of the error kinds the pathway API can return.
///
/// Each variant corresponds to a specific HTTP status code. Internal detail
/// (storage errors, stack traces) is never exposed to the caller; the
/// response body carries only the generic message.
#[must_use = "error kinds do nothing unless used to create errors"]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400 Bad Request - Invalid request data.
    #[default]
    BadRequest,
    /// 400 Bad Request - Missing `id` query parameter.
    MissingId,
    /// 400 Bad Request - Identifier fails the fixed shape check.
    InvalidId,
    /// 404 Not Found - No stored entry matches the identifier.
    NotFound,
    /// 405 Method Not Allowed - Wrong HTTP verb.
    MethodNotAllowed,
    /// 500 Internal Server Error - Storage read/write failure.
    Storage,
}

impl ErrorKind {
    /// Returns the HTTP status code for this kind.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadRequest | Self::MissingId | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default user-facing message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "Invalid request data",
            Self::MissingId => "Missing id parameter",
            Self::InvalidId => "Invalid id format",
            Self::NotFound => "Pathway not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::Storage => "Failed to access pathway storage",
        }
    }
}

/// The error type for HTTP handlers.
#[derive(Debug, Clone)]
#[must_use = "errors do nothing unless serialized"]
pub struct Error {
    kind: ErrorKind,
    message: Option<Cow<'static, str>>,
}

impl Error {
    /// Creates a new [`Error`] with the specified kind.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Sets a custom user-facing message for the error.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: Some(message.into()),
            ..self
        }
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the user-facing message.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(self.kind.message())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.kind.status())
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<ShareError> for Error {
    fn from(err: ShareError) -> Self {
        match err {
            ShareError::InvalidDocument => Error::new(ErrorKind::BadRequest)
                .with_message("Invalid pathway data"),
            ShareError::InvalidIdentifier(_) => Error::new(ErrorKind::InvalidId),
            ShareError::NotFound(_) => Error::new(ErrorKind::NotFound),
            ShareError::Corrupt(_) | ShareError::Storage(_) => Error::new(ErrorKind::Storage),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message().to_owned(),
        };
        (self.kind.status(), axum::Json(body)).into_response()
    }
}

impl IntoResponse for ErrorKind {
    fn into_response(self) -> Response {
        Error::new(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_expected_statuses() {
        assert_eq!(ErrorKind::MissingId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::InvalidId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorKind::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ErrorKind::Storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn custom_message_overrides_default() {
        let error = Error::new(ErrorKind::BadRequest).with_message("Invalid pathway data");
        assert_eq!(error.message(), "Invalid pathway data");
        assert_eq!(Error::new(ErrorKind::BadRequest).message(), "Invalid request data");
    }

    #[test]
    fn share_errors_do_not_leak_detail() {
        let err: Error = ShareError::NotFound("ab12cd34".into()).into();
        assert_eq!(err.message(), "Pathway not found");

        let storage = pathview_opendal::StorageError::read("disk on fire");
        let err: Error = ShareError::Storage(storage).into();
        assert_eq!(err.message(), "Failed to access pathway storage");
    }
}
