//! Pipeline error types.

/// Result type for pathway parsing.
pub type ParseResult<T> = Result<T, FormatError>;

/// Errors raised when a pathway document fails the top-level shape check.
///
/// These are the only failures the pipeline produces. Malformed individual
/// nodes and edges never abort a parse; they degrade to defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The document text is not valid JSON.
    #[error("undeserializable pathway document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document lacks a top-level `nodes` list.
    #[error("invalid pathway format: missing nodes")]
    MissingNodes,

    /// The document lacks a top-level `edges` list.
    #[error("invalid pathway format: missing edges")]
    MissingEdges,
}
