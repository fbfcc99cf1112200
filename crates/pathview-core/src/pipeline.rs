//! Pathway pipeline: parse, transform, aggregate, and sanitize.

use serde::Serialize;
use serde_json::Value;

use crate::TRACING_TARGET;
use crate::error::{FormatError, ParseResult};
use crate::graph::{PathwayStats, RenderEdge, RenderNode};

/// Replacement value for redacted header values.
const REDACTION_MARKER: &str = "[REDACTED]";

/// Result of a successful pipeline run: render-ready nodes and edges plus
/// aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedPathway {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
    pub stats: PathwayStats,
}

/// Parses a serialized pathway document.
///
/// Deserializes the text and delegates to [`parse_value`]. Fails with
/// [`FormatError`] on undeserializable input; no partial result is returned.
pub fn parse_str(document: &str) -> ParseResult<ParsedPathway> {
    parse_value(&serde_json::from_str(document)?)
}

/// Parses an already-structured pathway document.
///
/// The only validation is the top-level shape check: `nodes` and `edges`
/// must both be present as lists. Individual node and edge shapes are not
/// validated; malformed entries degrade to defaults instead of failing.
pub fn parse_value(document: &Value) -> ParseResult<ParsedPathway> {
    let raw_nodes = document
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or(FormatError::MissingNodes)?;
    let raw_edges = document
        .get("edges")
        .and_then(Value::as_array)
        .ok_or(FormatError::MissingEdges)?;

    let nodes: Vec<_> = raw_nodes.iter().map(RenderNode::from_raw).collect();
    let edges: Vec<_> = raw_edges
        .iter()
        .enumerate()
        .map(|(index, raw)| RenderEdge::from_raw(raw, index))
        .collect();
    let stats = PathwayStats::collect(&nodes, edges.len());

    tracing::debug!(
        target: TRACING_TARGET,
        nodes = stats.total_nodes,
        edges = stats.total_edges,
        "Pathway parsed"
    );

    Ok(ParsedPathway {
        nodes,
        edges,
        stats,
    })
}

/// Returns a deep copy of the document with sensitive headers redacted.
///
/// For every node's `data.headers` list of `[name, value]` pairs, a name
/// case-insensitively equal to `authorization` gets its value replaced with
/// a fixed marker. All other fields pass through unchanged; edges are not
/// touched. The operation is idempotent.
#[must_use]
pub fn sanitize(document: &Value) -> Value {
    let mut sanitized = document.clone();

    let Some(nodes) = sanitized.get_mut("nodes").and_then(Value::as_array_mut) else {
        return sanitized;
    };

    for node in nodes {
        let Some(headers) = node
            .get_mut("data")
            .and_then(|data| data.get_mut("headers"))
            .and_then(Value::as_array_mut)
        else {
            continue;
        };

        for header in headers {
            let Some(pair) = header.as_array_mut() else {
                continue;
            };
            let is_authorization = pair
                .first()
                .and_then(Value::as_str)
                .is_some_and(|name| name.eq_ignore_ascii_case("authorization"));

            if is_authorization && pair.len() >= 2 {
                pair[1] = Value::String(REDACTION_MARKER.to_owned());
            }
        }
    }

    sanitized
}
