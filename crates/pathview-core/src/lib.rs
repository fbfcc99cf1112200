#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
mod pipeline;

pub mod graph;

pub use error::{FormatError, ParseResult};
pub use graph::{Category, ColorTriple, PathwayStats, Position, RenderEdge, RenderNode};
pub use pipeline::{ParsedPathway, parse_str, parse_value, sanitize};

/// Tracing target for pipeline operations.
pub const TRACING_TARGET: &str = "pathview_core";
