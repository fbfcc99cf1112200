//! Edge transform: one raw input edge to one render-ready edge.

use serde::Serialize;
use serde_json::Value;

/// A render-ready pathway edge with fixed presentation attributes.
///
/// Produced by [`RenderEdge::from_raw`], which never fails. The style fields
/// are presentation constants expected by the rendering collaborator, not
/// semantically derived values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEdge {
    /// Edge identifier.
    ///
    /// Falls back to `edge-{index}` using the edge's position in the input
    /// sequence. The fallback is positional on purpose: re-parsing the same
    /// edges in a different order yields different generated ids.
    pub id: String,

    /// Source node id.
    pub source: String,

    /// Target node id.
    pub target: String,

    /// Source port for multi-port nodes.
    pub source_handle: Option<String>,

    /// Target port for multi-port nodes.
    pub target_handle: Option<String>,

    /// Edge label: top-level label, else nested payload label, else empty.
    pub label: String,

    /// Renderer edge kind, always `"smoothstep"`.
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Whether the edge is animated. Always false.
    pub animated: bool,

    /// Stroke styling constants.
    pub style: EdgeStroke,

    /// Label text styling constants.
    pub label_style: LabelStyle,

    /// Label background styling constants.
    pub label_bg_style: LabelBackground,

    /// Horizontal and vertical label background padding.
    pub label_bg_padding: [u32; 2],

    /// Label background corner radius.
    pub label_bg_border_radius: u32,
}

/// Stroke presentation constants for an edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStroke {
    pub stroke: &'static str,
    pub stroke_width: u32,
}

/// Label text presentation constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    pub fill: &'static str,
    pub font_weight: u32,
    pub font_size: u32,
}

/// Label background presentation constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelBackground {
    pub fill: &'static str,
    pub fill_opacity: f64,
}

impl RenderEdge {
    /// Transforms one raw input edge at the given zero-based position.
    #[must_use]
    pub fn from_raw(raw: &Value, index: usize) -> Self {
        let id = match raw.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => format!("edge-{index}"),
        };

        let label = raw
            .get("label")
            .and_then(Value::as_str)
            .filter(|label| !label.is_empty())
            .or_else(|| {
                raw.get("data")
                    .and_then(|data| data.get("label"))
                    .and_then(Value::as_str)
            })
            .unwrap_or_default()
            .to_owned();

        Self {
            id,
            source: str_or_empty(raw.get("source")),
            target: str_or_empty(raw.get("target")),
            source_handle: opt_str(raw.get("sourceHandle")),
            target_handle: opt_str(raw.get("targetHandle")),
            label,
            kind: "smoothstep",
            animated: false,
            style: EdgeStroke {
                stroke: "#64748b",
                stroke_width: 2,
            },
            label_style: LabelStyle {
                fill: "#334155",
                font_weight: 500,
                font_size: 11,
            },
            label_bg_style: LabelBackground {
                fill: "#f1f5f9",
                fill_opacity: 0.9,
            },
            label_bg_padding: [4, 4],
            label_bg_border_radius: 4,
        }
    }
}

fn str_or_empty(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_owned()
}

fn opt_str(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}
