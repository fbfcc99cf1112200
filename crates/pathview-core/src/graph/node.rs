//! Node transform: one raw input node to one render-ready node.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Category, ColorTriple};

/// Fallback label for nodes without a display name.
const UNNAMED_LABEL: &str = "Unnamed Node";

/// Stand-in payload for nodes without one.
static NULL: Value = Value::Null;

/// 2-D canvas position of a node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A render-ready pathway node with derived visual and semantic attributes.
///
/// Produced by [`RenderNode::from_raw`], which never fails: absent or
/// malformed optional fields degrade to documented defaults. The serialized
/// shape (camelCase, colors, feature flags) is the contract consumed by the
/// rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNode {
    /// Node identifier, copied verbatim from the input.
    ///
    /// Uniqueness across the node set is a caller responsibility; duplicates
    /// are passed through unmodified.
    pub id: String,

    /// Renderer dispatch tag, always `"pathwayNode"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Canvas position, defaulting to the origin when absent.
    pub position: Position,

    /// Derived attribute bundle for the rendering collaborator.
    pub data: NodeData,
}

/// Derived attributes of a [`RenderNode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Display label, `"Unnamed Node"` when the input has no name.
    pub label: String,
    /// Prompt text, empty when absent.
    pub prompt: String,
    /// Condition expression, empty when absent.
    pub condition: String,
    /// Variable-extraction triples, copied verbatim.
    pub extract_vars: Vec<Value>,
    /// Free-form model options.
    pub model_options: Map<String, Value>,
    /// Resolved semantic category.
    pub node_type: Category,
    /// Whether the node is the pathway entry point.
    pub is_start: bool,
    /// Whether the node extracts variables.
    pub has_variable_extraction: bool,
    /// Whether the node carries a non-empty condition.
    pub has_condition: bool,
    /// Whether the node calls a webhook.
    pub has_webhook: bool,
    /// Resolved display colors for the category.
    pub colors: ColorTriple,
    /// The original opaque payload, retained verbatim for the detail view.
    ///
    /// Read-only after construction; never mutated.
    pub original_data: Value,
}

impl RenderNode {
    /// Transforms one raw input node into a render-ready node.
    ///
    /// Category resolution order: a true start flag always wins, then a
    /// recognized declared type, then [`Category::Default`].
    #[must_use]
    pub fn from_raw(raw: &Value) -> Self {
        let data = raw.get("data").unwrap_or(&NULL);
        let is_start = data.get("isStart").and_then(Value::as_bool) == Some(true);
        let declared = raw.get("type").and_then(Value::as_str);

        let category = if is_start {
            Category::Start
        } else {
            declared.and_then(Category::from_name).unwrap_or_default()
        };

        let extract_vars = data
            .get("extractVars")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let has_variable_extraction = !extract_vars.is_empty();
        let has_condition = !non_empty_str(data.get("condition")).is_empty();
        let has_webhook =
            declared == Some("Webhook") || !non_empty_str(data.get("webhookUrl")).is_empty();

        let label = match non_empty_str(data.get("name")) {
            "" => UNNAMED_LABEL.to_owned(),
            name => name.to_owned(),
        };

        Self {
            id: non_empty_str(raw.get("id")).to_owned(),
            kind: "pathwayNode".to_owned(),
            position: position_or_origin(raw.get("position")),
            data: NodeData {
                label,
                prompt: non_empty_str(data.get("prompt")).to_owned(),
                condition: non_empty_str(data.get("condition")).to_owned(),
                extract_vars,
                model_options: data
                    .get("modelOptions")
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default(),
                node_type: category,
                is_start,
                has_variable_extraction,
                has_condition,
                has_webhook,
                colors: category.colors(),
                original_data: data.clone(),
            },
        }
    }

    /// Returns the resolved category of this node.
    #[must_use]
    pub fn category(&self) -> Category {
        self.data.node_type
    }
}

/// Extracts a string field, treating absent or non-string values as empty.
fn non_empty_str(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).unwrap_or_default()
}

fn position_or_origin(value: Option<&Value>) -> Position {
    let Some(value) = value else {
        return Position::default();
    };

    Position {
        x: value.get("x").and_then(Value::as_f64).unwrap_or_default(),
        y: value.get("y").and_then(Value::as_f64).unwrap_or_default(),
    }
}
