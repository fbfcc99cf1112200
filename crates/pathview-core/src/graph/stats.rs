//! Summary statistics over a transformed node list.

use indexmap::IndexMap;
use serde::Serialize;

use super::{Category, RenderNode};

/// Aggregate counts for one parsed pathway.
///
/// Computed once per pipeline run and immutable afterwards. The category map
/// preserves first-encountered order so the display lists types in the order
/// they appear in the document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayStats {
    /// Total number of nodes.
    pub total_nodes: usize,
    /// Total number of edges.
    pub total_edges: usize,
    /// Node count per category display name, in first-seen order.
    pub node_types: IndexMap<&'static str, usize>,
    /// Nodes with variable extraction.
    pub variable_extractions: usize,
    /// Nodes that call a webhook.
    pub webhooks: usize,
    /// Nodes that end the call.
    pub end_calls: usize,
}

impl PathwayStats {
    /// Folds the node list into summary counts in a single pass.
    ///
    /// Never fails; an empty input yields all-zero counts and an empty
    /// category map.
    #[must_use]
    pub fn collect(nodes: &[RenderNode], total_edges: usize) -> Self {
        let mut stats = Self {
            total_nodes: nodes.len(),
            total_edges,
            ..Self::default()
        };

        for node in nodes {
            let category = node.category();
            *stats.node_types.entry(category.as_str()).or_insert(0) += 1;

            if node.data.has_variable_extraction {
                stats.variable_extractions += 1;
            }
            if node.data.has_webhook {
                stats.webhooks += 1;
            }
            if category == Category::EndCall {
                stats.end_calls += 1;
            }
        }

        stats
    }
}
