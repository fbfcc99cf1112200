//! Render-ready graph model: nodes, edges, categories, and statistics.

mod category;
mod edge;
mod node;
mod stats;

pub use category::{Category, ColorTriple};
pub use edge::RenderEdge;
pub use node::{Position, RenderNode};
pub use stats::PathwayStats;
