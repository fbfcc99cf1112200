//! Node categories and their display colors.

use serde::{Deserialize, Serialize};

/// Semantic category of a pathway node.
///
/// Every node resolves to exactly one category: a node flagged as start is
/// always [`Category::Start`] regardless of its declared type; otherwise the
/// declared type is used when recognized, falling back to
/// [`Category::Default`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Plain conversation node.
    #[default]
    #[serde(rename = "Default")]
    Default,
    /// Entry point of the pathway.
    #[serde(rename = "Start")]
    Start,
    /// Terminates the call.
    #[serde(rename = "End Call")]
    EndCall,
    /// Invokes an external webhook.
    #[serde(rename = "Webhook")]
    Webhook,
    /// Branches the conversation.
    #[serde(rename = "Route")]
    Route,
    /// Calls a user-defined tool.
    #[serde(rename = "Custom Tool")]
    CustomTool,
    /// Transfers the call to another destination.
    #[serde(rename = "Transfer")]
    Transfer,
}

impl Category {
    /// Returns the display name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Start => "Start",
            Self::EndCall => "End Call",
            Self::Webhook => "Webhook",
            Self::Route => "Route",
            Self::CustomTool => "Custom Tool",
            Self::Transfer => "Transfer",
        }
    }

    /// Parses a declared node type, returning `None` when unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Default" => Some(Self::Default),
            "Start" => Some(Self::Start),
            "End Call" => Some(Self::EndCall),
            "Webhook" => Some(Self::Webhook),
            "Route" => Some(Self::Route),
            "Custom Tool" => Some(Self::CustomTool),
            "Transfer" => Some(Self::Transfer),
            _ => None,
        }
    }

    /// Returns the immutable color triple for this category.
    #[must_use]
    pub const fn colors(self) -> ColorTriple {
        match self {
            Self::Default => ColorTriple::new("#3b82f6", "#2563eb"),
            Self::Start => ColorTriple::new("#22c55e", "#16a34a"),
            Self::EndCall => ColorTriple::new("#ef4444", "#dc2626"),
            Self::Webhook => ColorTriple::new("#a855f7", "#9333ea"),
            Self::Route => ColorTriple::new("#f59e0b", "#d97706"),
            Self::CustomTool => ColorTriple::new("#06b6d4", "#0891b2"),
            Self::Transfer => ColorTriple::new("#ec4899", "#db2777"),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background, border, and foreground colors for one node category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTriple {
    /// Background fill color.
    pub bg: &'static str,
    /// Border color.
    pub border: &'static str,
    /// Foreground text color.
    pub text: &'static str,
}

impl ColorTriple {
    const fn new(bg: &'static str, border: &'static str) -> Self {
        Self {
            bg,
            border,
            text: "#ffffff",
        }
    }
}
