//! Route and menu node types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A route definition as declared by the application shell.
///
/// Every field is optional on input; a missing `path` on a non-index node
/// is treated as an empty segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Path segment. Absolute when it starts with `/`, otherwise relative
    /// to the parent route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Marks the node as its parent's own location (no segment appended).
    #[serde(default)]
    pub index: bool,

    /// Excludes the node and its whole subtree from the menu.
    #[serde(default)]
    pub hidden: bool,

    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Icon identifier understood by the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Arbitrary renderer metadata, passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Nested routes, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteNode>>,
}

impl RouteNode {
    /// Create a route with a relative or absolute path segment.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Create an index route standing in for its parent's path.
    pub fn index() -> Self {
        Self {
            index: true,
            ..Self::default()
        }
    }

    /// Set the display label.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the icon identifier.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Attach renderer metadata.
    pub fn meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Hide this route (and everything below it) from the menu.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Append a child route.
    pub fn child(mut self, child: RouteNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }
}

/// A display-ready menu entry.
///
/// `path` is always absolute and normalized. Leaves carry no `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Resolved absolute path the entry links to.
    pub path: String,

    /// Display label, copied from the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Icon identifier, copied from the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Renderer metadata, copied from the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Nested entries; `None` on leaves, never an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuNode>>,
}

impl MenuNode {
    /// Whether this entry has nested entries.
    pub fn is_branch(&self) -> bool {
        self.children.is_some()
    }

    /// Nested entries, or an empty slice for leaves.
    pub fn children(&self) -> &[MenuNode] {
        self.children.as_deref().unwrap_or_default()
    }
}
