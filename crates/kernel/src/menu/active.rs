//! Current-location matching for the sidebar.

use super::route::MenuNode;

impl MenuNode {
    /// Whether this entry points exactly at `current`.
    pub fn is_active(&self, current: &str) -> bool {
        self.path == current
    }

    /// Whether this entry or any entry below it points at `current`.
    pub fn contains_active(&self, current: &str) -> bool {
        self.is_active(current) || self.children().iter().any(|c| c.contains_active(current))
    }
}

/// Entries from a top-level item down to the one pointing at `current`.
///
/// Branches are matched before their own path is considered final, so a
/// branch whose index child shares its path resolves to the child. Returns
/// an empty trail when nothing matches.
pub fn active_trail<'a>(menu: &'a [MenuNode], current: &str) -> Vec<&'a MenuNode> {
    let mut trail = Vec::new();
    for node in menu {
        if collect_trail(node, current, &mut trail) {
            break;
        }
    }
    trail
}

fn collect_trail<'a>(node: &'a MenuNode, current: &str, trail: &mut Vec<&'a MenuNode>) -> bool {
    trail.push(node);
    for child in node.children() {
        if collect_trail(child, current, trail) {
            return true;
        }
    }
    if node.is_active(current) {
        return true;
    }
    trail.pop();
    false
}
