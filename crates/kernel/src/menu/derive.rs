//! Route tree to menu tree derivation.

use super::path::{join_path, normalize_path};
use super::route::{MenuNode, RouteNode};

/// Derive the menu for a route tree mounted at `parent_path`.
///
/// Hidden routes are dropped together with their subtrees, paths are
/// resolved to absolute form, and a branch left with exactly one visible
/// child collapses into a single leaf that keeps the branch's display
/// attributes and takes the child's path. Sibling order is preserved and
/// the input is never modified.
pub fn derive_menu(nodes: &[RouteNode], parent_path: &str) -> Vec<MenuNode> {
    derive_level(nodes, &normalize_path(parent_path))
}

/// Derive the menu for a route tree mounted at the root `/`.
pub fn derive_root_menu(nodes: &[RouteNode]) -> Vec<MenuNode> {
    derive_level(nodes, "/")
}

/// Resolve the absolute path of `node` under an already normalized parent.
pub fn resolve_path(node: &RouteNode, parent_path: &str) -> String {
    if node.index {
        return parent_path.to_string();
    }
    match node.path.as_deref() {
        Some(path) if path.starts_with('/') => normalize_path(path),
        path => join_path(parent_path, path.unwrap_or_default()),
    }
}

fn derive_level(nodes: &[RouteNode], parent_path: &str) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter(|node| !node.hidden)
        .map(|node| derive_node(node, parent_path))
        .collect()
}

fn derive_node(node: &RouteNode, parent_path: &str) -> MenuNode {
    let resolved = resolve_path(node, parent_path);

    let mut children = match &node.children {
        Some(children) => derive_level(children, &resolved),
        None => Vec::new(),
    };

    let (path, children) = match children.len() {
        0 => (resolved, None),
        1 => {
            // Only the single child's location survives; its labels do not.
            let only = children.swap_remove(0);
            (only.path, None)
        }
        _ => (resolved, Some(children)),
    };

    MenuNode {
        path,
        name: node.name.clone(),
        icon: node.icon.clone(),
        meta: node.meta.clone(),
        children,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn leaf(path: &str, name: &str) -> MenuNode {
        MenuNode {
            path: path.to_string(),
            name: Some(name.to_string()),
            icon: None,
            meta: None,
            children: None,
        }
    }

    #[test]
    fn single_visible_child_is_flattened() {
        let routes = vec![
            RouteNode::new("books")
                .name("图书管理")
                .child(RouteNode::index().name("图书首页").hidden())
                .child(RouteNode::new("list").name("图书列表")),
        ];

        let menu = derive_root_menu(&routes);
        assert_eq!(menu, vec![leaf("/books/list", "图书管理")]);
    }

    #[test]
    fn single_child_chain_collapses_to_deepest_path() {
        let routes = vec![
            RouteNode::new("a")
                .name("A")
                .child(RouteNode::new("b").name("B").child(RouteNode::new("c").name("C"))),
        ];

        let menu = derive_root_menu(&routes);
        assert_eq!(menu, vec![leaf("/a/b/c", "A")]);
        assert!(menu[0].children.is_none());
    }

    #[test]
    fn single_branch_child_is_adopted_without_its_children() {
        let routes = vec![
            RouteNode::new("catalog")
                .name("Catalog")
                .child(RouteNode::new("draft").hidden())
                .child(
                    RouteNode::new("books")
                        .name("Books")
                        .child(RouteNode::new("list"))
                        .child(RouteNode::new("import")),
                ),
        ];

        let menu = derive_root_menu(&routes);
        assert_eq!(menu, vec![leaf("/catalog/books", "Catalog")]);
        assert!(menu[0].children.is_none());
    }

    #[test]
    fn two_children_stay_nested() {
        let routes = vec![
            RouteNode::new("users")
                .name("Users")
                .child(RouteNode::new("list").name("User list"))
                .child(RouteNode::new("roles").name("Roles")),
        ];

        let menu = derive_root_menu(&routes);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].path, "/users");
        assert_eq!(
            menu[0].children(),
            &[leaf("/users/list", "User list"), leaf("/users/roles", "Roles")]
        );
    }

    #[test]
    fn hidden_node_drops_visible_descendants() {
        let routes = vec![
            RouteNode::new("secret")
                .hidden()
                .child(RouteNode::new("a"))
                .child(RouteNode::new("b")),
            RouteNode::new("orders").name("Orders"),
        ];

        let menu = derive_root_menu(&routes);
        assert_eq!(menu, vec![leaf("/orders", "Orders")]);
    }

    #[test]
    fn all_children_hidden_yields_leaf_with_own_path() {
        let routes = vec![
            RouteNode::new("authors")
                .name("Authors")
                .child(RouteNode::new("edit").hidden()),
        ];

        let menu = derive_root_menu(&routes);
        assert_eq!(menu, vec![leaf("/authors", "Authors")]);
    }

    #[test]
    fn index_node_takes_parent_path_at_its_depth() {
        let routes = vec![
            RouteNode::new("admin")
                .child(
                    RouteNode::new("books")
                        .child(RouteNode::index().name("Overview"))
                        .child(RouteNode::new("list").name("List")),
                )
                .child(RouteNode::new("orders")),
        ];

        let menu = derive_root_menu(&routes);
        let books = &menu[0].children()[0];
        assert_eq!(books.path, "/admin/books");
        assert_eq!(books.children()[0].path, "/admin/books");
        assert_eq!(books.children()[1].path, "/admin/books/list");
    }

    #[test]
    fn index_wins_over_declared_path() {
        let node = RouteNode {
            index: true,
            path: Some("ignored".to_string()),
            ..RouteNode::default()
        };
        assert_eq!(resolve_path(&node, "/books"), "/books");
    }

    #[test]
    fn absolute_path_ignores_parent() {
        let node = RouteNode::new("//reports//daily/");
        assert_eq!(resolve_path(&node, "/orders"), "/reports/daily");
    }

    #[test]
    fn missing_path_resolves_to_parent() {
        let node = RouteNode::default();
        assert_eq!(resolve_path(&node, "/orders"), "/orders");
    }

    #[test]
    fn custom_mount_point_is_normalized() {
        let routes = vec![RouteNode::index().name("Home"), RouteNode::new("x")];
        let menu = derive_menu(&routes, "/admin//");
        assert_eq!(menu[0].path, "/admin");
        assert_eq!(menu[1].path, "/admin/x");
    }

    #[test]
    fn display_attributes_pass_through() {
        let routes = vec![
            RouteNode::new("orders")
                .name("Orders")
                .icon("cart")
                .meta(serde_json::json!({"badge": 3}))
                .child(RouteNode::new("list").name("Order list").icon("list")),
        ];

        let menu = derive_root_menu(&routes);
        assert_eq!(menu[0].icon.as_deref(), Some("cart"));
        assert_eq!(menu[0].meta, Some(serde_json::json!({"badge": 3})));
        assert_eq!(menu[0].path, "/orders/list");
    }

    #[test]
    fn input_tree_is_not_modified() {
        let routes = vec![RouteNode::new("books").child(RouteNode::new("list"))];
        let before = routes.clone();
        let _ = derive_root_menu(&routes);
        assert_eq!(routes, before);
    }
}
