//! Built-in admin route table.

use super::route::RouteNode;

/// Top-level routes of the admin shell, mounted under the `/` layout.
///
/// Used whenever no route document is configured.
pub fn builtin_routes() -> Vec<RouteNode> {
    vec![
        RouteNode::index().name("工作台").icon("house"),
        RouteNode::new("books")
            .name("图书管理")
            .icon("book")
            .child(RouteNode::index().name("图书管理").hidden())
            .child(RouteNode::new("list").name("图书列表")),
        RouteNode::new("authors")
            .name("作者管理")
            .icon("person")
            .child(RouteNode::new("list").name("作者列表")),
        RouteNode::new("orders")
            .name("订单管理")
            .icon("cart")
            .child(RouteNode::new("list").name("订单列表"))
            .child(RouteNode::new(":id").name("订单详情").hidden()),
        RouteNode::new("users")
            .name("用户管理")
            .icon("people")
            .child(RouteNode::new("list").name("用户列表"))
            .child(RouteNode::new("roles").name("角色权限")),
    ]
}
