//! CRM admin test utilities.
//!
//! Helpers for integration testing: route-tree fixtures and a builder
//! producing route documents as JSON, the same shape the kernel loads
//! from disk.

use serde_json::{Map, Value as JsonValue, json};

/// Create a test route with the given path segment.
pub fn test_route(path: &str) -> TestRoute {
    TestRoute {
        path: Some(path.to_string()),
        index: false,
        hidden: false,
        name: None,
        icon: None,
        children: Vec::new(),
    }
}

/// Create a test index route.
pub fn test_index_route() -> TestRoute {
    TestRoute {
        path: None,
        index: true,
        hidden: false,
        name: None,
        icon: None,
        children: Vec::new(),
    }
}

/// A test route builder for creating route documents.
#[derive(Debug, Clone)]
pub struct TestRoute {
    pub path: Option<String>,
    pub index: bool,
    pub hidden: bool,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub children: Vec<TestRoute>,
}

impl TestRoute {
    /// Set the display name.
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Mark as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Append a child route.
    pub fn with_child(mut self, child: TestRoute) -> Self {
        self.children.push(child);
        self
    }

    /// Convert to the JSON route shape.
    pub fn to_json(&self) -> JsonValue {
        let mut obj = Map::new();
        if let Some(path) = &self.path {
            obj.insert("path".to_string(), json!(path));
        }
        if self.index {
            obj.insert("index".to_string(), json!(true));
        }
        if self.hidden {
            obj.insert("hidden".to_string(), json!(true));
        }
        if let Some(name) = &self.name {
            obj.insert("name".to_string(), json!(name));
        }
        if let Some(icon) = &self.icon {
            obj.insert("icon".to_string(), json!(icon));
        }
        if !self.children.is_empty() {
            let children: Vec<JsonValue> = self.children.iter().map(TestRoute::to_json).collect();
            obj.insert("children".to_string(), JsonValue::Array(children));
        }
        JsonValue::Object(obj)
    }
}

/// Serialize a list of routes as a route document.
pub fn route_document(routes: &[TestRoute]) -> String {
    JsonValue::Array(routes.iter().map(TestRoute::to_json).collect()).to_string()
}

/// The back-office route tree: a `/` layout holding the CRUD sections.
pub fn crm_layout_document() -> String {
    let layout = test_route("/")
        .with_child(test_index_route().named("工作台"))
        .with_child(
            test_route("books")
                .named("图书管理")
                .with_child(test_index_route().named("图书管理").hidden())
                .with_child(test_route("list").named("图书列表")),
        )
        .with_child(
            test_route("authors")
                .named("作者管理")
                .with_child(test_route("list").named("作者列表")),
        )
        .with_child(
            test_route("users")
                .named("用户管理")
                .with_child(test_route("list").named("用户列表"))
                .with_child(test_route("roles").named("角色权限")),
        );
    layout.to_json().to_string()
}

/// Create a unique scratch directory for file-based tests.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[allow(clippy::expect_used)]
pub fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let dir = std::env::temp_dir().join(format!("crm-admin-{tag}-{}-{nanos}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch directory");
    dir
}
