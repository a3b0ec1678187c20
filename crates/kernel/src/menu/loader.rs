//! Route document loading.
//!
//! A route document is either a list of top-level routes or a single
//! layout route whose children are the top-level routes (the shell layout
//! mounted at `/`). Both JSON and YAML are accepted.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::route::RouteNode;
use crate::error::{MenuError, MenuResult};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RouteDocument {
    Routes(Vec<RouteNode>),
    Layout(RouteNode),
}

impl RouteDocument {
    fn into_routes(self) -> Vec<RouteNode> {
        match self {
            RouteDocument::Routes(routes) => routes,
            RouteDocument::Layout(layout) => {
                if layout.hidden {
                    warn!("layout route is marked hidden; hidden is ignored on the layout itself");
                }
                layout.children.unwrap_or_default()
            }
        }
    }
}

/// Parse a JSON route document.
pub fn parse_routes_json(text: &str) -> MenuResult<Vec<RouteNode>> {
    let doc: RouteDocument = serde_json::from_str(text)?;
    Ok(doc.into_routes())
}

/// Parse a YAML route document.
pub fn parse_routes_yaml(text: &str) -> MenuResult<Vec<RouteNode>> {
    let doc: RouteDocument = serde_yml::from_str(text)?;
    Ok(doc.into_routes())
}

/// Load a route document from disk, picking the format by extension.
pub fn load_routes(path: impl AsRef<Path>) -> MenuResult<Vec<RouteNode>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let text = fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let routes = match ext.as_str() {
        "json" => parse_routes_json(&text)?,
        "yaml" | "yml" => parse_routes_yaml(&text)?,
        _ => return Err(MenuError::UnsupportedFormat(path.display().to_string())),
    };

    debug!(path = %path.display(), routes = routes.len(), "loaded route document");
    Ok(routes)
}
