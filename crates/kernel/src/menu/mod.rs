//! Menu system for the admin sidebar.
//!
//! The sidebar menu is derived from the static route tree on every render:
//! - Hidden routes are removed together with their subtrees
//! - Paths are resolved to absolute, normalized form
//! - Branches with a single visible destination collapse into one entry
//!
//! Route trees come from a JSON/YAML document or the built-in admin table.

mod active;
mod builtin;
mod derive;
mod loader;
mod path;
mod route;

pub use active::active_trail;
pub use builtin::builtin_routes;
pub use derive::{derive_menu, derive_root_menu, resolve_path};
pub use loader::{load_routes, parse_routes_json, parse_routes_yaml};
pub use path::{join_path, normalize_path};
pub use route::{MenuNode, RouteNode};
