//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::menu::normalize_path;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Route document to derive the menu from (CRM_ROUTES_FILE). When None,
    /// the built-in admin route table is used.
    pub routes_file: Option<PathBuf>,

    /// Mount point of the route tree (CRM_MENU_ROOT, default: /).
    pub menu_root: String,

    /// Pretty-print JSON output (CRM_PRETTY_JSON, default: false).
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routes_file: None,
            menu_root: "/".to_string(),
            pretty_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let routes_file = lookup("CRM_ROUTES_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let menu_root = lookup("CRM_MENU_ROOT")
            .map(|v| normalize_path(&v))
            .unwrap_or_else(|| "/".to_string());

        let pretty_json = match lookup("CRM_PRETTY_JSON") {
            Some(v) => parse_bool(&v)?,
            None => false,
        };

        Ok(Self {
            routes_file,
            menu_root,
            pretty_json,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("CRM_PRETTY_JSON must be a boolean, got {other:?}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> Box<dyn Fn(&str) -> Option<String>> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Box::new(move |key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("CRM_ROUTES_FILE", "routes.yaml"),
            ("CRM_MENU_ROOT", "/admin//"),
            ("CRM_PRETTY_JSON", "yes"),
        ]))
        .unwrap();

        assert_eq!(config.routes_file, Some(PathBuf::from("routes.yaml")));
        assert_eq!(config.menu_root, "/admin");
        assert!(config.pretty_json);
    }

    #[test]
    fn blank_routes_file_is_ignored() {
        let config = Config::from_lookup(lookup(&[("CRM_ROUTES_FILE", "  ")])).unwrap();
        assert!(config.routes_file.is_none());
    }

    #[test]
    fn rejects_bad_bool() {
        assert!(Config::from_lookup(lookup(&[("CRM_PRETTY_JSON", "maybe")])).is_err());
    }
}
