//! Route-table model and loader.
//!
//! The router itself is an external collaborator: the framework dumps its
//! route collection to a JSON or YAML file, and this module reads that
//! export back into a [`RouteTable`]. The expected shape is an ordered map
//! from route name to a record with `path`, `methods`, `defaults`, and
//! `requirements`; a top-level `routes` wrapper key is also accepted.
//!
//! Enumeration order of routes and of each route's defaults is preserved
//! end to end, so generated output is stable across runs.

pub mod grouper;

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use tokio::fs;

use crate::error::{Error, Result};

/// One route from the exported route table.
///
/// All fields are optional in the export; a route with no methods is later
/// defaulted to `GET` by the planner.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Raw path pattern, possibly containing `{name}` placeholders
    pub path: String,
    /// Uppercase HTTP verbs, in declaration order (may be empty)
    pub methods: Vec<String>,
    /// Placeholder defaults plus router-internal entries such as `_controller`
    pub defaults: Map<String, JsonValue>,
    /// Per-placeholder requirement patterns; presence implies "required"
    pub requirements: Map<String, JsonValue>,
}

impl Route {
    /// The route's `_controller` default, when present and a string.
    pub fn controller(&self) -> Option<&str> {
        self.defaults.get("_controller").and_then(JsonValue::as_str)
    }
}

/// The full route table, in the router's enumeration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<(String, Route)>,
}

impl RouteTable {
    /// Load a route table from a JSON or YAML export file.
    ///
    /// The parser is picked by file extension; files without a recognized
    /// extension are tried as JSON first, then YAML.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;

        let value: JsonValue = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| Error::route_table(format!("failed to parse route export: {e}")))?
        };

        Self::parse(value)
    }

    /// Build a route table from an already-deserialized export document.
    pub fn parse(value: JsonValue) -> Result<Self> {
        let JsonValue::Object(mut map) = value else {
            return Err(Error::route_table("expected an object of routes"));
        };

        // Unwrap `{ "routes": { ... } }` export wrappers
        if map.len() == 1 && map.get("routes").is_some_and(JsonValue::is_object) {
            if let Some(JsonValue::Object(inner)) = map.remove("routes") {
                map = inner;
            }
        }

        let mut routes = Vec::with_capacity(map.len());
        for (name, value) in map {
            let route: Route = serde_json::from_value(value)
                .map_err(|e| Error::route_table(format!("route '{name}': {e}")))?;
            routes.push((name, route));
        }

        Ok(Self { routes })
    }

    /// Iterate routes in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.routes.iter().map(|(name, route)| (name.as_str(), route))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_route_table() {
        let table = RouteTable::parse(json!({
            "app_user_list": {
                "path": "/users",
                "methods": ["GET"],
                "defaults": { "_controller": "App\\Controller\\UserController::list" }
            },
            "app_user_show": {
                "path": "/users/{id}",
                "methods": ["GET"],
                "defaults": {
                    "_controller": "App\\Controller\\UserController::show",
                    "id": "1"
                },
                "requirements": { "id": "\\d+" }
            }
        }))
        .unwrap();

        assert_eq!(table.len(), 2);
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["app_user_list", "app_user_show"]);

        let (_, show) = table.iter().nth(1).unwrap();
        assert_eq!(show.path, "/users/{id}");
        assert_eq!(
            show.controller(),
            Some("App\\Controller\\UserController::show")
        );
        assert!(show.requirements.contains_key("id"));
    }

    #[test]
    fn test_parse_accepts_routes_wrapper() {
        let table = RouteTable::parse(json!({
            "routes": {
                "home": { "path": "/" }
            }
        }))
        .unwrap();

        assert_eq!(table.len(), 1);
        let (name, route) = table.iter().next().unwrap();
        assert_eq!(name, "home");
        assert_eq!(route.path, "/");
        assert!(route.methods.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = RouteTable::parse(json!(["not", "a", "map"])).unwrap_err();
        assert!(matches!(err, Error::RouteTable(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_route() {
        let err = RouteTable::parse(json!({ "bad": { "path": 42 } })).unwrap_err();
        assert!(err.to_string().contains("route 'bad'"));
    }

    #[test]
    fn test_defaults_preserve_order() {
        let table = RouteTable::parse(json!({
            "r": {
                "path": "/a/{x}/{y}",
                "defaults": { "y": "2", "x": "1" }
            }
        }))
        .unwrap();

        let (_, route) = table.iter().next().unwrap();
        let keys: Vec<&String> = route.defaults.keys().collect();
        assert_eq!(keys, vec!["y", "x"]);
    }
}
