//! Configuration for a generation run.

use std::path::PathBuf;

/// Configuration for generating a Bruno collection from a route table.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the exported route table (JSON or YAML)
    pub routes_path: PathBuf,
    /// Root directory of the Bruno collection
    pub collection_dir: PathBuf,
    /// Namespace prefix identifying application-owned controllers
    pub app_namespace: String,
    /// Collection name offered when bootstrapping a new collection
    pub default_collection_name: String,
    /// Base URL offered when bootstrapping a new collection
    pub default_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routes_path: PathBuf::from("routes.json"),
            collection_dir: PathBuf::from("bruno"),
            app_namespace: "App\\".to_string(),
            default_collection_name: "my_collection".to_string(),
            default_base_url: "https://localhost".to_string(),
        }
    }
}
