//! Collection tree: root config, environments, request documents, folders.
//!
//! A collection on disk is a directory whose root holds exactly one
//! `bruno.json` config document, an optional reserved `environments/`
//! directory of variable documents, and any number of `.bru` request
//! documents arranged in nested folders. The in-memory model is an owned
//! tree of value-typed nodes, traversed top-down for both parse and write.
//!
//! Writing goes through flat [`Artifact`]s (path + content) so the full
//! tree write stays a simple sequential loop.

use std::path::{Path, PathBuf};

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::bru::block::{Block, BlockEntry};
use crate::bru::document::{BRU_EXTENSION, BruFile};
use crate::error::{Error, Result};

/// Collection config document at the collection root.
pub const CONFIG_FILE: &str = "bruno.json";

/// Reserved directory for environment documents.
pub const ENVIRONMENTS_DIR: &str = "environments";

const COLLECTION_TYPE: &str = "collection";

/// `bruno.json` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CollectionConfig {
    version: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    ignore: Vec<String>,
}

/// A file to be written, with its final path and full content.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// A folder of request documents inside a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub files: Vec<BruFile>,
    pub folders: Vec<Folder>,
}

/// A Bruno collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    version: String,
    name: String,
    ignore: Vec<String>,
    environments: Vec<BruFile>,
    files: Vec<BruFile>,
    folders: Vec<Folder>,
}

impl Collection {
    /// Bootstrap a fresh collection with a single `localhost` environment
    /// document holding the `baseUrl` variable.
    pub fn new(name: impl Into<String>, base_url: &str) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::collection_create("collection name must not be empty"));
        }

        let mut localhost = BruFile::new("localhost");
        localhost.add_block(Block::with_entries(
            "vars",
            vec![BlockEntry::new("baseUrl", base_url)],
        ));

        Ok(Self {
            version: "1".to_string(),
            name,
            ignore: vec!["node_modules".to_string(), ".git".to_string()],
            environments: vec![localhost],
            files: Vec::new(),
            folders: Vec::new(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ignore(&self) -> &[String] {
        &self.ignore
    }

    pub fn environments(&self) -> &[BruFile] {
        &self.environments
    }

    pub fn files(&self) -> &[BruFile] {
        &self.files
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Parse an existing collection directory.
    ///
    /// Fails with [`Error::CollectionParse`] when `bruno.json` is missing
    /// or malformed, or when a request document does not follow the
    /// dictionary-block grammar subset.
    pub async fn parse(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        let content = fs::read_to_string(&config_path).await.map_err(|e| {
            Error::collection_parse(format!("{}: {e}", config_path.display()))
        })?;
        let config: CollectionConfig = serde_json::from_str(&content).map_err(|e| {
            Error::collection_parse(format!("{}: {e}", config_path.display()))
        })?;

        if config.kind != COLLECTION_TYPE {
            return Err(Error::collection_parse(format!(
                "{}: expected type \"{COLLECTION_TYPE}\", found \"{}\"",
                config_path.display(),
                config.kind
            )));
        }
        if config.name.trim().is_empty() {
            return Err(Error::collection_parse(format!(
                "{}: collection name must not be empty",
                config_path.display()
            )));
        }

        let env_dir = dir.join(ENVIRONMENTS_DIR);
        let environments = if fs::metadata(&env_dir).await.map(|m| m.is_dir()).unwrap_or(false) {
            let (files, _) = parse_folder(&env_dir, &config.ignore, false).await?;
            files
        } else {
            Vec::new()
        };

        let (files, folders) = parse_folder(dir, &config.ignore, true).await?;

        Ok(Self {
            version: config.version,
            name: config.name,
            ignore: config.ignore,
            environments,
            files,
            folders,
        })
    }

    /// Flatten the collection into writable artifacts rooted at `root`.
    pub fn to_artifacts(&self, root: &Path) -> Result<Vec<Artifact>> {
        let config = CollectionConfig {
            version: self.version.clone(),
            name: self.name.clone(),
            kind: COLLECTION_TYPE.to_string(),
            ignore: self.ignore.clone(),
        };
        let mut content = serde_json::to_string_pretty(&config)?;
        content.push('\n');

        let mut artifacts = vec![Artifact {
            path: root.join(CONFIG_FILE),
            content,
        }];

        let env_dir = root.join(ENVIRONMENTS_DIR);
        for environment in &self.environments {
            artifacts.push(Artifact {
                path: env_dir.join(environment.file_name()),
                content: environment.to_text(),
            });
        }

        push_folder_artifacts(&mut artifacts, root, &self.files, &self.folders);
        Ok(artifacts)
    }

    /// Write the full collection tree under `dir`.
    pub async fn write(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).await.map_err(|e| {
            Error::collection_create(format!("failed to create directory {}: {e}", dir.display()))
        })?;

        for artifact in self.to_artifacts(dir)? {
            if let Some(parent) = artifact.path.parent() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    Error::collection_create(format!(
                        "failed to create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
            fs::write(&artifact.path, &artifact.content).await.map_err(|e| {
                Error::collection_create(format!(
                    "failed to write {}: {e}",
                    artifact.path.display()
                ))
            })?;
        }

        Ok(())
    }
}

fn push_folder_artifacts(
    artifacts: &mut Vec<Artifact>,
    dir: &Path,
    files: &[BruFile],
    folders: &[Folder],
) {
    for file in files {
        artifacts.push(Artifact {
            path: dir.join(file.file_name()),
            content: file.to_text(),
        });
    }
    for folder in folders {
        push_folder_artifacts(
            artifacts,
            &dir.join(&folder.name),
            &folder.files,
            &folder.folders,
        );
    }
}

/// Read one directory level into (documents, sub-folders).
///
/// Entries are visited in name order so parsed collections are stable.
/// At the collection root the config document and the reserved
/// `environments/` directory are handled separately and skipped here.
fn parse_folder<'a>(
    dir: &'a Path,
    ignore: &'a [String],
    is_root: bool,
) -> BoxFuture<'a, Result<(Vec<BruFile>, Vec<Folder>)>> {
    async move {
        let mut read_dir = fs::read_dir(dir).await?;
        let mut paths = Vec::new();
        while let Some(entry) = read_dir.next_entry().await? {
            paths.push(entry.path());
        }
        paths.sort();

        let mut files = Vec::new();
        let mut folders = Vec::new();

        for path in paths {
            let Some(entry_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if ignore.iter().any(|pattern| pattern == entry_name) {
                continue;
            }
            if is_root && (entry_name == CONFIG_FILE || entry_name == ENVIRONMENTS_DIR) {
                continue;
            }

            if fs::metadata(&path).await?.is_dir() {
                let (sub_files, sub_folders) = parse_folder(&path, ignore, false).await?;
                folders.push(Folder {
                    name: entry_name.to_string(),
                    files: sub_files,
                    folders: sub_folders,
                });
            } else if path.extension().is_some_and(|e| e == BRU_EXTENSION) {
                let stem = entry_name.trim_end_matches(".bru");
                let text = fs::read_to_string(&path).await?;
                files.push(BruFile::parse(stem, &text)?);
            }
        }

        Ok((files, folders))
    }
    .boxed()
}
