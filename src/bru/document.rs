//! Request documents (`.bru` files).
//!
//! A [`BruFile`] is one HTTP request definition: a name (the filename stem)
//! and an ordered sequence of dictionary blocks. Documents are built once
//! per (route, method) pair, never mutated afterwards, and written
//! individually to their target directory.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::bru::block::Block;
use crate::bru::parser::parse_blocks;
use crate::error::{Error, Result};

/// File extension for request documents.
pub const BRU_EXTENSION: &str = "bru";

/// One request document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruFile {
    name: String,
    blocks: Vec<Block>,
}

impl BruFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with_blocks(name: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            name: name.into(),
            blocks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn find_block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.name() == name)
    }

    /// The on-disk file name, `<name>.bru`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, BRU_EXTENSION)
    }

    /// Parse a document body into a [`BruFile`] named `name`.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let blocks = parse_blocks(text)
            .map_err(|issue| Error::collection_parse(format!("{name}.{BRU_EXTENSION}: {issue}")))?;
        Ok(Self { name, blocks })
    }

    /// Serialize the document into the Bruno text grammar.
    ///
    /// Blocks are rendered in order, separated by a blank line, entries
    /// indented with two spaces:
    ///
    /// ```text
    /// meta {
    ///   name: get_app_user_list
    ///   type: http
    /// }
    ///
    /// get {
    ///   url: {{baseUrl}}/users
    ///   body: none
    ///   auth: inherit
    /// }
    /// ```
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (idx, block) in self.blocks.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.push_str(block.name());
            out.push_str(" {\n");
            for entry in block.entries() {
                out.push_str("  ");
                out.push_str(&entry.key);
                out.push_str(": ");
                out.push_str(&entry.value);
                out.push('\n');
            }
            out.push_str("}\n");
        }
        out
    }

    /// Write the document into `dir`, returning the written path.
    pub async fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.to_text()).await?;
        Ok(path)
    }
}
