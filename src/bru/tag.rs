//! Method-tag registry.
//!
//! Maps a lowercase HTTP-method name to the tag variant that produces the
//! method block of a request document. The registration table is open:
//! custom verbs can be mapped onto the generic variant at runtime, while
//! the built-in variants cover the methods the generator emits by default.

use std::collections::HashMap;

use crate::bru::block::Block;
use crate::error::{Error, Result};

/// The closed set of tag variants a method name can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Generic,
}

/// A method tag being assembled into a dictionary block.
///
/// The caller appends entries in order (the request `url` always comes
/// first); [`MethodTag::into_block`] finalizes the block. The GET variant
/// auto-appends `body: none` and `auth: inherit`; explicitly pushed
/// entries win, since duplicate keys are rejected.
#[derive(Debug, Clone)]
pub struct MethodTag {
    kind: TagKind,
    block: Block,
}

impl MethodTag {
    fn new(kind: TagKind, name: &str) -> Self {
        Self {
            kind,
            block: Block::new(name),
        }
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.block.name()
    }

    /// Append a dictionary entry; duplicate keys are rejected.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.block.push(key, value)
    }

    /// Finalize the tag into its dictionary block.
    pub fn into_block(mut self) -> Block {
        if self.kind == TagKind::Get {
            self.block.push("body", "none");
            self.block.push("auth", "inherit");
        }
        self.block
    }
}

/// Registration table from lowercase method name to tag variant.
#[derive(Debug, Clone)]
pub struct TagRegistry {
    variants: HashMap<String, TagKind>,
}

impl TagRegistry {
    /// An empty registry with no variants registered.
    pub fn new() -> Self {
        Self {
            variants: HashMap::new(),
        }
    }

    /// A registry with the standard HTTP methods registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("get", TagKind::Get);
        registry.register("post", TagKind::Post);
        registry.register("put", TagKind::Put);
        registry.register("patch", TagKind::Patch);
        registry.register("delete", TagKind::Delete);
        registry
    }

    /// Map a tag name onto a variant. Names are stored lowercased.
    pub fn register(&mut self, name: &str, kind: TagKind) {
        self.variants.insert(name.to_lowercase(), kind);
    }

    pub fn is_registered(&self, method: &str) -> bool {
        self.variants.contains_key(&method.to_lowercase())
    }

    /// Resolve an HTTP method to a fresh tag.
    ///
    /// Fails with [`Error::UnsupportedMethod`] when the lowercased name has
    /// no registered variant.
    pub fn resolve(&self, method: &str) -> Result<MethodTag> {
        let name = method.to_lowercase();
        let kind = self
            .variants
            .get(&name)
            .copied()
            .ok_or_else(|| Error::UnsupportedMethod(method.to_string()))?;
        Ok(MethodTag::new(kind, &name))
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
