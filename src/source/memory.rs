//! In-memory virtual file system.

use std::collections::HashMap;

use super::{ContentSource, ResolveFuture};
use crate::utils::{join_segments, normalize_path};

/// A [`ContentSource`] backed by a map from normalized path to content.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    /// Create an empty virtual file system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file. The path is normalized before it is stored.
    pub fn insert(&mut self, path: impl AsRef<str>, content: impl Into<String>) -> Option<String> {
        self.files.insert(normalize_path(path.as_ref()), content.into())
    }

    /// Remove a file, returning its previous content.
    pub fn remove(&mut self, path: impl AsRef<str>) -> Option<String> {
        self.files.remove(&normalize_path(path.as_ref()))
    }

    /// Look up a file synchronously.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(&normalize_path(path)).map(String::as_str)
    }

    /// Number of files held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the file system is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<P, C> FromIterator<(P, C)> for MemorySource
where
    P: AsRef<str>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (path, content) in iter {
            source.insert(path, content);
        }
        source
    }
}

impl ContentSource for MemorySource {
    fn resolve<'a>(&'a self, segments: &'a [&'a str]) -> ResolveFuture<'a> {
        let content = self.files.get(&join_segments(segments)).cloned();
        Box::pin(futures::future::ready(content))
    }
}
