//! File-system backed content source.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ContentSource, ResolveFuture};
use crate::utils::{is_contained, join_segments};

/// Reads content from files under a root directory.
///
/// Segments are joined and normalized before touching the disk; a path that
/// would escape the root is treated as absent. A missing file is absent too.
/// Any other I/O failure is logged and also reported as absent, since the
/// callers of a content source never abort on a single unreadable file.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory all lookups are relative to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FsSource {
    fn resolve<'a>(&'a self, segments: &'a [&'a str]) -> ResolveFuture<'a> {
        Box::pin(async move {
            let relative = join_segments(segments);
            if !is_contained(&relative) {
                tracing::warn!(
                    "Refusing to read '{}' outside of {}",
                    relative,
                    self.root.display()
                );
                return None;
            }

            let path = self.root.join(&relative);
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => Some(content),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::trace!("No file at {}", path.display());
                    None
                }
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                    None
                }
            }
        })
    }
}
