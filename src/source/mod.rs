//! Content sources: where file text comes from.
//!
//! Both the dependency graph builder and the include resolver fetch file
//! content through the [`ContentSource`] capability. A source receives a list
//! of path segments, joins them like a file-system path join and returns the
//! text, or `None` when there is no such resource. Absence is a normal answer,
//! not an error.
//!
//! # Implementations
//!
//! - [`MemorySource`] - A virtual file system backed by a map, useful for tests
//!   and for callers that already hold content in memory
//! - [`FsSource`] - Reads files under a root directory with `tokio::fs`
//! - Any `Fn(&[&str]) -> Option<String> + Send + Sync` closure
//!
//! # Example
//!
//! ```rust,no_run
//! use sissi_core::source::{ContentSource, MemorySource};
//!
//! # async fn example() {
//! let source = MemorySource::from_iter([("_includes/top.html", "<header></header>")]);
//! let content = source.resolve(&["", "_includes", "top.html"]).await;
//! assert_eq!(content.as_deref(), Some("<header></header>"));
//! # }
//! ```

mod fs;
mod memory;

pub use fs::FsSource;
pub use memory::MemorySource;

use futures::future::{self, BoxFuture};

/// Future returned by [`ContentSource::resolve`].
pub type ResolveFuture<'a> = BoxFuture<'a, Option<String>>;

/// Fetches file content for a list of path segments.
///
/// Implementations must join `segments` the way a file-system path join
/// would (see [`crate::utils::join_segments`]) so relative traversal and
/// directory prefixes behave predictably.
pub trait ContentSource: Send + Sync {
    /// Resolve the joined path to its content, or `None` if it does not exist.
    fn resolve<'a>(&'a self, segments: &'a [&'a str]) -> ResolveFuture<'a>;
}

impl<F> ContentSource for F
where
    F: Fn(&[&str]) -> Option<String> + Send + Sync,
{
    fn resolve<'a>(&'a self, segments: &'a [&'a str]) -> ResolveFuture<'a> {
        Box::pin(future::ready(self(segments)))
    }
}
