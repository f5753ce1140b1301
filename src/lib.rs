//! sissi-core - dependency tracking and include resolution for a static site generator
//!
//! This crate is the incremental-build core of the sissi static site
//! generator. It answers two questions:
//!
//! 1. **What depends on what?** The dependency graph builder scans every
//!    source file for layout references (`---json` frontmatter), include tags
//!    (`<html-include src="...">`) and stylesheet imports (`import "...";`)
//!    and produces a reverse map from each referenced file to the files that
//!    reference it. A watcher uses it to decide what to rebuild.
//! 2. **What does this file expand to?** The include resolver substitutes
//!    every include tag with the recursively expanded partial, turning cycles
//!    and missing partials into a visible `<!-- missing include: ... -->`
//!    marker instead of failing.
//!
//! File content is always fetched through a [`source::ContentSource`], so the
//! same code runs against the disk ([`source::FsSource`]) or a virtual file
//! system ([`source::MemorySource`]).
//!
//! # Modules
//!
//! - [`config`] - Site settings (`sissi.toml`) and the processor registry
//! - [`core`] - Error types
//! - [`extensions`] - Two-phase processors and the HTML plugin
//! - [`markdown`] - Frontmatter parsing and reference extraction
//! - [`resolver`] - Dependency graph construction
//! - [`source`] - Content sources
//! - [`templating`] - Include expansion
//! - [`utils`] - Path helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use sissi_core::resolver::build_dependency_graph;
//! use sissi_core::source::MemorySource;
//! use sissi_core::templating::resolve_includes;
//!
//! # async fn example() {
//! let source = MemorySource::from_iter([
//!     ("index.html", "<html-include src=\"top.html\">"),
//!     ("_includes/top.html", "<header>header</header>\n"),
//! ]);
//!
//! let graph = build_dependency_graph("", &["index.html", "_includes/top.html"], &source).await;
//! assert_eq!(graph.dependents("_includes/top.html"), ["index.html"]);
//!
//! let html = resolve_includes("<html-include src=\"top.html\">", "index.html", &source).await;
//! assert_eq!(html, "<header>header</header>\n");
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod core;
pub mod extensions;
pub mod markdown;
pub mod resolver;
pub mod source;
pub mod templating;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
