//! Dependency graph construction for incremental builds.
//!
//! The graph is a reverse map: each key is a file that other files depend on
//! (a layout, an include partial, an imported stylesheet) and its value lists
//! the files that reference it. A caller that sees a file change looks it up
//! here to find out what needs rebuilding; walking the graph transitively is
//! left to that caller.
//!
//! # Invariants
//!
//! - Keys appear only when something references them, never with an empty list
//! - Dependents keep first-discovery order and never repeat for the same key
//! - Self references are recorded like any other edge
//!
//! # Example
//!
//! ```rust,no_run
//! use sissi_core::resolver::build_dependency_graph;
//! use sissi_core::source::MemorySource;
//!
//! # async fn example() {
//! let source = MemorySource::from_iter([
//!     ("index.html", "<html-include src=\"top.html\">"),
//!     ("_includes/top.html", "<header>header</header>\n"),
//! ]);
//!
//! let graph = build_dependency_graph("", &["index.html", "_includes/top.html"], &source).await;
//! assert_eq!(graph.dependents("_includes/top.html"), ["index.html"]);
//! # }
//! ```

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::SiteSettings;
use crate::core::SissiError;
use crate::markdown::extract_references;
use crate::source::ContentSource;
use crate::utils::normalize_path;

/// Reverse dependency map from a depended-upon path to its dependents.
///
/// Serializes as a plain JSON object in key-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    edges: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `dependent` references `dependency`.
    ///
    /// Returns `false` if the edge was already present.
    pub fn add_edge(
        &mut self,
        dependency: impl Into<String>,
        dependent: impl Into<String>,
    ) -> bool {
        let dependent = dependent.into();
        let dependents = self.edges.entry(dependency.into()).or_default();
        if dependents.contains(&dependent) {
            return false;
        }
        dependents.push(dependent);
        true
    }

    /// Files that reference `dependency`, in discovery order.
    ///
    /// Returns an empty slice for a path nothing depends on.
    #[must_use]
    pub fn dependents(&self, dependency: &str) -> &[String] {
        self.edges.get(dependency).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether anything depends on `dependency`.
    #[must_use]
    pub fn contains(&self, dependency: &str) -> bool {
        self.edges.contains_key(dependency)
    }

    /// Number of depended-upon paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of (dependency, dependent) pairs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Iterate over dependencies and their dependents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges
            .iter()
            .map(|(dependency, dependents)| (dependency.as_str(), dependents.as_slice()))
    }

    /// Consume the graph and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.edges
    }

    /// Render the graph as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SissiError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SissiError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds a [`DependencyGraph`] by scanning every file of a site.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraphBuilder {
    settings: SiteSettings,
}

impl DependencyGraphBuilder {
    /// Create a builder that resolves layouts and includes with `settings`.
    #[must_use]
    pub fn new(settings: SiteSettings) -> Self {
        Self { settings }
    }

    /// Scan `file_paths` in order and collect their dependency edges.
    ///
    /// Each file is fetched with `source.resolve([base_dir, path])`. A file the
    /// source cannot provide contributes no edges; the caller may pass paths
    /// for files that do not exist yet. Files are processed one at a time so
    /// the order of dependents is deterministic.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Directory the file paths are relative to
    /// * `file_paths` - Canonical paths of every file in the site
    /// * `source` - Where file content comes from
    pub async fn build<S: AsRef<str>>(
        &self,
        base_dir: &str,
        file_paths: &[S],
        source: &dyn ContentSource,
    ) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for file_path in file_paths {
            let file_path = normalize_path(file_path.as_ref());
            let Some(content) = source.resolve(&[base_dir, file_path.as_str()]).await else {
                tracing::trace!("Skipping '{}': no content", file_path);
                continue;
            };

            for reference in extract_references(&file_path, &content) {
                let dependency = reference.canonical_path(&file_path, &self.settings);
                if graph.add_edge(dependency.as_str(), file_path.as_str()) {
                    tracing::trace!("'{}' depends on '{}'", file_path, dependency);
                }
            }
        }

        tracing::debug!(
            "Built dependency graph from {} file(s): {} dependencies, {} edges",
            file_paths.len(),
            graph.len(),
            graph.edge_count()
        );
        graph
    }
}

/// Build the dependency graph with the default directory layout.
///
/// See [`DependencyGraphBuilder::build`].
pub async fn build_dependency_graph<S: AsRef<str>>(
    base_dir: &str,
    file_paths: &[S],
    source: &dyn ContentSource,
) -> DependencyGraph {
    DependencyGraphBuilder::default().build(base_dir, file_paths, source).await
}
