//! Dependency resolution between source files.
//!
//! This module answers "which files must be rebuilt when this one changes?"
//! by building a reverse dependency map over the whole site. The graph is
//! rebuilt from scratch on every call; there is no incremental update.
//!
//! - [`dependency_graph`] - [`DependencyGraph`] and its builder

pub mod dependency_graph;

pub use dependency_graph::{DependencyGraph, DependencyGraphBuilder, build_dependency_graph};
