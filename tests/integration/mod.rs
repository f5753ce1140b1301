//! Integration test suite for sissi-core
//!
//! End-to-end tests that drive the public API the way a build orchestrator
//! would: enumerate files, build the dependency graph, compile and transform
//! files through registered processors.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **dependency_graph**: Graph direction, ordering and dedup over a virtual file system
//! - **html_plugin**: The HTML processor registered through a site config
//! - **fs_site**: The same flows against a site on disk

mod dependency_graph;
mod fs_site;
mod html_plugin;
