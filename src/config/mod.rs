//! Site configuration: settings, content source and processor registry.
//!
//! [`SiteSettings`] describes the directory layout and can be loaded from a
//! `sissi.toml` file. [`SiteConfig`] combines those settings with the
//! [`ContentSource`] every component reads files through and with the set of
//! registered [`Processor`] extensions.
//!
//! # Example
//!
//! ```rust,no_run
//! use sissi_core::config::{SiteConfig, SiteSettings};
//! use sissi_core::extensions::HtmlPlugin;
//! use sissi_core::source::FsSource;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let project = Path::new("my-site");
//! let settings = SiteSettings::load_or_default(project).await?;
//! let mut config = SiteConfig::with_settings(settings, Arc::new(FsSource::new(project)));
//! config.add_plugin(&HtmlPlugin);
//!
//! let graph = config.dependency_graph(&["index.html", "about.md"]).await;
//! println!("{}", graph.to_json()?);
//! # Ok(())
//! # }
//! ```

mod settings;

pub use settings::SiteSettings;

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::core::SissiError;
use crate::extensions::{Plugin, Processor};
use crate::resolver::{DependencyGraph, DependencyGraphBuilder};
use crate::source::ContentSource;

/// Settings, content source and registered processors of one site.
pub struct SiteConfig {
    /// Directory layout.
    pub settings: SiteSettings,
    source: Arc<dyn ContentSource>,
    extensions: IndexMap<String, Arc<dyn Processor>>,
}

impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("settings", &self.settings)
            .field("extensions", &self.extension_names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl SiteConfig {
    /// Create a configuration with default settings.
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self::with_settings(SiteSettings::default(), source)
    }

    /// Create a configuration with explicit settings.
    pub fn with_settings(settings: SiteSettings, source: Arc<dyn ContentSource>) -> Self {
        Self {
            settings,
            source,
            extensions: IndexMap::new(),
        }
    }

    /// The content source shared by all components.
    #[must_use]
    pub fn source(&self) -> Arc<dyn ContentSource> {
        Arc::clone(&self.source)
    }

    /// Replace the content source.
    ///
    /// Processors capture the source when their plugin registers, so set the
    /// source before adding plugins.
    pub fn set_source(&mut self, source: Arc<dyn ContentSource>) {
        self.source = source;
    }

    /// Let `plugin` register its processors.
    pub fn add_plugin<P: Plugin + ?Sized>(&mut self, plugin: &P) -> &mut Self {
        plugin.register(self);
        self
    }

    /// Register `processor` for files with extension `name`, replacing any
    /// previous registration.
    pub fn add_extension(&mut self, name: impl Into<String>, processor: Arc<dyn Processor>) {
        let name = name.into();
        tracing::debug!(
            "Registering '{}' processor (outputs .{})",
            name,
            processor.output_file_extension()
        );
        self.extensions.insert(name, processor);
    }

    /// Whether a processor is registered for `name`.
    #[must_use]
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }

    /// The processor registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SissiError::UnknownExtension`] if nothing was registered.
    pub fn extension(&self, name: &str) -> Result<Arc<dyn Processor>, SissiError> {
        self.extensions.get(name).cloned().ok_or_else(|| SissiError::UnknownExtension {
            name: name.to_string(),
        })
    }

    /// Registered extension names in registration order.
    pub fn extension_names(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    /// Build the dependency graph of `file_paths` with this site's settings.
    pub async fn dependency_graph<S: AsRef<str>>(&self, file_paths: &[S]) -> DependencyGraph {
        DependencyGraphBuilder::new(self.settings.clone())
            .build(&self.settings.input_dir, file_paths, self.source.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::HtmlPlugin;
    use crate::source::MemorySource;

    #[test]
    fn test_unknown_extension() {
        let config = SiteConfig::new(Arc::new(MemorySource::new()));
        let error = config.extension("md").err().unwrap();
        assert!(matches!(error, SissiError::UnknownExtension { ref name } if name == "md"));
    }

    #[test]
    fn test_closure_plugin_and_order() {
        let mut config = SiteConfig::new(Arc::new(MemorySource::new()));
        config.add_plugin(&HtmlPlugin).add_plugin(&|config: &mut SiteConfig| {
            let html = config.extension("html").unwrap();
            config.add_extension("htm", html);
        });

        assert_eq!(config.extension_names().collect::<Vec<_>>(), ["html", "htm"]);
        assert!(format!("{config:?}").contains("htm"));
    }

    #[tokio::test]
    async fn test_dependency_graph_uses_settings() {
        let source = MemorySource::from_iter([
            ("www/index.html", "<html-include src=\"top.html\">"),
            ("www/parts/top.html", "<header></header>"),
        ]);
        let settings = SiteSettings {
            input_dir: "www".to_string(),
            includes_dir: "parts".to_string(),
            ..SiteSettings::default()
        };
        let config = SiteConfig::with_settings(settings, Arc::new(source));

        let graph = config.dependency_graph(&["index.html", "parts/top.html"]).await;
        assert_eq!(graph.dependents("parts/top.html"), ["index.html"]);
    }

    #[tokio::test]
    async fn test_set_source_before_plugins() {
        let mut config = SiteConfig::new(Arc::new(MemorySource::new()));
        config.set_source(Arc::new(MemorySource::from_iter([("_includes/a.html", "A")])));
        config.add_plugin(&HtmlPlugin);

        let html = config.extension("html").unwrap();
        let transform = html.compile("<html-include src=\"a.html\">", "x.html").await;
        assert_eq!(transform().await, "A");
    }
}
