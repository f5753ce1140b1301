//! Processor extensions registered on a [`SiteConfig`].
//!
//! A processor turns the raw content of one file type into output. It works in
//! two phases:
//!
//! 1. [`Processor::compile`] registers a file cheaply and hands back a
//!    [`Transform`] without doing any expansion work yet.
//! 2. Calling the transform performs the actual, I/O-bound work and yields the
//!    final text. A transform can be called again to re-process the file after
//!    its dependencies changed; nothing is cached between calls.
//!
//! Plugins bundle the registration of one or more processors. Any
//! `Fn(&mut SiteConfig)` closure is a plugin, as is [`HtmlPlugin`].
//!
//! # Example
//!
//! ```rust,no_run
//! use sissi_core::config::SiteConfig;
//! use sissi_core::extensions::HtmlPlugin;
//! use sissi_core::source::MemorySource;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let source = MemorySource::from_iter([("_includes/top.html", "<header></header>")]);
//! let mut config = SiteConfig::new(Arc::new(source));
//! config.add_plugin(&HtmlPlugin);
//!
//! let html = config.extension("html")?;
//! let transform = html.compile("<html-include src=\"top.html\">", "index.html").await;
//! assert_eq!(transform().await, "<header></header>");
//! # Ok(())
//! # }
//! ```
//!
//! [`SiteConfig`]: crate::config::SiteConfig

mod html;

pub use html::{HtmlPlugin, HtmlProcessor};

use futures::future::BoxFuture;

use crate::config::SiteConfig;

/// Pending result of running a [`Transform`].
pub type TransformFuture = BoxFuture<'static, String>;

/// Deferred processing of one compiled file; re-invokable.
pub type Transform = Box<dyn Fn() -> TransformFuture + Send + Sync>;

/// Pending result of [`Processor::compile`].
pub type CompileFuture = BoxFuture<'static, Transform>;

/// Processes one kind of source file.
pub trait Processor: Send + Sync {
    /// Extension of the files this processor produces, e.g. `html`.
    fn output_file_extension(&self) -> &str;

    /// Prepare `content` (read from `file_path`) for processing.
    fn compile(&self, content: &str, file_path: &str) -> CompileFuture;
}

/// Registers processors on a site configuration.
pub trait Plugin {
    /// Add this plugin's processors to `config`.
    fn register(&self, config: &mut SiteConfig);
}

impl<F> Plugin for F
where
    F: Fn(&mut SiteConfig),
{
    fn register(&self, config: &mut SiteConfig) {
        self(config);
    }
}
