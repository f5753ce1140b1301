//! HTML processor: expands include directives.

use std::sync::Arc;

use super::{CompileFuture, Plugin, Processor, Transform, TransformFuture};
use crate::config::SiteConfig;
use crate::templating::IncludeResolver;

/// Extension key and output extension of the HTML processor.
const HTML_EXTENSION: &str = "html";

/// Plugin registering [`HtmlProcessor`] under the `html` extension.
///
/// The processor reads partials through the configuration's content source
/// and includes directory as they are at registration time.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPlugin;

impl Plugin for HtmlPlugin {
    fn register(&self, config: &mut SiteConfig) {
        let resolver = IncludeResolver::with_settings(config.source(), &config.settings);
        config.add_extension(HTML_EXTENSION, Arc::new(HtmlProcessor::new(resolver)));
    }
}

/// Resolves `<html-include>` directives in HTML files.
#[derive(Debug, Clone)]
pub struct HtmlProcessor {
    resolver: IncludeResolver,
}

impl HtmlProcessor {
    /// Create a processor that expands includes with `resolver`.
    pub fn new(resolver: IncludeResolver) -> Self {
        Self { resolver }
    }
}

impl Processor for HtmlProcessor {
    fn output_file_extension(&self) -> &str {
        HTML_EXTENSION
    }

    fn compile(&self, content: &str, file_path: &str) -> CompileFuture {
        let resolver = self.resolver.clone();
        let content: Arc<str> = Arc::from(content);
        let file_path: Arc<str> = Arc::from(file_path);

        Box::pin(async move {
            tracing::trace!("Compiled '{}' for include expansion", file_path);
            let transform: Transform = Box::new(move || -> TransformFuture {
                let resolver = resolver.clone();
                let content = Arc::clone(&content);
                let file_path = Arc::clone(&file_path);
                Box::pin(async move { resolver.resolve(&content, &file_path).await })
            });
            transform
        })
    }
}
