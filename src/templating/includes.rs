//! Recursive, cycle-safe expansion of `<html-include>` directives.
//!
//! Each include tag is replaced by the fully expanded content of the partial
//! it names. Partials are looked up in a flat includes directory, so a partial
//! that includes another partial names it relative to that directory too.
//!
//! # Cycle Detection
//!
//! Every top-level call owns a [`ResolutionContext`]: the chain of files that
//! are currently being expanded on the way to the current tag. A tag whose
//! target is already in that chain is a cycle and is replaced by the
//! missing-include marker instead of being expanded. The chain is copied on
//! descent, so the same partial can appear in two sibling branches of one
//! document and both are expanded.
//!
//! # Fallbacks
//!
//! Both a cyclic and a missing include produce
//! `<!-- missing include: PATH -->`, where `PATH` is the raw `src` value. The
//! rest of the document keeps expanding; nothing here ever fails.
//!
//! Expansion runs on an explicit stack of frames rather than by recursion, so
//! the depth of an include chain is bounded by memory, not by the call stack.
//!
//! # Example
//!
//! ```rust,no_run
//! use sissi_core::source::MemorySource;
//! use sissi_core::templating::resolve_includes;
//!
//! # async fn example() {
//! let source = MemorySource::from_iter([("_includes/top.html", "<header>header</header>\n")]);
//! let html = resolve_includes("<html-include src=\"top.html\">", "index.html", &source).await;
//! assert_eq!(html, "<header>header</header>\n");
//! # }
//! ```

use std::ops::Range;
use std::sync::Arc;

use crate::config::SiteSettings;
use crate::constants::{DEFAULT_INCLUDES_DIR, missing_include_marker};
use crate::markdown::include_directives;
use crate::source::ContentSource;
use crate::utils::{join_segments, normalize_path};

/// The ancestor chain of one expansion branch.
///
/// Holds the canonical paths of the file being expanded and every file above
/// it in the current branch, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    ancestors: Vec<String>,
}

impl ResolutionContext {
    /// Start a chain with the top-level file as its only ancestor.
    #[must_use]
    pub fn new(file_path: &str) -> Self {
        Self {
            ancestors: vec![normalize_path(file_path)],
        }
    }

    /// Whether `path` is already being expanded in this branch.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.ancestors.iter().any(|ancestor| ancestor == path)
    }

    /// The chain for a child branch that expands `path`.
    #[must_use]
    pub fn descend(&self, path: &str) -> Self {
        let mut ancestors = self.ancestors.clone();
        ancestors.push(path.to_string());
        Self { ancestors }
    }

    /// Ancestors from the top-level file down to the innermost one.
    #[must_use]
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Length of the chain.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}

/// Expands include directives against a content source.
///
/// Cheap to clone; the source is shared.
#[derive(Clone)]
pub struct IncludeResolver {
    source: Arc<dyn ContentSource>,
    base_dir: String,
    includes_dir: String,
}

impl std::fmt::Debug for IncludeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncludeResolver")
            .field("base_dir", &self.base_dir)
            .field("includes_dir", &self.includes_dir)
            .finish_non_exhaustive()
    }
}

impl IncludeResolver {
    /// Create a resolver with the default includes directory and no base directory.
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        let defaults = SiteSettings::default();
        Self {
            source,
            base_dir: String::new(),
            includes_dir: defaults.includes_dir,
        }
    }

    /// Create a resolver that follows the directories in `settings`.
    pub fn with_settings(source: Arc<dyn ContentSource>, settings: &SiteSettings) -> Self {
        Self {
            source,
            base_dir: settings.input_dir.clone(),
            includes_dir: settings.includes_dir.clone(),
        }
    }

    /// Canonical path of the partial a tag's `src` names.
    #[must_use]
    pub fn include_path(&self, raw_path: &str) -> String {
        self.expander().include_path(raw_path)
    }

    /// Expand every include directive in `content`.
    ///
    /// # Arguments
    ///
    /// * `content` - Raw text of the file being rendered
    /// * `file_path` - Canonical path of that file, seeding the ancestor chain
    pub async fn resolve(&self, content: &str, file_path: &str) -> String {
        let context = ResolutionContext::new(file_path);
        self.expander().expand(content, context).await
    }

    fn expander(&self) -> Expander<'_> {
        Expander {
            source: self.source.as_ref(),
            base_dir: &self.base_dir,
            includes_dir: &self.includes_dir,
        }
    }
}

/// Expand include directives in `content` using the default includes directory.
///
/// See [`IncludeResolver::resolve`].
pub async fn resolve_includes(
    content: &str,
    file_path: &str,
    source: &dyn ContentSource,
) -> String {
    let expander = Expander {
        source,
        base_dir: "",
        includes_dir: DEFAULT_INCLUDES_DIR,
    };
    expander.expand(content, ResolutionContext::new(file_path)).await
}

/// Borrowed view of a resolver's configuration used during one expansion.
#[derive(Clone, Copy)]
struct Expander<'s> {
    source: &'s dyn ContentSource,
    base_dir: &'s str,
    includes_dir: &'s str,
}

/// An include tag waiting to be replaced.
struct PendingInclude {
    span: Range<usize>,
    src: String,
}

/// One text being expanded: a top-level file or a partial.
struct Frame {
    text: String,
    pending: std::vec::IntoIter<PendingInclude>,
    copied_to: usize,
    context: ResolutionContext,
    output: String,
}

impl Frame {
    fn new(text: String, context: ResolutionContext) -> Self {
        let pending: Vec<_> = include_directives(&text)
            .map(|directive| PendingInclude {
                span: directive.span,
                src: directive.src.to_string(),
            })
            .collect();
        Self {
            output: String::with_capacity(text.len()),
            pending: pending.into_iter(),
            copied_to: 0,
            text,
            context,
        }
    }

    /// Copy the text up to the next tag into the output and hand out that tag.
    fn next_include(&mut self) -> Option<PendingInclude> {
        let include = self.pending.next()?;
        self.output.push_str(&self.text[self.copied_to..include.span.start]);
        self.copied_to = include.span.end;
        Some(include)
    }

    fn finish(mut self) -> String {
        self.output.push_str(&self.text[self.copied_to..]);
        self.output
    }
}

impl Expander<'_> {
    fn include_path(&self, raw_path: &str) -> String {
        join_segments(&[self.includes_dir, raw_path])
    }

    /// Depth-first expansion on an explicit stack of frames. A fetched partial
    /// pushes a frame; a frame with no tags left is popped and spliced into
    /// its parent's output.
    async fn expand(&self, content: &str, context: ResolutionContext) -> String {
        let mut stack = vec![Frame::new(content.to_string(), context)];

        while let Some(frame) = stack.last_mut() {
            let Some(include) = frame.next_include() else {
                let expanded = stack.pop().map(Frame::finish).unwrap_or_default();
                match stack.last_mut() {
                    Some(parent) => parent.output.push_str(&expanded),
                    None => return expanded,
                }
                continue;
            };

            let include_path = self.include_path(&include.src);
            if frame.context.contains(&include_path) {
                tracing::debug!(
                    "Include cycle: '{}' is already being expanded at depth {}",
                    include_path,
                    frame.context.depth()
                );
                frame.output.push_str(&missing_include_marker(&include.src));
                continue;
            }

            let fetched = self.source.resolve(&[self.base_dir, include_path.as_str()]).await;
            let Some(partial) = fetched else {
                tracing::debug!("Missing include '{}' ({})", include.src, include_path);
                frame.output.push_str(&missing_include_marker(&include.src));
                continue;
            };

            let child = frame.context.descend(&include_path);
            stack.push(Frame::new(partial, child));
        }

        String::new()
    }
}
