//! Reference extraction for source files.
//!
//! This module finds the paths a source file depends on. It is deliberately
//! textual: each directive kind has its own independent scan, so matches are
//! found even when the surrounding markup is not well-formed.
//!
//! # Supported Reference Types
//!
//! - **Layouts**: a `layout` key in `---json` frontmatter, resolved under the
//!   layouts directory
//! - **Includes**: `<html-include src="top.html">`, resolved under the includes
//!   directory
//! - **Stylesheet imports**: `import "./_reset.css";` (also matched inside
//!   `@import "...";`), resolved next to the importing file
//!
//! Include tags and imports are scanned in every file regardless of its
//! extension; Markdown files may legitimately embed include tags. Paths must
//! be wrapped in matching single or double quotes.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sissi_core::markdown::reference_extractor::{extract_references, RootKind};
//!
//! let refs = extract_references("index.md", "<html-include src=\"top.html\">\n# Hello");
//! assert_eq!(refs.len(), 1);
//! assert_eq!(refs[0].root, RootKind::Include);
//! assert_eq!(refs[0].raw_path, "top.html");
//! ```

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

use super::frontmatter::parse_frontmatter;
use crate::config::SiteSettings;
use crate::utils::{join_segments, parent_dir};

static INCLUDE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<html-include[^>]*?\ssrc\s*=\s*(?:"([^"\n]*)"|'([^'\n]*)')[^>]*>"#)
        .expect("include pattern is a valid regex")
});

static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s+(?:"([^"\n]*)"|'([^'\n]*)')\s*;"#)
        .expect("import pattern is a valid regex")
});

/// The root a reference is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    /// Joined under the layouts directory.
    Layout,
    /// Joined under the includes directory.
    Include,
    /// Joined relative to the referencing file's own directory.
    SameDir,
}

/// A path a file depends on, as written in that file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceSpecifier {
    /// How `raw_path` is joined into a canonical path.
    pub root: RootKind,
    /// The path exactly as it appears in the source.
    pub raw_path: String,
}

impl ReferenceSpecifier {
    /// Create a new specifier.
    pub fn new(root: RootKind, raw_path: impl Into<String>) -> Self {
        Self {
            root,
            raw_path: raw_path.into(),
        }
    }

    /// Compute the canonical dependency path for this reference.
    ///
    /// # Arguments
    ///
    /// * `referencing_file` - Canonical path of the file containing the reference
    /// * `settings` - Supplies the layouts and includes directory names
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use sissi_core::config::SiteSettings;
    /// use sissi_core::markdown::reference_extractor::{ReferenceSpecifier, RootKind};
    ///
    /// let settings = SiteSettings::default();
    /// let import = ReferenceSpecifier::new(RootKind::SameDir, "./_reset.css");
    /// assert_eq!(import.canonical_path("css/site.css", &settings), "css/_reset.css");
    ///
    /// let layout = ReferenceSpecifier::new(RootKind::Layout, "base.html");
    /// assert_eq!(layout.canonical_path("blog/post.md", &settings), "_layouts/base.html");
    /// ```
    #[must_use]
    pub fn canonical_path(&self, referencing_file: &str, settings: &SiteSettings) -> String {
        let root = match self.root {
            RootKind::Layout => settings.layouts_dir.as_str(),
            RootKind::Include => settings.includes_dir.as_str(),
            RootKind::SameDir => parent_dir(referencing_file),
        };
        join_segments(&[root, self.raw_path.as_str()])
    }
}

/// One `<html-include>` tag found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective<'a> {
    /// Byte range of the whole tag, from `<` to `>`.
    pub span: Range<usize>,
    /// The `src` attribute value, without quotes.
    pub src: &'a str,
}

/// Find every include tag in `text`, left to right.
pub fn include_directives(text: &str) -> impl Iterator<Item = IncludeDirective<'_>> {
    INCLUDE_PATTERN.captures_iter(text).filter_map(|caps| {
        let tag = caps.get(0)?;
        Some(IncludeDirective {
            span: tag.range(),
            src: quoted_value(&caps)?,
        })
    })
}

/// Find every stylesheet import path in `text`, left to right.
pub fn import_paths(text: &str) -> impl Iterator<Item = &str> {
    IMPORT_PATTERN.captures_iter(text).filter_map(|caps| quoted_value(&caps))
}

/// Extract the references of one file, in order: the frontmatter layout,
/// then include tags, then stylesheet imports.
///
/// Malformed or absent frontmatter yields no layout reference; this never
/// fails. Empty paths are not references and are skipped.
///
/// # Arguments
///
/// * `file_path` - Path of the file, used for diagnostics only
/// * `content` - Raw file content, including any frontmatter header
#[must_use]
pub fn extract_references(file_path: &str, content: &str) -> Vec<ReferenceSpecifier> {
    let parsed = parse_frontmatter(content);
    let mut references = Vec::new();

    if let Some(layout) = parsed.data.as_ref().and_then(|data| data.layout()) {
        references.push(ReferenceSpecifier::new(RootKind::Layout, layout));
    }

    references.extend(
        include_directives(&parsed.body)
            .map(|directive| directive.src)
            .filter(|src| !src.is_empty())
            .map(|src| ReferenceSpecifier::new(RootKind::Include, src)),
    );

    references.extend(
        import_paths(&parsed.body)
            .filter(|path| !path.is_empty())
            .map(|path| ReferenceSpecifier::new(RootKind::SameDir, path)),
    );

    tracing::trace!("Extracted {} reference(s) from '{}'", references.len(), file_path);
    references
}

/// The value of whichever quote alternative matched.
fn quoted_value<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}
