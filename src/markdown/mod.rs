//! Source file header parsing and reference extraction.
//!
//! - [`frontmatter`] - `---json` header detection and parsing
//! - [`reference_extractor`] - Layout, include and import reference extraction

pub mod frontmatter;
pub mod reference_extractor;

pub use frontmatter::{Frontmatter, ParsedFrontmatter, parse_frontmatter};
pub use reference_extractor::{
    IncludeDirective, ReferenceSpecifier, RootKind, extract_references, include_directives,
};
