//! Global constants used throughout the sissi codebase.
//!
//! Directory names, file names and marker formats that several modules need
//! to agree on are defined here so they stay discoverable in one place.

/// Default directory (relative to the input root) that holds layout files.
///
/// A `layout` key in a file's frontmatter is always resolved under this
/// directory, regardless of where the referencing file lives.
pub const DEFAULT_LAYOUTS_DIR: &str = "_layouts";

/// Default directory (relative to the input root) that holds include partials.
///
/// Includes form a flat root: a nested partial that includes another partial
/// still resolves the path against this directory, not its own location.
pub const DEFAULT_INCLUDES_DIR: &str = "_includes";

/// Default input directory used when no settings file overrides it.
pub const DEFAULT_INPUT_DIR: &str = ".";

/// Name of the optional settings file looked up in the project root.
pub const SETTINGS_FILE_NAME: &str = "sissi.toml";

/// Opening line of a JSON frontmatter header.
pub const FRONTMATTER_JSON_OPEN: &str = "---json";

/// Closing line of a frontmatter header.
pub const FRONTMATTER_CLOSE: &str = "---";

/// Builds the placeholder substituted for an include that cannot be expanded.
///
/// `raw_path` is the `src` value exactly as written in the tag, never the
/// canonicalized path.
#[must_use]
pub fn missing_include_marker(raw_path: &str) -> String {
    format!("<!-- missing include: {raw_path} -->")
}
