//! Path utilities for joining and normalizing content paths.
//!
//! Content paths in this crate are plain strings with forward-slash separators.
//! They are never touched on disk here; normalization is purely logical so the
//! same path always produces the same graph key on every platform.

/// Normalizes a path by resolving `.` and `..` components.
///
/// This function cleans up path components by:
/// - Treating both `/` and `\` as separators and emitting `/`
/// - Removing empty and `.` components
/// - Resolving `..` against the previous component
/// - Keeping leading `..` components of relative paths
/// - Maintaining the path's absolute or relative nature
///
/// # Examples
///
/// ```rust,no_run
/// use sissi_core::utils::paths::normalize_path;
///
/// assert_eq!(normalize_path("/foo/./bar/../baz"), "/foo/baz");
/// assert_eq!(normalize_path("./_reset.css"), "_reset.css");
/// assert_eq!(normalize_path("../shared/top.html"), "../shared/top.html");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with(['/', '\\']);
    let mut components: Vec<&str> = Vec::new();

    for component in path.split(['/', '\\']) {
        match component {
            "" | "." => {} // Skip empty and .
            ".." => match components.last() {
                Some(&last) if last != ".." => {
                    components.pop();
                }
                // Nothing above the root of an absolute path
                _ if absolute => {}
                _ => components.push(".."),
            },
            c => components.push(c),
        }
    }

    let joined = components.join("/");
    if absolute { format!("/{joined}") } else { joined }
}

/// Joins path segments the way a file-system path join would, then normalizes.
///
/// Empty segments are ignored, so an empty base directory behaves like no
/// base directory at all.
///
/// # Examples
///
/// ```rust,no_run
/// use sissi_core::utils::paths::join_segments;
///
/// assert_eq!(join_segments(&["", "index.html"]), "index.html");
/// assert_eq!(join_segments(&["_includes", "top.html"]), "_includes/top.html");
/// assert_eq!(join_segments(&["css", "../_reset.css"]), "_reset.css");
/// ```
#[must_use]
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    normalize_path(&joined)
}

/// Returns the directory part of a normalized path, or `""` for a top-level file.
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    path.rfind('/').map_or("", |idx| &path[..idx])
}

/// Checks that a normalized relative path stays inside its root.
///
/// Absolute paths and paths that climb above the root with `..` are rejected.
#[must_use]
pub fn is_contained(path: &str) -> bool {
    !path.starts_with('/') && path.split('/').next() != Some("..")
}
