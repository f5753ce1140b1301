//! Cross-cutting utilities.
//!
//! - [`paths`] - Forward-slash path joining, normalization and containment checks

pub mod paths;

pub use paths::{is_contained, join_segments, normalize_path, parent_dir};
