//! Error handling for sissi
//!
//! The dependency graph builder and the include resolver never fail: unreadable
//! files, malformed frontmatter, missing and cyclic includes all degrade to an
//! absent edge or a visible placeholder. [`SissiError`] covers the failures that
//! can happen around that core, such as loading settings or looking up an
//! extension that was never registered.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sissi_core::core::SissiError;
//!
//! let error = SissiError::UnknownExtension { name: "njk".to_string() };
//! assert_eq!(error.to_string(), "No extension registered for 'njk'");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sissi operations
#[derive(Error, Debug)]
pub enum SissiError {
    /// Settings file was expected but does not exist
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// Path that was probed
        path: PathBuf,
    },

    /// Settings file exists but could not be parsed
    #[error("Invalid settings file syntax in {path}: {reason}")]
    ConfigParse {
        /// Path of the settings file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// A processor was requested for an extension nobody registered
    #[error("No extension registered for '{name}'")]
    UnknownExtension {
        /// Extension key, e.g. `html`
        name: String,
    },

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
