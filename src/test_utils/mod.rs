//! Test utilities for sissi
//!
//! Helpers shared by unit and integration tests: one-time logging setup and
//! small fixtures for building virtual file systems.
//!
//! # Example
//!
//! ```rust,no_run
//! use sissi_core::test_utils::{init_test_logging, virtual_fs, with_frontmatter};
//! use serde_json::json;
//!
//! init_test_logging(None);
//! let page = with_frontmatter("# Hi", &json!({"layout": "base.html"}));
//! let vfs = virtual_fs(&[("index.md", page.as_str())]);
//! assert!(vfs.get("index.md").is_some());
//! ```

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::source::MemorySource;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise the
/// `RUST_LOG` environment variable; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=sissi_core=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Prefix `body` with a `---json` frontmatter header holding `data`.
#[must_use]
pub fn with_frontmatter(body: &str, data: &serde_json::Value) -> String {
    format!("---json\n{data}\n---\n{body}")
}

/// Build an in-memory file system from `(path, content)` pairs.
#[must_use]
pub fn virtual_fs(files: &[(&str, &str)]) -> MemorySource {
    files.iter().copied().collect()
}
