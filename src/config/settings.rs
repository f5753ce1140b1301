//! Site settings loaded from `sissi.toml`.
//!
//! # Settings File Format
//!
//! ```toml
//! input_dir = "src"
//! layouts_dir = "_layouts"
//! includes_dir = "_includes"
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::constants::{
    DEFAULT_INCLUDES_DIR, DEFAULT_INPUT_DIR, DEFAULT_LAYOUTS_DIR, SETTINGS_FILE_NAME,
};
use crate::core::SissiError;

/// Directory layout of a site.
///
/// All directories are forward-slash paths. `layouts_dir` and `includes_dir`
/// are relative to `input_dir`; `input_dir` is passed as the base directory
/// to the content source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Root directory of the source files.
    pub input_dir: String,

    /// Directory holding layouts referenced from frontmatter.
    pub layouts_dir: String,

    /// Flat directory holding include partials.
    pub includes_dir: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            input_dir: DEFAULT_INPUT_DIR.to_string(),
            layouts_dir: DEFAULT_LAYOUTS_DIR.to_string(),
            includes_dir: DEFAULT_INCLUDES_DIR.to_string(),
        }
    }
}

impl SiteSettings {
    /// Load settings from a specific file.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use sissi_core::config::SiteSettings;
    /// use std::path::Path;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let settings = SiteSettings::load_from(Path::new("site/sissi.toml")).await?;
    /// println!("includes live in {}", settings.includes_dir);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist ([`SissiError::ConfigNotFound`])
    /// - The file cannot be read
    /// - The file contains invalid TOML ([`SissiError::ConfigParse`])
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !fs::try_exists(path).await.unwrap_or(false) {
            return Err(SissiError::ConfigNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: Self = toml::from_str(&content).map_err(|e| SissiError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })?;

        tracing::debug!(
            "Loaded settings from {}: input_dir={}, layouts_dir={}, includes_dir={}",
            path.display(),
            settings.input_dir,
            settings.layouts_dir,
            settings.includes_dir
        );
        Ok(settings)
    }

    /// Load `sissi.toml` from `project_dir`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_or_default(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(SETTINGS_FILE_NAME);
        if fs::try_exists(&path).await.unwrap_or(false) {
            Self::load_from(&path).await
        } else {
            tracing::debug!(
                "No {} in {}, using defaults",
                SETTINGS_FILE_NAME,
                project_dir.display()
            );
            Ok(Self::default())
        }
    }
}
