//! Graph building and include expansion against a site on disk.

use anyhow::Result;
use sissi_core::config::{SiteConfig, SiteSettings};
use sissi_core::extensions::HtmlPlugin;
use sissi_core::source::FsSource;
use sissi_core::test_utils::init_test_logging;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

async fn write(root: &Path, path: &str, content: &str) -> Result<()> {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(full, content).await?;
    Ok(())
}

#[tokio::test]
async fn test_site_with_settings_file() -> Result<()> {
    init_test_logging(None);
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    write(root, "sissi.toml", "input_dir = \"content\"\nincludes_dir = \"partials\"\n").await?;
    write(root, "content/index.html", "<body><html-include src=\"top.html\"></body>").await?;
    write(root, "content/partials/top.html", "<header>header</header>\n").await?;
    write(
        root,
        "content/post.md",
        concat!(
            "---json\n{\"layout\":\"post.html\",\"title\":\"Post\"}\n---\n",
            "<html-include src=\"top.html\">",
        ),
    )
    .await?;
    write(root, "content/styles/main.css", "@import \"./reset.css\";").await?;

    let settings = SiteSettings::load_or_default(root).await?;
    assert_eq!(settings.input_dir, "content");

    let mut config = SiteConfig::with_settings(settings, Arc::new(FsSource::new(root)));
    config.add_plugin(&HtmlPlugin);

    let graph = config
        .dependency_graph(&["index.html", "post.md", "styles/main.css", "missing.html"])
        .await;
    assert_eq!(graph.dependents("partials/top.html"), ["index.html", "post.md"]);
    assert_eq!(graph.dependents("_layouts/post.html"), ["post.md"]);
    assert_eq!(graph.dependents("styles/reset.css"), ["styles/main.css"]);
    assert_eq!(graph.len(), 3);

    let index = fs::read_to_string(root.join("content/index.html")).await?;
    let transform = config.extension("html")?.compile(&index, "index.html").await;
    assert_eq!(transform().await, "<body><header>header</header>\n</body>");

    // Transforms re-read partials on every call
    write(root, "content/partials/top.html", "<header>changed</header>").await?;
    assert_eq!(transform().await, "<body><header>changed</header></body>");
    Ok(())
}
