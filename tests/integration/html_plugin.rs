//! HTML processor registered through a site config.

use sissi_core::config::SiteConfig;
use sissi_core::extensions::HtmlPlugin;
use sissi_core::source::MemorySource;
use sissi_core::test_utils::{init_test_logging, virtual_fs};
use std::sync::Arc;

fn site() -> MemorySource {
    virtual_fs(&[
        ("index.html", "<html-include src=\"header.html\">\n<html-include src=\"main.html\">"),
        ("_includes/header.html", "<header></header>"),
        ("_includes/main.html", "<main></main>"),
        ("_includes/nav.html", "<nav></nav>"),
        ("_includes/waterfall-header.html", "<header><html-include src=\"nav.html\"></header>"),
        (
            "waterfall.html",
            "<html><body><html-include src=\"waterfall-header.html\"></body></html>",
        ),
        ("cyclic.html", "<html-include src=\"cyclic1.html\">"),
        ("_includes/cyclic1.html", "<html-include src=\"cyclic2.html\">"),
        ("_includes/cyclic2.html", "<html-include src=\"cyclic3.html\">"),
        ("_includes/cyclic3.html", "<html-include src=\"cyclic1.html\">"),
    ])
}

fn config() -> SiteConfig {
    init_test_logging(None);
    let mut config = SiteConfig::new(Arc::new(site()));
    config.add_plugin(&HtmlPlugin);
    config
}

async fn render(config: &SiteConfig, file: &str) -> String {
    let vfs = site();
    let content = vfs.get(file).unwrap();
    let transform = config.extension("html").unwrap().compile(content, file).await;
    transform().await
}

#[test]
fn test_adds_the_html_processor() {
    let config = config();
    assert!(config.has_extension("html"));
    let html = config.extension("html").unwrap();
    assert_eq!(html.output_file_extension(), "html");
}

#[tokio::test]
async fn test_bundles_html_includes() {
    let result = render(&config(), "index.html").await;
    assert_eq!(result, "<header></header>\n<main></main>");
}

#[tokio::test]
async fn test_waterfall_includes() {
    let result = render(&config(), "waterfall.html").await;
    assert_eq!(result, "<html><body><header><nav></nav></header></body></html>");
}

#[tokio::test]
async fn test_cyclic_includes_without_crashing() {
    let result = render(&config(), "cyclic.html").await;
    assert_eq!(result, "<!-- missing include: cyclic1.html -->");
}

#[tokio::test]
async fn test_long_cycle_terminates() {
    let mut files = MemorySource::new();
    let length = 5000;
    for i in 0..length {
        files.insert(
            format!("_includes/p{i}.html"),
            format!("[{i}]<html-include src=\"p{}.html\">", (i + 1) % length),
        );
    }
    let mut config = SiteConfig::new(Arc::new(files));
    config.add_plugin(&HtmlPlugin);

    let html = config.extension("html").unwrap();
    let transform = html.compile("<html-include src=\"p0.html\">", "long.html").await;
    let result = transform().await;

    assert!(result.starts_with("[0][1][2]"));
    assert!(result.ends_with("[4999]<!-- missing include: p0.html -->"));
    assert_eq!(result.matches('[').count(), length);
}

#[tokio::test]
async fn test_transforms_are_independent_and_can_run_concurrently() {
    let config = config();
    let html = config.extension("html").unwrap();

    let first = html.compile("<html-include src=\"waterfall-header.html\">", "a.html").await;
    let second = html
        .compile("<html-include src=\"nav.html\"><html-include src=\"nav.html\">", "b.html")
        .await;

    let (a, b) = tokio::join!(first(), second());
    assert_eq!(a, "<header><nav></nav></header>");
    assert_eq!(b, "<nav></nav><nav></nav>");

    let spawned = tokio::spawn(first()).await.unwrap();
    assert_eq!(spawned, a);
}
