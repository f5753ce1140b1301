//! Dependency graph scenarios over a virtual file system.

use serde_json::json;
use sissi_core::resolver::build_dependency_graph;
use sissi_core::source::ContentSource;
use sissi_core::test_utils::{init_test_logging, virtual_fs, with_frontmatter};
use sissi_core::utils::join_segments;
use std::collections::HashMap;

async fn graph_json(files: &[(&str, &str)]) -> serde_json::Value {
    init_test_logging(None);
    let source = virtual_fs(files);
    let paths: Vec<&str> = files.iter().map(|(path, _)| *path).collect();
    let graph = build_dependency_graph("", &paths, &source).await;
    serde_json::to_value(&graph).unwrap()
}

#[tokio::test]
async fn test_maps_each_dependency_to_its_dependents() {
    let index =
        with_frontmatter("# {{ title }}", &json!({"title": "Hello", "layout": "base.html"}));
    let graph = graph_json(&[
        ("index.html", index.as_str()),
        ("_layouts/base.html", "<body>{{ content | safe }}</body>"),
    ])
    .await;

    assert_eq!(graph, json!({"_layouts/base.html": ["index.html"]}));
}

#[tokio::test]
async fn test_layouts_depending_on_layouts() {
    let index =
        with_frontmatter("# {{ title }}", &json!({"title": "Hello", "layout": "base.html"}));
    let article = with_frontmatter(
        "<article><h1>{{ title }}</h1>{{ content | safe }}</article>",
        &json!({"layout": "base.html"}),
    );
    let graph = graph_json(&[
        ("index.html", index.as_str()),
        ("_layouts/base.html", "<body>{{ content | safe }}</body>"),
        ("_layouts/article.html", article.as_str()),
    ])
    .await;

    assert_eq!(graph, json!({"_layouts/base.html": ["index.html", "_layouts/article.html"]}));
}

#[tokio::test]
async fn test_css_dependencies() {
    let graph = graph_json(&[
        ("styles.css", "import \"./_reset.css\";"),
        ("_reset.css", "*{box-sizing:border-box;margin:0}\n"),
    ])
    .await;

    assert_eq!(graph, json!({"_reset.css": ["styles.css"]}));
}

#[tokio::test]
async fn test_html_dependencies() {
    let graph = graph_json(&[
        ("index.html", "<html-include src=\"top.html\">"),
        ("_includes/top.html", "<header>header</header>\n"),
    ])
    .await;

    assert_eq!(graph, json!({"_includes/top.html": ["index.html"]}));
}

#[tokio::test]
async fn test_html_includes_in_markdown() {
    let graph = graph_json(&[
        ("index.md", "<html-include src=\"top.html\">"),
        ("_includes/top.html", "<header>header</header>\n"),
    ])
    .await;

    assert_eq!(graph, json!({"_includes/top.html": ["index.md"]}));
}

#[tokio::test]
async fn test_nested_includes_and_mixed_kinds() {
    let page = with_frontmatter(
        "<html-include src=\"hero.html\">\n<html-include src=\"hero.html\">",
        &json!({"layout": "page.html"}),
    );
    let graph = graph_json(&[
        ("about.md", page.as_str()),
        ("_includes/hero.html", "<section><html-include src=\"button.html\"></section>"),
        ("_includes/button.html", "<button></button>"),
        ("_layouts/page.html", "<html-include src=\"hero.html\">{{ content }}"),
        ("css/site.css", "@import \"../_reset.css\";\n@import \"grid.css\";"),
    ])
    .await;

    assert_eq!(
        graph,
        json!({
            "_layouts/page.html": ["about.md"],
            "_includes/hero.html": ["about.md", "_layouts/page.html"],
            "_includes/button.html": ["_includes/hero.html"],
            "_reset.css": ["css/site.css"],
            "css/grid.css": ["css/site.css"],
        })
    );
}

#[tokio::test]
async fn test_closure_resolver_like_a_path_join() {
    let files: HashMap<String, String> = HashMap::from([
        ("src/index.html".to_string(), "<html-include src=\"top.html\">".to_string()),
        ("src/blog/post.md".to_string(), "<html-include src=\"top.html\">".to_string()),
    ]);
    let resolve = move |segments: &[&str]| files.get(&join_segments(segments)).cloned();
    assert!(resolve.resolve(&["src", "blog", "../index.html"]).await.is_some());

    let files = ["blog/post.md", "index.html", "ghost.html"];
    let graph = build_dependency_graph("src", &files, &resolve).await;
    assert_eq!(graph.dependents("_includes/top.html"), ["blog/post.md", "index.html"]);
    assert_eq!(graph.len(), 1);
}

#[tokio::test]
async fn test_graph_serializes_in_insertion_order() {
    let source = virtual_fs(&[
        ("z.html", "<html-include src=\"z.html\">"),
        ("a.html", "<html-include src=\"a.html\">"),
    ]);
    let graph = build_dependency_graph("", &["z.html", "a.html"], &source).await;

    let json = graph.to_json().unwrap();
    let z = json.find("_includes/z.html").unwrap();
    let a = json.find("_includes/a.html").unwrap();
    assert!(z < a);
}
