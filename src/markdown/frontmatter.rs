//! JSON frontmatter parsing with a raw gray_matter engine.
//!
//! A source file may start with a metadata header:
//!
//! ```text
//! ---json
//! {"title": "Hello", "layout": "base.html"}
//! ---
//! # {{ title }}
//! ```
//!
//! The header opens with a `---json` line and closes with the next `---` line;
//! everything in between is parsed as a JSON object. Only the `layout` key
//! means anything to this crate, the remaining keys are kept as opaque data for
//! whoever renders the file.
//!
//! gray_matter only finds the fences. Its engine hands back the header text
//! untouched and the JSON is parsed here, so parsing never fails: a header that
//! is not valid JSON, or not a JSON object, is reported as
//! [`ParsedFrontmatter::data`] = `None` while the body is still split off and
//! the rest of the file can be scanned.

use gray_matter::{Matter, Pod, engine::Engine};
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::constants::{FRONTMATTER_CLOSE, FRONTMATTER_JSON_OPEN};

/// gray_matter engine that returns the header text without parsing it.
struct RawFrontmatter;

impl Engine for RawFrontmatter {
    fn parse(content: &str) -> Result<Pod, gray_matter::Error> {
        Ok(Pod::String(content.to_string()))
    }
}

static JSON_MATTER: LazyLock<Matter<RawFrontmatter>> = LazyLock::new(|| {
    let mut matter = Matter::new();
    matter.delimiter = FRONTMATTER_JSON_OPEN.to_string();
    matter.close_delimiter = Some(FRONTMATTER_CLOSE.to_string());
    matter
});

/// Parsed frontmatter data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: Map<String, Value>,
}

impl Frontmatter {
    /// The `layout` value, when present and a string.
    #[must_use]
    pub fn layout(&self) -> Option<&str> {
        self.fields.get("layout").and_then(Value::as_str)
    }

    /// Look up any other key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All keys in the order they were written.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Result of splitting a file into header and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFrontmatter {
    /// The parsed header, if one was present and valid.
    pub data: Option<Frontmatter>,
    /// The content with the header removed (the whole content when there is none).
    pub body: String,
    /// The raw header text between the delimiters, trimmed.
    pub raw_frontmatter: Option<String>,
}

impl ParsedFrontmatter {
    /// Check if a header was present in the content.
    #[must_use]
    pub fn has_frontmatter(&self) -> bool {
        self.raw_frontmatter.is_some()
    }

    fn without_header(content: &str) -> Self {
        Self {
            data: None,
            body: content.to_string(),
            raw_frontmatter: None,
        }
    }
}

/// Split `content` into header and body, parsing the header as JSON.
///
/// Content without a closed `---json` header, or with an empty one, is returned
/// unchanged as the body.
///
/// # Examples
///
/// ```rust,no_run
/// use sissi_core::markdown::frontmatter::parse_frontmatter;
///
/// let parsed = parse_frontmatter("---json\n{\"layout\":\"base.html\"}\n---\n# Hi");
/// assert_eq!(parsed.data.unwrap().layout(), Some("base.html"));
/// assert_eq!(parsed.body, "# Hi");
/// ```
#[must_use]
pub fn parse_frontmatter(content: &str) -> ParsedFrontmatter {
    let entity = match JSON_MATTER.parse::<String>(content) {
        Ok(entity) => entity,
        Err(e) => {
            tracing::debug!("Failed to split frontmatter: {}", e);
            return ParsedFrontmatter::without_header(content);
        }
    };

    // The engine only runs on a closed, non-empty header
    let Some(raw) = entity.data else {
        return ParsedFrontmatter::without_header(content);
    };

    let data = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(fields)) => Some(Frontmatter { fields }),
        Ok(other) => {
            tracing::debug!("Ignoring frontmatter that is not a JSON object: {}", other);
            None
        }
        Err(e) => {
            tracing::debug!("Ignoring unparsable JSON frontmatter: {}", e);
            None
        }
    };

    ParsedFrontmatter {
        data,
        body: entity.content,
        raw_frontmatter: Some(raw),
    }
}
