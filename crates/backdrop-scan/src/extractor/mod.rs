//! Textual metadata extraction for component sources
//!
//! The scan is pattern based and single pass. It does not understand the
//! component language, so an `import ... from "pkg"` inside a comment or a
//! string literal still counts as a dependency. Committed manifests depend on
//! this exact behavior.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// `import <bindings> from '<path>'`; `.` never crosses a line break
static IMPORT_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r#"(?R)import\s+.*?\s+from\s+['"]([^'"]+)['"]"#).ok());

/// A `/** ... */` block whose body is a single `* text` line
static DOC_BLOCK_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?R)/\*\*\s*\n\s*\*\s*(.+?)\s*\n\s*\*/").ok());

/// First line that starts with `//`
static LINE_COMMENT_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?mR)^//\s*(.+)").ok());

/// Metadata derived from one component's source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMetadata {
    /// Non-relative import paths, in first-seen order
    pub dependencies: Vec<String>,
    pub description: String,
}

/// Extract dependencies and description for a component
pub fn extract_metadata(content: &str, short_name: &str) -> ComponentMetadata {
    ComponentMetadata {
        dependencies: extract_dependencies(content),
        description: extract_description(content, short_name),
    }
}

/// Collect the import paths that are neither relative (`.`) nor absolute (`/`).
///
/// Paths are kept verbatim, de-duplicated, in order of first occurrence.
pub fn extract_dependencies(content: &str) -> Vec<String> {
    let Some(import_re) = IMPORT_RE.as_ref() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut dependencies = Vec::new();

    for cap in import_re.captures_iter(content) {
        let Some(path) = cap.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if is_local_import(path) {
            continue;
        }
        if seen.insert(path) {
            dependencies.push(path.to_string());
        }
    }

    debug!("Extracted {} dependencies", dependencies.len());
    dependencies
}

fn is_local_import(path: &str) -> bool {
    path.starts_with('.') || path.starts_with('/')
}

/// Pick a description, first match wins:
/// 1. the single line of a leading-style `/** ... */` block
/// 2. the first line comment (`// text`)
/// 3. `"<ShortName> background component"`
pub fn extract_description(content: &str, short_name: &str) -> String {
    if let Some(text) = first_capture(&DOC_BLOCK_RE, content) {
        return text.to_string();
    }

    if let Some(text) = first_capture(&LINE_COMMENT_RE, content) {
        return text.to_string();
    }

    default_description(short_name)
}

/// Description used when the source has no usable comment
pub fn default_description(short_name: &str) -> String {
    format!("{} background component", short_name)
}

fn first_capture<'a>(re: &Option<Regex>, content: &'a str) -> Option<&'a str> {
    re.as_ref()?
        .captures(content)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}
