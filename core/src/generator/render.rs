#![deny(missing_docs)]

//! # Rendering Seams
//!
//! The endpoint module is rendered by a caller-supplied [`EndpointRenderer`], and
//! every module body goes through a [`SourceFormatter`] before the header is
//! attached. The core never inspects what either returns.

use crate::error::AppResult;
use serde::Serialize;

/// Everything a renderer needs to emit one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// Lowercase HTTP method, e.g. `get`.
    pub method: String,
    /// The raw path template, e.g. `/items/{id}`.
    pub path: String,
    /// The operation id, when declared.
    pub operation_id: Option<String>,
    /// Path literal type, e.g. `` `/items/${number}` `` or `'/items'`.
    pub path_type: String,
    /// Query parameter type reference (`p.GetItemsParams`) or `{}`.
    pub params_type: String,
    /// At least one query parameter exists.
    pub params_expected: bool,
    /// At least one query parameter is required.
    pub params_required: bool,
    /// Request body type.
    pub request_type: String,
    /// Success (`200`) response body type.
    pub response_type: String,
    /// A request body is declared.
    pub body_expected: bool,
    /// The `200` response carries a typed body.
    pub body_returned: bool,
}

/// Turns endpoint descriptors into source text.
pub trait EndpointRenderer {
    /// Renders a single endpoint fragment.
    fn render_endpoint(&self, endpoint: &EndpointDescriptor) -> AppResult<String>;

    /// Wraps the newline-joined fragments into a complete module body.
    fn render_module(&self, content: &str) -> AppResult<String>;
}

/// Canonicalizes generated source text.
pub trait SourceFormatter {
    /// Returns `source` formatted; must not change its meaning.
    fn format(&self, source: &str) -> AppResult<String>;
}

/// Whitespace-only formatter.
///
/// Strips trailing whitespace, collapses runs of blank lines into one, drops
/// leading blank lines and ends the text with exactly one newline. Lines that
/// start or end inside a multi-line template literal are copied verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct TidyFormatter;

impl SourceFormatter for TidyFormatter {
    fn format(&self, source: &str) -> AppResult<String> {
        let mut out = String::with_capacity(source.len() + 1);
        let mut pending_blank = false;
        let mut in_template = false;

        for raw in source.lines() {
            let starts_inside = in_template;
            in_template ^= template_delimiters(raw) % 2 == 1;

            let line = if starts_inside || in_template {
                raw
            } else {
                raw.trim_end()
            };
            if line.is_empty() && !starts_inside {
                pending_blank = !out.is_empty();
                continue;
            }
            if pending_blank {
                out.push('\n');
                pending_blank = false;
            }
            out.push_str(line);
            out.push('\n');
        }

        Ok(out)
    }
}

/// Counts unescaped backticks in a line.
fn template_delimiters(line: &str) -> usize {
    let mut count = 0;
    let mut escaped = false;
    for c in line.chars() {
        if c == '`' && !escaped {
            count += 1;
        }
        escaped = c == '\\' && !escaped;
    }
    count
}
