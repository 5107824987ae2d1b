#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Resolves local `$ref` pointers against the document's registries.
//!
//! The trailing pointer segment names the target: `#/components/parameters/Limit`
//! names `Limit`, and `#/paths/~1users~1{id}` names the path `/users/{id}`. The
//! segment before it selects the registry.
//! Resolution never fails loudly; an unknown name resolves to `None` and the
//! caller decides on a fallback.

use crate::oas::document::{Document, Parameter, PathItem, RefOr};
use percent_encoding::percent_decode_str;
use std::collections::HashSet;

/// Decodes a JSON Pointer segment (handles `~1`, `~0` and percent-encoding).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Extracts the decoded trailing name of a reference.
///
/// e.g. `#/components/schemas/User` -> `User`
pub fn ref_name(ref_str: &str) -> String {
    let last = ref_str.rsplit('/').next().unwrap_or(ref_str);
    decode_pointer_segment(last)
}

/// Returns the registry segment preceding the name (`parameters`, `paths`, ...).
fn ref_kind(ref_str: &str) -> Option<&str> {
    let mut segments = ref_str.rsplit('/');
    segments.next()?;
    segments.next()
}

/// Resolves a parameter reference against `components.parameters`.
///
/// References into any other registry resolve to `None`.
pub fn resolve_parameter<'a>(doc: &'a Document, ref_str: &str) -> Option<&'a Parameter> {
    if ref_kind(ref_str) != Some("parameters") {
        return None;
    }
    doc.components
        .as_ref()?
        .parameters
        .get(ref_name(ref_str).as_str())
}

/// Resolves a path item reference, following chained references.
///
/// Targets may live under `paths` or `components.pathItems`. A cycle or a
/// missing target yields `None`.
pub fn resolve_path_item<'a>(doc: &'a Document, ref_str: &str) -> Option<&'a PathItem> {
    let mut visited = HashSet::new();
    let mut current = ref_str.to_string();

    loop {
        if !visited.insert(current.clone()) {
            return None;
        }
        let name = ref_name(&current);
        let target = match ref_kind(&current) {
            Some("pathItems") => doc.components.as_ref()?.path_items.get(name.as_str())?,
            _ => doc.paths.get(name.as_str())?,
        };
        match target {
            RefOr::Item(item) => return Some(item),
            RefOr::Ref(next) => current = next.ref_path.clone(),
        }
    }
}
