#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving TypeScript-safe names from HTTP methods, path
//! templates and parameter names.

use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid regex constant"));

static CAMEL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(?:[A-Z][a-z]*)*").expect("Invalid regex constant"));

/// Upper-cases the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the query-parameter type name for an operation.
///
/// e.g. `get /users/{id}/posts` -> `GetUsersIdPostsParams`
pub fn params_type_name(method: &str, path: &str) -> String {
    let camel_path: String = NON_WORD.split(path).map(capitalize).collect();
    format!("{}{}Params", capitalize(method), camel_path)
}

/// Turns a raw query parameter name into a property key.
///
/// The leading camelCase run is used as a bare identifier (`pageSize[gt]` ->
/// `pageSize`); names that do not start with one are emitted as a quoted key.
pub fn sanitize_param_name(name: &str) -> String {
    match CAMEL_PREFIX.find(name) {
        Some(m) => m.as_str().to_string(),
        None => format!("'{}'", escape_single_quoted(name)),
    }
}

/// Escapes a value for use inside a single-quoted TypeScript string.
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Quotes a property key unless it is already a valid identifier.
pub fn quote_property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", escape_single_quoted(name))
    }
}

/// Whether `name` is a plain ASCII identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("get"), "Get");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Already"), "Already");
    }

    #[test]
    fn test_params_type_name() {
        assert_eq!(params_type_name("get", "/items"), "GetItemsParams");
        assert_eq!(params_type_name("get", "/items/{id}"), "GetItemsIdParams");
        assert_eq!(
            params_type_name("post", "/users/{userId}/pet-photos"),
            "PostUsersUserIdPetPhotosParams"
        );
        assert_eq!(params_type_name("get", "/"), "GetParams");
    }

    #[test]
    fn test_sanitize_param_name() {
        assert_eq!(sanitize_param_name("page"), "page");
        assert_eq!(sanitize_param_name("pageSize"), "pageSize");
        assert_eq!(sanitize_param_name("filter[status]"), "filter");
        assert_eq!(sanitize_param_name("X-Rate"), "'X-Rate'");
        assert_eq!(sanitize_param_name("_private"), "'_private'");
    }

    #[test]
    fn test_quote_property_key() {
        assert_eq!(quote_property_key("id"), "id");
        assert_eq!(quote_property_key("$meta"), "$meta");
        assert_eq!(quote_property_key("content-type"), "'content-type'");
        assert_eq!(quote_property_key("it's"), "'it\\'s'");
        assert_eq!(quote_property_key("1st"), "'1st'");
    }
}
