#![deny(missing_docs)]

//! # OpenAPI Normalization
//!
//! Rewrites applied to the raw JSON document before it is deserialized into the
//! typed model. Each rewrite only touches fields that are known compatibility gaps
//! between OpenAPI dialects.
//!
//! Rewrites run on schema nodes only: component schemas, every `schema` field
//! and the schemas nested below them. Property names are user data and are never
//! read as keywords.

use serde_json::{Map, Value};

/// Keys whose values are lists of schema nodes.
const SCHEMA_LIST_KEYS: [&str; 3] = ["allOf", "anyOf", "oneOf"];

/// Keys holding example data rather than document structure.
const DATA_KEYS: [&str; 2] = ["example", "examples"];

/// Runs every schema rewrite over the document.
pub(crate) fn normalize_document(value: &mut Value) {
    let Value::Object(root) = value else {
        return;
    };

    for (key, v) in root.iter_mut() {
        if key != "components" {
            normalize_schema_fields(v);
            continue;
        }
        let Value::Object(components) = v else {
            continue;
        };
        for (kind, registry) in components.iter_mut() {
            match (kind.as_str(), registry) {
                ("schemas", Value::Object(schemas)) => {
                    for schema in schemas.values_mut() {
                        normalize_schema_node(schema);
                    }
                }
                (_, registry) => normalize_schema_fields(registry),
            }
        }
    }
}

/// Finds `schema` fields outside of schema nodes (parameters, media types).
fn normalize_schema_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                match key.as_str() {
                    "schema" => normalize_schema_node(v),
                    key if DATA_KEYS.contains(&key) => {}
                    _ => normalize_schema_fields(v),
                }
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                normalize_schema_fields(v);
            }
        }
        _ => {}
    }
}

/// Rewrites one schema node, then its subschemas.
pub(crate) fn normalize_schema_node(value: &mut Value) {
    match value {
        // OpenAPI 3.1 boolean schemas become an unconstrained schema.
        Value::Bool(_) => {
            *value = Value::Object(Map::new());
        }
        Value::Object(map) => {
            rewrite_nullable_flag(map);
            rewrite_const(map);

            if let Some(props) = map.get_mut("properties").and_then(Value::as_object_mut) {
                for v in props.values_mut() {
                    normalize_schema_node(v);
                }
            }
            if let Some(items) = map.get_mut("items") {
                normalize_schema_node(items);
            }
            for key in SCHEMA_LIST_KEYS {
                if let Some(list) = map.get_mut(key).and_then(Value::as_array_mut) {
                    for v in list.iter_mut() {
                        normalize_schema_node(v);
                    }
                }
            }
            // `additionalProperties: true|false` keeps its boolean meaning.
            if let Some(additional) = map.get_mut("additionalProperties") {
                if !additional.is_boolean() {
                    normalize_schema_node(additional);
                }
            }
        }
        _ => {}
    }
}

/// Swagger-style `x-nullable: true` becomes `nullable: true`.
fn rewrite_nullable_flag(schema: &mut Map<String, Value>) {
    if let Some(flag) = schema.remove("x-nullable") {
        if flag.as_bool() == Some(true) && !schema.contains_key("nullable") {
            schema.insert("nullable".to_string(), Value::Bool(true));
        }
    }
}

/// JSON Schema `const` becomes a single-value `enum`.
///
/// A missing `type` is inferred from the constant so the value still lands in a
/// literal union.
fn rewrite_const(schema: &mut Map<String, Value>) {
    let Some(const_val) = schema.remove("const") else {
        return;
    };
    if !schema.contains_key("type") {
        if let Some(type_name) = infer_schema_type(&const_val) {
            schema.insert("type".to_string(), Value::String(type_name.to_string()));
        }
    }
    if !schema.contains_key("enum") {
        schema.insert("enum".to_string(), Value::Array(vec![const_val]));
    }
}

fn infer_schema_type(value: &Value) -> Option<&'static str> {
    match value {
        Value::String(_) => Some("string"),
        Value::Bool(_) => Some("boolean"),
        Value::Number(num) if num.is_i64() || num.is_u64() => Some("integer"),
        Value::Number(_) => Some("number"),
        Value::Null => Some("null"),
        Value::Array(_) | Value::Object(_) => None,
    }
}
