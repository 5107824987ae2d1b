#![deny(missing_docs)]

//! # Type Synthesizer
//!
//! Turns a [`Schema`] into a TypeScript type expression.
//!
//! References always render by name and are never followed, so synthesis of a
//! self-referential schema graph terminates: the cycle is broken at the first
//! `$ref` edge, which is emitted as the named alias the schemas module declares.

use crate::config::FallbackType;
use crate::oas::naming::{escape_single_quoted, quote_property_key};
use crate::oas::ref_utils::ref_name;
use crate::oas::schema::{EnumLiteral, PrimitiveType, Property, Schema};

/// Converts schema nodes into type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypeSynthesizer<'a> {
    namespace: Option<&'a str>,
    fallback: FallbackType,
}

impl<'a> TypeSynthesizer<'a> {
    /// Creates a synthesizer emitting bare reference names.
    pub fn new(fallback: FallbackType) -> Self {
        Self {
            namespace: None,
            fallback,
        }
    }

    /// Qualifies every reference with `namespace` (e.g. `s.User`).
    pub fn with_namespace(mut self, namespace: &'a str) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Like [`Self::with_namespace`], but only when `namespace` is `Some`.
    pub fn with_optional_namespace(mut self, namespace: Option<&'a str>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Synthesizes the type expression for `schema`.
    pub fn synthesize(&self, schema: &Schema) -> String {
        match schema {
            Schema::Nullable(inner) => format!("({} | null)", self.synthesize(inner)),
            Schema::Reference(reference) => {
                let name = ref_name(reference);
                match self.namespace {
                    Some(ns) => format!("{}.{}", ns, name),
                    None => name,
                }
            }
            Schema::OneOf(alternatives) => self.join(alternatives, " | "),
            Schema::AllOf(members) => self.join(members, " & "),
            Schema::Primitive { ty, .. } => primitive_name(*ty).to_string(),
            Schema::Enum(values) => enum_union(values),
            Schema::Map(values) => {
                let value_type = match values {
                    Some(schema) => self.synthesize(schema),
                    None => "unknown".to_string(),
                };
                format!("Record<string, {}>", value_type)
            }
            Schema::Object(properties) => self.object_shape(properties),
            Schema::Array(Some(items)) => format!("{}[]", self.synthesize(items)),
            Schema::Array(None) => "unknown[]".to_string(),
            Schema::Unknown => self.fallback.as_ts().to_string(),
        }
    }

    fn join(&self, schemas: &[Schema], separator: &str) -> String {
        let parts: Vec<String> = schemas.iter().map(|s| self.synthesize(s)).collect();
        format!("({})", parts.join(separator))
    }

    fn object_shape(&self, properties: &[Property]) -> String {
        if properties.is_empty() {
            return "{}".to_string();
        }

        let mut sorted: Vec<&Property> = properties.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let members: Vec<String> = sorted
            .into_iter()
            .map(|property| {
                let marker = if property.deprecated {
                    "/** @deprecated */ "
                } else {
                    ""
                };
                format!(
                    "{}{}: {};",
                    marker,
                    quote_property_key(&property.name),
                    self.synthesize(&property.schema)
                )
            })
            .collect();

        format!("{{ {} }}", members.join(" "))
    }
}

fn primitive_name(ty: PrimitiveType) -> &'static str {
    match ty {
        PrimitiveType::Null => "null",
        PrimitiveType::Number | PrimitiveType::Integer => "number",
        PrimitiveType::Boolean => "boolean",
        PrimitiveType::String => "string",
    }
}

fn enum_union(values: &[EnumLiteral]) -> String {
    if values.is_empty() {
        return "never".to_string();
    }
    let literals: Vec<String> = values.iter().map(enum_literal).collect();
    format!("({})", literals.join(" | "))
}

fn enum_literal(value: &EnumLiteral) -> String {
    match value {
        EnumLiteral::String(s) => format!("'{}'", escape_single_quoted(s)),
        EnumLiteral::Number(n) => n.to_string(),
        EnumLiteral::Bool(b) => b.to_string(),
        EnumLiteral::Null => "null".to_string(),
    }
}
