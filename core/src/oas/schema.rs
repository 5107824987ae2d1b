#![deny(missing_docs)]

//! # Schema Model
//!
//! Schema Objects are deserialized once into a tagged [`Schema`] value so that type
//! synthesis is a plain exhaustive `match` instead of repeated key lookups.
//!
//! The raw OpenAPI shape is read into a private `RawSchema` and converted with
//! the following precedence: `nullable` wraps everything, then `$ref`, `oneOf`,
//! `allOf`, `anyOf`, and finally the `type` tag.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Number, Value};

/// A schema node reduced to exactly one recognized form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSchema")]
pub enum Schema {
    /// The wrapped schema, or `null`.
    Nullable(Box<Schema>),
    /// A `$ref` pointer, kept verbatim.
    Reference(String),
    /// Exactly one of the alternatives (`oneOf`, and `anyOf`).
    OneOf(Vec<Schema>),
    /// All of the members at once (`allOf`).
    AllOf(Vec<Schema>),
    /// A scalar type without enumerated values.
    Primitive {
        /// The scalar kind.
        ty: PrimitiveType,
        /// The `format` hint (e.g. `binary`, `date-time`).
        format: Option<String>,
    },
    /// A scalar restricted to the listed values, in declaration order.
    Enum(Vec<EnumLiteral>),
    /// A string-keyed map (`additionalProperties`); `None` accepts any value.
    Map(Option<Box<Schema>>),
    /// A fixed set of named properties, in declaration order.
    Object(Vec<Property>),
    /// A list; `None` when `items` is not declared.
    Array(Option<Box<Schema>>),
    /// No recognized composition keyword or `type` tag.
    Unknown,
}

/// Scalar `type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// `null`
    Null,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `integer`
    Integer,
    /// `string`
    String,
}

/// One enumerated value of an `enum` schema.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumLiteral {
    /// A string value (every value of a `string` enum lands here).
    String(String),
    /// A numeric value.
    Number(Number),
    /// A boolean value.
    Bool(bool),
    /// The `null` value.
    Null,
}

/// A named property of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property key as written in the document.
    pub name: String,
    /// The property schema.
    pub schema: Schema,
    /// Whether the property schema carries `deprecated: true`.
    pub deprecated: bool,
}

impl Schema {
    /// Returns true for a `string` schema with `format: binary`.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Schema::Primitive {
                ty: PrimitiveType::String,
                format: Some(format),
            } if format == "binary"
        )
    }

    /// Returns the schema wrapped as nullable unless it already is.
    pub fn into_nullable(self) -> Schema {
        match self {
            Schema::Nullable(_) => self,
            other => Schema::Nullable(Box::new(other)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    #[serde(rename = "$ref")]
    ref_path: Option<String>,
    nullable: Option<bool>,
    deprecated: Option<bool>,
    one_of: Option<Vec<RawSchema>>,
    all_of: Option<Vec<RawSchema>>,
    any_of: Option<Vec<RawSchema>>,
    #[serde(rename = "type")]
    schema_type: Option<RawType>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<Value>>,
    format: Option<String>,
    properties: Option<IndexMap<String, RawSchema>>,
    additional_properties: Option<RawAdditionalProperties>,
    items: Option<Box<RawSchema>>,
}

/// `type` is a single name in OAS 3.0 and may be a list in OAS 3.1.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawType {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawAdditionalProperties {
    Bool(bool),
    Schema(Box<RawSchema>),
}

impl From<RawSchema> for Schema {
    fn from(mut raw: RawSchema) -> Self {
        let declared = match raw.schema_type.take() {
            None => Vec::new(),
            Some(RawType::Single(ty)) => vec![ty],
            Some(RawType::Multiple(types)) => types,
        };

        let mut types: Vec<String> = declared.iter().filter(|t| *t != "null").cloned().collect();
        let mut nullable = raw.nullable.unwrap_or(false);
        if types.is_empty() {
            if !declared.is_empty() {
                types.push("null".to_string());
            }
        } else if types.len() < declared.len() {
            nullable = true;
        }

        let form = raw.into_form(&types);
        if nullable {
            Schema::Nullable(Box::new(form))
        } else {
            form
        }
    }
}

impl RawSchema {
    fn into_form(mut self, types: &[String]) -> Schema {
        if let Some(reference) = self.ref_path.take() {
            return Schema::Reference(reference);
        }
        if let Some(alternatives) = self.one_of.take() {
            return Schema::OneOf(alternatives.into_iter().map(Schema::from).collect());
        }
        if let Some(members) = self.all_of.take() {
            return Schema::AllOf(members.into_iter().map(Schema::from).collect());
        }
        if let Some(alternatives) = self.any_of.take() {
            return Schema::OneOf(alternatives.into_iter().map(Schema::from).collect());
        }

        match types {
            [] => match self.enum_values {
                Some(values) => Schema::Enum(enum_literals(values, false)),
                None => Schema::Unknown,
            },
            [single] => self.typed_form(single),
            many => Schema::OneOf(
                many.iter()
                    .map(|ty| self.clone().typed_form(ty))
                    .collect(),
            ),
        }
    }

    fn typed_form(self, ty: &str) -> Schema {
        let primitive = match ty {
            "null" => Some(PrimitiveType::Null),
            "number" => Some(PrimitiveType::Number),
            "boolean" => Some(PrimitiveType::Boolean),
            "integer" => Some(PrimitiveType::Integer),
            "string" => Some(PrimitiveType::String),
            _ => None,
        };

        if let Some(primitive) = primitive {
            return match self.enum_values {
                Some(values) if primitive != PrimitiveType::Null => {
                    Schema::Enum(enum_literals(values, primitive == PrimitiveType::String))
                }
                _ => Schema::Primitive {
                    ty: primitive,
                    format: self.format,
                },
            };
        }

        match ty {
            "object" => match self.additional_properties {
                Some(RawAdditionalProperties::Schema(value)) => {
                    Schema::Map(Some(Box::new(Schema::from(*value))))
                }
                Some(RawAdditionalProperties::Bool(true)) => Schema::Map(None),
                _ => Schema::Object(
                    self.properties
                        .unwrap_or_default()
                        .into_iter()
                        .map(|(name, raw)| Property {
                            name,
                            deprecated: raw.deprecated.unwrap_or(false),
                            schema: Schema::from(raw),
                        })
                        .collect(),
                ),
            },
            "array" => Schema::Array(self.items.map(|items| Box::new(Schema::from(*items)))),
            _ => Schema::Unknown,
        }
    }
}

fn enum_literals(values: Vec<Value>, stringly: bool) -> Vec<EnumLiteral> {
    values
        .into_iter()
        .map(|value| match value {
            Value::String(s) => EnumLiteral::String(s),
            other if stringly => EnumLiteral::String(other.to_string()),
            Value::Number(n) => EnumLiteral::Number(n),
            Value::Bool(b) => EnumLiteral::Bool(b),
            Value::Null => EnumLiteral::Null,
            other => EnumLiteral::String(other.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Schema {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(
            parse(json!({ "type": "integer", "format": "int64" })),
            Schema::Primitive {
                ty: PrimitiveType::Integer,
                format: Some("int64".into())
            }
        );
        assert_eq!(
            parse(json!({ "type": "null" })),
            Schema::Primitive {
                ty: PrimitiveType::Null,
                format: None
            }
        );
    }

    #[test]
    fn test_nullable_wraps_reference() {
        let schema = parse(json!({ "$ref": "#/components/schemas/User", "nullable": true }));
        assert_eq!(
            schema,
            Schema::Nullable(Box::new(Schema::Reference(
                "#/components/schemas/User".into()
            )))
        );
    }

    #[test]
    fn test_composition_beats_type() {
        let schema = parse(json!({
            "type": "object",
            "oneOf": [{ "type": "string" }, { "type": "number" }]
        }));
        assert!(matches!(schema, Schema::OneOf(ref alts) if alts.len() == 2));
    }

    #[test]
    fn test_any_of_is_union() {
        let schema = parse(json!({ "anyOf": [{ "type": "string" }] }));
        assert!(matches!(schema, Schema::OneOf(_)));
    }

    #[test]
    fn test_type_array_with_null() {
        let schema = parse(json!({ "type": ["string", "null"] }));
        assert_eq!(
            schema,
            Schema::Nullable(Box::new(Schema::Primitive {
                ty: PrimitiveType::String,
                format: None
            }))
        );
    }

    #[test]
    fn test_type_array_without_null_is_union() {
        let schema = parse(json!({ "type": ["string", "integer"] }));
        match schema {
            Schema::OneOf(alts) => {
                assert_eq!(alts.len(), 2);
                assert!(matches!(
                    alts[1],
                    Schema::Primitive {
                        ty: PrimitiveType::Integer,
                        ..
                    }
                ));
            }
            other => panic!("Expected union, got {:?}", other),
        }
    }

    #[test]
    fn test_string_enum_keeps_order() {
        let schema = parse(json!({ "type": "string", "enum": ["b", "a", 3] }));
        assert_eq!(
            schema,
            Schema::Enum(vec![
                EnumLiteral::String("b".into()),
                EnumLiteral::String("a".into()),
                EnumLiteral::String("3".into()),
            ])
        );
    }

    #[test]
    fn test_integer_enum() {
        let schema = parse(json!({ "type": "integer", "enum": [1, 2] }));
        assert_eq!(
            schema,
            Schema::Enum(vec![
                EnumLiteral::Number(1.into()),
                EnumLiteral::Number(2.into())
            ])
        );
    }

    #[test]
    fn test_object_properties_and_deprecation() {
        let schema = parse(json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "legacy": { "type": "string", "deprecated": true }
            }
        }));
        match schema {
            Schema::Object(props) => {
                assert_eq!(props[0].name, "name");
                assert!(!props[0].deprecated);
                assert_eq!(props[1].name, "legacy");
                assert!(props[1].deprecated);
            }
            other => panic!("Expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_additional_properties_forms() {
        assert_eq!(
            parse(json!({ "type": "object", "additionalProperties": true })),
            Schema::Map(None)
        );
        assert!(matches!(
            parse(json!({ "type": "object", "additionalProperties": { "type": "number" } })),
            Schema::Map(Some(_))
        ));
        assert_eq!(
            parse(json!({ "type": "object", "additionalProperties": false })),
            Schema::Object(vec![])
        );
    }

    #[test]
    fn test_array_forms() {
        assert_eq!(parse(json!({ "type": "array" })), Schema::Array(None));
        assert!(matches!(
            parse(json!({ "type": "array", "items": { "type": "string" } })),
            Schema::Array(Some(_))
        ));
    }

    #[test]
    fn test_untyped_enum() {
        assert_eq!(
            parse(json!({ "enum": ["on", 1] })),
            Schema::Enum(vec![
                EnumLiteral::String("on".into()),
                EnumLiteral::Number(1.into())
            ])
        );
    }

    #[test]
    fn test_unknown_shapes() {
        assert_eq!(parse(json!({})), Schema::Unknown);
        assert_eq!(parse(json!({ "type": "file" })), Schema::Unknown);
    }

    #[test]
    fn test_binary_detection() {
        assert!(parse(json!({ "type": "string", "format": "binary" })).is_binary());
        assert!(!parse(json!({ "type": "string" })).is_binary());
    }

    #[test]
    fn test_into_nullable_does_not_double_wrap() {
        let schema = parse(json!({ "type": "string", "nullable": true }));
        assert_eq!(schema.clone().into_nullable(), schema);
    }
}
