#![deny(missing_docs)]

//! # Schema Module Generator
//!
//! One exported alias per named component schema, ordered by name.

use crate::config::GeneratorConfig;
use crate::generator::synth::TypeSynthesizer;
use crate::oas::document::Document;
use crate::oas::naming::is_identifier;
use tracing::warn;

/// Generates the body of the schemas module, or `None` when there are no
/// component schemas.
pub fn generate_schema_types(doc: &Document, config: &GeneratorConfig) -> Option<String> {
    let schemas = doc.schemas().filter(|schemas| !schemas.is_empty())?;
    let synth = TypeSynthesizer::new(config.fallback_type);

    let mut entries: Vec<_> = schemas.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let aliases: Vec<String> = entries
        .into_iter()
        .map(|(name, schema)| {
            if !is_identifier(name) {
                warn!(schema = %name, "Schema name is not a valid TypeScript identifier");
            }
            format!("export type {} = {};", name, synth.synthesize(schema))
        })
        .collect();

    Some(aliases.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aliases_sorted_by_name() {
        let doc = Document::from_yaml(
            r#"
components:
  schemas:
    User:
      type: object
      properties:
        pet:
          $ref: '#/components/schemas/Pet'
    Pet:
      type: string
      enum: [cat, dog]
"#,
        )
        .unwrap();

        let body = generate_schema_types(&doc, &GeneratorConfig::default()).unwrap();
        assert_eq!(
            body,
            "export type Pet = ('cat' | 'dog');\n\nexport type User = { pet: Pet; };"
        );
    }

    #[test]
    fn test_non_identifier_names_are_emitted_verbatim() {
        let doc = Document::from_yaml(
            r#"
components:
  schemas:
    my-schema:
      type: string
"#,
        )
        .unwrap();

        let body = generate_schema_types(&doc, &GeneratorConfig::default()).unwrap();
        assert_eq!(body, "export type my-schema = string;");
    }

    #[test]
    fn test_no_schemas_no_module() {
        let config = GeneratorConfig::default();
        let doc = Document::from_yaml("paths: {}").unwrap();
        assert!(generate_schema_types(&doc, &config).is_none());

        let doc = Document::from_yaml("components:\n  schemas: {}").unwrap();
        assert!(generate_schema_types(&doc, &config).is_none());
    }
}
