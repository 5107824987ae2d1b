#![deny(missing_docs)]

//! # Parameter Module Generator
//!
//! One exported object type per operation that declares query parameters. An
//! optional parameter is both `?` and nullable, since absence and `null` mean
//! the same thing on the wire.

use crate::config::GeneratorConfig;
use crate::generator::modules::ModuleKind;
use crate::generator::synth::TypeSynthesizer;
use crate::oas::document::{Document, Parameter, ParameterLocation};
use crate::oas::naming::{params_type_name, sanitize_param_name};
use crate::oas::schema::Schema;

/// Generates the body of the params module, or `None` when no operation has
/// query parameters.
///
/// # Arguments
///
/// * `doc` - The preprocessed document.
/// * `config` - Generator settings.
/// * `schemas_generated` - Whether the schemas module exists; references are
///   namespace-qualified and the module is imported only in that case.
pub fn generate_param_types(
    doc: &Document,
    config: &GeneratorConfig,
    schemas_generated: bool,
) -> Option<String> {
    let schemas_ns = schemas_generated.then_some(config.namespaces.schemas.as_str());
    let synth = TypeSynthesizer::new(config.fallback_type).with_optional_namespace(schemas_ns);

    let mut aliases: Vec<(String, Vec<&Parameter>)> = doc
        .operations()
        .into_iter()
        .filter_map(|entry| {
            let query = entry.operation.parameters_in(ParameterLocation::Query);
            (!query.is_empty()).then(|| (params_type_name(entry.method.as_str(), entry.path), query))
        })
        .collect();

    if aliases.is_empty() {
        return None;
    }
    aliases.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut sections = Vec::with_capacity(aliases.len() + 1);
    if let Some(ns) = schemas_ns {
        sections.push(ModuleKind::Schemas.namespace_import(ns));
    }
    sections.extend(
        aliases
            .into_iter()
            .map(|(name, params)| type_alias(&name, &params, &synth)),
    );

    Some(sections.join("\n\n"))
}

fn type_alias(name: &str, params: &[&Parameter], synth: &TypeSynthesizer<'_>) -> String {
    let mut properties: Vec<(String, &Parameter)> = params
        .iter()
        .map(|param| (sanitize_param_name(&param.name), *param))
        .collect();
    properties.sort_by(|(a, _), (b, _)| a.cmp(b));

    let members: Vec<String> = properties
        .into_iter()
        .map(|(key, param)| property(&key, param, synth))
        .collect();

    format!("export type {} = {{ {} }};", name, members.join(" "))
}

fn property(key: &str, param: &Parameter, synth: &TypeSynthesizer<'_>) -> String {
    let schema = param.schema.clone().unwrap_or(Schema::Unknown);
    if param.required {
        format!("{}: {};", key, synth.synthesize(&schema))
    } else {
        format!("{}?: {};", key, synth.synthesize(&schema.into_nullable()))
    }
}
