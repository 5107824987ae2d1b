#![deny(missing_docs)]

//! # Endpoint Module Generator
//!
//! Builds one [`EndpointDescriptor`] per operation, ordered by path, and hands
//! them to the caller's [`EndpointRenderer`]. The generator itself only decides
//! the types; the emitted call signatures are entirely up to the renderer.

use crate::config::GeneratorConfig;
use crate::error::AppResult;
use crate::generator::modules::ModuleKind;
use crate::generator::render::{EndpointDescriptor, EndpointRenderer};
use crate::generator::synth::TypeSynthesizer;
use crate::oas::document::{BodyContent, Document, OperationEntry, ParameterLocation};
use crate::oas::naming::{escape_single_quoted, params_type_name};
use crate::oas::schema::Schema;
use std::collections::HashMap;

/// Type of a declared body that is raw `application/octet-stream` binary.
pub const BINARY_BODY_TYPE: &str = "Blob";

/// Which sibling modules were generated, and can therefore be imported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiblingModules {
    /// The schemas module exists.
    pub schemas: bool,
    /// The params module exists.
    pub params: bool,
}

/// Builds the descriptors of every operation, sorted by path.
///
/// Operations sharing a path keep method order.
pub fn build_descriptors(
    doc: &Document,
    config: &GeneratorConfig,
    siblings: SiblingModules,
) -> Vec<EndpointDescriptor> {
    let schemas_ns = siblings
        .schemas
        .then_some(config.namespaces.schemas.as_str());
    let synth = TypeSynthesizer::new(config.fallback_type).with_optional_namespace(schemas_ns);

    let mut entries = doc.operations();
    entries.sort_by(|a, b| a.path.cmp(b.path));

    entries
        .into_iter()
        .map(|entry| build_descriptor(&entry, config, &synth))
        .collect()
}

/// Generates the body of the endpoints module, or `None` when the document has
/// no operations.
///
/// # Arguments
///
/// * `doc` - The preprocessed document.
/// * `config` - Generator settings.
/// * `renderer` - Renders each descriptor and wraps the joined fragments.
/// * `siblings` - Which sibling modules to import.
pub fn generate_endpoints(
    doc: &Document,
    config: &GeneratorConfig,
    renderer: &dyn EndpointRenderer,
    siblings: SiblingModules,
) -> AppResult<Option<String>> {
    let descriptors = build_descriptors(doc, config, siblings);
    if descriptors.is_empty() {
        return Ok(None);
    }

    let fragments = descriptors
        .iter()
        .map(|descriptor| renderer.render_endpoint(descriptor))
        .collect::<AppResult<Vec<_>>>()?;
    let body = renderer.render_module(&fragments.join("\n"))?;

    let mut imports = Vec::new();
    if siblings.schemas {
        imports.push(ModuleKind::Schemas.namespace_import(&config.namespaces.schemas));
    }
    if siblings.params {
        imports.push(ModuleKind::Params.namespace_import(&config.namespaces.params));
    }

    if imports.is_empty() {
        Ok(Some(body))
    } else {
        Ok(Some(format!("{}\n\n{}", imports.join("\n"), body)))
    }
}

fn build_descriptor(
    entry: &OperationEntry<'_>,
    config: &GeneratorConfig,
    synth: &TypeSynthesizer<'_>,
) -> EndpointDescriptor {
    let operation = entry.operation;
    let method = entry.method.as_str();
    let query = operation.parameters_in(ParameterLocation::Query);

    let params_type = if query.is_empty() {
        "{}".to_string()
    } else {
        format!(
            "{}.{}",
            config.namespaces.params,
            params_type_name(method, entry.path)
        )
    };

    let request = operation.request_body.as_ref();
    let response = operation.success_response();

    EndpointDescriptor {
        method: method.to_string(),
        path: entry.path.to_string(),
        operation_id: operation.operation_id.clone(),
        path_type: path_type(entry, synth),
        params_type,
        params_expected: !query.is_empty(),
        params_required: query.iter().any(|param| param.required),
        request_type: body_type(request, synth),
        response_type: body_type(response, synth),
        body_expected: request.is_some(),
        body_returned: response.is_some_and(|r| r.json_schema().is_some() || r.is_binary()),
    }
}

/// `'/items'` without path parameters, `` `/items/${number}` `` with them.
///
/// A later declaration of the same path parameter name wins, so an
/// operation-level parameter overrides a shared one. A `{name}` segment without a
/// matching parameter becomes `never`.
fn path_type(entry: &OperationEntry<'_>, synth: &TypeSynthesizer<'_>) -> String {
    let mut types: HashMap<&str, String> = HashMap::new();
    for param in entry.operation.parameters_in(ParameterLocation::Path) {
        let schema = param.schema.clone().unwrap_or(Schema::Unknown);
        types.insert(param.name.as_str(), synth.synthesize(&schema));
    }

    let trimmed = entry.path.strip_prefix('/').unwrap_or(entry.path);
    if !trimmed.split('/').any(|segment| path_param_name(segment).is_some()) {
        return format!("'/{}'", escape_single_quoted(trimmed));
    }

    let segments: Vec<String> = trimmed
        .split('/')
        .map(|segment| match path_param_name(segment) {
            Some(name) => {
                let ty = types.get(name).map(String::as_str).unwrap_or("never");
                format!("${{{}}}", ty)
            }
            None => escape_template(segment),
        })
        .collect();

    format!("`/{}`", segments.join("/"))
}

fn path_param_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}

fn escape_template(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// `never` when absent, the JSON schema's type, `Blob` for binary content,
/// `unknown` otherwise.
fn body_type<B: BodyContent>(body: Option<&B>, synth: &TypeSynthesizer<'_>) -> String {
    let Some(body) = body else {
        return "never".to_string();
    };
    if let Some(schema) = body.json_schema() {
        synth.synthesize(schema)
    } else if body.is_binary() {
        BINARY_BODY_TYPE.to_string()
    } else {
        "unknown".to_string()
    }
}
