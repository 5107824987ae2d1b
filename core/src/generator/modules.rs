#![deny(missing_docs)]

//! # Module Composer
//!
//! Runs the whole pipeline over a parsed document and decides which modules
//! exist. A module is present only when its generator produced a declaration;
//! the barrel is present exactly when any other module is.

use crate::config::GeneratorConfig;
use crate::error::AppResult;
use crate::generator::endpoints::{generate_endpoints, SiblingModules};
use crate::generator::params::generate_param_types;
use crate::generator::render::{EndpointRenderer, SourceFormatter};
use crate::generator::schemas::generate_schema_types;
use crate::oas::document::Document;
use crate::oas::preprocess::preprocess;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// The fixed set of generated modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleKind {
    /// One alias per component schema.
    Schemas,
    /// One object type per operation with query parameters.
    Params,
    /// Renderer output for every operation.
    Endpoints,
    /// Re-exports of every other module.
    Barrel,
}

impl ModuleKind {
    /// The module file stem, used for imports and file names.
    pub fn name(self) -> &'static str {
        match self {
            ModuleKind::Schemas => "schemas",
            ModuleKind::Params => "params",
            ModuleKind::Endpoints => "endpoints",
            ModuleKind::Barrel => "index",
        }
    }

    /// The output file name, e.g. `schemas.ts`.
    pub fn file_name(self) -> String {
        format!("{}.ts", self.name())
    }

    /// `import * as <alias> from './<name>';`
    pub fn namespace_import(self, alias: &str) -> String {
        format!("import * as {} from './{}';", alias, self.name())
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generated module texts keyed by kind.
pub type ModuleMap = BTreeMap<ModuleKind, String>;

/// Compiles `raw_doc` into its module map.
///
/// The document is preprocessed first and never mutated. Without a renderer no
/// endpoints module is produced. Any renderer or formatter failure aborts the
/// whole run.
///
/// # Arguments
///
/// * `raw_doc` - The parsed, unpreprocessed document.
/// * `config` - Generator settings; validated before anything is generated.
/// * `renderer` - Optional endpoint renderer.
/// * `formatter` - Applied to every module body before the header is attached.
pub fn generate_modules(
    raw_doc: &Document,
    config: &GeneratorConfig,
    renderer: Option<&dyn EndpointRenderer>,
    formatter: &dyn SourceFormatter,
) -> AppResult<ModuleMap> {
    config.validate()?;
    let doc = preprocess(raw_doc);
    let mut bodies: BTreeMap<ModuleKind, String> = BTreeMap::new();

    if let Some(body) = generate_schema_types(&doc, config) {
        bodies.insert(ModuleKind::Schemas, body);
    }

    let schemas_generated = bodies.contains_key(&ModuleKind::Schemas);
    if let Some(body) = generate_param_types(&doc, config, schemas_generated) {
        bodies.insert(ModuleKind::Params, body);
    }

    if let Some(renderer) = renderer {
        let siblings = SiblingModules {
            schemas: schemas_generated,
            params: bodies.contains_key(&ModuleKind::Params),
        };
        if let Some(body) = generate_endpoints(&doc, config, renderer, siblings)? {
            bodies.insert(ModuleKind::Endpoints, body);
        }
    }

    if !bodies.is_empty() {
        let barrel = barrel_body(bodies.keys().copied());
        bodies.insert(ModuleKind::Barrel, barrel);
    }

    let mut modules = ModuleMap::new();
    for (kind, body) in bodies {
        let formatted = formatter.format(&body)?;
        debug!(module = %kind, bytes = formatted.len(), "Generated module");
        modules.insert(kind, format!("{}\n\n{}", config.module_header, formatted));
    }

    Ok(modules)
}

fn barrel_body(kinds: impl Iterator<Item = ModuleKind>) -> String {
    let mut names: Vec<&str> = kinds.map(ModuleKind::name).collect();
    names.sort_unstable();
    names
        .into_iter()
        .map(|name| format!("export * from './{}';", name))
        .collect::<Vec<_>>()
        .join("\n")
}
