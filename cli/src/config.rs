#![deny(missing_docs)]

//! # Configuration File
//!
//! `typegen.toml` describes where the document lives, where modules go, how
//! endpoints are rendered and which commands run around generation.
//!
//! ```toml
//! input-doc = "openapi.yaml"
//! output-dir = "src/api"
//! clean-output = true
//! formatter = ["npx", "prettier", "--parser", "typescript"]
//!
//! [generator]
//! fallback-type = "never"
//!
//! [endpoints]
//! module = "export interface Endpoints {\n{{ content }}\n}"
//!
//! [hooks]
//! after = ["npx", "eslint", "--fix", "src/api"]
//! ```

use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use typegen_core::GeneratorConfig;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "typegen.toml";

/// The parsed `typegen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TypegenConfig {
    /// The OpenAPI document (YAML or JSON).
    pub input_doc: Option<PathBuf>,
    /// Directory receiving `<module>.ts` files.
    pub output_dir: Option<PathBuf>,
    /// Remove stale `*.ts` files from the output directory before writing.
    pub clean_output: bool,
    /// Settings forwarded to the core generators.
    pub generator: GeneratorConfig,
    /// Endpoint rendering; no endpoints module is produced without it.
    pub endpoints: Option<EndpointsConfig>,
    /// Argv of a formatter reading source on stdin and writing it to stdout.
    pub formatter: Option<Vec<String>>,
    /// Commands run around generation.
    pub hooks: HooksConfig,
}

/// Tera templates used for the endpoints module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndpointsConfig {
    /// Template rendered once per endpoint descriptor.
    pub each: Option<String>,
    /// Template wrapping the joined endpoint fragments (`{{ content }}`).
    pub module: Option<String>,
}

/// Argv lists run before reading the document and after writing modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HooksConfig {
    /// Runs before the document is read.
    pub before: Option<Vec<String>>,
    /// Runs after every module was written.
    pub after: Option<Vec<String>>,
}

impl TypegenConfig {
    /// Parses a TOML config.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config: TypegenConfig = toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse config: {}", e)))?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Loads the config file.
    ///
    /// An explicitly given path must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if explicit {
                return Err(CliError::Config(format!(
                    "Config file not found: {:?}",
                    path
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
