#![deny(missing_docs)]

//! # Generator Configuration
//!
//! Explicit settings threaded through every generator: the namespace alias used
//! for each sibling module, the type emitted for unrecognized schema shapes, and
//! the header prepended to every generated module.

use crate::error::{AppError, AppResult};
use crate::oas::naming::is_identifier;
use serde::{Deserialize, Serialize};

/// Header prepended to every generated module unless overridden.
pub const DEFAULT_MODULE_HEADER: &str =
    "/* This file has been automatically generated */\n/* eslint-disable */";

/// Aliases under which sibling modules are namespace-imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceAliases {
    /// Alias for the schemas module (`import * as s from './schemas'`).
    pub schemas: String,
    /// Alias for the params module (`import * as p from './params'`).
    pub params: String,
}

impl Default for NamespaceAliases {
    fn default() -> Self {
        Self {
            schemas: "s".to_string(),
            params: "p".to_string(),
        }
    }
}

/// Type emitted when a schema matches no recognized form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackType {
    /// The top type: any value is accepted.
    #[default]
    Unknown,
    /// The uninhabited type: no value is accepted.
    Never,
}

impl FallbackType {
    /// The TypeScript spelling of this type.
    pub fn as_ts(self) -> &'static str {
        match self {
            FallbackType::Unknown => "unknown",
            FallbackType::Never => "never",
        }
    }
}

/// Settings shared by the schema, params and endpoint generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Namespace aliases for cross-module references.
    pub namespaces: NamespaceAliases,
    /// Type used for unrecognized schema shapes.
    pub fallback_type: FallbackType,
    /// Comment block placed at the top of every module.
    pub module_header: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespaces: NamespaceAliases::default(),
            fallback_type: FallbackType::default(),
            module_header: DEFAULT_MODULE_HEADER.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Checks that both aliases are usable identifiers and do not collide.
    pub fn validate(&self) -> AppResult<()> {
        for alias in [&self.namespaces.schemas, &self.namespaces.params] {
            if !is_identifier(alias) {
                return Err(AppError::Config(format!(
                    "Namespace alias '{}' is not a valid identifier",
                    alias
                )));
            }
        }
        if self.namespaces.schemas == self.namespaces.params {
            return Err(AppError::Config(format!(
                "Namespace alias '{}' is used for both schemas and params",
                self.namespaces.schemas
            )));
        }
        Ok(())
    }
}
