#![deny(missing_docs)]

//! # Typegen Core
//!
//! Compiles an OpenAPI 3.x document into TypeScript type declarations.
//!
//! The pipeline is pure: a parsed [`Document`] goes through
//! the preprocessing pass, then the schema, params and endpoint generators, and
//! [`generate_modules`] returns the text of every module that has content.

/// Shared error types.
pub mod error;

/// Generator settings.
pub mod config;

/// OpenAPI document model, normalization and reference handling.
pub mod oas;

/// TypeScript module generators.
pub mod generator;

pub use config::{FallbackType, GeneratorConfig, NamespaceAliases, DEFAULT_MODULE_HEADER};
pub use error::{AppError, AppResult};
pub use generator::{
    generate_modules, EndpointDescriptor, EndpointRenderer, ModuleKind, ModuleMap,
    SourceFormatter, TidyFormatter, TypeSynthesizer,
};
pub use oas::{preprocess, Document, HttpMethod, ParameterLocation, Schema};
