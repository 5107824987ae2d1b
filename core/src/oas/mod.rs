#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: The typed document model and its YAML/JSON entry point.
//! - **schema**: The tagged Schema variant type.
//! - **normalization**: Dialect rewrites applied before typing.
//! - **ref_utils**: `$ref` pointer decoding and registry lookups.
//! - **preprocess**: Path item and parameter inlining.
//! - **naming**: Identifier helpers shared by the generators.

pub mod document;
pub mod naming;
pub(crate) mod normalization;
pub mod preprocess;
pub mod ref_utils;
pub mod schema;

pub use document::{
    BodyContent, Components, Document, HttpMethod, MediaType, Operation, OperationEntry,
    Parameter, ParameterLocation, PathItem, RefOr, Reference, RequestBody, Response,
};
pub use preprocess::preprocess;
pub use ref_utils::{ref_name, resolve_parameter, resolve_path_item};
pub use schema::{EnumLiteral, PrimitiveType, Property, Schema};
