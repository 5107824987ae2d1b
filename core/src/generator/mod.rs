#![deny(missing_docs)]

//! # TypeScript Generators
//!
//! - **synth**: Schema to type expression.
//! - **schemas**, **params**, **endpoints**: One generator per module kind.
//! - **render**: Renderer and formatter seams supplied by the caller.
//! - **modules**: The composer tying the pipeline together.

pub mod endpoints;
pub mod modules;
pub mod params;
pub mod render;
pub mod schemas;
pub mod synth;

pub use endpoints::{build_descriptors, generate_endpoints, SiblingModules, BINARY_BODY_TYPE};
pub use modules::{generate_modules, ModuleKind, ModuleMap};
pub use params::generate_param_types;
pub use render::{EndpointDescriptor, EndpointRenderer, SourceFormatter, TidyFormatter};
pub use schemas::generate_schema_types;
pub use synth::TypeSynthesizer;
