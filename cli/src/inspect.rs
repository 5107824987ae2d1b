#![deny(missing_docs)]

//! # Inspect Command
//!
//! Prints what the generators will see after preprocessing: one line per
//! operation, in the same path order the endpoints module uses.

use crate::config::TypegenConfig;
use crate::error::{CliError, CliResult};
use std::fs;
use std::path::PathBuf;
use typegen_core::oas::naming::params_type_name;
use typegen_core::oas::BodyContent;
use typegen_core::{preprocess, Document, ParameterLocation};

/// Arguments for the inspect command.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Config file (defaults to `typegen.toml` when present).
    #[clap(long, short, env = "TYPEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// OpenAPI document; overrides `input-doc`.
    #[clap(long, short)]
    pub input: Option<PathBuf>,
}

/// Executes the inspect command.
pub fn execute(args: &InspectArgs) -> CliResult<()> {
    let config = TypegenConfig::load(args.config.as_deref())?;
    let input = args
        .input
        .clone()
        .or(config.input_doc)
        .ok_or_else(|| CliError::Config("No input document configured (input-doc)".into()))?;

    let doc = Document::from_yaml(&fs::read_to_string(&input)?)?;
    for line in describe_operations(&doc) {
        println!("{}", line);
    }
    Ok(())
}

/// Describes every preprocessed operation, sorted by path.
pub fn describe_operations(raw_doc: &Document) -> Vec<String> {
    let doc = preprocess(raw_doc);
    let mut entries = doc.operations();
    entries.sort_by(|a, b| a.path.cmp(b.path));

    entries
        .iter()
        .map(|entry| {
            let op = entry.operation;
            let path_params = op.parameters_in(ParameterLocation::Path).len();
            let query_params = op.parameters_in(ParameterLocation::Query).len();
            let params_type = if query_params > 0 {
                params_type_name(entry.method.as_str(), entry.path)
            } else {
                "-".to_string()
            };
            let response = op
                .success_response()
                .is_some_and(|r| r.json_schema().is_some() || r.is_binary());

            format!(
                "{:<7} {} params={} path={} query={} body={} response={}",
                entry.method.as_str().to_uppercase(),
                entry.path,
                params_type,
                path_params,
                query_params,
                yes_no(op.request_body.is_some()),
                yes_no(response),
            )
        })
        .collect()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
