#![deny(missing_docs)]

//! # Generate Command
//!
//! Implements the pipeline: config -> `before` hook -> document -> modules ->
//! output directory -> `after` hook.
//!
//! Every module is generated (and formatted) before the first file is touched,
//! so a failing renderer or formatter leaves the output directory as it was.

use crate::config::TypegenConfig;
use crate::error::{CliError, CliResult};
use crate::executor::{run_hook, CommandExecutor, CommandFormatter};
use crate::renderer::TemplateRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use typegen_core::{
    generate_modules, Document, EndpointRenderer, ModuleMap, SourceFormatter, TidyFormatter,
};
use walkdir::WalkDir;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Config file (defaults to `typegen.toml` when present).
    #[clap(long, short, env = "TYPEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// OpenAPI document; overrides `input-doc`.
    #[clap(long, short)]
    pub input: Option<PathBuf>,

    /// Output directory; overrides `output-dir`.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Print the modules that would be written; no hooks run and nothing is written.
    #[clap(long)]
    pub dry_run: bool,
}

/// Executes the generate command.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `executor` - Runs hooks and the configured formatter.
pub fn execute<E: CommandExecutor>(args: &GenerateArgs, executor: &E) -> CliResult<()> {
    let mut config = TypegenConfig::load(args.config.as_deref())?;
    if let Some(input) = &args.input {
        config.input_doc = Some(input.clone());
    }
    if let Some(output) = &args.output {
        config.output_dir = Some(output.clone());
    }

    if args.dry_run {
        let modules = compile(&config, executor)?;
        for (kind, text) in &modules {
            println!("{:<12} {:>8} bytes", kind.file_name(), text.len());
        }
        return Ok(());
    }

    let written = run(&config, executor)?;
    info!(modules = written.len(), "Generation completed");
    Ok(())
}

/// Runs hooks, generates every module and writes them to `output-dir`.
///
/// Returns the paths written, in module order.
pub fn run<E: CommandExecutor>(config: &TypegenConfig, executor: &E) -> CliResult<Vec<PathBuf>> {
    let output_dir = config
        .output_dir
        .as_deref()
        .ok_or_else(|| CliError::Config("No output directory configured (output-dir)".into()))?;

    if let Some(before) = &config.hooks.before {
        run_hook("before", before, executor)?;
    }

    let modules = compile(config, executor)?;
    if modules.is_empty() {
        warn!("The document declares no schemas or operations; nothing to write");
    }

    fs::create_dir_all(output_dir)?;
    if config.clean_output {
        clean_output_dir(output_dir)?;
    }
    let written = write_modules(&modules, output_dir)?;

    if let Some(after) = &config.hooks.after {
        run_hook("after", after, executor)?;
    }

    Ok(written)
}

/// Reads the input document and generates all modules in memory.
pub fn compile<E: CommandExecutor>(config: &TypegenConfig, executor: &E) -> CliResult<ModuleMap> {
    let input = config
        .input_doc
        .as_deref()
        .ok_or_else(|| CliError::Config("No input document configured (input-doc)".into()))?;

    info!(input = %input.display(), "Reading OpenAPI document");
    let content = fs::read_to_string(input)?;
    let doc = Document::from_yaml(&content)?;

    let renderer = config
        .endpoints
        .as_ref()
        .map(TemplateRenderer::new)
        .transpose()?;

    let command_formatter = config
        .formatter
        .clone()
        .map(|argv| CommandFormatter::new(argv, executor))
        .transpose()?;
    let formatter: &dyn SourceFormatter = match &command_formatter {
        Some(formatter) => formatter,
        None => &TidyFormatter,
    };

    let modules = generate_modules(
        &doc,
        &config.generator,
        renderer.as_ref().map(|r| r as &dyn EndpointRenderer),
        formatter,
    )?;
    Ok(modules)
}

/// Removes `*.ts` files directly inside `dir`.
fn clean_output_dir(dir: &Path) -> CliResult<()> {
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).into_iter();

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "ts") {
            info!(path = %path.display(), "Removing stale module");
            fs::remove_file(path)?;
        }
    }
    Ok(())
}

fn write_modules(modules: &ModuleMap, dir: &Path) -> CliResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(modules.len());
    for (kind, text) in modules {
        let path = dir.join(kind.file_name());
        fs::write(&path, text)?;
        info!(path = %path.display(), "Generated");
        written.push(path);
    }
    Ok(written)
}
