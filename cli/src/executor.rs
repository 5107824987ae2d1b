#![deny(missing_docs)]

//! # External Commands
//!
//! Hooks and the formatting pass shell out to user-configured programs. Command
//! execution sits behind [`CommandExecutor`] so tests never spawn processes.

use crate::error::{CliError, CliResult};
use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::thread;
use tracing::{debug, info};
use typegen_core::{AppError, AppResult, SourceFormatter};

/// Interface for executing external commands.
pub trait CommandExecutor {
    /// Runs `program` with `args`, feeding `stdin` when given, and returns the
    /// captured output.
    fn execute(&self, program: &str, args: &[String], stdin: Option<&str>) -> CliResult<Output>;
}

/// Standard executor using `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[String], stdin: Option<&str>) -> CliResult<Output> {
        let Some(input) = stdin else {
            return Ok(Command::new(program).args(args).output()?);
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Feed stdin from another thread; a large input would otherwise block
        // once the child fills its stdout pipe.
        let writer = child.stdin.take().map(|mut pipe| {
            let input = input.to_string();
            thread::spawn(move || pipe.write_all(input.as_bytes()))
        });

        let output = child.wait_with_output()?;
        if let Some(writer) = writer {
            writer
                .join()
                .map_err(|_| CliError::Command(format!("stdin writer for {} panicked", program)))??;
        }
        Ok(output)
    }
}

/// Splits an argv list into program and arguments.
fn split_argv(argv: &[String]) -> CliResult<(&str, &[String])> {
    match argv.split_first() {
        Some((program, args)) if !program.is_empty() => Ok((program.as_str(), args)),
        _ => Err(CliError::Config("Command must not be empty".to_string())),
    }
}

/// Runs a configured hook and fails when it exits unsuccessfully.
///
/// # Arguments
///
/// * `name` - Hook name used in logs and errors (`before`, `after`).
/// * `argv` - Program followed by its arguments.
/// * `executor` - The command runner.
pub fn run_hook<E: CommandExecutor>(name: &str, argv: &[String], executor: &E) -> CliResult<()> {
    let (program, args) = split_argv(argv)?;
    info!(hook = name, command = %argv.join(" "), "Running hook");

    let output = executor.execute(program, args, None)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::Command(format!(
            "{} hook `{}` failed with status {}: {}",
            name,
            argv.join(" "),
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Formats generated source by piping it through an external command.
#[derive(Debug)]
pub struct CommandFormatter<'a, E: CommandExecutor> {
    argv: Vec<String>,
    executor: &'a E,
}

impl<'a, E: CommandExecutor> CommandFormatter<'a, E> {
    /// Creates a formatter running `argv`; fails when `argv` is empty.
    pub fn new(argv: Vec<String>, executor: &'a E) -> CliResult<Self> {
        split_argv(&argv)?;
        Ok(Self { argv, executor })
    }
}

impl<E: CommandExecutor> SourceFormatter for CommandFormatter<'_, E> {
    fn format(&self, source: &str) -> AppResult<String> {
        let (program, args) = split_argv(&self.argv).map_err(|e| AppError::Format(e.to_string()))?;
        debug!(command = %self.argv.join(" "), bytes = source.len(), "Formatting module");

        let output = self
            .executor
            .execute(program, args, Some(source))
            .map_err(|e| AppError::Format(format!("Failed to run {}: {}", program, e)))?;

        if !output.status.success() {
            return Err(AppError::Format(format!(
                "{} exited with status {}: {}",
                program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| AppError::Format(format!("{} produced invalid UTF-8: {}", program, e)))
    }
}
