//! The generate-and-write pipeline behind the `agentsmd` binary

use crate::cli::Cli;
use crate::output::Console;
use crate::prompt::prompt_mode;
use agentsmd_common::{AgentsMdError, OutputMode, Result, RunContext};
use agentsmd_config::load_configuration;
use agentsmd_merge::{
    has_markers, wrap_generated_content, write_agents_file, WriteOutcome, WriteRequest,
};
use agentsmd_rules::{generate_content, load_rule_files};
use std::path::PathBuf;
use tracing::{debug, info};

/// Run with the interactive mode prompt
pub fn run(cli: &Cli, ctx: &RunContext) -> Result<WriteOutcome> {
    run_with_prompt(cli, ctx, prompt_mode)
}

/// Run the pipeline, calling `prompt` only when no source chose a mode
///
/// discover, load, generate, wrap, then merge into the target file (or
/// print it on a dry run).
///
/// # Errors
///
/// Configuration errors, a missing cursor directory, unreadable rules and
/// write failures all abort the run before anything is written.
pub fn run_with_prompt<P>(cli: &Cli, ctx: &RunContext, prompt: P) -> Result<WriteOutcome>
where
    P: FnOnce() -> Result<OutputMode>,
{
    let config = load_configuration(ctx, &cli.overrides(), cli.config.as_deref())?;
    let console = Console::new(config.quiet);

    let mode = match config.mode {
        Some(mode) => mode,
        None => prompt()?,
    };

    if !config.cursor_dir.exists() {
        return Err(AgentsMdError::MissingCursorDir {
            path: PathBuf::from(ctx.relative_path(&config.cursor_dir)),
        });
    }

    let rules = load_rule_files(&config.rules_dir, ctx)?;
    info!(count = rules.len(), %mode, "loaded rules");
    let wrapped = wrap_generated_content(&generate_content(mode, &rules));

    let file_name = config
        .out
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| ctx.relative_path(&config.out));

    if !config.write_mode_explicit() {
        if let Ok(existing) = std::fs::read_to_string(&config.out) {
            if !has_markers(&existing) {
                console.warn_existing(&file_name);
            }
        }
    }

    let request = WriteRequest::new(&config.out, wrapped)
        .with_write_mode(config.effective_write_mode())
        .with_dry_run(config.dry_run)
        .with_backup(config.backup);
    let outcome = write_agents_file(&request)?;
    debug!(
        written = outcome.written,
        replaced = outcome.replaced,
        backup = ?outcome.backup_path,
        "write finished"
    );

    if config.dry_run {
        console.content(&outcome.final_content);
        return Ok(outcome);
    }

    console.generated(&file_name);
    Ok(outcome)
}
