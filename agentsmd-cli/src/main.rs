//! agentsmd CLI
//!
//! Exit codes:
//! - 0: Success
//! - 1: Runtime failure (missing .cursor directory, I/O, prompt closed)
//! - 2: Invalid arguments or configuration

use agentsmd_cli::{run, Cli, Console};
use agentsmd_common::RunContext;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new(
            "agentsmd=debug,agentsmd_cli=debug,agentsmd_rules=debug,\
             agentsmd_merge=debug,agentsmd_config=debug",
        )
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let result = RunContext::from_current_dir().and_then(|ctx| run(&cli, &ctx));
    let exit_code = match result {
        Ok(_) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            Console::default().error(&e);
            e.exit_code()
        }
    };
    std::process::exit(exit_code);
}
