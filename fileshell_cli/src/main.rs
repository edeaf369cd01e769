mod cli;
pub mod errors;
mod handlers;
mod repl;
mod ui;

use std::env;
use std::process;

use clap::Parser;
use fileshell::{Shell, ShellConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::errors::CliError;
use crate::repl::run_repl;
use crate::repl::state::AppState;

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match open_shell(&cli) {
        Ok(mut app_state) => {
            println!("Simple File Manager CLI");
            println!("Working directory: {}", app_state.working_dir.display());
            println!("Type 'help' for commands or 'exit' to quit.");
            run_repl(&mut app_state)?;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
    Ok(())
}

/// 日志输出到 stderr，保持 REPL 的 stdout 干净
fn init_tracing(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn open_shell(cli: &Cli) -> Result<AppState, CliError> {
    let working_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };
    if !working_dir.is_dir() {
        return Err(CliError::DirectoryNotFound(working_dir));
    }

    let mut config = ShellConfig::discover(&working_dir, cli.config.as_deref())?;
    if let Some(memory_kb) = cli.memory_kb {
        config.total_memory_kb = memory_kb;
    }
    tracing::debug!(?config, "configuration resolved");

    let shell = Shell::open_local(&working_dir, config)?;
    Ok(AppState {
        shell,
        working_dir,
        running: true,
    })
}
