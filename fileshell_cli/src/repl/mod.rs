pub mod dispatcher;
pub mod state;

use clap::Parser;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::cli::ReplCommand;
use crate::errors::CliError;
use crate::repl::dispatcher::handle_repl_command;
use crate::repl::state::AppState;

pub fn run_repl(app_state: &mut AppState) -> Result<(), CliError> {
    let mut rl = DefaultEditor::new()?;

    let history_path = app_state
        .shell
        .config
        .history_file
        .as_ref()
        .map(|p| app_state.working_dir.join(p));
    if let Some(path) = &history_path {
        if let Err(e) = rl.load_history(path) {
            debug!(path = ?path, error = %e, "no history loaded");
        }
    }

    while app_state.running {
        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                let args = match shlex::split(line.as_str()) {
                    Some(args) => args,
                    None => {
                        eprintln!("Error: Unbalanced quotes in command line.");
                        continue;
                    }
                };
                if args.is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;

                match ReplCommand::try_parse_from(args) {
                    Ok(command) => {
                        if let Err(e) = handle_repl_command(command, app_state) {
                            eprintln!("Error: {}", e);
                        }
                    }
                    Err(e) => {
                        e.print()?;
                    }
                }
            }
            Err(_) => {
                // Ctrl-C / Ctrl-D / 输入结束
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        rl.save_history(path)?;
    }
    println!("Goodbye!");
    Ok(())
}
