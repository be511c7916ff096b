use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::load_config;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("{error_json}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(error_exit_code(&e))
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` logs debug and `--quiet`
/// only errors.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    let mut ctx = CommandContext::from_cli(cli);

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Config and completions must work even when the config file is broken.
    match command {
        Commands::Config { command } => {
            return match command {
                None | Some(ConfigCommands::Show) => commands::config::execute_show(&ctx),
                Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
                Some(ConfigCommands::Init) => commands::config::execute_init(&ctx),
                Some(ConfigCommands::Set { key, value }) => {
                    let opts = commands::config::ConfigSetOptions {
                        key: key.clone(),
                        value: value.clone(),
                    };
                    commands::config::execute_set(&ctx, &opts)
                }
            };
        }
        Commands::Completions { shell } => {
            commands::completions::execute(shell)?;
            return Ok(());
        }
        _ => {}
    }

    ctx.apply_config(&load_config()?);
    debug!(data_path = ?ctx.data_path, "resolved context");

    match command {
        Commands::Users { filter, page } => {
            let opts = commands::users::UsersOptions {
                filter: filter.clone(),
                page: page.page,
                per_page: page.per_page,
            };
            commands::users::execute(&ctx, &opts)
        }
        Commands::Joggings {
            filter,
            owner,
            page,
        } => {
            let opts = commands::joggings::JoggingsOptions {
                filter: filter.clone(),
                owner: owner.clone(),
                page: page.page,
                per_page: page.per_page,
            };
            commands::joggings::execute(&ctx, &opts)
        }
        Commands::Parse { filter, record } => {
            let opts = commands::parse::ParseOptions {
                filter: filter.clone(),
                record: *record,
            };
            commands::parse::execute(&ctx, &opts)
        }
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::Pagination(_) => "PAGINATION_ERROR",
        CommandError::Store(_) => "DATASET_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the process exit status for an error.
fn error_exit_code(e: &CommandError) -> u8 {
    match e {
        CommandError::Filter(_) | CommandError::Pagination(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Config(_) | CommandError::Store(_) => 5,
        CommandError::Json(_) => 1,
    }
}
