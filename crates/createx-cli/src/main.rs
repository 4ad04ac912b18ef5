//! CreateX CLI
//!
//! Command-line interface for building and serving the facilitator guide.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use createx_cli::commands::{self, Session};
use createx_cli::config_handlers::handle_config_command;
use createx_cli::logging::init_logging;
use createx_cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = ?e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Cli {
        config,
        content_dir,
        command,
        ..
    } = cli;

    if let Command::Config { action } = command {
        println!("{}", handle_config_command(config.as_deref(), action)?);
        return Ok(ExitCode::SUCCESS);
    }

    let session = Session::load(config.as_deref(), content_dir)?;
    match command {
        Command::Build {
            language,
            output,
            all,
        } => {
            for dir in commands::build(&session, language, output, all).await? {
                println!("Built {}", dir.display());
            }
        }
        Command::Serve {
            port,
            host,
            language,
        } => commands::serve_site(&session, host, port, language).await?,
        Command::Validate { json } => {
            if commands::validate(&session, json).await?.has_errors() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Stats { json } => commands::stats(&session, json).await?,
        Command::Translations { action } => commands::translations(&session, action).await?,
        Command::Config { .. } => {}
    }
    Ok(ExitCode::SUCCESS)
}
