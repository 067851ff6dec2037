//! kasten CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Not found
//! - 4: Already exists
//! - 5: Artifact store error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const NOT_FOUND: u8 = 3;
    pub const ALREADY_EXISTS: u8 = 4;
    pub const STORE_ERROR: u8 = 5;
}

fn main() -> ExitCode {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("kasten=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    let config = match config::Config::resolve(cli.home, cli.editor) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            return ExitCode::from(ExitCodes::INVALID_ARGS);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args, &config),
        Commands::New(args) => commands::new::execute(args, &config),
        Commands::Add(args) => commands::add::execute(args, &config),
        Commands::Update(args) => commands::update::execute(args, &config),
        Commands::Delete(args) => commands::delete::execute(args, &config),
        Commands::Get(args) => commands::get::execute(args, &config),
        Commands::Edit(args) => commands::edit::execute(args, &config),
        Commands::Apply(args) => commands::apply::execute(args, &config),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Map the typed library errors onto the documented exit codes.
fn categorize_error(e: &anyhow::Error) -> u8 {
    use kasten_store::StoreError;
    use kasten_templates::{ApplyError, TemplateError};

    if let Some(template_err) = e.downcast_ref::<TemplateError>() {
        return match template_err {
            TemplateError::NotFound(_) => ExitCodes::NOT_FOUND,
            TemplateError::AlreadyExists(_) => ExitCodes::ALREADY_EXISTS,
            TemplateError::InvalidName(_) | TemplateError::InvalidEditor(_) => {
                ExitCodes::INVALID_ARGS
            }
            _ => ExitCodes::GENERAL_ERROR,
        };
    }
    if e.downcast_ref::<ApplyError>().is_some() || e.downcast_ref::<StoreError>().is_some() {
        return ExitCodes::STORE_ERROR;
    }
    ExitCodes::GENERAL_ERROR
}
