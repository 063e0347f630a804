//! stdmatrix CLI - build-matrix filtering and C++ standard expansion

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stdmatrix::util::diagnostic::{emit, suggestions, Diagnostic};
use stdmatrix::ConfigurationError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli, color) {
        report(&e, color);
        std::process::exit(1);
    }
}

fn run(cli: Cli, color: bool) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("stdmatrix=debug")
    } else {
        EnvFilter::new("stdmatrix=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .without_time()
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Expand(args) => commands::expand::execute(args, config),
        Commands::Standards(args) => commands::standards::execute(args, config, color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn report(e: &anyhow::Error, color: bool) {
    match e.downcast_ref::<ConfigurationError>() {
        Some(config_err) => {
            let mut diag = config_err.to_diagnostic();
            for cause in e.chain() {
                if cause.downcast_ref::<ConfigurationError>().is_none() {
                    diag = diag.with_context(cause.to_string());
                }
            }
            emit(&diag, color);
        }
        None => {
            let mut diag = Diagnostic::error(format!("{:#}", e));
            if e.chain().any(|cause| cause.is::<serde_json::Error>()) {
                diag = diag.with_suggestion(suggestions::INVALID_INPUT);
            } else if e.chain().any(|cause| cause.is::<toml::de::Error>()) {
                diag = diag.with_suggestion(suggestions::INVALID_CONFIG);
            }
            emit(&diag, color);
        }
    }
}
