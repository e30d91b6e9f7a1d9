//! meetkeep - Database maintenance for the meeting analyzer
//!
//! Entry point for the meetkeep CLI.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meetkeep::cli::{commands, Cli};
use meetkeep::config::Settings;
use meetkeep::maintenance::orphans::{AssumeYes, Confirmation, StdinConfirmation};
use meetkeep::MeetkeepError;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        meetkeep::cli::completions::print(shell);
        return Ok(());
    }

    // No operation requested: show help and exit without side effects.
    if cli.no_operation() {
        Cli::command().print_help()?;
        return Ok(());
    }

    // Load configuration only for runtime operations.
    let settings = Settings::load()?;
    let paths = settings.store_paths();
    std::fs::create_dir_all(&paths.data_dir)?;

    // Operations always run in a fixed order regardless of flag order,
    // and a failure in one never stops the others.
    let mut all_ok = true;

    if cli.check {
        all_ok &= report("checking database", commands::check(&paths, cli.json));
    }

    if cli.backup {
        all_ok &= report("backing up database", commands::backup(&paths));
    }

    if cli.clean {
        let mut confirm: Box<dyn Confirmation> = if cli.yes {
            Box::new(AssumeYes)
        } else {
            Box::new(StdinConfirmation)
        };
        all_ok &= report(
            "cleaning orphaned files",
            commands::clean(&paths, confirm.as_mut()),
        );
    }

    if !all_ok {
        std::process::exit(1);
    }

    Ok(())
}

/// Print an operation's failure on stdout and fold it into the exit status.
fn report(doing: &str, result: meetkeep::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err @ (MeetkeepError::DatabaseMissing(_) | MeetkeepError::Declined)) => {
            println!("{}", err);
            false
        }
        Err(err) => {
            println!("Error {}: {}", doing, err);
            false
        }
    }
}
