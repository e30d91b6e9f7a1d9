//! CLI argument definitions using clap

use clap::Parser;
use clap_complete::Shell;

/// meetkeep - Database maintenance for the meeting analyzer
///
/// Maintenance flags combine freely and always execute in a fixed order:
/// check, then backup, then clean.
#[derive(Parser, Debug)]
#[command(name = "meetkeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Check database status
    #[arg(long)]
    pub check: bool,

    /// Create a timestamped database backup
    #[arg(long)]
    pub backup: bool,

    /// Clean orphaned files
    #[arg(long)]
    pub clean: bool,

    /// Output the status report as JSON (with --check)
    #[arg(long)]
    pub json: bool,

    /// Assume "yes" for the cleanup confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// True when no maintenance operation was requested.
    pub fn no_operation(&self) -> bool {
        !(self.check || self.backup || self.clean)
    }
}
