//! meetkeep - Maintenance utilities for the meeting analyzer datastore
//!
//! Health checks, timestamped backups, and orphaned-file cleanup for the
//! SQLite store behind the meeting analyzer.

pub mod cli;
pub mod config;
pub mod maintenance;
pub mod storage;

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for meetkeep
#[derive(Error, Debug)]
pub enum MeetkeepError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database not found at: {}", .0.display())]
    DatabaseMissing(PathBuf),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cleanup aborted")]
    Declined,
}

pub type Result<T> = std::result::Result<T, MeetkeepError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "meetkeep";
