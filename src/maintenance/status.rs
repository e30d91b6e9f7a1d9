//! Database status check

use serde::Serialize;
use std::path::PathBuf;

use crate::config::StorePaths;
use crate::storage::Database;
use crate::{MeetkeepError, Result};

/// Snapshot of database health.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub location: PathBuf,
    pub size_mb: f64,
    pub meetings: i64,
    pub pdfs: i64,
    pub integrity: String,
}

/// Collect row counts, the on-disk file size, and the integrity token.
pub fn check_database(paths: &StorePaths) -> Result<StatusReport> {
    let db_path = paths.database_path();
    if !db_path.exists() {
        return Err(MeetkeepError::DatabaseMissing(db_path));
    }

    let db = Database::open_path(&db_path)?;

    let meetings = db.meeting_count()?;
    let pdfs = db.pdf_count()?;
    let size_mb = std::fs::metadata(&db_path)?.len() as f64 / (1024.0 * 1024.0);
    let integrity = db.integrity_check()?;

    Ok(StatusReport {
        location: db_path,
        size_mb,
        meetings,
        pdfs,
        integrity,
    })
}
