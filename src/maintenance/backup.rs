//! Timestamped database backups

use chrono::Local;
use std::path::PathBuf;

use crate::config::StorePaths;
use crate::{MeetkeepError, Result};

/// Copy the database into the backup directory, named by creation time.
///
/// Backups accumulate indefinitely; rotation is left to the operator.
/// Two backups within the same second share a filename and the later
/// copy wins.
pub fn backup_database(paths: &StorePaths) -> Result<PathBuf> {
    let db_path = paths.database_path();
    if !db_path.exists() {
        return Err(MeetkeepError::DatabaseMissing(db_path));
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_dir = paths.backup_dir();
    std::fs::create_dir_all(&backup_dir)?;

    let backup_path = backup_dir.join(format!("meetings_{}.db", timestamp));
    std::fs::copy(&db_path, &backup_path)?;

    tracing::debug!(backup = %backup_path.display(), "database copied");
    Ok(backup_path)
}
