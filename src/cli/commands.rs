//! CLI command implementations

use crate::config::StorePaths;
use crate::maintenance::backup::backup_database;
use crate::maintenance::orphans::{delete_orphans, find_orphans, Confirmation};
use crate::maintenance::status::check_database;
use crate::{MeetkeepError, Result};

/// Check database status and print the report.
pub fn check(paths: &StorePaths, json: bool) -> Result<()> {
    let report = check_database(paths)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Database Status:");
    println!("  - Location: {}", report.location.display());
    println!("  - Size: {:.2} MB", report.size_mb);
    println!("  - Meetings: {}", report.meetings);
    println!("  - PDF records: {}", report.pdfs);
    println!("  - Integrity check: {}", report.integrity);

    Ok(())
}

/// Create a timestamped backup of the database file.
pub fn backup(paths: &StorePaths) -> Result<()> {
    let backup_path = backup_database(paths)?;
    println!("Database backed up to: {}", backup_path.display());
    Ok(())
}

/// Find files with no matching database record and delete them after
/// operator confirmation.
pub fn clean(paths: &StorePaths, confirm: &mut dyn Confirmation) -> Result<()> {
    let report = find_orphans(paths)?;

    println!("Found {} orphaned upload files", report.uploads.len());
    println!("Found {} orphaned PDF files", report.pdfs.len());

    if report.is_empty() {
        println!("No orphaned files to clean up");
        return Ok(());
    }

    if !confirm.confirm("Do you want to delete these orphaned files? (y/n): ")? {
        return Err(MeetkeepError::Declined);
    }

    let deleted = delete_orphans(&report);
    println!("Deleted {} orphaned files", deleted);

    Ok(())
}
