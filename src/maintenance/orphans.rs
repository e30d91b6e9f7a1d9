//! Orphaned artifact detection and cleanup

use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::StorePaths;
use crate::storage::Database;
use crate::{MeetkeepError, Result};

/// Files on disk with no matching path reference in the database.
#[derive(Debug, Default)]
pub struct OrphanReport {
    pub uploads: Vec<PathBuf>,
    pub pdfs: Vec<PathBuf>,
}

impl OrphanReport {
    pub fn is_empty(&self) -> bool {
        self.uploads.is_empty() && self.pdfs.is_empty()
    }
}

/// Answers the cleanup confirmation prompt.
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Blocking read of the operator's answer from standard input.
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        // The trailing prompt must be visible before the blocking read.
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

/// Non-interactive affirmative answer, for --yes runs.
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> io::Result<bool> {
        Ok(true)
    }
}

/// Compare both artifact directories against the paths the database
/// references.
pub fn find_orphans(paths: &StorePaths) -> Result<OrphanReport> {
    let db_path = paths.database_path();
    if !db_path.exists() {
        return Err(MeetkeepError::DatabaseMissing(db_path));
    }

    let db = Database::open_path(&db_path)?;
    let audio_paths = db.audio_paths()?;
    let pdf_paths = db.pdf_paths()?;

    Ok(OrphanReport {
        uploads: scan_directory(&paths.upload_dir, &audio_paths)?,
        pdfs: scan_directory(&paths.pdf_dir, &pdf_paths)?,
    })
}

/// Immediate file entries of `dir` whose path is not referenced.
///
/// Membership is exact string equality against the stored column value.
/// No normalization is attempted, so a relative or symlinked
/// representation stored in the database will not cover its file.
fn scan_directory(dir: &Path, referenced: &HashSet<String>) -> Result<Vec<PathBuf>> {
    let mut orphans = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if !referenced.contains(path.to_string_lossy().as_ref()) {
            orphans.push(path);
        }
    }

    orphans.sort();
    Ok(orphans)
}

/// Delete every orphaned file, best effort.
///
/// A file that cannot be removed is reported and skipped; the rest are
/// still processed. Returns the number of successful deletions.
pub fn delete_orphans(report: &OrphanReport) -> usize {
    let mut deleted = 0;

    for path in report.uploads.iter().chain(&report.pdfs) {
        match std::fs::remove_file(path) {
            Ok(()) => deleted += 1,
            Err(err) => println!("Failed to delete {}: {}", path.display(), err),
        }
    }

    deleted
}
