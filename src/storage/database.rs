//! SQLite access for maintenance queries

use rusqlite::Connection;
use std::collections::HashSet;
use std::path::Path;

use crate::Result;

/// Connection wrapper over the meeting analyzer's database file.
///
/// The schema belongs to the analyzer application; this wrapper only
/// reads the columns maintenance cares about and never creates or
/// migrates tables. Callers check for the file's existence first, since
/// SQLite would otherwise create an empty database on open.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path.
    pub fn open_path(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Number of rows in `meetings`.
    pub fn meeting_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM meetings", [], |row| row.get(0))?)
    }

    /// Number of rows in `pdfs`.
    pub fn pdf_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM pdfs", [], |row| row.get(0))?)
    }

    /// All audio paths referenced by meeting records.
    pub fn audio_paths(&self) -> Result<HashSet<String>> {
        self.path_column("SELECT audio_path FROM meetings")
    }

    /// All file paths referenced by PDF records.
    pub fn pdf_paths(&self) -> Result<HashSet<String>> {
        self.path_column("SELECT file_path FROM pdfs")
    }

    // Null and empty values never cover a file on disk.
    fn path_column(&self, sql: &str) -> Result<HashSet<String>> {
        let mut stmt = self.conn.prepare(sql)?;

        let paths = stmt
            .query_map([], |row| row.get::<_, Option<String>>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .filter(|path| !path.is_empty())
            .collect();

        Ok(paths)
    }

    /// Run SQLite's built-in consistency verification.
    ///
    /// Returns "ok" on a healthy database, otherwise the first problem
    /// description SQLite reports.
    pub fn integrity_check(&self) -> Result<String> {
        Ok(self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?)
    }
}
