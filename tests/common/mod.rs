use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use rusqlite::{params, Connection};
use tempfile::TempDir;

/// Isolated environment for driving the meetkeep binary: temporary
/// config, data, upload, and PDF directories wired in through
/// environment overrides.
pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
    uploads: TempDir,
    pdfs: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary data dir"),
            uploads: tempfile::tempdir().expect("create temporary upload dir"),
            pdfs: tempfile::tempdir().expect("create temporary pdf dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("failed to execute meetkeep binary")
    }

    /// Run the binary with the given text piped to standard input, for
    /// the cleanup confirmation prompt.
    #[allow(dead_code)]
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn meetkeep binary");

        child
            .stdin
            .as_mut()
            .expect("stdin should be piped")
            .write_all(input.as_bytes())
            .expect("write confirmation answer");

        child
            .wait_with_output()
            .expect("failed to wait for meetkeep binary")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_meetkeep"));
        cmd.args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("MEETKEEP_DATA_DIR", self.data.path())
            .env("MEETKEEP_UPLOAD_DIR", self.uploads.path())
            .env("MEETKEEP_PDF_DIR", self.pdfs.path());
        cmd
    }

    #[allow(dead_code)]
    pub fn database_path(&self) -> PathBuf {
        self.data.path().join("meetings.db")
    }

    #[allow(dead_code)]
    pub fn backup_dir(&self) -> PathBuf {
        self.data.path().join("backups")
    }

    /// Create the analyzer-owned schema and seed the path columns.
    #[allow(dead_code)]
    pub fn seed_database(&self, audio_paths: &[&str], pdf_paths: &[&str]) {
        let conn = Connection::open(self.database_path()).expect("open fixture database");
        conn.execute_batch(
            r#"
            CREATE TABLE meetings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                audio_path TEXT
            );

            CREATE TABLE pdfs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                file_path TEXT
            );
            "#,
        )
        .expect("create fixture schema");

        for (i, audio_path) in audio_paths.iter().enumerate() {
            conn.execute(
                "INSERT INTO meetings (title, audio_path) VALUES (?1, ?2)",
                params![format!("Meeting {}", i + 1), audio_path],
            )
            .expect("insert meeting row");
        }

        for file_path in pdf_paths {
            conn.execute("INSERT INTO pdfs (file_path) VALUES (?1)", params![file_path])
                .expect("insert pdf row");
        }
    }

    #[allow(dead_code)]
    pub fn write_upload(&self, name: &str) -> PathBuf {
        let path = self.uploads.path().join(name);
        std::fs::write(&path, b"audio bytes").expect("write upload fixture");
        path
    }

    #[allow(dead_code)]
    pub fn write_pdf(&self, name: &str) -> PathBuf {
        let path = self.pdfs.path().join(name);
        std::fs::write(&path, b"pdf bytes").expect("write pdf fixture");
        path
    }
}
