mod common;

use common::TestEnv;

#[test]
fn backup_writes_a_byte_identical_copy() {
    let env = TestEnv::new();
    env.seed_database(&["/data/a.wav"], &["/data/report.pdf"]);

    let output = env.run(&["--backup"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--backup should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Database backed up to:"));

    let entries: Vec<_> = std::fs::read_dir(env.backup_dir())
        .expect("backup directory should exist")
        .map(|entry| entry.expect("read backup entry").path())
        .collect();
    assert_eq!(entries.len(), 1);

    let name = entries[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("meetings_"));
    assert!(name.ends_with(".db"));

    let source = std::fs::read(env.database_path()).unwrap();
    let copy = std::fs::read(&entries[0]).unwrap();
    assert_eq!(source, copy);
}

#[test]
fn backup_fails_when_database_is_missing() {
    let env = TestEnv::new();

    let output = env.run(&["--backup"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Database not found at:"));
    assert!(!env.backup_dir().exists());
}
