#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The dotlog binary, isolated from the real config directory and colour-free.
pub fn dotlog() -> Command {
    let mut cmd = cargo_bin_cmd!("dotlog");
    cmd.env("DOTLOG_HOME", env::temp_dir().join("dotlog_test_home"))
        .env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dotlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and sign in `alice`.
pub fn init_and_login(db_path: &str) {
    dotlog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dotlog()
        .args(["--db", db_path, "login", "alice"])
        .assert()
        .success();
}

/// Initialize, sign in and rate a few days in May and June 2024.
pub fn init_db_with_data(db_path: &str) {
    init_and_login(db_path);

    for (date, level, note) in [
        ("2024-05-31", "2", "long week"),
        ("2024-06-14", "1", "flu"),
        ("2024-06-15", "4", "went hiking"),
    ] {
        dotlog()
            .args(["--db", db_path, "add", date, "--level", level, "--note", note])
            .assert()
            .success();
    }
}
