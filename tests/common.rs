#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Date every test pretends is today.
pub const TODAY: &str = "2024-06-15";

/// Empty home directory for `name`, so no user configuration leaks in.
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdates_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

pub fn rdt(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rdates");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdates.sqlite", name));
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

/// Add an event through the CLI and return its id.
pub fn add_event(home: &Path, db_path: &str, date: &str, title: &str, group: &str) -> String {
    let out = rdt(home)
        .args(["--db", db_path, "add", date, "--title", title, "--group", group])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&out);
    stdout
        .split("with id ")
        .nth(1)
        .map(|rest| rest.trim().chars().take(36).collect())
        .expect("add prints the new id")
}

/// Initialize DB and add a small dataset useful for many tests.
/// Returns the ids in insertion order: far, soon, mum.
pub fn init_db_with_data(home: &Path, db_path: &str) -> Vec<String> {
    rdt(home)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    vec![
        add_event(home, db_path, "2024-07-15", "Far", "work"),
        add_event(home, db_path, "17.6.2024", "Soon", "personal"),
        add_event(home, db_path, "1990-06-14", "Mum", "_birthdays"),
    ]
}

/// Position of `needle` in `haystack`, panicking with context when absent.
pub fn pos(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in:\n{haystack}"))
}
