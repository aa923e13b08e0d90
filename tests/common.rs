#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ttk() -> Command {
    cargo_bin_cmd!("tictrack")
}

/// Create a unique records file path inside the system temp dir and remove
/// any existing file
pub fn setup_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tictrack_records.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Settings file path for a test; missing file means default targets
/// (7h30 daily, 41h weekly)
pub fn setup_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tictrack_settings.yaml", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Populate a records file with a worked Monday and Tuesday (2025-03-10/11)
pub fn seed_two_days(data_path: &str, cfg_path: &str) {
    for (date, time, dir) in [
        ("2025-03-10", "09:00", "in"),
        ("2025-03-10", "17:30", "out"),
        ("2025-03-11", "09:00", "in"),
        ("2025-03-11", "17:00", "out"),
    ] {
        ttk()
            .args([
                "--data", data_path, "--config", cfg_path, dir, "--date", date, "--time", time,
            ])
            .assert()
            .success();
    }
}
