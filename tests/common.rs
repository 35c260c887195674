#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtimetracker")
}

/// Unique time log path inside the system temp dir; any previous file is removed
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetracker.csv", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Temporary output file path inside tempdir, removed if present
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetracker_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `HH:MM:SS YYYY/MM/DD` for today at the given time.
/// In the last minute of the day it waits for midnight, so the binary run
/// right after sees the same date.
pub fn today_at(time: &str) -> String {
    let now = Local::now();
    let cutoff = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
    if now.time() >= cutoff {
        let left = NaiveTime::from_hms_opt(23, 59, 59).unwrap() - now.time();
        thread::sleep(left.to_std().unwrap_or_default() + Duration::from_secs(2));
    }
    format!("{} {}", time, Local::now().format("%Y/%m/%d"))
}

/// Run a command against `log` in test mode and assert success
pub fn run_ok(log: &str, args: &[&str]) {
    rtt()
        .args(["--test", "--file", log])
        .args(args)
        .assert()
        .success();
}
