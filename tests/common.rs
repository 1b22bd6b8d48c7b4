#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rpaysheet::models::{RatePolicy, RateTable, RateType, Snapshot, TimeEntry, WorkType, WorkTypeRef};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rps() -> Command {
    cargo_bin_cmd!("rpaysheet")
}

/// Fresh directory inside the system temp dir, removed first if it exists
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rpaysheet_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Path of a file inside the test's temp dir, as String for CLI args
pub fn temp_file(dir: &PathBuf, file: &str) -> String {
    dir.join(file).to_string_lossy().to_string()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

pub fn hourly(name: &str) -> WorkTypeRef {
    WorkTypeRef::new(name, RateType::Hourly)
}

pub fn fixed(name: &str) -> WorkTypeRef {
    WorkTypeRef::new(name, RateType::Fixed)
}

pub fn entry(id: &str, d: &str, hours: f64, wt_id: &str, wt: WorkTypeRef) -> TimeEntry {
    TimeEntry::new(id, date(d), hours, wt_id, wt)
}

pub fn rates(pairs: &[(&str, RatePolicy)]) -> RateTable {
    pairs
        .iter()
        .map(|(id, p)| (id.to_string(), *p))
        .collect()
}

/// Dataset shared by most tests.
///
/// | month   | entries                                     | total |
/// |---------|---------------------------------------------|-------|
/// | 2024-03 | e1 labor 8h × 15 = 120, e2 install 3 × 50   | 270   |
/// | 2025-03 | e3 other 2 × 25 (custom) = 50, e4 clean 5h  | 50    |
/// | 2025-04 | e5 other 4h, custom 0 → hourly 10 = 40      | 40    |
pub fn sample_snapshot() -> Snapshot {
    let mut snapshot = Snapshot {
        work_types: vec![
            WorkType::new("labor", "Labor", RateType::Hourly),
            WorkType::new("install", "Install", RateType::Fixed),
            WorkType::new("other", "Other", RateType::Hourly),
            WorkType::new("clean", "Cleaning", RateType::Hourly),
        ],
        rates: rates(&[
            ("labor", RatePolicy::hourly(15.0)),
            ("install", RatePolicy::fixed(50.0)),
            ("other", RatePolicy::hourly(10.0)),
        ]),
        entries: vec![
            entry("e1", "2024-03-04", 8.0, "labor", hourly("Labor"))
                .with_times(time("09:00"), time("17:00")),
            entry("e2", "2024-03-10", 3.0, "install", fixed("Install")),
            entry("e3", "2025-03-02", 2.0, "other", hourly("Other")).with_custom_rate(25.0),
            entry("e4", "2025-03-05", 5.0, "clean", hourly("Cleaning")),
            entry("e5", "2025-04-01", 4.0, "other", hourly("Other")).with_custom_rate(0.0),
        ],
        expenses: Vec::new(),
    };
    snapshot.expenses.push(rpaysheet::models::Expense {
        id: "x1".into(),
        date: date("2024-03-15"),
        amount: 30.0,
        description: "fuel".into(),
    });
    snapshot
}

/// Write the sample snapshot as JSON into `dir` and return its path
pub fn write_sample_snapshot(dir: &PathBuf) -> String {
    let path = temp_file(dir, "timesheet.json");
    let json = serde_json::to_string_pretty(&sample_snapshot()).expect("serialize snapshot");
    fs::write(&path, json).expect("write snapshot");
    path
}

/// Config path that does not exist, so defaults are used
pub fn missing_config(dir: &PathBuf) -> String {
    temp_file(dir, "rpaysheet.conf")
}
