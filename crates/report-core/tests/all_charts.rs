// File: crates/report-core/tests/all_charts.rs
// Purpose: End-to-end driver behavior (file set, idempotence, directory recovery).

use std::fs;
use std::path::PathBuf;

use report_core::charts::{self, CHART_FILES};

#[test]
fn driver_end_to_end() {
    let out = PathBuf::from("target/test_out/all_charts");
    fs::remove_dir_all(&out).ok();

    charts::generate_all_charts(&out).expect("first run");
    for name in CHART_FILES {
        let path = out.join(name);
        let meta = fs::metadata(&path).expect("chart file exists");
        assert!(meta.len() > 0, "{name} should be non-empty");
        image::open(&path).unwrap_or_else(|e| panic!("{name} should decode as an image: {e}"));
    }
    assert_eq!(
        fs::read_dir(&out).expect("read output dir").count(),
        CHART_FILES.len(),
        "exactly five files expected"
    );

    // A second run overwrites in place without adding files.
    charts::generate_all_charts(&out).expect("second run");
    assert_eq!(fs::read_dir(&out).expect("read output dir").count(), CHART_FILES.len());

    // Unrelated files in a pre-existing directory are left alone.
    let marker = out.join("notes.txt");
    fs::write(&marker, "keep me").expect("write marker");
    charts::generate_all_charts(&out).expect("third run");
    assert_eq!(fs::read_to_string(&marker).expect("marker survives"), "keep me");

    // Removing the directory between runs is recovered from.
    fs::remove_dir_all(&out).expect("remove output dir");
    charts::generate_all_charts(&out).expect("run after removal");
    assert!(out.join(charts::STRATEGIC_DASHBOARD_PNG).exists());
}
