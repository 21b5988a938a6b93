// File: crates/chartgen/tests/cli.rs
// Purpose: Driver binary stdout contract (banners plus one success line per chart).

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use report_core::charts::{CHART_FILES, OUTPUT_DIR};

#[test]
fn driver_reports_each_written_chart() {
    let scratch = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_out/cli");
    fs::remove_dir_all(&scratch).ok();
    fs::create_dir_all(&scratch).expect("create scratch dir");

    let output = Command::new(env!("CARGO_BIN_EXE_chartgen"))
        .current_dir(&scratch)
        .output()
        .expect("run driver binary");
    assert!(output.status.success(), "driver should exit cleanly");

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
    assert!(stdout.contains("Generating editorial industry analytics charts"));
    for name in CHART_FILES {
        assert!(
            stdout.lines().any(|l| l.starts_with("Wrote ") && l.ends_with(name)),
            "missing success line for {name}\n--- stdout ---\n{stdout}"
        );
        assert!(scratch.join(OUTPUT_DIR).join(name).exists(), "{name} on disk");
    }
    assert!(stdout.contains("All visualizations generated"));
}
