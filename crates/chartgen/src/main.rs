// File: crates/chartgen/src/main.rs
// Summary: No-argument driver that renders the five editorial analytics charts.

use std::path::Path;

use anyhow::Result;
use report_core::charts;

fn main() -> Result<()> {
    println!("Generating editorial industry analytics charts");
    println!("{}", "=".repeat(60));

    charts::generate_all_charts(Path::new(charts::OUTPUT_DIR))?;

    println!();
    println!("All visualizations generated");
    println!("Files saved in: {}/", charts::OUTPUT_DIR);
    Ok(())
}
