// File: crates/report-core/tests/smoke.rs
// Purpose: Each generator writes exactly one decodable PNG at its fixed name.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use report_core::charts;

#[test]
fn publishing_explosion_writes_png() {
    let out = PathBuf::from("target/test_out/smoke");
    fs::remove_dir_all(&out).ok();

    charts::publishing_explosion(&out).expect("render should succeed");

    let path = out.join(charts::PUBLISHING_EXPLOSION_PNG);
    let meta = fs::metadata(&path).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let img = image::open(&path).expect("decodes as image");
    assert_eq!((img.width(), img.height()), (1600, 800));
}

#[test]
fn each_generator_writes_exactly_one_file() {
    let cases: [(&str, fn(&Path) -> Result<()>); 5] = [
        ("publishing_explosion", charts::publishing_explosion),
        ("author_success_matrix", charts::author_success_matrix),
        ("publisher_performance", charts::publisher_performance),
        ("user_engagement_pyramid", charts::user_engagement_pyramid),
        ("strategic_dashboard", charts::strategic_dashboard),
    ];

    for (name, generator) in cases {
        let out = PathBuf::from("target/test_out/single").join(name);
        fs::remove_dir_all(&out).ok();
        generator(&out).unwrap_or_else(|e| panic!("{name} should succeed: {e}"));
        let written = fs::read_dir(&out).expect("output dir exists").count();
        assert_eq!(written, 1, "{name} should write exactly one file");
    }
}
