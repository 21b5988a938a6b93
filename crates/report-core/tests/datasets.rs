// File: crates/report-core/tests/datasets.rs
// Purpose: Internal consistency of the literal data tables.

use report_core::{datasets, palette};

#[test]
fn label_value_parity() {
    assert_eq!(datasets::AUTHORS.len(), datasets::AUTHOR_RANK_COLORS.len());
    assert!(datasets::strategy_counts().len() <= datasets::STRATEGY_COLORS.len());
    assert_eq!(datasets::SEGMENTS.len(), datasets::SEGMENT_COLORS.len());
    assert_eq!(datasets::PRODUCTIVITY.len(), datasets::PRODUCTIVITY_COLORS.len());

    let era = datasets::era_stats();
    assert_eq!(era.eras.len(), era.books.len());
    assert_eq!(era.eras.len(), era.books_per_year.len());
    assert_eq!(era.eras.len(), era.share_pct.len());
    assert_eq!(era.eras.len(), era.pie_colors.len());
    assert_eq!(era.eras.len(), era.bar_colors.len());
}

#[test]
fn strategy_counts_rank_most_common_first() {
    let counts = datasets::strategy_counts();
    assert_eq!(counts.len(), 7);
    // "Volume Beast" is the only repeated strategy and leads the pie.
    assert_eq!(counts[0], ("Volume Beast", 2));
    assert_eq!(counts[1], ("Saga Epic", 1));
    assert_eq!(counts[2], ("Emotional Pure", 1));
    assert!(counts.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(
        counts.iter().map(|(_, n)| n).sum::<usize>(),
        datasets::AUTHORS.len()
    );
}

#[test]
fn all_dataset_colors_parse() {
    palette::parse_all(&datasets::AUTHOR_RANK_COLORS).expect("author ramp");
    palette::parse_all(&datasets::STRATEGY_COLORS).expect("strategy slices");
    palette::parse_all(&datasets::SEGMENT_COLORS).expect("segment bars");
    palette::parse_all(&datasets::PRODUCTIVITY_COLORS).expect("productivity bars");
    for row in &datasets::METRICS {
        palette::parse_hex(row.color).expect("metric color");
    }
    let era = datasets::era_stats();
    palette::parse_all(&era.pie_colors).expect("era pie colors");
    palette::parse_all(&era.bar_colors).expect("era bar colors");
}
