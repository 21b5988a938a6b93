// File: crates/report-core/src/datasets.rs
// Summary: Literal editorial-industry statistics backing each chart.
//
// Every table below is opaque ground truth from the source analysis; nothing
// in this crate derives or recomputes the numbers.

/// Pre/post-2000 era split of the catalog.
pub struct EraStats {
    pub eras: [&'static str; 2],
    pub books: [f64; 2],
    pub books_per_year: [f64; 2],
    pub share_pct: [f64; 2],
    pub pie_colors: [&'static str; 2],
    pub bar_colors: [&'static str; 2],
}

pub fn era_stats() -> EraStats {
    EraStats {
        eras: ["Pre-2000 (Analog)", "Post-2000 (Digital)"],
        books: [181.0, 819.0],
        // 48 analog years vs 20 digital years of catalog coverage
        books_per_year: [181.0 / 48.0, 819.0 / 20.0],
        share_pct: [18.1, 81.9],
        pie_colors: ["#FF6B6B", "#4ECDC4"],
        bar_colors: ["#FF7F7F", "#7FBF7F"],
    }
}

/// One author ranking row.
pub struct AuthorRow {
    pub name: &'static str,
    pub commercial_potential: f64,
    pub strategy: &'static str,
}

pub const AUTHORS: [AuthorRow; 8] = [
    AuthorRow { name: "J.K. Rowling", commercial_potential: 66.9, strategy: "Saga Epic" },
    AuthorRow { name: "Stephen King", commercial_potential: 55.9, strategy: "Volume Beast" },
    AuthorRow { name: "Nicholas Sparks", commercial_potential: 43.0, strategy: "Emotional Pure" },
    AuthorRow { name: "John Grisham", commercial_potential: 39.0, strategy: "Thriller Machine" },
    AuthorRow { name: "Jodi Picoult", commercial_potential: 30.0, strategy: "Drama Focus" },
    AuthorRow { name: "James Patterson", commercial_potential: 29.6, strategy: "Volume Beast" },
    AuthorRow { name: "Terry Pratchett", commercial_potential: 27.3, strategy: "Fantasy Humor" },
    AuthorRow { name: "J.R.R. Tolkien", commercial_potential: 21.1, strategy: "Fantasy Cult" },
];

/// Warm-to-cool ramp for the author ranking, one entry per row.
pub const AUTHOR_RANK_COLORS: [&str; 8] = [
    "#FF1744", "#FF5722", "#FF9800", "#FFC107", "#8BC34A", "#4CAF50", "#009688", "#00BCD4",
];

/// Slice colors for the strategy-distribution pie, one per ranked strategy.
pub const STRATEGY_COLORS: [&str; 7] = [
    "#FFD700", "#FF6B6B", "#4ECDC4", "#96CEB4", "#FECA57", "#E74C3C", "#9B59B6",
];

/// Count distinct strategies across [`AUTHORS`], most common first.
/// Ties keep the order the strategies first appear in the ranking.
pub fn strategy_counts() -> Vec<(&'static str, usize)> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for row in &AUTHORS {
        match counts.iter_mut().find(|(s, _)| *s == row.strategy) {
            Some((_, n)) => *n += 1,
            None => counts.push((row.strategy, 1)),
        }
    }
    // Stable sort, so equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// One publisher performance row.
pub struct PublisherRow {
    pub name: &'static str,
    pub efficiency_pct: f64,
    pub volume: f64,
    pub strategy: &'static str,
}

pub const PUBLISHERS: [PublisherRow; 8] = [
    PublisherRow { name: "Vertigo", efficiency_pct: 90.0, volume: 10.0, strategy: "Premium" },
    PublisherRow { name: "Simon Pulse", efficiency_pct: 88.9, volume: 9.0, strategy: "YA Specialist" },
    PublisherRow { name: "Delta", efficiency_pct: 84.6, volume: 13.0, strategy: "Balanced" },
    PublisherRow { name: "HarperTorch", efficiency_pct: 80.0, volume: 10.0, strategy: "Romance" },
    PublisherRow { name: "Berkley", efficiency_pct: 70.6, volume: 17.0, strategy: "General" },
    PublisherRow { name: "Modern Library", efficiency_pct: 66.7, volume: 9.0, strategy: "Classic" },
    PublisherRow { name: "Ballantine", efficiency_pct: 63.2, volume: 19.0, strategy: "Popular" },
    PublisherRow { name: "Dell Publishing", efficiency_pct: 62.5, volume: 8.0, strategy: "Mystery" },
];

/// One user-engagement segment row.
pub struct SegmentRow {
    pub segment: &'static str,
    pub users: f64,
    pub avg_reviews: f64,
    pub engagement_pct: f64,
}

pub const SEGMENTS: [SegmentRow; 5] = [
    SegmentRow { segment: "Power", users: 9.0, avg_reviews: 24.3, engagement_pct: 45.8 },
    SegmentRow { segment: "Active", users: 151.0, avg_reviews: 17.1, engagement_pct: 43.0 },
    SegmentRow { segment: "Regular", users: 300.0, avg_reviews: 8.5, engagement_pct: 25.0 },
    SegmentRow { segment: "Occasional", users: 400.0, avg_reviews: 3.2, engagement_pct: 15.0 },
    SegmentRow { segment: "Novice", users: 240.0, avg_reviews: 1.1, engagement_pct: 8.0 },
];

pub const SEGMENT_COLORS: [&str; 5] = ["#FFD700", "#FF6B6B", "#4ECDC4", "#95E1D3", "#F38181"];

/// Reviews-per-user comparison for the productivity panel.
pub const PRODUCTIVITY: [(&str, f64); 3] = [
    ("Power Users", 24.3),
    ("Active Users", 17.1),
    ("Average User", 2.4),
];

pub const PRODUCTIVITY_COLORS: [&str; 3] = ["#FFD700", "#FF6B6B", "#CCCCCC"];

/// One strategic KPI row for the dashboard.
pub struct MetricRow {
    pub metric: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub color: &'static str,
}

pub const METRICS: [MetricRow; 6] = [
    MetricRow { metric: "Digital Dominance", value: 82.0, unit: "%", color: "#FF6B35" },
    MetricRow { metric: "Publishing Growth", value: 10.8, unit: "x", color: "#FF1744" },
    MetricRow { metric: "Top Author Potential", value: 66.9, unit: "pts", color: "#FFD700" },
    MetricRow { metric: "Best Publisher Efficiency", value: 90.0, unit: "%", color: "#4ECDC4" },
    MetricRow { metric: "Power User Multiplier", value: 15.0, unit: "x", color: "#9C27B0" },
    MetricRow { metric: "Engagement Threshold", value: 40.0, unit: "%", color: "#4CAF50" },
];

/// KPI bars at or above this value sit in the high-impact zone.
pub const HIGH_IMPACT_THRESHOLD: f64 = 50.0;
