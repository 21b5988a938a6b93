// File: crates/report-core/src/charts.rs
// Summary: The five chart generators and the all-charts driver entry.

use std::fs;
use std::path::Path;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::datasets;
use crate::palette;
use crate::panels::{self, Bar, HBarPanel, Note, Slice, VBarPanel};
use crate::theme::{Theme, ANNOTATION_PT, CAPTION_PT, LABEL_PT, TITLE_PT};
use crate::trend;

/// Directory every figure is written into, relative to the working directory.
pub const OUTPUT_DIR: &str = "visualizations";

pub const PUBLISHING_EXPLOSION_PNG: &str = "publishing_explosion.png";
pub const AUTHOR_SUCCESS_MATRIX_PNG: &str = "author_success_matrix.png";
pub const PUBLISHER_PERFORMANCE_PNG: &str = "publisher_performance.png";
pub const USER_ENGAGEMENT_PYRAMID_PNG: &str = "user_engagement_pyramid.png";
pub const STRATEGIC_DASHBOARD_PNG: &str = "strategic_dashboard.png";

/// Every file the driver writes, in generation order.
pub const CHART_FILES: [&str; 5] = [
    PUBLISHING_EXPLOSION_PNG,
    AUTHOR_SUCCESS_MATRIX_PNG,
    PUBLISHER_PERFORMANCE_PNG,
    USER_ENGAGEMENT_PYRAMID_PNG,
    STRATEGIC_DASHBOARD_PNG,
];

const TWO_PANEL: (u32, u32) = (1600, 800);
const ONE_PANEL: (u32, u32) = (1280, 800);

/// Render every chart into `out_dir`, creating it if missing.
pub fn generate_all_charts(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    publishing_explosion(out_dir)?;
    author_success_matrix(out_dir)?;
    publisher_performance(out_dir)?;
    user_engagement_pyramid(out_dir)?;
    strategic_dashboard(out_dir)?;
    Ok(())
}

/// Open a figure-sized PNG backend, fill the background and draw the title,
/// returning the area left below it.
fn figure_root<'a>(
    path: &'a Path,
    size: (u32, u32),
    theme: &Theme,
    title: &str,
) -> Result<DrawingArea<BitMapBackend<'a>, Shift>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&theme.background)?;
    let style = FontDesc::new(FontFamily::SansSerif, TITLE_PT, FontStyle::Bold)
        .color(&theme.title_ink);
    let below = root.titled(title, style)?;
    Ok(below)
}

/// Era distribution pie beside the books-per-year productivity bars.
pub fn publishing_explosion(out_dir: &Path) -> Result<()> {
    let data = datasets::era_stats();
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(PUBLISHING_EXPLOSION_PNG);
    let theme = Theme::report();

    {
        let root = figure_root(&path, TWO_PANEL, &theme, "The Digital Publishing Explosion")?;
        let areas = root.split_evenly((1, 2));

        let mut slices = Vec::new();
        for i in 0..data.eras.len() {
            slices.push(Slice {
                label: data.eras[i].to_string(),
                value: data.books[i],
                color: palette::parse_hex(data.pie_colors[i])?,
            });
        }
        panels::pie_panel(
            &areas[0],
            &theme,
            "Era Distribution (82% post-2000)",
            &slices,
            90.0,
        )?;

        let mut bars = Vec::new();
        for i in 0..data.eras.len() {
            bars.push(Bar {
                label: data.eras[i].to_string(),
                value: data.books_per_year[i],
                value_label: format!("{:.1}", data.books_per_year[i]),
                color: palette::parse_hex(data.bar_colors[i])?,
            });
        }
        panels::vbar_panel(
            &areas[1],
            &theme,
            &VBarPanel {
                caption: "Productivity Revolution (10.8x growth)",
                y_desc: "Books published per year",
                bars: &bars,
                y_max: 50.0,
                note: Some(Note {
                    text: "10.8x GROWTH",
                    index: 0,
                    offset: 36.0,
                    color: theme.annotation,
                }),
                reference: None,
            },
        )?;
        root.present()?;
    }

    println!("Wrote {}", path.display());
    Ok(())
}

/// Commercial-potential ranking beside the strategy-distribution pie.
pub fn author_success_matrix(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(AUTHOR_SUCCESS_MATRIX_PNG);
    let theme = Theme::report();

    {
        let root = figure_root(
            &path,
            TWO_PANEL,
            &theme,
            "Author Success Matrix: Commercial Potential Leaders",
        )?;
        let areas = root.split_evenly((1, 2));

        let mut bars = Vec::new();
        for (row, color) in datasets::AUTHORS.iter().zip(datasets::AUTHOR_RANK_COLORS) {
            bars.push(Bar {
                label: row.name.to_string(),
                value: row.commercial_potential,
                value_label: format!("{:.1}", row.commercial_potential),
                color: palette::parse_hex(color)?,
            });
        }
        panels::hbar_panel(
            &areas[0],
            &theme,
            &HBarPanel {
                caption: "Commercial Potential Ranking",
                x_desc: "Commercial potential score",
                bars: &bars,
                x_max: 100.0,
                note: Some(Note {
                    text: "QUEEN OF COMMERCE",
                    index: 0,
                    offset: 70.0,
                    color: theme.annotation,
                }),
            },
        )?;

        let counts = datasets::strategy_counts();
        let mut slices = Vec::new();
        for ((strategy, count), color) in counts.iter().zip(datasets::STRATEGY_COLORS) {
            slices.push(Slice {
                label: strategy.to_string(),
                value: *count as f64,
                color: palette::parse_hex(color)?,
            });
        }
        panels::pie_panel(
            &areas[1],
            &theme,
            "Success Strategy Distribution",
            &slices,
            45.0,
        )?;
        root.present()?;
    }

    println!("Wrote {}", path.display());
    Ok(())
}

/// Efficiency ranking beside the volume-vs-quality bubble scatter.
pub fn publisher_performance(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(PUBLISHER_PERFORMANCE_PNG);
    let theme = Theme::report();

    {
        let root = figure_root(
            &path,
            TWO_PANEL,
            &theme,
            "Publisher Performance: Specialization Beats Volume",
        )?;
        let areas = root.split_evenly((1, 2));

        let mut bars = Vec::new();
        for row in &datasets::PUBLISHERS {
            bars.push(Bar {
                label: row.name.to_string(),
                value: row.efficiency_pct,
                value_label: format!("{}%", row.efficiency_pct),
                color: palette::red_yellow_green(row.efficiency_pct / 100.0),
            });
        }
        panels::hbar_panel(
            &areas[0],
            &theme,
            &HBarPanel {
                caption: "Publisher Efficiency Score (%)",
                x_desc: "Efficiency score (% high-quality books)",
                bars: &bars,
                x_max: 100.0,
                note: None,
            },
        )?;

        volume_quality_panel(&areas[1], &theme)?;
        root.present()?;
    }

    println!("Wrote {}", path.display());
    Ok(())
}

/// Bubble scatter of publisher volume against efficiency with a trend overlay.
fn volume_quality_panel(area: &DrawingArea<BitMapBackend, Shift>, theme: &Theme) -> Result<()> {
    let caption_style =
        FontDesc::new(FontFamily::SansSerif, CAPTION_PT, FontStyle::Bold).color(&theme.caption_ink);
    let mut chart = ChartBuilder::on(area)
        .caption("Volume vs Quality (specialization wins)", caption_style)
        .margin(16)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d(5.0..22.0, 55.0..95.0)?;

    chart
        .configure_mesh()
        .x_desc("Volume (number of books)")
        .y_desc("Efficiency score (%)")
        .axis_desc_style(("sans-serif", LABEL_PT).into_font().color(&theme.muted_ink))
        .label_style(("sans-serif", LABEL_PT).into_font().color(&theme.title_ink))
        .draw()?;

    // Trend first so the markers sit on top of it.
    let points: Vec<(f64, f64)> =
        datasets::PUBLISHERS.iter().map(|r| (r.volume, r.efficiency_pct)).collect();
    if let Some((slope, intercept)) = trend::linear_fit(&points) {
        let trend_color = theme.trend;
        chart
            .draw_series(LineSeries::new(
                [5.5, 21.5].map(|x| (x, slope * x + intercept)),
                trend_color.stroke_width(2),
            ))?
            .label("Trend: quality falls as volume rises")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 24, y)], trend_color.stroke_width(2))
            });
    }

    chart.draw_series(datasets::PUBLISHERS.iter().map(|r| {
        let fill = palette::red_yellow_green(r.efficiency_pct / 100.0);
        Circle::new((r.volume, r.efficiency_pct), bubble_radius(r.volume), fill.filled())
    }))?;
    chart.draw_series(datasets::PUBLISHERS.iter().map(|r| {
        Circle::new(
            (r.volume, r.efficiency_pct),
            bubble_radius(r.volume),
            theme.edge.stroke_width(2),
        )
    }))?;

    let note_style = TextStyle::from(("sans-serif", ANNOTATION_PT).into_font())
        .color(&theme.annotation)
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(std::iter::once(Text::new(
        "Vertigo (90% efficiency)",
        (11.0, 90.0),
        note_style,
    )))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .label_font(("sans-serif", LABEL_PT).into_font().color(&theme.title_ink))
        .draw()?;
    Ok(())
}

/// Marker radius in pixels for a publisher's volume.
fn bubble_radius(volume: f64) -> i32 {
    (volume * 1.4).round() as i32
}

/// Segment-count pyramid beside the review-productivity comparison.
pub fn user_engagement_pyramid(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(USER_ENGAGEMENT_PYRAMID_PNG);
    let theme = Theme::report();

    {
        let root = figure_root(
            &path,
            TWO_PANEL,
            &theme,
            "User Engagement Hierarchy: The Power User Advantage",
        )?;
        let areas = root.split_evenly((1, 2));

        let mut bars = Vec::new();
        for (row, color) in datasets::SEGMENTS.iter().zip(datasets::SEGMENT_COLORS) {
            bars.push(Bar {
                label: row.segment.to_string(),
                value: row.users,
                value_label: format!("{:.0}", row.users),
                color: palette::parse_hex(color)?,
            });
        }
        panels::vbar_panel(
            &areas[0],
            &theme,
            &VBarPanel {
                caption: "User Engagement Pyramid (power users = 0.8%)",
                y_desc: "Number of users",
                bars: &bars,
                y_max: 470.0,
                note: Some(Note {
                    text: "ELITE (0.8%)",
                    index: 0,
                    offset: 440.0,
                    color: palette::parse_hex("#B8860B")?,
                }),
                reference: None,
            },
        )?;

        let mut bars = Vec::new();
        for ((label, reviews), color) in
            datasets::PRODUCTIVITY.iter().zip(datasets::PRODUCTIVITY_COLORS)
        {
            bars.push(Bar {
                label: label.to_string(),
                value: *reviews,
                value_label: format!("{:.1}", reviews),
                color: palette::parse_hex(color)?,
            });
        }
        panels::vbar_panel(
            &areas[1],
            &theme,
            &VBarPanel {
                caption: "Review Productivity (15x more productive)",
                y_desc: "Average reviews per user",
                bars: &bars,
                y_max: 30.0,
                note: Some(Note {
                    text: "15x MORE VALUABLE",
                    index: 0,
                    offset: 27.5,
                    color: theme.annotation,
                }),
                reference: None,
            },
        )?;
        root.present()?;
    }

    println!("Wrote {}", path.display());
    Ok(())
}

/// Single-panel KPI dashboard with the high-impact reference line.
pub fn strategic_dashboard(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(STRATEGIC_DASHBOARD_PNG);
    let theme = Theme::report();

    {
        let root = figure_root(&path, ONE_PANEL, &theme, "Strategic Insights Dashboard")?;

        let mut bars = Vec::new();
        for row in &datasets::METRICS {
            bars.push(Bar {
                label: row.metric.to_string(),
                value: row.value,
                value_label: format!("{}{}", row.value, row.unit),
                color: palette::parse_hex(row.color)?,
            });
        }
        panels::vbar_panel(
            &root,
            &theme,
            &VBarPanel {
                caption: "Key performance indicators for reading platform strategy",
                y_desc: "Metric value",
                bars: &bars,
                y_max: 100.0,
                note: None,
                reference: Some((datasets::HIGH_IMPACT_THRESHOLD, "High Impact Zone")),
            },
        )?;
        root.present()?;
    }

    println!("Wrote {}", path.display());
    Ok(())
}
