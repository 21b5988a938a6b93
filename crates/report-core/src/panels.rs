// File: crates/report-core/src/panels.rs
// Summary: Reusable panel renderers (pie, horizontal/vertical bars) over plotters.

use anyhow::Result;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::theme::{Theme, ANNOTATION_PT, CAPTION_PT, LABEL_PT};

/// One pie slice.
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
}

/// One bar, with its display label pre-formatted by the caller.
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub value_label: String,
    pub color: RGBColor,
}

/// Free-floating call-out placed at a category index plus an offset along
/// the value axis.
pub struct Note<'a> {
    pub text: &'a str,
    pub index: usize,
    pub offset: f64,
    pub color: RGBColor,
}

/// Horizontal ranking panel description.
pub struct HBarPanel<'a> {
    pub caption: &'a str,
    pub x_desc: &'a str,
    pub bars: &'a [Bar],
    pub x_max: f64,
    pub note: Option<Note<'a>>,
}

/// Vertical bar panel description.
pub struct VBarPanel<'a> {
    pub caption: &'a str,
    pub y_desc: &'a str,
    pub bars: &'a [Bar],
    pub y_max: f64,
    pub note: Option<Note<'a>>,
    /// Optional horizontal reference line with its label.
    pub reference: Option<(f64, &'a str)>,
}

fn caption_font(theme: &Theme) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, CAPTION_PT, FontStyle::Bold).color(&theme.caption_ink)
}

/// Pie with outer slice labels and in-slice percentages.
pub fn pie_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    theme: &Theme,
    caption: &str,
    slices: &[Slice],
    start_angle: f64,
) -> Result<()> {
    let (w, h) = area.dim_in_pixel();
    let caption_style = caption_font(theme).pos(Pos::new(HPos::Center, VPos::Top));
    area.draw(&Text::new(caption.to_string(), ((w / 2) as i32, 12), caption_style))?;

    let sizes: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let colors: Vec<RGBColor> = slices.iter().map(|s| s.color).collect();
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();

    let center = ((w / 2) as i32, (h / 2) as i32 + 16);
    let radius = f64::from(w.min(h)) * 0.28;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(start_angle);
    pie.label_style(("sans-serif", LABEL_PT).into_font().color(&theme.title_ink));
    pie.percentages(("sans-serif", LABEL_PT).into_font().color(&BLACK));
    area.draw(&pie)?;
    Ok(())
}

/// Horizontal ranking bars with per-row colors and end-of-bar value labels.
pub fn hbar_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    theme: &Theme,
    panel: &HBarPanel,
) -> Result<()> {
    let n = panel.bars.len();
    let mut chart = ChartBuilder::on(area)
        .caption(panel.caption, caption_font(theme))
        .margin(16)
        .set_label_area_size(LabelAreaPosition::Left, 150)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d(0.0..panel.x_max, (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => panel.bars[*i].label.clone(),
            _ => String::new(),
        })
        .x_desc(panel.x_desc)
        .axis_desc_style(("sans-serif", LABEL_PT).into_font().color(&theme.muted_ink))
        .label_style(("sans-serif", LABEL_PT).into_font().color(&theme.title_ink))
        .draw()?;

    chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
        Rectangle::new(
            [(0.0, SegmentValue::Exact(i)), (bar.value, SegmentValue::Exact(i + 1))],
            bar.color.filled(),
        )
    }))?;
    chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
        Rectangle::new(
            [(0.0, SegmentValue::Exact(i)), (bar.value, SegmentValue::Exact(i + 1))],
            theme.edge.stroke_width(1),
        )
    }))?;

    let value_style = TextStyle::from(("sans-serif", LABEL_PT).into_font())
        .color(&theme.title_ink)
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
        Text::new(
            bar.value_label.clone(),
            (bar.value + panel.x_max * 0.01, SegmentValue::CenterOf(i)),
            value_style.clone(),
        )
    }))?;

    if let Some(note) = &panel.note {
        let style = TextStyle::from(("sans-serif", ANNOTATION_PT).into_font())
            .color(&note.color)
            .pos(Pos::new(HPos::Left, VPos::Center));
        chart.draw_series(std::iter::once(Text::new(
            note.text.to_string(),
            (note.offset, SegmentValue::CenterOf(note.index)),
            style,
        )))?;
    }
    Ok(())
}

/// Vertical bars with value labels above each bar and an optional reference line.
pub fn vbar_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    theme: &Theme,
    panel: &VBarPanel,
) -> Result<()> {
    let n = panel.bars.len();
    let mut chart = ChartBuilder::on(area)
        .caption(panel.caption, caption_font(theme))
        .margin(16)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d((0..n).into_segmented(), 0.0..panel.y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => panel.bars[*i].label.clone(),
            _ => String::new(),
        })
        .y_desc(panel.y_desc)
        .axis_desc_style(("sans-serif", LABEL_PT).into_font().color(&theme.muted_ink))
        .label_style(("sans-serif", LABEL_PT).into_font().color(&theme.title_ink))
        .draw()?;

    chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
        Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), bar.value)],
            bar.color.filled(),
        )
    }))?;
    chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
        Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), bar.value)],
            theme.edge.stroke_width(1),
        )
    }))?;

    let value_style = TextStyle::from(("sans-serif", LABEL_PT).into_font())
        .color(&theme.title_ink)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
        Text::new(
            bar.value_label.clone(),
            (SegmentValue::CenterOf(i), bar.value + panel.y_max * 0.01),
            value_style.clone(),
        )
    }))?;

    if let Some((threshold, label)) = panel.reference {
        chart.draw_series(LineSeries::new(
            vec![(SegmentValue::Exact(0), threshold), (SegmentValue::Exact(n), threshold)],
            theme.reference.stroke_width(2),
        ))?;
        let style = TextStyle::from(("sans-serif", LABEL_PT).into_font())
            .color(&theme.reference)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(std::iter::once(Text::new(
            label.to_string(),
            (SegmentValue::CenterOf(n - 1), threshold + panel.y_max * 0.01),
            style,
        )))?;
    }

    if let Some(note) = &panel.note {
        let style = TextStyle::from(("sans-serif", ANNOTATION_PT).into_font())
            .color(&note.color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(std::iter::once(Text::new(
            note.text.to_string(),
            (SegmentValue::CenterOf(note.index), note.offset),
            style,
        )))?;
    }
    Ok(())
}
