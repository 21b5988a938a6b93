// File: crates/report-core/src/theme.rs
// Summary: Report theming for figure chrome (inks, accents, font sizes).

use plotters::style::RGBColor;

/// Figure-level title size in points.
pub const TITLE_PT: f64 = 38.0;
/// Per-panel caption size.
pub const CAPTION_PT: f64 = 24.0;
/// Axis tick and value-label size.
pub const LABEL_PT: f64 = 16.0;
/// Call-out annotation size.
pub const ANNOTATION_PT: f64 = 20.0;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: RGBColor,
    pub title_ink: RGBColor,
    pub caption_ink: RGBColor,
    pub muted_ink: RGBColor,
    pub annotation: RGBColor,
    pub reference: RGBColor,
    pub trend: RGBColor,
    pub edge: RGBColor,
}

impl Theme {
    /// White publication theme used by every report figure.
    pub fn report() -> Self {
        Self {
            background: RGBColor(0xff, 0xff, 0xff),
            title_ink: RGBColor(0x1f, 0x29, 0x37),
            caption_ink: RGBColor(0x37, 0x41, 0x51),
            muted_ink: RGBColor(0x6b, 0x72, 0x80),
            annotation: RGBColor(0xc0, 0x1c, 0x28),
            reference: RGBColor(0xe8, 0x8b, 0x00),
            trend: RGBColor(0xd3, 0x2f, 0x2f),
            edge: RGBColor(0x11, 0x11, 0x11),
        }
    }
}
