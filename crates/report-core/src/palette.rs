// File: crates/report-core/src/palette.rs
// Summary: Hex color parsing and ramp interpolation for chart styling.

use plotters::style::RGBColor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("invalid hex color literal '{0}'")]
    BadHex(String),
}

/// Parse a `#RRGGBB` (or bare `RRGGBB`) literal into an [`RGBColor`].
pub fn parse_hex(code: &str) -> Result<RGBColor, PaletteError> {
    let digits = code.strip_prefix('#').unwrap_or(code);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaletteError::BadHex(code.to_string()));
    }
    let v = u32::from_str_radix(digits, 16).map_err(|_| PaletteError::BadHex(code.to_string()))?;
    Ok(RGBColor((v >> 16) as u8, (v >> 8) as u8, v as u8))
}

/// Parse a whole table of hex literals, failing on the first bad one.
pub fn parse_all(codes: &[&str]) -> Result<Vec<RGBColor>, PaletteError> {
    codes.iter().map(|c| parse_hex(c)).collect()
}

/// Linear interpolation across ordered color stops at position `t` in [0, 1].
/// t=0 returns the first stop, t=1 the last.
pub fn interpolate(stops: &[RGBColor], t: f64) -> RGBColor {
    match stops {
        [] => RGBColor(128, 128, 128),
        [only] => *only,
        _ => {
            let t = t.clamp(0.0, 1.0);
            let pos = t * (stops.len() - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(stops.len() - 1);
            let frac = pos - lo as f64;
            let mix = |a: u8, b: u8| (f64::from(a) * (1.0 - frac) + f64::from(b) * frac) as u8;
            RGBColor(
                mix(stops[lo].0, stops[hi].0),
                mix(stops[lo].1, stops[hi].1),
                mix(stops[lo].2, stops[hi].2),
            )
        }
    }
}

// Stops lifted from the RdYlGn diverging ramp, low (red) to high (green).
const RD_YL_GN: [RGBColor; 5] = [
    RGBColor(0xd7, 0x30, 0x27),
    RGBColor(0xfc, 0x8d, 0x59),
    RGBColor(0xfe, 0xe0, 0x8b),
    RGBColor(0x91, 0xcf, 0x60),
    RGBColor(0x1a, 0x98, 0x50),
];

/// Red-yellow-green quality ramp; `t` in [0, 1] maps worst to best.
pub fn red_yellow_green(t: f64) -> RGBColor {
    interpolate(&RD_YL_GN, t)
}
