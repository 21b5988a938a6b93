// File: crates/report-core/src/lib.rs
// Summary: Core library entry point; exports datasets, palette, panels and chart generators.

pub mod charts;
pub mod datasets;
pub mod palette;
pub mod panels;
pub mod theme;
pub mod trend;

pub use charts::{generate_all_charts, CHART_FILES, OUTPUT_DIR};
pub use palette::PaletteError;
pub use theme::Theme;
