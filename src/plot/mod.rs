//! Chart rendering
//!
//! All charts are drawn with `plotters` onto PNG files. Each function takes
//! an output path plus the already-extracted data; none of them touch the
//! dataset on disk.

pub mod bars;
pub mod histogram;
pub mod matrix;
pub mod scatter;

pub use bars::{grouped_bar_chart, stacked_bar_chart};
pub use histogram::class_split_histograms;
pub use matrix::{annotated_heatmap, HeatmapPalette};
pub use scatter::scatter_with_regression;

use crate::data::DataError;

/// Convert a plotters drawing error into the crate error type
pub(crate) fn render_err<E: std::fmt::Display>(err: E) -> DataError {
    DataError::Render(err.to_string())
}

/// Tick-label formatter for categorical axes drawn on an f64 coordinate:
/// labels sit at integer positions, any other tick renders empty
pub(crate) fn axis_label(labels: &[String], value: f64) -> String {
    let nearest = value.round();
    if (value - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    labels
        .get(nearest as usize)
        .cloned()
        .unwrap_or_default()
}
