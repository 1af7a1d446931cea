//! Annotated heatmaps for confusion matrices and cross-tabulations

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use super::{axis_label, render_err};
use crate::data::DataResult;
use crate::eval::metrics::CrossTab;

/// Color scale for heatmap cells
#[derive(Debug, Clone, Copy)]
pub enum HeatmapPalette {
    /// White-to-dark-blue, the confusion matrix scale
    Blues,
    /// Yellow-green-blue, the cross-tab heatmap scale
    YlGnBu,
}

impl HeatmapPalette {
    /// Map an intensity in [0, 1] to a cell color
    fn color(&self, t: f64) -> RGBColor {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Blues => lerp((247, 251, 255), (8, 48, 107), t),
            Self::YlGnBu => {
                if t < 0.5 {
                    lerp((255, 255, 217), (65, 182, 196), t * 2.0)
                } else {
                    lerp((65, 182, 196), (8, 29, 88), (t - 0.5) * 2.0)
                }
            }
        }
    }
}

fn lerp(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> RGBColor {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

/// Render a cross-tabulation as a count-annotated heatmap
///
/// The first row label is drawn at the top, matching the usual orientation
/// of a confusion matrix.
pub fn annotated_heatmap(
    path: &Path,
    tab: &CrossTab,
    title: &str,
    x_label: &str,
    y_label: &str,
    palette: HeatmapPalette,
    size: (u32, u32),
) -> DataResult<()> {
    let n_cols = tab.col_labels.len().max(1);
    let n_rows = tab.row_labels.len().max(1);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 22))
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(
            -0.5f64..(n_cols as f64 - 0.5),
            -0.5f64..(n_rows as f64 - 0.5),
        )
        .map_err(render_err)?;

    let col_labels = tab.col_labels.clone();
    let row_labels = tab.row_labels.clone();
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_labels(n_cols)
        .y_labels(n_rows)
        .x_label_formatter(&|v| axis_label(&col_labels, *v))
        .y_label_formatter(&|v| axis_label(&row_labels, (n_rows - 1) as f64 - *v))
        .draw()
        .map_err(render_err)?;

    let max = tab.max_count().max(1) as f64;
    let mut cells = Vec::new();
    let mut annotations = Vec::new();

    for (r, row) in tab.counts.iter().enumerate() {
        let y = (n_rows - 1 - r) as f64;
        for (c, &count) in row.iter().enumerate() {
            let t = count as f64 / max;
            cells.push(Rectangle::new(
                [(c as f64 - 0.5, y - 0.5), (c as f64 + 0.5, y + 0.5)],
                palette.color(t).filled(),
            ));

            let text_color = if t > 0.6 { &WHITE } else { &BLACK };
            let style = TextStyle::from(("sans-serif", 16).into_font())
                .pos(Pos::new(HPos::Center, VPos::Center))
                .color(text_color);
            annotations.push(Text::new(count.to_string(), (c as f64, y), style));
        }
    }

    chart.draw_series(cells).map_err(render_err)?;
    chart.draw_series(annotations).map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_endpoints() {
        let low = HeatmapPalette::Blues.color(0.0);
        let high = HeatmapPalette::Blues.color(1.0);
        assert_eq!((low.0, low.1, low.2), (247, 251, 255));
        assert_eq!((high.0, high.1, high.2), (8, 48, 107));
    }

    #[test]
    fn test_palette_clamps() {
        let over = HeatmapPalette::YlGnBu.color(2.0);
        assert_eq!((over.0, over.1, over.2), (8, 29, 88));
    }
}
