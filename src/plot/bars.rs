//! Stacked and grouped bar charts over a cross-tabulation

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use super::{axis_label, render_err};
use crate::data::DataResult;
use crate::eval::metrics::CrossTab;

const BAR_HALF_WIDTH: f64 = 0.35;

/// Render a 100%-stacked bar chart: one bar per row label, segments per
/// column label, each segment annotated with its percentage
pub fn stacked_bar_chart(path: &Path, tab: &CrossTab, title: &str, x_label: &str) -> DataResult<()> {
    let n_rows = tab.row_labels.len().max(1);

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 22))
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(n_rows as f64 - 0.5), 0.0f64..100.0f64)
        .map_err(render_err)?;

    let row_labels = tab.row_labels.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .y_desc("Percentage")
        .x_labels(n_rows)
        .x_label_formatter(&|v| axis_label(&row_labels, *v))
        .draw()
        .map_err(render_err)?;

    let percentages = tab.row_percentages();

    for (c, col_label) in tab.col_labels.iter().enumerate() {
        let color = Palette99::pick(c).to_rgba();

        let segments: Vec<_> = (0..tab.row_labels.len())
            .map(|r| {
                let base: f64 = percentages[r][..c].iter().sum();
                let height = percentages[r][c];
                Rectangle::new(
                    [
                        (r as f64 - BAR_HALF_WIDTH, base),
                        (r as f64 + BAR_HALF_WIDTH, base + height),
                    ],
                    color.filled(),
                )
            })
            .collect();

        chart
            .draw_series(segments)
            .map_err(render_err)?
            .label(col_label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    // Percentage labels centered on each non-empty segment
    let mut annotations = Vec::new();
    for (r, row) in percentages.iter().enumerate() {
        let mut base = 0.0;
        for &height in row {
            if height > 0.0 {
                let style = TextStyle::from(("sans-serif", 13).into_font())
                    .pos(Pos::new(HPos::Center, VPos::Center));
                annotations.push(Text::new(
                    format!("{:.1}%", height),
                    (r as f64, base + height / 2.0),
                    style,
                ));
            }
            base += height;
        }
    }
    chart.draw_series(annotations).map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Render a grouped bar chart of cross-tab counts: one group per row label,
/// one bar per column label
pub fn grouped_bar_chart(path: &Path, tab: &CrossTab, title: &str, x_label: &str) -> DataResult<()> {
    let n_rows = tab.row_labels.len().max(1);
    let n_cols = tab.col_labels.len().max(1);
    let y_max = tab.max_count().max(1) as f64 * 1.1;

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 22))
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(n_rows as f64 - 0.5), 0.0f64..y_max)
        .map_err(render_err)?;

    let row_labels = tab.row_labels.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_label)
        .y_desc("Count")
        .x_labels(n_rows)
        .x_label_formatter(&|v| axis_label(&row_labels, *v))
        .draw()
        .map_err(render_err)?;

    let bar_width = 2.0 * BAR_HALF_WIDTH / n_cols as f64;

    for (c, col_label) in tab.col_labels.iter().enumerate() {
        let color = Palette99::pick(c).to_rgba();

        let bars: Vec<_> = tab
            .counts
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let x0 = r as f64 - BAR_HALF_WIDTH + c as f64 * bar_width;
                Rectangle::new(
                    [(x0, 0.0), (x0 + bar_width, row[c] as f64)],
                    color.filled(),
                )
            })
            .collect();

        chart
            .draw_series(bars)
            .map_err(render_err)?
            .label(col_label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
