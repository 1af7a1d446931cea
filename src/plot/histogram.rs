//! Side-by-side frequency histograms of predictions split by class

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use super::render_err;
use crate::data::DataResult;

const BINS: usize = 20;

/// Render two 20-bin histograms in one image: predictions for ground-truth
/// class 0 on the left, class 1 on the right
pub fn class_split_histograms(
    path: &Path,
    class0: &[f64],
    class1: &[f64],
    value_label: &str,
) -> DataResult<()> {
    let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let panels = root.split_evenly((1, 2));
    draw_panel(
        &panels[0],
        class0,
        "Predicted Probabilities - Class 0",
        value_label,
        BLUE,
    )?;
    draw_panel(
        &panels[1],
        class1,
        "Predicted Probabilities - Class 1",
        value_label,
        RGBColor(255, 165, 0),
    )?;

    root.present().map_err(render_err)?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    values: &[f64],
    title: &str,
    value_label: &str,
    color: RGBColor,
) -> DataResult<()> {
    let (min, max) = value_range(values);
    let width = (max - min) / BINS as f64;

    let mut counts = vec![0usize; BINS];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(BINS - 1);
        counts[idx] += 1;
    }

    let y_max = counts.iter().copied().max().unwrap_or(0).max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .caption(title, ("sans-serif", 18))
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(min..max, 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(value_label)
        .y_desc("Frequency")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = min + i as f64 * width;
            Rectangle::new([(x0, 0.0), (x0 + width, count as f64)], color.mix(0.7).filled())
        }))
        .map_err(render_err)?;

    Ok(())
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        (0.0, 1.0)
    } else if (max - min).abs() < 1e-12 {
        (min, min + 1.0)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range() {
        assert_eq!(value_range(&[0.1, 0.9, 0.5]), (0.1, 0.9));
        assert_eq!(value_range(&[]), (0.0, 1.0));
        assert_eq!(value_range(&[0.3, 0.3]), (0.3, 1.3));
    }
}
