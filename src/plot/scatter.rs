//! Scatter plot with a least-squares regression line

use ndarray::Array1;
use plotters::prelude::*;
use std::path::Path;

use super::render_err;
use crate::data::DataResult;

/// Render a scatter plot of `y` against `x` with a fitted regression line
pub fn scatter_with_regression(
    path: &Path,
    x: &Array1<f64>,
    y: &Array1<f64>,
    x_label: &str,
    y_label: &str,
) -> DataResult<()> {
    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let (x_min, x_max) = padded_range(x);
    let (y_min, y_max) = padded_range(y);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(45)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            x.iter()
                .zip(y.iter())
                .map(|(&xv, &yv)| Circle::new((xv, yv), 3, BLUE.mix(0.5).filled())),
        )
        .map_err(render_err)?;

    if let Some((slope, intercept)) = least_squares(x, y) {
        chart
            .draw_series(LineSeries::new(
                [
                    (x_min, slope * x_min + intercept),
                    (x_max, slope * x_max + intercept),
                ],
                &RED,
            ))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}

/// Fit y = slope * x + intercept; None when x has no variance
pub fn least_squares(x: &Array1<f64>, y: &Array1<f64>) -> Option<(f64, f64)> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }

    let n = x.len() as f64;
    let x_mean = x.mean().unwrap_or(0.0);
    let y_mean = y.mean().unwrap_or(0.0);

    let cov: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xv, yv)| (xv - x_mean) * (yv - y_mean))
        .sum::<f64>()
        / n;
    let var: f64 = x.iter().map(|xv| (xv - x_mean).powi(2)).sum::<f64>() / n;

    if var < 1e-12 {
        return None;
    }

    let slope = cov / var;
    Some((slope, y_mean - slope * x_mean))
}

fn padded_range(values: &Array1<f64>) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let pad = if (max - min).abs() < 1e-12 {
        0.5
    } else {
        (max - min) * 0.05
    };

    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_least_squares_exact_line() {
        let x = array![0.0, 1.0, 2.0, 3.0];
        let y = array![1.0, 3.0, 5.0, 7.0];

        let (slope, intercept) = least_squares(&x, &y).unwrap();
        assert!((slope - 2.0).abs() < 1e-10);
        assert!((intercept - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_least_squares_constant_x() {
        let x = array![2.0, 2.0, 2.0];
        let y = array![1.0, 2.0, 3.0];
        assert!(least_squares(&x, &y).is_none());
    }

    #[test]
    fn test_padded_range() {
        let values = array![0.0, 10.0];
        let (lo, hi) = padded_range(&values);
        assert!(lo < 0.0 && hi > 10.0);

        let flat = array![4.0, 4.0];
        let (lo, hi) = padded_range(&flat);
        assert!(lo < 4.0 && hi > 4.0);
    }
}
