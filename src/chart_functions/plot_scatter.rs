// src/chart_functions/plot_scatter.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::Circle;
use plotters::style::Color;

use std::error::Error;

use crate::chart_framework::{
    build_styled_chart, draw_reference_lines, padded_range, render_to_file,
};
use crate::constants::{ACCENT_COLOR, PLOT_HEIGHT, PLOT_WIDTH, RANGE_PAD_RATIO, SIGNAL_DOT_RADIUS};
use crate::types::{ChartError, ChartOptions};

/// Renders a 2D scatter plot of `(x, y)` points in the accent color
/// (overridable through `options.color`).
pub fn plot_scatter(
    data: &[(f64, f64)],
    options: &ChartOptions,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    render_to_file(output_filename, (PLOT_WIDTH, PLOT_HEIGHT), |area| {
        draw_scatter_on(area, data, options)
    })
}

pub fn draw_scatter_on(
    area: &DrawingArea<BitMapBackend, Shift>,
    data: &[(f64, f64)],
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    if data.is_empty() {
        return Err(ChartError::EmptyData.into());
    }
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in data {
        if x.is_finite() && y.is_finite() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if x_min > x_max {
        return Err(ChartError::NoFiniteValues.into());
    }
    let (x_lo, x_hi) = padded_range(x_min, x_max, RANGE_PAD_RATIO);
    let (y_lo, y_hi) = padded_range(y_min, y_max, RANGE_PAD_RATIO);

    let mut chart = build_styled_chart(area, None, x_lo..x_hi, y_lo..y_hi, options)?;

    let color = options.color.unwrap_or(ACCENT_COLOR);
    chart.draw_series(
        data.iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&point| Circle::new(point, SIGNAL_DOT_RADIUS, color.filled())),
    )?;

    draw_reference_lines(&mut chart, options)?;
    Ok(())
}

// src/chart_functions/plot_scatter.rs
