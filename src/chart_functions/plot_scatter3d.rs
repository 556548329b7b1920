// src/chart_functions/plot_scatter3d.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::Circle;
use plotters::style::{Color, IntoFont};

use std::error::Error;

use crate::chart_framework::{padded_range, render_to_file};
use crate::constants::{
    ACCENT_COLOR, FONT_FAMILY, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, LABEL_COLOR,
    PLOT_HEIGHT, PLOT_WIDTH, RANGE_PAD_RATIO, SIGNAL_DOT_RADIUS,
};
use crate::types::{ChartError, ChartOptions};

/// Renders a 3D scatter plot. When `class_conditions` is given (one value
/// per point), points whose condition exceeds `threshold` are drawn in the
/// accent color and the rest in the label grey; without conditions all
/// points use `options.color` or the label grey.
pub fn plot_scatter_3d(
    data: &[(f64, f64, f64)],
    class_conditions: Option<&[f64]>,
    threshold: f64,
    options: &ChartOptions,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    render_to_file(output_filename, (PLOT_WIDTH, PLOT_HEIGHT), |area| {
        draw_scatter_3d_on(area, data, class_conditions, threshold, options)
    })
}

pub fn draw_scatter_3d_on(
    area: &DrawingArea<BitMapBackend, Shift>,
    data: &[(f64, f64, f64)],
    class_conditions: Option<&[f64]>,
    threshold: f64,
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    if data.is_empty() {
        return Err(ChartError::EmptyData.into());
    }
    if let Some(conditions) = class_conditions {
        if conditions.len() != data.len() {
            return Err(ChartError::ClassConditionMismatch {
                conditions: conditions.len(),
                data: data.len(),
            }
            .into());
        }
    }

    let mut mins = [f64::INFINITY; 3];
    let mut maxs = [f64::NEG_INFINITY; 3];
    for &(x, y, z) in data {
        for (i, v) in [x, y, z].into_iter().enumerate() {
            if v.is_finite() {
                mins[i] = mins[i].min(v);
                maxs[i] = maxs[i].max(v);
            }
        }
    }
    if mins.iter().zip(maxs.iter()).any(|(lo, hi)| lo > hi) {
        return Err(ChartError::NoFiniteValues.into());
    }
    let (x_lo, x_hi) = padded_range(mins[0], maxs[0], RANGE_PAD_RATIO);
    let (y_lo, y_hi) = padded_range(mins[1], maxs[1], RANGE_PAD_RATIO);
    let (z_lo, z_hi) = padded_range(mins[2], maxs[2], RANGE_PAD_RATIO);

    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if let Some(title) = &options.title {
        builder.caption(
            title,
            (FONT_FAMILY, FONT_SIZE_CHART_TITLE)
                .into_font()
                .color(&LABEL_COLOR),
        );
    }
    let mut chart = builder.build_cartesian_3d(x_lo..x_hi, y_lo..y_hi, z_lo..z_hi)?;

    chart
        .configure_axes()
        .light_grid_style(LABEL_COLOR.mix(0.15))
        .label_style(
            (FONT_FAMILY, FONT_SIZE_AXIS_LABEL)
                .into_font()
                .color(&LABEL_COLOR),
        )
        .draw()?;

    match class_conditions {
        Some(conditions) => {
            chart.draw_series(data.iter().zip(conditions.iter()).map(|(&point, &cond)| {
                let color = if cond > threshold {
                    ACCENT_COLOR
                } else {
                    LABEL_COLOR
                };
                Circle::new(point, SIGNAL_DOT_RADIUS, color.filled())
            }))?;
        }
        None => {
            let color = options.color.unwrap_or(LABEL_COLOR);
            chart.draw_series(
                data.iter()
                    .map(|&point| Circle::new(point, SIGNAL_DOT_RADIUS, color.filled())),
            )?;
        }
    }
    Ok(())
}

// src/chart_functions/plot_scatter3d.rs
