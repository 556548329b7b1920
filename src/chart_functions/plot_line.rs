// src/chart_functions/plot_line.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;

use std::error::Error;

use crate::chart_framework::{
    build_styled_chart, draw_reference_lines, draw_series_legend, padded_range, render_to_file,
};
use crate::chart_functions::common::{
    draw_column_series, extend_range_with_columns, resolve_columns,
};
use crate::constants::{PLOT_HEIGHT, PLOT_WIDTH, RANGE_PAD_RATIO};
use crate::data_input::ohlc_frame::OhlcFrame;
use crate::types::{ChartError, ChartOptions};

/// Renders a line chart of the requested frame columns (`None` plots every
/// column), with the rotating color set, optional gradient fill and
/// end-of-series price flags.
pub fn plot_line(
    frame: &OhlcFrame,
    plot_columns: Option<&[String]>,
    options: &ChartOptions,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    render_to_file(output_filename, (PLOT_WIDTH, PLOT_HEIGHT), |area| {
        draw_line_on(area, frame, plot_columns, options)
    })
}

pub fn draw_line_on(
    area: &DrawingArea<BitMapBackend, Shift>,
    frame: &OhlcFrame,
    plot_columns: Option<&[String]>,
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    frame.validate()?;
    let columns = resolve_columns(frame, plot_columns);

    let mut value_min = f64::INFINITY;
    let mut value_max = f64::NEG_INFINITY;
    extend_range_with_columns(frame, &columns, &mut value_min, &mut value_max);
    if value_min > value_max {
        return Err(ChartError::NoFiniteValues.into());
    }
    let (y_min, y_max) = padded_range(value_min, value_max, RANGE_PAD_RATIO);
    let x_range = -1.0..frame.len() as f64;

    let mut chart = build_styled_chart(area, Some(frame), x_range, y_min..y_max, options)?;
    let labeled = draw_column_series(&mut chart, area, frame, &columns, options)?;
    draw_reference_lines(&mut chart, options)?;
    if options.legend && labeled > 0 {
        draw_series_legend(&mut chart)?;
    }
    Ok(())
}

// src/chart_functions/plot_line.rs
