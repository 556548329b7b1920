// src/chart_functions/common.rs
// Shared column/overlay plumbing for the OHLC-based charts.

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::PathElement;
use plotters::series::LineSeries;
use plotters::style::Color;

use log::warn;
use std::error::Error;

use crate::chart_framework::{draw_gradient_fill, IndexChart};
use crate::constants::{COLOR_SET, LINE_WIDTH_LEGEND, LINE_WIDTH_PLOT};
use crate::data_input::ohlc_frame::OhlcFrame;
use crate::overlays::pattern_evaluation::draw_pattern_evaluation;
use crate::overlays::price_flag::add_price_flag;
use crate::overlays::signal_evaluation::{draw_signal_evaluation, draw_verticals};
use crate::types::{ChartOptions, PatternSpan, SignalEvent};

/// `None` means "plot everything".
pub(crate) fn resolve_columns(frame: &OhlcFrame, plot_columns: Option<&[String]>) -> Vec<String> {
    match plot_columns {
        Some(columns) => columns.to_vec(),
        None => frame.column_names(),
    }
}

/// Min/max over the finite values of the requested columns.
/// Extends `(min, max)` in place; unknown columns are ignored here and
/// warned about when drawn.
pub(crate) fn extend_range_with_columns(
    frame: &OhlcFrame,
    columns: &[String],
    min: &mut f64,
    max: &mut f64,
) {
    for name in columns {
        if let Some(points) = frame.series_points(name) {
            for (_, value) in points {
                *min = min.min(value);
                *max = max.max(value);
            }
        }
    }
}

/// Draws the requested frame columns as line series in the rotating color
/// set, with optional gradient fill and end-of-series price flags.
/// Returns the number of labeled series (legend entries).
pub(crate) fn draw_column_series(
    chart: &mut IndexChart,
    area: &DrawingArea<BitMapBackend, Shift>,
    frame: &OhlcFrame,
    columns: &[String],
    options: &ChartOptions,
) -> Result<usize, Box<dyn Error>> {
    let last_index = if options.set_flags_at_the_end {
        Some(frame.len().saturating_sub(1) as f64)
    } else {
        None
    };

    let mut labeled = 0usize;
    for (i, name) in columns.iter().enumerate() {
        let Some(points) = frame.series_points(name) else {
            warn!("column '{name}' not found in dataset");
            continue;
        };
        if points.is_empty() {
            continue;
        }
        let color = COLOR_SET[i % COLOR_SET.len()];

        if options.gradient_fill {
            draw_gradient_fill(chart, &points, color)?;
        }

        chart
            .draw_series(LineSeries::new(
                points.iter().cloned(),
                color.stroke_width(LINE_WIDTH_PLOT),
            ))?
            .label(name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
        labeled += 1;

        if options.enable_flags {
            add_price_flag(chart, area, &points, color, last_index)?;
        }
    }
    Ok(labeled)
}

/// Signal and pattern overlay pipeline shared by the candlestick and
/// filled OHLC charts.
pub(crate) fn draw_overlays(
    chart: &mut IndexChart,
    area: &DrawingArea<BitMapBackend, Shift>,
    frame: &OhlcFrame,
    signals: &[SignalEvent],
    patterns: &[PatternSpan],
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    if !signals.is_empty() {
        if options.draw_verticals {
            draw_verticals(chart, signals)?;
        }
        if options.signal_evaluation {
            draw_signal_evaluation(chart, area, signals, options)?;
        }
    }
    if !patterns.is_empty() && options.pattern_evaluation {
        draw_pattern_evaluation(chart, frame, patterns, options)?;
    }
    Ok(())
}

// src/chart_functions/common.rs
