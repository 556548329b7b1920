// src/chart_functions/plot_candlestick.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{PathElement, Rectangle};
use plotters::style::Color;

use std::error::Error;

use crate::chart_framework::{
    build_styled_chart, draw_reference_lines, draw_series_legend, padded_range, render_to_file,
};
use crate::chart_functions::common::{
    draw_column_series, draw_overlays, extend_range_with_columns, resolve_columns,
};
use crate::constants::{
    ACCENT_COLOR, CANDLE_BODY_HALF_WIDTH, LABEL_COLOR, LINE_WIDTH_PLOT, PLOT_HEIGHT, PLOT_WIDTH,
    PRICE_PAD_RATIO,
};
use crate::data_input::ohlc_frame::OhlcFrame;
use crate::types::{ChartOptions, PatternSpan, SignalEvent};

/// Renders a candlestick chart with signal/pattern overlays to a PNG file.
///
/// `plot_columns` selects frame columns drawn as lines over the candles
/// (`None` plots every column).
pub fn plot_candlestick(
    frame: &OhlcFrame,
    signals: &[SignalEvent],
    patterns: &[PatternSpan],
    plot_columns: Option<&[String]>,
    options: &ChartOptions,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    render_to_file(output_filename, (PLOT_WIDTH, PLOT_HEIGHT), |area| {
        draw_candlestick_on(area, frame, signals, patterns, plot_columns, options)
    })
}

/// Draws the candlestick chart into an existing drawing area, for callers
/// composing multiple charts on one canvas.
pub fn draw_candlestick_on(
    area: &DrawingArea<BitMapBackend, Shift>,
    frame: &OhlcFrame,
    signals: &[SignalEvent],
    patterns: &[PatternSpan],
    plot_columns: Option<&[String]>,
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    frame.validate()?;
    let columns = resolve_columns(frame, plot_columns);

    let (mut price_min, mut price_max) = frame.price_range()?;
    extend_range_with_columns(frame, &columns, &mut price_min, &mut price_max);
    let (y_min, y_max) = padded_range(price_min, price_max, PRICE_PAD_RATIO);
    let x_range = -1.0..frame.len() as f64;

    let mut chart = build_styled_chart(area, Some(frame), x_range, y_min..y_max, options)?;

    // Candle bodies as filled rectangles, wicks as one-segment paths.
    // Up candles in the accent color, down candles in the label grey.
    let mut bodies = Vec::new();
    let mut wicks = Vec::new();
    for i in 0..frame.len() {
        let (open, high, low, close) = (
            frame.open[i],
            frame.high[i],
            frame.low[i],
            frame.close[i],
        );
        if ![open, high, low, close].iter().all(|v| v.is_finite()) {
            continue;
        }
        let x = i as f64;
        let up = close > open;
        let color = if up { ACCENT_COLOR } else { LABEL_COLOR };
        bodies.push(Rectangle::new(
            [
                (x - CANDLE_BODY_HALF_WIDTH, open),
                (x + CANDLE_BODY_HALF_WIDTH, close),
            ],
            color.filled(),
        ));

        let (body_top, body_bottom) = if up { (close, open) } else { (open, close) };
        if body_top < high {
            wicks.push(PathElement::new(
                vec![(x, body_top), (x, high)],
                color.stroke_width(LINE_WIDTH_PLOT),
            ));
        }
        if low < body_bottom {
            wicks.push(PathElement::new(
                vec![(x, low), (x, body_bottom)],
                color.stroke_width(LINE_WIDTH_PLOT),
            ));
        }
    }
    chart.draw_series(wicks)?;
    chart.draw_series(bodies)?;

    draw_overlays(&mut chart, area, frame, signals, patterns, options)?;
    let labeled = draw_column_series(&mut chart, area, frame, &columns, options)?;
    draw_reference_lines(&mut chart, options)?;
    if options.legend && labeled > 0 {
        draw_series_legend(&mut chart)?;
    }
    Ok(())
}

// src/chart_functions/plot_candlestick.rs
