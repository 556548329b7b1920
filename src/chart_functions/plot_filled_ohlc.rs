// src/chart_functions/plot_filled_ohlc.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::Polygon;
use plotters::style::Color;

use std::error::Error;

use crate::chart_framework::{
    build_styled_chart, draw_reference_lines, draw_series_legend, padded_range, render_to_file,
};
use crate::chart_functions::common::{
    draw_column_series, draw_overlays, extend_range_with_columns, resolve_columns,
};
use crate::constants::{
    ACCENT_COLOR, FILL_ALPHA, LABEL_COLOR, PLOT_HEIGHT, PLOT_WIDTH, PRICE_PAD_RATIO,
};
use crate::data_input::ohlc_frame::OhlcFrame;
use crate::types::{ChartOptions, PatternSpan, SignalEvent};

/// Renders a filled OHLC chart: a translucent accent band between close
/// and high and a grey band between low and close, with the same overlay
/// pipeline as the candlestick chart.
pub fn plot_filled_ohlc(
    frame: &OhlcFrame,
    signals: &[SignalEvent],
    patterns: &[PatternSpan],
    plot_columns: Option<&[String]>,
    options: &ChartOptions,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    render_to_file(output_filename, (PLOT_WIDTH, PLOT_HEIGHT), |area| {
        draw_filled_ohlc_on(area, frame, signals, patterns, plot_columns, options)
    })
}

pub fn draw_filled_ohlc_on(
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

    // One quad per adjacent row pair and band. High sits above close and
    // low below it by OHLC construction, so no where-mask is needed.
    let mut upper_band = Vec::new();
    let mut lower_band = Vec::new();
    for i in 0..frame.len().saturating_sub(1) {
        let (x0, x1) = (i as f64, (i + 1) as f64);
        let rows = [
            (frame.close[i], frame.high[i], frame.low[i]),
            (frame.close[i + 1], frame.high[i + 1], frame.low[i + 1]),
        ];
        if !rows
            .iter()
            .all(|(c, h, l)| c.is_finite() && h.is_finite() && l.is_finite())
        {
            continue;
        }
        upper_band.push(Polygon::new(
            vec![
                (x0, rows[0].0),
                (x1, rows[1].0),
                (x1, rows[1].1),
                (x0, rows[0].1),
            ],
            ACCENT_COLOR.mix(FILL_ALPHA).filled(),
        ));
        lower_band.push(Polygon::new(
            vec![
                (x0, rows[0].2),
                (x1, rows[1].2),
                (x1, rows[1].0),
                (x0, rows[0].0),
            ],
            LABEL_COLOR.mix(FILL_ALPHA).filled(),
        ));
    }
    chart.draw_series(upper_band)?;
    chart.draw_series(lower_band)?;

    draw_overlays(&mut chart, area, frame, signals, patterns, options)?;
    let labeled = draw_column_series(&mut chart, area, frame, &columns, options)?;
    draw_reference_lines(&mut chart, options)?;
    if options.legend && labeled > 0 {
        draw_series_legend(&mut chart)?;
    }
    Ok(())
}

// src/chart_functions/plot_filled_ohlc.rs
