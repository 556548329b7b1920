// src/chart_functions/plot_hist.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::Rectangle;
use plotters::style::Color;

use std::error::Error;

use crate::chart_framework::{
    build_styled_chart, draw_reference_lines, draw_text_box, padded_range, render_to_file,
};
use crate::constants::{ACCENT_COLOR, PLOT_HEIGHT, PLOT_WIDTH, PRICE_PAD_RATIO};
use crate::data_input::ohlc_frame::OhlcFrame;
use crate::types::{ChartError, ChartOptions};

/// Equal-width histogram bins over the finite values.
/// Returns `(left edge, height)` per bin and the bin width; heights are
/// normalized to a probability density when `density` is set.
pub fn bin_values(values: &[f64], bins: usize, density: bool) -> Option<(Vec<(f64, f64)>, f64)> {
    if bins == 0 {
        return None;
    }
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    let min = finite.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // Degenerate range: one bin of unit width centered on the value.
    let (min, width) = if (max - min).abs() < 1e-12 {
        (min - 0.5, 1.0 / bins as f64)
    } else {
        (min, (max - min) / bins as f64)
    };

    let mut counts = vec![0usize; bins];
    for v in &finite {
        let mut bin = ((v - min) / width) as usize;
        if bin >= bins {
            bin = bins - 1; // value at the upper edge
        }
        counts[bin] += 1;
    }

    let total = finite.len() as f64;
    let bars = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let height = if density {
                count as f64 / (total * width)
            } else {
                count as f64
            };
            (min + i as f64 * width, height)
        })
        .collect();
    Some((bars, width))
}

/// Renders a histogram of the values. With a `threshold`, a summary box
/// reports how many values fall at or below versus above it.
pub fn plot_hist(
    values: &[f64],
    bins: usize,
    density: bool,
    threshold: Option<f64>,
    options: &ChartOptions,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    render_to_file(output_filename, (PLOT_WIDTH, PLOT_HEIGHT), |area| {
        draw_hist_on(area, values, bins, density, threshold, options)
    })
}

pub fn draw_hist_on(
    area: &DrawingArea<BitMapBackend, Shift>,
    values: &[f64],
    bins: usize,
    density: bool,
    threshold: Option<f64>,
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    let Some((bars, width)) = bin_values(values, bins, density) else {
        return Err(ChartError::NoFiniteValues.into());
    };

    let x_min = bars.first().map(|(x, _)| *x).unwrap_or(0.0);
    let x_max = bars.last().map(|(x, _)| *x + width).unwrap_or(1.0);
    let y_max = bars.iter().map(|(_, h)| *h).fold(0.0f64, f64::max);
    let (x_lo, x_hi) = padded_range(x_min, x_max, PRICE_PAD_RATIO);

    let mut chart = build_styled_chart(area, None, x_lo..x_hi, 0.0..y_max * 1.15, options)?;

    // 90% bar width within each bin.
    chart.draw_series(bars.iter().filter(|(_, h)| *h > 0.0).map(|&(left, height)| {
        Rectangle::new(
            [(left + 0.05 * width, 0.0), (left + 0.95 * width, height)],
            ACCENT_COLOR.mix(0.75).filled(),
        )
    }))?;

    if let Some(threshold) = threshold {
        let below = values
            .iter()
            .filter(|v| v.is_finite() && **v <= threshold)
            .count();
        let above = values
            .iter()
            .filter(|v| v.is_finite() && **v > threshold)
            .count();
        let text = format!("<={threshold}: {below}\n>{threshold}: {above}");
        draw_text_box(area, &text, 78, 10)?;
    }

    draw_reference_lines(&mut chart, options)?;
    Ok(())
}

/// Convenience: histogram of one-step differences of a frame column,
/// the usual input for return distributions.
pub fn column_diffs(frame: &OhlcFrame, column: &str) -> Option<Vec<f64>> {
    let points = frame.series_points(column)?;
    Some(
        points
            .windows(2)
            .map(|pair| pair[1].1 - pair[0].1)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bins_cover_range_inclusively() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        let (bars, width) = bin_values(&values, 4, false).unwrap();
        assert_relative_eq!(width, 1.0);
        assert_eq!(bars.len(), 4);
        // The maximum lands in the last bin, not past it.
        assert_relative_eq!(bars[3].1, 2.0);
        let total: f64 = bars.iter().map(|(_, h)| h).sum();
        assert_relative_eq!(total, 5.0);
    }

    #[test]
    fn density_integrates_to_one() {
        let values = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5];
        let (bars, width) = bin_values(&values, 5, true).unwrap();
        let integral: f64 = bars.iter().map(|(_, h)| h * width).sum();
        assert_relative_eq!(integral, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let values = [1.0, f64::NAN, 2.0, f64::INFINITY];
        let (bars, _) = bin_values(&values, 2, false).unwrap();
        let total: f64 = bars.iter().map(|(_, h)| h).sum();
        assert_relative_eq!(total, 2.0);
    }

    #[test]
    fn empty_or_degenerate_input() {
        assert!(bin_values(&[], 10, false).is_none());
        assert!(bin_values(&[1.0], 0, false).is_none());
        // A single repeated value still produces usable bins.
        let (bars, _) = bin_values(&[2.0, 2.0, 2.0], 4, false).unwrap();
        let total: f64 = bars.iter().map(|(_, h)| h).sum();
        assert_relative_eq!(total, 3.0);
    }

    #[test]
    fn diffs_of_close_column() {
        let frame = OhlcFrame {
            open: vec![1.0, 2.0, 3.0],
            high: vec![1.0, 2.0, 3.0],
            low: vec![1.0, 2.0, 3.0],
            close: vec![10.0, 12.0, 11.0],
            ..Default::default()
        };
        let diffs = column_diffs(&frame, "close").unwrap();
        assert_eq!(diffs, vec![2.0, -1.0]);
    }
}

// src/chart_functions/plot_hist.rs
