// src/chart_functions/plot_bar.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::Rectangle;
use plotters::style::Color;

use std::error::Error;

use crate::chart_framework::{build_styled_chart_with, draw_reference_lines, render_to_file};
use crate::constants::{ACCENT_COLOR, PLOT_HEIGHT, PLOT_WIDTH};
use crate::types::{ChartError, ChartOptions};

/// Occurrence counts per category, preserving first-seen order.
pub fn count_categories(items: &[String]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(name, _)| name == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((item.clone(), 1)),
        }
    }
    counts
}

/// Renders a horizontal bar chart of category occurrence counts, one bar
/// per distinct value.
pub fn plot_bar(
    data: &[String],
    options: &ChartOptions,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    render_to_file(output_filename, (PLOT_WIDTH, PLOT_HEIGHT), |area| {
        draw_bar_on(area, data, options)
    })
}

pub fn draw_bar_on(
    area: &DrawingArea<BitMapBackend, Shift>,
    data: &[String],
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    let counts = count_categories(data);
    if counts.is_empty() {
        return Err(ChartError::EmptyData.into());
    }
    let bar_count = counts.len();
    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(1);

    let x_range = 0.0..max_count as f64 * 1.1;
    // One integer slot per category, bars centered on the integers.
    let y_range = -0.5..bar_count as f64 - 0.5;

    let names: Vec<String> = counts.iter().map(|(name, _)| name.clone()).collect();
    let mut chart = build_styled_chart_with(area, None, x_range, y_range, options, Some(&names))?;

    chart.draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
        Rectangle::new(
            [(0.0, i as f64 - 0.4), (*count as f64, i as f64 + 0.4)],
            ACCENT_COLOR.mix(0.5).filled(),
        )
    }))?;

    draw_reference_lines(&mut chart, options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_preserve_first_seen_order() {
        let data = vec![
            "doji".to_string(),
            "hammer".to_string(),
            "doji".to_string(),
            "doji".to_string(),
        ];
        let counts = count_categories(&data);
        assert_eq!(
            counts,
            vec![("doji".to_string(), 3), ("hammer".to_string(), 1)]
        );
    }

    #[test]
    fn empty_input_yields_no_counts() {
        assert!(count_categories(&[]).is_empty());
    }
}

// src/chart_functions/plot_bar.rs
