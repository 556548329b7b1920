// src/chart_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Polygon, Rectangle, Text};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont};

use log::info;
use std::error::Error;
use std::ops::Range;

use crate::constants::{
    BACKGROUND_COLOR, DASH_SIZE, DASH_SPACING, FONT_FAMILY, FONT_SIZE_AXIS_LABEL,
    FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE, FONT_SIZE_TEXT_BOX,
    GRADIENT_BANDS, GRADIENT_MAX_ALPHA, LABEL_COLOR, LINE_WIDTH_THRESHOLD, SIGNAL_GREEN,
    SIGNAL_RED,
};
use crate::data_input::ohlc_frame::OhlcFrame;
use crate::types::ChartOptions;

/// Chart over `f64` row-index coordinates on a bitmap backend. Every chart
/// in this crate draws into one of these.
pub type IndexChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Calculate a plot range with padding proportional to the span,
/// or a fixed padding for degenerate ranges.
pub fn padded_range(min_val: f64, max_val: f64, ratio: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * ratio };
    (min - padding, max + padding)
}

/// Creates the bitmap backend, fills the background, runs the draw closure
/// and presents the result.
pub fn render_to_file<F>(
    output_filename: &str,
    size: (u32, u32),
    draw: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&DrawingArea<BitMapBackend, Shift>) -> Result<(), Box<dyn Error>>,
{
    let root_area = BitMapBackend::new(output_filename, size).into_drawing_area();
    root_area.fill(&BACKGROUND_COLOR)?;
    draw(&root_area)?;
    root_area.present()?;
    info!("chart saved as '{output_filename}'");
    Ok(())
}

/// Builds a chart on `area` in the house style: grey dotted-look grid,
/// grey axis labels, optional caption, date-aware x tick labels and the
/// optional in-chart name text.
pub fn build_styled_chart<'a, 'b>(
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    frame: Option<&OhlcFrame>,
    x_range: Range<f64>,
    y_range: Range<f64>,
    options: &ChartOptions,
) -> Result<IndexChart<'a, 'b>, Box<dyn Error>> {
    build_styled_chart_with(area, frame, x_range, y_range, options, None)
}

/// Variant with a categorical y axis: integer ticks are labelled with the
/// category names (one slot per name) and the label area is widened to fit
/// them. Used by the horizontal bar chart.
pub fn build_styled_chart_with<'a, 'b>(
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    frame: Option<&OhlcFrame>,
    x_range: Range<f64>,
    y_range: Range<f64>,
    options: &ChartOptions,
    y_categories: Option<&[String]>,
) -> Result<IndexChart<'a, 'b>, Box<dyn Error>> {
    let mut builder = ChartBuilder::on(area);
    let y_label_area = if y_categories.is_some() { 120 } else { 60 };
    builder
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(y_label_area);
    if let Some(title) = &options.title {
        builder.caption(
            title,
            (FONT_FAMILY, FONT_SIZE_CHART_TITLE)
                .into_font()
                .color(&LABEL_COLOR),
        );
    }
    let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

    let timestamps = frame.and_then(|f| f.timestamps.as_deref());
    let date_only = timestamps
        .map(|ts| ts.iter().all(|t| t.time() == chrono::NaiveTime::MIN))
        .unwrap_or(true);
    let x_formatter = move |x: &f64| -> String {
        if let Some(ts) = timestamps {
            let rounded = x.round();
            if rounded >= 0.0 && (rounded as usize) < ts.len() && (x - rounded).abs() < 1e-6 {
                let t = ts[rounded as usize];
                if date_only {
                    return t.format("%Y-%m-%d").to_string();
                }
                return t.format("%m-%d %H:%M").to_string();
            }
            // Ticks between rows carry no timestamp.
            return String::new();
        }
        format!("{x:.0}")
    };

    let category_formatter = move |y: &f64| -> String {
        let Some(names) = y_categories else {
            return String::new();
        };
        let rounded = y.round();
        if (y - rounded).abs() < 1e-6 && rounded >= 0.0 && (rounded as usize) < names.len() {
            return names[rounded as usize].clone();
        }
        // Ticks between slots carry no name.
        String::new()
    };

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(12)
        .y_labels(10)
        .bold_line_style(LABEL_COLOR.mix(0.25))
        .light_line_style(LABEL_COLOR.mix(0.08))
        .axis_style(LABEL_COLOR)
        .label_style(
            (FONT_FAMILY, FONT_SIZE_AXIS_LABEL)
                .into_font()
                .color(&LABEL_COLOR),
        )
        .x_label_formatter(&x_formatter);
    if let Some(names) = y_categories {
        mesh.y_labels(names.len())
            .y_label_formatter(&category_formatter);
    }
    if let Some(label) = &options.x_label {
        mesh.x_desc(label);
    }
    if let Some(label) = &options.y_label {
        mesh.y_desc(label);
    }
    mesh.draw()?;

    if let Some(name) = &options.name {
        let (width, _) = area.dim_in_pixel();
        let style = (FONT_FAMILY, FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&LABEL_COLOR)
            .pos(Pos::new(HPos::Center, VPos::Top));
        area.draw(&Text::new(name.as_str(), (width as i32 / 2, 12), style))?;
    }

    Ok(chart)
}

/// Draws the legend box for all labeled series added so far.
/// Callers skip this when the legend is disabled or no series carries a label.
/// The backend lifetime must outlive the context borrow for
/// `configure_series_labels`.
pub fn draw_series_legend<'a, 'b: 'a>(
    chart: &mut IndexChart<'a, 'b>,
) -> Result<(), Box<dyn Error>> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(BACKGROUND_COLOR.mix(0.3))
        .border_style(LABEL_COLOR)
        .label_font(
            (FONT_FAMILY, FONT_SIZE_LEGEND)
                .into_font()
                .color(&LABEL_COLOR),
        )
        .draw()?;
    Ok(())
}

/// Horizontal threshold lines (red/green shorthands plus the free-form
/// list), vertical lines and vertical spans from the chart options.
pub fn draw_reference_lines(
    chart: &mut IndexChart,
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    let x_range = chart.x_range();
    let y_range = chart.y_range();

    if let Some(value) = options.hline_red {
        chart.draw_series(LineSeries::new(
            vec![(x_range.start, value), (x_range.end, value)],
            SIGNAL_RED.stroke_width(LINE_WIDTH_THRESHOLD),
        ))?;
    }
    if let Some(value) = options.hline_green {
        chart.draw_series(LineSeries::new(
            vec![(x_range.start, value), (x_range.end, value)],
            SIGNAL_GREEN.stroke_width(LINE_WIDTH_THRESHOLD),
        ))?;
    }
    for line in &options.hlines {
        let points = vec![(x_range.start, line.value), (x_range.end, line.value)];
        let style = line.color.stroke_width(line.stroke_width);
        if line.dashed {
            chart.draw_series(DashedLineSeries::new(points, DASH_SIZE, DASH_SPACING, style))?;
        } else {
            chart.draw_series(LineSeries::new(points, style))?;
        }
    }

    for vline in &options.vlines {
        chart.draw_series(DashedLineSeries::new(
            vec![(vline.index, y_range.start), (vline.index, y_range.end)],
            DASH_SIZE,
            DASH_SPACING,
            vline.color.mix(vline.alpha).stroke_width(vline.stroke_width),
        ))?;
    }
    for span in &options.vspans {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(span.from, y_range.start), (span.to, y_range.end)],
            span.color.mix(span.alpha).filled(),
        )))?;
    }
    Ok(())
}

/// Clips the area under the segment `p0`-`p1` to the horizontal band
/// `[band_lo, band_hi]`. Returns the polygon vertices, or `None` when the
/// segment contributes nothing to the band.
pub(crate) fn clip_segment_to_band(
    p0: (f64, f64),
    p1: (f64, f64),
    band_lo: f64,
    band_hi: f64,
) -> Option<Vec<(f64, f64)>> {
    let ((x0, y0), (x1, y1)) = if p0.0 <= p1.0 { (p0, p1) } else { (p1, p0) };
    if x1 <= x0 || y0.max(y1) <= band_lo {
        return None;
    }
    let slope = (y1 - y0) / (x1 - x0);
    let x_at = |y: f64| x0 + (y - y0) / slope;
    let curve = |x: f64| y0 + slope * (x - x0);

    // Sub-interval where the curve sits above the band floor. The slope is
    // non-zero on both branches since one endpoint is below the floor and
    // the other above it.
    let (xs, xe) = if y0 < band_lo {
        (x_at(band_lo), x1)
    } else if y1 < band_lo {
        (x0, x_at(band_lo))
    } else {
        (x0, x1)
    };
    if xe <= xs {
        return None;
    }

    let top = |x: f64| curve(x).min(band_hi);
    let mut points = vec![(xs, band_lo), (xs, top(xs))];
    let start_delta = curve(xs) - band_hi;
    let end_delta = curve(xe) - band_hi;
    if start_delta * end_delta < 0.0 {
        points.push((x_at(band_hi), band_hi));
    }
    points.push((xe, top(xe)));
    points.push((xe, band_lo));
    Some(points)
}

/// Banded approximation of an alpha-gradient fill under a curve: the area
/// below the series is sliced into horizontal bands whose opacity grows
/// toward the top, each band clipped per segment into a convex polygon.
pub fn draw_gradient_fill(
    chart: &mut IndexChart,
    points: &[(f64, f64)],
    color: plotters::style::RGBColor,
) -> Result<(), Box<dyn Error>> {
    if points.len() < 2 {
        return Ok(());
    }
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(_, y) in points {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !(y_max - y_min).is_finite() || y_max <= y_min {
        return Ok(());
    }

    let band_height = (y_max - y_min) / GRADIENT_BANDS as f64;
    for band in 0..GRADIENT_BANDS {
        let band_lo = y_min + band as f64 * band_height;
        let band_hi = band_lo + band_height;
        let alpha = GRADIENT_MAX_ALPHA * (band as f64 + 0.5) / GRADIENT_BANDS as f64;
        let mut polygons = Vec::new();
        for pair in points.windows(2) {
            if let Some(vertices) = clip_segment_to_band(pair[0], pair[1], band_lo, band_hi) {
                polygons.push(Polygon::new(vertices, color.mix(alpha).filled()));
            }
        }
        if !polygons.is_empty() {
            chart.draw_series(polygons)?;
        }
    }
    Ok(())
}

/// Draws a translucent text box at a position given as percentages of the
/// drawing area (pixel-space placement, width estimated per character).
pub fn draw_text_box(
    area: &DrawingArea<BitMapBackend, Shift>,
    text: &str,
    x_percent: u32,
    y_percent: u32,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    const LINE_HEIGHT_SPACING: i32 = 4;

    let (width, height) = area.dim_in_pixel();
    let x = (width * x_percent / 100) as i32;
    let y = (height * y_percent / 100) as i32;

    let lines: Vec<&str> = text.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_char_width = (FONT_SIZE_TEXT_BOX as f32 * CHAR_WIDTH_RATIO) as i32;
    let box_width = max_line_length as i32 * estimated_char_width + 8;
    let box_height = lines.len() as i32 * (FONT_SIZE_TEXT_BOX + LINE_HEIGHT_SPACING) + 6;

    area.draw(&Rectangle::new(
        [(x - 4, y - 4), (x + box_width, y + box_height)],
        LABEL_COLOR.mix(0.4).filled(),
    ))?;
    for (i, line) in lines.iter().enumerate() {
        let line_y = y + i as i32 * (FONT_SIZE_TEXT_BOX + LINE_HEIGHT_SPACING);
        area.draw(&Text::new(
            *line,
            (x, line_y),
            (FONT_FAMILY, FONT_SIZE_TEXT_BOX)
                .into_font()
                .color(&crate::constants::PATTERN_NEUTRAL_COLOR),
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn padded_range_adds_proportional_padding() {
        let (min, max) = padded_range(0.0, 100.0, 0.15);
        assert_relative_eq!(min, -15.0);
        assert_relative_eq!(max, 115.0);
    }

    #[test]
    fn padded_range_handles_reversed_and_degenerate_input() {
        let (min, max) = padded_range(100.0, 0.0, 0.15);
        assert_relative_eq!(min, -15.0);
        assert_relative_eq!(max, 115.0);

        let (min, max) = padded_range(5.0, 5.0, 0.15);
        assert_relative_eq!(min, 4.5);
        assert_relative_eq!(max, 5.5);
    }

    #[test]
    fn clip_keeps_segment_fully_inside_band() {
        let polygon = clip_segment_to_band((0.0, 1.0), (1.0, 2.0), 0.0, 3.0).unwrap();
        assert_eq!(
            polygon,
            vec![(0.0, 0.0), (0.0, 1.0), (1.0, 2.0), (1.0, 0.0)]
        );
    }

    #[test]
    fn clip_truncates_segment_at_band_ceiling() {
        let polygon = clip_segment_to_band((0.0, 0.5), (1.0, 2.5), 0.0, 1.5).unwrap();
        // Rises through the ceiling halfway across.
        assert_eq!(polygon.len(), 5);
        assert_relative_eq!(polygon[2].0, 0.5);
        assert_relative_eq!(polygon[2].1, 1.5);
        assert_relative_eq!(polygon[3].1, 1.5);
    }

    #[test]
    fn clip_discards_segment_below_band() {
        assert!(clip_segment_to_band((0.0, -1.0), (1.0, -0.5), 0.0, 1.0).is_none());
    }

    #[test]
    fn clip_enters_band_partway_across() {
        let polygon = clip_segment_to_band((0.0, -1.0), (1.0, 1.0), 0.0, 2.0).unwrap();
        // Curve crosses the floor at x = 0.5.
        assert_relative_eq!(polygon[0].0, 0.5);
        assert_relative_eq!(polygon[0].1, 0.0);
        assert_relative_eq!(polygon.last().unwrap().0, 1.0);
    }
}

// src/chart_framework.rs
