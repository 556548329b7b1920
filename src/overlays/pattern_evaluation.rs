// src/overlays/pattern_evaluation.rs

use plotters::element::Text;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;

use crate::chart_framework::IndexChart;
use crate::constants::{
    ACCENT_COLOR, FONT_FAMILY, FONT_SIZE_ANNOTATION, LABEL_COLOR, PATTERN_BOX_X_PAD,
    PATTERN_BOX_Y_PAD_RATIO, PATTERN_DASH_SIZE, PATTERN_DASH_SPACING, PATTERN_NEUTRAL_COLOR,
};
use crate::data_input::ohlc_frame::OhlcFrame;
use crate::types::{ChartError, ChartOptions, PatternSpan};

/// Classification of a pattern by name-substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternClass {
    Bearish,
    Bullish,
    Neutral,
}

/// Matches the pattern name against the bearish and bullish filter lists.
/// A bullish match takes precedence over a bearish one.
pub fn classify_pattern(name: &str, bearish_filter: &[String], bullish_filter: &[String]) -> PatternClass {
    let mut class = PatternClass::Neutral;
    if bearish_filter.iter().any(|f| name.contains(f.as_str())) {
        class = PatternClass::Bearish;
    }
    if bullish_filter.iter().any(|f| name.contains(f.as_str())) {
        class = PatternClass::Bullish;
    }
    class
}

fn class_color(class: PatternClass) -> RGBColor {
    match class {
        // Losing/winning house colors, not the raw signal red/green.
        PatternClass::Bearish => LABEL_COLOR,
        PatternClass::Bullish => ACCENT_COLOR,
        PatternClass::Neutral => PATTERN_NEUTRAL_COLOR,
    }
}

/// Bounding box of a pattern window in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternBox {
    pub x0: f64,
    pub x1: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Computes the bounding box over the OHLC rows `start..=stop`: padded by
/// [`PATTERN_BOX_X_PAD`] index units horizontally and by
/// [`PATTERN_BOX_Y_PAD_RATIO`] of the window's price span vertically.
pub fn pattern_bounds(frame: &OhlcFrame, span: &PatternSpan) -> Result<PatternBox, ChartError> {
    if span.stop < span.start {
        return Err(ChartError::IndexOutOfRange {
            index: span.stop,
            rows: frame.len(),
        });
    }
    let mut window_min = f64::INFINITY;
    let mut window_max = f64::NEG_INFINITY;
    for index in span.start..=span.stop {
        let (row_min, row_max) = frame.row_extremes(index)?;
        window_min = window_min.min(row_min);
        window_max = window_max.max(row_max);
    }
    let pad = PATTERN_BOX_Y_PAD_RATIO * (window_max - window_min);
    Ok(PatternBox {
        x0: span.start as f64 - PATTERN_BOX_X_PAD,
        x1: span.stop as f64 + PATTERN_BOX_X_PAD,
        y_top: window_max + pad,
        y_bottom: window_min - pad,
    })
}

/// Draws each pattern as a dotted rectangle outline over its OHLC window,
/// with the pattern name annotated above the box in the class color.
pub fn draw_pattern_evaluation(
    chart: &mut IndexChart,
    frame: &OhlcFrame,
    patterns: &[PatternSpan],
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    for pattern in patterns {
        let bounds = pattern_bounds(frame, pattern)?;
        let color = class_color(classify_pattern(
            &pattern.name,
            &options.bearish_filter,
            &options.bullish_filter,
        ));

        let outline = vec![
            (bounds.x0, bounds.y_top),
            (bounds.x1, bounds.y_top),
            (bounds.x1, bounds.y_bottom),
            (bounds.x0, bounds.y_bottom),
            (bounds.x0, bounds.y_top),
        ];
        chart.draw_series(DashedLineSeries::new(
            outline,
            PATTERN_DASH_SIZE,
            PATTERN_DASH_SPACING,
            color.stroke_width(1),
        ))?;

        let annotation_style = (FONT_FAMILY, FONT_SIZE_ANNOTATION)
            .into_font()
            .color(&color)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let center_x = (bounds.x0 + bounds.x1) / 2.0;
        chart.plotting_area().draw(&Text::new(
            pattern.name.clone(),
            (center_x, bounds.y_top),
            annotation_style,
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame() -> OhlcFrame {
        OhlcFrame {
            open: vec![10.0, 11.0, 12.0, 11.5],
            high: vec![12.0, 13.0, 14.0, 12.5],
            low: vec![9.0, 10.0, 11.0, 10.5],
            close: vec![11.0, 12.0, 13.0, 11.0],
            ..Default::default()
        }
    }

    #[test]
    fn bounds_pad_window_extremes() {
        let span = PatternSpan {
            name: "bearish_engulfing".to_string(),
            start: 1,
            stop: 2,
        };
        let bounds = pattern_bounds(&frame(), &span).unwrap();
        // Window min 10, max 14, span 4, pad 0.2.
        assert_relative_eq!(bounds.x0, 0.4);
        assert_relative_eq!(bounds.x1, 2.6);
        assert_relative_eq!(bounds.y_top, 14.2);
        assert_relative_eq!(bounds.y_bottom, 9.8);
    }

    #[test]
    fn bounds_reject_out_of_range_spans() {
        let span = PatternSpan {
            name: "doji".to_string(),
            start: 2,
            stop: 9,
        };
        assert!(matches!(
            pattern_bounds(&frame(), &span),
            Err(ChartError::IndexOutOfRange { index: 4, rows: 4 })
        ));

        let reversed = PatternSpan {
            name: "doji".to_string(),
            start: 3,
            stop: 1,
        };
        assert!(pattern_bounds(&frame(), &reversed).is_err());
    }

    #[test]
    fn classification_uses_substring_filters() {
        let bearish = vec!["be".to_string()];
        let bullish = vec!["bu".to_string()];
        assert_eq!(
            classify_pattern("bearish_engulfing", &bearish, &bullish),
            PatternClass::Bearish
        );
        assert_eq!(
            classify_pattern("bullish_harami", &bearish, &bullish),
            PatternClass::Bullish
        );
        assert_eq!(
            classify_pattern("doji", &bearish, &bullish),
            PatternClass::Neutral
        );
    }

    #[test]
    fn bullish_match_takes_precedence() {
        let bearish = vec!["harami".to_string()];
        let bullish = vec!["harami".to_string()];
        assert_eq!(
            classify_pattern("bearish_harami", &bearish, &bullish),
            PatternClass::Bullish
        );
    }
}

// src/overlays/pattern_evaluation.rs
