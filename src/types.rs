// src/types.rs

use plotters::style::RGBColor;
use thiserror::Error;

use crate::constants::COLOR_SET;

/// Errors raised by data validation and overlay geometry.
/// Drawing entry points return `Box<dyn Error>`; these convert via `?`.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("dataset is empty")]
    EmptyData,
    #[error("column '{0}' is not aligned with the ohlc columns")]
    MisalignedColumn(String),
    #[error("index {index} not in data (rows: {rows})")]
    IndexOutOfRange { index: usize, rows: usize },
    #[error("missing essential headers: {0}")]
    MissingHeaders(String),
    #[error("class conditions length {conditions} does not match data length {data}")]
    ClassConditionMismatch { conditions: usize, data: usize },
    #[error("no finite values to plot")]
    NoFiniteValues,
}

/// Side of a trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Buy,
    Sell,
}

impl SignalKind {
    /// Case-insensitive parse of the wire form used in signal CSV files.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Some(SignalKind::Buy),
            "SELL" => Some(SignalKind::Sell),
            _ => None,
        }
    }
}

/// A `(kind, index, price)` trading signal triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalEvent {
    pub kind: SignalKind,
    pub index: usize,
    pub price: f64,
}

/// A named candlestick pattern covering rows `start..=stop`.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSpan {
    pub name: String,
    pub start: usize,
    pub stop: usize,
}

/// How matched BUY/SELL pairs are visualised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalEvalForm {
    #[default]
    Rectangle,
    Arrow,
}

/// Vertical reference line at a fractional row index.
#[derive(Debug, Clone, Copy)]
pub struct VerticalLine {
    pub index: f64,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub alpha: f64,
}

impl VerticalLine {
    pub fn at(index: f64) -> Self {
        VerticalLine {
            index,
            color: COLOR_SET[0],
            stroke_width: 1,
            alpha: 0.8,
        }
    }
}

/// Shaded vertical span between two fractional row indices.
#[derive(Debug, Clone, Copy)]
pub struct VerticalSpan {
    pub from: f64,
    pub to: f64,
    pub color: RGBColor,
    pub alpha: f64,
}

impl VerticalSpan {
    pub fn between(from: f64, to: f64) -> Self {
        VerticalSpan {
            from,
            to,
            color: COLOR_SET[0],
            alpha: 0.2,
        }
    }
}

/// Horizontal threshold line at a price level.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalLine {
    pub value: f64,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub dashed: bool,
}

impl HorizontalLine {
    pub fn at(value: f64) -> Self {
        HorizontalLine {
            value,
            color: COLOR_SET[0],
            stroke_width: 1,
            dashed: false,
        }
    }
}

/// Per-chart configuration surface; fields default to the house style.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Short name rendered top-center inside the plot area.
    pub name: Option<String>,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub legend: bool,
    /// Color override for single-series charts (scatter, histogram bars).
    pub color: Option<RGBColor>,
    /// Price flags at the last value of each plotted column.
    pub enable_flags: bool,
    /// Extend the flag's dashed line to the last frame index.
    pub set_flags_at_the_end: bool,
    pub gradient_fill: bool,
    /// Vertical line at every BUY/SELL index.
    pub draw_verticals: bool,
    pub signal_evaluation: bool,
    pub signal_evaluation_form: SignalEvalForm,
    /// Dots at trade entry and exit points.
    pub dots: bool,
    pub disable_red_signals: bool,
    pub disable_green_signals: bool,
    pub pattern_evaluation: bool,
    /// Substrings marking a pattern name as bearish (red box).
    pub bearish_filter: Vec<String>,
    /// Substrings marking a pattern name as bullish (green box).
    pub bullish_filter: Vec<String>,
    /// Shorthand threshold lines in the signal red/green colors.
    pub hline_red: Option<f64>,
    pub hline_green: Option<f64>,
    pub hlines: Vec<HorizontalLine>,
    pub vlines: Vec<VerticalLine>,
    pub vspans: Vec<VerticalSpan>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            name: None,
            title: None,
            x_label: None,
            y_label: None,
            legend: true,
            color: None,
            enable_flags: true,
            set_flags_at_the_end: true,
            gradient_fill: false,
            draw_verticals: true,
            signal_evaluation: true,
            signal_evaluation_form: SignalEvalForm::Rectangle,
            dots: true,
            disable_red_signals: false,
            disable_green_signals: false,
            pattern_evaluation: true,
            bearish_filter: vec!["be".to_string()],
            bullish_filter: vec!["bu".to_string()],
            hline_red: None,
            hline_green: None,
            hlines: Vec::new(),
            vlines: Vec::new(),
            vspans: Vec::new(),
        }
    }
}

// src/types.rs
