// src/constants.rs

use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// --- House Colors ---
// Light grey used for axis labels, grid lines and "losing" chart elements.
pub const LABEL_COLOR: RGBColor = RGBColor(0xc1, 0xc1, 0xc1);
// Teal accent used for up candles, winning trades and primary series.
pub const ACCENT_COLOR: RGBColor = RGBColor(0x13, 0xbe, 0xbc);
pub const BACKGROUND_COLOR: RGBColor = RGBColor(0xff, 0xff, 0xff);

// Strong red/green reserved for threshold lines and signal verticals.
pub const SIGNAL_RED: RGBColor = RGBColor(0xfe, 0x00, 0x00);
pub const SIGNAL_GREEN: RGBColor = RGBColor(0x00, 0xfc, 0x01);

// Grey for patterns that match neither the bearish nor the bullish filter.
pub const PATTERN_NEUTRAL_COLOR: RGBColor = RGBColor(0x53, 0x53, 0x53);

// Rotating color set for indicator columns on line charts.
pub const COLOR_SET: [RGBColor; 5] = [
    RGBColor(0x13, 0xbe, 0xbc),
    RGBColor(0xb0, 0xc1, 0x13),
    RGBColor(0xc1, 0x13, 0x9e),
    RGBColor(0xc1, 0x71, 0x13),
    RGBColor(0x0d, 0x83, 0x82),
];

// --- Overlay Color Assignments ---
pub const COLOR_TRADE_WIN: &RGBColor = &ACCENT_COLOR;
pub const COLOR_TRADE_LOSS: &RGBColor = &LABEL_COLOR;
pub const COLOR_VERTICAL_BUY: &RGBColor = &ACCENT_COLOR;
pub const COLOR_VERTICAL_SELL: &RGBColor = &SIGNAL_RED;

// --- Candlestick Geometry (index coordinates) ---
// A candle occupies [i - CANDLE_HALF_WIDTH, i + CANDLE_HALF_WIDTH];
// the body is slightly narrower so adjacent candles do not touch.
pub const CANDLE_HALF_WIDTH: f64 = 0.6;
pub const CANDLE_BODY_HALF_WIDTH: f64 = CANDLE_HALF_WIDTH - 0.16;

// --- Pattern Box Geometry ---
// Horizontal padding on each side of the pattern window, in index units,
// and vertical padding as a fraction of the window's price span.
pub const PATTERN_BOX_X_PAD: f64 = 0.6;
pub const PATTERN_BOX_Y_PAD_RATIO: f64 = 0.05;

// --- Fill / Gradient ---
pub const FILL_ALPHA: f64 = 0.35;
pub const TRADE_RECT_FILL_ALPHA: f64 = 0.25;
pub const GRADIENT_BANDS: usize = 24;
pub const GRADIENT_MAX_ALPHA: f64 = 0.5;

// Default range padding ratios. Price axes get a tighter pad than the
// generic 15% used for unconstrained series.
pub const RANGE_PAD_RATIO: f64 = 0.15;
pub const PRICE_PAD_RATIO: f64 = 0.05;

// Stroke widths for lines.
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_THRESHOLD: u32 = 1;

// Dash geometry for dashed overlay lines (pixels).
pub const DASH_SIZE: u32 = 5;
pub const DASH_SPACING: u32 = 4;
pub const PATTERN_DASH_SIZE: u32 = 2;
pub const PATTERN_DASH_SPACING: u32 = 3;

// Dot radius for signal markers (pixels).
pub const SIGNAL_DOT_RADIUS: i32 = 3;

// --- Font Sizes ---
pub const FONT_SIZE_MAIN_TITLE: i32 = 30;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 15;
pub const FONT_SIZE_LEGEND: i32 = 15;
pub const FONT_SIZE_ANNOTATION: i32 = 14;
pub const FONT_SIZE_PRICE_FLAG: i32 = 12;
pub const FONT_SIZE_TEXT_BOX: i32 = 14;

pub const FONT_FAMILY: &str = "sans-serif";

// Default histogram bin count.
pub const DEFAULT_HIST_BINS: usize = 10;

// src/constants.rs
