// src/lib.rs - Library interface

pub mod chart_framework;
pub mod chart_functions;
pub mod constants;
pub mod data_input;
pub mod overlays;
pub mod types;

pub use chart_functions::plot_bar::plot_bar;
pub use chart_functions::plot_candlestick::plot_candlestick;
pub use chart_functions::plot_filled_ohlc::plot_filled_ohlc;
pub use chart_functions::plot_hist::plot_hist;
pub use chart_functions::plot_line::plot_line;
pub use chart_functions::plot_scatter::plot_scatter;
pub use chart_functions::plot_scatter3d::plot_scatter_3d;
pub use data_input::csv_loader::{load_ohlc_csv, load_patterns_csv, load_signals_csv};
pub use data_input::ohlc_frame::{IndicatorColumn, OhlcFrame};
pub use types::{
    ChartError, ChartOptions, HorizontalLine, PatternSpan, SignalEvalForm, SignalEvent,
    SignalKind, VerticalLine, VerticalSpan,
};

// src/lib.rs
