// src/chart_functions/mod.rs

pub(crate) mod common;

pub mod plot_bar;
pub mod plot_candlestick;
pub mod plot_filled_ohlc;
pub mod plot_hist;
pub mod plot_line;
pub mod plot_scatter;
pub mod plot_scatter3d;

// src/chart_functions/mod.rs
