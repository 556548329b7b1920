// src/data_input/mod.rs

pub mod csv_loader;
pub mod ohlc_frame;

// src/data_input/mod.rs
