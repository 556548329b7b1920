// src/overlays/mod.rs

pub mod pattern_evaluation;
pub mod price_flag;
pub mod signal_evaluation;

// src/overlays/mod.rs
