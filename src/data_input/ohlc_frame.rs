// src/data_input/ohlc_frame.rs

use chrono::NaiveDateTime;

use crate::types::ChartError;

/// A named indicator column aligned with the OHLC rows.
/// Uses `Option<f64>` cells to handle missing or unparseable values.
#[derive(Debug, Clone, Default)]
pub struct IndicatorColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Time-indexed tabular OHLC dataset. X coordinates on every chart are
/// row indices as `f64`; timestamps, when present, only drive tick labels.
#[derive(Debug, Clone, Default)]
pub struct OhlcFrame {
    pub timestamps: Option<Vec<NaiveDateTime>>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Option<Vec<Option<f64>>>,
    pub indicators: Vec<IndicatorColumn>,
}

impl OhlcFrame {
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Checks the only structural invariants the charts rely on:
    /// the frame is non-empty and every column is row-aligned.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.is_empty() {
            return Err(ChartError::EmptyData);
        }
        let rows = self.len();
        for (name, len) in [
            ("high", self.high.len()),
            ("low", self.low.len()),
            ("close", self.close.len()),
        ] {
            if len != rows {
                return Err(ChartError::MisalignedColumn(name.to_string()));
            }
        }
        if let Some(ts) = &self.timestamps {
            if ts.len() != rows {
                return Err(ChartError::MisalignedColumn("time".to_string()));
            }
        }
        if let Some(vol) = &self.volume {
            if vol.len() != rows {
                return Err(ChartError::MisalignedColumn("volume".to_string()));
            }
        }
        for col in &self.indicators {
            if col.values.len() != rows {
                return Err(ChartError::MisalignedColumn(col.name.clone()));
            }
        }
        Ok(())
    }

    /// All plottable column names: the OHLCV built-ins followed by the
    /// indicator columns, in frame order.
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = ["open", "high", "low", "close"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        if self.volume.is_some() {
            names.push("volume".to_string());
        }
        names.extend(self.indicators.iter().map(|c| c.name.clone()));
        names
    }

    /// Names of the indicator columns only.
    pub fn indicator_names(&self) -> Vec<String> {
        self.indicators.iter().map(|c| c.name.clone()).collect()
    }

    /// Resolves a column by name (case-insensitive for the built-ins) into
    /// `(index, value)` points, skipping missing and non-finite cells.
    /// Returns `None` when the column does not exist.
    pub fn series_points(&self, name: &str) -> Option<Vec<(f64, f64)>> {
        let dense = |values: &[f64]| -> Vec<(f64, f64)> {
            values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, v)| (i as f64, *v))
                .collect()
        };
        let sparse = |values: &[Option<f64>]| -> Vec<(f64, f64)> {
            values
                .iter()
                .enumerate()
                .filter_map(|(i, v)| v.filter(|v| v.is_finite()).map(|v| (i as f64, v)))
                .collect()
        };

        match name.to_ascii_lowercase().as_str() {
            "open" => return Some(dense(&self.open)),
            "high" => return Some(dense(&self.high)),
            "low" => return Some(dense(&self.low)),
            "close" => return Some(dense(&self.close)),
            "volume" => return self.volume.as_deref().map(sparse),
            _ => {}
        }
        self.indicators
            .iter()
            .find(|c| c.name == name)
            .map(|c| sparse(&c.values))
    }

    /// Min/max across the four OHLC fields of a single row.
    pub fn row_extremes(&self, index: usize) -> Result<(f64, f64), ChartError> {
        if index >= self.len() {
            return Err(ChartError::IndexOutOfRange {
                index,
                rows: self.len(),
            });
        }
        let fields = [
            self.open[index],
            self.high[index],
            self.low[index],
            self.close[index],
        ];
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in fields {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min > max {
            return Err(ChartError::NoFiniteValues);
        }
        Ok((min, max))
    }

    /// Overall price range: lowest low to highest high, ignoring
    /// non-finite values.
    pub fn price_range(&self) -> Result<(f64, f64), ChartError> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (&lo, &hi) in self.low.iter().zip(self.high.iter()) {
            if lo.is_finite() {
                min = min.min(lo);
            }
            if hi.is_finite() {
                max = max.max(hi);
            }
        }
        if min > max {
            return Err(ChartError::NoFiniteValues);
        }
        Ok((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> OhlcFrame {
        OhlcFrame {
            timestamps: None,
            open: vec![10.0, 11.0, 12.0],
            high: vec![12.0, 13.0, 14.0],
            low: vec![9.0, 10.0, 11.0],
            close: vec![11.0, 12.0, 13.0],
            volume: None,
            indicators: vec![IndicatorColumn {
                name: "sma_2".to_string(),
                values: vec![None, Some(10.5), Some(11.5)],
            }],
        }
    }

    #[test]
    fn validate_rejects_empty_frame() {
        let frame = OhlcFrame::default();
        assert!(matches!(frame.validate(), Err(ChartError::EmptyData)));
    }

    #[test]
    fn validate_rejects_misaligned_columns() {
        let mut frame = sample_frame();
        frame.close.pop();
        assert!(matches!(
            frame.validate(),
            Err(ChartError::MisalignedColumn(ref name)) if name == "close"
        ));
    }

    #[test]
    fn series_points_skips_missing_cells() {
        let frame = sample_frame();
        let points = frame.series_points("sma_2").unwrap();
        assert_eq!(points, vec![(1.0, 10.5), (2.0, 11.5)]);
    }

    #[test]
    fn series_points_resolves_builtins_case_insensitively() {
        let frame = sample_frame();
        let points = frame.series_points("Close").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (0.0, 11.0));
        assert!(frame.series_points("volume").is_none());
        assert!(frame.series_points("nope").is_none());
    }

    #[test]
    fn row_extremes_covers_all_four_fields() {
        let frame = sample_frame();
        assert_eq!(frame.row_extremes(0).unwrap(), (9.0, 12.0));
        assert!(matches!(
            frame.row_extremes(3),
            Err(ChartError::IndexOutOfRange { index: 3, rows: 3 })
        ));
    }

    #[test]
    fn price_range_spans_lows_and_highs() {
        let frame = sample_frame();
        assert_eq!(frame.price_range().unwrap(), (9.0, 14.0));
    }
}

// src/data_input/ohlc_frame.rs
