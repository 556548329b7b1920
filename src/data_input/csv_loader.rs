// src/data_input/csv_loader.rs

use csv::ReaderBuilder;
use log::warn;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::data_input::ohlc_frame::{IndicatorColumn, OhlcFrame};
use crate::types::{ChartError, PatternSpan, SignalEvent, SignalKind};

/// Accepted timestamp formats for the time/date column, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Loads an OHLC CSV into an [`OhlcFrame`].
///
/// Required headers (case-insensitive): `open`, `high`, `low`, `close`.
/// Optional: `time`/`date`/`timestamp` and `volume`/`vol`. Every other
/// column becomes a named indicator column with `Option<f64>` cells.
/// Rows with an unparseable required field are skipped with a warning.
pub fn load_ohlc_csv(path: &Path) -> Result<OhlcFrame, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));
    let headers = reader.headers()?.clone();

    let position_of = |names: &[&str]| -> Option<usize> {
        headers
            .iter()
            .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
    };

    let required = ["open", "high", "low", "close"];
    let required_idx: Vec<Option<usize>> = required.iter().map(|n| position_of(&[n])).collect();
    let missing: Vec<&str> = required
        .iter()
        .zip(required_idx.iter())
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(ChartError::MissingHeaders(missing.join(", ")).into());
    }
    let ohlc_idx: Vec<usize> = required_idx.into_iter().flatten().collect();

    let time_idx = position_of(&["time", "date", "timestamp"]);
    let volume_idx = position_of(&["volume", "vol"]);

    // Every remaining column is carried as an indicator series.
    let indicator_idx: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| {
            !ohlc_idx.contains(i) && Some(*i) != time_idx && Some(*i) != volume_idx
        })
        .map(|(i, h)| (i, h.to_string()))
        .collect();

    let mut frame = OhlcFrame {
        timestamps: time_idx.map(|_| Vec::new()),
        volume: volume_idx.map(|_| Vec::new()),
        indicators: indicator_idx
            .iter()
            .map(|(_, name)| IndicatorColumn {
                name: name.clone(),
                values: Vec::new(),
            })
            .collect(),
        ..Default::default()
    };

    let mut skipped_rows = 0usize;
    let mut bad_timestamps = 0usize;
    for record in reader.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let parsed: Vec<Option<f64>> = ohlc_idx
            .iter()
            .map(|&i| field(i).parse::<f64>().ok())
            .collect();
        let (open, high, low, close) = match (parsed[0], parsed[1], parsed[2], parsed[3]) {
            (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
            _ => {
                skipped_rows += 1;
                continue;
            }
        };

        if let (Some(idx), Some(ts_column)) = (time_idx, frame.timestamps.as_mut()) {
            match parse_timestamp(field(idx)) {
                Some(ts) => ts_column.push(ts),
                None => {
                    // Keep the column aligned; unparseable stamps void the axis.
                    bad_timestamps += 1;
                    ts_column.push(NaiveDateTime::default());
                }
            }
        }
        if let (Some(idx), Some(volume)) = (volume_idx, frame.volume.as_mut()) {
            volume.push(field(idx).parse::<f64>().ok());
        }
        for ((idx, _), col) in indicator_idx.iter().zip(frame.indicators.iter_mut()) {
            col.values.push(field(*idx).parse::<f64>().ok());
        }

        frame.open.push(open);
        frame.high.push(high);
        frame.low.push(low);
        frame.close.push(close);
    }

    if skipped_rows > 0 {
        warn!(
            "skipped {skipped_rows} rows with unparseable OHLC values in '{}'",
            path.display()
        );
    }
    if bad_timestamps > 0 {
        warn!(
            "{bad_timestamps} unparseable timestamps in '{}'; falling back to index labels",
            path.display()
        );
        frame.timestamps = None;
    }

    frame.validate()?;
    Ok(frame)
}

/// Loads a signal CSV with headers `kind,index,price` (kind is BUY or SELL).
pub fn load_signals_csv(path: &Path) -> Result<Vec<SignalEvent>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut signals = Vec::new();
    for record in reader.records() {
        let record = record?;
        let kind = record.get(0).and_then(SignalKind::parse);
        let index = record.get(1).and_then(|s| s.parse::<usize>().ok());
        let price = record.get(2).and_then(|s| s.parse::<f64>().ok());
        match (kind, index, price) {
            (Some(kind), Some(index), Some(price)) => {
                signals.push(SignalEvent { kind, index, price })
            }
            _ => warn!("skipping malformed signal row: {record:?}"),
        }
    }
    Ok(signals)
}

/// Loads a pattern CSV with headers `name,start,stop`.
pub fn load_patterns_csv(path: &Path) -> Result<Vec<PatternSpan>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut patterns = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(0).map(|s| s.to_string());
        let start = record.get(1).and_then(|s| s.parse::<usize>().ok());
        let stop = record.get(2).and_then(|s| s.parse::<usize>().ok());
        match (name, start, stop) {
            (Some(name), Some(start), Some(stop)) if !name.is_empty() => {
                patterns.push(PatternSpan { name, start, stop })
            }
            _ => warn!("skipping malformed pattern row: {record:?}"),
        }
    }
    Ok(patterns)
}

// src/data_input/csv_loader.rs
