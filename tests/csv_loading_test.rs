// tests/csv_loading_test.rs

use std::io::Write;

use tempfile::NamedTempFile;

use fincharts::{load_ohlc_csv, load_patterns_csv, load_signals_csv, SignalKind};

fn write_temp_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file
}

#[test]
fn loads_ohlc_with_time_volume_and_indicators() {
    let file = write_temp_csv(
        "time,Open,High,Low,Close,Volume,sma_2\n\
         2024-01-01,10.0,12.0,9.0,11.0,1000,\n\
         2024-01-02,11.0,13.0,10.0,12.0,1100,10.5\n\
         2024-01-03,12.0,14.0,11.0,13.0,900,11.5\n",
    );
    let frame = load_ohlc_csv(file.path()).expect("load ohlc csv");

    assert_eq!(frame.len(), 3);
    assert_eq!(frame.open, vec![10.0, 11.0, 12.0]);
    assert!(frame.timestamps.is_some());
    assert!(frame.volume.is_some());
    assert_eq!(frame.indicator_names(), vec!["sma_2".to_string()]);

    let sma = frame.series_points("sma_2").unwrap();
    assert_eq!(sma, vec![(1.0, 10.5), (2.0, 11.5)]);
}

#[test]
fn skips_rows_with_unparseable_ohlc_values() {
    let file = write_temp_csv(
        "open,high,low,close\n\
         10.0,12.0,9.0,11.0\n\
         n/a,13.0,10.0,12.0\n\
         12.0,14.0,11.0,13.0\n",
    );
    let frame = load_ohlc_csv(file.path()).expect("load ohlc csv");
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.close, vec![11.0, 13.0]);
}

#[test]
fn missing_required_headers_is_an_error() {
    let file = write_temp_csv("open,high,close\n10.0,12.0,11.0\n");
    let err = load_ohlc_csv(file.path()).unwrap_err();
    assert!(err.to_string().contains("low"), "unexpected error: {err}");
}

#[test]
fn empty_dataset_is_an_error() {
    let file = write_temp_csv("open,high,low,close\n");
    let err = load_ohlc_csv(file.path()).unwrap_err();
    assert!(err.to_string().contains("empty"), "unexpected error: {err}");
}

#[test]
fn loads_signals_and_drops_malformed_rows() {
    let file = write_temp_csv(
        "kind,index,price\n\
         BUY,3,10.5\n\
         sell,7,11.25\n\
         HOLD,9,12.0\n\
         BUY,x,12.0\n",
    );
    let signals = load_signals_csv(file.path()).expect("load signals");
    assert_eq!(signals.len(), 2);
    assert_eq!(signals[0].kind, SignalKind::Buy);
    assert_eq!(signals[0].index, 3);
    assert_eq!(signals[1].kind, SignalKind::Sell);
    assert_eq!(signals[1].price, 11.25);
}

#[test]
fn loads_patterns() {
    let file = write_temp_csv(
        "name,start,stop\n\
         bearish_engulfing,4,5\n\
         bullish_harami,10,11\n",
    );
    let patterns = load_patterns_csv(file.path()).expect("load patterns");
    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns[0].name, "bearish_engulfing");
    assert_eq!(patterns[1].start, 10);
    assert_eq!(patterns[1].stop, 11);
}

// tests/csv_loading_test.rs
