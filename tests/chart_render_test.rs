// tests/chart_render_test.rs
// End-to-end render checks: each chart writes a non-empty PNG file. The
// line and candlestick cases go through the legend path over labeled
// column series.

use std::fs;

use tempfile::tempdir;

use fincharts::{
    plot_bar, plot_candlestick, plot_line, ChartOptions, IndicatorColumn, OhlcFrame, PatternSpan,
    SignalEvent, SignalKind,
};

fn sample_frame() -> OhlcFrame {
    let mut frame = OhlcFrame::default();
    for i in 0..16 {
        let base = 100.0 + (i as f64 * 0.7).sin() * 4.0;
        frame.open.push(base);
        frame.high.push(base + 2.0);
        frame.low.push(base - 2.0);
        frame.close.push(base + 1.0);
    }
    frame.indicators.push(IndicatorColumn {
        name: "sma_4".to_string(),
        values: (0..16).map(|i| Some(100.0 + i as f64 * 0.1)).collect(),
    });
    frame
}

#[test]
fn line_chart_with_legend_renders() {
    let frame = sample_frame();
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("line.png");

    let options = ChartOptions {
        title: Some("Close".to_string()),
        gradient_fill: true,
        ..Default::default()
    };
    let columns = vec!["close".to_string(), "sma_4".to_string()];
    plot_line(&frame, Some(&columns), &options, path.to_str().unwrap()).expect("render line chart");

    let written = fs::metadata(&path).expect("stat rendered file");
    assert!(written.len() > 0);
}

#[test]
fn candlestick_with_overlays_renders() {
    let frame = sample_frame();
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("candlestick.png");

    let signals = vec![
        SignalEvent {
            kind: SignalKind::Buy,
            index: 2,
            price: 100.0,
        },
        SignalEvent {
            kind: SignalKind::Sell,
            index: 7,
            price: 103.0,
        },
    ];
    let patterns = vec![PatternSpan {
        name: "bullish_engulfing".to_string(),
        start: 10,
        stop: 12,
    }];
    let columns = vec!["sma_4".to_string()];
    plot_candlestick(
        &frame,
        &signals,
        &patterns,
        Some(&columns),
        &ChartOptions::default(),
        path.to_str().unwrap(),
    )
    .expect("render candlestick chart");

    let written = fs::metadata(&path).expect("stat rendered file");
    assert!(written.len() > 0);
}

#[test]
fn bar_chart_with_category_axis_renders() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("bar.png");

    let data = vec![
        "doji".to_string(),
        "hammer".to_string(),
        "doji".to_string(),
    ];
    let options = ChartOptions {
        x_label: Some("Count".to_string()),
        ..Default::default()
    };
    plot_bar(&data, &options, path.to_str().unwrap()).expect("render bar chart");

    let written = fs::metadata(&path).expect("stat rendered file");
    assert!(written.len() > 0);
}

// tests/chart_render_test.rs
