// tests/overlay_geometry_test.rs
// Overlay bookkeeping exercised through the public API: pattern bounding
// boxes and color classes, and trade pairing for signal evaluation.

use approx::assert_relative_eq;

use fincharts::overlays::pattern_evaluation::{classify_pattern, pattern_bounds, PatternClass};
use fincharts::overlays::signal_evaluation::pair_trades;
use fincharts::{ChartOptions, OhlcFrame, PatternSpan, SignalEvent, SignalKind};

fn trending_frame(rows: usize) -> OhlcFrame {
    let mut frame = OhlcFrame::default();
    for i in 0..rows {
        let base = 100.0 + i as f64;
        frame.open.push(base);
        frame.high.push(base + 2.0);
        frame.low.push(base - 1.0);
        frame.close.push(base + 1.0);
    }
    frame
}

#[test]
fn pattern_box_covers_window_with_padding() {
    let frame = trending_frame(10);
    let span = PatternSpan {
        name: "bullish_engulfing".to_string(),
        start: 3,
        stop: 5,
    };
    let bounds = pattern_bounds(&frame, &span).unwrap();

    // Window: lows 102..104, highs 105..107 -> min 102, max 107, span 5.
    assert_relative_eq!(bounds.x0, 2.4);
    assert_relative_eq!(bounds.x1, 5.6);
    assert_relative_eq!(bounds.y_top, 107.25);
    assert_relative_eq!(bounds.y_bottom, 101.75);
}

#[test]
fn single_row_pattern_is_valid() {
    let frame = trending_frame(4);
    let span = PatternSpan {
        name: "doji".to_string(),
        start: 2,
        stop: 2,
    };
    let bounds = pattern_bounds(&frame, &span).unwrap();
    assert_relative_eq!(bounds.x1 - bounds.x0, 1.2);
    assert!(bounds.y_top > bounds.y_bottom);
}

#[test]
fn pattern_past_the_frame_is_rejected() {
    let frame = trending_frame(4);
    let span = PatternSpan {
        name: "hammer".to_string(),
        start: 3,
        stop: 4,
    };
    let err = pattern_bounds(&frame, &span).unwrap_err();
    assert!(err.to_string().contains("not in data"), "unexpected error: {err}");
}

#[test]
fn default_filters_classify_by_name_prefix() {
    let options = ChartOptions::default();
    assert_eq!(
        classify_pattern("bearish_engulfing", &options.bearish_filter, &options.bullish_filter),
        PatternClass::Bearish
    );
    assert_eq!(
        classify_pattern("bullish_harami", &options.bearish_filter, &options.bullish_filter),
        PatternClass::Bullish
    );
    assert_eq!(
        classify_pattern("shooting_star", &options.bearish_filter, &options.bullish_filter),
        PatternClass::Neutral
    );
}

#[test]
fn custom_filters_match_anywhere_in_the_name() {
    let bearish = vec!["star".to_string()];
    let bullish = vec!["morning".to_string()];
    assert_eq!(
        classify_pattern("evening_star", &bearish, &bullish),
        PatternClass::Bearish
    );
    assert_eq!(
        classify_pattern("morning_star", &bearish, &bullish),
        PatternClass::Bullish
    );
}

#[test]
fn trades_pair_up_across_a_session() {
    let signals = vec![
        SignalEvent { kind: SignalKind::Sell, index: 1, price: 99.0 },
        SignalEvent { kind: SignalKind::Buy, index: 2, price: 100.0 },
        SignalEvent { kind: SignalKind::Sell, index: 6, price: 104.0 },
        SignalEvent { kind: SignalKind::Buy, index: 8, price: 105.0 },
        SignalEvent { kind: SignalKind::Sell, index: 9, price: 103.0 },
        SignalEvent { kind: SignalKind::Buy, index: 11, price: 102.0 },
    ];
    let trades = pair_trades(&signals);

    // The leading SELL and the trailing open BUY produce no trades.
    assert_eq!(trades.len(), 2);
    assert!(trades[0].is_win());
    assert!(!trades[1].is_win());
    assert_eq!(trades[0].buy_index, 2);
    assert_eq!(trades[0].sell_index, 6);
    assert_eq!(trades[1].buy_index, 8);
    assert_eq!(trades[1].sell_index, 9);
}

// tests/overlay_geometry_test.rs
