// src/overlays/signal_evaluation.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Circle, Polygon, Rectangle};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::{Color, RGBColor};

use log::debug;
use std::error::Error;

use crate::chart_framework::IndexChart;
use crate::constants::{
    COLOR_TRADE_LOSS, COLOR_TRADE_WIN, COLOR_VERTICAL_BUY, COLOR_VERTICAL_SELL, DASH_SIZE,
    DASH_SPACING, SIGNAL_DOT_RADIUS, TRADE_RECT_FILL_ALPHA,
};
use crate::types::{ChartOptions, SignalEvalForm, SignalEvent, SignalKind};

/// A matched BUY→SELL pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeSpan {
    pub buy_index: usize,
    pub buy_price: f64,
    pub sell_index: usize,
    pub sell_price: f64,
}

impl TradeSpan {
    pub fn is_win(&self) -> bool {
        self.sell_price > self.buy_price
    }
}

/// Pairs consecutive BUY and SELL signals into trades. A SELL without an
/// open BUY and a BUY while another is still open are dropped; a trailing
/// unmatched BUY stays open and produces no trade.
pub fn pair_trades(signals: &[SignalEvent]) -> Vec<TradeSpan> {
    let mut trades = Vec::new();
    let mut open_buy: Option<SignalEvent> = None;
    for signal in signals {
        match signal.kind {
            SignalKind::Buy => {
                if open_buy.is_some() {
                    debug!("ignoring BUY at index {} while a trade is open", signal.index);
                } else {
                    open_buy = Some(*signal);
                }
            }
            SignalKind::Sell => match open_buy.take() {
                Some(buy) => trades.push(TradeSpan {
                    buy_index: buy.index,
                    buy_price: buy.price,
                    sell_index: signal.index,
                    sell_price: signal.price,
                }),
                None => debug!("ignoring SELL at index {} with no open trade", signal.index),
            },
        }
    }
    trades
}

/// Dashed full-height vertical line at every signal index:
/// accent for BUY, red for SELL.
pub fn draw_verticals(
    chart: &mut IndexChart,
    signals: &[SignalEvent],
) -> Result<(), Box<dyn Error>> {
    let y_range = chart.y_range();
    for signal in signals {
        let color = match signal.kind {
            SignalKind::Buy => COLOR_VERTICAL_BUY,
            SignalKind::Sell => COLOR_VERTICAL_SELL,
        };
        let x = signal.index as f64;
        chart.draw_series(DashedLineSeries::new(
            vec![(x, y_range.start), (x, y_range.end)],
            DASH_SIZE,
            DASH_SPACING,
            color.mix(0.8).stroke_width(1),
        ))?;
    }
    Ok(())
}

fn trade_color(trade: &TradeSpan) -> RGBColor {
    if trade.is_win() {
        *COLOR_TRADE_WIN
    } else {
        *COLOR_TRADE_LOSS
    }
}

/// Visualises each matched trade as a rectangle or an arrow from the entry
/// to the exit point, winning trades in the accent color and losing trades
/// in the label grey, with optional dots at both endpoints.
pub fn draw_signal_evaluation(
    chart: &mut IndexChart,
    area: &DrawingArea<BitMapBackend, Shift>,
    signals: &[SignalEvent],
    options: &ChartOptions,
) -> Result<(), Box<dyn Error>> {
    for trade in pair_trades(signals) {
        if trade.is_win() && options.disable_green_signals {
            continue;
        }
        if !trade.is_win() && options.disable_red_signals {
            continue;
        }
        let color = trade_color(&trade);
        let entry = (trade.buy_index as f64, trade.buy_price);
        let exit = (trade.sell_index as f64, trade.sell_price);

        match options.signal_evaluation_form {
            SignalEvalForm::Rectangle => {
                chart.draw_series(std::iter::once(Rectangle::new(
                    [entry, exit],
                    color.mix(TRADE_RECT_FILL_ALPHA).filled(),
                )))?;
                chart.draw_series(std::iter::once(Rectangle::new(
                    [entry, exit],
                    color.stroke_width(1),
                )))?;
            }
            SignalEvalForm::Arrow => {
                chart.draw_series(LineSeries::new(
                    vec![entry, exit],
                    color.stroke_width(2),
                ))?;
                draw_arrow_head(chart, area, entry, exit, color)?;
            }
        }

        if options.dots {
            chart.draw_series(
                [entry, exit]
                    .iter()
                    .map(|&point| Circle::new(point, SIGNAL_DOT_RADIUS, color.filled())),
            )?;
        }
    }
    Ok(())
}

/// Arrow head at the exit point, built in pixel space so its shape is
/// independent of the axis scales.
fn draw_arrow_head(
    chart: &IndexChart,
    area: &DrawingArea<BitMapBackend, Shift>,
    entry: (f64, f64),
    exit: (f64, f64),
    color: RGBColor,
) -> Result<(), Box<dyn Error>> {
    const HEAD_LENGTH: f64 = 12.0;
    const HEAD_HALF_WIDTH: f64 = 5.0;

    let (x0, y0) = chart.backend_coord(&entry);
    let (x1, y1) = chart.backend_coord(&exit);
    let dx = (x1 - x0) as f64;
    let dy = (y1 - y0) as f64;
    let length = (dx * dx + dy * dy).sqrt();
    if length < 1.0 {
        return Ok(());
    }
    let (ux, uy) = (dx / length, dy / length);
    let (px, py) = (-uy, ux);

    let base_x = x1 as f64 - ux * HEAD_LENGTH;
    let base_y = y1 as f64 - uy * HEAD_LENGTH;
    let head = vec![
        (x1, y1),
        (
            (base_x + px * HEAD_HALF_WIDTH).round() as i32,
            (base_y + py * HEAD_HALF_WIDTH).round() as i32,
        ),
        (
            (base_x - px * HEAD_HALF_WIDTH).round() as i32,
            (base_y - py * HEAD_HALF_WIDTH).round() as i32,
        ),
    ];
    area.draw(&Polygon::new(head, color.filled()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buy(index: usize, price: f64) -> SignalEvent {
        SignalEvent {
            kind: SignalKind::Buy,
            index,
            price,
        }
    }

    fn sell(index: usize, price: f64) -> SignalEvent {
        SignalEvent {
            kind: SignalKind::Sell,
            index,
            price,
        }
    }

    #[test]
    fn pairs_alternating_signals() {
        let trades = pair_trades(&[buy(0, 10.0), sell(3, 12.0), buy(5, 11.0), sell(8, 10.5)]);
        assert_eq!(trades.len(), 2);
        assert!(trades[0].is_win());
        assert!(!trades[1].is_win());
        assert_eq!(trades[0].buy_index, 0);
        assert_eq!(trades[0].sell_index, 3);
    }

    #[test]
    fn trailing_buy_stays_open() {
        let trades = pair_trades(&[buy(0, 10.0), sell(2, 11.0), buy(4, 12.0)]);
        assert_eq!(trades.len(), 1);
    }

    #[test]
    fn orphan_sell_and_double_buy_are_dropped() {
        let trades = pair_trades(&[sell(0, 9.0), buy(1, 10.0), buy(2, 10.5), sell(4, 11.0)]);
        assert_eq!(trades.len(), 1);
        // The second BUY was ignored; the trade opens at the first.
        assert_eq!(trades[0].buy_index, 1);
    }

    #[test]
    fn flat_exit_counts_as_loss() {
        let trades = pair_trades(&[buy(0, 10.0), sell(1, 10.0)]);
        assert!(!trades[0].is_win());
    }
}

// src/overlays/signal_evaluation.rs
