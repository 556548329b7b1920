// src/overlays/price_flag.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Rectangle, Text};
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;

use crate::chart_framework::IndexChart;
use crate::constants::{
    BACKGROUND_COLOR, DASH_SIZE, DASH_SPACING, FONT_FAMILY, FONT_SIZE_PRICE_FLAG,
};

/// Tags the last value of a series with a small filled flag at the right
/// edge of the data. When `last_index` lies beyond the series (columns that
/// end early), a dashed line carries the value across to it first.
///
/// The flag is placed in pixel space via `backend_coord` so its size is
/// independent of the axis scales. An empty series draws nothing.
pub fn add_price_flag(
    chart: &mut IndexChart,
    area: &DrawingArea<BitMapBackend, Shift>,
    series: &[(f64, f64)],
    color: RGBColor,
    last_index: Option<f64>,
) -> Result<(), Box<dyn Error>> {
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let Some(&(x_last, value)) = series.last() else {
        return Ok(());
    };

    let mut anchor_x = x_last;
    if let Some(last_index) = last_index {
        if last_index > x_last {
            chart.draw_series(DashedLineSeries::new(
                vec![(x_last, value), (last_index, value)],
                DASH_SIZE,
                DASH_SPACING,
                color.mix(0.6).stroke_width(1),
            ))?;
            anchor_x = last_index;
        }
    }

    let (px, py) = chart.backend_coord(&(anchor_x, value));
    let text = format!("{value:.6}");
    let text_width = (text.len() as f32 * FONT_SIZE_PRICE_FLAG as f32 * CHAR_WIDTH_RATIO) as i32;
    let half_height = FONT_SIZE_PRICE_FLAG / 2 + 3;

    area.draw(&Rectangle::new(
        [(px + 4, py - half_height), (px + 10 + text_width, py + half_height)],
        color.mix(0.6).filled(),
    ))?;
    area.draw(&Text::new(
        text,
        (px + 7, py),
        (FONT_FAMILY, FONT_SIZE_PRICE_FLAG)
            .into_font()
            .color(&BACKGROUND_COLOR)
            .pos(Pos::new(HPos::Left, VPos::Center)),
    ))?;
    Ok(())
}

// src/overlays/price_flag.rs
