//! Candlestick chart with support and resistance trendlines

use crate::chart::candlestick::emit_candles;
use crate::data::CandlestickTrendline;
use crate::error::ChartError;
use crate::renderer::{Canvas, SvgBuilder};
use crate::scale::{max_of, min_of, rescale, step_x};

const TREND_STROKE: &str = "black";
const TREND_STROKE_WIDTH: f64 = 1.0;

/// Render candlesticks plus straight support and resistance lines,
/// 2N + 2 primitives total.
///
/// The vertical range extends the candlestick aggregation with each
/// trendline's first value on the low side and its projected endpoint
/// at step N - 1 on the high side. The two trendlines are emitted after
/// all candles, support first, so they render on top.
///
/// # Errors
///
/// Same as [`crate::plot_candlestick`].
pub fn plot_candlestick_trendline(
    data: &CandlestickTrendline,
    canvas: Canvas,
) -> Result<String, ChartError> {
    canvas.validate()?;
    let len = data.ohlc.validate()?;
    let last = len - 1;

    let y_min = min_of(&data.ohlc.low)
        .min(min_of(&data.ohlc.open))
        .min(min_of(&data.ohlc.close))
        .min(data.support.first_value)
        .min(data.resistance.first_value);
    let y_max = max_of(&data.ohlc.high)
        .max(max_of(&data.ohlc.open))
        .max(max_of(&data.ohlc.close))
        .max(data.support.value_at(last))
        .max(data.resistance.value_at(last));

    let mut svg = SvgBuilder::new(canvas);
    emit_candles(&mut svg, &data.ohlc, y_min, y_max, canvas);

    let start_x = step_x(0, len, canvas.width);
    let end_x = step_x(last, len, canvas.width);
    for trend in [&data.support, &data.resistance] {
        let y1 = rescale(trend.first_value, y_min, y_max, canvas.height, true);
        let y2 = rescale(trend.value_at(last), y_min, y_max, canvas.height, true);
        svg.add_line(start_x, y1, end_x, y2, TREND_STROKE, Some(TREND_STROKE_WIDTH));
    }
    Ok(svg.build())
}
