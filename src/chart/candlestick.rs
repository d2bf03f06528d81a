//! Candlestick chart over OHLC columns

use crate::data::OhlcSeries;
use crate::error::ChartError;
use crate::renderer::{Canvas, SvgBuilder};
use crate::scale::{max_of, min_of, rescale, step_x};

/// Fixed body width in canvas units.
const BODY_WIDTH: f64 = 2.0;

/// Candle color keyed off the open/close relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleColor {
    Bullish,
    Bearish,
}

impl CandleColor {
    /// Bullish strictly requires the close above the open; an unchanged
    /// period renders with the bearish color.
    pub fn for_candle(open: f64, close: f64) -> Self {
        if open < close {
            CandleColor::Bullish
        } else {
            CandleColor::Bearish
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CandleColor::Bullish => "green",
            CandleColor::Bearish => "#cc0022",
        }
    }
}

/// Emit one body rect and one wick line per period, in index order.
///
/// `y_min`/`y_max` are the data-space bounds the caller aggregated; the
/// plain and trendline charts aggregate them differently but draw the
/// candles identically. Body and wick share the candle color, and an
/// open == close period keeps its zero-height body.
pub(crate) fn emit_candles(
    svg: &mut SvgBuilder,
    ohlc: &OhlcSeries,
    y_min: f64,
    y_max: f64,
    canvas: Canvas,
) {
    let len = ohlc.len();
    for i in 0..len {
        let x = step_x(i, len, canvas.width);
        let open = rescale(ohlc.open[i], y_min, y_max, canvas.height, true);
        let high = rescale(ohlc.high[i], y_min, y_max, canvas.height, true);
        let low = rescale(ohlc.low[i], y_min, y_max, canvas.height, true);
        let close = rescale(ohlc.close[i], y_min, y_max, canvas.height, true);

        let color = CandleColor::for_candle(ohlc.open[i], ohlc.close[i]).as_str();
        svg.add_rect(
            x - 1.0,
            open.min(close),
            BODY_WIDTH,
            (close - open).abs(),
            color,
            color,
        );
        svg.add_line(x, high, x, low, color, None);
    }
}

/// Render `ohlc` as a candlestick chart: one fixed-width body rect plus
/// one wick line per period, 2N primitives total.
///
/// The vertical range takes its minimum over the Low, Open, and Close
/// columns and its maximum over the High, Open, and Close columns.
///
/// # Errors
///
/// [`ChartError::LengthMismatch`] when the four columns differ in
/// length, [`ChartError::EmptySeries`] for zero-length columns,
/// [`ChartError::NonPositiveCanvas`] for a degenerate canvas.
pub fn plot_candlestick(ohlc: &OhlcSeries, canvas: Canvas) -> Result<String, ChartError> {
    canvas.validate()?;
    ohlc.validate()?;

    let y_min = min_of(&ohlc.low)
        .min(min_of(&ohlc.open))
        .min(min_of(&ohlc.close));
    let y_max = max_of(&ohlc.high)
        .max(max_of(&ohlc.open))
        .max(max_of(&ohlc.close));

    let mut svg = SvgBuilder::new(canvas);
    emit_candles(&mut svg, ohlc, y_min, y_max, canvas);
    Ok(svg.build())
}
