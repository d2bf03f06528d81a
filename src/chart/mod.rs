//! Chart plotting functions
//!
//! All three charts share the same three-stage pipeline: normalize the
//! data range, scale onto the canvas, emit vector primitives. Each
//! function is pure; identical input produces byte-identical markup.

pub mod candlestick;
pub mod line;
pub mod trendline;

pub use candlestick::{plot_candlestick, CandleColor};
pub use line::plot_line;
pub use trendline::plot_candlestick_trendline;
