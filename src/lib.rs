//! sparkchart - lightweight financial chart rendering to SVG markup
//!
//! Three pure plotting functions turn numeric price series into
//! self-contained SVG documents: a line chart, a candlestick chart, and
//! a candlestick chart with linear support/resistance trendlines. Each
//! one linearly rescales its data onto a fixed-size canvas and emits
//! line and rect elements; nothing is read or written outside the
//! returned string, so calls are independent and freely concurrent.
//!
//! # Example
//!
//! ```rust
//! use sparkchart::{plot_line, Canvas};
//!
//! let svg = plot_line(&[4.2, 5.0, 4.7, 5.3], Canvas::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<line").count(), 3);
//! ```

pub mod chart;
pub mod data;
pub mod error;
pub mod renderer;

mod scale;

pub use chart::{plot_candlestick, plot_candlestick_trendline, plot_line, CandleColor};
pub use data::{CandlestickTrendline, OhlcSeries, Trendline};
pub use error::ChartError;
pub use renderer::Canvas;
