//! Error types for chart plotting

use thiserror::Error;

/// Errors reported by the plotting functions.
///
/// Malformed numeric content (a degenerate value range, NaN samples) is
/// deliberately not caught here; it flows through into the output
/// coordinates. Only structural problems with the input are errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The input series has no samples.
    #[error("input series is empty")]
    EmptySeries,

    /// The four OHLC columns do not share one length.
    #[error("OHLC column lengths differ: open={open}, high={high}, low={low}, close={close}")]
    LengthMismatch {
        open: usize,
        high: usize,
        low: usize,
        close: usize,
    },

    /// Canvas width and height must both be strictly positive.
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    NonPositiveCanvas { width: f64, height: f64 },
}
