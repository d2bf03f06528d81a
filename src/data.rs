//! Input data model: OHLC price columns and linear trendlines

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Price history stored as four parallel columns, indexed by a common
/// integer step.
///
/// The serialized form uses the canonical capitalized column names, so
/// data shaped like `{"Open": [...], "High": [...], ...}` deserializes
/// directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OhlcSeries {
    #[serde(rename = "Open")]
    pub open: Vec<f64>,
    #[serde(rename = "High")]
    pub high: Vec<f64>,
    #[serde(rename = "Low")]
    pub low: Vec<f64>,
    #[serde(rename = "Close")]
    pub close: Vec<f64>,
}

impl OhlcSeries {
    pub fn new(open: Vec<f64>, high: Vec<f64>, low: Vec<f64>, close: Vec<f64>) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }

    /// Number of periods, taken from the open column.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Check that the four columns line up and hold at least one period.
    ///
    /// Returns the common length. Misaligned columns are a hard error,
    /// never truncated to the shortest column.
    pub(crate) fn validate(&self) -> Result<usize, ChartError> {
        let (open, high, low, close) = (
            self.open.len(),
            self.high.len(),
            self.low.len(),
            self.close.len(),
        );
        if open != high || open != low || open != close {
            return Err(ChartError::LengthMismatch {
                open,
                high,
                low,
                close,
            });
        }
        if open == 0 {
            return Err(ChartError::EmptySeries);
        }
        Ok(open)
    }
}

/// A straight line defined by its value at step 0 and a per-step gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trendline {
    pub first_value: f64,
    pub gradient: f64,
}

impl Trendline {
    pub fn new(first_value: f64, gradient: f64) -> Self {
        Self {
            first_value,
            gradient,
        }
    }

    /// Value of the line at the given step index.
    pub fn value_at(&self, step: usize) -> f64 {
        self.first_value + self.gradient * step as f64
    }
}

/// Candlestick data annotated with support and resistance trendlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickTrendline {
    #[serde(flatten)]
    pub ohlc: OhlcSeries,
    pub support: Trendline,
    pub resistance: Trendline,
}

impl CandlestickTrendline {
    pub fn new(ohlc: OhlcSeries, support: Trendline, resistance: Trendline) -> Self {
        Self {
            ohlc,
            support,
            resistance,
        }
    }
}
