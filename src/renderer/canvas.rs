//! Canvas dimensions for rendered charts

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Output canvas size in drawing units.
///
/// Origin is the top-left corner and y grows downward, so data-space
/// y values are flipped when mapped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 100.0,
        }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Set the canvas width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the canvas height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Both dimensions must be strictly positive.
    pub(crate) fn validate(self) -> Result<(), ChartError> {
        if self.width > 0.0 && self.height > 0.0 {
            Ok(())
        } else {
            Err(ChartError::NonPositiveCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}
