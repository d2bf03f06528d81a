//! Line chart over a single value series

use crate::error::ChartError;
use crate::renderer::{Canvas, SvgBuilder};
use crate::scale::{max_of, min_of, rescale, step_x};

const LINE_STROKE: &str = "black";

/// Render `series` as a connected polyline.
///
/// Consecutive samples are joined by black line segments, so N samples
/// yield N - 1 segments. The value range is stretched over the full
/// canvas height; a single-sample series produces a document with no
/// elements.
///
/// # Errors
///
/// [`ChartError::EmptySeries`] for an empty series,
/// [`ChartError::NonPositiveCanvas`] for a degenerate canvas.
pub fn plot_line(series: &[f64], canvas: Canvas) -> Result<String, ChartError> {
    canvas.validate()?;
    if series.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let y_min = min_of(series);
    let y_max = max_of(series);

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            (
                step_x(i, series.len(), canvas.width),
                rescale(value, y_min, y_max, canvas.height, true),
            )
        })
        .collect();

    let mut svg = SvgBuilder::new(canvas);
    for pair in points.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];
        svg.add_line(x1, y1, x2, y2, LINE_STROKE, None);
    }
    Ok(svg.build())
}
