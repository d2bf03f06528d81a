//! Linear rescaling from data space into canvas space
//!
//! All three chart functions share the same mapping: values are
//! normalized against a data-space range and stretched over a canvas
//! extent, with an optional flip for the top-left-origin y axis.

/// Map `value` from `[domain_min, domain_max]` onto `[0, range_max]`.
///
/// With `flip` set, the result is measured back from `range_max`,
/// matching a canvas whose y axis grows downward.
///
/// A degenerate domain (`domain_max == domain_min`) divides by zero;
/// the resulting non-finite value is passed through untouched.
pub(crate) fn rescale(
    value: f64,
    domain_min: f64,
    domain_max: f64,
    range_max: f64,
    flip: bool,
) -> f64 {
    let scaled = (value - domain_min) / (domain_max - domain_min) * range_max;
    if flip {
        range_max - scaled
    } else {
        scaled
    }
}

/// Horizontal canvas position of a step index.
///
/// Divides by the series length rather than `len - 1`, so the final
/// sample sits one step short of the right edge.
pub(crate) fn step_x(index: usize, len: usize, width: f64) -> f64 {
    (index as f64 / len as f64) * width
}

pub(crate) fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
