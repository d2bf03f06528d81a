//! SVG markup emission for chart primitives

use super::Canvas;

/// Build an SVG document incrementally from line and rect primitives.
///
/// Elements are emitted in insertion order, so callers control the
/// paint order (later elements render on top). All numeric attributes
/// are rounded to two decimal places.
pub struct SvgBuilder {
    canvas: Canvas,
    elements: Vec<String>,
}

impl SvgBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            elements: Vec::new(),
        }
    }

    /// Add a line segment with the given stroke color and optional
    /// stroke width.
    pub fn add_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        stroke_width: Option<f64>,
    ) {
        let width_attr = stroke_width
            .map(|w| format!(r#" stroke-width="{}""#, fmt_coord(w)))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{}/>"#,
            fmt_coord(x1),
            fmt_coord(y1),
            fmt_coord(x2),
            fmt_coord(y2),
            stroke,
            width_attr
        ));
    }

    /// Add a rectangle with fill and stroke colors.
    pub fn add_rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str, stroke: &str) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}"/>"#,
            fmt_coord(x),
            fmt_coord(y),
            fmt_coord(width),
            fmt_coord(height),
            fill,
            stroke
        ));
    }

    /// Assemble the final self-contained SVG document.
    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_coord(self.canvas.width),
            h = fmt_coord(self.canvas.height),
        );
        for element in &self.elements {
            svg.push_str("\n  ");
            svg.push_str(element);
        }
        svg.push_str("\n</svg>");
        svg
    }
}

/// Round to two decimal places; integral values print without a
/// fractional part. Non-finite values print as-is.
fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.is_finite() && rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
