//! SVG output layer
//!
//! This module owns the drawing side of the pipeline: the canvas
//! geometry charts are scaled into, and the builder that accumulates
//! vector primitives and assembles the final markup document.

pub mod canvas;
pub mod svg;

pub use canvas::Canvas;
pub use svg::SvgBuilder;
