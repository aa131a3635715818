//! Styling definitions and layered SVG output.
//!
//! Renderers describe strokes with [`StrokeDefinition`], text with
//! [`TextDefinition`] and collect the SVG nodes they produce in a
//! [`LayeredOutput`], which restores the intended z-order when the document is
//! assembled.

mod layer;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Font, FontStyle, TextAnchor, TextDefinition};
