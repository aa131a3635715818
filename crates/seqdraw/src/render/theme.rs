//! SVG drawing themes.
//!
//! - [`PlainTheme`] - Straight lines and rectangles.
//! - [`HandDrawnTheme`] - Every straight segment becomes a slightly bent
//!   cubic curve, for a sketched look.
//!
//! Both render into the same layered SVG output and produce an
//! [`SvgDrawing`] once the dispatcher is done.

mod canvas;
mod hand;
mod markers;
mod plain;

pub use canvas::SvgDrawing;
pub use hand::HandDrawnTheme;
pub use plain::PlainTheme;
