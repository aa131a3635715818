//! Export of rendered diagrams.
//!
//! This is the last stage of the pipeline:
//!
//! ```text
//! Diagram
//!     ↓ layout
//! Layout
//!     ↓ render (theme)
//! SvgDrawing
//!     ↓ export (this module)
//! SVG document
//! ```
//!
//! [`Error`] converts into [`SeqdrawError::Export`] at the crate boundary.
//!
//! [`SeqdrawError::Export`]: crate::SeqdrawError::Export

/// SVG export backend.
pub mod svg;

use thiserror::Error;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid document dimensions {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
}
