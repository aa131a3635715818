//! seqdraw core types and definitions
//!
//! This crate provides the foundational types shared by the seqdraw layout
//! engine and its renderers:
//!
//! - **Geometry**: Points, sizes, rectangles and insets ([`geometry`] module)
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Draw**: Stroke and text styles plus layered SVG output ([`draw`] module)
//! - **Measure**: The text measurement capability used by layout ([`measure`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod measure;
