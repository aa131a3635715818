//! SVG document assembly.

use log::debug;
use svg::node::element as svg_element;

use seqdraw_core::color::Color;

use super::Error;
use crate::render::theme::SvgDrawing;

/// Wraps a finished [`SvgDrawing`] into a standalone SVG document.
///
/// # Examples
///
/// ```
/// # use seqdraw::{export::svg::SvgExporter, render::theme::PlainTheme};
/// # use seqdraw_core::draw::{Font, TextDefinition};
/// let drawing = PlainTheme::new(TextDefinition::new(Font::default())).finish();
/// let svg = SvgExporter::new(120.0, 80.0).export(drawing).unwrap();
/// assert!(svg.contains("viewBox=\"0 0 120 80\""));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SvgExporter {
    width: f32,
    height: f32,
    background: Option<Color>,
}

impl SvgExporter {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background: None,
        }
    }

    /// Paints the whole canvas with `color` below everything else.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// Builds the document and serializes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] unless both dimensions are
    /// finite and positive.
    pub fn export(&self, drawing: SvgDrawing) -> Result<String, Error> {
        Ok(self.document(drawing)?.to_string())
    }

    fn document(&self, drawing: SvgDrawing) -> Result<svg::Document, Error> {
        let (width, height) = (self.width, self.height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut doc = svg::Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(color) = self.background {
            let background = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", color)
                .set("class", "background");
            doc = doc.add(background);
        }

        let (groups, markers) = drawing.into_parts();
        debug!(layers = groups.len(), markers = markers.len(); "Assembling SVG document");

        if !markers.is_empty() {
            let defs = markers
                .into_iter()
                .fold(svg_element::Definitions::new(), |defs, marker| defs.add(marker));
            doc = doc.add(defs);
        }

        for group in groups {
            doc = doc.add(group);
        }

        Ok(doc)
    }
}
