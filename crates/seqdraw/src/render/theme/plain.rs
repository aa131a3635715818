//! Straight-line rendering: lines are single `M`/`L` paths and boxes are
//! plain `<rect>` elements.

use seqdraw_core::{
    draw::TextDefinition,
    geometry::{Point, Rect},
};

use super::canvas::{SvgCanvas, SvgDrawing};
use crate::render::{DrawingPrimitives, Error, Label, LineStyle, primitives::ensure_finite};

/// Draws straight lines and rectangles.
#[derive(Debug)]
pub struct PlainTheme {
    canvas: SvgCanvas,
}

impl PlainTheme {
    pub fn new(text: TextDefinition) -> Self {
        Self {
            canvas: SvgCanvas::new(text),
        }
    }

    /// Consumes the theme and returns everything drawn.
    pub fn finish(self) -> SvgDrawing {
        self.canvas.finish()
    }
}

impl DrawingPrimitives for PlainTheme {
    fn line(
        &mut self,
        from: Point,
        to: Point,
        style: LineStyle,
        classes: &str,
    ) -> Result<(), Error> {
        ensure_finite("line", &[from.x(), from.y(), to.x(), to.y()])?;
        let data = format!("M {},{} L {},{}", from.x(), from.y(), to.x(), to.y());
        self.canvas.line_path(data, style, classes);
        Ok(())
    }

    fn rect(&mut self, rect: Rect, classes: &str) -> Result<(), Error> {
        ensure_finite("rect", &[rect.x(), rect.y(), rect.width(), rect.height()])?;
        self.canvas.rect(rect, classes);
        Ok(())
    }

    fn text(&mut self, label: &Label<'_>, classes: &str) -> Result<Rect, Error> {
        self.canvas.text(label, classes)
    }
}
