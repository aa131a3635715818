//! SVG element sink shared by all themes.
//!
//! Themes only decide what path a line or box follows; the canvas turns
//! that path into styled SVG, files it under the right [`RenderLayer`] and
//! keeps track of the arrowhead markers in use.

use svg::node::element as svg_element;

use seqdraw_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, SvgNode, TextDefinition},
    geometry::Rect,
};

use super::markers;
use crate::{
    model::ArrowType,
    render::{Error, Label, LabelBackground, LineKind, LineStyle, primitives::ensure_finite},
};

/// The collected output of a theme.
#[derive(Debug)]
pub struct SvgDrawing {
    output: LayeredOutput,
    markers: Vec<svg_element::Marker>,
}

impl SvgDrawing {
    /// Layer groups, bottom first.
    pub fn into_parts(self) -> (Vec<SvgNode>, Vec<svg_element::Marker>) {
        (self.output.render(), self.markers)
    }

    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.output.layer_len(layer)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

#[derive(Debug)]
pub(super) struct SvgCanvas {
    output: LayeredOutput,
    stroke: StrokeDefinition,
    text: TextDefinition,
    arrows: Vec<(ArrowType, Color)>,
}

impl SvgCanvas {
    pub(super) fn new(text: TextDefinition) -> Self {
        Self {
            output: LayeredOutput::new(),
            stroke: StrokeDefinition::default(),
            text,
            arrows: Vec::new(),
        }
    }

    /// Adds an unfilled path for a line.
    pub(super) fn line_path(&mut self, data: String, style: LineStyle, classes: &str) {
        let stroke = self.stroke.with_style(style.dash());
        let mut path = svg_element::Path::new()
            .set("d", data)
            .set("fill", "none")
            .set("class", format!("{classes} line"));
        path = apply_stroke!(path, &stroke);

        if let Some(arrow) = style.arrow() {
            let color = stroke.color();
            if !self.arrows.contains(&(arrow, color)) {
                self.arrows.push((arrow, color));
            }
            path = path.set("marker-end", markers::marker_reference(arrow, color));
        }

        let layer = match style.kind() {
            LineKind::Lifeline => RenderLayer::Lifeline,
            LineKind::Signal | LineKind::Rule => RenderLayer::Signal,
        };
        self.output.add_to_layer(layer, Box::new(path));
    }

    /// Adds a white-filled straight rectangle.
    pub(super) fn rect(&mut self, rect: Rect, classes: &str) {
        let element = svg_element::Rectangle::new()
            .set("x", rect.x())
            .set("y", rect.y())
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", Color::white())
            .set("class", format!("{classes} rect"));
        let element = apply_stroke!(element, &self.stroke);
        self.output.add_to_layer(RenderLayer::Shape, Box::new(element));
    }

    /// Adds a white-filled closed path standing in for a rectangle.
    pub(super) fn shape_path(&mut self, data: String, classes: &str) {
        let element = svg_element::Path::new()
            .set("d", data)
            .set("fill", Color::white())
            .set("class", format!("{classes} rect"));
        let element = apply_stroke!(element, &self.stroke);
        self.output.add_to_layer(RenderLayer::Shape, Box::new(element));
    }

    /// Adds a label and its background, returning the covered area.
    pub(super) fn text(&mut self, label: &Label<'_>, classes: &str) -> Result<Rect, Error> {
        let position = label.position();
        let text_box = label.text_box();
        ensure_finite(
            "text",
            &[position.x(), position.y(), text_box.width, text_box.height],
        )?;

        let drawn = label.drawn_bounds();
        let background = svg_element::Rectangle::new()
            .set("x", drawn.x())
            .set("y", drawn.y())
            .set("width", drawn.width())
            .set("height", drawn.height())
            .set("class", format!("{classes} text"));
        match label.background() {
            LabelBackground::Fill => {
                let background = background.set("fill", Color::white()).set("stroke", "none");
                self.output
                    .add_to_layer(RenderLayer::TextBackground, Box::new(background));
            }
            LabelBackground::Outline => {
                let background = apply_stroke!(background.set("fill", "none"), &self.stroke);
                self.output
                    .add_to_layer(RenderLayer::TextBackground, Box::new(background));
            }
            LabelBackground::None => {}
        }

        let text = self
            .text
            .clone()
            .with_style(label.style())
            .to_svg(label.text(), position, label.anchor(), text_box.height)
            .set("class", format!("{classes} text"));
        self.output.add_to_layer(RenderLayer::Text, Box::new(text));

        Ok(drawn)
    }

    pub(super) fn finish(self) -> SvgDrawing {
        let markers = self
            .arrows
            .iter()
            .map(|&(arrow, color)| markers::marker(arrow, color))
            .collect();
        SvgDrawing {
            output: self.output,
            markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use seqdraw_core::{draw::Font, geometry::Point, measure::TextBox};

    use super::*;
    use crate::model::LineType;

    fn canvas() -> SvgCanvas {
        SvgCanvas::new(TextDefinition::new(Font::default()))
    }

    #[test]
    fn test_markers_are_deduplicated() {
        let mut canvas = canvas();
        let style = LineStyle::signal(LineType::Solid, Some(ArrowType::Filled));
        canvas.line_path("M 0,0 L 10,0".to_string(), style, "signal");
        canvas.line_path("M 0,5 L 10,5".to_string(), style, "signal");
        canvas.line_path(
            "M 0,9 L 10,9".to_string(),
            LineStyle::signal(LineType::Dotted, Some(ArrowType::Open)),
            "signal",
        );

        let drawing = canvas.finish();
        assert_eq!(drawing.marker_count(), 2);
        assert_eq!(drawing.layer_len(RenderLayer::Signal), 3);
    }

    #[test]
    fn test_lifeline_layer() {
        let mut canvas = canvas();
        canvas.line_path("M 0,0 L 0,10".to_string(), LineStyle::lifeline(), "lifeline");
        let drawing = canvas.finish();
        assert_eq!(drawing.layer_len(RenderLayer::Lifeline), 1);
        assert_eq!(drawing.marker_count(), 0);
    }

    #[test]
    fn test_text_backgrounds() {
        let mut canvas = canvas();
        let text_box = TextBox::centered(10.0, 10.0);
        let at = Point::new(0.0, 0.0);

        canvas.text(&Label::new("a", at, text_box), "filled").unwrap();
        canvas
            .text(
                &Label::new("b", at, text_box).with_background(LabelBackground::Outline),
                "outlined",
            )
            .unwrap();
        canvas
            .text(
                &Label::new("c", at, text_box).with_background(LabelBackground::None),
                "bare",
            )
            .unwrap();

        let drawing = canvas.finish();
        assert_eq!(drawing.layer_len(RenderLayer::TextBackground), 2);
        assert_eq!(drawing.layer_len(RenderLayer::Text), 3);
    }

    #[test]
    fn test_text_rejects_non_finite_position() {
        let mut canvas = canvas();
        let label = Label::new("a", Point::new(f32::NAN, 0.0), TextBox::centered(1.0, 1.0));
        assert!(canvas.text(&label, "x").is_err());
    }
}
