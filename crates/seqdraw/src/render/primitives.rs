//! The drawing capability the dispatcher renders through.

use seqdraw_core::{
    draw::{FontStyle, StrokeStyle, TextAnchor},
    geometry::{Point, Rect},
    measure::TextBox,
};

use super::Error;
use crate::model::{ArrowType, LineType};

/// Gap between a bracketed label and its side rules.
const BRACKET_GAP: f32 = 5.0;

/// Extra room around an outlined label.
const OUTLINE_INSET: f32 = 2.0;

/// What is drawn behind a label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LabelBackground {
    /// Opaque white box hugging the text, hiding lines underneath.
    #[default]
    Fill,
    /// Unfilled outline slightly larger than the text.
    Outline,
    None,
}

/// A positioned piece of text.
///
/// `position.y()` is the vertical center of the text block; `anchor`
/// decides whether `position.x()` is its start, middle or end.
#[derive(Debug, Clone, PartialEq)]
pub struct Label<'a> {
    text: &'a str,
    position: Point,
    anchor: TextAnchor,
    text_box: TextBox,
    style: FontStyle,
    background: LabelBackground,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str, position: Point, text_box: TextBox) -> Self {
        Self {
            text,
            position,
            anchor: TextAnchor::Middle,
            text_box,
            style: FontStyle::Normal,
            background: LabelBackground::Fill,
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_background(mut self, background: LabelBackground) -> Self {
        self.background = background;
        self
    }

    pub fn text(&self) -> &str {
        self.text
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn text_box(&self) -> TextBox {
        self.text_box
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn background(&self) -> LabelBackground {
        self.background
    }

    /// Area covered by the text itself.
    ///
    /// ```
    /// # use seqdraw::render::Label;
    /// # use seqdraw_core::{draw::TextAnchor, geometry::Point, measure::TextBox};
    /// let label = Label::new("hi", Point::new(100.0, 50.0), TextBox::centered(20.0, 10.0))
    ///     .with_anchor(TextAnchor::End);
    /// let bounds = label.bounds();
    /// assert_eq!(bounds.x(), 80.0);
    /// assert_eq!(bounds.y(), 45.0);
    /// ```
    pub fn bounds(&self) -> Rect {
        let width = self.text_box.width;
        let height = self.text_box.height;
        let x = match self.anchor {
            TextAnchor::Start => self.position.x(),
            TextAnchor::Middle => self.position.x() - width / 2.0,
            TextAnchor::End => self.position.x() - width,
        };
        Rect::from_xywh(x, self.position.y() - height / 2.0, width, height)
    }

    /// Area covered by the text and its background.
    pub fn drawn_bounds(&self) -> Rect {
        let bounds = self.bounds();
        match self.background {
            LabelBackground::Outline => Rect::from_xywh(
                bounds.x() - OUTLINE_INSET,
                bounds.y() - OUTLINE_INSET,
                bounds.width() + 2.0 * OUTLINE_INSET,
                bounds.height() + 2.0 * OUTLINE_INSET,
            ),
            LabelBackground::Fill | LabelBackground::None => bounds,
        }
    }
}

/// What a line represents, which decides its stacking order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Drawn below every box.
    Lifeline,
    Signal,
    /// Decoration such as cycle brackets.
    #[default]
    Rule,
}

/// Dash pattern, arrowhead and role of a line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    dash: StrokeStyle,
    arrow: Option<ArrowType>,
    kind: LineKind,
}

impl LineStyle {
    /// A solid decoration line without arrowhead.
    pub fn plain() -> Self {
        Self::default()
    }

    /// A solid actor lifeline.
    pub fn lifeline() -> Self {
        Self {
            kind: LineKind::Lifeline,
            ..Self::default()
        }
    }

    /// The style of a signal line.
    pub fn signal(line: LineType, arrow: Option<ArrowType>) -> Self {
        let dash = match line {
            LineType::Solid => StrokeStyle::Solid,
            LineType::Dotted => StrokeStyle::Dotted,
        };
        Self {
            dash,
            arrow,
            kind: LineKind::Signal,
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn dash(&self) -> StrokeStyle {
        self.dash
    }

    /// Arrowhead at the end of the line.
    pub fn arrow(&self) -> Option<ArrowType> {
        self.arrow
    }
}

/// Primitive drawing operations provided by a theme.
///
/// Every operation rejects non-finite coordinates with
/// [`Error::NonFiniteGeometry`]. `classes` is a space-separated list of CSS
/// classes attached to the emitted elements.
pub trait DrawingPrimitives {
    /// Draws a straight line from `from` to `to`.
    fn line(&mut self, from: Point, to: Point, style: LineStyle, classes: &str)
    -> Result<(), Error>;

    /// Draws a box outline with a white fill.
    fn rect(&mut self, rect: Rect, classes: &str) -> Result<(), Error>;

    /// Draws a label with its background and returns the area it covers.
    fn text(&mut self, label: &Label<'_>, classes: &str) -> Result<Rect, Error>;

    /// Draws a label with horizontal rules running from `left` to the label
    /// and from the label to `right`, at the label's vertical center.
    fn bracketed_text(
        &mut self,
        label: &Label<'_>,
        left: f32,
        right: f32,
        classes: &str,
    ) -> Result<Rect, Error> {
        let drawn = self.text(label, classes)?;
        let y = label.position().y();
        let rule_classes = format!("{classes} rule");

        self.line(
            Point::new(left, y),
            Point::new(drawn.x() - BRACKET_GAP, y),
            LineStyle::plain(),
            &rule_classes,
        )?;
        self.line(
            Point::new(drawn.max_x() + BRACKET_GAP, y),
            Point::new(right, y),
            LineStyle::plain(),
            &rule_classes,
        )?;

        Ok(drawn)
    }
}

/// Fails with [`Error::NonFiniteGeometry`] unless every value is finite.
pub(crate) fn ensure_finite(primitive: &'static str, values: &[f32]) -> Result<(), Error> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFiniteGeometry { primitive })
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Point, Point)>,
    }

    impl DrawingPrimitives for Recorder {
        fn line(&mut self, from: Point, to: Point, _: LineStyle, _: &str) -> Result<(), Error> {
            self.lines.push((from, to));
            Ok(())
        }

        fn rect(&mut self, _: Rect, _: &str) -> Result<(), Error> {
            Ok(())
        }

        fn text(&mut self, label: &Label<'_>, _: &str) -> Result<Rect, Error> {
            Ok(label.drawn_bounds())
        }
    }

    #[test]
    fn test_label_bounds_by_anchor() {
        let text_box = TextBox::centered(40.0, 10.0);
        let at = Point::new(100.0, 20.0);

        let start = Label::new("x", at, text_box).with_anchor(TextAnchor::Start);
        let middle = Label::new("x", at, text_box);
        assert_approx_eq!(f32, start.bounds().x(), 100.0);
        assert_approx_eq!(f32, middle.bounds().x(), 80.0);
        assert_approx_eq!(f32, middle.bounds().y(), 15.0);
    }

    #[test]
    fn test_outline_grows_drawn_bounds() {
        let label = Label::new("x", Point::new(0.0, 0.0), TextBox::centered(10.0, 10.0))
            .with_background(LabelBackground::Outline);
        let drawn = label.drawn_bounds();
        assert_approx_eq!(f32, drawn.width(), 14.0);
        assert_approx_eq!(f32, drawn.x(), -7.0);
    }

    #[test]
    fn test_signal_line_style() {
        let style = LineStyle::signal(LineType::Dotted, Some(ArrowType::Open));
        assert_eq!(style.dash(), StrokeStyle::Dotted);
        assert_eq!(style.arrow(), Some(ArrowType::Open));
        assert_eq!(style.kind(), LineKind::Signal);
        assert_eq!(LineStyle::plain().arrow(), None);
        assert_eq!(LineStyle::lifeline().kind(), LineKind::Lifeline);
    }

    #[test]
    fn test_bracketed_text_draws_side_rules() {
        let mut recorder = Recorder::default();
        let label = Label::new("Cycle 1", Point::new(50.0, 10.0), TextBox::centered(20.0, 8.0));
        let drawn = recorder.bracketed_text(&label, 0.0, 100.0, "note").unwrap();

        assert_eq!(recorder.lines.len(), 2);
        let (left_from, left_to) = recorder.lines[0];
        let (right_from, right_to) = recorder.lines[1];
        assert_approx_eq!(f32, left_from.x(), 0.0);
        assert_approx_eq!(f32, left_to.x(), drawn.x() - 5.0);
        assert_approx_eq!(f32, right_from.x(), drawn.max_x() + 5.0);
        assert_approx_eq!(f32, right_to.x(), 100.0);
        assert_approx_eq!(f32, left_from.y(), 10.0);
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("line", &[1.0, 2.0]).is_ok());
        assert!(matches!(
            ensure_finite("line", &[1.0, f32::NAN]),
            Err(Error::NonFiniteGeometry { primitive: "line" })
        ));
    }
}
