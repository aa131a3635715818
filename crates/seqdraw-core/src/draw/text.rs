//! Fonts and text styling for diagram labels.
//!
//! - [`Font`] - Family and size, the key for text measurement
//! - [`TextDefinition`] - A font plus color and slant, able to emit SVG `<text>`
//!
//! Labels are positioned the way the layout engine reasons about them: the
//! given point is the vertical center of the text block, and the
//! [`TextAnchor`] decides whether it is the start, middle or end of each line.

use svg::node::{Text as SvgText, element as svg_element};

use crate::{color::Color, geometry::Point};

/// Font family and size.
///
/// # Examples
///
/// ```
/// # use seqdraw_core::draw::Font;
/// let font = Font::new("Helvetica, Arial", 12);
/// assert_eq!(font.family(), "Helvetica, Arial");
/// assert_eq!(font.size(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    family: String,
    size: u16,
}

impl Font {
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Font family list as written in CSS.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Font size in points.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// First family of the CSS list, without quotes.
    ///
    /// ```
    /// # use seqdraw_core::draw::Font;
    /// let font = Font::new("'Andale Mono', monospace", 16);
    /// assert_eq!(font.primary_family(), "Andale Mono");
    /// ```
    pub fn primary_family(&self) -> &str {
        self.family
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Helvetica, Arial", 12)
    }
}

/// Slant of the text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Horizontal alignment of a label relative to its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value.
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Visual style of a label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextDefinition {
    font: Font,
    color: Option<Color>,
    style: FontStyle,
}

impl TextDefinition {
    /// Creates a text definition using `font`, default color and upright style.
    pub fn new(font: Font) -> Self {
        Self {
            font,
            color: None,
            style: FontStyle::Normal,
        }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Sets the fill color; `None` keeps the SVG default (black).
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Returns a copy with a different slant.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Builds an SVG `<text>` element for `content`.
    ///
    /// `position.y()` is the vertical center of the whole block and
    /// `block_height` its measured height; each line becomes a `<tspan>`.
    ///
    /// ```
    /// # use seqdraw_core::draw::{Font, TextAnchor, TextDefinition};
    /// # use seqdraw_core::geometry::Point;
    /// let def = TextDefinition::new(Font::default());
    /// let text = def.to_svg("one\ntwo", Point::new(10.0, 10.0), TextAnchor::Start, 20.0);
    /// let rendered = text.to_string();
    /// assert_eq!(rendered.matches("<tspan").count(), 2);
    /// assert!(rendered.contains("text-anchor=\"start\""));
    /// ```
    pub fn to_svg(
        &self,
        content: &str,
        position: Point,
        anchor: TextAnchor,
        block_height: f32,
    ) -> svg_element::Text {
        let lines: Vec<&str> = content.lines().collect();

        let line_height = if lines.is_empty() {
            0.0
        } else {
            block_height / lines.len() as f32
        };
        let y_offset = -(block_height + line_height) / 2.0;

        let mut text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", anchor.to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.font.family())
            .set("font-size", self.font.size());

        if self.style == FontStyle::Italic {
            text = text.set("font-style", "italic");
        }

        if let Some(color) = self.color {
            text = text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            text = text.add(tspan);
        }

        text
    }
}
