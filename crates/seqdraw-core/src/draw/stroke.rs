//! Stroke definitions for lines and box borders.
//!
//! Signals are drawn solid or dotted, lifelines and boxes use the theme's
//! default stroke. [`StrokeDefinition`] carries the color, width and dash
//! pattern; [`apply_stroke!`](crate::apply_stroke!) writes them onto any SVG
//! element.
//!
//! | Property | SVG attribute |
//! |----------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//! | `style` | `stroke-dasharray` |

use std::str::FromStr;

use crate::color::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Continuous line
    #[default]
    Solid,
    /// Long dashes (`6,3`)
    Dashed,
    /// Short dashes, used for dotted signals (`3,2`)
    Dotted,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value, or `None` for solid lines.
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("6,3"),
            Self::Dotted => Some("3,2"),
        }
    }
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!(
                "invalid stroke style `{s}`, valid values: solid, dashed, dotted"
            )),
        }
    }
}

/// Color, width and dash pattern of a stroke.
///
/// # Examples
///
/// ```
/// use seqdraw_core::{color::Color, draw::{StrokeDefinition, StrokeStyle}};
///
/// let stroke = StrokeDefinition::default();
/// assert_eq!(stroke.width(), 1.0);
///
/// let dotted = stroke.with_style(StrokeStyle::Dotted);
/// assert_eq!(dotted.style(), StrokeStyle::Dotted);
/// assert_eq!(dotted.color(), Color::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Returns a copy with a different dash pattern.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns a copy with a different color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// ```
/// use seqdraw_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
/// let line = seqdraw_core::apply_stroke!(line, &stroke);
/// assert!(line.to_string().contains("stroke-width"));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
