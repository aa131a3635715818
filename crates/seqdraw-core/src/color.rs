//! CSS color handling for diagram strokes, fills and text.
//!
//! [`Color`] wraps `DynamicColor` from the `color` crate so every style
//! definition can carry a parsed, validated color.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Parse a CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqdraw_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Opaque white, the fill used behind labels and inside boxes.
    pub fn white() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }

    /// Returns a string usable inside an SVG `id` attribute.
    ///
    /// Marker definitions are keyed by color, so the CSS serialisation has to
    /// be stripped of characters that are not valid in identifiers.
    ///
    /// ```
    /// use seqdraw_core::color::Color;
    ///
    /// let id = Color::new("#ff8000").unwrap().to_id_safe_string();
    /// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let mut sanitized = self
            .to_string()
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%', '/'], "_");

        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Returns a copy with a different alpha value.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Alpha component between 0.0 (transparent) and 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_string())
    }
}
