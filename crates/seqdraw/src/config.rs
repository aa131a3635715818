//! Configuration types for seqdraw rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources; every field has a default, so a
//! partial TOML file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout, font and style.
//! - [`LayoutConfig`] - Spacing tunables used by the layout engine.
//! - [`FontConfig`] - Font size and family used for every label.
//! - [`StyleConfig`] - Theme selection, background color and jitter seed.
//!
//! # Example
//!
//! ```
//! # use seqdraw::config::{AppConfig, ThemeKind};
//! let config = AppConfig::default();
//! assert_eq!(config.style().theme(), ThemeKind::Hand);
//! assert_eq!(config.layout().actor_margin(), 15.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use std::str::FromStr;

use serde::Deserialize;

use seqdraw_core::{color::Color, draw::Font};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Font configuration section.
    #[serde(default)]
    font: FontConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its three sections.
    pub fn new(layout: LayoutConfig, font: FontConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            font,
            style,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the font configuration.
    pub fn font_config(&self) -> &FontConfig {
        &self.font
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns a mutable reference to the style configuration.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    /// Resolves the label font, using the theme's family when none is configured.
    ///
    /// ```
    /// # use seqdraw::config::{AppConfig, StyleConfig, ThemeKind};
    /// let mut config = AppConfig::default();
    /// config.style_mut().set_theme(ThemeKind::Plain);
    /// assert_eq!(config.font().family(), "Andale Mono, monospace");
    /// assert_eq!(config.font().size(), 12);
    /// ```
    pub fn font(&self) -> Font {
        let family = self
            .font
            .family
            .as_deref()
            .unwrap_or_else(|| self.style.theme.default_font_family());
        Font::new(family, self.font.size)
    }

    /// Applies the compact display settings in one call.
    ///
    /// Signal margin becomes `margin + 2`, note margin becomes `margin`, and
    /// the label font is replaced.
    ///
    /// ```
    /// # use seqdraw::config::AppConfig;
    /// let mut config = AppConfig::default();
    /// config.apply_display_settings(3.0, 14, "Verdana");
    /// assert_eq!(config.layout().signal_margin(), 5.0);
    /// assert_eq!(config.layout().note_margin(), 3.0);
    /// assert_eq!(config.font().family(), "Verdana");
    /// ```
    pub fn apply_display_settings(&mut self, margin: f32, font_size: u16, font_family: &str) {
        self.layout.signal_margin = margin + 2.0;
        self.layout.note_margin = margin;
        self.font.size = font_size;
        self.font.family = Some(font_family.to_string());
    }
}

/// Spacing tunables for the layout engine.
///
/// Margins are the gap outside a box, paddings the gap inside it. Each value
/// only feeds spacing arithmetic.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    diagram_margin: f32,
    actor_margin: f32,
    actor_padding: f32,
    signal_margin: f32,
    signal_padding: f32,
    note_margin: f32,
    note_padding: f32,
    /// How far a note over two actors reaches past each actor's center.
    note_overlap: f32,
    title_margin: f32,
    title_padding: f32,
    /// How far a self-signal loop extends to the right of the lifeline.
    self_signal_width: f32,
    /// Replaces every recorded actor gap with this value when set.
    fixed_actor_spacing: Option<f32>,
    /// Message prefix of notes drawn as bracketed, unnumbered cycle markers.
    cycle_marker: String,
    /// Message prefix of notes drawn as italic asides.
    aside_prefix: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            diagram_margin: 5.0,
            actor_margin: 15.0,
            actor_padding: 5.0,
            signal_margin: 1.0,
            signal_padding: 1.0,
            note_margin: 1.0,
            note_padding: 1.0,
            note_overlap: 5.0,
            title_margin: 1.0,
            title_padding: 1.0,
            self_signal_width: 10.0,
            fixed_actor_spacing: None,
            cycle_marker: "Cycle ".to_string(),
            aside_prefix: "Note: ".to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn diagram_margin(&self) -> f32 {
        self.diagram_margin
    }

    pub fn actor_margin(&self) -> f32 {
        self.actor_margin
    }

    pub fn actor_padding(&self) -> f32 {
        self.actor_padding
    }

    pub fn signal_margin(&self) -> f32 {
        self.signal_margin
    }

    pub fn signal_padding(&self) -> f32 {
        self.signal_padding
    }

    pub fn note_margin(&self) -> f32 {
        self.note_margin
    }

    pub fn note_padding(&self) -> f32 {
        self.note_padding
    }

    pub fn note_overlap(&self) -> f32 {
        self.note_overlap
    }

    /// How far a note over two actors reaches past each outer center.
    pub fn note_span_overlap(&self) -> f32 {
        self.note_overlap + self.note_padding
    }

    pub fn title_margin(&self) -> f32 {
        self.title_margin
    }

    pub fn title_padding(&self) -> f32 {
        self.title_padding
    }

    pub fn self_signal_width(&self) -> f32 {
        self.self_signal_width
    }

    pub fn fixed_actor_spacing(&self) -> Option<f32> {
        self.fixed_actor_spacing
    }

    pub fn cycle_marker(&self) -> &str {
        &self.cycle_marker
    }

    pub fn aside_prefix(&self) -> &str {
        &self.aside_prefix
    }

    /// Returns a copy that spaces every constrained actor pair uniformly.
    pub fn with_fixed_actor_spacing(mut self, spacing: Option<f32>) -> Self {
        self.fixed_actor_spacing = spacing;
        self
    }

    /// Returns `true` if `message` starts with the cycle marker.
    pub fn is_cycle(&self, message: &str) -> bool {
        !self.cycle_marker.is_empty() && message.starts_with(&self.cycle_marker)
    }

    /// Returns the message without the aside prefix, or `None` if it has none.
    pub fn strip_aside<'a>(&self, message: &'a str) -> Option<&'a str> {
        if self.aside_prefix.is_empty() {
            return None;
        }
        message.strip_prefix(self.aside_prefix.as_str())
    }
}

/// Font settings for every label.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    size: u16,
    /// CSS font family list; the theme decides when unset.
    family: Option<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: 12,
            family: None,
        }
    }
}

impl FontConfig {
    pub fn new(size: u16, family: Option<String>) -> Self {
        Self { size, family }
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }
}

/// The drawing theme used to render a diagram.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Straight lines and rectangles.
    #[serde(alias = "simple")]
    Plain,
    /// Every line jittered to look sketched.
    #[default]
    Hand,
}

impl ThemeKind {
    /// Font family used when the configuration names none.
    pub fn default_font_family(self) -> &'static str {
        match self {
            Self::Plain => "Andale Mono, monospace",
            Self::Hand => "daniel, cursive",
        }
    }
}

impl FromStr for ThemeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "simple" => Ok(Self::Plain),
            "hand" => Ok(Self::Hand),
            _ => Err(format!("unsupported theme `{s}`, valid values: plain, hand")),
        }
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    theme: ThemeKind,

    /// Background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Seed for the hand-drawn jitter; random when unset.
    #[serde(default)]
    seed: Option<u64>,
}

impl StyleConfig {
    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeKind) {
        self.theme = theme;
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.diagram_margin(), 5.0);
        assert_eq!(layout.actor_padding(), 5.0);
        assert_eq!(layout.signal_margin(), 1.0);
        assert_eq!(layout.note_overlap(), 5.0);
        assert_eq!(layout.self_signal_width(), 10.0);
        assert_eq!(layout.fixed_actor_spacing(), None);
        assert_eq!(layout.cycle_marker(), "Cycle ");
    }

    #[test]
    fn test_is_cycle() {
        let layout = LayoutConfig::default();
        assert!(layout.is_cycle("Cycle 1"));
        assert!(!layout.is_cycle("Cycle"));
        assert!(!layout.is_cycle("cycle 1"));
    }

    #[test]
    fn test_strip_aside() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.strip_aside("Note: quiet"), Some("quiet"));
        assert_eq!(layout.strip_aside("loud"), None);
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("hand".parse::<ThemeKind>().unwrap(), ThemeKind::Hand);
        assert_eq!("simple".parse::<ThemeKind>().unwrap(), ThemeKind::Plain);
        assert!("fancy".parse::<ThemeKind>().is_err());
    }

    #[test]
    fn test_font_uses_theme_family_by_default() {
        let config = AppConfig::default();
        assert_eq!(config.font().family(), "daniel, cursive");

        let config = AppConfig::new(
            LayoutConfig::default(),
            FontConfig::new(16, Some("Verdana".to_string())),
            StyleConfig::default(),
        );
        assert_eq!(config.font(), Font::new("Verdana", 16));
    }

    #[test]
    fn test_invalid_background_color() {
        let style = StyleConfig {
            background_color: Some("nope".to_string()),
            ..StyleConfig::default()
        };
        let err = style.background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }
}
