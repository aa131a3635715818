//! Text measurement for layout.
//!
//! Layout never talks to a drawing backend directly; it asks a
//! [`TextMeasurer`] for the bounding box of every label. Two implementations
//! are provided:
//!
//! - [`FontMetricsMeasurer`] shapes text with cosmic-text against the fonts
//!   installed on the system.
//! - [`MonospaceMeasurer`] uses a fixed advance per character and is fully
//!   deterministic across machines, which makes it the measurer of choice for
//!   tests and headless rendering.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{debug, info};

use crate::{draw::Font, geometry::Size};

/// Bounding box of a measured string, relative to a centered anchor.
///
/// `x` and `y` are the offsets of the top-left corner from the anchor, so a
/// box measured for a label centered at `(cx, cy)` covers
/// `cx + x ..= cx + x + width`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TextBox {
    /// Creates a box of the given size centered on the anchor.
    ///
    /// ```
    /// # use seqdraw_core::measure::TextBox;
    /// let bbox = TextBox::centered(40.0, 10.0);
    /// assert_eq!(bbox.x, -20.0);
    /// assert_eq!(bbox.y, -5.0);
    /// ```
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            x: -width / 2.0,
            y: -height / 2.0,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Measures the bounding box of a string rendered with a font.
///
/// Implementations must be deterministic: the same text and font always
/// yield the same box.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextBox;
}

/// Measures text with real font metrics through cosmic-text.
///
/// The underlying `FontSystem` is expensive to build, so one instance is
/// shared by the whole process and created on first use.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontMetricsMeasurer;

impl FontMetricsMeasurer {
    pub fn new() -> Self {
        Self
    }
}

impl TextMeasurer for FontMetricsMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextBox {
        let size = FONT_SYSTEM
            .get_or_init(SharedFontSystem::new)
            .text_size(text, font);
        TextBox::centered(size.width(), size.height())
    }
}

struct SharedFontSystem {
    font_system: Mutex<FontSystem>,
}

impl SharedFontSystem {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn text_size(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        // A panic while shaping leaves the font database intact.
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Points to pixels at 96 DPI.
        let font_size_px = f32::from(font.size()) * 1.33;
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(font.primary_family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        let mut runs = 0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
            runs += 1;
        }

        if runs == 0 {
            debug!(family = font.family(); "No layout runs, falling back to estimate");
            let lines = text.lines().count().max(1);
            let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * font_size_px * 0.55;
            total_height = lines as f32 * metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static FONT_SYSTEM: OnceLock<SharedFontSystem> = OnceLock::new();

/// Fixed-advance text measurement.
///
/// Every character advances by `font size × advance`, every line takes
/// `font size × line_height`. The width of a multi-line label is the width of
/// its longest line.
///
/// ```
/// # use seqdraw_core::{draw::Font, measure::{MonospaceMeasurer, TextMeasurer}};
/// let measurer = MonospaceMeasurer::default();
/// let bbox = measurer.measure("abcd\nab", &Font::new("monospace", 10));
/// assert_eq!(bbox.width, 24.0);
/// assert_eq!(bbox.height, 24.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    advance: f32,
    line_height: f32,
}

impl MonospaceMeasurer {
    /// Creates a measurer with the given factors, both relative to the font size.
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(0.6, 1.2)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextBox {
        if text.is_empty() {
            return TextBox::default();
        }

        let size = f32::from(font.size());
        let (lines, longest) = text.lines().fold((0usize, 0usize), |(count, longest), line| {
            (count + 1, longest.max(line.chars().count()))
        });

        TextBox::centered(
            longest as f32 * size * self.advance,
            lines.max(1) as f32 * size * self.line_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_box_centered() {
        let bbox = TextBox::centered(30.0, 12.0);
        assert_approx_eq!(f32, bbox.x, -15.0);
        assert_approx_eq!(f32, bbox.y, -6.0);
        assert_eq!(bbox.size(), Size::new(30.0, 12.0));
        assert!(bbox.is_finite());
    }

    #[test]
    fn test_text_box_not_finite() {
        let bbox = TextBox::centered(f32::NAN, 12.0);
        assert!(!bbox.is_finite());
    }

    #[test]
    fn test_monospace_empty() {
        let bbox = MonospaceMeasurer::default().measure("", &Font::default());
        assert_eq!(bbox, TextBox::default());
    }

    #[test]
    fn test_monospace_single_line() {
        let bbox = MonospaceMeasurer::new(1.0, 2.0).measure("hello", &Font::new("mono", 10));
        assert_approx_eq!(f32, bbox.width, 50.0);
        assert_approx_eq!(f32, bbox.height, 20.0);
        assert_approx_eq!(f32, bbox.x, -25.0);
    }

    #[test]
    fn test_monospace_multiline_uses_longest_line() {
        let bbox = MonospaceMeasurer::new(1.0, 1.0).measure("a\nabc\nab", &Font::new("mono", 10));
        assert_approx_eq!(f32, bbox.width, 30.0);
        assert_approx_eq!(f32, bbox.height, 30.0);
    }

    #[test]
    fn test_monospace_scales_with_font_size() {
        let measurer = MonospaceMeasurer::default();
        let small = measurer.measure("label", &Font::new("mono", 10));
        let large = measurer.measure("label", &Font::new("mono", 20));
        assert_approx_eq!(f32, large.width, small.width * 2.0);
        assert_approx_eq!(f32, large.height, small.height * 2.0);
    }

    #[test]
    fn test_monospace_is_deterministic() {
        let measurer = MonospaceMeasurer::default();
        let font = Font::default();
        assert_eq!(measurer.measure("same", &font), measurer.measure("same", &font));
    }

    #[test]
    fn test_font_metrics_empty() {
        let bbox = FontMetricsMeasurer::new().measure("", &Font::default());
        assert_eq!(bbox.size(), Size::default());
    }

    #[test]
    fn test_font_metrics_multiline_taller() {
        let measurer = FontMetricsMeasurer::new();
        let font = Font::default();
        let single = measurer.measure("line", &font);
        let double = measurer.measure("line\nline", &font);
        assert!(double.height > single.height);
        assert!(single.is_finite());
    }
}
