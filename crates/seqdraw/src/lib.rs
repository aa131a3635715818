//! seqdraw - Sequence diagram layout and SVG rendering.
//!
//! A diagram is a list of actors and a time-ordered list of signals and
//! notes between them. seqdraw computes where every actor column and item
//! goes, then draws the result with a plain or a hand-drawn theme.
//!
//! ```text
//! JSON / Diagram API
//!     ↓ input
//! Diagram
//!     ↓ layout (constraint solving)
//! Layout
//!     ↓ render (theme)
//! SvgDrawing
//!     ↓ export
//! SVG document
//! ```

pub mod config;
pub mod export;
pub mod input;
pub mod layout;
pub mod model;
pub mod render;

mod error;

pub use seqdraw_core::{color, draw, geometry, measure};

pub use error::SeqdrawError;

use log::{debug, info, trace};

use seqdraw_core::{
    draw::TextDefinition,
    measure::{FontMetricsMeasurer, TextMeasurer},
};

use config::{AppConfig, ThemeKind};
use export::svg::SvgExporter;
use layout::{Layout, LayoutEngine};
use model::Diagram;
use render::{
    RenderDispatcher,
    theme::{HandDrawnTheme, PlainTheme},
};

/// Builder for parsing and rendering sequence diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use seqdraw::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"{ "actors": ["A", "B"],
///     "items": [{ "kind": "signal", "from": "A", "to": "B", "message": "Hi" }] }"#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON document into a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`SeqdrawError::Input`] carrying the source for malformed
    /// documents.
    pub fn parse(&self, source: &str) -> Result<Diagram, SeqdrawError> {
        info!("Parsing diagram");
        let diagram =
            input::parse(source).map_err(|err| SeqdrawError::new_input_error(err, source))?;
        debug!("Diagram parsed successfully");
        trace!(diagram:?; "Parsed diagram");
        Ok(diagram)
    }

    /// Compute the layout of a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`SeqdrawError::Layout`] for invalid actor references and
    /// non-finite geometry.
    pub fn layout(
        &self,
        diagram: &Diagram,
        measurer: &dyn TextMeasurer,
    ) -> Result<Layout, SeqdrawError> {
        let engine = LayoutEngine::new(self.config.layout().clone(), self.config.font());
        Ok(engine.layout(diagram, measurer)?)
    }

    /// Render a diagram to an SVG string, measuring text with real font
    /// metrics.
    ///
    /// # Errors
    ///
    /// Returns `SeqdrawError` for configuration, layout, rendering or export
    /// errors.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, SeqdrawError> {
        self.render_svg_with(diagram, &FontMetricsMeasurer)
    }

    /// Render a diagram to an SVG string using `measurer` for text.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::render_svg`].
    ///
    /// # Examples
    ///
    /// ```
    /// use seqdraw::{DiagramBuilder, measure::MonospaceMeasurer, model::Diagram};
    ///
    /// let mut diagram = Diagram::new();
    /// diagram.add_actor("Alice");
    ///
    /// let svg = DiagramBuilder::default()
    ///     .render_svg_with(&diagram, &MonospaceMeasurer::default())
    ///     .unwrap();
    /// assert!(svg.starts_with("<svg"));
    /// ```
    pub fn render_svg_with(
        &self,
        diagram: &Diagram,
        measurer: &dyn TextMeasurer,
    ) -> Result<String, SeqdrawError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(SeqdrawError::Config)?;

        let layout = self.layout(diagram, measurer)?;
        let dispatcher = RenderDispatcher::new(&layout, self.config.layout());
        let text = TextDefinition::new(self.config.font());

        let theme = self.config.style().theme();
        info!(theme:?; "Drawing diagram");
        let drawing = match theme {
            ThemeKind::Plain => {
                let mut theme = PlainTheme::new(text);
                dispatcher.draw(&mut theme)?;
                theme.finish()
            }
            ThemeKind::Hand => {
                let mut theme = HandDrawnTheme::new(text, self.config.style().seed());
                dispatcher.draw(&mut theme)?;
                theme.finish()
            }
        };

        let svg = SvgExporter::new(layout.width(), layout.height())
            .with_background(background)
            .export(drawing)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
