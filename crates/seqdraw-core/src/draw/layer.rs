//! Layer-based collection of SVG nodes.
//!
//! Drawing primitives are invoked in diagram order, but the SVG document needs
//! lifelines below boxes, boxes below arrows and label backgrounds directly
//! below their text. Each node is therefore tagged with a [`RenderLayer`] and
//! the layers are emitted bottom to top.
//!
//! # Example
//!
//! ```
//! # use seqdraw_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Text, Box::new(svg::node::element::Text::new("Hi")));
//! output.add_to_layer(RenderLayer::Shape, Box::new(Rectangle::new()));
//!
//! // Shapes are emitted first even though they were added last.
//! let groups = output.render();
//! assert_eq!(groups.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Z-order layers of a rendered sequence diagram.
///
/// The derived `Ord` follows declaration order: the first variant renders
/// first (bottom), the last renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Vertical actor lifelines
    Lifeline,
    /// Actor, title and note boxes
    Shape,
    /// Signal lines, self-signal loops and cycle brackets
    Signal,
    /// Fills placed behind labels so lines do not cross the text
    TextBackground,
    /// Labels
    Text,
}

impl RenderLayer {
    /// Returns the name used in the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lifeline => "lifeline",
            Self::Shape => "shape",
            Self::Signal => "signal",
            Self::TextBackground => "text-background",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the given layer, keeping insertion order within the layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if no node has been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes added to `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders every non-empty layer into an SVG `<g data-layer="...">`,
    /// bottom layer first. Consumes the output to avoid cloning nodes.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: preserves insertion order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
