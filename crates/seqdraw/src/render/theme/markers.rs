//! Arrowhead marker definitions.
//!
//! Signal lines reference their arrowheads through `marker-end`. One marker
//! is defined per arrow type and stroke color actually used.

use svg::node::element as svg_element;

use seqdraw_core::color::Color;

use crate::model::ArrowType;

/// Returns the id of the marker for `arrow` drawn in `color`.
pub fn marker_id(arrow: ArrowType, color: Color) -> String {
    let shape = match arrow {
        ArrowType::Filled => "block",
        ArrowType::Open => "open",
    };
    format!("arrow-{shape}-{}", color.to_id_safe_string())
}

/// Returns the `marker-end` attribute value referencing the marker.
pub fn marker_reference(arrow: ArrowType, color: Color) -> String {
    format!("url(#{})", marker_id(arrow, color))
}

/// Builds the marker definition for `arrow` drawn in `color`.
pub fn marker(arrow: ArrowType, color: Color) -> svg_element::Marker {
    let head = match arrow {
        ArrowType::Filled => svg_element::Path::new()
            .set("d", "M 0 0 L 10 5 L 0 10 z")
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha()),
        ArrowType::Open => svg_element::Path::new()
            .set("d", "M 0 0 L 10 5 L 0 10")
            .set("fill", "none")
            .set("stroke", color.to_string())
            .set("stroke-opacity", color.alpha())
            .set("stroke-width", 1.5),
    };

    svg_element::Marker::new()
        .set("id", marker_id(arrow, color))
        .set("viewBox", "0 0 10 10")
        .set("refX", 9)
        .set("refY", 5)
        .set("markerWidth", 8)
        .set("markerHeight", 8)
        .set("orient", "auto")
        .add(head)
}
