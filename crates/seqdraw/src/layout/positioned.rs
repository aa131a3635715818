//! The positioned result of laying out a diagram.
//!
//! [`Layout`] is produced by [`LayoutEngine`](super::LayoutEngine) and never
//! refers back to the input model by reference, so the same diagram can be
//! laid out any number of times.

use std::collections::BTreeMap;

use seqdraw_core::{geometry::Rect, measure::TextBox};

use crate::model::{ActorId, ArrowType, LineType, NotePlacement};

/// The title box.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLayout {
    pub(super) text: String,
    pub(super) bounds: Rect,
    pub(super) text_box: TextBox,
}

impl TitleLayout {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Outer box including the title margin.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn text_box(&self) -> TextBox {
        self.text_box
    }
}

/// A resolved actor column.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorLayout {
    pub(super) name: String,
    pub(super) x: f32,
    pub(super) width: f32,
    pub(super) height: f32,
    pub(super) text_box: TextBox,
    pub(super) distances: BTreeMap<usize, f32>,
    pub(super) padding_right: f32,
}

impl ActorLayout {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Left edge of the actor box.
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height of the actor's own box; drawn boxes use the shared band height.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn text_box(&self) -> TextBox {
        self.text_box
    }

    /// Minimum center distances to actors on the right, keyed by actor index.
    pub fn distances(&self) -> &BTreeMap<usize, f32> {
        &self.distances
    }

    /// Space reserved after the actor box.
    pub fn padding_right(&self) -> f32 {
        self.padding_right
    }
}

/// Horizontal extent of a note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteExtent {
    pub x: f32,
    pub width: f32,
}

impl NoteExtent {
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }
}

/// What an item draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemShape {
    Signal {
        from: ActorId,
        to: ActorId,
        arrow: ArrowType,
        line: LineType,
    },
    Note {
        placement: NotePlacement,
        extent: NoteExtent,
    },
}

/// Presentation variant of an item's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Regular,
    /// Bracketed and excluded from numbering.
    Cycle,
    /// Italic, prefix stripped, no background fill.
    Aside,
}

/// A measured signal or note.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout {
    pub(super) shape: ItemShape,
    pub(super) message: String,
    pub(super) label: String,
    pub(super) label_kind: LabelKind,
    pub(super) text_box: TextBox,
    pub(super) label_box: TextBox,
    pub(super) width: f32,
    pub(super) height: f32,
}

impl ItemLayout {
    pub fn shape(&self) -> &ItemShape {
        &self.shape
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text actually drawn; differs from the message for asides.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_kind(&self) -> LabelKind {
        self.label_kind
    }

    /// Measured box of the full message.
    pub fn text_box(&self) -> TextBox {
        self.text_box
    }

    /// Measured box of [`Self::label`].
    pub fn label_box(&self) -> TextBox {
        self.label_box
    }

    /// Required width, without any constraint extra.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_self_signal(&self) -> bool {
        matches!(self.shape, ItemShape::Signal { from, to, .. } if from == to)
    }

    /// Horizontal extent for notes, `None` for signals.
    pub fn note_extent(&self) -> Option<NoteExtent> {
        match self.shape {
            ItemShape::Note { extent, .. } => Some(extent),
            ItemShape::Signal { .. } => None,
        }
    }
}

/// A fully positioned diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub(super) margin: f32,
    pub(super) title: Option<TitleLayout>,
    pub(super) actors: Vec<ActorLayout>,
    pub(super) items: Vec<ItemLayout>,
    pub(super) actors_height: f32,
    pub(super) signals_height: f32,
    pub(super) width: f32,
    pub(super) height: f32,
}

impl Layout {
    pub fn title(&self) -> Option<&TitleLayout> {
        self.title.as_ref()
    }

    pub fn actors(&self) -> &[ActorLayout] {
        &self.actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&ActorLayout> {
        self.actors.get(id.index())
    }

    /// Items in time order.
    pub fn items(&self) -> &[ItemLayout] {
        &self.items
    }

    /// Height of the shared header and footer band.
    pub fn actors_height(&self) -> f32 {
        self.actors_height
    }

    /// Sum of all item heights.
    pub fn signals_height(&self) -> f32 {
        self.signals_height
    }

    pub fn title_height(&self) -> f32 {
        self.title.as_ref().map_or(0.0, |title| title.bounds.height())
    }

    /// Top of the actor header band.
    pub fn header_top(&self) -> f32 {
        self.margin + self.title_height()
    }

    /// Top of the first item, just below the header band.
    pub fn items_top(&self) -> f32 {
        self.header_top() + self.actors_height
    }

    /// Top of the actor footer band.
    pub fn footer_top(&self) -> f32 {
        self.items_top() + self.signals_height
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
