//! Sequence diagram layout.
//!
//! [`LayoutEngine`] turns a [`Diagram`] into a [`Layout`] in a single pass:
//!
//! 1. Measure the title and every actor name.
//! 2. Walk the items in time order, measure each message and record the
//!    horizontal room it needs as a distance constraint between two columns.
//! 3. Resolve the constraints with [`DistanceConstraintSolver`].
//! 4. Place notes relative to the resolved actor centers and compute the
//!    diagram size.

mod constraints;
mod positioned;

pub use constraints::{Column, DistanceConstraintSolver, Resolution};
pub use positioned::{
    ActorLayout, ItemLayout, ItemShape, LabelKind, Layout, NoteExtent, TitleLayout,
};

use log::{debug, info, trace};
use thiserror::Error;

use seqdraw_core::{
    draw::Font,
    geometry::{Insets, Point, Rect, Size},
    measure::{TextBox, TextMeasurer},
};

use crate::{
    config::LayoutConfig,
    model::{ActorId, Diagram, Item, NotePlacement},
};

/// Errors raised while laying out a diagram.
#[derive(Debug, Error)]
pub enum Error {
    #[error("item {item} refers to unknown actor {actor}")]
    InvalidActorReference { item: usize, actor: ActorId },

    #[error("non-finite geometry for {what}")]
    NonFiniteGeometry { what: String },

    #[error("invalid constraint between {left:?} and {right:?}")]
    InvalidConstraint { left: Column, right: Column },
}

/// Computes positions for every element of a sequence diagram.
///
/// # Example
///
/// ```
/// use seqdraw::{
///     config::LayoutConfig,
///     layout::LayoutEngine,
///     model::{ArrowType, Diagram, LineType},
/// };
/// use seqdraw_core::{draw::Font, measure::MonospaceMeasurer};
///
/// let mut diagram = Diagram::new();
/// let a = diagram.add_actor("A");
/// let b = diagram.add_actor("B");
/// diagram.push_signal(a, b, "hello", ArrowType::Filled, LineType::Solid);
///
/// let engine = LayoutEngine::new(LayoutConfig::default(), Font::default());
/// let layout = engine.layout(&diagram, &MonospaceMeasurer::default()).unwrap();
/// assert!(layout.actors()[1].center_x() > layout.actors()[0].center_x());
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    font: Font,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, font: Font) -> Self {
        Self { config, font }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `diagram`, measuring every label with `measurer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidActorReference`] if an item refers to an actor
    /// that is not part of the diagram and [`Error::NonFiniteGeometry`] if a
    /// measurement or derived value is not finite. No partial layout is
    /// produced on failure.
    pub fn layout(&self, diagram: &Diagram, measurer: &dyn TextMeasurer) -> Result<Layout, Error> {
        info!(
            actors = diagram.actors().len(),
            items = diagram.items().len();
            "Laying out sequence diagram"
        );
        self.validate(diagram)?;

        let config = &self.config;
        let margin = config.diagram_margin();

        let title = diagram
            .title()
            .map(|text| self.layout_title(text, measurer))
            .transpose()?;

        let (mut actors, actors_height) = self.measure_actors(diagram, measurer)?;

        let widths = actors.iter().map(|actor| actor.width).collect();
        let mut solver =
            DistanceConstraintSolver::new(widths).with_fixed_spacing(config.fixed_actor_spacing());

        let mut items = Vec::with_capacity(diagram.items().len());
        let mut signals_height = 0.0;
        for item in diagram.items() {
            let measured = self.measure_item(item, measurer)?;
            self.emit_constraints(&measured, actors.len(), &mut solver)?;
            signals_height += measured.height;
            items.push(measured);
        }

        let resolution = solver.solve();
        for (index, actor) in actors.iter_mut().enumerate() {
            actor.x = resolution.xs[index] + margin;
            actor.distances = solver.distances(index).cloned().unwrap_or_default();
            actor.padding_right = solver.padding_right(index).unwrap_or_default();
            ensure_finite(actor.x, || format!("position of actor `{}`", actor.name))?;
        }
        debug!(extent = resolution.extent; "Actor constraints resolved");

        for item in &mut items {
            self.place_note(item, &actors)?;
        }

        let title_size = title
            .as_ref()
            .map_or(Size::default(), |title| title.bounds.size());
        let width = resolution.extent.max(title_size.width()) + 2.0 * margin;
        let height = title_size.height() + 2.0 * margin + 2.0 * actors_height + signals_height;
        ensure_finite(width, || "diagram width".to_string())?;
        ensure_finite(height, || "diagram height".to_string())?;

        info!(width, height; "Layout calculated");

        Ok(Layout {
            margin,
            title,
            actors,
            items,
            actors_height,
            signals_height,
            width,
            height,
        })
    }

    fn validate(&self, diagram: &Diagram) -> Result<(), Error> {
        let count = diagram.actors().len();
        for (index, item) in diagram.items().iter().enumerate() {
            if let Some(actor) = item.actors().into_iter().find(|id| id.index() >= count) {
                return Err(Error::InvalidActorReference { item: index, actor });
            }
        }
        Ok(())
    }

    fn measure(&self, text: &str, measurer: &dyn TextMeasurer) -> Result<TextBox, Error> {
        let text_box = measurer.measure(text, &self.font);
        if !text_box.is_finite() {
            return Err(Error::NonFiniteGeometry {
                what: format!("text `{text}`"),
            });
        }
        trace!(text, width = text_box.width, height = text_box.height; "Measured text");
        Ok(text_box)
    }

    fn layout_title(&self, text: &str, measurer: &dyn TextMeasurer) -> Result<TitleLayout, Error> {
        let text_box = self.measure(text, measurer)?;
        let spacing = self.config.title_padding() + self.config.title_margin();
        let margin = self.config.diagram_margin();
        let size = text_box.size().add_padding(Insets::uniform(spacing));

        Ok(TitleLayout {
            text: text.to_string(),
            bounds: Rect::new(Point::new(margin, margin), size),
            text_box,
        })
    }

    fn measure_actors(
        &self,
        diagram: &Diagram,
        measurer: &dyn TextMeasurer,
    ) -> Result<(Vec<ActorLayout>, f32), Error> {
        let spacing = self.config.actor_padding() + self.config.actor_margin();
        let mut actors_height: f32 = 0.0;

        let actors = diagram
            .actors()
            .iter()
            .map(|actor| {
                let text_box = self.measure(actor.name(), measurer)?;
                let size = text_box.size().add_padding(Insets::uniform(spacing));
                actors_height = actors_height.max(size.height());
                Ok(ActorLayout {
                    name: actor.name().to_string(),
                    x: 0.0,
                    width: size.width(),
                    height: size.height(),
                    text_box,
                    distances: Default::default(),
                    padding_right: 0.0,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok((actors, actors_height))
    }

    fn measure_item(&self, item: &Item, measurer: &dyn TextMeasurer) -> Result<ItemLayout, Error> {
        let config = &self.config;
        let message = item.message();
        let text_box = self.measure(message, measurer)?;

        let (shape, spacing, extra_width) = match item {
            Item::Signal(signal) => {
                let spacing = config.signal_margin() + config.signal_padding();
                let extra = if signal.is_self_signal() {
                    config.self_signal_width()
                } else {
                    0.0
                };
                let shape = ItemShape::Signal {
                    from: signal.from(),
                    to: signal.to(),
                    arrow: signal.arrow(),
                    line: signal.line(),
                };
                (shape, spacing, extra)
            }
            Item::Note(note) => {
                let spacing = config.note_margin() + config.note_padding();
                let shape = ItemShape::Note {
                    placement: normalize_placement(note.placement()),
                    extent: NoteExtent { x: 0.0, width: 0.0 },
                };
                (shape, spacing, 0.0)
            }
        };

        // Actor centers grow with the index, so a lower source index means the
        // label sits left of a rightward arrow.
        let may_be_aside = match item {
            Item::Note(_) => true,
            Item::Signal(signal) => signal.from().index() < signal.to().index(),
        };
        let (label_kind, label) = match (item, config.strip_aside(message)) {
            (Item::Note(_), _) if config.is_cycle(message) => (LabelKind::Cycle, message),
            (_, Some(stripped)) if may_be_aside => (LabelKind::Aside, stripped),
            _ => (LabelKind::Regular, message),
        };
        let label_box = if label_kind == LabelKind::Aside {
            self.measure(label, measurer)?
        } else {
            text_box
        };

        let size = text_box
            .size()
            .add_padding(Insets::uniform(spacing))
            .grow_width(extra_width);

        Ok(ItemLayout {
            shape,
            message: message.to_string(),
            label: label.to_string(),
            label_kind,
            text_box,
            label_box,
            width: size.width(),
            height: size.height(),
        })
    }

    fn emit_constraints(
        &self,
        measured: &ItemLayout,
        actor_count: usize,
        solver: &mut DistanceConstraintSolver,
    ) -> Result<(), Error> {
        let config = &self.config;
        let width = measured.width;

        let (a, b, distance) = match &measured.shape {
            ItemShape::Signal { from, to, .. } if from == to => {
                let a = from.index();
                (Column::Actor(a), Column::right_of(a, actor_count), width)
            }
            ItemShape::Signal { from, to, .. } => {
                let (a, b) = ordered(*from, *to);
                (Column::Actor(a), Column::Actor(b), width)
            }
            ItemShape::Note { placement, .. } => {
                let beside = width + 2.0 * config.actor_margin();
                match *placement {
                    NotePlacement::LeftOf(actor) => {
                        let b = actor.index();
                        (Column::left_of(b), Column::Actor(b), beside)
                    }
                    NotePlacement::RightOf(actor) => {
                        let a = actor.index();
                        (Column::Actor(a), Column::right_of(a, actor_count), beside)
                    }
                    NotePlacement::OverMany(first, second) => {
                        let (a, b) = ordered(first, second);
                        let overlap = 2.0 * config.note_span_overlap();
                        (Column::Actor(a), Column::Actor(b), width - overlap)
                    }
                    NotePlacement::Over(actor) => {
                        // Anchored to a single column: demand half the width on each side.
                        let a = actor.index();
                        solver.ensure_distance(Column::left_of(a), Column::Actor(a), width / 2.0)?;
                        solver.ensure_distance(
                            Column::Actor(a),
                            Column::right_of(a, actor_count),
                            width / 2.0,
                        )?;
                        return Ok(());
                    }
                }
            }
        };

        solver.ensure_distance(a, b, distance)
    }

    fn place_note(&self, item: &mut ItemLayout, actors: &[ActorLayout]) -> Result<(), Error> {
        let width = item.width;
        let ItemShape::Note { placement, extent } = &mut item.shape else {
            return Ok(());
        };

        let center = |id: ActorId| actors[id.index()].center_x();
        let actor_margin = self.config.actor_margin();

        *extent = match *placement {
            NotePlacement::RightOf(actor) => NoteExtent {
                x: center(actor) + actor_margin,
                width,
            },
            NotePlacement::LeftOf(actor) => NoteExtent {
                x: center(actor) - actor_margin - width,
                width,
            },
            NotePlacement::Over(actor) => NoteExtent {
                x: center(actor) - width / 2.0,
                width,
            },
            NotePlacement::OverMany(first, second) => {
                let (left, right) = ordered(first, second);
                let overlap = self.config.note_span_overlap();
                let x = actors[left].center_x() - overlap;
                NoteExtent {
                    x,
                    width: (actors[right].center_x() + overlap) - x,
                }
            }
        };

        ensure_finite(extent.x, || format!("note `{}`", item.message))?;
        ensure_finite(extent.width, || format!("note `{}`", item.message))
    }
}

/// A note over the same actor twice is a note over that actor.
fn normalize_placement(placement: NotePlacement) -> NotePlacement {
    match placement {
        NotePlacement::OverMany(first, second) if first == second => NotePlacement::Over(first),
        other => other,
    }
}

fn ordered(first: ActorId, second: ActorId) -> (usize, usize) {
    let (a, b) = (first.index(), second.index());
    (a.min(b), a.max(b))
}

fn ensure_finite(value: f32, what: impl FnOnce() -> String) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteGeometry { what: what() })
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use seqdraw_core::measure::MonospaceMeasurer;

    use super::*;
    use crate::model::{ArrowType, LineType};

    /// Every character is 10 wide, every line 10 high.
    fn measurer() -> MonospaceMeasurer {
        MonospaceMeasurer::new(1.0, 1.0)
    }

    fn engine() -> LayoutEngine {
        LayoutEngine::new(LayoutConfig::default(), Font::new("mono", 10))
    }

    fn diagram(actors: &[&str]) -> Diagram {
        let mut diagram = Diagram::new();
        for name in actors {
            diagram.add_actor(*name);
        }
        diagram
    }

    fn id(index: usize) -> ActorId {
        ActorId::new(index)
    }

    struct NanMeasurer;

    impl TextMeasurer for NanMeasurer {
        fn measure(&self, _text: &str, _font: &Font) -> TextBox {
            TextBox::centered(f32::NAN, 10.0)
        }
    }

    #[test]
    fn test_actor_sizes() {
        let layout = engine().layout(&diagram(&["A", "Bob"]), &measurer()).unwrap();
        // text + (padding 5 + margin 15) * 2
        assert_approx_eq!(f32, layout.actors()[0].width(), 50.0);
        assert_approx_eq!(f32, layout.actors()[1].width(), 70.0);
        assert_approx_eq!(f32, layout.actors_height(), 50.0);
    }

    #[test]
    fn test_first_actor_starts_at_margin() {
        let layout = engine().layout(&diagram(&["A", "B"]), &measurer()).unwrap();
        assert_approx_eq!(f32, layout.actors()[0].x(), 5.0);
        assert_approx_eq!(f32, layout.actors()[1].x(), 55.0);
        assert_approx_eq!(f32, layout.width(), 110.0);
    }

    #[test]
    fn test_signal_constraint() {
        let mut d = diagram(&["A", "B"]);
        d.push_signal(id(1), id(0), "0123456789", ArrowType::Filled, LineType::Solid);
        let layout = engine().layout(&d, &measurer()).unwrap();

        // 100 + (1 + 1) * 2
        let item = &layout.items()[0];
        assert_approx_eq!(f32, item.width(), 104.0);
        assert_approx_eq!(f32, item.height(), 14.0);
        assert_eq!(layout.actors()[0].distances().get(&1), Some(&104.0));

        let a = &layout.actors()[0];
        let b = &layout.actors()[1];
        assert!(b.center_x() - a.center_x() >= 104.0 - 1e-3);
    }

    #[test]
    fn test_self_signal_reserves_loop_width() {
        let mut d = diagram(&["A", "B"]);
        d.push_signal(id(0), id(0), "abc", ArrowType::Filled, LineType::Solid);
        let layout = engine().layout(&d, &measurer()).unwrap();

        let item = &layout.items()[0];
        assert!(item.is_self_signal());
        assert_approx_eq!(f32, item.width(), 30.0 + 4.0 + 10.0);
        assert_eq!(layout.actors()[0].distances().get(&1), Some(&44.0));
    }

    #[test]
    fn test_self_signal_on_last_actor_pads_right() {
        let mut d = diagram(&["A"]);
        d.push_signal(id(0), id(0), "0123456789", ArrowType::Open, LineType::Dotted);
        let layout = engine().layout(&d, &measurer()).unwrap();

        assert_approx_eq!(f32, layout.actors()[0].padding_right(), 114.0);
        // margin + actor width + padding right + margin
        assert_approx_eq!(f32, layout.width(), 5.0 + 50.0 + 114.0 + 5.0);
    }

    #[test]
    fn test_note_left_of_first_actor_offsets_it() {
        let mut d = diagram(&["A", "B"]);
        d.push_note(NotePlacement::LeftOf(id(0)), "abcd");
        let layout = engine().layout(&d, &measurer()).unwrap();

        // note width 44, plus 2 * actor margin
        let distance: f32 = 44.0 + 30.0;
        let a = &layout.actors()[0];
        assert_approx_eq!(f32, a.x(), 5.0 + distance - 25.0);

        let extent = layout.items()[0].note_extent().unwrap();
        assert_approx_eq!(f32, extent.x, a.center_x() - 15.0 - 44.0);
        assert_approx_eq!(f32, extent.width, 44.0);
    }

    #[test]
    fn test_note_right_of_records_distance_with_actor_margins() {
        let mut d = diagram(&["A", "B"]);
        d.push_note(NotePlacement::RightOf(id(0)), "abcd");
        let layout = engine().layout(&d, &measurer()).unwrap();

        assert_eq!(layout.actors()[0].distances().get(&1), Some(&74.0));
        let extent = layout.items()[0].note_extent().unwrap();
        assert_approx_eq!(f32, extent.x, layout.actors()[0].center_x() + 15.0);
    }

    #[test]
    fn test_note_over_one_actor_only_constrains_neighbors() {
        let mut d = diagram(&["A", "B", "C"]);
        d.push_note(NotePlacement::Over(id(1)), &"x".repeat(30));
        let layout = engine().layout(&d, &measurer()).unwrap();

        let half = (300.0 + 4.0) / 2.0;
        assert_eq!(layout.actors()[0].distances().get(&1), Some(&half));
        assert_eq!(layout.actors()[1].distances().get(&2), Some(&half));
        assert!(layout.actors()[0].distances().get(&2).is_none());

        let extent = layout.items()[0].note_extent().unwrap();
        assert_approx_eq!(f32, extent.x + extent.width / 2.0, layout.actors()[1].center_x());
    }

    #[test]
    fn test_note_over_single_actor_diagram() {
        let mut d = diagram(&["A"]);
        d.push_note(NotePlacement::Over(id(0)), &"x".repeat(20));
        let layout = engine().layout(&d, &measurer()).unwrap();

        let half = (200.0 + 4.0) / 2.0;
        let a = &layout.actors()[0];
        assert_approx_eq!(f32, a.x(), 5.0 + half - 25.0);
        assert_approx_eq!(f32, a.padding_right(), half);
        assert!(a.distances().is_empty());
    }

    #[test]
    fn test_note_over_many_spans_centers_with_overlap() {
        let mut d = diagram(&["A", "B", "C"]);
        d.push_note(NotePlacement::OverMany(id(2), id(0)), "n");
        let layout = engine().layout(&d, &measurer()).unwrap();

        let a = layout.actors()[0].center_x();
        let c = layout.actors()[2].center_x();
        let extent = layout.items()[0].note_extent().unwrap();
        assert_approx_eq!(f32, extent.x, a - 6.0);
        assert_approx_eq!(f32, extent.width, (c + 6.0) - (a - 6.0));
        // 14 - (2 * 1 + 2 * 5)
        assert_eq!(layout.actors()[0].distances().get(&2), Some(&2.0));
    }

    #[test]
    fn test_note_over_many_box_covers_text_when_binding() {
        let mut d = diagram(&["A", "B"]);
        d.push_note(NotePlacement::OverMany(id(0), id(1)), &"x".repeat(20));
        let layout = engine().layout(&d, &measurer()).unwrap();

        // 204 - 2 * (5 + 1)
        assert_eq!(layout.actors()[0].distances().get(&1), Some(&192.0));
        let a = layout.actors()[0].center_x();
        let b = layout.actors()[1].center_x();
        assert_approx_eq!(f32, b - a, 192.0, epsilon = 1e-3);

        let item = &layout.items()[0];
        let extent = item.note_extent().unwrap();
        assert!(extent.width >= item.width() - 1e-3);
        assert_approx_eq!(f32, extent.width, item.width(), epsilon = 1e-3);
    }

    #[test]
    fn test_note_over_same_actor_twice_is_over_one() {
        let mut d = diagram(&["A", "B"]);
        d.push_note(NotePlacement::OverMany(id(1), id(1)), "n");
        let layout = engine().layout(&d, &measurer()).unwrap();

        match layout.items()[0].shape() {
            ItemShape::Note { placement, .. } => assert_eq!(*placement, NotePlacement::Over(id(1))),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_height_formula() {
        let mut d = diagram(&["A", "B"]).with_title("Title");
        d.push_signal(id(0), id(1), "one", ArrowType::Filled, LineType::Solid);
        d.push_note(NotePlacement::Over(id(0)), "two\nlines");
        let layout = engine().layout(&d, &measurer()).unwrap();

        let title_height = 10.0 + 4.0;
        let items: f32 = layout.items().iter().map(ItemLayout::height).sum();
        assert_approx_eq!(f32, items, 14.0 + 24.0);
        assert_approx_eq!(
            f32,
            layout.height(),
            2.0 * 5.0 + 2.0 * layout.actors_height() + title_height + items
        );
        assert_approx_eq!(f32, layout.header_top(), 5.0 + title_height);
        assert_approx_eq!(f32, layout.footer_top(), 5.0 + title_height + 50.0 + items);
    }

    #[test]
    fn test_wide_title_sets_width() {
        let d = diagram(&["A"]).with_title(&"t".repeat(40));
        let layout = engine().layout(&d, &measurer()).unwrap();
        let title = layout.title().unwrap();
        assert_approx_eq!(f32, title.bounds().width(), 404.0);
        assert_approx_eq!(f32, title.bounds().x(), 5.0);
        assert_approx_eq!(f32, layout.width(), 414.0);
    }

    #[test]
    fn test_labels_for_cycle_and_aside_notes() {
        let mut d = diagram(&["A", "B"]);
        d.push_note(NotePlacement::OverMany(id(0), id(1)), "Cycle 1");
        d.push_note(NotePlacement::RightOf(id(1)), "Note: quiet");
        d.push_signal(id(0), id(1), "Cycle as signal", ArrowType::Filled, LineType::Solid);
        let layout = engine().layout(&d, &measurer()).unwrap();

        let items = layout.items();
        assert_eq!(items[0].label_kind(), LabelKind::Cycle);
        assert_eq!(items[0].label(), "Cycle 1");
        assert_eq!(items[1].label_kind(), LabelKind::Aside);
        assert_eq!(items[1].label(), "quiet");
        assert_approx_eq!(f32, items[1].label_box().width, 50.0);
        assert_approx_eq!(f32, items[1].text_box().width, 110.0);
        assert_eq!(items[2].label_kind(), LabelKind::Regular);
    }

    #[test]
    fn test_aside_prefix_on_signals_follows_direction() {
        let mut d = diagram(&["A", "B"]);
        d.push_signal(id(0), id(1), "Note: ahead", ArrowType::Filled, LineType::Solid);
        d.push_signal(id(1), id(0), "Note: back", ArrowType::Filled, LineType::Solid);
        d.push_signal(id(0), id(0), "Note: self", ArrowType::Filled, LineType::Solid);
        let layout = engine().layout(&d, &measurer()).unwrap();

        let items = layout.items();
        assert_eq!(items[0].label_kind(), LabelKind::Aside);
        assert_eq!(items[0].label(), "ahead");
        assert_approx_eq!(f32, items[0].label_box().width, 50.0);
        // The gap still makes room for the prefix.
        assert_approx_eq!(f32, items[0].width(), 110.0 + 4.0);

        assert_eq!(items[1].label_kind(), LabelKind::Regular);
        assert_eq!(items[1].label(), "Note: back");
        assert_eq!(items[2].label_kind(), LabelKind::Regular);
    }

    #[test]
    fn test_fixed_actor_spacing() {
        let config = LayoutConfig::default().with_fixed_actor_spacing(Some(150.0));
        let engine = LayoutEngine::new(config, Font::new("mono", 10));
        let mut d = diagram(&["A", "B"]);
        d.push_signal(id(0), id(1), "x", ArrowType::Filled, LineType::Solid);
        let layout = engine.layout(&d, &measurer()).unwrap();

        let a = &layout.actors()[0];
        let b = &layout.actors()[1];
        assert_approx_eq!(f32, b.center_x() - a.center_x(), 150.0);
    }

    #[test]
    fn test_invalid_actor_reference() {
        let mut d = diagram(&["A"]);
        d.push_signal(id(0), id(3), "lost", ArrowType::Filled, LineType::Solid);
        let err = engine().layout(&d, &measurer()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidActorReference { item: 0, actor } if actor == id(3)
        ));
    }

    #[test]
    fn test_non_finite_measurement() {
        let err = engine().layout(&diagram(&["A"]), &NanMeasurer).unwrap_err();
        assert!(matches!(err, Error::NonFiniteGeometry { .. }));
    }

    #[test]
    fn test_layout_is_repeatable() {
        let mut d = diagram(&["A", "B", "C"]);
        d.push_signal(id(0), id(2), "far", ArrowType::Open, LineType::Dotted);
        d.push_note(NotePlacement::LeftOf(id(1)), "n");
        let first = engine().layout(&d, &measurer()).unwrap();
        let second = engine().layout(&d, &measurer()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_diagram() {
        let layout = engine().layout(&Diagram::new(), &measurer()).unwrap();
        assert!(layout.actors().is_empty());
        assert_approx_eq!(f32, layout.width(), 10.0);
        assert_approx_eq!(f32, layout.height(), 10.0);
    }
}
