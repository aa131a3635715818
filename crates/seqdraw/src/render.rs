//! Drawing a positioned diagram.
//!
//! [`RenderDispatcher`] walks a [`Layout`] and issues primitive drawing calls
//! on a [`DrawingPrimitives`] implementation: first the title, then the actor
//! boxes and lifelines, then every signal and note in time order.
//!
//! Items are numbered with a display index that ends up in their CSS
//! classes (`signal signal-0`, `note note-1`, ...). Items whose message starts
//! with the cycle marker are not numbered.

mod primitives;
pub mod theme;

pub use primitives::{DrawingPrimitives, Label, LabelBackground, LineKind, LineStyle};

use log::{debug, info};
use thiserror::Error;

use seqdraw_core::{
    draw::{FontStyle, TextAnchor},
    geometry::{Insets, Point, Rect},
    measure::TextBox,
};

use crate::{
    config::LayoutConfig,
    layout::{ItemLayout, ItemShape, LabelKind, Layout},
    model::{ActorId, ArrowType, LineType, NotePlacement},
};

/// Errors raised while drawing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("non-finite coordinates passed to `{primitive}`")]
    NonFiniteGeometry { primitive: &'static str },

    #[error("layout has no actor {0}")]
    UnknownActor(ActorId),
}

/// Draws a [`Layout`] through a theme.
///
/// The dispatcher holds no state besides the layout and configuration it
/// reads; every side effect goes through the theme.
#[derive(Debug, Clone, Copy)]
pub struct RenderDispatcher<'a> {
    layout: &'a Layout,
    config: &'a LayoutConfig,
}

impl<'a> RenderDispatcher<'a> {
    /// `config` must be the configuration the layout was computed with.
    pub fn new(layout: &'a Layout, config: &'a LayoutConfig) -> Self {
        Self { layout, config }
    }

    /// Draws the whole diagram.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the theme.
    pub fn draw(&self, theme: &mut dyn DrawingPrimitives) -> Result<(), Error> {
        info!(
            actors = self.layout.actors().len(),
            items = self.layout.items().len();
            "Rendering diagram"
        );

        self.draw_title(theme)?;
        self.draw_actors(theme)?;
        self.draw_items(theme)?;

        debug!("Diagram rendered");
        Ok(())
    }

    fn draw_title(&self, theme: &mut dyn DrawingPrimitives) -> Result<(), Error> {
        let Some(title) = self.layout.title() else {
            return Ok(());
        };
        draw_text_box(
            theme,
            title.bounds(),
            self.config.title_margin(),
            title.text(),
            title.text_box(),
            "title",
        )
    }

    fn draw_actors(&self, theme: &mut dyn DrawingPrimitives) -> Result<(), Error> {
        let band = self.layout.actors_height();
        let header_top = self.layout.header_top();
        let footer_top = self.layout.footer_top();
        let actor_margin = self.config.actor_margin();

        for (index, actor) in self.layout.actors().iter().enumerate() {
            for (top, position) in [(header_top, "top"), (footer_top, "bottom")] {
                draw_text_box(
                    theme,
                    Rect::from_xywh(actor.x(), top, actor.width(), band),
                    actor_margin,
                    actor.name(),
                    actor.text_box(),
                    &format!("actor actor-{index} {position}"),
                )?;
            }

            let x = actor.center_x();
            theme.line(
                Point::new(x, header_top + band - actor_margin),
                Point::new(x, footer_top + actor_margin),
                LineStyle::lifeline(),
                &format!("lifeline actor-{index}"),
            )?;
        }

        Ok(())
    }

    fn draw_items(&self, theme: &mut dyn DrawingPrimitives) -> Result<(), Error> {
        let mut top = self.layout.items_top();
        let mut next_index = 0;

        for item in self.layout.items() {
            let display_index = if self.config.is_cycle(item.message()) {
                None
            } else {
                next_index += 1;
                Some(next_index - 1)
            };

            match *item.shape() {
                ItemShape::Signal {
                    from,
                    to,
                    arrow,
                    line,
                } => {
                    let classes = item_classes("signal", display_index);
                    let signal = SignalEnds {
                        from,
                        to,
                        arrow,
                        line,
                    };
                    if from == to {
                        self.draw_self_signal(theme, item, signal, top, &classes)?;
                    } else {
                        self.draw_signal(theme, item, signal, top, &classes)?;
                    }
                }
                ItemShape::Note { placement, .. } => {
                    let classes = item_classes("note", display_index);
                    self.draw_note(theme, item, placement, top, &classes)?;
                }
            }

            top += item.height();
        }

        Ok(())
    }

    fn center_x(&self, id: ActorId) -> Result<f32, Error> {
        self.layout
            .actor(id)
            .map(|actor| actor.center_x())
            .ok_or(Error::UnknownActor(id))
    }

    fn draw_signal(
        &self,
        theme: &mut dyn DrawingPrimitives,
        item: &ItemLayout,
        signal: SignalEnds,
        top: f32,
        classes: &str,
    ) -> Result<(), Error> {
        let a_x = self.center_x(signal.from)?;
        let b_x = self.center_x(signal.to)?;
        let actor_margin = self.config.actor_margin();

        // The label hangs off the source lifeline, on the side the arrow points to.
        let (x, anchor) = if a_x < b_x {
            (a_x + actor_margin, TextAnchor::Start)
        } else {
            (a_x - actor_margin, TextAnchor::End)
        };
        let mut label = Label::new(
            item.label(),
            Point::new(x, top + item.height() / 2.0),
            item.label_box(),
        )
        .with_anchor(anchor);
        if item.label_kind() == LabelKind::Aside {
            label = label
                .with_style(FontStyle::Italic)
                .with_background(LabelBackground::Outline);
        }
        theme.text(&label, classes)?;

        let y = top + item.height() - self.config.signal_margin();
        theme.line(
            Point::new(a_x, y),
            Point::new(b_x, y),
            LineStyle::signal(signal.line, Some(signal.arrow)),
            classes,
        )
    }

    fn draw_self_signal(
        &self,
        theme: &mut dyn DrawingPrimitives,
        item: &ItemLayout,
        signal: SignalEnds,
        top: f32,
        classes: &str,
    ) -> Result<(), Error> {
        let a_x = self.center_x(signal.from)?;
        let loop_x = a_x + self.config.self_signal_width();
        let margin = self.config.signal_margin();

        let label = Label::new(
            item.label(),
            Point::new(
                loop_x + self.config.signal_padding(),
                top + item.height() / 2.0,
            ),
            item.label_box(),
        )
        .with_anchor(TextAnchor::Start);
        theme.text(&label, classes)?;

        let y1 = top + margin;
        let y2 = y1 + item.height() - margin;
        let segment = LineStyle::signal(signal.line, None);

        theme.line(Point::new(a_x, y1), Point::new(loop_x, y1), segment, classes)?;
        theme.line(Point::new(loop_x, y1), Point::new(loop_x, y2), segment, classes)?;
        theme.line(
            Point::new(loop_x, y2),
            Point::new(a_x, y2),
            LineStyle::signal(signal.line, Some(signal.arrow)),
            classes,
        )
    }

    fn draw_note(
        &self,
        theme: &mut dyn DrawingPrimitives,
        item: &ItemLayout,
        placement: NotePlacement,
        top: f32,
        classes: &str,
    ) -> Result<(), Error> {
        let Some(extent) = item.note_extent() else {
            return Ok(());
        };
        let bounds = Rect::from_xywh(extent.x, top, extent.width, item.height());
        let note_margin = self.config.note_margin();

        match item.label_kind() {
            LabelKind::Cycle => {
                let x = match placement {
                    NotePlacement::OverMany(first, second) => {
                        (self.center_x(first)? + self.center_x(second)?) / 2.0
                    }
                    _ => bounds.center_x(),
                };
                let label = Label::new(
                    item.label(),
                    Point::new(x, bounds.center_y()),
                    item.label_box(),
                );
                theme.bracketed_text(&label, bounds.x() + note_margin, bounds.max_x(), classes)?;
            }
            LabelKind::Aside => {
                let label = Label::new(
                    item.label(),
                    Point::new(
                        bounds.x() + note_margin + self.config.note_padding(),
                        bounds.center_y(),
                    ),
                    item.label_box(),
                )
                .with_anchor(TextAnchor::Start)
                .with_style(FontStyle::Italic)
                .with_background(LabelBackground::Outline);
                theme.text(&label, classes)?;
            }
            LabelKind::Regular => {
                draw_text_box(
                    theme,
                    bounds,
                    note_margin,
                    item.label(),
                    item.label_box(),
                    classes,
                )?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct SignalEnds {
    from: ActorId,
    to: ActorId,
    arrow: ArrowType,
    line: LineType,
}

fn item_classes(kind: &str, display_index: Option<usize>) -> String {
    match display_index {
        Some(index) => format!("{kind} {kind}-{index}"),
        None => kind.to_string(),
    }
}

/// Draws a box inset by `margin` inside `outer` with `text` centered in it.
fn draw_text_box(
    theme: &mut dyn DrawingPrimitives,
    outer: Rect,
    margin: f32,
    text: &str,
    text_box: TextBox,
    classes: &str,
) -> Result<(), Error> {
    theme.rect(
        outer.inset(Insets::uniform(margin)),
        &format!("{classes} textbox"),
    )?;
    theme.text(&Label::new(text, outer.center(), text_box), classes)?;
    Ok(())
}
