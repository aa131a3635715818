//! JSON input format.
//!
//! A document lists an optional title, the actors in column order and the
//! items in time order:
//!
//! ```json
//! {
//!   "title": "Example",
//!   "actors": ["A", "B"],
//!   "items": [
//!     { "kind": "signal", "from": "A", "to": "B", "message": "Hi",
//!       "arrow": "filled", "line": "solid" },
//!     { "kind": "note", "placement": "over", "actors": ["A", "B"], "message": "n" }
//!   ]
//! }
//! ```
//!
//! Actors that only appear in items are appended after the declared ones, in
//! order of first appearance. `arrow` defaults to `filled` and `line` to
//! `solid`.

use log::{debug, trace};
use serde::Deserialize;
use thiserror::Error;

use crate::model::{ActorId, ArrowType, Diagram, LineType, NotePlacement};

/// Errors in a JSON diagram document.
#[derive(Debug, Error)]
pub enum InputError {
    /// Malformed JSON, an unknown tag, or a missing field.
    #[error("{0}")]
    Syntax(#[from] serde_json::Error),

    #[error("note {item} names {found} actors, `{placement}` expects {expected}")]
    NoteActorCount {
        item: usize,
        placement: &'static str,
        expected: &'static str,
        found: usize,
    },
}

impl InputError {
    /// One-based line and column of the error, when known.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Syntax(err) if err.line() > 0 => Some((err.line(), err.column())),
            Self::Syntax(_) | Self::NoteActorCount { .. } => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    title: Option<String>,
    #[serde(default)]
    actors: Vec<String>,
    #[serde(default)]
    items: Vec<ItemSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ItemSpec {
    Signal {
        from: String,
        to: String,
        #[serde(default)]
        message: String,
        #[serde(default)]
        arrow: ArrowTag,
        #[serde(default)]
        line: LineTag,
    },
    Note {
        placement: PlacementTag,
        actors: Vec<String>,
        #[serde(default)]
        message: String,
    },
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ArrowTag {
    #[default]
    Filled,
    Open,
}

impl From<ArrowTag> for ArrowType {
    fn from(tag: ArrowTag) -> Self {
        match tag {
            ArrowTag::Filled => Self::Filled,
            ArrowTag::Open => Self::Open,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum LineTag {
    #[default]
    Solid,
    Dotted,
}

impl From<LineTag> for LineType {
    fn from(tag: LineTag) -> Self {
        match tag {
            LineTag::Solid => Self::Solid,
            LineTag::Dotted => Self::Dotted,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum PlacementTag {
    LeftOf,
    RightOf,
    Over,
}

impl PlacementTag {
    fn name(self) -> &'static str {
        match self {
            Self::LeftOf => "left_of",
            Self::RightOf => "right_of",
            Self::Over => "over",
        }
    }

    fn resolve(self, item: usize, actors: &[ActorId]) -> Result<NotePlacement, InputError> {
        let count_error = |expected| InputError::NoteActorCount {
            item,
            placement: self.name(),
            expected,
            found: actors.len(),
        };

        match (self, actors) {
            (Self::LeftOf, &[actor]) => Ok(NotePlacement::LeftOf(actor)),
            (Self::RightOf, &[actor]) => Ok(NotePlacement::RightOf(actor)),
            (Self::Over, &[actor]) => Ok(NotePlacement::Over(actor)),
            (Self::Over, &[first, second]) => Ok(NotePlacement::OverMany(first, second)),
            (Self::LeftOf | Self::RightOf, _) => Err(count_error("exactly one")),
            (Self::Over, _) => Err(count_error("one or two")),
        }
    }
}

/// Parses a JSON document into a [`Diagram`].
///
/// # Errors
///
/// Returns [`InputError::Syntax`] for malformed JSON, unknown tags and
/// missing fields, and [`InputError::NoteActorCount`] for notes naming the
/// wrong number of actors.
///
/// # Examples
///
/// ```
/// let diagram = seqdraw::input::parse(
///     r#"{ "items": [{ "kind": "signal", "from": "A", "to": "B", "message": "hi" }] }"#,
/// )
/// .unwrap();
/// assert_eq!(diagram.actors().len(), 2);
/// ```
pub fn parse(source: &str) -> Result<Diagram, InputError> {
    let document: Document = serde_json::from_str(source)?;
    trace!(document:?; "Parsed input document");

    let mut diagram = Diagram::new();
    if let Some(title) = document.title {
        diagram = diagram.with_title(title);
    }
    for name in document.actors {
        diagram.add_actor(name);
    }

    for (index, item) in document.items.into_iter().enumerate() {
        match item {
            ItemSpec::Signal {
                from,
                to,
                message,
                arrow,
                line,
            } => {
                let from = diagram.add_actor(from);
                let to = diagram.add_actor(to);
                diagram.push_signal(from, to, message, arrow.into(), line.into());
            }
            ItemSpec::Note {
                placement,
                actors,
                message,
            } => {
                let actors: Vec<_> = actors
                    .into_iter()
                    .map(|name| diagram.add_actor(name))
                    .collect();
                let placement = placement.resolve(index, &actors)?;
                diagram.push_note(placement, message);
            }
        }
    }

    debug!(
        actors = diagram.actors().len(),
        items = diagram.items().len();
        "Input parsed"
    );
    Ok(diagram)
}
