//! The sequence diagram model consumed by layout.
//!
//! A [`Diagram`] is an already-parsed description: an optional title, the
//! actors in declaration order, and the signals and notes in time order.
//! Actors are referenced by [`ActorId`], their index in the actor list, which
//! also determines the left-to-right column order.
//!
//! # Example
//!
//! ```
//! use seqdraw::model::{ArrowType, Diagram, LineType, NotePlacement};
//!
//! let mut diagram = Diagram::new().with_title("Login");
//! let client = diagram.add_actor("Client");
//! let server = diagram.add_actor("Server");
//!
//! diagram.push_signal(client, server, "POST /login", ArrowType::Filled, LineType::Solid);
//! diagram.push_note(NotePlacement::Over(server), "checks password");
//! diagram.push_signal(server, client, "200 OK", ArrowType::Open, LineType::Dotted);
//!
//! assert_eq!(diagram.actors().len(), 2);
//! assert_eq!(diagram.items().len(), 3);
//! ```

use std::fmt;

/// Index of an actor in [`Diagram::actors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(usize);

impl ActorId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A participant drawn as a column with a lifeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    name: String,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Arrowhead drawn at the target end of a signal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowType {
    #[default]
    Filled,
    Open,
}

/// Stroke pattern of a signal line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    #[default]
    Solid,
    Dotted,
}

/// A directed message between two actors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    from: ActorId,
    to: ActorId,
    message: String,
    arrow: ArrowType,
    line: LineType,
}

impl Signal {
    pub fn new(
        from: ActorId,
        to: ActorId,
        message: impl Into<String>,
        arrow: ArrowType,
        line: LineType,
    ) -> Self {
        Self {
            from,
            to,
            message: message.into(),
            arrow,
            line,
        }
    }

    pub fn from(&self) -> ActorId {
        self.from
    }

    pub fn to(&self) -> ActorId {
        self.to
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn arrow(&self) -> ArrowType {
        self.arrow
    }

    pub fn line(&self) -> LineType {
        self.line
    }

    /// Returns `true` when the signal loops back to its source actor.
    pub fn is_self_signal(&self) -> bool {
        self.from == self.to
    }
}

/// Where a note is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotePlacement {
    LeftOf(ActorId),
    RightOf(ActorId),
    Over(ActorId),
    /// Spans the two actors and everything in between.
    OverMany(ActorId, ActorId),
}

impl NotePlacement {
    /// Actors the note refers to, in declaration order of the placement.
    pub fn actors(&self) -> Vec<ActorId> {
        match *self {
            Self::LeftOf(actor) | Self::RightOf(actor) | Self::Over(actor) => vec![actor],
            Self::OverMany(first, second) => vec![first, second],
        }
    }
}

/// A free-form annotation attached to one or two actors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    placement: NotePlacement,
    message: String,
}

impl Note {
    pub fn new(placement: NotePlacement, message: impl Into<String>) -> Self {
        Self {
            placement,
            message: message.into(),
        }
    }

    pub fn placement(&self) -> NotePlacement {
        self.placement
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One entry of the time-ordered item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Signal(Signal),
    Note(Note),
}

impl Item {
    pub fn message(&self) -> &str {
        match self {
            Self::Signal(signal) => signal.message(),
            Self::Note(note) => note.message(),
        }
    }

    /// Every actor this item refers to.
    pub fn actors(&self) -> Vec<ActorId> {
        match self {
            Self::Signal(signal) => vec![signal.from(), signal.to()],
            Self::Note(note) => note.placement().actors(),
        }
    }
}

/// A complete sequence diagram description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    title: Option<String>,
    actors: Vec<Actor>,
    items: Vec<Item>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the diagram with its title set.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.index())
    }

    /// Looks up an actor by name.
    pub fn find_actor(&self, name: &str) -> Option<ActorId> {
        self.actors
            .iter()
            .position(|actor| actor.name() == name)
            .map(ActorId::new)
    }

    /// Adds an actor, or returns the existing one with the same name.
    pub fn add_actor(&mut self, name: impl Into<String>) -> ActorId {
        let name = name.into();
        if let Some(id) = self.find_actor(&name) {
            return id;
        }
        self.actors.push(Actor::new(name));
        ActorId::new(self.actors.len() - 1)
    }

    pub fn push_signal(
        &mut self,
        from: ActorId,
        to: ActorId,
        message: impl Into<String>,
        arrow: ArrowType,
        line: LineType,
    ) {
        self.items
            .push(Item::Signal(Signal::new(from, to, message, arrow, line)));
    }

    pub fn push_note(&mut self, placement: NotePlacement, message: impl Into<String>) {
        self.items.push(Item::Note(Note::new(placement, message)));
    }

    /// Appends an item without checking its actor references.
    ///
    /// References are validated when the diagram is laid out.
    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }
}
