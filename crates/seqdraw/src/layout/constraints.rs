//! Minimum-distance constraints between actor columns and their resolution.
//!
//! Every signal and note demands some horizontal room between two columns.
//! The demands are recorded as minimum center-to-center distances and
//! resolved by a single left-to-right sweep: an actor's final position only
//! depends on actors with a smaller index, so one pass in index order is
//! enough.
//!
//! Two virtual columns bound the actor list. A demand against
//! [`Column::BeforeFirst`] becomes a left offset of the first involved actor,
//! a demand against [`Column::AfterLast`] becomes trailing space after the
//! last one.

use std::collections::BTreeMap;

use log::trace;

use super::Error;

/// A column a constraint can refer to.
///
/// Columns are ordered left to right: `BeforeFirst < Actor(0) < Actor(1) < ... < AfterLast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Column {
    BeforeFirst,
    Actor(usize),
    AfterLast,
}

impl Column {
    /// The column immediately left of actor `index`.
    pub fn left_of(index: usize) -> Self {
        match index.checked_sub(1) {
            Some(left) => Self::Actor(left),
            None => Self::BeforeFirst,
        }
    }

    /// The column immediately right of actor `index` among `count` actors.
    pub fn right_of(index: usize, count: usize) -> Self {
        if index + 1 >= count {
            Self::AfterLast
        } else {
            Self::Actor(index + 1)
        }
    }
}

/// Resolved actor positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Left edge of each actor, starting at zero.
    pub xs: Vec<f32>,
    /// Right edge of the last actor including its trailing space.
    pub extent: f32,
}

/// Records distance constraints between actor columns and resolves them.
///
/// # Example
///
/// ```
/// use seqdraw::layout::{Column, DistanceConstraintSolver};
///
/// let mut solver = DistanceConstraintSolver::new(vec![40.0, 40.0]);
/// solver.ensure_distance(Column::Actor(0), Column::Actor(1), 100.0).unwrap();
///
/// let resolution = solver.solve();
/// let centers: Vec<f32> = resolution.xs.iter().map(|x| x + 20.0).collect();
/// assert!(centers[1] - centers[0] >= 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceConstraintSolver {
    widths: Vec<f32>,
    offsets: Vec<f32>,
    distances: Vec<BTreeMap<usize, f32>>,
    padding_right: Vec<f32>,
    fixed_spacing: Option<f32>,
}

impl DistanceConstraintSolver {
    /// Creates a solver for actors of the given widths, in column order.
    pub fn new(widths: Vec<f32>) -> Self {
        let count = widths.len();
        Self {
            widths,
            offsets: vec![0.0; count],
            distances: vec![BTreeMap::new(); count],
            padding_right: vec![0.0; count],
            fixed_spacing: None,
        }
    }

    /// Replaces every recorded gap with `spacing` during resolution.
    pub fn with_fixed_spacing(mut self, spacing: Option<f32>) -> Self {
        self.fixed_spacing = spacing;
        self
    }

    pub fn actor_count(&self) -> usize {
        self.widths.len()
    }

    /// Minimum center distances from actor `index` to actors on its right.
    pub fn distances(&self, index: usize) -> Option<&BTreeMap<usize, f32>> {
        self.distances.get(index)
    }

    /// Trailing space reserved after actor `index`.
    pub fn padding_right(&self, index: usize) -> Option<f32> {
        self.padding_right.get(index).copied()
    }

    /// Left offset requested for actor `index` before resolution.
    pub fn offset(&self, index: usize) -> Option<f32> {
        self.offsets.get(index).copied()
    }

    /// Requires the centers of columns `a` and `b` to be at least `distance` apart.
    ///
    /// Constraints only ever grow: recording a smaller distance for a pair
    /// that already has one is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteGeometry`] if `distance` is not finite and
    /// [`Error::InvalidConstraint`] unless `a` is strictly left of `b` and
    /// at least one of them is a real actor in range.
    pub fn ensure_distance(&mut self, a: Column, b: Column, distance: f32) -> Result<(), Error> {
        if !distance.is_finite() {
            return Err(Error::NonFiniteGeometry {
                what: format!("distance between {a:?} and {b:?}"),
            });
        }
        if a >= b {
            return Err(Error::InvalidConstraint { left: a, right: b });
        }

        let count = self.actor_count();
        match (a, b) {
            (Column::BeforeFirst, Column::Actor(b)) if b < count => {
                let offset = &mut self.offsets[b];
                *offset = offset.max(distance - self.widths[b] / 2.0);
            }
            (Column::Actor(a), Column::AfterLast) if a < count => {
                let padding = &mut self.padding_right[a];
                *padding = padding.max(distance);
            }
            (Column::Actor(a), Column::Actor(b)) if b < count => {
                let entry = self.distances[a].entry(b).or_insert(0.0);
                *entry = entry.max(distance);
            }
            _ => return Err(Error::InvalidConstraint { left: a, right: b }),
        }

        trace!(left:? = a, right:? = b, distance; "Constraint recorded");
        Ok(())
    }

    /// Resolves all recorded constraints in one left-to-right sweep.
    pub fn solve(&self) -> Resolution {
        let mut xs = self.offsets.clone();
        let mut cursor: f32 = 0.0;

        for a in 0..self.actor_count() {
            xs[a] = xs[a].max(cursor);
            let a_width = self.widths[a];

            for (&b, &distance) in &self.distances[a] {
                let b_width = self.widths[b];
                let gap = self
                    .fixed_spacing
                    .unwrap_or_else(|| distance.max(a_width / 2.0).max(b_width / 2.0));
                xs[b] = xs[b].max(xs[a] + a_width / 2.0 + gap - b_width / 2.0);
            }

            cursor = xs[a] + a_width + self.padding_right[a];
        }

        Resolution { xs, extent: cursor }
    }
}
