use std::collections::HashMap;
use std::fmt;

use crucible_core::{Direction, Point};

use crate::limits::RunLimits;

/// Sentinel distance of a state no valid path has reached yet.
pub const UNREACHABLE: u32 = u32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

/// A node of the expanded search space.
///
/// Two states at the same position but with a different heading or run are
/// different nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    pub pos: Point,
    /// Direction of the move that entered `pos`; `None` only at the start.
    pub heading: Option<Direction>,
    /// Consecutive moves made in `heading`, 0 at the start.
    pub run: u8,
}

impl SearchState {
    /// The initial state at `pos`.
    #[inline]
    pub const fn start(pos: Point) -> Self {
        Self {
            pos,
            heading: None,
            run: 0,
        }
    }

    /// Moves allowed from this state as `(direction, run after the move)`.
    ///
    /// The start state may leave in any direction. Otherwise the crucible
    /// may go straight while under `max_run`, turn left or right once it
    /// has reached `min_run`, and never reverse.
    pub fn moves(self, limits: RunLimits) -> impl Iterator<Item = (Direction, u8)> {
        let heading = self.heading;
        let run = self.run;
        Direction::ALL.into_iter().filter_map(move |dir| match heading {
            None => Some((dir, 1)),
            Some(h) if dir == h => limits.can_continue(run).then(|| (dir, run + 1)),
            Some(h) if dir == h.reverse() => None,
            Some(_) => limits.can_turn(run).then_some((dir, 1)),
        })
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.heading {
            Some(h) => write!(f, "{} {}{}", self.pos, h, self.run),
            None => write!(f, "{} start", self.pos),
        }
    }
}

// ---------------------------------------------------------------------------
// Node table
// ---------------------------------------------------------------------------

/// Per-state search bookkeeping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) state: SearchState,
    pub(crate) dist: u32,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

/// Nodes of the states a search has discovered, created on first sight.
///
/// Memory follows the visited part of the state space, not
/// `cells * (1 + 4 * max_run)`.
#[derive(Debug, Default)]
pub(crate) struct StateTable {
    ids: HashMap<SearchState, usize>,
    nodes: Vec<Node>,
}

impl StateTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of discovered states.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Index of `state`, adding an unreached node the first time it is seen.
    pub(crate) fn intern(&mut self, state: SearchState) -> usize {
        let nodes = &mut self.nodes;
        *self.ids.entry(state).or_insert_with(|| {
            nodes.push(Node {
                state,
                dist: UNREACHABLE,
                parent: NO_PARENT,
                closed: false,
            });
            nodes.len() - 1
        })
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }
}
