use crucible_core::Point;

use crate::error::{Endpoint, InvalidInput, SearchError};
use crate::frontier::Frontier;
use crate::limits::RunLimits;
use crate::observer::{NoopObserver, SearchEvent, SearchObserver};
use crate::path::ShortestPath;
use crate::state::{NO_PARENT, SearchState, StateTable};
use crate::traits::CostField;

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Dijkstra over the expanded `(pos, heading, run)` state space.
///
/// Nodes live in a [`StateTable`] and are created as moves discover them.
/// Stale frontier entries are skipped on pop.
pub(crate) struct Engine<'f, F: CostField + ?Sized> {
    field: &'f F,
    limits: RunLimits,
    table: StateTable,
    frontier: Frontier,
    finalized: usize,
}

impl<'f, F: CostField + ?Sized> Engine<'f, F> {
    /// Create an engine seeded with the start state at `start`.
    ///
    /// `limits` must be valid and `start` inside the field.
    pub(crate) fn new(field: &'f F, limits: RunLimits, start: Point) -> Self {
        let mut engine = Self {
            field,
            limits,
            table: StateTable::new(),
            frontier: Frontier::new(),
            finalized: 0,
        };
        let si = engine.table.intern(SearchState::start(start));
        engine.table.node_mut(si).dist = 0;
        engine.frontier.push(si, 0);
        engine
    }

    /// Number of states finalized so far.
    #[inline]
    pub(crate) fn finalized(&self) -> usize {
        self.finalized
    }

    /// Number of states discovered so far, finalized or not.
    #[inline]
    pub(crate) fn discovered(&self) -> usize {
        self.table.len()
    }

    /// Pop and finalize the cheapest open state.
    pub(crate) fn next_final<O>(&mut self, observer: &mut O) -> Option<(usize, SearchState, u32)>
    where
        O: SearchObserver + ?Sized,
    {
        while let Some((ci, cost)) = self.frontier.pop() {
            let node = self.table.node_mut(ci);
            if node.closed || cost > node.dist {
                continue;
            }
            node.closed = true;
            let state = node.state;
            self.finalized += 1;
            observer.record(&SearchEvent::Finalized { state, cost });
            return Some((ci, state, cost));
        }
        None
    }

    /// Relax every allowed move out of the finalized state `ci`.
    pub(crate) fn expand<O>(&mut self, ci: usize, state: SearchState, cost: u32, observer: &mut O)
    where
        O: SearchObserver + ?Sized,
    {
        let range = self.field.range();
        for (dir, run) in state.moves(self.limits) {
            let np = state.pos.step(dir);
            if !range.contains(np) {
                continue;
            }
            let Some(step_cost) = self.field.cost(np) else {
                continue;
            };
            let next = SearchState {
                pos: np,
                heading: Some(dir),
                run,
            };
            let ni = self.table.intern(next);
            let node = self.table.node_mut(ni);
            let tentative = cost + step_cost;
            if node.closed || tentative >= node.dist {
                continue;
            }
            node.dist = tentative;
            node.parent = ci;
            self.frontier.push(ni, tentative);
            observer.record(&SearchEvent::Relaxed {
                from: state,
                to: next,
                cost: tentative,
            });
        }
    }

    /// Positions from the start state to state `idx`, following parents.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            let node = self.table.node(ci);
            path.push(node.state.pos);
            ci = node.parent;
        }
        path.reverse();
        path
    }
}

/// Reject empty fields, bad limits and out-of-range endpoints.
pub(crate) fn check_input<F: CostField + ?Sized>(
    field: &F,
    limits: RunLimits,
    endpoints: &[(Endpoint, Point)],
) -> Result<RunLimits, InvalidInput> {
    let range = field.range();
    if range.is_empty() {
        return Err(InvalidInput::EmptyGrid);
    }
    let limits = limits.validate()?;
    for &(endpoint, pos) in endpoints {
        if !range.contains(pos) {
            return Err(InvalidInput::OutOfBounds {
                endpoint,
                pos,
                range,
            });
        }
    }
    Ok(limits)
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Minimum-cost path from `start` to `end` with the default
/// [`RunLimits`] (at most three moves in one direction).
///
/// # Example
///
/// ```
/// use crucible_core::{CostGrid, Point};
/// use crucible_paths::find_shortest_path;
///
/// let grid: CostGrid = "1111\n1111\n1111\n1111".parse().unwrap();
/// let found = find_shortest_path(&grid, Point::new(0, 0), Point::new(3, 3)).unwrap();
/// assert_eq!(found.cost, 6);
/// assert_eq!(found.path.len(), 7);
/// ```
pub fn find_shortest_path<F: CostField + ?Sized>(
    field: &F,
    start: Point,
    end: Point,
) -> Result<ShortestPath, SearchError> {
    find_shortest_path_with(field, start, end, RunLimits::default(), &mut NoopObserver)
}

/// Minimum-cost path from `start` to `end` under `limits`, reporting
/// progress to `observer`.
///
/// The search ends at the first finalized state on `end` whose run is
/// acceptable to `limits`. Entering a cell costs its value; the start cell
/// is free.
pub fn find_shortest_path_with<F, O>(
    field: &F,
    start: Point,
    end: Point,
    limits: RunLimits,
    observer: &mut O,
) -> Result<ShortestPath, SearchError>
where
    F: CostField + ?Sized,
    O: SearchObserver + ?Sized,
{
    let limits = check_input(
        field,
        limits,
        &[(Endpoint::Start, start), (Endpoint::End, end)],
    )?;

    let mut engine = Engine::new(field, limits, start);
    while let Some((ci, state, cost)) = engine.next_final(observer) {
        if state.pos == end && limits.accepts(&state) {
            observer.record(&SearchEvent::Finished {
                cost,
                finalized: engine.finalized(),
            });
            return Ok(ShortestPath {
                cost,
                path: engine.path_to(ci),
            });
        }
        engine.expand(ci, state, cost, observer);
    }

    observer.record(&SearchEvent::Exhausted {
        finalized: engine.finalized(),
    });
    Err(SearchError::NoPathFound { start, end })
}
