use std::fmt;

use crucible_core::{Point, Range};

use crate::error::{Endpoint, SearchError};
use crate::limits::RunLimits;
use crate::observer::SearchObserver;
use crate::search::{Engine, check_input};
use crate::traits::CostField;

/// Cheapest acceptable cost of every cell from one start.
///
/// A cell's entry is the lowest cost of any state on that cell that the
/// run limits would let a search stop in, or `None` if no such state is
/// reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMap {
    range: Range,
    costs: Vec<Option<u32>>,
}

impl CostMap {
    /// The covered rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Cost at `p`, or `None` if unreachable or outside the map.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        self.range.index_of(p).and_then(|i| self.costs.get(i).copied().flatten())
    }

    /// Row-major iterator over `(Point, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Option<u32>)> + '_ {
        self.range.iter().zip(self.costs.iter().copied())
    }

    /// Number of reachable cells.
    pub fn reachable(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }
}

impl fmt::Display for CostMap {
    /// One row per line, each cell right-aligned in three columns, `-1` for
    /// unreachable cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.range.width().max(1) as usize;
        for row in self.costs.chunks(width) {
            for cost in row {
                match cost {
                    Some(c) => write!(f, "{c:>3}")?,
                    None => write!(f, "{:>3}", -1)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Run the search from `start` to exhaustion and collect a [`CostMap`].
pub fn cost_map<F, O>(
    field: &F,
    start: Point,
    limits: RunLimits,
    observer: &mut O,
) -> Result<CostMap, SearchError>
where
    F: CostField + ?Sized,
    O: SearchObserver + ?Sized,
{
    let limits = check_input(field, limits, &[(Endpoint::Start, start)])?;
    let range = field.range();
    let mut costs = vec![None; range.len()];

    let mut engine = Engine::new(field, limits, start);
    while let Some((ci, state, cost)) = engine.next_final(observer) {
        if limits.accepts(&state) {
            if let Some(i) = range.index_of(state.pos) {
                // States finalize in cost order, so the first one wins.
                if costs[i].is_none() {
                    costs[i] = Some(cost);
                }
            }
        }
        engine.expand(ci, state, cost, observer);
    }

    log::debug!(
        "cost map from {start}: {} of {} cells reachable, {} of {} states finalized",
        costs.iter().filter(|c| c.is_some()).count(),
        range.len(),
        engine.finalized(),
        engine.discovered()
    );
    Ok(CostMap { range, costs })
}

#[cfg(test)]
mod tests {
    use crucible_core::CostGrid;

    use super::*;
    use crate::find_shortest_path_with;
    use crate::observer::NoopObserver;
    use crate::search::tests::EXAMPLE;

    #[test]
    fn matches_point_searches() {
        let g: CostGrid = EXAMPLE.parse().unwrap();
        for limits in [RunLimits::CRUCIBLE, RunLimits::ULTRA] {
            let map = cost_map(&g, Point::ZERO, limits, &mut NoopObserver).unwrap();
            for p in [Point::new(0, 5), Point::new(6, 6), Point::new(12, 12)] {
                let expected =
                    find_shortest_path_with(&g, Point::ZERO, p, limits, &mut NoopObserver)
                        .ok()
                        .map(|found| found.cost);
                assert_eq!(map.get(p), expected, "at {p} with {limits:?}");
            }
        }
    }

    #[test]
    fn start_costs_nothing() {
        let g = CostGrid::filled(2, 2, 5).unwrap();
        let map = cost_map(&g, Point::new(1, 1), RunLimits::default(), &mut NoopObserver).unwrap();
        assert_eq!(map.get(Point::new(1, 1)), Some(0));
        assert_eq!(map.get(Point::new(0, 0)), Some(10));
        assert_eq!(map.reachable(), 4);
        assert_eq!(map.get(Point::new(5, 5)), None);
    }

    #[test]
    fn renders_unreachable_as_minus_one() {
        let g: CostGrid = "11111".parse().unwrap();
        let map = cost_map(&g, Point::ZERO, RunLimits::default(), &mut NoopObserver).unwrap();
        assert_eq!(map.to_string(), "  0  1  2  3 -1\n");
        assert_eq!(map.reachable(), 4);
        assert_eq!(map.iter().last(), Some((Point::new(0, 4), None)));
    }

    #[test]
    fn rejects_out_of_bounds_start() {
        let g = CostGrid::filled(2, 2, 1).unwrap();
        let err = cost_map(&g, Point::new(2, 2), RunLimits::default(), &mut NoopObserver)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }
}
