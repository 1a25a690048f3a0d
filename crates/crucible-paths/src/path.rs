use crucible_core::{Direction, Point};

/// A minimum-cost path and its cost.
///
/// `cost` counts every entered cell; the start cell is free.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    pub cost: u32,
    /// Positions from start to end, both included.
    pub path: Vec<Point>,
}

impl ShortestPath {
    /// Number of moves (one less than the number of positions).
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Direction of every move, in order.
    pub fn steps(&self) -> impl Iterator<Item = Direction> + '_ {
        self.path.windows(2).filter_map(|w| w[0].direction_to(w[1]))
    }

    /// Steps grouped into straight runs: `(direction, length)`.
    pub fn runs(&self) -> Vec<(Direction, usize)> {
        let mut runs: Vec<(Direction, usize)> = Vec::new();
        for dir in self.steps() {
            if let Some((last, len)) = runs.last_mut() {
                if *last == dir {
                    *len += 1;
                    continue;
                }
            }
            runs.push((dir, 1));
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_group_straight_moves() {
        let sp = ShortestPath {
            cost: 0,
            path: vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(1, 3),
            ],
        };
        assert_eq!(sp.moves(), 4);
        assert_eq!(
            sp.runs(),
            vec![
                (Direction::East, 2),
                (Direction::South, 1),
                (Direction::East, 1)
            ]
        );
    }

    #[test]
    fn single_point_has_no_moves() {
        let sp = ShortestPath {
            cost: 0,
            path: vec![Point::ZERO],
        };
        assert_eq!(sp.moves(), 0);
        assert!(sp.runs().is_empty());
    }
}
