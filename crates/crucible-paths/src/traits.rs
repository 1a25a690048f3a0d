use crucible_core::{CostGrid, Point, Range};

/// A weighted grid the search can walk over.
pub trait CostField {
    /// The rectangle of valid positions.
    fn range(&self) -> Range;

    /// Cost of entering `p`, or `None` if the cell cannot be entered.
    /// Only called for points inside [`range`](Self::range).
    fn cost(&self, p: Point) -> Option<u32>;
}

impl CostField for CostGrid {
    #[inline]
    fn range(&self) -> Range {
        CostGrid::range(self)
    }

    #[inline]
    fn cost(&self, p: Point) -> Option<u32> {
        CostGrid::cost(self, p).map(u32::from)
    }
}

impl<F: CostField + ?Sized> CostField for &F {
    #[inline]
    fn range(&self) -> Range {
        (**self).range()
    }

    #[inline]
    fn cost(&self, p: Point) -> Option<u32> {
        (**self).cost(p)
    }
}
