//! Run-length constrained shortest paths on weighted grids.
//!
//! A crucible moves across a grid of digit costs. Entering a cell costs its
//! digit; the crucible may not reverse, may not go more than `max_run` cells
//! in a straight line, and must go at least `min_run` cells before turning
//! or stopping (see [`RunLimits`]).
//!
//! - **Point search** ([`find_shortest_path`], [`find_shortest_path_with`])
//! - **Cost maps** from one start to every cell ([`cost_map`])
//!
//! Both run Dijkstra over [`SearchState`]s, which pair a position with the
//! heading and run length that reached it, so the same cell can be visited
//! several times under different histories. Searches own all their state;
//! a [`CostGrid`](crucible_core::CostGrid) can be shared by any number of
//! concurrent searches.
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`CostField`] | the grid being searched |
//! | [`SearchObserver`] | receives [`SearchEvent`]s for diagnostics |

mod costmap;
mod error;
mod frontier;
mod limits;
mod observer;
mod path;
mod search;
mod state;
mod traits;

pub use costmap::{CostMap, cost_map};
pub use error::{Endpoint, InvalidInput, SearchError};
pub use limits::RunLimits;
pub use observer::{LogObserver, NoopObserver, RecordingObserver, SearchEvent, SearchObserver};
pub use path::ShortestPath;
pub use search::{find_shortest_path, find_shortest_path_with};
pub use state::{SearchState, UNREACHABLE};
pub use traits::CostField;
