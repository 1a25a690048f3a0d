//! Diagnostic hooks for searches.
//!
//! Searches report what they do to a [`SearchObserver`] instead of writing
//! to any global buffer. Pass [`NoopObserver`] when nothing should be
//! recorded, [`LogObserver`] to trace through the `log` facade, or a
//! closure.

use crate::state::SearchState;

/// Something that happened during a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// `state` was removed from the frontier with its final `cost`.
    Finalized { state: SearchState, cost: u32 },
    /// `to` got a cheaper tentative `cost` through `from`.
    Relaxed {
        from: SearchState,
        to: SearchState,
        cost: u32,
    },
    /// The search reached its goal at `cost`.
    Finished { cost: u32, finalized: usize },
    /// The frontier ran dry.
    Exhausted { finalized: usize },
}

/// Receives [`SearchEvent`]s.
pub trait SearchObserver {
    fn record(&mut self, event: &SearchEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    #[inline]
    fn record(&mut self, _event: &SearchEvent) {}
}

/// Forwards events to the `log` facade.
///
/// Per-state events go out at `trace`, outcomes at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn record(&mut self, event: &SearchEvent) {
        match event {
            SearchEvent::Finalized { state, cost } => {
                log::trace!("finalized {state} at cost {cost}");
            }
            SearchEvent::Relaxed { from, to, cost } => {
                log::trace!("relaxed {to} to cost {cost} via {from}");
            }
            SearchEvent::Finished { cost, finalized } => {
                log::debug!("search finished at cost {cost} after finalizing {finalized} states");
            }
            SearchEvent::Exhausted { finalized } => {
                log::debug!("search exhausted after finalizing {finalized} states");
            }
        }
    }
}

/// Keeps every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<SearchEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the finalized states with their costs.
    pub fn finalized(&self) -> impl Iterator<Item = (SearchState, u32)> + '_ {
        self.events.iter().filter_map(|event| match event {
            SearchEvent::Finalized { state, cost } => Some((*state, *cost)),
            _ => None,
        })
    }
}

impl SearchObserver for RecordingObserver {
    fn record(&mut self, event: &SearchEvent) {
        self.events.push(event.clone());
    }
}

impl<F: FnMut(&SearchEvent)> SearchObserver for F {
    #[inline]
    fn record(&mut self, event: &SearchEvent) {
        self(event)
    }
}
