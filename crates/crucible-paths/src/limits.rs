use crate::error::InvalidInput;
use crate::state::SearchState;

/// Straight-line movement limits of a crucible.
///
/// A crucible must move at least `min_run` cells in a straight line before
/// it may turn or stop, and at most `max_run` cells before it must turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunLimits {
    pub min_run: u8,
    pub max_run: u8,
}

impl RunLimits {
    /// No minimum, at most three moves in one direction.
    pub const CRUCIBLE: Self = Self {
        min_run: 0,
        max_run: 3,
    };

    /// At least four and at most ten moves in one direction.
    pub const ULTRA: Self = Self {
        min_run: 4,
        max_run: 10,
    };

    /// Create validated limits.
    pub fn new(min_run: u8, max_run: u8) -> Result<Self, InvalidInput> {
        Self { min_run, max_run }.validate()
    }

    /// Check `1 <= max_run` and `min_run <= max_run`.
    pub fn validate(self) -> Result<Self, InvalidInput> {
        if self.max_run == 0 || self.min_run > self.max_run {
            return Err(InvalidInput::InvalidLimits {
                min_run: self.min_run,
                max_run: self.max_run,
            });
        }
        Ok(self)
    }

    /// Whether a crucible that has moved `run` cells straight may continue.
    #[inline]
    pub fn can_continue(self, run: u8) -> bool {
        run < self.max_run
    }

    /// Whether a crucible that has moved `run` cells straight may turn.
    #[inline]
    pub fn can_turn(self, run: u8) -> bool {
        run >= self.min_run
    }

    /// Whether the search may end in `state`.
    ///
    /// The start state is always accepted; any other state needs a finished
    /// minimum run.
    #[inline]
    pub fn accepts(self, state: &SearchState) -> bool {
        state.heading.is_none() || self.can_turn(state.run)
    }
}

impl Default for RunLimits {
    fn default() -> Self {
        Self::CRUCIBLE
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let limits: RunLimits = serde_json::from_str(r#"{"max_run": 5}"#).unwrap();
        assert_eq!(limits, RunLimits::new(0, 5).unwrap());
    }
}
