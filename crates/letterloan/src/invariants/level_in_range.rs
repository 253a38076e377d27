//! Question index stays inside the fixed 14-question table.

use super::Invariant;
use crate::level::Level;
use crate::session::Session;

/// The current question index is always in `0..14`.
#[derive(Debug, Clone, Copy)]
pub struct LevelInRange;

impl Invariant<Session> for LevelInRange {
    fn holds(state: &Session) -> bool {
        match state.round() {
            Some(round) => round.level().index() < Level::COUNT,
            None => true,
        }
    }

    fn description() -> &'static str {
        "question index is within the 14-question table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_idle() {
        assert!(LevelInRange::holds(&Session::new()));
    }
}
