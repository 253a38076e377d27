//! Countdowns never exceed their starting values.

use super::Invariant;
use crate::level::{GLOBAL_SECONDS, QUESTION_SECONDS};
use crate::session::Session;

/// Both clocks only ever count down from their initial values.
#[derive(Debug, Clone, Copy)]
pub struct TimerBound;

impl Invariant<Session> for TimerBound {
    fn holds(state: &Session) -> bool {
        match state.round() {
            Some(round) => {
                *round.global_remaining() <= GLOBAL_SECONDS
                    && *round.question_remaining() <= QUESTION_SECONDS
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "countdowns never exceed their starting values"
    }
}
