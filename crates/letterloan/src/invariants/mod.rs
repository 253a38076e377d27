//! First-class session invariants.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked in debug builds from `Session::apply` and
//! are testable on their own.

mod level_in_range;
mod rack_sized;
mod timer_bound;

pub use level_in_range::LevelInRange;
pub use rack_sized::RackSizedToLevel;
pub use timer_bound::TimerBound;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (RackSizedToLevel, LevelInRange, TimerBound);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::session::Session;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_invariants_hold_in_idle() {
        assert!(SessionInvariants::check_all(&Session::new()).is_ok());
    }

    #[test]
    fn test_invariants_hold_through_a_round() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = Session::new();
        let script = [
            Command::Start,
            Command::Borrow,
            Command::GlobalTick,
            Command::Answer,
            Command::QuestionTick,
            Command::Correct,
            Command::Next,
        ];
        for command in script {
            session.apply(command, &mut rng);
            assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (RackSizedToLevel, LevelInRange);
        assert!(TwoInvariants::check_all(&Session::new()).is_ok());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new("rack mismatch");
        assert_eq!(violation.to_string(), "invariant violated: rack mismatch");
    }
}
