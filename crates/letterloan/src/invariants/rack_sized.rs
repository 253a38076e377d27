//! Rack length always matches the current question's word length.

use super::Invariant;
use crate::session::Session;

/// In every phase with a live round, `rack.len() == level.num_letters()`.
#[derive(Debug, Clone, Copy)]
pub struct RackSizedToLevel;

impl Invariant<Session> for RackSizedToLevel {
    fn holds(state: &Session) -> bool {
        match state.round() {
            Some(round) => round.rack().len() == round.level().num_letters(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "letter rack is sized to the current question's word length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_holds_after_every_advance() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = Session::new();
        session.apply(Command::Start, &mut rng);

        for _ in 0..13 {
            assert!(RackSizedToLevel::holds(&session));
            session.apply(Command::Answer, &mut rng);
            session.apply(Command::Correct, &mut rng);
            assert!(RackSizedToLevel::holds(&session));
            session.apply(Command::Next, &mut rng);
        }
    }
}
