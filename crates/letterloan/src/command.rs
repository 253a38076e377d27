//! First-class session commands.
//!
//! Commands are domain events, not side effects: presenter button presses,
//! abstract key input, and timer ticks all arrive as values and are applied
//! to the session one at a time. A command issued in a phase with no
//! matching transition is a safe no-op; callers use [`Availability`] to
//! disable the corresponding control instead of failing loudly.

use serde::{Deserialize, Serialize};

/// An event driving the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Command {
    /// Begin a playthrough. `Idle` only.
    Start,
    /// Reveal one random unrevealed letter at its point cost.
    Borrow,
    /// Contestant commits to answering; starts the 30-second clock.
    Answer,
    /// Presenter judges the answer correct.
    Correct,
    /// Advance past a revealed question.
    Next,
    /// Abandon the session and return to `Idle`.
    Reset,
    /// Presenter keys in the actual letter for the earliest pending slot.
    FillLetter(char),
    /// One second elapsed on the global clock.
    GlobalTick,
    /// One second elapsed on the per-question clock.
    QuestionTick,
}

/// Maps an abstract key press to a command.
///
/// Space triggers an answer attempt; any single-code-point letter (any
/// script) is uppercased and routed to the letter fill. Everything else is
/// ignored.
pub fn route_key(ch: char) -> Option<Command> {
    if ch == ' ' {
        Some(Command::Answer)
    } else if ch.is_alphabetic() {
        Some(Command::FillLetter(uppercase(ch)))
    } else {
        None
    }
}

/// Uppercases a letter when that stays a single code point, otherwise
/// keeps the original (e.g. 'ß' expands and is left alone).
fn uppercase(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Which presenter controls are currently usable.
///
/// Mirrors the command interface: a flag is true exactly when issuing the
/// command would cause a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// `start()` is usable.
    pub start: bool,
    /// `borrow()` is usable.
    pub borrow: bool,
    /// `answer()` is usable.
    pub answer: bool,
    /// `correct()` is usable.
    pub correct: bool,
    /// `next()` is usable.
    pub next: bool,
    /// `reset()` is usable.
    pub reset: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_routes_to_answer() {
        assert_eq!(route_key(' '), Some(Command::Answer));
    }

    #[test]
    fn test_letters_route_uppercased() {
        assert_eq!(route_key('k'), Some(Command::FillLetter('K')));
        assert_eq!(route_key('é'), Some(Command::FillLetter('É')));
        assert_eq!(route_key('λ'), Some(Command::FillLetter('Λ')));
    }

    #[test]
    fn test_non_letters_ignored() {
        assert_eq!(route_key('3'), None);
        assert_eq!(route_key('!'), None);
        assert_eq!(route_key('\n'), None);
    }

    #[test]
    fn test_multichar_uppercase_kept_as_is() {
        assert_eq!(route_key('ß'), Some(Command::FillLetter('ß')));
    }
}
