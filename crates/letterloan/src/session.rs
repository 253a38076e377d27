//! The game session state machine.
//!
//! One tagged union carries the whole contest state; every transition is a
//! consuming step from `(phase, command)` to the next phase, so legal
//! actions live in a single match instead of being re-derived at call
//! sites. Commands with no matching arm return the state untouched.

use crate::command::{Availability, Command};
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::letters::LetterRack;
use crate::level::{Level, GLOBAL_SECONDS, QUESTION_SECONDS};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mutable state shared by every in-playthrough phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Round {
    /// Current question.
    pub(crate) level: Level,
    /// Running score total.
    pub(crate) score: i32,
    /// Seconds left on the session clock.
    pub(crate) global_remaining: u32,
    /// Seconds left on the answer clock. Only meaningful while answering;
    /// reset when an answer attempt begins.
    pub(crate) question_remaining: u32,
    /// Letter slots for the current question.
    pub(crate) rack: LetterRack,
}

impl Round {
    fn opening() -> Self {
        Self {
            level: Level::FIRST,
            score: 0,
            global_remaining: GLOBAL_SECONDS,
            question_remaining: QUESTION_SECONDS,
            rack: LetterRack::for_level(Level::FIRST),
        }
    }

    fn advance(mut self, level: Level) -> Self {
        self.level = level;
        self.question_remaining = QUESTION_SECONDS;
        self.rack = LetterRack::for_level(level);
        self
    }
}

/// How a revealed question was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Answered correctly; word score was added.
    #[display("correct")]
    Correct,
    /// The answer clock ran out; word score was deducted.
    #[display("timed out")]
    TimedOut,
}

/// The session in one of its five phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Session {
    /// No playthrough running.
    Idle,
    /// A question is posed; the global clock ticks and letters may be
    /// borrowed.
    QuestionOpen(Round),
    /// The contestant committed to answering; the answer clock ticks.
    Answering(Round),
    /// The question is settled; the presenter may fill remaining letters
    /// before advancing.
    Revealed {
        /// Round state, with the settled score applied.
        round: Round,
        /// Whether the question was answered or timed out.
        outcome: Outcome,
    },
    /// Playthrough over: clock expired or the last question was passed.
    Finished {
        /// Final score.
        score: i32,
        /// Seconds that were left on the session clock.
        global_remaining: u32,
    },
}

/// Which tick sources the current phase owns. The driver must stop any
/// timer whose flag goes false before the next event is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerSet {
    /// The 1-second global session tick.
    pub global: bool,
    /// The 1-second answer tick.
    pub question: bool,
}

impl Session {
    /// Creates a session in `Idle`.
    pub fn new() -> Self {
        Session::Idle
    }

    /// Applies one command, running the transition table.
    ///
    /// Unavailable commands leave the state untouched. Transition effects
    /// (scoring, rack resets, clock resets) happen here and nowhere else.
    #[instrument(skip(self, rng), fields(phase = %self, command = %command))]
    pub fn apply(&mut self, command: Command, rng: &mut impl Rng) {
        let current = std::mem::replace(self, Session::Idle);
        *self = current.step(command, rng);

        #[cfg(debug_assertions)]
        if let Err(violations) = SessionInvariants::check_all(self) {
            panic!("session invariants violated: {violations:?}");
        }
    }

    fn step(self, command: Command, rng: &mut impl Rng) -> Session {
        use Command::*;
        use Session::*;

        match (self, command) {
            (Idle, Start) => {
                debug!("session started");
                QuestionOpen(Round::opening())
            }

            // Borrowing is allowed while the question is live, at the
            // presenter's discretion even mid-answer.
            (QuestionOpen(mut round), Borrow) => {
                round.rack.borrow_random(rng);
                QuestionOpen(round)
            }
            (Answering(mut round), Borrow) => {
                round.rack.borrow_random(rng);
                Answering(round)
            }

            (QuestionOpen(mut round), FillLetter(ch)) => {
                round.rack.fill_next(ch);
                QuestionOpen(round)
            }
            (Answering(mut round), FillLetter(ch)) => {
                round.rack.fill_next(ch);
                Answering(round)
            }
            (Revealed { mut round, outcome }, FillLetter(ch)) => {
                round.rack.fill_next(ch);
                Revealed { round, outcome }
            }

            (QuestionOpen(mut round), GlobalTick) => {
                if round.global_remaining == 0 {
                    let score = round.score - round.rack.word_score();
                    debug!(score, "global clock expired");
                    Finished {
                        score,
                        global_remaining: 0,
                    }
                } else {
                    round.global_remaining -= 1;
                    QuestionOpen(round)
                }
            }

            (QuestionOpen(mut round), Answer) => {
                round.question_remaining = QUESTION_SECONDS;
                Answering(round)
            }

            (Answering(mut round), QuestionTick) => {
                if round.question_remaining == 0 {
                    round.score -= round.rack.word_score();
                    debug!(score = round.score, "answer clock expired");
                    Revealed {
                        round,
                        outcome: Outcome::TimedOut,
                    }
                } else {
                    round.question_remaining -= 1;
                    Answering(round)
                }
            }

            (Answering(mut round), Correct) => {
                round.score += round.rack.word_score();
                round.rack.reveal_placeholders();
                debug!(score = round.score, "answer correct");
                Revealed {
                    round,
                    outcome: Outcome::Correct,
                }
            }

            (Revealed { round, .. }, Next) => match round.level.next() {
                Some(level) => {
                    debug!(question = level.number(), "next question");
                    QuestionOpen(round.advance(level))
                }
                None => {
                    debug!(score = round.score, "last question passed");
                    Finished {
                        score: round.score,
                        global_remaining: round.global_remaining,
                    }
                }
            },

            (Idle, Reset) => Idle,
            (_, Reset) => {
                debug!("session reset");
                Idle
            }

            // No matching transition: safe no-op.
            (state, command) => {
                debug!(%command, "command ignored in current phase");
                state
            }
        }
    }

    /// The round state, in phases that have one.
    pub fn round(&self) -> Option<&Round> {
        match self {
            Session::QuestionOpen(round) | Session::Answering(round) => Some(round),
            Session::Revealed { round, .. } => Some(round),
            Session::Idle | Session::Finished { .. } => None,
        }
    }

    /// Which commands would currently cause a transition.
    pub fn availability(&self) -> Availability {
        match self {
            Session::Idle => Availability {
                start: true,
                ..Availability::default()
            },
            Session::QuestionOpen(round) => Availability {
                borrow: round.rack.has_unrevealed(),
                answer: true,
                reset: true,
                ..Availability::default()
            },
            Session::Answering(round) => Availability {
                borrow: round.rack.has_unrevealed(),
                correct: true,
                reset: true,
                ..Availability::default()
            },
            Session::Revealed { .. } => Availability {
                next: true,
                reset: true,
                ..Availability::default()
            },
            Session::Finished { .. } => Availability {
                reset: true,
                ..Availability::default()
            },
        }
    }

    /// Tick sources the current phase owns. Exactly one clock runs at a
    /// time: the global clock is suspended while an answer is in flight.
    pub fn timers(&self) -> TimerSet {
        match self {
            Session::QuestionOpen(_) => TimerSet {
                global: true,
                question: false,
            },
            Session::Answering(_) => TimerSet {
                global: false,
                question: true,
            },
            _ => TimerSet::default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
