//! Letterloan - state machine for a presenter-run word contest.
//!
//! A single in-memory session walks 14 questions of growing word length
//! under a 5-minute clock. The contestant may borrow letters at 100
//! points apiece, commits to answering under a 30-second clock, and
//! scores 100 points per letter never borrowed. The presenter supplies
//! the actual question content verbally; this crate owns everything else.
//!
//! # Architecture
//!
//! - **Session**: tagged-union state machine, one consuming transition
//!   per `(phase, command)` pair
//! - **Driver**: async task that serializes inbound events and scopes the
//!   two countdown timers to the phases that own them
//! - **View**: read-only projection rebuilt after every transition for
//!   the presentation layer
//!
//! # Example
//!
//! ```
//! use letterloan::{Command, Session, SessionView};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = Session::new();
//!
//! session.apply(Command::Start, &mut rng);
//! session.apply(Command::Borrow, &mut rng);
//!
//! let view = SessionView::project(&session);
//! assert_eq!(view.current_word_score, Some(300));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod driver;
mod letters;
mod level;
mod session;
mod view;

pub mod invariants;

pub use command::{route_key, Availability, Command};
pub use driver::{DriverClosed, SessionDriver, SessionInput};
pub use letters::{LetterRack, LetterSlot};
pub use level::{format_time, Level, GLOBAL_SECONDS, LETTER_VALUE, QUESTION_SECONDS};
pub use session::{Outcome, Round, Session, TimerSet};
pub use view::SessionView;
