//! Read-only display projection of the session.
//!
//! Rebuilt fresh after every transition and handed to the presentation
//! layer as plain data; nothing here is stored back into the session.

use crate::command::Availability;
use crate::letters::LetterSlot;
use crate::level::format_time;
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// Global clock threshold, in seconds, below which time is critical.
const GLOBAL_CRITICAL: u32 = 30;

/// Answer clock threshold, in seconds, below which time is critical.
const QUESTION_CRITICAL: u32 = 10;

/// Everything the presentation layer needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Heading for the current phase: "Welcome", "Question N" or
    /// "Finished".
    pub phase_title: String,
    /// Running score, absent before the session starts.
    pub total_score: Option<i32>,
    /// Live value of the current question, absent outside a round.
    pub current_word_score: Option<i32>,
    /// Letter slots for the current question, absent outside a round.
    pub letter_slots: Option<Vec<LetterSlot>>,
    /// Global clock as `M:SS`, absent before the session starts.
    pub remaining_time_text: Option<String>,
    /// Answer clock as `M:SS`, present only while answering.
    pub question_time_text: Option<String>,
    /// True when a countdown is below its urgency threshold.
    pub is_critical_time: bool,
    /// Which presenter controls are usable right now.
    pub availability: Availability,
}

impl SessionView {
    /// Projects the session into display data.
    pub fn project(session: &Session) -> Self {
        let phase_title = match session {
            Session::Idle => "Welcome".to_string(),
            Session::Finished { .. } => "Finished".to_string(),
            _ => {
                let round = session.round().expect("round phases carry a round");
                format!("Question {}", round.level().number())
            }
        };

        let total_score = match session {
            Session::Idle => None,
            Session::Finished { score, .. } => Some(*score),
            _ => session.round().map(|round| *round.score()),
        };

        let current_word_score = session.round().map(|round| round.rack().word_score());

        let letter_slots = session.round().map(|round| round.rack().slots().to_vec());

        let global_remaining = match session {
            Session::Idle => None,
            Session::Finished {
                global_remaining, ..
            } => Some(*global_remaining),
            _ => session.round().map(|round| *round.global_remaining()),
        };

        let remaining_time_text = global_remaining.map(format_time);

        let question_time_text = match session {
            Session::Answering(round) => Some(format_time(*round.question_remaining())),
            _ => None,
        };

        let global_critical = global_remaining.is_some_and(|s| s < GLOBAL_CRITICAL);
        let question_critical = matches!(
            session,
            Session::Answering(round) if *round.question_remaining() < QUESTION_CRITICAL
        );

        Self {
            phase_title,
            total_score,
            current_word_score,
            letter_slots,
            remaining_time_text,
            question_time_text,
            is_critical_time: global_critical || question_critical,
            availability: session.availability(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use rand::{rngs::StdRng, SeedableRng};

    fn started() -> (Session, StdRng) {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = Session::new();
        session.apply(Command::Start, &mut rng);
        (session, rng)
    }

    #[test]
    fn test_idle_projection() {
        let view = SessionView::project(&Session::new());
        assert_eq!(view.phase_title, "Welcome");
        assert_eq!(view.total_score, None);
        assert_eq!(view.remaining_time_text, None);
        assert!(!view.is_critical_time);
        assert!(view.availability.start);
    }

    #[test]
    fn test_open_question_projection() {
        let (session, _) = started();
        let view = SessionView::project(&session);
        assert_eq!(view.phase_title, "Question 1");
        assert_eq!(view.total_score, Some(0));
        assert_eq!(view.current_word_score, Some(400));
        assert_eq!(view.remaining_time_text.as_deref(), Some("5:00"));
        assert_eq!(view.question_time_text, None);
        assert_eq!(view.letter_slots.as_ref().map(Vec::len), Some(4));
    }

    #[test]
    fn test_revealed_projection() {
        let (mut session, mut rng) = started();
        session.apply(Command::Answer, &mut rng);
        session.apply(Command::Correct, &mut rng);

        let view = SessionView::project(&session);
        assert_eq!(view.phase_title, "Question 1");
        assert_eq!(view.total_score, Some(400));
        assert_eq!(view.current_word_score, Some(400));
        assert_eq!(view.remaining_time_text.as_deref(), Some("5:00"));
        assert_eq!(view.question_time_text, None);
        assert!(!view.is_critical_time);
        // Only advancing or abandoning is possible once revealed.
        assert!(view.availability.next);
        assert!(view.availability.reset);
        assert!(!view.availability.borrow);
        assert!(!view.availability.answer);
        assert!(!view.availability.correct);
    }

    #[test]
    fn test_finished_projection_after_global_expiry() {
        let (mut session, mut rng) = started();
        for _ in 0..301 {
            session.apply(Command::GlobalTick, &mut rng);
        }

        let view = SessionView::project(&session);
        assert_eq!(view.phase_title, "Finished");
        assert_eq!(view.total_score, Some(-400));
        assert_eq!(view.current_word_score, None);
        assert_eq!(view.letter_slots, None);
        assert_eq!(view.remaining_time_text.as_deref(), Some("0:00"));
        assert_eq!(view.question_time_text, None);
        assert!(view.is_critical_time);
        assert!(view.availability.reset);
        assert!(!view.availability.start);
        assert!(!view.availability.next);
    }

    #[test]
    fn test_critical_flag_on_global_clock() {
        let (mut session, mut rng) = started();
        for _ in 0..271 {
            session.apply(Command::GlobalTick, &mut rng);
        }
        // 300 - 271 = 29 seconds left.
        let view = SessionView::project(&session);
        assert_eq!(view.remaining_time_text.as_deref(), Some("0:29"));
        assert!(view.is_critical_time);
    }

    #[test]
    fn test_critical_flag_on_answer_clock() {
        let (mut session, mut rng) = started();
        session.apply(Command::Answer, &mut rng);
        for _ in 0..21 {
            session.apply(Command::QuestionTick, &mut rng);
        }
        // 30 - 21 = 9 seconds left on the answer clock.
        let view = SessionView::project(&session);
        assert_eq!(view.question_time_text.as_deref(), Some("0:09"));
        assert!(view.is_critical_time);
    }

    #[test]
    fn test_view_serializes() {
        let (session, _) = started();
        let view = SessionView::project(&session);
        let json = serde_json::to_string(&view).expect("view serializes");
        let back: SessionView = serde_json::from_str(&json).expect("view deserializes");
        assert_eq!(view, back);
    }
}
