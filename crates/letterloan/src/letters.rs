//! The letter rack: per-question slot states and scoring.
//!
//! Each question owns a rack of slots, one per letter of the answer word.
//! A slot that is borrowed stays marked borrowed for the rest of the
//! question, no matter what is later typed into it; the word score only
//! counts slots that never passed through a borrow.

use crate::level::{Level, LETTER_VALUE};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One position in the current question's word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterSlot {
    /// Not yet revealed to the contestant.
    Unrevealed,
    /// Revealed, awaiting the presenter to key in the actual letter.
    Pending {
        /// Whether the reveal came from a borrow (costs score) or from a
        /// post-answer placeholder (display only).
        borrowed: bool,
    },
    /// Letter keyed in by the presenter.
    Filled {
        /// The displayed letter.
        ch: char,
        /// Carried over from the `Pending` state that preceded the fill.
        borrowed: bool,
    },
}

impl LetterSlot {
    /// True if this slot was ever borrowed.
    pub fn is_borrowed(self) -> bool {
        matches!(
            self,
            LetterSlot::Pending { borrowed: true } | LetterSlot::Filled { borrowed: true, .. }
        )
    }

    /// True if the slot has not been revealed at all.
    pub fn is_unrevealed(self) -> bool {
        matches!(self, LetterSlot::Unrevealed)
    }

    /// True if the slot is waiting for a key fill.
    pub fn is_pending(self) -> bool {
        matches!(self, LetterSlot::Pending { .. })
    }
}

/// Ordered letter slots for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRack {
    slots: Vec<LetterSlot>,
}

impl LetterRack {
    /// Creates an all-unrevealed rack sized for the given question.
    pub fn for_level(level: Level) -> Self {
        Self {
            slots: vec![LetterSlot::Unrevealed; level.num_letters()],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the rack has no slots. Never the case for a valid level,
    /// but clippy insists `len` comes with `is_empty`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in word order.
    pub fn slots(&self) -> &[LetterSlot] {
        &self.slots
    }

    /// True while at least one slot can still be borrowed.
    pub fn has_unrevealed(&self) -> bool {
        self.slots.iter().any(|slot| slot.is_unrevealed())
    }

    /// Count of slots that never passed through a borrow.
    pub fn never_borrowed(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_borrowed()).count()
    }

    /// Points this question is currently worth: 100 per never-borrowed slot.
    pub fn word_score(&self) -> i32 {
        LETTER_VALUE * self.never_borrowed() as i32
    }

    /// Borrows one slot, chosen uniformly among the unrevealed positions,
    /// and returns its index. No-op returning `None` when nothing is left
    /// to borrow; callers guard this by disabling the command.
    pub fn borrow_random(&mut self, rng: &mut impl Rng) -> Option<usize> {
        let eligible: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_unrevealed())
            .map(|(index, _)| index)
            .collect();

        if eligible.is_empty() {
            debug!("borrow requested with no unrevealed slots");
            return None;
        }

        let position = eligible[rng.gen_range(0..eligible.len())];
        self.slots[position] = LetterSlot::Pending { borrowed: true };
        debug!(position, "letter borrowed");
        Some(position)
    }

    /// Fills the earliest pending slot with `ch`, preserving its borrowed
    /// flag, and returns the index. `None` when nothing is pending.
    pub fn fill_next(&mut self, ch: char) -> Option<usize> {
        let position = self.slots.iter().position(|slot| slot.is_pending())?;
        let borrowed = self.slots[position].is_borrowed();
        self.slots[position] = LetterSlot::Filled { ch, borrowed };
        Some(position)
    }

    /// Turns every unrevealed slot into a never-borrowed pending
    /// placeholder. Used after a correct answer so the presenter can key
    /// in the full word for display; scoring is already settled.
    pub fn reveal_placeholders(&mut self) {
        for slot in &mut self.slots {
            if slot.is_unrevealed() {
                *slot = LetterSlot::Pending { borrowed: false };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_borrow_shrinks_unrevealed_by_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rack = LetterRack::for_level(Level::new(0));
        for remaining in (0..4).rev() {
            assert!(rack.borrow_random(&mut rng).is_some());
            let unrevealed = rack.slots().iter().filter(|s| s.is_unrevealed()).count();
            assert_eq!(unrevealed, remaining);
        }
        assert!(rack.borrow_random(&mut rng).is_none());
    }

    #[test]
    fn test_borrow_only_picks_unrevealed_positions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rack = LetterRack::for_level(Level::new(12));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10 {
            let position = rack.borrow_random(&mut rng).expect("slot available");
            assert!(seen.insert(position), "position {position} borrowed twice");
        }
    }

    #[test]
    fn test_word_score_ignores_fill_content() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rack = LetterRack::for_level(Level::new(0));
        assert_eq!(rack.word_score(), 400);

        rack.borrow_random(&mut rng);
        assert_eq!(rack.word_score(), 300);

        // Keying in the letter does not give the point value back.
        rack.fill_next('A');
        assert_eq!(rack.word_score(), 300);
    }

    #[test]
    fn test_fill_targets_earliest_pending() {
        let mut rack = LetterRack::for_level(Level::new(0));
        rack.reveal_placeholders();
        assert_eq!(rack.fill_next('B'), Some(0));
        assert_eq!(rack.fill_next('A'), Some(1));
        assert_eq!(rack.slots()[0], LetterSlot::Filled { ch: 'B', borrowed: false });
    }

    #[test]
    fn test_filled_slot_keeps_borrowed_flag() {
        let borrowed = LetterSlot::Filled { ch: 'A', borrowed: true };
        let placeholder = LetterSlot::Filled { ch: 'A', borrowed: false };
        assert!(borrowed.is_borrowed());
        assert!(!placeholder.is_borrowed());
        assert!(LetterSlot::Pending { borrowed: true }.is_borrowed());
        assert!(!LetterSlot::Pending { borrowed: false }.is_borrowed());
        assert!(!LetterSlot::Unrevealed.is_borrowed());
    }

    #[test]
    fn test_placeholders_do_not_count_as_borrowed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rack = LetterRack::for_level(Level::new(2));
        rack.borrow_random(&mut rng);
        rack.reveal_placeholders();
        assert_eq!(rack.never_borrowed(), 4);
        assert_eq!(rack.word_score(), 400);
        assert!(!rack.has_unrevealed());
    }
}
