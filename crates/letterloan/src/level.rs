//! Question levels and countdown constants.
//!
//! A playthrough runs 14 questions of increasing word length: two each of
//! 4 through 10 letters. The index-to-length table is fixed and an index
//! outside it is an internal invariant violation, never a user condition.

use serde::{Deserialize, Serialize};

/// Seconds on the global clock at the start of a session.
pub const GLOBAL_SECONDS: u32 = 5 * 60;

/// Seconds on the per-question clock when an answer attempt begins.
pub const QUESTION_SECONDS: u32 = 30;

/// Points per letter that was never borrowed.
pub const LETTER_VALUE: i32 = 100;

/// One of the 14 ordered questions in a playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Level(usize);

impl Level {
    /// Number of questions in a playthrough.
    pub const COUNT: usize = 14;

    /// The first question.
    pub const FIRST: Level = Level(0);

    /// Creates a level from a zero-based question index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..14`. Reaching this is a bug in the
    /// transition logic, so continuing would corrupt the word model.
    pub fn new(index: usize) -> Self {
        assert!(index < Self::COUNT, "question index {index} out of range");
        Level(index)
    }

    /// Zero-based question index.
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based question number, for display.
    pub fn number(self) -> usize {
        self.0 + 1
    }

    /// Word length for this question: indices pair up as
    /// (0,1)→4, (2,3)→5, ... (12,13)→10.
    pub fn num_letters(self) -> usize {
        match self.0 {
            0 | 1 => 4,
            2 | 3 => 5,
            4 | 5 => 6,
            6 | 7 => 7,
            8 | 9 => 8,
            10 | 11 => 9,
            12 | 13 => 10,
            out => panic!("question index {out} out of range"),
        }
    }

    /// True for the 14th question.
    pub fn is_last(self) -> bool {
        self.0 == Self::COUNT - 1
    }

    /// The following question, or `None` after the last one.
    pub fn next(self) -> Option<Level> {
        if self.is_last() {
            None
        } else {
            Some(Level(self.0 + 1))
        }
    }
}

/// Formats a second count as `M:SS` with zero-padded seconds.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_table() {
        let expected = [4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10];
        for (index, len) in expected.iter().enumerate() {
            assert_eq!(Level::new(index).num_letters(), *len);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_panics() {
        Level::new(14);
    }

    #[test]
    fn test_level_ordering() {
        let mut level = Level::FIRST;
        let mut visited = 1;
        while let Some(next) = level.next() {
            assert_eq!(next.index(), level.index() + 1);
            level = next;
            visited += 1;
        }
        assert_eq!(visited, Level::COUNT);
        assert!(level.is_last());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(5), "0:05");
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(300), "5:00");
    }
}
