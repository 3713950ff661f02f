//! Per-cell feedback states
//!
//! Each board cell carries one of four feedback states. `Empty` is the state
//! of a cell with no letter; the other three are the classic Wordle colors.

use std::fmt;

/// Feedback state of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    /// No letter entered yet
    #[default]
    Empty,
    /// Gray: this copy of the letter is not in the solution
    Absent,
    /// Yellow: letter is in the solution but not at this position
    Present,
    /// Green: letter is at this position in the solution
    Correct,
}

impl Feedback {
    /// Whether this feedback confirms the letter is in the solution
    #[inline]
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Present | Self::Correct)
    }

    /// Parse a feedback character
    ///
    /// Accepts:
    /// - `G`/`g`/🟩 for green (correct position)
    /// - `Y`/`y`/🟨 for yellow (present elsewhere)
    /// - `-`/`_`/⬜ for gray (absent)
    /// - `.` for an empty cell
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            '.' => Some(Self::Empty),
            _ => None,
        }
    }

    /// The canonical character for this feedback state
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Absent => '-',
            Self::Present => 'y',
            Self::Correct => 'g',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_accepts_letters_and_emoji() {
        assert_eq!(Feedback::from_char('G'), Some(Feedback::Correct));
        assert_eq!(Feedback::from_char('g'), Some(Feedback::Correct));
        assert_eq!(Feedback::from_char('🟩'), Some(Feedback::Correct));
        assert_eq!(Feedback::from_char('Y'), Some(Feedback::Present));
        assert_eq!(Feedback::from_char('🟨'), Some(Feedback::Present));
        assert_eq!(Feedback::from_char('-'), Some(Feedback::Absent));
        assert_eq!(Feedback::from_char('_'), Some(Feedback::Absent));
        assert_eq!(Feedback::from_char('⬜'), Some(Feedback::Absent));
        assert_eq!(Feedback::from_char('.'), Some(Feedback::Empty));
    }

    #[test]
    fn from_char_rejects_unknown() {
        assert_eq!(Feedback::from_char('x'), None);
        assert_eq!(Feedback::from_char('0'), None);
        assert_eq!(Feedback::from_char(' '), None);
    }

    #[test]
    fn is_confirmed() {
        assert!(Feedback::Correct.is_confirmed());
        assert!(Feedback::Present.is_confirmed());
        assert!(!Feedback::Absent.is_confirmed());
        assert!(!Feedback::Empty.is_confirmed());
    }

    #[test]
    fn roundtrip_canonical_chars() {
        for fb in [
            Feedback::Empty,
            Feedback::Absent,
            Feedback::Present,
            Feedback::Correct,
        ] {
            assert_eq!(Feedback::from_char(fb.as_char()), Some(fb));
        }
    }
}
