//! Hint calculation for Wordle guesses.
//!
//! This module computes the hint pattern (green/yellow/gray) a guess would
//! receive against a candidate answer, and enumerates the full space of
//! possible patterns.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::WORD_LENGTH;

/// The hint for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterHint {
    /// Letter not in word (gray/black)
    Absent,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Correct letter in correct position (green)
    Correct,
}

impl LetterHint {
    /// Convert to the single-character text encoding (`b`/`y`/`g`).
    pub fn to_char(self) -> char {
        match self {
            LetterHint::Absent => 'b',
            LetterHint::Present => 'y',
            LetterHint::Correct => 'g',
        }
    }

    /// Parse from the text encoding: b=black, y=yellow, g=green.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'b' => Some(LetterHint::Absent),
            'y' => Some(LetterHint::Present),
            'g' => Some(LetterHint::Correct),
            _ => None,
        }
    }
}

/// Errors produced when parsing a hint string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HintParseError {
    #[error("wrong size: expected {WORD_LENGTH}, got {0}")]
    WrongLength(usize),

    #[error("unexpected hint character {0:?}, use b (black), y (yellow), g (green)")]
    BadChar(char),
}

/// A complete hint for a 5-letter guess: one [`LetterHint`] per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordHint(pub [LetterHint; WORD_LENGTH]);

impl WordHint {
    /// The hint indicating all correct (winning).
    pub const ALL_CORRECT: Self = Self([LetterHint::Correct; WORD_LENGTH]);

    /// Total number of possible hints (3^5).
    pub const COUNT: usize = 243;

    /// Calculate the hint for a guess against an answer word.
    ///
    /// Standard Wordle rules, duplicate-aware: a pass over exact matches
    /// first, then a pass that marks a letter Present only while the answer
    /// still has unconsumed occurrences of it. An answer letter is never
    /// credited to two guess positions.
    pub fn calculate(guess: &str, answer: &str) -> Self {
        let guess = guess.as_bytes();
        let answer = answer.as_bytes();

        debug_assert_eq!(guess.len(), WORD_LENGTH);
        debug_assert_eq!(answer.len(), WORD_LENGTH);

        let mut hints = [LetterHint::Absent; WORD_LENGTH];
        let mut unconsumed = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                hints[i] = LetterHint::Correct;
            } else {
                unconsumed[(answer[i] - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if hints[i] != LetterHint::Correct {
                let letter = (guess[i] - b'a') as usize;
                if unconsumed[letter] > 0 {
                    hints[i] = LetterHint::Present;
                    unconsumed[letter] -= 1;
                }
            }
        }

        Self(hints)
    }

    /// The hint at a given index in odometer order: each position is a base-3
    /// digit (Absent < Present < Correct) with position 0 least significant.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::COUNT);

        let mut remainder = index;
        let mut hints = [LetterHint::Absent; WORD_LENGTH];
        for hint in hints.iter_mut() {
            *hint = match remainder % 3 {
                0 => LetterHint::Absent,
                1 => LetterHint::Present,
                2 => LetterHint::Correct,
                _ => unreachable!(),
            };
            remainder /= 3;
        }
        Self(hints)
    }

    /// All 3^5 possible hints, in odometer order.
    pub fn all() -> Vec<Self> {
        (0..Self::COUNT).map(Self::from_index).collect()
    }

    /// Check if this hint represents a win (all correct).
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }
}

impl FromStr for WordHint {
    type Err = HintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != WORD_LENGTH {
            return Err(HintParseError::WrongLength(s.chars().count()));
        }

        let mut hints = [LetterHint::Absent; WORD_LENGTH];
        for (hint, c) in hints.iter_mut().zip(s.chars()) {
            *hint = LetterHint::from_char(c).ok_or(HintParseError::BadChar(c))?;
        }
        Ok(Self(hints))
    }
}

impl fmt::Display for WordHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in self.0 {
            write!(f, "{}", hint.to_char())?;
        }
        Ok(())
    }
}
